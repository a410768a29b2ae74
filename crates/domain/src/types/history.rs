//! Payment history and statistics queries

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::{Operation, Source};
use crate::constants::{DEFAULT_HISTORY_ROWS, MAX_HISTORY_ROWS};
use crate::utils::dates::normalize_date;
use crate::{QiwiError, Result};

/// Ordered query parameters
pub type QueryPairs = Vec<(String, String)>;

/// Filter value given either as a closed-set member or as a raw name
///
/// Raw names are checked against the set when the query is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue<T> {
    Known(T),
    Raw(String),
}

impl<T> FilterValue<T>
where
    T: Copy + FromStr<Err = QiwiError>,
{
    /// The closed-set member this value stands for.
    ///
    /// # Errors
    /// [`QiwiError::InvalidArgument`] for a raw name outside the set.
    pub fn resolve(&self) -> Result<T> {
        match self {
            Self::Known(value) => Ok(*value),
            Self::Raw(name) => name.parse(),
        }
    }
}

impl From<Operation> for FilterValue<Operation> {
    fn from(value: Operation) -> Self {
        Self::Known(value)
    }
}

impl From<Source> for FilterValue<Source> {
    fn from(value: Source) -> Self {
        Self::Known(value)
    }
}

impl<T> From<&str> for FilterValue<T> {
    fn from(name: &str) -> Self {
        Self::Raw(name.to_string())
    }
}

impl<T> From<String> for FilterValue<T> {
    fn from(name: String) -> Self {
        Self::Raw(name)
    }
}

/// Continuation point returned by a previous history page
///
/// The service only accepts the transaction date and ID together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryCursor {
    /// `nextTxnDate` from the previous response, sent verbatim
    pub txn_date: String,
    /// `nextTxnId` from the previous response
    pub txn_id: u64,
}

/// Filter shared by history and statistics queries
///
/// Operation and sources accept typed values ([`Operation`], [`Source`]) or
/// raw names; raw names are validated when the query is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Number of transactions per page (history only), 1..=50
    pub rows: u8,
    pub operation: FilterValue<Operation>,
    pub sources: Vec<FilterValue<Source>>,
    /// Period start, `YYYY-MM-DD-<UTC offset>`
    pub from_date: Option<String>,
    /// Period end, `YYYY-MM-DD-<UTC offset>`
    pub to_date: Option<String>,
    /// Pagination (history only)
    pub cursor: Option<HistoryCursor>,
}

impl Default for HistoryFilter {
    fn default() -> Self {
        Self {
            rows: DEFAULT_HISTORY_ROWS,
            operation: FilterValue::Known(Operation::All),
            sources: Vec::new(),
            from_date: None,
            to_date: None,
            cursor: None,
        }
    }
}

impl HistoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, rows: u8) -> Self {
        self.rows = rows;
        self
    }

    pub fn operation(mut self, operation: impl Into<FilterValue<Operation>>) -> Self {
        self.operation = operation.into();
        self
    }

    pub fn source(mut self, source: impl Into<FilterValue<Source>>) -> Self {
        self.sources.push(source.into());
        self
    }

    pub fn sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<FilterValue<Source>>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    pub fn period(mut self, from_date: impl Into<String>, to_date: impl Into<String>) -> Self {
        self.from_date = Some(from_date.into());
        self.to_date = Some(to_date.into());
        self
    }

    pub fn after(mut self, cursor: HistoryCursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    /// Query parameters for `payment-history/.../payments`.
    ///
    /// # Errors
    /// [`QiwiError::InvalidArgument`] for an unknown operation, the first
    /// unknown source, rows outside 1..=50, or a malformed date.
    pub fn history_query(&self) -> Result<QueryPairs> {
        let (operation, sources) = self.validate_filters()?;
        if !(1..=MAX_HISTORY_ROWS).contains(&self.rows) {
            return Err(QiwiError::InvalidArgument(format!(
                "Unexpected rows: {} (expected 1..={MAX_HISTORY_ROWS})",
                self.rows
            )));
        }

        let mut query = vec![
            ("rows".to_string(), self.rows.to_string()),
            ("operation".to_string(), operation.to_string()),
        ];
        self.push_period(&mut query)?;
        if let Some(cursor) = &self.cursor {
            query.push(("nextTxnDate".to_string(), cursor.txn_date.clone()));
            query.push(("nextTxnId".to_string(), cursor.txn_id.to_string()));
        }
        push_sources(&mut query, &sources);

        Ok(query)
    }

    /// Query parameters for `payment-history/.../payments/total`.
    ///
    /// Rows and cursor do not apply to statistics and are ignored.
    ///
    /// # Errors
    /// Same validation as [`HistoryFilter::history_query`] minus rows.
    pub fn statistics_query(&self) -> Result<QueryPairs> {
        let (operation, sources) = self.validate_filters()?;

        let mut query = vec![("operation".to_string(), operation.to_string())];
        self.push_period(&mut query)?;
        push_sources(&mut query, &sources);

        Ok(query)
    }

    /// Operation first, then each source in order.
    fn validate_filters(&self) -> Result<(Operation, Vec<Source>)> {
        let operation = self.operation.resolve()?;
        let sources = self.sources.iter().map(FilterValue::resolve).collect::<Result<Vec<_>>>()?;
        Ok((operation, sources))
    }

    fn push_period(&self, query: &mut QueryPairs) -> Result<()> {
        if let Some(start) = normalize_date(self.from_date.as_deref())? {
            query.push(("startDate".to_string(), start));
        }
        if let Some(end) = normalize_date(self.to_date.as_deref())? {
            query.push(("endDate".to_string(), end));
        }
        Ok(())
    }
}

fn push_sources(query: &mut QueryPairs, sources: &[Source]) {
    for (index, source) in sources.iter().enumerate() {
        query.push((format!("sources[{index}]"), source.to_string()));
    }
}
