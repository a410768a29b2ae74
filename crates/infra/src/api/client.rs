//! Wallet API client
//!
//! Holds the authenticated HTTP session and the wallet ID resolved at
//! construction. Every operation issues one request, maps 401/403 to typed
//! errors and returns the parsed JSON body.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use qiwi_domain::constants::PROFILE_PATH;
use qiwi_domain::{
    ErrorPayload, ProfileIdentity, ProfileSections, QiwiClientConfig, QiwiError, QueryPairs, Result,
};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

use super::auth::BearerToken;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// HTTP verb accepted by [`QiwiClient::call_method`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpVerb {
    Get,
    Post,
}

impl FromStr for HttpVerb {
    type Err = QiwiError;

    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("get") {
            Ok(Self::Get)
        } else if s.eq_ignore_ascii_case("post") {
            Ok(Self::Post)
        } else {
            Err(QiwiError::InvalidArgument(format!("Unexpected method: {s}")))
        }
    }
}

/// Authenticated connection to the API origin
pub(crate) struct Session {
    pub(crate) http: HttpClient,
    token: BearerToken,
    pub(crate) config: QiwiClientConfig,
}

impl Session {
    fn new(token: BearerToken, config: QiwiClientConfig) -> Result<Self> {
        let mut builder = HttpClient::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self { http: builder.build()?, token, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.endpoint(path)).header(AUTHORIZATION, self.token.header_value())
    }

    pub(crate) async fn get(&self, path: &str, query: &QueryPairs) -> Result<Value> {
        self.dispatch(self.authorized(Method::GET, path).query(query)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value> {
        self.dispatch(self.authorized(Method::POST, path).json(body)).await
    }

    /// Send one request and decode the body, mapping error statuses.
    pub(crate) async fn dispatch(&self, request: RequestBuilder) -> Result<Value> {
        let response = self.http.send(request).await?;
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let body = error_body(response.text().await);
            return Err(map_status_error(status, &url, body));
        }

        read_json(response).await
    }
}

/// Parse a response body; an empty body is JSON `null`.
async fn read_json(response: Response) -> Result<Value> {
    let text = response.text().await.map_err(|err| QiwiError::from(InfraError::from(err)))?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|err| InfraError::from(err).into())
}

/// Body of an error response; a failed read is described in its place.
fn error_body(read: reqwest::Result<String>) -> String {
    read.unwrap_or_else(|err| {
        let err = QiwiError::from(InfraError::from(err));
        warn!(error = %err, "failed to read error response body");
        format!("failed to read response body: {err}")
    })
}

fn map_status_error(status: StatusCode, url: &str, body: String) -> QiwiError {
    match status {
        StatusCode::UNAUTHORIZED => {
            warn!(%url, "access token rejected");
            QiwiError::InvalidCredentials
        }
        StatusCode::FORBIDDEN => {
            warn!(%url, "access token lacks permission");
            QiwiError::InsufficientPermission
        }
        _ => match serde_json::from_str::<ErrorPayload>(&body) {
            Ok(payload) => {
                warn!(%url, %status, message = %payload.message, "service returned an error");
                QiwiError::RemoteApi(payload.message)
            }
            Err(_) => {
                warn!(%url, %status, "unexpected status");
                QiwiError::UnexpectedStatus { status: status.as_u16(), body }
            }
        },
    }
}

/// Client for the QIWI personal wallet API
///
/// Construction resolves the wallet ID with one profile request, so it is
/// fallible I/O. The connection pool is released when the client is dropped.
pub struct QiwiClient {
    pub(crate) session: Session,
    wallet_id: u64,
}

impl QiwiClient {
    /// Connect with the default endpoints.
    ///
    /// # Errors
    ///
    /// [`QiwiError::InvalidCredentials`] if the token is rejected,
    /// [`QiwiError::InsufficientPermission`] if it cannot read the profile.
    pub async fn connect(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).connect().await
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> QiwiClientBuilder {
        QiwiClientBuilder::default()
    }

    /// Numeric wallet ID (the account's phone number)
    pub fn wallet_id(&self) -> u64 {
        self.wallet_id
    }

    pub fn config(&self) -> &QiwiClientConfig {
        &self.session.config
    }

    /// Call any API method.
    ///
    /// # Arguments
    ///
    /// * `path` - Part of the URL after the API origin
    /// * `payload` - Query parameters for GET (object only), JSON body for POST
    /// * `verb` - `get` or `post`, case-insensitive
    ///
    /// # Errors
    ///
    /// [`QiwiError::InvalidArgument`] for an unknown verb or a non-object GET
    /// payload (nothing is sent), plus the status errors of every call.
    #[instrument(skip(self, payload), fields(path = %path))]
    pub async fn call_method(
        &self,
        path: &str,
        payload: Option<&Value>,
        verb: &str,
    ) -> Result<Value> {
        match verb.parse::<HttpVerb>()? {
            HttpVerb::Get => {
                let query = match payload {
                    None => QueryPairs::new(),
                    Some(payload) => query_from_json(payload)?,
                };
                self.session.get(path, &query).await
            }
            HttpVerb::Post => {
                let empty = Value::Object(serde_json::Map::new());
                self.session.post(path, payload.unwrap_or(&empty)).await
            }
        }
    }

    /// API path with the wallet ID substituted.
    pub(crate) fn wallet_path(&self, template: &str) -> String {
        template.replace("{wallet}", &self.wallet_id.to_string())
    }
}

impl fmt::Display for QiwiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Wallet {}>", self.wallet_id)
    }
}

impl fmt::Debug for QiwiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QiwiClient")
            .field("wallet_id", &self.wallet_id)
            .field("config", &self.session.config)
            .finish_non_exhaustive()
    }
}

/// Flatten a JSON object into query pairs, keeping key order.
fn query_from_json(payload: &Value) -> Result<QueryPairs> {
    let Value::Object(fields) = payload else {
        return Err(QiwiError::InvalidArgument(
            "GET payload must be a JSON object of query parameters".into(),
        ));
    };

    Ok(fields
        .iter()
        .filter_map(|(key, value)| {
            let value = match value {
                Value::Null => return None,
                Value::String(text) => text.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), value))
        })
        .collect())
}

/// Builder for [`QiwiClient`]
#[derive(Debug, Default)]
pub struct QiwiClientBuilder {
    token: Option<String>,
    config: Option<QiwiClientConfig>,
}

impl QiwiClientBuilder {
    /// Set the access token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set endpoints and transport settings
    pub fn config(mut self, config: QiwiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the client and resolve the wallet ID.
    ///
    /// # Errors
    ///
    /// [`QiwiError::Config`] if no token was set, plus the errors of
    /// [`QiwiClient::connect`].
    #[instrument(skip(self))]
    pub async fn connect(self) -> Result<QiwiClient> {
        let token = self.token.ok_or_else(|| QiwiError::Config("access token not set".into()))?;
        let session = Session::new(BearerToken::new(token)?, self.config.unwrap_or_default())?;

        debug!(base_url = %session.config.api_base_url, "resolving wallet id");
        let profile = session.get(PROFILE_PATH, &ProfileSections::AUTH_ONLY.query()).await?;
        let identity: ProfileIdentity = serde_json::from_value(profile).map_err(|err| {
            QiwiError::InvalidResponse(format!("profile has no authInfo.personId: {err}"))
        })?;

        let wallet_id = identity.auth_info.person_id;
        info!(wallet_id, "wallet resolved");

        Ok(QiwiClient { session, wallet_id })
    }
}
