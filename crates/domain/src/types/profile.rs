//! Profile and identification types

use serde::{Deserialize, Serialize};

use super::history::QueryPairs;

/// Sections requested from `person-profile/v1/profile/current`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSections {
    pub auth_info: bool,
    pub contract_info: bool,
    pub user_info: bool,
}

impl Default for ProfileSections {
    fn default() -> Self {
        Self { auth_info: true, contract_info: true, user_info: true }
    }
}

impl ProfileSections {
    /// Only the auth section, which carries the wallet ID.
    pub const AUTH_ONLY: Self = Self { auth_info: true, contract_info: false, user_info: false };

    pub fn query(self) -> QueryPairs {
        vec![
            ("authInfoEnabled".to_string(), self.auth_info.to_string()),
            ("contractInfoEnabled".to_string(), self.contract_info.to_string()),
            ("userInfoEnabled".to_string(), self.user_info.to_string()),
        ]
    }
}

/// Minimal view of a profile response used to resolve the wallet ID
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileIdentity {
    pub auth_info: AuthInfo,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthInfo {
    /// Wallet number, e.g. `79991234567`
    pub person_id: u64,
}

/// Personal data submitted for simplified identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    /// Series and number, digits only
    pub passport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snils: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oms: Option<String>,
}
