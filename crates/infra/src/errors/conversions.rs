//! Conversions from external infrastructure errors into domain errors.

use qiwi_domain::QiwiError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub QiwiError);

impl From<InfraError> for QiwiError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<QiwiError> for InfraError {
    fn from(value: QiwiError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoQiwiError {
    fn into_qiwi(self) -> QiwiError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → QiwiError */
/* -------------------------------------------------------------------------- */

impl IntoQiwiError for HttpError {
    fn into_qiwi(self) -> QiwiError {
        if self.is_builder() {
            return QiwiError::Config(format!("invalid http request: {self}"));
        }

        if self.is_decode() {
            return QiwiError::InvalidResponse(format!("http body decode failed: {self}"));
        }

        if let Some(status) = self.status() {
            return QiwiError::UnexpectedStatus { status: status.as_u16(), body: self.to_string() };
        }

        if self.is_timeout() {
            return QiwiError::Network(format!("http timeout: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return QiwiError::Network(format!("http connect error: {self}"));
        }

        QiwiError::Network(format!("http error: {self}"))
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        InfraError(err.into_qiwi())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → QiwiError */
/* -------------------------------------------------------------------------- */

impl IntoQiwiError for serde_json::Error {
    fn into_qiwi(self) -> QiwiError {
        QiwiError::InvalidResponse(format!("json error: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(err.into_qiwi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_errors_become_invalid_response() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let infra: InfraError = err.into();
        assert!(matches!(QiwiError::from(infra), QiwiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn connection_refused_becomes_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = reqwest::get(format!("http://{addr}")).await.unwrap_err();
        let infra: InfraError = err.into();
        match QiwiError::from(infra) {
            QiwiError::Network(msg) => assert!(msg.contains("http")),
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn builder_errors_become_config_errors() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let infra: InfraError = err.into();
        assert!(matches!(QiwiError::from(infra), QiwiError::Config(_)));
    }
}
