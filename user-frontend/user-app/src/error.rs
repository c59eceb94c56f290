use std::{error, fmt::Display, rc::Rc};

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum AppError {
    #[error("HTTP {status} {status_text}")]
    Http { status: u16, status_text: String },
    #[error("JSON {0}")]
    Json(String),
    #[error("{0}")]
    SystemError(#[from] SystemError),
}

/// Wraps the error types that aren't `Clone` so an `AppError` can live inside a signal.
#[derive(Clone, Debug)]
pub enum SystemError {
    Message(String),
    GlooError(Rc<gloo_net::Error>),
}

impl From<gloo_net::Error> for SystemError {
    fn from(value: gloo_net::Error) -> Self {
        Self::GlooError(Rc::new(value))
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            // gloo reports body parse failures through the same error type
            gloo_net::Error::SerdeError(e) => Self::Json(e.to_string()),
            other => Self::SystemError(other.into()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}

impl Display for SystemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SystemError::Message(message) => write!(f, "{}", message),
            SystemError::GlooError(g) => write!(f, "{}", g),
        }
    }
}

impl error::Error for SystemError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            SystemError::Message(_) => None,
            SystemError::GlooError(gloo) => Some(gloo.as_ref()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn http_error_reads_like_a_status_line() {
        let error = AppError::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP 503 Service Unavailable");
    }

    #[test]
    fn json_errors_keep_the_reason() {
        let error: AppError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(error.to_string().starts_with("JSON "));
    }

    #[test]
    fn gloo_errors_become_system_errors() {
        let error = AppError::from(gloo_net::Error::GlooError("connection refused".to_string()));
        assert!(matches!(
            error,
            AppError::SystemError(SystemError::GlooError(_))
        ));
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn gloo_body_errors_become_json_errors() {
        let serde = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::from(gloo_net::Error::SerdeError(serde));
        assert!(matches!(error, AppError::Json(_)));
    }

    #[test]
    fn system_message() {
        let error = AppError::from(SystemError::Message("offline".to_string()));
        assert_eq!(error.to_string(), "offline");
    }
}
