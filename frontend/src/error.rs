use leptos::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Please fill in the required fields")]
    MissingFields(Vec<String>),
    #[error("{field}: {reason}")]
    InvalidField { field: String, reason: String },
    #[error("Session {0} was not found")]
    SessionNotFound(String),
    #[error("{0}")]
    LoginFailed(String),
    #[error("Invalid runtime config: {0}")]
    Config(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingFields(_) | AppError::InvalidField { .. } => "VALIDATION_ERROR",
            AppError::SessionNotFound(_) => "NOT_FOUND",
            AppError::LoginFailed(_) => "LOGIN_FAILED",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn login_failed(msg: impl Into<String>) -> Self {
        AppError::LoginFailed(msg.into())
    }

    /// Field names to list under the message, if any.
    pub fn details(&self) -> &[String] {
        match self {
            AppError::MissingFields(fields) => fields,
            _ => &[],
        }
    }
}

impl From<AppError> for String {
    fn from(error: AppError) -> Self {
        error.to_string()
    }
}

impl IntoView for AppError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_group_validation_errors() {
        assert_eq!(
            AppError::MissingFields(vec!["title".into()]).code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::invalid_field("price", "must be a number").code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(AppError::SessionNotFound("BEG_001".into()).code(), "NOT_FOUND");
        assert_eq!(AppError::login_failed("nope").code(), "LOGIN_FAILED");
    }

    #[test]
    fn display_and_details() {
        let err = AppError::MissingFields(vec!["title".into(), "date".into()]);
        assert_eq!(err.details(), &["title".to_string(), "date".to_string()]);
        assert_eq!(
            AppError::SessionNotFound("ADV_123".into()).to_string(),
            "Session ADV_123 was not found"
        );
        assert_eq!(
            String::from(AppError::invalid_field("price", "must be a number")),
            "price: must be a number"
        );
        assert!(AppError::login_failed("x").details().is_empty());
    }
}
