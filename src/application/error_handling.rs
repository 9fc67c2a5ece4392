// src/application/error_handling.rs
//
// Error responses for the presentation layer
//
// - Maps internal errors to user-facing text
// - Never exposes storage internals
// - Logs what it hides

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::error::AppError;

/// Standard error response for the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    NotFound,

    /// Field input refused (name, price, id)
    Validation,

    /// Identifier already taken
    Conflict,

    /// Operation not valid in the current edit state
    InvalidState,

    Database,

    Internal,
}

impl ErrorResponse {
    fn new(error_type: ErrorType, message: impl Into<String>, details: Option<String>) -> Self {
        Self {
            success: false,
            error_type,
            message: message.into(),
            details,
        }
    }

    pub fn from_domain_error(error: &DomainError) -> Self {
        match error {
            DomainError::DuplicateId(id) => {
                Self::new(ErrorType::Conflict, "Product ID already exists", Some(id.clone()))
            }
            DomainError::EmptyId => Self::new(ErrorType::Validation, "Product ID must not be empty", None),
            DomainError::EmptyName => {
                Self::new(ErrorType::Validation, "Product name must not be empty", None)
            }
            DomainError::InvalidPrice(_) => Self::new(
                ErrorType::Validation,
                "Product price must be a non-negative number",
                None,
            ),
            DomainError::NotEditing => {
                Self::new(ErrorType::InvalidState, "No product is being edited", None)
            }
            DomainError::NotFound(id) => Self::new(ErrorType::NotFound, "Product not found", Some(id.clone())),
        }
    }

    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(ErrorType::NotFound, "Resource not found", None),

            AppError::Domain(domain_error) => Self::from_domain_error(&domain_error),

            AppError::Database(db_error) => {
                log::error!("Database error: {:?}", db_error);
                Self::new(
                    ErrorType::Database,
                    "Database operation failed",
                    Some("Check logs for details".to_string()),
                )
            }

            AppError::Pool(pool_error) => {
                log::error!("Connection pool error: {}", pool_error);
                Self::new(ErrorType::Database, "Database connection failed", None)
            }

            AppError::Serialization(serde_error) => {
                log::error!("Serialization error: {:?}", serde_error);
                Self::new(ErrorType::Internal, "Data serialization failed", None)
            }

            AppError::Io(io_error) => {
                log::error!("IO error: {:?}", io_error);
                Self::new(ErrorType::Internal, "File system operation failed", Some(io_error.to_string()))
            }

            AppError::Other(message) => {
                log::error!("Other error: {}", message);
                Self::new(ErrorType::Internal, message, None)
            }
        }
    }

    pub fn not_found(resource: &str) -> Self {
        Self::new(ErrorType::NotFound, format!("{} not found", resource), None)
    }
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self::from_app_error(error)
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(error: DomainError) -> Self {
        Self::from_domain_error(&error)
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ErrorResponse {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages() {
        let cases = [
            (DomainError::DuplicateId("a".into()), ErrorType::Conflict, "Product ID already exists"),
            (DomainError::EmptyName, ErrorType::Validation, "Product name must not be empty"),
            (
                DomainError::InvalidPrice(-1.0),
                ErrorType::Validation,
                "Product price must be a non-negative number",
            ),
            (DomainError::NotEditing, ErrorType::InvalidState, "No product is being edited"),
        ];

        for (error, error_type, message) in cases {
            let response = ErrorResponse::from(error);
            assert!(!response.success);
            assert_eq!(response.error_type, error_type);
            assert_eq!(response.message, message);
        }
    }

    #[test]
    fn test_database_error_hides_details() {
        let response = ErrorResponse::from(AppError::Database(rusqlite::Error::InvalidQuery));
        assert_eq!(response.error_type, ErrorType::Database);
        assert_eq!(response.message, "Database operation failed");
    }

    #[test]
    fn test_serialization() {
        let error = ErrorResponse::not_found("Product");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("not_found"));
        assert!(json.contains("Product not found"));
    }
}
