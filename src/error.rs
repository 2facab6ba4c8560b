//! Error types for the adyen-checkout library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Main error type for checkout operations
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Payment method not supported
    #[error("Payment method not supported: {method}")]
    UnsupportedPaymentMethod { method: String },

    /// Component could not be mounted into its container
    #[error("Mount failed: {message}")]
    MountFailed { message: String },

    /// Error reported by the hosted component
    #[error("Component error {code}: {message}")]
    ComponentFailure { code: String, message: String },
}

impl CheckoutError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unsupported payment method error
    pub fn unsupported_payment_method(method: impl Into<String>) -> Self {
        Self::UnsupportedPaymentMethod {
            method: method.into(),
        }
    }

    /// Create a mount failed error
    pub fn mount_failed(message: impl Into<String>) -> Self {
        Self::MountFailed {
            message: message.into(),
        }
    }
}

impl From<ComponentError> for CheckoutError {
    fn from(error: ComponentError) -> Self {
        Self::ComponentFailure {
            code: error.error_code,
            message: error.message,
        }
    }
}

/// Error payload reported by a hosted component
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{error_code}: {message}")]
pub struct ComponentError {
    /// Machine readable error code
    #[serde(rename = "errorCode")]
    pub error_code: String,
    /// Human readable description
    pub message: String,
}
