//! Centralized Error Handling Module
//!
//! Every failure carries a unique error code so logs can be grepped
//! and monitored in production.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - MODEL_xxx: Classifier artifact errors
//! - ABI_xxx: Contract interface errors
//! - API_xxx: API errors
//! - CFG_xxx: Configuration errors

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)?;
        if let Some(source) = &self.source {
            write!(f, ": {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Model Errors
    // ============================================
    /// Artifact file missing or unreadable
    ModelNotFound,
    /// Artifact parsed but structurally invalid
    ModelInvalidFormat,
    /// Classifier failed on a feature vector
    ModelInferenceFailed,

    // ============================================
    // ABI Errors
    // ============================================
    /// ABI file missing or unparseable
    AbiLoadFailed,

    // ============================================
    // API Errors
    // ============================================
    /// Invalid request format
    ApiBadRequest,
    /// Internal server error
    ApiInternalError,

    // ============================================
    // Configuration Errors
    // ============================================
    /// Invalid configuration value
    ConfigInvalidValue,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ModelNotFound => "MODEL_NOT_FOUND",
            Self::ModelInvalidFormat => "MODEL_INVALID_FORMAT",
            Self::ModelInferenceFailed => "MODEL_INFERENCE_FAILED",

            Self::AbiLoadFailed => "ABI_LOAD_FAILED",

            Self::ApiBadRequest => "API_BAD_REQUEST",
            Self::ApiInternalError => "API_INTERNAL_ERROR",

            Self::ConfigInvalidValue => "CFG_INVALID_VALUE",
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ApiBadRequest | Self::ConfigInvalidValue => 400,
            _ => 500,
        }
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Classifier artifact is malformed
    pub fn invalid_model(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelInvalidFormat, msg)
    }

    /// Classifier inference failed
    pub fn inference_failed(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ModelInferenceFailed, msg)
    }

    /// Invalid configuration value
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalidValue, msg)
    }

    /// API bad request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiBadRequest, msg)
    }

    /// API internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ModelInvalidFormat, "JSON parse error", err)
    }
}
