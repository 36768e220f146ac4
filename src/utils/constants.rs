//! Constants Module - Single Source of Truth
//!
//! All defaults, thresholds and fixed messages used across the scanner
//! live here. Other modules import from this file instead of hardcoding.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "TrustScanner";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// SERVER DEFAULTS
// ============================================

/// Default bind host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8080;

// ============================================
// STARTUP ARTIFACTS
// ============================================

/// Default location of the serialized trust classifier
pub const DEFAULT_MODEL_PATH: &str = "models/trust_model.json";

/// Default location of the scanner contract ABI
pub const DEFAULT_ABI_PATH: &str = "models/contract_abi.json";

/// Number of features the classifier consumes
pub const FEATURE_COUNT: usize = 4;

// ============================================
// ADDRESS VALIDATION
// ============================================

/// Required prefix for hex-encoded contract addresses
pub const ADDRESS_PREFIX: &str = "0x";

/// Returned on any malformed analyze request
pub const INVALID_ADDRESS_MESSAGE: &str =
    "A valid contract address starting with '0x' is required.";

/// Returned when the classifier fails mid-request
pub const SCORING_FAILED_MESSAGE: &str = "Internal error while scoring address";

// ============================================
// MOCK FEATURE VALUES
// ============================================

/// Owner token share assigned to even trailing digits
pub const OWNER_TOKENS_HIGH: u32 = 80;

/// Owner token share assigned to odd trailing digits
pub const OWNER_TOKENS_LOW: u32 = 10;

// ============================================
// SCORING
// ============================================

/// Fallback: owner share above which the concentrated branch applies
pub const FALLBACK_OWNER_THRESHOLD: u32 = 50;

/// Fallback: base score of the concentrated branch
pub const FALLBACK_BASE_SCORE: u8 = 65;

/// Fallback: flat score otherwise
pub const FALLBACK_LOW_SCORE: u8 = 35;

/// Scores strictly above this are `Safe`
pub const SAFE_THRESHOLD: u8 = 70;

/// Scores strictly above this (and not safe) are `Warning`
pub const WARNING_THRESHOLD: u8 = 40;

/// Maximum trust score
pub const MAX_SCORE: u8 = 100;
