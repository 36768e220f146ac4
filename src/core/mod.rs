//! Core Module - Business Logic
//!
//! Feature derivation, the trust classifier and scoring.

pub mod classifier;
pub mod contract_abi;
pub mod features;
pub mod scoring;

pub use classifier::*;
pub use contract_abi::*;
pub use features::*;
pub use scoring::*;
