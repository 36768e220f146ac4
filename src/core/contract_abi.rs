//! Scanner Contract Interface
//!
//! ABI of the on-chain registry that clients submit results to. Loaded at
//! startup for visibility only; scoring never reads it.

use alloy_json_abi::JsonAbi;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::models::{AppError, AppResult, ErrorCode};

/// Parsed contract ABI
#[derive(Debug, Clone)]
pub struct ContractInterface {
    abi: JsonAbi,
}

impl ContractInterface {
    pub fn from_json(json: &str) -> AppResult<Self> {
        let abi: JsonAbi = serde_json::from_str(json).map_err(|e| {
            AppError::with_source(ErrorCode::AbiLoadFailed, "ABI is not valid JSON ABI", e)
        })?;
        Ok(Self { abi })
    }

    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::with_source(
                ErrorCode::AbiLoadFailed,
                format!("cannot read {}", path.display()),
                e,
            )
        })?;
        Self::from_json(&raw)
    }

    pub fn function_count(&self) -> usize {
        self.abi.functions().count()
    }

    pub fn event_count(&self) -> usize {
        self.abi.events().count()
    }
}

/// Load the ABI, degrading to `None` on any error
pub fn load_contract_abi(path: impl AsRef<Path>) -> Option<Arc<ContractInterface>> {
    let path = path.as_ref();
    match ContractInterface::load(path) {
        Ok(contract) => {
            info!(
                functions = contract.function_count(),
                events = contract.event_count(),
                "✅ Contract ABI loaded from {}",
                path.display()
            );
            Some(Arc::new(contract))
        }
        Err(e) => {
            warn!(
                code = e.code_str(),
                "❌ Failed to load contract ABI from {}: {}. Registry details unavailable.",
                path.display(),
                e
            );
            None
        }
    }
}
