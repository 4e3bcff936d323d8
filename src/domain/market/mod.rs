//! Market domain: market reference data, display names, search.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod names;
pub mod wire;

use crate::error::SdkError;
use crate::shared::MarketCode;
use serde::{Deserialize, Serialize};
use std::fmt;

pub(crate) use convert::markets_from_wire;
pub use names::{filter_by_search, matches_search, MarketNames, MarketScoped, Named};

// ─── Market ──────────────────────────────────────────────────────────────────

/// Static reference entry mapping a market code to its display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub market_code: MarketCode,
    pub korean_name: String,
    pub english_name: String,
    /// Exchange caution flag (`"CAUTION"`), when the backend forwards it.
    pub market_warning: Option<String>,
}

impl Market {
    /// Name shown in lists and tables: the Korean name, or the raw code
    /// when the backend sent none. The English name is shown alongside, never
    /// in its place.
    pub fn display_name(&self) -> &str {
        if self.korean_name.is_empty() {
            self.market_code.as_str()
        } else {
            &self.korean_name
        }
    }

    pub fn has_warning(&self) -> bool {
        matches!(self.market_warning.as_deref(), Some(w) if w != "NONE")
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MarketCodeMissing,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MarketCodeMissing => write!(f, "Missing market code"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Reject a blank market code before it reaches a request path.
#[cfg_attr(not(feature = "http"), allow(dead_code))]
pub(crate) fn require_code(code: &MarketCode) -> Result<(), SdkError> {
    if code.as_str().trim().is_empty() {
        return Err(SdkError::Validation(ValidationError::MarketCodeMissing.to_string()));
    }
    Ok(())
}
