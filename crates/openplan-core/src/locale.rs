//! Locale selection for user-facing warning text.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language used for placement warnings and flow messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLocale {
    /// Korean (storefront default)
    #[default]
    Ko,
    /// English
    En,
}

impl fmt::Display for WarningLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ko => write!(f, "ko"),
            Self::En => write!(f, "en"),
        }
    }
}

impl FromStr for WarningLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ko" | "kr" | "korean" => Ok(Self::Ko),
            "en" | "english" => Ok(Self::En),
            _ => Err(format!("Unknown locale: {}", s)),
        }
    }
}
