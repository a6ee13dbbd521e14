//! Supported page languages and their reading direction.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Languages the page ships text variants for.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fa,
}

/// Document reading direction.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ViewStateError {
    #[error("unsupported language code: {0:?}")]
    InvalidLanguage(String),
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Fa];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fa => "fa",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Language::Fa => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }
}

impl FromStr for Language {
    type Err = ViewStateError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ViewStateError::InvalidLanguage(code.to_string()))
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        };
        write!(f, "{}", label)
    }
}
