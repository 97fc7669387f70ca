use crate::cipher::{shift::ShiftCipher, unicode::UnicodeCipher, CharCipher};
use crate::error::{EncdecError, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Encrypt,
    Decrypt,
}

impl Direction {
    /// Resolves a user-supplied mode token. Unknown tokens keep the default
    /// direction, [`Direction::Encrypt`], with a warning.
    pub fn from_token(token: &str) -> Self {
        token.parse().unwrap_or_else(|_| {
            warn!("Unknown mode '{}', keeping enc", token);
            Direction::Encrypt
        })
    }
}

impl FromStr for Direction {
    type Err = EncdecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "enc" | "encrypt" => Ok(Direction::Encrypt),
            "dec" | "decrypt" => Ok(Direction::Decrypt),
            other => Err(EncdecError::Api(format!(
                "Unknown mode: {} (expected 'enc' or 'dec')",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => write!(f, "enc"),
            Direction::Decrypt => write!(f, "dec"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Shift,
    Unicode,
}

impl Algorithm {
    /// Resolves a user-supplied algorithm token.
    ///
    /// Unknown tokens fall back to [`Algorithm::Shift`] with a warning, unless
    /// `strict` is set, in which case they are rejected.
    pub fn from_token(token: &str, strict: bool) -> Result<Self> {
        match token.parse() {
            Ok(algorithm) => Ok(algorithm),
            Err(e) if strict => Err(e),
            Err(_) => {
                warn!("Unknown algorithm '{}', falling back to shift", token);
                Ok(Algorithm::Shift)
            }
        }
    }

    pub fn engine(self) -> &'static dyn CharCipher {
        match self {
            Algorithm::Shift => &ShiftCipher,
            Algorithm::Unicode => &UnicodeCipher,
        }
    }
}

impl FromStr for Algorithm {
    type Err = EncdecError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "shift" => Ok(Algorithm::Shift),
            "unicode" => Ok(Algorithm::Unicode),
            other => Err(EncdecError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Shift => write!(f, "shift"),
            Algorithm::Unicode => write!(f, "unicode"),
        }
    }
}

/// A fully resolved cipher invocation: the text has been read and the key,
/// direction and algorithm parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    pub text: String,
    pub key: i64,
    pub direction: Direction,
    pub algorithm: Algorithm,
}

impl CipherRequest {
    pub fn new(
        text: impl Into<String>,
        key: i64,
        direction: Direction,
        algorithm: Algorithm,
    ) -> Self {
        Self {
            text: text.into(),
            key,
            direction,
            algorithm,
        }
    }
}
