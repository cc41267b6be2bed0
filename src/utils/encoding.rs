//! Text encodings for file editing
//!
//! The release pipeline occasionally meets legacy metadata files that are
//! not valid UTF-8; Latin-1 covers those, where every byte maps to the
//! code point of the same value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Character encoding used when reading and writing text files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// Strict UTF-8, no BOM handling
    #[default]
    Utf8,
    /// ISO-8859-1
    Latin1,
}

/// Input bytes are not valid in the declared encoding
#[derive(Error, Debug)]
#[error("invalid {encoding} sequence at byte {offset}")]
pub struct DecodeError {
    pub encoding: TextEncoding,
    pub offset: usize,
}

/// A character has no representation in the target encoding
#[derive(Error, Debug)]
#[error("character {character:?} cannot be encoded as {encoding}")]
pub struct EncodeError {
    pub encoding: TextEncoding,
    pub character: char,
}

impl TextEncoding {
    /// Decode raw file bytes into a string.
    ///
    /// Latin-1 accepts any byte sequence; UTF-8 failures report the
    /// offset of the first invalid byte.
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| DecodeError {
                    encoding: self,
                    offset: e.valid_up_to(),
                }),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        }
    }

    /// Encode a string into raw file bytes.
    pub fn encode(self, text: &str) -> Result<Vec<u8>, EncodeError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| {
                    u8::try_from(c as u32).map_err(|_| EncodeError {
                        encoding: self,
                        character: c,
                    })
                })
                .collect(),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextEncoding::Utf8 => write!(f, "utf8"),
            TextEncoding::Latin1 => write!(f, "latin1"),
        }
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(TextEncoding::Utf8),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            other => Err(format!("unknown encoding '{}'", other)),
        }
    }
}
