//! Word vector query and result types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Argument, Result, WordVecError};

/// Outbound lookup request. The word is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorQuery {
    word: String,
}

impl VectorQuery {
    /// Build a query for `word`, rejecting the empty string.
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(WordVecError::MissingArgument(Argument::Word));
        }
        Ok(Self { word })
    }

    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Vector returned by the service for a single word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorResult {
    pub word: String,
    pub index: i64,
    pub features: Vec<f32>,
}

impl VectorResult {
    pub fn new(word: impl Into<String>, index: i64, features: Vec<f32>) -> Self {
        Self {
            word: word.into(),
            index,
            features,
        }
    }

    /// Reply the service sends for words outside its vocabulary.
    pub fn not_found() -> Self {
        Self {
            word: String::new(),
            index: -1,
            features: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.index >= 0
    }

    pub fn dimensions(&self) -> usize {
        self.features.len()
    }
}

/// Renders as `word index [f1, f2, ...]`.
impl fmt::Display for VectorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.word, self.index, self.features)
    }
}
