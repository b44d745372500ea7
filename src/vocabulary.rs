//! In-memory word vector table.
//!
//! [`Vocabulary`] answers lookups the same way the remote word-vector service
//! does: every word gets the index it was inserted at, and unknown words get
//! the not-found sentinel instead of an error. It is used to host the
//! service in-process (see [`WordVectorService`](crate::server::WordVectorService))
//! and as a lookup double in tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::trace;

use crate::{Result, VectorQuery, VectorResult, VectorService};

/// Word → vector table indexed in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: HashMap<String, usize>,
    vectors: Vec<Vec<f32>>,
    normalize: bool,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale every inserted vector to unit length.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Insert `word`, returning its index.
    ///
    /// Re-inserting a known word replaces its features and keeps its index.
    pub fn insert(&mut self, word: impl Into<String>, mut features: Vec<f32>) -> i64 {
        if self.normalize {
            normalize(&mut features);
        }
        let word = word.into();
        let idx = match self.index.get(&word) {
            Some(&idx) => {
                self.vectors[idx] = features;
                idx
            }
            None => {
                let idx = self.vectors.len();
                self.vectors.push(features);
                self.index.insert(word, idx);
                idx
            }
        };
        idx as i64
    }

    pub fn lookup(&self, word: &str) -> VectorResult {
        match self.index.get(word) {
            Some(&idx) => VectorResult::new(word, idx as i64, self.vectors[idx].clone()),
            None => VectorResult::not_found(),
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Dimension of the stored vectors, taken from the first entry.
    pub fn dimensions(&self) -> Option<usize> {
        self.vectors.first().map(Vec::len)
    }
}

impl<W: Into<String>> FromIterator<(W, Vec<f32>)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (W, Vec<f32>)>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        for (word, features) in iter {
            vocabulary.insert(word, features);
        }
        vocabulary
    }
}

#[async_trait]
impl VectorService for Vocabulary {
    async fn get_vector(&self, query: &VectorQuery) -> Result<VectorResult> {
        let result = self.lookup(query.word());
        trace!(word = query.word(), found = result.is_found(), "vocabulary lookup");
        Ok(result)
    }
}

/// Scale `features` to unit L2 norm in place and return the original norm.
///
/// A zero vector is left untouched.
pub fn normalize(features: &mut [f32]) -> f32 {
    let norm = features.iter().map(|v| v * v).sum::<f32>().sqrt();
    if norm > 0.0 {
        for v in features.iter_mut() {
            *v /= norm;
        }
    }
    norm
}
