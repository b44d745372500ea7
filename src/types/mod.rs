//! Public types for the wordvec API.

mod vector;

pub use vector::{VectorQuery, VectorResult};
