//! # Sentinel Common Library
//!
//! Shared code for the Fake News Sentinel service:
//! - Text normalization applied before vectorization
//! - Loaded model artifacts (TF-IDF vectorizer, linear classifier)
//! - Configuration resolution
//! - Common error type

pub mod artifacts;
pub mod config;
pub mod error;
pub mod text;

pub use artifacts::{Artifacts, ClassLabel, LinearClassifier, SparseVector, TfidfVectorizer};
pub use error::{Error, Result};
pub use text::clean_text;
