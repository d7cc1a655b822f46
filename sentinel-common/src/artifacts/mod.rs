//! Pre-fitted model artifacts
//!
//! The vectorizer and classifier are produced by an offline training export
//! and loaded read-only at startup. Both are plain JSON documents holding the
//! fitted parameters (vocabulary, idf weights, coefficients).

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

use crate::{Error, Result};

pub mod classifier;
pub mod vectorizer;

pub use classifier::{ClassLabel, LinearClassifier};
pub use vectorizer::{Norm, SparseVector, TfidfVectorizer};

/// Vectorizer artifact file name inside the artifact directory
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";

/// Classifier artifact file name inside the artifact directory
pub const CLASSIFIER_FILE: &str = "logistic_regression_model.json";

/// Vectorizer and classifier loaded as a matched pair
#[derive(Debug)]
pub struct Artifacts {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
}

impl Artifacts {
    /// Pair a vectorizer with a classifier, checking the feature widths agree
    pub fn new(vectorizer: TfidfVectorizer, classifier: LinearClassifier) -> Result<Self> {
        if vectorizer.n_features() != classifier.n_features() {
            return Err(Error::Artifact(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.n_features(),
                classifier.n_features()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Load both artifacts from `dir`
    ///
    /// Any missing, unreadable or inconsistent file is an error; callers treat
    /// it as fatal.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let vectorizer_path = dir.join(VECTORIZER_FILE);
        let classifier_path = dir.join(CLASSIFIER_FILE);

        let vectorizer = TfidfVectorizer::from_file(&vectorizer_path)?;
        info!(
            "Loaded vectorizer from {} ({} features)",
            vectorizer_path.display(),
            vectorizer.n_features()
        );

        let classifier = LinearClassifier::from_file(&classifier_path)?;
        info!(
            "Loaded classifier from {} (classes {:?})",
            classifier_path.display(),
            classifier.classes()
        );

        Self::new(vectorizer, classifier)
    }
}

/// Read and deserialize one JSON artifact
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::ArtifactRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| Error::ArtifactParse {
        path: path.to_path_buf(),
        source,
    })
}
