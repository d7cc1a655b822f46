//! Inference service: normalize → vectorize → predict → label

use serde::Serialize;
use sentinel_common::{clean_text, Artifacts, ClassLabel};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Class encoding that means the article is genuine
pub const POSITIVE_CLASS: ClassLabel = 1;

/// Human-readable classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Genuine,
    Fake,
}

impl Verdict {
    /// Two-way switch on the classifier's label, no thresholding
    pub fn from_label(label: ClassLabel) -> Self {
        if label == POSITIVE_CLASS {
            Verdict::Genuine
        } else {
            Verdict::Fake
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Genuine => "Genuine",
            Verdict::Fake => "Fake",
        }
    }
}

/// Holds the loaded artifacts for the lifetime of the process
///
/// Cloning shares the same read-only artifacts.
#[derive(Debug, Clone)]
pub struct InferenceService {
    artifacts: Arc<Artifacts>,
}

impl InferenceService {
    pub fn new(artifacts: Artifacts) -> Self {
        Self {
            artifacts: Arc::new(artifacts),
        }
    }

    /// Load both artifacts from `dir`
    pub fn load(dir: &Path) -> sentinel_common::Result<Self> {
        Artifacts::load_from_dir(dir).map(Self::new)
    }

    pub fn artifacts(&self) -> &Artifacts {
        &self.artifacts
    }

    /// Classify one article
    pub fn classify(&self, raw_text: &str) -> sentinel_common::Result<Verdict> {
        let cleaned = clean_text(raw_text);

        let features = self.artifacts.vectorizer.transform(&[cleaned.as_str()])?;
        let labels = self.artifacts.classifier.predict(&features)?;

        let label = labels.first().copied().ok_or_else(|| {
            sentinel_common::Error::Classify("classifier returned no prediction".to_string())
        })?;

        let verdict = Verdict::from_label(label);
        debug!(
            chars = raw_text.len(),
            nnz = features[0].nnz(),
            label,
            verdict = verdict.as_str(),
            "Classified article"
        );
        Ok(verdict)
    }
}
