//! TF-IDF vectorizer loaded from a fitted vocabulary

use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

use super::read_json;
use crate::{Error, Result};

/// Tokens of two or more word characters
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Row normalization applied after idf weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// Sparse feature vector with entries sorted by feature index
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// All-zero vector of width `dim`
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    fn from_map(dim: usize, values: BTreeMap<usize, f64>) -> Self {
        Self {
            dim,
            entries: values.into_iter().filter(|(_, v)| *v != 0.0).collect(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value at `index`, zero when not stored
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |(i, _)| *i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }
}

/// On-disk layout of the vectorizer artifact
#[derive(Debug, Deserialize)]
struct VectorizerParams {
    vocabulary: HashMap<String, usize>,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    #[serde(default = "default_lowercase")]
    lowercase: bool,
    #[serde(default = "default_token_pattern")]
    token_pattern: String,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    stop_words: Option<Vec<String>>,
    #[serde(default)]
    binary: bool,
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default = "default_norm")]
    norm: Option<Norm>,
}

fn default_lowercase() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Fitted TF-IDF transform
///
/// Turns documents into vocabulary-indexed sparse vectors: tokenize, build
/// word n-grams, count, optionally weight by idf, then normalize the row.
/// Immutable once constructed.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    lowercase: bool,
    token_pattern: Regex,
    ngram_range: (usize, usize),
    stop_words: HashSet<String>,
    binary: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    /// Load from a JSON artifact file
    pub fn from_file(path: &Path) -> Result<Self> {
        let params: VectorizerParams = read_json(path)?;
        Self::from_params(params)
    }

    /// Parse from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: VectorizerParams = serde_json::from_str(json)
            .map_err(|e| Error::Artifact(format!("vectorizer: {}", e)))?;
        Self::from_params(params)
    }

    fn from_params(params: VectorizerParams) -> Result<Self> {
        let n_features = params.vocabulary.len();
        if n_features == 0 {
            return Err(Error::Artifact("vectorizer vocabulary is empty".to_string()));
        }

        let mut seen = vec![false; n_features];
        for (term, &index) in &params.vocabulary {
            if index >= n_features {
                return Err(Error::Artifact(format!(
                    "term {:?} has index {} outside vocabulary of {}",
                    term, index, n_features
                )));
            }
            if std::mem::replace(&mut seen[index], true) {
                return Err(Error::Artifact(format!(
                    "feature index {} assigned to more than one term",
                    index
                )));
            }
        }

        if let Some(idf) = &params.idf {
            if idf.len() != n_features {
                return Err(Error::Artifact(format!(
                    "idf has {} weights for a vocabulary of {}",
                    idf.len(),
                    n_features
                )));
            }
            if idf.iter().any(|w| !w.is_finite()) {
                return Err(Error::Artifact("idf contains non-finite weights".to_string()));
            }
        }

        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(Error::Artifact(format!(
                "invalid ngram_range ({}, {})",
                min_n, max_n
            )));
        }

        let token_pattern = Regex::new(&params.token_pattern)
            .map_err(|e| Error::Artifact(format!("token_pattern: {}", e)))?;
        // A single capture group selects the token; more are ambiguous
        if token_pattern.captures_len() > 2 {
            return Err(Error::Artifact(
                "token_pattern may contain at most one capture group".to_string(),
            ));
        }

        Ok(Self {
            vocabulary: params.vocabulary,
            idf: params.idf,
            lowercase: params.lowercase,
            token_pattern,
            ngram_range: params.ngram_range,
            stop_words: params.stop_words.unwrap_or_default().into_iter().collect(),
            binary: params.binary,
            sublinear_tf: params.sublinear_tf,
            norm: params.norm,
        })
    }

    /// Width of every vector this vectorizer produces
    pub fn n_features(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a vocabulary term
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Vectorize a batch of documents, one row per document
    pub fn transform(&self, documents: &[&str]) -> Result<Vec<SparseVector>> {
        documents.iter().map(|doc| self.transform_one(doc)).collect()
    }

    fn transform_one(&self, document: &str) -> Result<SparseVector> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.analyze(document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (&index, value) in counts.iter_mut() {
            if self.binary {
                *value = 1.0;
            } else if self.sublinear_tf {
                *value = 1.0 + value.ln();
            }
            if let Some(idf) = &self.idf {
                *value *= idf[index];
            }
        }

        if let Some(norm) = self.norm {
            let total = match norm {
                Norm::L1 => counts.values().map(|v| v.abs()).sum::<f64>(),
                Norm::L2 => counts.values().map(|v| v * v).sum::<f64>().sqrt(),
            };
            if total > 0.0 {
                counts.values_mut().for_each(|v| *v /= total);
            }
        }

        if counts.values().any(|v| !v.is_finite()) {
            return Err(Error::Vectorize(
                "document produced non-finite feature values".to_string(),
            ));
        }

        Ok(SparseVector::from_map(self.n_features(), counts))
    }

    /// Split a document into the terms looked up in the vocabulary
    fn analyze(&self, document: &str) -> Vec<String> {
        let text = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };

        let tokens: Vec<&str> = if self.token_pattern.captures_len() == 2 {
            self.token_pattern
                .captures_iter(&text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect()
        } else {
            self.token_pattern
                .find_iter(&text)
                .map(|m| m.as_str())
                .collect()
        };

        let tokens: Vec<&str> = tokens
            .into_iter()
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        word_ngrams(&tokens, self.ngram_range)
    }
}

fn word_ngrams(tokens: &[&str], (min_n, max_n): (usize, usize)) -> Vec<String> {
    let mut terms = Vec::new();
    for n in min_n..=max_n.min(tokens.len()) {
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}
