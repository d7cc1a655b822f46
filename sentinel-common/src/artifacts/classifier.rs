//! Binary linear classifier (logistic regression weights)

use serde::Deserialize;
use std::path::Path;

use super::read_json;
use super::vectorizer::SparseVector;
use crate::{Error, Result};

/// Encoded class value as written by the trainer
pub type ClassLabel = i64;

/// Coefficients are accepted flat or as the trainer's single-row matrix
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coefficients {
    Flat(Vec<f64>),
    Rows(Vec<Vec<f64>>),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Intercept {
    Scalar(f64),
    Array(Vec<f64>),
}

/// On-disk layout of the classifier artifact
#[derive(Debug, Deserialize)]
struct ClassifierParams {
    classes: Vec<ClassLabel>,
    coef: Coefficients,
    intercept: Intercept,
}

/// Fitted binary linear model
///
/// `score = intercept + coef · x`; a positive score selects the second class.
#[derive(Debug)]
pub struct LinearClassifier {
    classes: [ClassLabel; 2],
    coef: Vec<f64>,
    intercept: f64,
}

impl LinearClassifier {
    /// Build a classifier directly from its parameters
    pub fn new(classes: [ClassLabel; 2], coef: Vec<f64>, intercept: f64) -> Result<Self> {
        if classes[0] == classes[1] {
            return Err(Error::Artifact(format!(
                "classifier classes must differ, got {:?}",
                classes
            )));
        }
        if coef.is_empty() {
            return Err(Error::Artifact("classifier has no coefficients".to_string()));
        }
        if !intercept.is_finite() || coef.iter().any(|w| !w.is_finite()) {
            return Err(Error::Artifact(
                "classifier contains non-finite weights".to_string(),
            ));
        }

        Ok(Self {
            classes,
            coef,
            intercept,
        })
    }

    /// Load from a JSON artifact file
    pub fn from_file(path: &Path) -> Result<Self> {
        let params: ClassifierParams = read_json(path)?;
        Self::from_params(params)
    }

    /// Parse from an in-memory JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: ClassifierParams = serde_json::from_str(json)
            .map_err(|e| Error::Artifact(format!("classifier: {}", e)))?;
        Self::from_params(params)
    }

    fn from_params(params: ClassifierParams) -> Result<Self> {
        let classes: [ClassLabel; 2] = params.classes.as_slice().try_into().map_err(|_| {
            Error::Artifact(format!(
                "binary classifier needs exactly 2 classes, got {}",
                params.classes.len()
            ))
        })?;

        let coef = match params.coef {
            Coefficients::Flat(coef) => coef,
            Coefficients::Rows(mut rows) if rows.len() == 1 => rows.remove(0),
            Coefficients::Rows(rows) => {
                return Err(Error::Artifact(format!(
                    "binary classifier needs 1 coefficient row, got {}",
                    rows.len()
                )))
            }
        };

        let intercept = match params.intercept {
            Intercept::Scalar(value) => value,
            Intercept::Array(values) if values.len() == 1 => values[0],
            Intercept::Array(values) => {
                return Err(Error::Artifact(format!(
                    "binary classifier needs 1 intercept, got {}",
                    values.len()
                )))
            }
        };

        Self::new(classes, coef, intercept)
    }

    pub fn classes(&self) -> [ClassLabel; 2] {
        self.classes
    }

    /// Number of input features the weights cover
    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    /// Signed distance of each row from the decision boundary
    pub fn decision_function(&self, rows: &[SparseVector]) -> Result<Vec<f64>> {
        rows.iter().map(|row| self.score(row)).collect()
    }

    /// Predicted class for each row
    pub fn predict(&self, rows: &[SparseVector]) -> Result<Vec<ClassLabel>> {
        rows.iter()
            .map(|row| {
                let score = self.score(row)?;
                Ok(if score > 0.0 {
                    self.classes[1]
                } else {
                    self.classes[0]
                })
            })
            .collect()
    }

    fn score(&self, row: &SparseVector) -> Result<f64> {
        if row.dim() != self.coef.len() {
            return Err(Error::Classify(format!(
                "feature vector has width {}, classifier expects {}",
                row.dim(),
                self.coef.len()
            )));
        }

        let score = row
            .iter()
            .fold(self.intercept, |acc, (index, value)| acc + self.coef[index] * value);

        if !score.is_finite() {
            return Err(Error::Classify("decision score is not finite".to_string()));
        }
        Ok(score)
    }
}
