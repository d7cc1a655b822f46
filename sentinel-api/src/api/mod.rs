//! HTTP API handlers for sentinel-api

pub mod predict;

pub use predict::{predict, PredictRequest, PredictResponse};
