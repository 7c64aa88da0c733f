pub mod batch_pipeline;
pub mod calendar;
pub mod catalog;
pub mod composer;
pub mod engine;
pub mod predictor;
pub mod seed;
pub mod span;

pub use crate::domain::model::{
    BatchResult, BatchSummary, PredictionRequest, PredictionResponse, RequestBatch,
};
pub use crate::domain::ports::{Catalog, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
