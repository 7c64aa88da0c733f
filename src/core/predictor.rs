use crate::core::catalog::StaticCatalog;
use crate::core::composer::compose;
use crate::domain::model::{PredictionRequest, PredictionResponse};
use crate::domain::ports::Catalog;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Request-level entry point: validates, then composes.
///
/// Holds only a read-only catalog, so one instance can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct Predictor<C: Catalog = StaticCatalog> {
    catalog: C,
}

impl Predictor<StaticCatalog> {
    pub fn new() -> Self {
        Self {
            catalog: StaticCatalog,
        }
    }
}

impl<C: Catalog> Predictor<C> {
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        request.validate()?;
        compose(&self.catalog, &request.name, request.dob)
    }

    /// Parses raw boundary input and predicts in one step.
    pub fn predict_raw(&self, name: Option<&str>, dob: Option<&str>) -> Result<PredictionResponse> {
        let request = PredictionRequest::parse(name, dob)?;
        self.predict(&request)
    }
}
