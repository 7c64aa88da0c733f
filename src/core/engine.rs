use crate::core::{BatchSummary, Pipeline};
use crate::utils::error::Result;

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<BatchSummary> {
        tracing::info!("Starting batch predictions...");

        // Extract
        let batch = self.pipeline.extract().await?;
        tracing::info!(
            "Accepted {} requests ({} skipped)",
            batch.requests.len(),
            batch.skipped
        );

        // Transform
        let result = self.pipeline.transform(batch).await?;
        tracing::info!(
            "Composed {} predictions ({} skipped)",
            result.predictions.len(),
            result.skipped
        );

        // Load
        let summary = self.pipeline.load(result).await?;
        for path in &summary.written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(summary)
    }
}
