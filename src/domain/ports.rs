use crate::domain::model::{
    BatchResult, BatchSummary, CompatibilityEntry, PersonEntry, RequestBatch, TraitSet,
    ZodiacSign,
};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only lookup tables keyed by sign. A `None` is a hole in the table, never a user error.
pub trait Catalog: Send + Sync {
    fn traits(&self, sign: ZodiacSign) -> Option<&TraitSet>;
    fn compatibility(&self, sign: ZodiacSign) -> Option<&[CompatibilityEntry]>;
    fn symbol(&self, sign: ZodiacSign) -> Option<&str>;
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn people(&self) -> &[PersonEntry];
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn json_filename(&self) -> &str;
    fn csv_filename(&self) -> &str;
    fn skip_invalid_entries(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<RequestBatch>;
    async fn transform(&self, batch: RequestBatch) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<BatchSummary>;
}
