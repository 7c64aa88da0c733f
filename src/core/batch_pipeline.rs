use crate::core::predictor::Predictor;
use crate::core::seed::iso_date;
use crate::core::{
    BatchResult, BatchSummary, ConfigProvider, Pipeline, PredictionRequest, RequestBatch, Storage,
};
use crate::domain::model::PredictionResponse;
use crate::utils::error::{AstroError, Result};

pub const CSV_HEADER: [&str; 8] = [
    "name",
    "dob",
    "sign",
    "symbol",
    "love_window",
    "career_window",
    "growth_window",
    "matches",
];

pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    predictor: Predictor,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            predictor: Predictor::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<RequestBatch> {
        let mut requests = Vec::new();
        let mut skipped = 0;

        for (index, entry) in self.config.people().iter().enumerate() {
            match PredictionRequest::parse(entry.name.as_deref(), entry.dob.as_deref()) {
                Ok(request) => requests.push(request),
                Err(AstroError::ValidationError { message }) if self.config.skip_invalid_entries() => {
                    tracing::warn!("Skipping people[{}]: {}", index, message);
                    skipped += 1;
                }
                Err(AstroError::ValidationError { message }) => {
                    return Err(AstroError::validation(format!("people[{}]: {}", index, message)));
                }
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            "Extracted {} of {} entries",
            requests.len(),
            self.config.people().len()
        );
        Ok(RequestBatch { requests, skipped })
    }

    async fn transform(&self, batch: RequestBatch) -> Result<BatchResult> {
        let predictions = batch
            .requests
            .iter()
            .map(|request| self.predictor.predict(request))
            .collect::<Result<Vec<_>>>()?;

        let json_output = serde_json::to_string_pretty(&predictions)?;
        let csv_output = render_csv(&predictions)?;

        Ok(BatchResult {
            predictions,
            json_output,
            csv_output,
            skipped: batch.skipped,
        })
    }

    async fn load(&self, result: BatchResult) -> Result<BatchSummary> {
        let mut written = Vec::new();

        for format in self.config.output_formats() {
            let (filename, data) = match format.as_str() {
                "json" => (self.config.json_filename(), &result.json_output),
                "csv" => (self.config.csv_filename(), &result.csv_output),
                other => {
                    return Err(AstroError::InvalidConfigValueError {
                        field: "output.output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported format".to_string(),
                    })
                }
            };

            self.storage.write_file(filename, data.as_bytes()).await?;
            tracing::debug!("Wrote {} ({} bytes)", filename, data.len());
            written.push(format!("{}/{}", self.config.output_path(), filename));
        }

        Ok(BatchSummary {
            written,
            predictions: result.predictions.len(),
            skipped: result.skipped,
        })
    }
}

/// One row per prediction; the three windows are the spans quoted in the future blocks.
pub fn render_csv(predictions: &[PredictionResponse]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for prediction in predictions {
        let matches = prediction
            .matches
            .iter()
            .map(|m| m.sign.name())
            .collect::<Vec<_>>()
            .join(";");

        writer.write_record([
            prediction.name.as_str(),
            iso_date(prediction.dob).as_str(),
            prediction.sign.name(),
            prediction.symbol.as_str(),
            prediction.windows.love.as_str(),
            prediction.windows.career.as_str(),
            prediction.windows.growth.as_str(),
            matches.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AstroError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| AstroError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PersonEntry;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AstroError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        people: Vec<PersonEntry>,
        output_formats: Vec<String>,
        skip_invalid: bool,
    }

    impl MockConfig {
        fn new(people: &[(&str, &str)]) -> Self {
            Self {
                people: people
                    .iter()
                    .map(|(name, dob)| PersonEntry {
                        name: Some(name.to_string()),
                        dob: Some(dob.to_string()),
                    })
                    .collect(),
                output_formats: vec!["json".to_string(), "csv".to_string()],
                skip_invalid: false,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn people(&self) -> &[PersonEntry] {
            &self.people
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn output_formats(&self) -> &[String] {
            &self.output_formats
        }

        fn json_filename(&self) -> &str {
            "predictions.json"
        }

        fn csv_filename(&self) -> &str {
            "predictions.csv"
        }

        fn skip_invalid_entries(&self) -> bool {
            self.skip_invalid
        }
    }

    #[tokio::test]
    async fn test_extract_rejects_invalid_entry_by_default() {
        let config = MockConfig::new(&[("Alex", "1990-04-15"), ("", "1990-04-15")]);
        let pipeline = BatchPipeline::new(MockStorage::new(), config);

        let err = pipeline.extract().await.unwrap_err();
        assert!(err.is_bad_request());
        assert!(err.to_string().contains("people[1]"));
    }

    #[tokio::test]
    async fn test_extract_skips_invalid_entries_when_configured() {
        let mut config = MockConfig::new(&[
            ("Alex", "1990-04-15"),
            ("Sam", "not-a-date"),
            ("Ann", "1985-12-01"),
        ]);
        config.skip_invalid = true;
        let pipeline = BatchPipeline::new(MockStorage::new(), config);

        let batch = pipeline.extract().await.unwrap();
        assert_eq!(batch.requests.len(), 2);
        assert_eq!(batch.skipped, 1);

        let result = pipeline.transform(batch).await.unwrap();
        assert_eq!(result.predictions.len(), 2);
        assert_eq!(result.skipped, 1);
    }

    #[tokio::test]
    async fn test_transform_reports_skips_counted_by_extract() {
        let config = MockConfig::new(&[
            ("Alex", "1990-04-15"),
            ("Ann", "1985-12-01"),
            ("Sam", "1979-07-30"),
        ]);
        let pipeline = BatchPipeline::new(MockStorage::new(), config);

        // 只傳入部分請求，略過數仍以 extract 的計數為準
        let batch = RequestBatch {
            requests: vec![PredictionRequest::parse(Some("Alex"), Some("1990-04-15")).unwrap()],
            skipped: 0,
        };
        let result = pipeline.transform(batch).await.unwrap();
        assert_eq!(result.predictions.len(), 1);
        assert_eq!(result.skipped, 0);

        let batch = RequestBatch {
            requests: Vec::new(),
            skipped: 4,
        };
        let summary = pipeline
            .load(pipeline.transform(batch).await.unwrap())
            .await
            .unwrap();
        assert_eq!(summary.predictions, 0);
        assert_eq!(summary.skipped, 4);
    }

    #[tokio::test]
    async fn test_transform_renders_json_and_csv() {
        let config = MockConfig::new(&[("Alex", "1990-04-15")]);
        let pipeline = BatchPipeline::new(MockStorage::new(), config);

        let batch = pipeline.extract().await.unwrap();
        let result = pipeline.transform(batch).await.unwrap();

        let json: serde_json::Value = serde_json::from_str(&result.json_output).unwrap();
        assert_eq!(json[0]["sign"], "Aries");
        assert_eq!(json[0]["dob"], "1990-04-15");

        let mut lines = result.csv_output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "name,dob,sign,symbol,love_window,career_window,growth_window,matches"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("Alex,1990-04-15,Aries,♈,from early February to late February,"));
        assert!(row.ends_with(",Leo;Sagittarius;Gemini"));
    }

    #[tokio::test]
    async fn test_csv_windows_match_future_bullets() {
        let config = MockConfig::new(&[("  Alex ", "1990-04-15"), ("Ann", "1985-12-01")]);
        let pipeline = BatchPipeline::new(MockStorage::new(), config);

        let batch = pipeline.extract().await.unwrap();
        let result = pipeline.transform(batch).await.unwrap();

        let mut reader = csv::Reader::from_reader(result.csv_output.as_bytes());
        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(rows.len(), result.predictions.len());

        for (row, prediction) in rows.iter().zip(&result.predictions) {
            let future = &prediction.future;
            for (column, block) in [(4, &future.love), (5, &future.career), (6, &future.growth)] {
                let window = &row[column];
                assert!(window.starts_with("from "));
                assert!(
                    block.bullets[0].contains(&format!(" {}", window)),
                    "{} not quoted in {:?}",
                    window,
                    block.bullets[0]
                );
            }
        }
    }

    #[tokio::test]
    async fn test_load_writes_requested_formats() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new(&[("Alex", "1990-04-15")]);
        config.output_formats = vec!["csv".to_string()];
        let pipeline = BatchPipeline::new(storage.clone(), config);

        let batch = pipeline.extract().await.unwrap();
        let result = pipeline.transform(batch).await.unwrap();
        let summary = pipeline.load(result).await.unwrap();

        assert_eq!(summary.written, vec!["test_output/predictions.csv"]);
        assert_eq!(summary.predictions, 1);
        assert!(storage.get_file("predictions.csv").await.is_some());
        assert!(storage.get_file("predictions.json").await.is_none());
        assert!(storage.read_file("predictions.json").await.is_err());
    }
}
