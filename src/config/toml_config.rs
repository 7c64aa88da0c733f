use crate::core::ConfigProvider;
use crate::domain::model::PersonEntry;
use crate::utils::error::{AstroError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];
pub const INVALID_ENTRY_POLICIES: [&str; 2] = ["skip", "fail"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    pub batch: BatchInfo,
    #[serde(default)]
    pub people: Vec<PersonEntry>,
    pub output: OutputConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub json: Option<String>,
    pub csv: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    pub on_invalid_entry: Option<String>,
}

impl BatchConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AstroError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIRTH_DATE})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_non_empty_string("batch.name", &self.batch.name)?;
        validate_path("output.output_path", &self.output.output_path)?;

        let mut seen = HashSet::new();
        for format in &self.output.output_formats {
            if !seen.insert(format.as_str()) {
                return Err(AstroError::InvalidConfigValueError {
                    field: "output.output_formats".to_string(),
                    value: format.clone(),
                    reason: "Duplicate output format".to_string(),
                });
            }
        }

        validate_range(
            "output.output_formats",
            self.output.output_formats.len(),
            1,
            SUPPORTED_FORMATS.len(),
        )?;
        for format in &self.output.output_formats {
            validate_one_of("output.output_formats", format, &SUPPORTED_FORMATS)?;
        }

        if let Some(filenames) = &self.output.filenames {
            for (field, name) in [
                ("output.filenames.json", &filenames.json),
                ("output.filenames.csv", &filenames.csv),
            ] {
                if let Some(name) = name {
                    validate_path(field, name)?;
                }
            }
        }

        if let Some(policy) = self
            .error_handling
            .as_ref()
            .and_then(|e| e.on_invalid_entry.as_deref())
        {
            validate_one_of(
                "error_handling.on_invalid_entry",
                policy,
                &INVALID_ENTRY_POLICIES,
            )?;
        }

        if self.people.is_empty() {
            return Err(AstroError::MissingConfigError {
                field: "people".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for BatchConfig {
    fn people(&self) -> &[PersonEntry] {
        &self.people
    }

    fn output_path(&self) -> &str {
        &self.output.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.output.output_formats
    }

    fn json_filename(&self) -> &str {
        self.output
            .filenames
            .as_ref()
            .and_then(|f| f.json.as_deref())
            .unwrap_or("predictions.json")
    }

    fn csv_filename(&self) -> &str {
        self.output
            .filenames
            .as_ref()
            .and_then(|f| f.csv.as_deref())
            .unwrap_or("predictions.csv")
    }

    fn skip_invalid_entries(&self) -> bool {
        self.error_handling
            .as_ref()
            .and_then(|e| e.on_invalid_entry.as_deref())
            == Some("skip")
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
