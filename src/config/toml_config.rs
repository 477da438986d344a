use crate::core::loader::parse_identifier;
use crate::utils::error::{DrawError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_tier_bounds, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub draw: DrawSection,
    pub source: Option<SourceSection>,
    pub output: Option<OutputSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DrawSection {
    pub seed: Option<SeedValue>,
    pub a: Option<usize>,
    pub b: Option<usize>,
    pub c: Option<usize>,
}

/// TOML 整數只有 64 位元，更大的種子可以寫成字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    Int(i64),
    Text(String),
}

impl SeedValue {
    pub fn resolve(&self) -> Result<i128> {
        match self {
            SeedValue::Int(v) => Ok(i128::from(*v)),
            SeedValue::Text(raw) => parse_seed("draw.seed", raw),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrawError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrawError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DRAW_SEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrawError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(source) = &self.source {
            validate_path("source.path", &source.path)?;
        }
        if let Some(path) = self.output.as_ref().and_then(|o| o.path.as_deref()) {
            validate_path("output.path", path)?;
        }
        if let Some(seed) = &self.draw.seed {
            seed.resolve()?;
        }
        if let (Some(a), Some(b), Some(c)) = (self.draw.a, self.draw.b, self.draw.c) {
            validate_tier_bounds(a, b, c)?;
        }
        Ok(())
    }

    pub fn input_path(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.path.as_str())
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

/// Seeds use the same integer syntax as participant UIDs.
pub fn parse_seed(field_name: &str, raw: &str) -> Result<i128> {
    validate_non_empty_string(field_name, raw)?;
    parse_identifier(raw.trim()).ok_or_else(|| DrawError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: raw.to_string(),
        reason: "Seed must be an integer".to_string(),
    })
}
