use crate::core::{Person, ScriptSettings};
use crate::domain::model::{
    DEFAULT_GREETING_NAME, DEFAULT_MULTIPLY_LHS, DEFAULT_MULTIPLY_RHS, DEFAULT_PERSON_AGE,
    DEFAULT_PERSON_NAME, DEFAULT_SUM_LHS, DEFAULT_SUM_RHS,
};
use crate::utils::error::{Result, ScriptError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PERSON_AGE: u32 = 150;

/// Script literals. Every section and field may be omitted; missing values
/// fall back to the built-in transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptConfig {
    pub sum: SumConfig,
    pub greeting: GreetingConfig,
    pub multiply: MultiplyConfig,
    pub person: PersonConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SumConfig {
    pub lhs: i64,
    pub rhs: i64,
}

impl Default for SumConfig {
    fn default() -> Self {
        Self {
            lhs: DEFAULT_SUM_LHS,
            rhs: DEFAULT_SUM_RHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiplyConfig {
    pub lhs: i64,
    pub rhs: i64,
}

impl Default for MultiplyConfig {
    fn default() -> Self {
        Self {
            lhs: DEFAULT_MULTIPLY_LHS,
            rhs: DEFAULT_MULTIPLY_RHS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub name: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_GREETING_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonConfig {
    pub name: String,
    pub age: u32,
}

impl Default for PersonConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PERSON_NAME.to_string(),
            age: DEFAULT_PERSON_AGE,
        }
    }
}

impl ScriptConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScriptError::IoError)?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScriptError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING_NAME})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScriptError::ConfigParseError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ScriptSettings for ScriptConfig {
    fn sum_operands(&self) -> (i64, i64) {
        (self.sum.lhs, self.sum.rhs)
    }

    fn greeting_name(&self) -> &str {
        &self.greeting.name
    }

    fn multiply_operands(&self) -> (i64, i64) {
        (self.multiply.lhs, self.multiply.rhs)
    }

    fn person(&self) -> Person {
        Person::new(self.person.name.clone(), self.person.age)
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("greeting.name", &self.greeting.name)?;
        validate_non_empty_string("person.name", &self.person.name)?;
        validate_range("person.age", self.person.age, 0, MAX_PERSON_AGE)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_is_default() {
        let config = ScriptConfig::from_toml_str("").unwrap();
        assert_eq!(config, ScriptConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let toml_content = r#"
[multiply]
rhs = 8

[person]
name = "李四"
"#;
        let config = ScriptConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.multiply_operands(), (6, 8));
        assert_eq!(config.sum_operands(), (10, 20));
        assert_eq!(config.person(), Person::new("李四", 25));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ScriptConfig::from_toml_str("[sum]\nlhs = \"ten\"\n").unwrap_err();
        assert!(matches!(err, ScriptError::ConfigParseError { .. }));
    }

    #[test]
    fn test_from_file_rejects_invalid_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[person]\nage = 200").unwrap();

        let err = ScriptConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::InvalidConfigValueError { ref field, .. } if field == "person.age"
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ScriptConfig::from_file("/nonexistent/smoke-script.toml").unwrap_err();
        assert!(matches!(err, ScriptError::IoError(_)));
    }
}
