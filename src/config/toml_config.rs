use crate::config::{ScrubConfig, DEFAULT_PROJECT_FILE};
use crate::domain::model::DeletionRule;
use crate::utils::error::{Result, ScrubError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub file: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ScrubError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScrubError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PROJECT_FILE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("project.name", &self.project.name)?;

        if let Some(file) = &self.project.file {
            validation::validate_path("project.file", file)?;
        }

        validation::validate_rules("rules", &self.deletion_rules())
    }

    /// 取得目標描述檔路徑
    pub fn project_file(&self) -> &str {
        self.project.file.as_deref().unwrap_or(DEFAULT_PROJECT_FILE)
    }

    /// 取得刪除規則（保持檔案中的順序）
    pub fn deletion_rules(&self) -> Vec<DeletionRule> {
        self.rules
            .iter()
            .map(|r| DeletionRule::new(r.name.clone(), r.pattern.clone()))
            .collect()
    }

    pub fn into_scrub_config(self) -> ScrubConfig {
        ScrubConfig {
            project_file: self.project_file().to_string(),
            rules: self.deletion_rules(),
            dry_run: false,
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[project]
name = "osx-ide"
file = "osx-ide.xcodeproj/project.pbxproj"

[[rules]]
name = "target-dependency-entry"
pattern = '\t\t\t\t7A11AA022F90000100C0DE01 /\* PBXTargetDependency \*/,\n'
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.project.name, "osx-ide");
        assert_eq!(config.project_file(), "osx-ide.xcodeproj/project.pbxproj");
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].name, "target-dependency-entry");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let toml_content = r#"
[project]
name = "osx-ide"

[[rules]]
name = "anything"
pattern = 'x'
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.project_file(), DEFAULT_PROJECT_FILE);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEST_PROJECT_FILE", "other.xcodeproj/project.pbxproj");

        let toml_content = r#"
[project]
name = "osx-ide"
file = "${TEST_PROJECT_FILE}"

[[rules]]
name = "anything"
pattern = 'x'
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.project_file(), "other.xcodeproj/project.pbxproj");

        std::env::remove_var("TEST_PROJECT_FILE");
    }

    #[test]
    fn test_config_without_rules_fails_validation() {
        let toml_content = r#"
[project]
name = "osx-ide"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_with_bad_pattern_fails_validation() {
        let toml_content = r#"
[project]
name = "osx-ide"

[[rules]]
name = "broken"
pattern = '[unclosed'
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[project]
name = "file-test"
file = "project.pbxproj"

[[rules]]
name = "anything"
pattern = 'x'
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.project.name, "file-test");
        assert_eq!(config.deletion_rules().len(), 1);
    }

    #[test]
    fn test_rule_order_is_preserved() {
        let toml_content = r#"
[project]
name = "osx-ide"

[[rules]]
name = "first"
pattern = 'a'

[[rules]]
name = "second"
pattern = 'b'

[[rules]]
name = "third"
pattern = 'c'
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let names: Vec<String> = config
            .deletion_rules()
            .iter()
            .map(|r| r.name.clone())
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }
}
