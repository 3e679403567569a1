pub mod cli;
pub mod toml_config;

use crate::core::rules;
use crate::core::ConfigProvider;
use crate::domain::model::DeletionRule;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

/// 預設目標：osx-ide 專案描述檔，跟舊清理腳本一樣
pub const DEFAULT_PROJECT_FILE: &str = "osx-ide.xcodeproj/project.pbxproj";

/// 解析完成、可直接餵給 pipeline 的配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrubConfig {
    pub project_file: String,
    pub rules: Vec<DeletionRule>,
    pub dry_run: bool,
}

impl ScrubConfig {
    /// 內建 harness 測試規則集配置
    pub fn builtin(project_file: impl Into<String>) -> Self {
        Self {
            project_file: project_file.into(),
            rules: rules::harness_test_rules(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

impl ConfigProvider for ScrubConfig {
    fn project_file(&self) -> &str {
        &self.project_file
    }

    fn rules(&self) -> &[DeletionRule] {
        &self.rules
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl Validate for ScrubConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("project_file", &self.project_file)?;
        validation::validate_rules("rules", &self.rules)
    }
}

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "pbx-scrub")]
#[command(about = "Removes the auto-generated harness test target from an Xcode project")]
pub struct CliConfig {
    /// Path to the project.pbxproj to scrub (defaults to the osx-ide descriptor)
    #[arg(long)]
    pub file: Option<String>,

    /// TOML rule file replacing the built-in harness rule set
    #[arg(short, long)]
    pub config: Option<String>,

    /// Analyze and report without writing the file back
    #[arg(long)]
    pub dry_run: bool,

    /// Write the run report as JSON to this path
    #[arg(long)]
    pub report: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Enable system resource monitoring
    #[arg(long)]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列與 TOML 設定，產出可執行的 ScrubConfig
    pub fn resolve(&self) -> Result<ScrubConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?.into_scrub_config(),
            None => ScrubConfig::builtin(DEFAULT_PROJECT_FILE),
        };

        // --file 優先於 TOML 裡的 project.file
        if let Some(file) = &self.file {
            config.project_file = file.clone();
        }
        config.dry_run = self.dry_run;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_config_targets_default_descriptor() {
        let config = ScrubConfig::builtin(DEFAULT_PROJECT_FILE);
        assert_eq!(config.project_file, "osx-ide.xcodeproj/project.pbxproj");
        assert!(!config.rules.is_empty());
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_empty_path_fails_validation() {
        let mut config = ScrubConfig::builtin("");
        assert!(config.validate().is_err());

        config.project_file = "project.pbxproj".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_no_rules_fails_validation() {
        let config = ScrubConfig {
            project_file: "project.pbxproj".to_string(),
            rules: vec![],
            dry_run: false,
        };
        assert!(config.validate().is_err());
    }
}
