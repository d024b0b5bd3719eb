use crate::config::{DEFAULT_BASE_DIR, SUPPORTED_EXTENSIONS};
use crate::core::ConfigProvider;
use crate::utils::error::{FixError, Result};
use crate::utils::validation::{validate_targets, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target: TargetConfig,
    pub rewrite: Option<RewriteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetConfig {
    pub base_dir: Option<String>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewriteConfig {
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FixError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AGENTS_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 命令列 --dry-run 優先於設定檔
    pub fn force_dry_run(&mut self) {
        self.rewrite.get_or_insert_with(RewriteConfig::default).dry_run = Some(true);
    }
}

impl ConfigProvider for TomlConfig {
    fn base_dir(&self) -> &str {
        self.target.base_dir.as_deref().unwrap_or(DEFAULT_BASE_DIR)
    }

    fn target_files(&self) -> &[String] {
        &self.target.files
    }

    fn dry_run(&self) -> bool {
        self.rewrite
            .as_ref()
            .and_then(|r| r.dry_run)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_targets(
            "target.base_dir",
            self.base_dir(),
            "target.files",
            &self.target.files,
            SUPPORTED_EXTENSIONS,
        )
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
[target]
base_dir = "railway-workers/src/agents"
files = ["real-citation-agent.ts", "real-commerce-agent.ts"]

[rewrite]
dry_run = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_dir(), "railway-workers/src/agents");
        assert_eq!(config.target_files().len(), 2);
        assert!(config.dry_run());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_when_optional_sections_missing() {
        let toml_content = r#"
[target]
files = ["advanced-crawl-agent.ts"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_dir(), "src/agents");
        assert!(!config.dry_run());
    }

    #[test]
    fn test_force_dry_run() {
        let mut config = TomlConfig::from_toml_str("[target]\nfiles = [\"a.ts\"]\n").unwrap();
        assert!(!config.dry_run());

        config.force_dry_run();
        assert!(config.dry_run());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FIX_AGENT_TEST_BASE_DIR", "/tmp/agents");

        let toml_content = r#"
[target]
base_dir = "${FIX_AGENT_TEST_BASE_DIR}"
files = ["real-citation-agent.ts"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_dir(), "/tmp/agents");

        std::env::remove_var("FIX_AGENT_TEST_BASE_DIR");
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let toml_content = r#"
[target]
base_dir = "${FIX_AGENT_SURELY_UNSET_VAR}"
files = ["a.ts"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_dir(), "${FIX_AGENT_SURELY_UNSET_VAR}");
    }

    #[test]
    fn test_config_validation() {
        let empty = TomlConfig::from_toml_str("[target]\nfiles = []\n").unwrap();
        assert!(empty.validate().is_err());

        let bad_ext = TomlConfig::from_toml_str("[target]\nfiles = [\"notes.txt\"]\n").unwrap();
        assert!(bad_ext.validate().is_err());
    }

    #[test]
    fn test_missing_target_section_is_parse_error() {
        let err = TomlConfig::from_toml_str("[rewrite]\ndry_run = true\n").unwrap_err();
        assert!(matches!(err, FixError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[target]
files = ["real-geo-visibility-agent.ts"]
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.target_files(), ["real-geo-visibility-agent.ts"]);
    }
}
