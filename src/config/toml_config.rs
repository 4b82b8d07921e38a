use crate::domain::entities::{Author, Request, Site};
use crate::utils::error::{AntispamError, Result};
use crate::utils::validation::{validate_optional, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults applied to every comment built by the CLI.
///
/// ```toml
/// [site]
/// url = "${SITE_URL}"
/// language_code = "it"
///
/// [comment]
/// type = "comment"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub site: Option<Site>,
    pub author: Option<Author>,
    pub request: Option<Request>,
    pub comment: Option<CommentDefaults>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentDefaults {
    #[serde(rename = "type")]
    pub comment_type: Option<String>,
    pub permalink: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!(path = %path.as_ref().display(), "loading TOML config");
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AntispamError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SITE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AntispamError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(site) = &self.site {
            site.validate()?;
        }
        if let Some(author) = &self.author {
            author.validate()?;
        }
        if let Some(request) = &self.request {
            request.validate()?;
        }
        if let Some(comment) = &self.comment {
            validate_optional("comment.permalink", comment.permalink.as_deref(), validate_url)?;
        }
        Ok(())
    }

    pub fn comment_type(&self) -> Option<&str> {
        self.comment.as_ref().and_then(|c| c.comment_type.as_deref())
    }

    pub fn permalink(&self) -> Option<&str> {
        self.comment.as_ref().and_then(|c| c.permalink.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
