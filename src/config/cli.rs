use crate::adapters::clock::FixedClock;
use crate::adapters::host::{MetaRequest, HTTP_REFERER, HTTP_USER_AGENT, REMOTE_ADDR};
use crate::config::toml_config::TomlConfig;
use crate::core::render::OutputFormat;
use crate::core::submission::Submission;
use crate::domain::entities::{Author, Comment, Request, Site};
use crate::domain::ports::Clock;
use crate::utils::error::{AntispamError, Result};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "antispam")]
#[command(about = "Build spam-check parameters for a comment")]
pub struct CliConfig {
    #[arg(long, help = "Comment text")]
    pub content: String,

    #[arg(long = "type", help = "Comment type, e.g. comment, reply, forum-post")]
    pub comment_type: Option<String>,

    #[arg(long)]
    pub permalink: Option<String>,

    #[arg(long, help = "Creation time as epoch seconds (defaults to now)")]
    pub created: Option<i64>,

    #[arg(long)]
    pub author_name: Option<String>,

    #[arg(long)]
    pub author_email: Option<String>,

    #[arg(long)]
    pub author_url: Option<String>,

    #[arg(long)]
    pub author_role: Option<String>,

    #[arg(long)]
    pub site_url: Option<String>,

    #[arg(long)]
    pub site_lang: Option<String>,

    #[arg(long, help = "Client IP address")]
    pub ip: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,

    #[arg(long)]
    pub referrer: Option<String>,

    #[arg(long, help = "TOML file with site/author/request/comment defaults")]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Form)]
    pub format: OutputFormat,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_defaults(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path),
            None => Ok(TomlConfig::default()),
        }
    }

    /// 命令列參數優先於 TOML 預設值
    pub fn to_submission<C: Clock + ?Sized>(
        &self,
        defaults: &TomlConfig,
        clock: &C,
    ) -> Result<Submission> {
        let mut builder = Comment::builder(self.content.clone());

        if let Some(comment_type) = self.comment_type.as_deref().or(defaults.comment_type()) {
            builder = builder.comment_type(comment_type);
        }
        if let Some(permalink) = self.permalink.as_deref().or(defaults.permalink()) {
            builder = builder.permalink(permalink);
        }
        if let Some(secs) = self.created {
            let fixed = FixedClock::from_timestamp(secs).ok_or_else(|| {
                AntispamError::InvalidConfigValueError {
                    field: "created".to_string(),
                    value: secs.to_string(),
                    reason: "Timestamp out of range".to_string(),
                }
            })?;
            builder = builder.created(fixed.now());
        }
        if let Some(author) = self.author(defaults)? {
            builder = builder.author(author);
        }
        if let Some(site) = self.site(defaults)? {
            builder = builder.site(site);
        }

        let mut submission = Submission::new(builder.build(clock));
        if let Some(request) = self.request(defaults)? {
            submission = submission.with_request(request);
        }
        Ok(submission)
    }

    fn author(&self, defaults: &TomlConfig) -> Result<Option<Author>> {
        let author = match (&self.author_name, defaults.author.clone()) {
            (Some(name), Some(base)) => Some(Author {
                name: name.clone(),
                ..base
            }),
            (Some(name), None) => Some(Author::new(name.clone())),
            (None, base) => base,
        };

        let Some(mut author) = author else {
            if self.author_email.is_some()
                || self.author_url.is_some()
                || self.author_role.is_some()
            {
                return Err(required("author.name", "--author-name"));
            }
            return Ok(None);
        };

        if let Some(email) = &self.author_email {
            author.email = Some(email.clone());
        }
        if let Some(url) = &self.author_url {
            author.url = Some(url.clone());
        }
        if let Some(role) = &self.author_role {
            author.role = Some(role.clone());
        }
        Ok(Some(author))
    }

    fn site(&self, defaults: &TomlConfig) -> Result<Option<Site>> {
        let site = match (&self.site_url, defaults.site.clone()) {
            (Some(url), Some(base)) => Some(Site {
                url: url.clone(),
                ..base
            }),
            (Some(url), None) => Some(Site::new(url.clone(), None)),
            (None, base) => base,
        };

        match site {
            Some(mut site) => {
                if let Some(lang) = &self.site_lang {
                    site.language_code = Some(lang.clone());
                }
                Ok(Some(site))
            }
            None if self.site_lang.is_some() => Err(required("site.url", "--site-url")),
            None => Ok(None),
        }
    }

    /// Request flags are funnelled through the META adapter so the CLI
    /// extracts them exactly like a framework integration would.
    fn request(&self, defaults: &TomlConfig) -> Result<Option<Request>> {
        let mut meta = MetaRequest::default();
        if let Some(base) = &defaults.request {
            meta.insert(REMOTE_ADDR, base.ip_address.clone())
                .insert(HTTP_USER_AGENT, base.user_agent.clone());
            if let Some(referrer) = &base.referrer {
                meta.insert(HTTP_REFERER, referrer.clone());
            }
        }
        if let Some(ip) = &self.ip {
            meta.insert(REMOTE_ADDR, ip.clone());
        }
        if let Some(agent) = &self.user_agent {
            meta.insert(HTTP_USER_AGENT, agent.clone());
        }
        if let Some(referrer) = &self.referrer {
            meta.insert(HTTP_REFERER, referrer.clone());
        }

        if meta == MetaRequest::default() {
            return Ok(None);
        }
        Request::from_host_request(&meta).map(Some)
    }
}

fn required(field: &str, flag: &str) -> AntispamError {
    AntispamError::ConfigValidationError {
        field: field.to_string(),
        message: format!("{} is required when related options are given", flag),
    }
}
