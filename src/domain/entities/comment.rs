//! The comment under review, optionally linked to its author and site.

use crate::domain::entities::{Author, Site};
use crate::domain::model::{insert_present, merge_params, ParamValue, Params};
use crate::domain::ports::{AsParams, Clock};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_optional, validate_url, Validate};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A comment as submitted to the spam-detection service.
///
/// `author` and `site` are shared handles: a single site is normally attached
/// to every comment it hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub content: String,
    pub comment_type: Option<String>,
    pub permalink: Option<String>,
    pub created: DateTime<Utc>,
    pub author: Option<Arc<Author>>,
    pub site: Option<Arc<Site>>,
}

impl Comment {
    pub fn builder(content: impl Into<String>) -> CommentBuilder {
        CommentBuilder::new(content)
    }

    /// `created` as integer epoch seconds, the `comment_date` wire format.
    pub fn created_timestamp(&self) -> i64 {
        self.created.timestamp()
    }
}

impl AsParams for Comment {
    fn as_params(&self) -> Params {
        let mut params = Params::new();
        insert_present(&mut params, "comment_content", Some(&self.content));
        params.insert(
            "comment_date".to_string(),
            ParamValue::Integer(self.created_timestamp()),
        );
        insert_present(&mut params, "comment_type", self.comment_type.as_deref());
        insert_present(&mut params, "permalink", self.permalink.as_deref());

        if let Some(author) = &self.author {
            merge_params(&mut params, author.as_params());
        }
        if let Some(site) = &self.site {
            merge_params(&mut params, site.as_params());
        }

        params
    }
}

impl Validate for Comment {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("comment_content", &self.content)?;
        validate_optional("permalink", self.permalink.as_deref(), validate_url)?;
        if let Some(author) = &self.author {
            author.validate()?;
        }
        if let Some(site) = &self.site {
            site.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CommentBuilder {
    content: String,
    comment_type: Option<String>,
    permalink: Option<String>,
    created: Option<DateTime<Utc>>,
    author: Option<Arc<Author>>,
    site: Option<Arc<Site>>,
}

impl CommentBuilder {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            comment_type: None,
            permalink: None,
            created: None,
            author: None,
            site: None,
        }
    }

    /// Type label such as `comment`, `reply` or `forum-post`.
    pub fn comment_type(mut self, comment_type: impl Into<String>) -> Self {
        self.comment_type = Some(comment_type.into());
        self
    }

    pub fn permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    pub fn author(mut self, author: impl Into<Arc<Author>>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn site(mut self, site: impl Into<Arc<Site>>) -> Self {
        self.site = Some(site.into());
        self
    }

    /// Finishes the comment; the clock is only consulted when no explicit
    /// creation time was given.
    pub fn build<C: Clock + ?Sized>(self, clock: &C) -> Comment {
        let created = self.created.unwrap_or_else(|| clock.now());

        Comment {
            content: self.content,
            comment_type: self.comment_type,
            permalink: self.permalink,
            created,
            author: self.author,
            site: self.site,
        }
    }
}
