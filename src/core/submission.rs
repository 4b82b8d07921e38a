use crate::domain::entities::{Comment, Request};
use crate::domain::model::{merge_params, Params};
use crate::domain::ports::AsParams;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Everything sent for a single comment check: the inbound request (when
/// known) and the comment with its author and site.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub request: Option<Request>,
    pub comment: Comment,
}

impl Submission {
    pub fn new(comment: Comment) -> Self {
        Self {
            request: None,
            comment,
        }
    }

    pub fn with_request(mut self, request: Request) -> Self {
        self.request = Some(request);
        self
    }
}

impl AsParams for Submission {
    fn as_params(&self) -> Params {
        let mut params = self
            .request
            .as_ref()
            .map(AsParams::as_params)
            .unwrap_or_default();
        merge_params(&mut params, self.comment.as_params());

        tracing::debug!(count = params.len(), "submission parameters built");
        params
    }
}

impl Validate for Submission {
    fn validate(&self) -> Result<()> {
        if let Some(request) = &self.request {
            request.validate()?;
        }
        self.comment.validate()
    }
}
