use crate::core::form::{encode_form, to_json};
use crate::core::submission::Submission;
use crate::domain::ports::AsParams;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Form,
    Json,
}

pub fn render(submission: &Submission, format: OutputFormat) -> Result<String> {
    let params = submission.as_params();
    match format {
        OutputFormat::Form => Ok(encode_form(&params)),
        OutputFormat::Json => to_json(&params),
    }
}
