#![cfg(feature = "cli")]

use anyhow::Result;
use antispam::utils::validation::Validate;
use antispam::{render, CliConfig, FixedClock, OutputFormat};
use clap::Parser;
use tempfile::TempDir;

#[test]
fn test_cli_with_toml_defaults_renders_form() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("antispam.toml");
    std::fs::write(
        &config_path,
        r#"
[site]
url = "http://mike.example.com/"
language_code = "it"

[author]
name = "Mike"
email = "mike@mail.loc"

[comment]
type = "comment"
"#,
    )?;

    let cli = CliConfig::try_parse_from([
        "antispam",
        "--content",
        "hello world",
        "--ip",
        "127.0.0.2",
        "--user-agent",
        "python/tests",
        "--config",
        config_path.to_str().unwrap(),
    ])?;

    let defaults = cli.load_defaults()?;
    defaults.validate()?;
    let submission = cli.to_submission(&defaults, &FixedClock::from_timestamp(1_700_000_000).unwrap())?;
    submission.validate()?;

    let output = render(&submission, cli.format)?;

    assert_eq!(
        output,
        "blog=http%3A%2F%2Fmike.example.com%2F&blog_lang=it\
         &comment_author=Mike&comment_author_email=mike%40mail.loc\
         &comment_content=hello+world&comment_date=1700000000&comment_type=comment\
         &user_agent=python%2Ftests&user_ip=127.0.0.2"
    );
    Ok(())
}

#[test]
fn test_cli_json_output() -> Result<()> {
    let cli = CliConfig::try_parse_from([
        "antispam",
        "--content",
        "hi",
        "--author-name",
        "Ann",
        "--author-role",
        "moderator",
        "--format",
        "json",
    ])?;
    assert_eq!(cli.format, OutputFormat::Json);

    let submission = cli.to_submission(&cli.load_defaults()?, &FixedClock::from_timestamp(7).unwrap())?;
    let json: serde_json::Value = serde_json::from_str(&render(&submission, cli.format)?)?;

    assert_eq!(json["comment_author"], "Ann");
    assert_eq!(json["user_role"], "moderator");
    assert_eq!(json["comment_date"], 7);
    assert!(json.get("user_ip").is_none());
    Ok(())
}

#[test]
fn test_cli_missing_config_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");

    let cli = CliConfig::try_parse_from([
        "antispam",
        "--content",
        "hi",
        "--config",
        missing.to_str().unwrap(),
    ])?;

    assert!(matches!(
        cli.load_defaults(),
        Err(antispam::AntispamError::IoError(_))
    ));
    Ok(())
}

#[test]
fn test_invalid_site_url_fails_validation() -> Result<()> {
    let cli = CliConfig::try_parse_from([
        "antispam",
        "--content",
        "hi",
        "--site-url",
        "mike.example.com",
    ])?;

    let submission = cli.to_submission(&cli.load_defaults()?, &FixedClock::from_timestamp(7).unwrap())?;
    assert!(submission.validate().is_err());
    Ok(())
}
