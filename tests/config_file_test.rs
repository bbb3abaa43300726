#![cfg(feature = "cli")]

use anyhow::Result;
use calc_prompts::utils::validation::Validate;
use calc_prompts::{CliConfig, OutputFormat};
use clap::Parser;
use tempfile::TempDir;

#[test]
fn test_cli_loads_config_file_and_overrides_format() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("calc.toml");
    std::fs::write(
        &config_path,
        r#"
[display]
currency_symbol = "CHF "
format = "json"

[logging]
level = "warn"
"#,
    )?;
    let path = config_path.to_str().expect("temp path is utf-8");

    let cli = CliConfig::try_parse_from(["calc-prompts", "--config", path, "wage"])?;
    let config = cli.app_config()?;
    assert_eq!(config.output_format(), OutputFormat::Json);
    assert_eq!(config.log_level(), "warn");
    assert!(config.validate().is_ok());

    let cli = CliConfig::try_parse_from([
        "calc-prompts",
        "--config",
        path,
        "--format",
        "text",
        "wage",
    ])?;
    assert_eq!(cli.app_config()?.output_format(), OutputFormat::Text);
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let missing = temp_dir.path().join("nope.toml");

    let cli = CliConfig::try_parse_from([
        "calc-prompts",
        "add",
        "--config",
        missing.to_str().expect("temp path is utf-8"),
    ])?;
    let err = cli.app_config().unwrap_err();
    assert_eq!(err.exit_code(), 2);
    Ok(())
}
