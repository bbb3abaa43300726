use crate::app::exercises::ExerciseKind;
use crate::config::toml_config::{AppConfig, OutputFormat};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-prompts")]
#[command(about = "Small prompt-and-compute exercises: addition, wage, birth year")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Output format, overrides the configuration file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Answer prompts from these values instead of stdin, in order
    #[arg(long = "answer", global = true, allow_hyphen_values = true)]
    pub answers: Vec<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Add two whole numbers
    Add,
    /// Yearly and hourly wage from monthly wage and weekly hours
    Wage,
    /// Birth year from age and current year
    BirthYear,
}

impl Command {
    pub fn kind(self) -> ExerciseKind {
        match self {
            Command::Add => ExerciseKind::Add,
            Command::Wage => ExerciseKind::Wage,
            Command::BirthYear => ExerciseKind::BirthYear,
        }
    }
}

impl CliConfig {
    /// 載入配置檔（或預設值）並套用命令列覆蓋設定
    pub fn app_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(format) = self.format {
            config.display.format = format;
        }

        Ok(config)
    }

    pub fn is_scripted(&self) -> bool {
        !self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommand_and_answers() {
        let cli = CliConfig::try_parse_from([
            "calc-prompts",
            "birth-year",
            "--answer",
            "-1",
            "--answer",
            "2025",
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::BirthYear));
        assert_eq!(cli.command.kind(), ExerciseKind::BirthYear);
        assert_eq!(cli.answers, vec!["-1", "2025"]);
        assert!(cli.is_scripted());
    }

    #[test]
    fn test_format_flag_overrides_defaults() {
        let cli = CliConfig::try_parse_from(["calc-prompts", "--format", "json", "wage"]).unwrap();
        let config = cli.app_config().unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert!(!cli.is_scripted());
    }
}
