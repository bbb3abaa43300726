use calc_prompts::core::Prompter;
use calc_prompts::utils::{logger, validation::Validate};
use calc_prompts::{
    AppConfig, CalcError, CliConfig, ConsoleDisplay, ConsolePrompter, OutputFormat,
    PromptPipeline, RunOutcome, ScriptedPrompter,
};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    let config = match cli.app_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    match config.output_format() {
        OutputFormat::Text => logger::init_cli_logger(config.log_level(), cli.verbose),
        OutputFormat::Json => logger::init_json_logger(config.log_level(), cli.verbose),
    }

    tracing::debug!("Starting calc-prompts");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let result = if cli.is_scripted() {
        run(ScriptedPrompter::from_answers(cli.answers.as_slice()), &cli, config).await
    } else {
        run(ConsolePrompter::new(), &cli, config).await
    };

    if let Err(e) = result {
        tracing::error!("❌ Run failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

async fn run<P: Prompter>(
    prompter: P,
    cli: &CliConfig,
    config: AppConfig,
) -> Result<(), CalcError> {
    let exercise = cli.command.kind().exercise();
    let display = ConsoleDisplay::new(config.output_format());
    let pipeline = PromptPipeline::new(prompter, display, config);

    // 輸入錯誤與取消都是正常結束
    match pipeline.run(exercise.as_ref()).await? {
        RunOutcome::Completed(_) => tracing::debug!("result displayed"),
        RunOutcome::Rejected(failure) => tracing::debug!("input rejected: {:?}", failure),
        RunOutcome::Aborted => tracing::debug!("aborted by user"),
    }
    Ok(())
}
