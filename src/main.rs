use clap::Parser;
use cloud_referee::app::report::render_text;
use cloud_referee::config::cli::{InteractivePrompter, LayeredSource};
use cloud_referee::config::prompt::{PromptLoader, DEFAULT_PROMPT_PATH};
use cloud_referee::config::toml_config::RefereeConfig;
use cloud_referee::utils::{logger, validation::Validate};
use cloud_referee::{CliConfig, ComparisonEngine, Referee, Result, ServiceCatalog};
use std::io::{self, Write};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting cloud-referee");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        tracing::error!(
            "❌ Referee failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: CliConfig) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            RefereeConfig::from_file(path)?
        }
        None => RefereeConfig::default(),
    };
    file_config.validate()?;

    let want_preamble = cli.preamble || file_config.prompt_enabled();
    let prompt_path = cli
        .prompt_file
        .clone()
        .or_else(|| file_config.prompt.path.clone().map(Into::into))
        .unwrap_or_else(|| DEFAULT_PROMPT_PATH.into());
    let loader = PromptLoader::locate(prompt_path);

    let referee = Referee::new(ComparisonEngine::new(ServiceCatalog::standard()));

    let report = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let no_input = cli.no_input;

        let mut source = LayeredSource::new().layer(file_config).layer(cli);
        if !no_input {
            source = source.with_interactive(InteractivePrompter::new(stdin.lock(), stdout.lock()));
        }

        if want_preamble {
            referee.run_with_preamble(&mut source, &loader)?
        } else {
            referee.run(&mut source)?
        }
    };

    let mut out = io::stdout().lock();
    write!(out, "{}", render_text(&report))?;
    out.flush()?;

    Ok(())
}
