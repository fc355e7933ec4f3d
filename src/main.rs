// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{debug, info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

use sigloss::app_config::{self, Config};
use sigloss::catalog::SignCatalog;
use sigloss::engine::console::ConsoleEngine;
use sigloss::engine::RenderEngine;
use sigloss::sequencer::PlaybackSequencer;
use sigloss::translator::Translator;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate text into SOV glosses and sign identifiers (default command)
    Translate(TranslateArgs),

    /// Translate text and play the resolved signs at the configured cadence
    Play(TranslateArgs),

    /// Generate shell completions for sigloss
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Path to a JSON sign-catalog dataset (overrides the config)
    #[arg(short = 'C', long)]
    catalog: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Emit the result as JSON instead of plain text
    #[arg(short, long)]
    json: bool,
}

/// sigloss - sign-language gloss compiler
///
/// Translates free-form text into Subject-Object-Verb gloss order and
/// resolves every gloss to a playable sign-animation identifier.
#[derive(Parser, Debug)]
#[command(name = "sigloss")]
#[command(version = "0.1.0")]
#[command(about = "Text-to-gloss compiler and sign playback sequencer")]
#[command(long_about = "sigloss compiles English text into sign-language gloss order and resolves
every gloss to an animation identifier from the sign catalog.

EXAMPLES:
    sigloss \"I am eating food\"              # Print SOV glosses and sign ids
    sigloss translate -j \"what is your name\" # JSON output
    sigloss play \"I don't like rain\"         # Paced playback on the console engine
    sigloss -C isl-dataset.json \"hello\"      # Use an external catalog dataset
    sigloss completions bash > sigloss.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different file with --config-path. If the config file doesn't exist, a
    default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Path to a JSON sign-catalog dataset (overrides the config)
    #[arg(short = 'C', long)]
    catalog: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Emit the result as JSON instead of plain text
    #[arg(short, long)]
    json: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "sigloss", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        Some(Commands::Play(args)) => run_play(args).await,
        None => {
            // Default behavior - use top-level args
            let text = cli
                .text
                .ok_or_else(|| anyhow!("TEXT is required when no subcommand is specified"))?;
            run_translate(TranslateArgs {
                text,
                catalog: cli.catalog,
                config_path: cli.config_path,
                log_level: cli.log_level,
                json: cli.json,
            })
            .await
        }
    }
}

/// Load config and catalog, honoring command-line overrides
fn setup(options: &TranslateArgs) -> Result<(Config, Arc<SignCatalog>)> {
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config = Config::load_or_default(&options.config_path)?;
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let catalog_path = options.catalog.clone().or_else(|| config.catalog_path.clone());
    let catalog = match catalog_path {
        Some(path) => Arc::new(
            SignCatalog::from_json_file(&path)
                .context(format!("Failed to load sign catalog from {}", path))?,
        ),
        None => {
            debug!("No catalog path configured, using built-in vocabulary");
            Arc::new(SignCatalog::builtin().clone())
        }
    };

    Ok((config, catalog))
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    let (config, catalog) = setup(&options)?;
    let translator = Translator::new(catalog).with_default_gloss(&config.default_gloss);
    let result = translator.translate(&options.text);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("glosses: {}", result.display_tokens.join(" "));
        println!("signs:   {}", result.sign_identifiers.join(" "));
    }
    Ok(())
}

async fn run_play(options: TranslateArgs) -> Result<()> {
    let (config, catalog) = setup(&options)?;
    let translator = Translator::new(catalog).with_default_gloss(&config.default_gloss);
    let result = translator.translate(&options.text);
    info!("Playing {} signs: {}", result.sign_identifiers.len(), result.display_tokens.join(" "));

    // Keep the simulated animation shorter than the step cadence so the
    // console playback paces at exactly one sign per step.
    let engine = Arc::new(ConsoleEngine::new(Duration::from_millis(config.step_ms / 2)));
    engine.initialize().await?;

    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), config.timing());
    sequencer.start(result.sign_identifiers);

    tokio::select! {
        state = sequencer.wait_until_terminal() => {
            info!("Playback finished with state: {}", state);
        }
        _ = tokio::signal::ctrl_c() => {
            sequencer.stop().await;
            info!("Playback interrupted");
        }
    }
    Ok(())
}
