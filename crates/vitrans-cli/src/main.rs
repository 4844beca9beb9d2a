mod shell;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use vitrans_controller::{ImageController, ModeState, Phase, TextController};
use vitrans_media::SelectedImage;
use vitrans_translate::Translator;

#[derive(Parser)]
#[command(name = "vitrans", about = "Translate text or images into Vietnamese")]
struct Cli {
    /// Model ID to use (overrides config and VITRANS_MODEL)
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate text (reads stdin when TEXT is omitted)
    Text {
        /// Text to translate
        text: Option<String>,
    },
    /// Extract and translate the text in an image
    Image {
        /// Path to a PNG, JPG or WEBP file
        path: PathBuf,
    },
    /// Choose a mode and translate interactively (default)
    Interactive,
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // A missing credential stops here, before anything interactive starts.
    let mut config = vitrans_config::load_config().context("Failed to load configuration")?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    tracing::debug!(model = %config.model, base_url = %config.base_url, "Configuration loaded");

    let translator = Arc::new(Translator::from_config(&config));
    let rt = tokio::runtime::Runtime::new()?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Text { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            let controller = TextController::new(translator);
            controller.edit(text);
            let state = rt.block_on(controller.submit());
            Ok(report(&state))
        }
        Commands::Image { path } => {
            let controller = ImageController::new(translator);
            controller.edit(Some(SelectedImage::new(path)));
            let state = rt.block_on(controller.submit());
            Ok(report(&state))
        }
        Commands::Interactive => {
            rt.block_on(shell::run_shell(translator))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Print a one-shot outcome: result on stdout, message on stderr.
fn report<I>(state: &ModeState<I>) -> ExitCode {
    match (&state.phase, &state.error) {
        (Phase::ShowingResult, _) => {
            println!("{}", state.result);
            ExitCode::SUCCESS
        }
        (_, Some(message)) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
        _ => ExitCode::FAILURE,
    }
}
