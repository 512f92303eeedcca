use clap::Parser;
use personalens::cli::handle_analyze_command;
use personalens::cli::handle_compare_command;
use personalens::cli::handle_config_command;
use personalens::cli::handle_lexicons_command;
use personalens::cli::print_error;
use personalens::cli::Cli;
use personalens::cli::Commands;
use personalens::AppConfig;
use personalens::PersonaLens;
use personalens::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize logging
    if cli.verbose {
        personalens::logging::init_logging_with_level("debug", config.log_dir())?;
    } else {
        personalens::logging::init_logging_with_config(&config)?;
    }
    info!("Configuration loaded successfully");

    // Static lexicon tables are checked before any command runs
    let lens = match PersonaLens::new(config) {
        Ok(lens) => lens,
        Err(e) => {
            print_error(&format!("Startup validation failed: {e}"));
            return Err(e);
        }
    };

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            persona,
        } => {
            handle_analyze_command(&lens, &input, format, output.as_deref(), persona).await?;
        }
        Commands::Compare {
            first,
            second,
            format,
            output,
        } => {
            handle_compare_command(&lens, &first, &second, format, output.as_deref()).await?;
        }
        Commands::Lexicons { category } => {
            handle_lexicons_command(category)?;
        }
        Commands::Config => {
            handle_config_command(lens.config())?;
        }
    }

    Ok(())
}
