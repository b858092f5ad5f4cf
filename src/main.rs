use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;
mod config;
mod extract;
mod fields;
mod llm;
mod prompt;
mod table;
mod util;

#[derive(Parser)]
#[command(name = "querygen", version)]
#[command(
    about = "Map source and target data systems and generate queries for database testing",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a database-testing query from the mapping details
    Generate {
        /// Source system: sql-server, oracle, rdbms, flat-files
        #[arg(long)]
        source_system: Option<String>,

        /// Target system: sql-server, oracle
        #[arg(long)]
        target_system: Option<String>,

        /// Validation type: select, update, duplicate, null, aggregate, count, compare
        #[arg(long)]
        validation: Option<String>,

        /// Path to a tab-separated file with source table sample rows
        #[arg(long)]
        source_table: Option<String>,

        /// Path to a tab-separated file with target table sample rows (mandatory)
        #[arg(long)]
        target_table: Option<String>,

        /// Source condition: order-by or group-by
        #[arg(long)]
        source_condition: Option<String>,

        /// Target condition: order-by or group-by
        #[arg(long)]
        target_condition: Option<String>,

        /// Source column name
        #[arg(long, default_value = "")]
        source_column: String,

        /// Target column name
        #[arg(long, default_value = "")]
        target_column: String,

        /// Free-text source logic
        #[arg(long, default_value = "")]
        source_logic: String,

        /// Free-text target logic
        #[arg(long, default_value = "")]
        target_logic: String,

        /// Randomness of the output, 0.0 to 2.0 (default: from config)
        #[arg(long)]
        temperature: Option<f32>,

        /// Nucleus sampling threshold, 0.0 to 1.0 (default: from config)
        #[arg(long)]
        top_p: Option<f32>,

        /// Path to config file (defaults to ./querygen.toml or ~/.config/querygen/config.toml)
        #[arg(long)]
        config: Option<String>,

        /// Override the Gemini model (e.g., "gemini-1.5-flash-latest")
        #[arg(long)]
        model: Option<String>,

        /// Use the mock model client instead of the API
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify the configured API key with a minimal request
    VerifyKey {
        /// Path to config file
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            source_system,
            target_system,
            validation,
            source_table,
            target_table,
            source_condition,
            target_condition,
            source_column,
            target_column,
            source_logic,
            target_logic,
            temperature,
            top_p,
            config,
            model,
            dry_run,
        } => {
            cli::generate::run(
                source_system,
                target_system,
                validation,
                source_table,
                target_table,
                source_condition,
                target_condition,
                source_column,
                target_column,
                source_logic,
                target_logic,
                temperature,
                top_p,
                config,
                model,
                dry_run,
            )
            .await?;
        }
        Commands::VerifyKey { config } => {
            cli::verify::run(config).await?;
        }
    }

    Ok(())
}
