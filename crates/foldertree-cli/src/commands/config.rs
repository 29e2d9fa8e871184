//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use foldertree_core::error::AppError;
use foldertree_database::connection::mask_password;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(env)?;
            config.database.url = mask_password(&config.database.url);

            if format == OutputFormat::Json {
                output::print_json(&config);
                return Ok(());
            }

            println!("Server:");
            output::print_kv("bind", &config.server.bind_address());
            output::print_kv(
                "shutdown grace",
                &format!("{}s", config.server.shutdown_grace_seconds),
            );
            output::print_kv("cors origins", &config.server.cors.allowed_origins.join(", "));

            println!("Database:");
            output::print_kv("provider", &format!("{:?}", config.database.provider));
            output::print_kv("url", &config.database.url);
            output::print_kv(
                "pool",
                &format!(
                    "{}..{}",
                    config.database.min_connections, config.database.max_connections
                ),
            );
            output::print_kv("ssl mode", &config.database.ssl_mode);
            output::print_kv("auto migrate", &config.database.auto_migrate.to_string());

            println!("Logging:");
            output::print_kv("level", &config.logging.level);
            output::print_kv("format", &config.logging.format);
        }
    }

    Ok(())
}
