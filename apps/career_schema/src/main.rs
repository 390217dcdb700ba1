use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use career_schema::payload::decode_payload;
use career_schema::{telemetry, Config, ContractKind, ValidationOptions};

#[derive(Parser)]
#[command(name = "career-schema")]
#[command(about = "Check career-guidance LLM output against its contract", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a model response read from FILE, or stdin
    Validate {
        /// career_recommendations, career_quantitative, career_qualitative or career_qualitative_v1
        contract: ContractKind,

        file: Option<PathBuf>,

        /// Turn on every opt-in check regardless of CAREER_SCHEMA_* flags
        #[arg(long)]
        strict: bool,
    },
    /// Print the JSON Schema of a contract
    Schema { contract: ContractKind },
}

fn main() -> Result<()> {
    let config = Config::from_env()?;
    telemetry::init_tracing(&config.rust_log)?;

    match Cli::parse().command {
        Commands::Validate {
            contract,
            file,
            strict,
        } => {
            let text = read_input(file.as_ref())?;
            let options = if strict {
                ValidationOptions::strict()
            } else {
                config.validation
            };
            let value = decode_payload(&text)?;
            match contract.validate(&value, &options) {
                Ok(output) => {
                    info!(contract = %contract, exchange = contract.exchange(), "payload valid");
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                Err(err) => {
                    eprint!("{}", err.report());
                    std::process::exit(1);
                }
            }
        }
        Commands::Schema { contract } => {
            println!("{}", serde_json::to_string_pretty(&contract.root_schema())?);
        }
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
