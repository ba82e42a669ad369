//! Identicon CLI - render avatars without a server
//!
//! Commands: generate, inspect
//! Outputs JSON to stdout
//! Returns non-zero on failure

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use identicon_core::AvatarPipeline;

#[derive(Parser)]
#[command(name = "identicon-cli")]
#[command(about = "Identicon CLI - deterministic gradient avatars")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an avatar
    Generate {
        /// Name to derive the avatar from
        #[arg(short, long)]
        name: String,

        /// Write the PNG here instead of embedding it as base64
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the manifest (digest, colors, output hash) for a name
    Inspect {
        /// Name to derive the avatar from
        #[arg(short, long)]
        name: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let pipeline = AvatarPipeline::new();

    match cli.command {
        Commands::Generate { name, output } => {
            let rendered = match pipeline.compile(&name) {
                Ok(r) => r,
                Err(e) => return fail(&e.to_string()),
            };

            let output_json = match output {
                Some(path) => {
                    if let Err(e) = fs::write(&path, &rendered.bytes) {
                        return fail(&format!("Failed to write {}: {}", path.display(), e));
                    }
                    serde_json::json!({
                        "success": true,
                        "manifest": rendered.manifest,
                        "path": path,
                    })
                }
                None => serde_json::json!({
                    "success": true,
                    "manifest": rendered.manifest,
                    "data_base64": BASE64.encode(&rendered.bytes),
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output_json).unwrap_or_default());
            ExitCode::SUCCESS
        }

        Commands::Inspect { name } => match pipeline.describe(&name) {
            Ok(manifest) => {
                println!("{}", serde_json::to_string_pretty(&manifest).unwrap_or_default());
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e.to_string()),
        },
    }
}

fn fail(message: &str) -> ExitCode {
    let output = serde_json::json!({
        "success": false,
        "error": message,
    });
    println!("{}", output);
    ExitCode::FAILURE
}
