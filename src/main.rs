// Figure SDK - A client library for the Figure upload hosting service
// Copyright (C) 2025 Figure SDK Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Figure command line client
//!
//! Thin front end over the SDK for claiming, inspecting and deleting
//! uploads from a shell.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figure_sdk::logger::{Logger, LoggerConfig};
use figure_sdk::{FigureClient, Token, Upload};
use tracing::{error, info, Level};

#[derive(Debug, Parser)]
#[command(name = "figure", version, about = "Manage uploads hosted on Figure")]
struct Cli {
    /// Figure server URL
    #[arg(long, env = "FIGURE_ENDPOINT")]
    endpoint: String,

    /// Application token
    #[arg(long, env = "FIGURE_TOKEN", hide_env_values = true)]
    token: String,

    /// Log level
    #[arg(long, env = "FIGURE_LOG", default_value = "warn")]
    log_level: Level,

    /// Also write JSON logs to the log directory
    #[arg(long)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Claim an anonymous upload with the secret the user received
    Claim { id: u64, secret: String },
    /// Delete an upload
    Delete { id: u64 },
    /// Show the type and sizes of an upload
    Retrieve { id: u64 },
    /// Print one size of an upload as a persisted media record
    Media { id: u64, size: String },
    /// Print the poster images for one size of an upload
    Poster { id: u64, size: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    Logger::init_with_config(LoggerConfig {
        level: cli.log_level,
        file_output: cli.log_file,
        ..Default::default()
    })?;

    info!("Figure CLI {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let client = FigureClient::from_token(&cli.endpoint, Token::new(cli.token))
        .context("Failed to create Figure client")?;

    match cli.command {
        Command::Claim { id, secret } => {
            client
                .claim(id, &secret)
                .await
                .with_context(|| format!("Failed to claim upload {}", id))?;
            println!("Claimed upload {}", id);
        }
        Command::Delete { id } => {
            client
                .delete(id)
                .await
                .with_context(|| format!("Failed to delete upload {}", id))?;
            println!("Deleted upload {}", id);
        }
        Command::Retrieve { id } => {
            let upload = retrieve(&client, id).await?;
            println!("type: {}", upload.kind());
            for size in upload.sizes() {
                let media = upload.media(size)?;
                println!(
                    "{}: {} {}x{} {}",
                    size,
                    media.mime(),
                    media.width(),
                    media.height(),
                    media.url()
                );
            }
        }
        Command::Media { id, size } => {
            let upload = retrieve(&client, id).await?;
            println!("{}", upload.media(&size)?.to_json()?);
        }
        Command::Poster { id, size } => {
            let upload = retrieve(&client, id).await?;
            for poster in upload.poster(&size)? {
                println!("{}", poster.to_json()?);
            }
        }
    }

    Ok(())
}

async fn retrieve(client: &FigureClient, id: u64) -> Result<Upload> {
    client
        .retrieve(id)
        .await
        .with_context(|| format!("Failed to retrieve upload {}", id))
}
