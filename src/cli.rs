// src/cli.rs
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::core::{AuthClient, ConfigManager, Identity, ServiceClient};
use crate::ids;
use crate::smoke;
use crate::status::ConsoleNotifier;
use crate::uploader::ResumeUploader;

#[derive(Parser)]
#[command(name = "placement-client")]
#[command(about = "Upload résumés and talk to the placement API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to ./config.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Placement API base URL, overriding config and environment
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload a résumé and print its ATS score
    Upload {
        file: PathBuf,
        #[arg(long)]
        user_id: String,
        /// Send this MIME type instead of guessing from the extension
        #[arg(long)]
        mime: Option<String>,
    },
    /// Delete a previously uploaded résumé by its stored name
    Delete {
        file_name: String,
        #[arg(long)]
        user_id: String,
    },
    /// Register a test profile and load its dashboard
    SmokeTest {
        #[arg(long, default_value = smoke::TEST_USER_ID)]
        user_id: String,
        #[arg(long, default_value = smoke::TEST_USER_EMAIL)]
        email: String,
    },
    /// Show the dashboard for a user
    Dashboard {
        #[arg(long)]
        user_id: String,
        #[arg(long)]
        email: String,
    },
    /// Check whether a profile exists for a user
    Exists {
        #[arg(long)]
        user_id: String,
    },
    /// Ping the profile service
    Health,
    /// Print random v4 UUIDs
    Uuid {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Fetch the current account from the auth service
    Account,
}

pub async fn handle_command(cli: Cli) -> Result<()> {
    let mut config = ConfigManager::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }
    info!("Placement API: {}", config.service.api_url);

    let service = || ServiceClient::new(&config.service.api_url, config.service.timeout_seconds);

    match cli.command {
        Command::Upload {
            file,
            user_id,
            mime,
        } => {
            let uploader = ResumeUploader::new(service()?, Arc::new(ConsoleNotifier));
            match uploader
                .upload_path(&file, &user_id, mime.as_deref())
                .await
            {
                Some(data) => {
                    if let Some(score) = data.ats_score {
                        println!("ATS score: {}", score);
                    }
                    if let Some(feedback) = &data.ats_feedback {
                        println!("Feedback: {}", feedback);
                    }
                    if let Some(url) = &data.file_url {
                        println!("File URL: {}", url);
                    }
                }
                None => anyhow::bail!("Resume upload did not complete"),
            }
        }

        Command::Delete { file_name, user_id } => {
            service()?.delete_resume(&file_name, &user_id).await?;
            println!("✅ Deleted {}", file_name);
        }

        Command::SmokeTest { user_id, email } => {
            let identity = Identity::new(user_id, email);
            let result = smoke::test_registration_flow(&service()?, &identity).await?;
            println!("✅ Registration flow test successful!");
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Command::Dashboard { user_id, email } => {
            let dashboard = service()?
                .dashboard(&Identity::new(user_id, email))
                .await?;
            if !dashboard.success {
                anyhow::bail!("Dashboard failed: {}", dashboard.message_or("no message"));
            }
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        }

        Command::Exists { user_id } => {
            let existence = service()?.profile_exists(&user_id).await?;
            if !existence.success {
                anyhow::bail!(
                    "Profile check failed: {}",
                    existence.message.as_deref().unwrap_or("no message")
                );
            }
            match existence.data {
                Some(profile) if existence.exists => println!(
                    "Profile {} exists ({}% complete)",
                    profile.id,
                    profile.completion_percentage.unwrap_or(0)
                ),
                _ => println!("No profile for {}", user_id),
            }
        }

        Command::Health => {
            let health = service()?.health().await?;
            println!(
                "{} {}",
                if health.success { "✅" } else { "❌" },
                health.message_or("")
            );
        }

        Command::Uuid { count } => {
            for _ in 0..count {
                println!("{}", ids::random_uuid());
            }
        }

        Command::Account => {
            let auth = AuthClient::new(config.auth.clone(), config.service.timeout_seconds)?;
            let account = auth.account().get().await?;
            println!("{}", serde_json::to_string_pretty(&account)?);
        }
    }

    Ok(())
}
