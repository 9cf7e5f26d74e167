mod api_client;
mod cli;
mod config;
mod errors;
mod models;
mod operations;
mod ports;
mod state;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::CareerApiClient;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::operations::{
    exams, health, list, recommend, show, streams, submit, update, Outcome,
};
use crate::ports::terminal::{TerminalList, TerminalNotifier};
use crate::state::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so rendered lists stay clean on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_client={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Career client v{} using {}",
        env!("CARGO_PKG_VERSION"),
        config.base_url
    );

    let state = AppState::new(CareerApiClient::new(config.base_url.clone()));
    let notifier = TerminalNotifier;

    let outcome = match cli.command {
        Commands::Submit(form) => submit::submit_profile(&state, &form, &notifier).await?,
        Commands::List => {
            let profiles = TerminalList::new("Profiles:");
            let outcome = list::load_profiles(&state, &profiles).await?;
            profiles.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::Show(input) => {
            let details = TerminalList::new("Profile:");
            let outcome = show::show_profile(&state, &input, &details, &notifier).await?;
            details.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::Update(args) => {
            update::update_profile(&state, &args, &args.profile, &notifier).await?
        }
        Commands::Recommend(input) => {
            let recommendations = TerminalList::new("Recommendations:");
            let outcome =
                recommend::fetch_recommendations(&state, &input, &recommendations, &notifier)
                    .await?;
            recommendations.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::Basic(input) => {
            let recommendations = TerminalList::new("Recommendations:");
            let outcome = recommend::fetch_basic_recommendations(
                &state,
                &input,
                &recommendations,
                &notifier,
            )
            .await?;
            recommendations.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::Streams => {
            let stream_list = TerminalList::new("Education streams:");
            let outcome = streams::load_streams(&state, &stream_list, &notifier).await?;
            stream_list.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::StreamsByLevel(args) => {
            let stream_list = TerminalList::new("Education streams:");
            let outcome =
                streams::load_streams_by_level(&state, &args.level, &stream_list, &notifier)
                    .await?;
            stream_list.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::Exams(args) => {
            let exam_list = TerminalList::new("Common exams:");
            let outcome =
                exams::load_exams(&state, &args.stream_name, &exam_list, &notifier).await?;
            exam_list.print_to(&mut std::io::stdout())?;
            outcome
        }
        Commands::Health => health::check_health(&state, &notifier).await?,
    };

    if let Outcome::Rejected { status } = outcome {
        info!("Backend rejected the request with status {}", status);
    }

    Ok(())
}
