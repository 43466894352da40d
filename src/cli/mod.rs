use crate::{
    http::{self, AppState},
    AgentState, OpenAIClient, Pipeline, PlannerConfig, UserInput,
};
use anyhow::Context;
use clap::{Arg, ArgMatches, Command};
use std::{env, net::SocketAddr, sync::Arc, time::Duration};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "8000";

fn model_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Chat model to use (or set PLANNER_MODEL)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("OpenAI-compatible base URL (or set OPENAI_BASE_URL / OPENROUTER_BASE_URL)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .value_parser(clap::value_parser!(u64))
                .help("Per-request LLM timeout in seconds"),
        )
}

fn command() -> Command {
    Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Personality-based Singapore trip planner backed by an LLM")
        .subcommand_required(true)
        .subcommand(
            model_args(Command::new("serve").about("Run the HTTP API"))
                .arg(
                    Arg::new("host")
                        .long("host")
                        .value_name("HOST")
                        .help("Bind address (or set HOST)"),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .value_name("PORT")
                        .help("Bind port (or set PORT)"),
                ),
        )
        .subcommand(
            model_args(Command::new("plan").about("Plan one trip and print it as JSON")).arg(
                Arg::new("input")
                    .help("Free-text description of personality, budget, interests, energy and social preference")
                    .required(true)
                    .index(1),
            ),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<PlannerConfig> {
    let mut config = PlannerConfig::from_env()?;

    if let Some(model) = matches.get_one::<String>("model") {
        config = config.with_model(model);
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(base_url);
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config = config.with_timeout(Duration::from_secs(*timeout));
    }

    Ok(config)
}

fn bind_addr(matches: &ArgMatches) -> anyhow::Result<SocketAddr> {
    let host = matches
        .get_one::<String>("host")
        .cloned()
        .or_else(|| env::var("HOST").ok())
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = matches
        .get_one::<String>("port")
        .cloned()
        .or_else(|| env::var("PORT").ok())
        .unwrap_or_else(|| DEFAULT_PORT.to_string());

    format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid bind address {host}:{port}"))
}

/// CLI entry point for the trip-planner binary
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = command().get_matches();

    match matches.subcommand() {
        Some(("serve", sub)) => {
            let config = load_config(sub)?;
            let addr = bind_addr(sub)?;
            info!(model = %config.model, base_url = %config.base_url, "starting trip planner API");

            let model = Arc::new(OpenAIClient::new(&config)?);
            http::serve(AppState::new(model, &config), addr).await?;
        }
        Some(("plan", sub)) => {
            let config = load_config(sub)?;
            let input = sub
                .get_one::<String>("input")
                .context("input text is required")?;

            let client = OpenAIClient::new(&config)?;
            let pipeline = Pipeline::trip_planner(&config);
            info!(model = %config.model, "planning trip");

            match pipeline
                .run_traced(&client, AgentState::new(UserInput::new(input.as_str())))
                .await
            {
                Ok(run) => {
                    info!("{}", run.replay());
                    println!("{}", serde_json::to_string_pretty(&run.state.final_trip_plan)?);
                    if let Some(reason) = &run.state.reason_for_recommendations {
                        println!("\nWhy these activities:\n{}", reason);
                    }
                }
                Err(e) => {
                    error!(payload = %e.to_error_payload(), "trip planning failed");
                    return Err(e.into());
                }
            }
        }
        _ => unreachable!("clap enforces a subcommand"),
    }

    Ok(())
}
