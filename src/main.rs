mod api;
mod error;
mod oauth;

use crate::api::{ApiClient, ComponentPath, ResourceKind};
use crate::oauth::{Config, DEFAULT_CONFIG_PATH};
use anyhow::Context;
use clap::{Parser, Subcommand};
use reqwest::Method;
use serde_json::Value;
use std::path::PathBuf;

/// A command-line client for the Plutora REST API.
#[derive(Parser)]
#[command(name = "plutoractl", version)]
struct Cli {
    /// JSON file holding the API URLs and credentials.
    #[arg(long, global = true, env = "PLUTORA_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a freshly issued access token.
    Token,
    /// Make a REST API call, e.g. `call GET systems`.
    Call {
        #[arg(value_parser = parse_verb)]
        verb: Method,
        /// Relative to the configured `baseUrl`.
        path: String,
        /// JSON body for PUT and POST.
        #[arg(long)]
        data: Option<String>,
    },
    /// Print the GUID of the object at an API path with the given name.
    Guid {
        path: String,
        name: String,
        /// The field to match `name` against.
        #[arg(long, default_value = "name")]
        field: String,
    },
    /// Print the GUID of a component within an environment's host.
    Component {
        #[arg(long)]
        environment: String,
        #[arg(long)]
        host: String,
        /// The stack layer, e.g. "App" or "Database".
        #[arg(long)]
        layer: String,
        #[arg(long)]
        component: String,
    },
    /// Print the field metadata for systems, environments or releases.
    Fields { kind: ResourceKind },
}

fn parse_verb(verb: &str) -> Result<Method, String> {
    Method::from_bytes(verb.to_ascii_uppercase().as_bytes()).map_err(|error| error.to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Field metadata is static; there is no need to authenticate for it.
    if let Command::Fields { kind } = cli.command {
        println!("{}", serde_json::to_string_pretty(kind.fields())?);
        return Ok(());
    }

    let mut config = Config::load(&cli.config)
        .with_context(|| format!("unable to load {}", cli.config.display()))?;
    config.ensure_password()?;
    let client = ApiClient::new(config);

    match cli.command {
        Command::Token => println!("{}", client.access_token().await?),
        Command::Call { verb, path, data } => {
            let data = data
                .map(|data| serde_json::from_str::<Value>(&data))
                .transpose()
                .context("--data must be valid JSON")?;
            if let Some(response) = client.api(verb, &path, data.as_ref()).await? {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Command::Guid { path, name, field } => {
            println!(
                "{}",
                api::guid_by_path_and_name(&client, &path, &name, &field).await?
            );
        }
        Command::Component {
            environment,
            host,
            layer,
            component,
        } => {
            let path = ComponentPath {
                environment_name: environment,
                host_name: host,
                layer_type: layer,
                component_name: component,
            };
            println!("{}", api::get_component_id(&client, &path).await?);
        }
        Command::Fields { .. } => {}
    }
    Ok(())
}
