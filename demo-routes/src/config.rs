use anyhow::{Context, Result};
use clap::Parser;
use derivative::Derivative;
use gif_search::APIConfig;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

#[derive(Parser, Debug, Default, Clone)]
#[command(version, about)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory served under `/static`; uploads go to its `images` folder
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub server: Server,
    pub storage: Storage,
    pub gif: APIConfig,

    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Server {
    #[derivative(Default(value = "\"0.0.0.0\".to_string()"))]
    pub host: String,

    #[derivative(Default(value = "5000"))]
    pub port: u16,
}

#[derive(Serialize, Deserialize, Debug, Clone, Derivative)]
#[derivative(Default)]
#[serde(default)]
pub struct Storage {
    #[derivative(Default(value = "PathBuf::from(\"static\")"))]
    pub static_dir: PathBuf,
}

impl Config {
    /// File first, then secrets from the environment, then command line flags.
    pub fn load(cli: &Cli) -> Result<Config> {
        let mut config = match &cli.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("read config file {} failed", path.display()))?;
                toml::from_str::<Config>(&text)
                    .with_context(|| format!("parse config file {} failed", path.display()))?
            }
            None => Config::default(),
        };

        config.apply_env(|key| env::var(key).ok());
        config.apply_cli(cli);

        info!(
            "gif api key {}, secret key {}",
            if config.gif.api_key.is_empty() { "unset" } else { "set" },
            if config.secret_key.is_some() { "set" } else { "unset" },
        );
        debug!("{:?}", config.server);

        Ok(config)
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let first = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| var(key))
                .find(|value| !value.is_empty())
        };

        if let Some(key) = first(&["TENOR_API_KEY", "API_KEY"]) {
            self.gif.api_key = key;
        }

        if let Some(key) = first(&["TENOR_CLIENT_KEY"]) {
            self.gif.client_key = key;
        }

        if let Some(key) = first(&["SECRET_KEY", "FLASK_SECRET_KEY"]) {
            self.secret_key = Some(key);
        }
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }

        if let Some(port) = cli.port {
            self.server.port = port;
        }

        if let Some(dir) = &cli.static_dir {
            self.storage.static_dir = dir.clone();
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.storage.static_dir.join("images")
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
