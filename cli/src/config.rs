use serde::{Deserialize, Serialize};
use std::fs;

use lotto_engine::config::LotteryConfig;
use lotto_engine::currency::Cents;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub game: LotteryConfig,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: LotteryConfig::default(),
            seed: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    let mut cfg = Config::default();
    if let Ok(path) = std::env::var("LOTTO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.min_players {
            cfg.game.min_players = v;
        }
        if let Some(v) = f.max_players {
            cfg.game.max_players = v;
        }
        if let Some(v) = f.starting_balance {
            cfg.game.starting_balance = v;
        }
        if let Some(v) = f.ticket_price {
            cfg.game.ticket_price = v;
        }
        if let Some(v) = f.max_tickets_per_player {
            cfg.game.max_tickets_per_player = v;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
        }
    }

    if let Ok(seed) = std::env::var("LOTTO_SEED") {
        if !seed.is_empty() {
            cfg.seed = Some(
                seed.parse()
                    .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
            );
        }
    }
    if let Ok(balance) = std::env::var("LOTTO_STARTING_BALANCE") {
        if !balance.is_empty() {
            cfg.game.starting_balance = balance
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid starting balance".into()))?;
        }
    }
    if let Ok(price) = std::env::var("LOTTO_TICKET_PRICE") {
        if !price.is_empty() {
            cfg.game.ticket_price = price
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid ticket price".into()))?;
        }
    }
    if let Ok(min) = std::env::var("LOTTO_MIN_PLAYERS") {
        if !min.is_empty() {
            cfg.game.min_players = min
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid min players".into()))?;
        }
    }
    if let Ok(max) = std::env::var("LOTTO_MAX_PLAYERS") {
        if !max.is_empty() {
            cfg.game.max_players = max
                .parse()
                .map_err(|_| ConfigError::Invalid("Invalid max players".into()))?;
        }
    }

    cfg.game
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    Ok(cfg)
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    min_players: Option<usize>,
    #[serde(default)]
    max_players: Option<usize>,
    #[serde(default)]
    starting_balance: Option<Cents>,
    #[serde(default)]
    ticket_price: Option<Cents>,
    #[serde(default)]
    max_tickets_per_player: Option<u32>,
    #[serde(default)]
    seed: Option<u64>,
}
