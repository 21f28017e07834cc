use serde::{Deserialize, Serialize};
use std::fs;

use powerpoker_ai::PLACER_NAMES;

pub const DEFAULT_HIGH_SCORE_FILE: &str = "powerpoker-high.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    /// Where `play` keeps the best score between runs
    pub high_score_file: String,
    /// Real-time pacing of flights, blinks and draws in `play`
    pub animate: bool,
    /// Default strategy for `sim`
    pub placer: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub high_score_file: ValueSource,
    pub animate: ValueSource,
    pub placer: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            high_score_file: ValueSource::Default,
            animate: ValueSource::Default,
            placer: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            high_score_file: DEFAULT_HIGH_SCORE_FILE.into(),
            animate: true,
            placer: "greedy".into(),
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
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("POWERPOKER_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.high_score_file {
            cfg.high_score_file = v;
            sources.high_score_file = ValueSource::File;
        }
        if let Some(v) = f.animate {
            cfg.animate = v;
            sources.animate = ValueSource::File;
        }
        if let Some(v) = f.placer {
            cfg.placer = v;
            sources.placer = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("POWERPOKER_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(path) = std::env::var("POWERPOKER_HIGH_SCORE_FILE")
        && !path.is_empty()
    {
        cfg.high_score_file = path;
        sources.high_score_file = ValueSource::Env;
    }
    if let Ok(anim) = std::env::var("POWERPOKER_ANIMATE")
        && !anim.is_empty()
    {
        cfg.animate =
            parse_bool(&anim).ok_or_else(|| ConfigError::Invalid("Invalid animate".into()))?;
        sources.animate = ValueSource::Env;
    }
    if let Ok(placer) = std::env::var("POWERPOKER_PLACER")
        && !placer.is_empty()
    {
        cfg.placer = placer;
        sources.placer = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    high_score_file: Option<String>,
    #[serde(default)]
    animate: Option<bool>,
    #[serde(default)]
    placer: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.high_score_file.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "Invalid configuration: high_score_file must not be empty".into(),
        ));
    }
    if !PLACER_NAMES.contains(&cfg.placer.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: unknown placer '{}' (expected one of: {})",
            cfg.placer,
            PLACER_NAMES.join(", ")
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
