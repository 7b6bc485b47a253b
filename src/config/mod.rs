pub mod file;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, validate_url, Validate};

pub const DEFAULT_API_ENDPOINT: &str = "https://pokeapi.co/api/v2/pokemon";
pub const DEFAULT_DATA_DIR: &str = "./dex-data";
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 100;

#[derive(Debug, Parser)]
#[command(name = "rustdex")]
#[command(about = "A command-line Pokédex backed by PokeAPI")]
pub struct Cli {
    #[arg(long, global = true)]
    pub api_endpoint: Option<String>,

    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    #[arg(long, global = true, help = "Read defaults from a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch a range of pokemon from the API into the local dex
    Sync {
        #[arg(long, default_value = "1")]
        from: u16,

        #[arg(long, default_value = "151")]
        to: u16,

        #[arg(long, help = "Also download and cache both sprite images")]
        sprites: bool,
    },
    /// List stored pokemon, optionally filtered
    List {
        #[arg(long, help = "Case-insensitive name substring")]
        search: Option<String>,

        #[arg(long = "type", help = "Match one type tag")]
        type_tag: Option<String>,

        #[arg(long)]
        favorites: bool,
    },
    /// Show one pokemon with its stat table
    Show { id: u16 },
    /// Toggle the favorite flag on one pokemon
    Favorite { id: u16 },
}

/// Fully resolved runtime settings: CLI flags override the config file,
/// the config file overrides built-in defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub api_endpoint: String,
    pub data_dir: String,
    pub request_delay_ms: u64,
    pub cache_sprites: bool,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => file::FileConfig::from_file(path)?,
            None => file::FileConfig::default(),
        };

        let sprites_flag = matches!(self.command, Command::Sync { sprites: true, .. });

        let settings = Settings {
            api_endpoint: self
                .api_endpoint
                .clone()
                .or(file.api_endpoint)
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            data_dir: self
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
            request_delay_ms: self
                .delay_ms
                .or(file.request_delay_ms)
                .unwrap_or(DEFAULT_REQUEST_DELAY_MS),
            cache_sprites: sprites_flag || file.cache_sprites.unwrap_or(false),
        };

        settings.validate()?;
        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn data_path(&self) -> &str {
        &self.data_dir
    }

    fn request_delay_ms(&self) -> u64 {
        self.request_delay_ms
    }

    fn cache_sprites(&self) -> bool {
        self.cache_sprites
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_range("request_delay_ms", self.request_delay_ms, 0, 10_000)?;
        Ok(())
    }
}
