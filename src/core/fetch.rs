use reqwest::Client;
use url::Url;

use crate::core::decoder;
use crate::domain::model::Pokemon;
use crate::utils::error::{DexError, Result};

/// HTTP client for the PokeAPI creature endpoint and sprite hosts.
pub struct FetchService {
    client: Client,
}

impl FetchService {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// GET `{endpoint}/{id}` and decode the body into one record.
    pub async fn fetch_pokemon(&self, endpoint: &str, id: u16) -> Result<Pokemon> {
        let url = format!("{}/{}", endpoint.trim_end_matches('/'), id);
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(DexError::BadResponseError {
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await?;
        let pokemon = decoder::decode_pokemon_slice(&body)?;
        tracing::debug!("Pokemon id: {}, name: {}", pokemon.id, pokemon.name);
        Ok(pokemon)
    }

    /// GET one sprite image, returning the raw bytes for the artwork cache.
    pub async fn fetch_image(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        if !response.status().is_success() {
            return Err(DexError::BadResponseError {
                status: response.status().as_u16(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for FetchService {
    fn default() -> Self {
        Self::new()
    }
}
