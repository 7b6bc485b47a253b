use std::ops::RangeInclusive;
use std::time::Duration;

use crate::core::fetch::FetchService;
use crate::domain::ports::{ConfigProvider, PokedexStore};
use crate::utils::error::Result;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    pub fetched: usize,
    pub skipped: usize,
    pub sprites_cached: usize,
}

/// Sequential fetch-decode-store loop. Ids already in the store are skipped,
/// so a re-sync never touches records the user has favorited. The batch
/// aborts on the first failure; skip-or-retry policy belongs to whoever
/// invokes the engine again.
pub struct SyncEngine<S: PokedexStore, C: ConfigProvider> {
    store: S,
    config: C,
    fetcher: FetchService,
}

impl<S: PokedexStore, C: ConfigProvider> SyncEngine<S, C> {
    pub fn new(store: S, config: C) -> Self {
        Self {
            store,
            config,
            fetcher: FetchService::new(),
        }
    }

    pub async fn run(&self, ids: RangeInclusive<u16>) -> Result<SyncReport> {
        let mut report = SyncReport::default();
        let delay = Duration::from_millis(self.config.request_delay_ms());
        let mut first_request = true;

        for id in ids {
            if self.store.get(id).await?.is_some() {
                tracing::debug!("#{} already in the dex, skipping", id);
                report.skipped += 1;
                continue;
            }

            if !first_request && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            first_request = false;

            let pokemon = self
                .fetcher
                .fetch_pokemon(self.config.api_endpoint(), id)
                .await?;
            tracing::info!("📥 #{:04} {}", pokemon.id, pokemon.name);

            if self.config.cache_sprites() {
                let sprite = self.fetcher.fetch_image(&pokemon.sprite_url).await?;
                let shiny = self.fetcher.fetch_image(&pokemon.shiny_url).await?;
                let id = pokemon.id;
                self.store.upsert(pokemon).await?;
                self.store.put_sprites(id, sprite, shiny).await?;
                report.sprites_cached += 1;
            } else {
                self.store.upsert(pokemon).await?;
            }

            report.fetched += 1;
        }

        Ok(report)
    }
}
