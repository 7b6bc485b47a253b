use crate::domain::model::Pokemon;
use crate::domain::query::DexFilter;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Keyed record store. The dex makes no assumption about the backend beyond
/// "keyed by id, favorite and cached artwork mutable in place".
#[async_trait]
pub trait PokedexStore: Send + Sync {
    /// Insert-or-update by id. An update must not clobber the `favorite`
    /// flag or cached artwork bytes already present for that id.
    async fn upsert(&self, pokemon: Pokemon) -> Result<()>;

    async fn get(&self, id: u16) -> Result<Option<Pokemon>>;

    /// All records, ordered by id ascending.
    async fn all(&self) -> Result<Vec<Pokemon>>;

    async fn find(&self, filter: &DexFilter) -> Result<Vec<Pokemon>>;

    /// Returns whether a record with that id existed.
    async fn set_favorite(&self, id: u16, favorite: bool) -> Result<bool>;

    /// Returns whether a record with that id existed.
    async fn put_sprites(&self, id: u16, sprite: Vec<u8>, shiny: Vec<u8>) -> Result<bool>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn data_path(&self) -> &str;
    fn request_delay_ms(&self) -> u64;
    fn cache_sprites(&self) -> bool;
}
