use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::model::Pokemon;
use crate::domain::ports::PokedexStore;
use crate::domain::query::DexFilter;
use crate::utils::error::Result;

const DEX_FILE: &str = "pokedex.json";

/// Insert-or-update that keeps user state: `favorite` and already-cached
/// artwork bytes survive a refresh of the same id.
fn merge_into(records: &mut BTreeMap<u16, Pokemon>, mut incoming: Pokemon) {
    if let Some(existing) = records.get(&incoming.id) {
        incoming.favorite = existing.favorite;
        if incoming.sprite.is_none() {
            incoming.sprite = existing.sprite.clone();
        }
        if incoming.shiny.is_none() {
            incoming.shiny = existing.shiny.clone();
        }
    }
    records.insert(incoming.id, incoming);
}

/// File-backed store: the whole dex lives in one JSON array under the data
/// directory, rewritten after every mutation. A missing file is an empty dex.
pub struct JsonFileStore {
    path: PathBuf,
    records: Mutex<BTreeMap<u16, Pokemon>>,
}

impl JsonFileStore {
    pub fn open(data_path: impl AsRef<Path>) -> Result<Self> {
        let path = data_path.as_ref().join(DEX_FILE);
        let records = load_records(&path)?;
        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    fn persist(&self, records: &BTreeMap<u16, Pokemon>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let list: Vec<&Pokemon> = records.values().collect();
        let data = serde_json::to_vec_pretty(&list)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

fn load_records(path: &Path) -> Result<BTreeMap<u16, Pokemon>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let data = fs::read(path)?;
    let list: Vec<Pokemon> = serde_json::from_slice(&data)?;
    Ok(list.into_iter().map(|p| (p.id, p)).collect())
}

#[async_trait]
impl PokedexStore for JsonFileStore {
    async fn upsert(&self, pokemon: Pokemon) -> Result<()> {
        let mut records = self.records.lock().await;
        merge_into(&mut records, pokemon);
        self.persist(&records)
    }

    async fn get(&self, id: u16) -> Result<Option<Pokemon>> {
        let records = self.records.lock().await;
        Ok(records.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Pokemon>> {
        let records = self.records.lock().await;
        Ok(records.values().cloned().collect())
    }

    async fn find(&self, filter: &DexFilter) -> Result<Vec<Pokemon>> {
        let records = self.records.lock().await;
        Ok(records
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn set_favorite(&self, id: u16, favorite: bool) -> Result<bool> {
        let mut records = self.records.lock().await;
        let existed = match records.get_mut(&id) {
            Some(pokemon) => {
                pokemon.favorite = favorite;
                true
            }
            None => false,
        };
        if existed {
            self.persist(&records)?;
        }
        Ok(existed)
    }

    async fn put_sprites(&self, id: u16, sprite: Vec<u8>, shiny: Vec<u8>) -> Result<bool> {
        let mut records = self.records.lock().await;
        let existed = match records.get_mut(&id) {
            Some(pokemon) => {
                pokemon.sprite = Some(sprite);
                pokemon.shiny = Some(shiny);
                true
            }
            None => false,
        };
        if existed {
            self.persist(&records)?;
        }
        Ok(existed)
    }
}

/// Ephemeral store with the same merge semantics, for tests and dry runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<BTreeMap<u16, Pokemon>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PokedexStore for MemoryStore {
    async fn upsert(&self, pokemon: Pokemon) -> Result<()> {
        let mut records = self.records.lock().await;
        merge_into(&mut records, pokemon);
        Ok(())
    }

    async fn get(&self, id: u16) -> Result<Option<Pokemon>> {
        let records = self.records.lock().await;
        Ok(records.get(&id).cloned())
    }

    async fn all(&self) -> Result<Vec<Pokemon>> {
        let records = self.records.lock().await;
        Ok(records.values().cloned().collect())
    }

    async fn find(&self, filter: &DexFilter) -> Result<Vec<Pokemon>> {
        let records = self.records.lock().await;
        Ok(records
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }

    async fn set_favorite(&self, id: u16, favorite: bool) -> Result<bool> {
        let mut records = self.records.lock().await;
        match records.get_mut(&id) {
            Some(pokemon) => {
                pokemon.favorite = favorite;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn put_sprites(&self, id: u16, sprite: Vec<u8>, shiny: Vec<u8>) -> Result<bool> {
        let mut records = self.records.lock().await;
        match records.get_mut(&id) {
            Some(pokemon) => {
                pokemon.sprite = Some(sprite);
                pokemon.shiny = Some(shiny);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
