use serde::{Deserialize, Serialize};
use url::Url;

/// One flat Pokédex record. The serde shape of this struct is the local
/// persistence format; the upstream wire shape is decoded by hand in
/// `core::decoder` and never mirrored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u16,
    pub name: String,
    /// 1-2 type tags, primary type first.
    pub types: Vec<String>,
    pub stats: BaseStats,
    pub sprite_url: Url,
    pub shiny_url: Url,
    /// Cached artwork bytes, populated lazily by the sync engine.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shiny: Option<Vec<u8>>,
    #[serde(default)]
    pub favorite: bool,
}

/// The six base stats in the API's positional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: i16,
    pub attack: i16,
    pub defense: i16,
    pub special_attack: i16,
    pub special_defense: i16,
    pub speed: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatRow {
    pub name: &'static str,
    pub value: i16,
}

impl BaseStats {
    pub fn rows(&self) -> [StatRow; 6] {
        [
            StatRow { name: "HP", value: self.hp },
            StatRow { name: "Attack", value: self.attack },
            StatRow { name: "Defense", value: self.defense },
            StatRow { name: "Special Attack", value: self.special_attack },
            StatRow { name: "Special Defense", value: self.special_defense },
            StatRow { name: "Speed", value: self.speed },
        ]
    }

    pub fn highest(&self) -> StatRow {
        let mut best = StatRow { name: "HP", value: self.hp };
        for row in self.rows() {
            if row.value > best.value {
                best = row;
            }
        }
        best
    }
}

impl Pokemon {
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }

    pub fn has_cached_artwork(&self) -> bool {
        self.sprite.is_some() && self.shiny.is_some()
    }
}
