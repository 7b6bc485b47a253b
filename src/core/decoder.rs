use serde_json::{Map, Value};
use url::Url;

use crate::domain::model::{BaseStats, Pokemon};
use crate::utils::error::{DexError, Result};

/// Decodes one PokeAPI creature payload into a flat [`Pokemon`] record.
///
/// The upstream document nests every interesting field: type names sit two
/// objects below each `types` entry, stat values one object below each
/// `stats` entry, and the two artwork URLs live in a `sprites` object whose
/// keys differ from the record field names. The tree is read explicitly,
/// field by documented path, instead of deriving a mirror of the upstream
/// shape.
///
/// Decoding is all-or-nothing: any structural mismatch fails with
/// [`DexError::DecodeError`] and produces no partial record. The decoder
/// does not retry and substitutes no defaults.
pub fn decode_pokemon(doc: &Value) -> Result<Pokemon> {
    let root = as_object(doc, "payload")?;

    let id = require_u16(root, "id")?;
    let name = require_str(root, "name")?.to_string();
    if name.is_empty() {
        return Err(DexError::decode("field 'name' is empty"));
    }

    let mut types = Vec::new();
    for entry in require_array(root, "types")? {
        let slot = as_object(entry, "types entry")?;
        let type_obj = as_object(require(slot, "type")?, "type")?;
        types.push(require_str(type_obj, "name")?.to_string());
    }

    // PokeAPI lists certain birds with "normal" in the primary slot; the dex
    // shows flying first for exactly that pair. No other pair is reordered.
    if types.len() == 2 && types[0] == "normal" && types[1] == "flying" {
        types.swap(0, 1);
    }

    if types.is_empty() || types.len() > 2 {
        return Err(DexError::DecodeError {
            message: format!("expected 1 or 2 type slots, found {}", types.len()),
        });
    }

    let mut values = Vec::new();
    for entry in require_array(root, "stats")? {
        let slot = as_object(entry, "stats entry")?;
        values.push(require_i16(slot, "base_stat")?);
    }
    if values.len() < 6 {
        return Err(DexError::DecodeError {
            message: format!("expected 6 stat slots, found {}", values.len()),
        });
    }
    let stats = BaseStats {
        hp: values[0],
        attack: values[1],
        defense: values[2],
        special_attack: values[3],
        special_defense: values[4],
        speed: values[5],
    };

    let sprites = as_object(require(root, "sprites")?, "sprites")?;
    let sprite_url = require_url(sprites, "front_default")?;
    let shiny_url = require_url(sprites, "front_shiny")?;

    Ok(Pokemon {
        id,
        name,
        types,
        stats,
        sprite_url,
        shiny_url,
        sprite: None,
        shiny: None,
        favorite: false,
    })
}

/// Parses raw response bytes and decodes them. Unparseable JSON surfaces as
/// the same decode error kind as a well-formed document of the wrong shape.
pub fn decode_pokemon_slice(bytes: &[u8]) -> Result<Pokemon> {
    let doc: Value = serde_json::from_slice(bytes)
        .map_err(|e| DexError::decode(format!("payload is not valid JSON: {}", e)))?;
    decode_pokemon(&doc)
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| DexError::decode(format!("{} is not a JSON object", what)))
}

fn require<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    obj.get(key)
        .ok_or_else(|| DexError::decode(format!("missing field '{}'", key)))
}

fn require_array<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
    require(obj, key)?
        .as_array()
        .ok_or_else(|| DexError::decode(format!("field '{}' is not an array", key)))
}

fn require_str<'a>(obj: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    require(obj, key)?
        .as_str()
        .ok_or_else(|| DexError::decode(format!("field '{}' is not a string", key)))
}

fn require_u16(obj: &Map<String, Value>, key: &str) -> Result<u16> {
    let raw = require(obj, key)?
        .as_i64()
        .ok_or_else(|| DexError::decode(format!("field '{}' is not an integer", key)))?;
    match u16::try_from(raw) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(DexError::decode(format!(
            "field '{}' is out of range: {}",
            key, raw
        ))),
    }
}

fn require_i16(obj: &Map<String, Value>, key: &str) -> Result<i16> {
    let raw = require(obj, key)?
        .as_i64()
        .ok_or_else(|| DexError::decode(format!("field '{}' is not an integer", key)))?;
    i16::try_from(raw)
        .map_err(|_| DexError::decode(format!("field '{}' is out of range: {}", key, raw)))
}

fn require_url(obj: &Map<String, Value>, key: &str) -> Result<Url> {
    let raw = require_str(obj, key)?;
    Url::parse(raw).map_err(|e| DexError::decode(format!("field '{}' is not a URL: {}", key, e)))
}
