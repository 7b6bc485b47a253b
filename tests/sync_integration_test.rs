use httpmock::prelude::*;
use rustdex::domain::ports::PokedexStore;
use rustdex::{DexError, MemoryStore, Settings, SyncEngine};
use serde_json::{json, Value};

fn settings(endpoint: String, cache_sprites: bool) -> Settings {
    Settings {
        api_endpoint: endpoint,
        data_dir: "./unused".to_string(),
        request_delay_ms: 0,
        cache_sprites,
    }
}

fn pokemon_body(id: u16, name: &str, types: &[&str], stats: &[i64; 6], sprite_base: &str) -> Value {
    let type_slots: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(i, t)| json!({ "slot": i + 1, "type": { "name": t } }))
        .collect();
    let stat_slots: Vec<Value> = stats
        .iter()
        .map(|v| json!({ "base_stat": v, "stat": { "name": "stub" } }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "types": type_slots,
        "stats": stat_slots,
        "sprites": {
            "front_default": format!("{}/sprites/{}.png", sprite_base, id),
            "front_shiny": format!("{}/sprites/shiny/{}.png", sprite_base, id)
        }
    })
}

#[tokio::test]
async fn test_sync_stores_decoded_records() {
    let server = MockServer::start();
    let base = server.base_url();

    let bulbasaur = server.mock(|when, then| {
        when.method(GET).path("/pokemon/1");
        then.status(200).json_body(pokemon_body(
            1,
            "bulbasaur",
            &["grass", "poison"],
            &[45, 49, 49, 65, 65, 45],
            &base,
        ));
    });
    let charmander = server.mock(|when, then| {
        when.method(GET).path("/pokemon/2");
        then.status(200).json_body(pokemon_body(
            2,
            "charmander",
            &["fire"],
            &[39, 52, 43, 60, 50, 65],
            &base,
        ));
    });

    let store = MemoryStore::new();
    let engine = SyncEngine::new(store.clone(), settings(server.url("/pokemon"), false));

    let report = engine.run(1..=2).await.unwrap();

    bulbasaur.assert();
    charmander.assert();
    assert_eq!(report.fetched, 2);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.sprites_cached, 0);

    let all = store.all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "bulbasaur");
    assert_eq!(all[0].types, vec!["grass", "poison"]);
    assert_eq!(all[1].stats.speed, 65);
    assert!(all.iter().all(|p| !p.favorite && p.sprite.is_none()));
}

#[tokio::test]
async fn test_sync_skips_present_ids_and_keeps_favorites() {
    let server = MockServer::start();
    let base = server.base_url();

    // Only #2 is served; #1 is already in the dex and must not be requested.
    let charmander = server.mock(|when, then| {
        when.method(GET).path("/pokemon/2");
        then.status(200).json_body(pokemon_body(
            2,
            "charmander",
            &["fire"],
            &[39, 52, 43, 60, 50, 65],
            &base,
        ));
    });

    let store = MemoryStore::new();
    let seeded = rustdex::core::decoder::decode_pokemon(&pokemon_body(
        1,
        "bulbasaur",
        &["grass", "poison"],
        &[45, 49, 49, 65, 65, 45],
        &base,
    ))
    .unwrap();
    store.upsert(seeded).await.unwrap();
    store.set_favorite(1, true).await.unwrap();

    let engine = SyncEngine::new(store.clone(), settings(server.url("/pokemon"), false));
    let report = engine.run(1..=2).await.unwrap();

    charmander.assert();
    assert_eq!(report.fetched, 1);
    assert_eq!(report.skipped, 1);
    assert!(store.get(1).await.unwrap().unwrap().favorite);
}

#[tokio::test]
async fn test_sync_aborts_on_server_error() {
    let server = MockServer::start();

    let failing = server.mock(|when, then| {
        when.method(GET).path("/pokemon/1");
        then.status(500);
    });

    let store = MemoryStore::new();
    let engine = SyncEngine::new(store.clone(), settings(server.url("/pokemon"), false));

    let err = engine.run(1..=3).await.unwrap_err();

    failing.assert();
    assert!(matches!(err, DexError::BadResponseError { status: 500 }));
    assert!(store.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sync_aborts_on_malformed_payload() {
    let server = MockServer::start();
    let base = server.base_url();

    // Five stat slots instead of six.
    let malformed = server.mock(|when, then| {
        when.method(GET).path("/pokemon/1");
        then.status(200).json_body(json!({
            "id": 1,
            "name": "bulbasaur",
            "types": [{ "slot": 1, "type": { "name": "grass" } }],
            "stats": [
                { "base_stat": 45 }, { "base_stat": 49 }, { "base_stat": 49 },
                { "base_stat": 65 }, { "base_stat": 65 }
            ],
            "sprites": {
                "front_default": format!("{}/sprites/1.png", base),
                "front_shiny": format!("{}/sprites/shiny/1.png", base)
            }
        }));
    });

    let store = MemoryStore::new();
    let engine = SyncEngine::new(store.clone(), settings(server.url("/pokemon"), false));

    let err = engine.run(1..=1).await.unwrap_err();

    malformed.assert();
    assert!(matches!(err, DexError::DecodeError { .. }), "{err}");
    assert!(store.all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sync_caches_sprite_bytes() {
    let server = MockServer::start();
    let base = server.base_url();

    server.mock(|when, then| {
        when.method(GET).path("/pokemon/4");
        then.status(200).json_body(pokemon_body(
            4,
            "charmander",
            &["fire"],
            &[39, 52, 43, 60, 50, 65],
            &base,
        ));
    });
    let sprite = server.mock(|when, then| {
        when.method(GET).path("/sprites/4.png");
        then.status(200).body("sprite-bytes");
    });
    let shiny = server.mock(|when, then| {
        when.method(GET).path("/sprites/shiny/4.png");
        then.status(200).body("shiny-bytes");
    });

    let store = MemoryStore::new();
    let engine = SyncEngine::new(store.clone(), settings(server.url("/pokemon"), true));

    let report = engine.run(4..=4).await.unwrap();

    sprite.assert();
    shiny.assert();
    assert_eq!(report.sprites_cached, 1);

    let stored = store.get(4).await.unwrap().unwrap();
    assert_eq!(stored.sprite, Some(b"sprite-bytes".to_vec()));
    assert_eq!(stored.shiny, Some(b"shiny-bytes".to_vec()));
    assert!(stored.has_cached_artwork());
}

#[tokio::test]
async fn test_normal_flying_swap_survives_the_full_pipeline() {
    let server = MockServer::start();
    let base = server.base_url();

    server.mock(|when, then| {
        when.method(GET).path("/pokemon/16");
        then.status(200).json_body(pokemon_body(
            16,
            "pidgey",
            &["normal", "flying"],
            &[40, 45, 40, 35, 35, 56],
            &base,
        ));
    });

    let store = MemoryStore::new();
    let engine = SyncEngine::new(store.clone(), settings(server.url("/pokemon"), false));
    engine.run(16..=16).await.unwrap();

    let stored = store.get(16).await.unwrap().unwrap();
    assert_eq!(stored.types, vec!["flying", "normal"]);
    assert_eq!(stored.primary_type(), Some("flying"));
}
