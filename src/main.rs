use clap::Parser;
use rustdex::domain::ports::PokedexStore;
use rustdex::utils::logger;
use rustdex::{Cli, Command, DexFilter, JsonFileStore, Pokemon, Settings, SyncEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting rustdex");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let settings = match cli.settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let store = JsonFileStore::open(&settings.data_dir)?;

    if let Err(e) = run(cli.command, store, settings).await {
        tracing::error!("❌ rustdex failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, store: JsonFileStore, settings: Settings) -> rustdex::Result<()> {
    match command {
        Command::Sync { from, to, .. } => {
            tracing::info!("📡 Syncing #{}..#{} from {}", from, to, settings.api_endpoint);
            let engine = SyncEngine::new(store, settings);
            let report = engine.run(from..=to).await?;
            println!(
                "✅ Sync finished: {} fetched, {} already present, {} sprite pairs cached",
                report.fetched, report.skipped, report.sprites_cached
            );
        }
        Command::List {
            search,
            type_tag,
            favorites,
        } => {
            let filter = DexFilter {
                name_contains: search,
                type_tag,
                favorites_only: favorites,
            };
            let results = store.find(&filter).await?;
            if results.is_empty() {
                if filter.is_empty() {
                    println!("The dex is empty, run `rustdex sync` first");
                } else {
                    println!("No pokemon match that filter");
                }
            }
            for pokemon in results {
                println!(
                    "#{:04} {:<12} [{}]{}",
                    pokemon.id,
                    capitalize(&pokemon.name),
                    pokemon.types.join("/"),
                    if pokemon.favorite { " ★" } else { "" }
                );
            }
        }
        Command::Show { id } => match store.get(id).await? {
            Some(pokemon) => print_pokemon(&pokemon),
            None => println!("No pokemon #{} in the dex, run `rustdex sync` first", id),
        },
        Command::Favorite { id } => match store.get(id).await? {
            Some(pokemon) => {
                let now_favorite = !pokemon.favorite;
                store.set_favorite(id, now_favorite).await?;
                if now_favorite {
                    println!("★ {} added to favorites", capitalize(&pokemon.name));
                } else {
                    println!("☆ {} removed from favorites", capitalize(&pokemon.name));
                }
            }
            None => println!("No pokemon #{} in the dex", id),
        },
    }

    Ok(())
}

fn print_pokemon(pokemon: &Pokemon) {
    println!(
        "#{:04} {}{}",
        pokemon.id,
        capitalize(&pokemon.name),
        if pokemon.favorite { " ★" } else { "" }
    );
    println!("Types: {}", pokemon.types.join(", "));
    println!("Stats:");
    for row in pokemon.stats.rows() {
        println!("  {:<16} {:>3}", row.name, row.value);
    }
    let highest = pokemon.stats.highest();
    println!("Best stat: {} ({})", highest.name, highest.value);
    println!(
        "Sprites: {} / {}{}",
        pokemon.sprite_url,
        pokemon.shiny_url,
        if pokemon.has_cached_artwork() {
            " (cached)"
        } else {
            ""
        }
    );
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
