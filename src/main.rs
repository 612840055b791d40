use std::path::PathBuf;

use clap::Parser;
use ong_radar::directory::NgoDirectory;
use ong_radar::geo::{self, GeoPoint};
use ong_radar::server;
use ong_radar::users::UserStore;

/// ONG Radar v0.3 — NGO directory with proximity search
///
/// Ranks non-governmental organizations by great-circle distance from a
/// query point, from the command line or over HTTP.
///
/// Examples:
///   ongradar --lat 19.4326 --lon -99.1332
///   ongradar --lat 20.67 --lon -103.39 --limit 3
///   ongradar --list
///   ongradar --serve --port 8080
///   ongradar --serve --data ongs.json
#[derive(Parser)]
#[command(name = "ongradar", version, about, long_about = None)]
struct Cli {
    /// Query latitude (-90 to 90).
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,

    /// Query longitude (-180 to 180).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,

    /// Keep only the nearest N results.
    #[arg(long, allow_hyphen_values = true)]
    limit: Option<i64>,

    /// Print the full dataset and exit.
    #[arg(long)]
    list: bool,

    /// Start the HTTP server.
    #[arg(long)]
    serve: bool,

    /// Bind address for --serve.
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Bind port for --serve.
    #[arg(long, short = 'p', default_value_t = 8080)]
    port: u16,

    /// Dataset file (JSON array of NGO records). Defaults to the
    /// built-in dataset.
    #[arg(long)]
    data: Option<PathBuf>,

    /// User store file. Defaults to ~/.ongradar/users.json.
    #[arg(long)]
    users: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // ── Load the directory ──────────────────────────────────────

    let directory = NgoDirectory::load_or_builtin(cli.data.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    // ── Serve mode ──────────────────────────────────────────────

    if cli.serve {
        let users = match cli.users {
            Some(path) => UserStore::load_from(path),
            None => UserStore::load(),
        };

        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("Error: Cannot start async runtime: {}", e);
            std::process::exit(1);
        });
        runtime.block_on(server::start(&cli.host, cli.port, directory, users));
        return;
    }

    // ── List mode ───────────────────────────────────────────────

    if cli.list {
        eprintln!("  {} NGOs in dataset", directory.len());
        println!("{}", serde_json::to_string_pretty(directory.all()).unwrap());
        return;
    }

    // ── Rank mode ───────────────────────────────────────────────

    if let (Some(lat), Some(lon)) = (cli.lat, cli.lon) {
        let query = GeoPoint::new(lat, lon);
        if !query.in_range() {
            eprintln!("Error: Invalid coordinates. Lat: -90..90, Lon: -180..180");
            std::process::exit(1);
        }

        let ranked = directory.nearest(query, cli.limit).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        });

        eprintln!(
            "  Query point {} — {} of {} NGOs have coordinates",
            geo::format_coords(query),
            directory.sited().len(),
            directory.len(),
        );
        for r in &ranked {
            eprintln!(
                "  {:>2}. {} ({:.1} km)",
                r.rank, r.entity.ngo.name, r.distance_km,
            );
        }

        let out: Vec<serde_json::Value> = ranked
            .iter()
            .map(|r| {
                serde_json::json!({
                    "id": r.entity.ngo.id,
                    "name": r.entity.ngo.name,
                    "category": r.entity.ngo.category,
                    "city": r.entity.ngo.city,
                    "lat": r.entity.at.lat,
                    "lon": r.entity.at.lon,
                    "distance_km": r.distance_km,
                    "rank": r.rank,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap());
        return;
    }

    // ── Nothing to do ───────────────────────────────────────────

    eprintln!("Error: No mode specified.");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  ongradar --lat 19.4326 --lon -99.1332");
    eprintln!("  ongradar --lat 20.67 --lon -103.39 --limit 3");
    eprintln!("  ongradar --list");
    eprintln!("  ongradar --serve --port 8080");
    std::process::exit(1);
}
