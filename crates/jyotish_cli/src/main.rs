use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use jyotish_base::AyanamshaSystem;
use jyotish_cli::{ayanamsa_line, load_input, load_snapshot, nakshatra_line, rashi_line, run_chart};
use jyotish_time::UtcTime;

#[derive(Parser)]
#[command(name = "jyotish", about = "Sidereal chart calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart from a JSON file of tropical positions
    Chart {
        /// JSON file with date, location and positions
        #[arg(long)]
        input: PathBuf,
        /// Earlier snapshot (date and positions) for transit detection
        #[arg(long)]
        previous: Option<PathBuf>,
        /// Ayanamsha preset: lahiri, kp, raman, fagan-bradley, yukteshwar
        #[arg(long)]
        ayanamsha: Option<AyanamshaSystem>,
    },
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Ayanamsha for a date
    Ayanamsa {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: UtcTime,
        #[arg(long, default_value = "lahiri")]
        system: AyanamshaSystem,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            input,
            previous,
            ayanamsha,
        } => {
            let outcome = load_input(&input).and_then(|chart| {
                let prev = previous.as_deref().map(load_snapshot).transpose()?;
                run_chart(&chart, prev.as_ref(), ayanamsha)
            });
            let result = outcome.unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            match serde_json::to_string_pretty(&result) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error: cannot serialize result: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Rashi { lon } => println!("{}", rashi_line(lon)),

        Commands::Nakshatra { lon } => println!("{}", nakshatra_line(lon)),

        Commands::Ayanamsa { date, system } => println!("{}", ayanamsa_line(&date, system)),
    }
}
