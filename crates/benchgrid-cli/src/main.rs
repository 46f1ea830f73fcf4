use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "benchgrid",
    about = "benchgrid: class-diverse exam seating planner",
    version,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a seating plan from a roster and a room layout.
    ///
    /// The roster is a JSON array of rows with ID, Name and Class columns
    /// (common header spellings are accepted). Rooms, seats per bench and
    /// the shuffle seed come from the config file.
    Generate {
        /// Path to seating.toml
        #[arg(short, long, default_value = "seating.toml")]
        config: String,
        /// Path to the roster JSON file
        #[arg(short, long)]
        roster: String,
        /// Shuffle seed; overrides the config
        #[arg(long)]
        seed: Option<u64>,
        /// Keep roster order instead of shuffling
        #[arg(long)]
        identity: bool,
        /// Seat a student after generation: BENCH:SEAT=ID (1-based)
        #[arg(long = "set", value_name = "BENCH:SEAT=ID")]
        set: Vec<String>,
        /// Empty a seat after generation: BENCH:SEAT (1-based)
        #[arg(long = "clear", value_name = "BENCH:SEAT")]
        clear: Vec<String>,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Write a starter seating.toml
    Init {
        #[arg(short, long, default_value = "seating.toml")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("benchgrid=info".parse()?)
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            roster,
            seed,
            identity,
            set,
            clear,
            format,
        } => {
            let opts = commands::generate::GenerateOptions {
                config_path: config,
                roster_path: roster,
                seed,
                identity,
                set,
                clear,
                format,
            };
            commands::generate::generate(&opts)
        }
        Commands::Init { path } => commands::init::init(&path),
    }
}
