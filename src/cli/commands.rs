use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "campusguard", version, about = "Link-safety scanner with reputation + AI analysis and a gamified security checklist")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a link and print the verdict
    Scan(ScanArgs),
    /// Start the HTTP REST API server
    Serve(ServeArgs),
    /// Show the weekly quest checklist or verify a quest
    Quests(QuestsArgs),
    /// Ask the local security advisor a question
    Advisor(AdvisorArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ScanArgs {
    /// Suspicious link to analyze
    #[arg(short, long)]
    pub url: String,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Classifier strategy: gemini, heuristic
    #[arg(long)]
    pub classifier: Option<String>,

    /// Generative-model API key (or use $GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Reputation service API key (or use $VIRUSTOTAL_API_KEY)
    #[arg(long)]
    pub reputation_api_key: Option<String>,

    /// Identity to record counters and alerts under
    #[arg(long, default_value = "guest")]
    pub user: String,

    /// SQLite database path (overrides storage.db_path, defaults to ./campusguard.db)
    #[arg(long)]
    pub db: Option<String>,

    /// Snapshot cache directory (overrides storage.cache_dir, defaults to ./cache)
    #[arg(long)]
    pub cache_dir: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Bind address (overrides server.host, defaults to 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port (overrides server.port, defaults to 8787)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// SQLite database path (overrides storage.db_path, defaults to ./campusguard.db)
    #[arg(long)]
    pub db: Option<String>,

    /// Snapshot cache directory (overrides storage.cache_dir, defaults to ./cache)
    #[arg(long)]
    pub cache_dir: Option<String>,
}

#[derive(Args, Clone)]
pub struct QuestsArgs {
    /// Mark this quest id completed instead of listing
    #[arg(long)]
    pub verify: Option<i64>,

    /// Identity to record completion under
    #[arg(long, default_value = "guest")]
    pub user: String,

    /// SQLite database path
    #[arg(long, default_value = "./campusguard.db")]
    pub db: String,

    /// Snapshot cache directory
    #[arg(long, default_value = "./cache")]
    pub cache_dir: String,
}

#[derive(Args, Clone)]
pub struct AdvisorArgs {
    /// Message for the advisor
    #[arg(short, long)]
    pub message: String,

    /// Identity whose transcript records the reply
    #[arg(long, default_value = "guest")]
    pub user: String,

    /// SQLite database path
    #[arg(long, default_value = "./campusguard.db")]
    pub db: String,

    /// Snapshot cache directory
    #[arg(long, default_value = "./cache")]
    pub cache_dir: String,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: String,
}
