use clap::{Parser, Subcommand, ValueEnum};
use migration::{migrate, MigrationCommand};
use wordle_backend::config::db::{redact_url, DbProfile};
use wordle_backend::config::wordle::ENV_DATABASE_URL;
use wordle_backend::infra::db::connect_db;
use wordle_backend::repos::words::insert_words;

#[derive(Clone, Copy, ValueEnum)]
enum Command {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl From<Command> for MigrationCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Up => MigrationCommand::Up,
            Command::Down => MigrationCommand::Down,
            Command::Fresh => MigrationCommand::Fresh,
            Command::Reset => MigrationCommand::Reset,
            Command::Refresh => MigrationCommand::Refresh,
            Command::Status => MigrationCommand::Status,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Run a schema migration command
    Migrate {
        #[arg(value_enum)]
        command: Command,
    },
    /// Apply pending migrations, then insert word lists
    Seed {
        /// Comma-separated secret words
        #[arg(long, value_delimiter = ',', required = true)]
        secrets: Vec<String>,

        /// Comma-separated valid guess words
        #[arg(long, value_delimiter = ',', required = true)]
        valid: Vec<String>,
    },
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Wordle database migration and seeding tool")]
struct Args {
    /// Database URL (Postgres or SQLite file); falls back to WORDLE_DATABASE_URL
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,wordle_backend=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let url = match args
        .database_url
        .or_else(|| std::env::var(ENV_DATABASE_URL).ok())
    {
        Some(url) => url,
        None => {
            eprintln!("❌ Pass --database-url or set {ENV_DATABASE_URL}.");
            std::process::exit(2);
        }
    };

    if url.contains(":memory:") {
        // An in-memory database disappears when this process exits.
        eprintln!("❌ SQLite in-memory databases are not supported for CLI operations.");
        eprintln!("Use a Postgres URL or a SQLite file, e.g. sqlite://wordle.db?mode=rwc");
        std::process::exit(2);
    }

    let profile = DbProfile::Url(url);
    let conn = match connect_db(&profile).await {
        Ok(conn) => conn,
        Err(e) => {
            eprintln!("❌ Could not connect to {}: {e}", redact_url(profile.url()));
            std::process::exit(1);
        }
    };

    match args.action {
        Action::Migrate { command } => {
            if let Err(e) = migrate(&conn, command.into()).await {
                eprintln!("Migration failed: {e}");
                std::process::exit(1);
            }
        }
        Action::Seed { secrets, valid } => {
            if let Err(e) = migrate(&conn, MigrationCommand::Up).await {
                eprintln!("Migration failed: {e}");
                std::process::exit(1);
            }

            let secrets = normalize(secrets);
            let valid = normalize(valid);
            match insert_words(&conn, &secrets, &valid).await {
                Ok(counts) => tracing::info!(
                    secrets = counts.secrets,
                    valid = counts.valid,
                    "seed=ok"
                ),
                Err(e) => {
                    eprintln!("Seeding failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn normalize(words: Vec<String>) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect()
}
