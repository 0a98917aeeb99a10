use clap::ArgAction;
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use log::warn;

fn main() {
    let args = CliArgs::parse();
    let dotenv_result = dotenv();

    let env = env_logger::Env::new().filter_or(
        "RUST_LOG",
        match args.global_opts.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        },
    );
    env_logger::Builder::from_env(env).init();
    if dotenv_result.is_err() {
        warn!("Could not read .env file: {}", dotenv_result.unwrap_err());
    }

    let result = match args.command {
        Command::Serve => askroom_server::web::serve(),
        Command::Seed => askroom_server::cli::seed::seed_database(),
        Command::MigrateDatabase => askroom_server::cli::database_migration::run_migrations(),
    };
    if let Err(error) = result {
        eprintln!("Error: {}", error);
        std::process::exit(error.exit_code());
    }
}

/// Backend service for Q&A rooms
#[derive(Debug, Parser)]
#[clap(name = "askroom", version)]
pub struct CliArgs {
    #[clap(flatten)]
    global_opts: GlobalOpts,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the askroom web API
    Serve,
    /// Reset the database and fill it with generated development fixture data
    ///
    /// This deletes ALL rows from ALL tables first. Meant for development
    /// databases only, never run it against production data.
    Seed,
    /// Apply pending database schema migrations
    MigrateDatabase,
}

#[derive(Debug, Args)]
struct GlobalOpts {
    /// Verbosity level (can be specified multiple times)
    #[clap(long, short, global = true, action = ArgAction::Count)]
    verbose: u8,
}
