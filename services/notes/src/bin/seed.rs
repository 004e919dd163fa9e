//! Seed or inspect the notes table from the command line.
//!
//! ```text
//! seed <password>                        # print every note
//! seed <password> "HTML is easy" --important
//! ```
//!
//! The password is combined with `DATABASE_USER`, `DATABASE_HOST`,
//! `DATABASE_PORT` and `DATABASE_NAME` to build the connection URL.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use common::database::{
    DatabaseConfig, DatabaseCredentials, close_pool, init_pool, run_migrations,
};
use notes::{
    models::NoteDraft,
    repositories::{NoteRepository, PgNoteRepository},
};

#[derive(Debug, Parser)]
#[command(name = "seed", about = "Insert or list notes")]
struct Args {
    /// Database password
    password: Option<String>,

    /// Content of a note to insert; notes are listed when omitted
    content: Option<String>,

    /// Mark the inserted note as important
    #[arg(long)]
    important: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = Args::parse();
    let Some(password) = args.password.clone() else {
        eprintln!("give password as argument");
        return ExitCode::FAILURE;
    };

    match run(args, &password).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("seed failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, password: &str) -> Result<()> {
    let credentials = DatabaseCredentials::from_env();
    let mut config = DatabaseConfig::from_env()?;
    config.database_url = credentials.url(password);
    config.min_connections = 0;
    config.max_connections = 1;

    info!(
        "Connecting to {}:{}/{} as {}",
        credentials.host, credentials.port, credentials.database, credentials.user
    );
    let pool = init_pool(&config).await?;
    run_migrations(&pool).await?;

    let repository = PgNoteRepository::new(pool.clone());
    let outcome = match args.content {
        Some(content) => insert_note(&repository, content, args.important).await,
        None => list_notes(&repository).await,
    };

    close_pool(pool).await;
    outcome
}

async fn insert_note(repository: &PgNoteRepository, content: String, important: bool) -> Result<()> {
    let note = repository.create(&NoteDraft { content, important }).await?;
    println!("{}", serde_json::to_string(&note)?);
    Ok(())
}

async fn list_notes(repository: &PgNoteRepository) -> Result<()> {
    for note in repository.find_all().await? {
        println!("{}", serde_json::to_string(&note)?);
    }
    Ok(())
}
