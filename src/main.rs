use clap::{Parser, Subcommand};
use std::path::PathBuf;
use thiserror::Error;

use squirrel_server::{IdPolicy, RepositoryError, Squirrel, SquirrelRepository};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Parser)]
#[command(name = "squirrels")]
#[command(about = "Inspect and edit a squirrel store file")]
struct Cli {
    /// Store path
    #[arg(long, global = true, default_value = "squirrel_db.json", env = "SQUIRREL_DB_PATH")]
    path: PathBuf,

    /// Id assignment for new records ('count' or 'max-plus-one')
    #[arg(long, global = true, default_value_t = IdPolicy::default())]
    id_policy: IdPolicy,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store file if it does not exist
    Init,

    /// Print every squirrel, one JSON object per line
    List,

    /// Print one squirrel
    Get {
        /// Squirrel id
        id: u64,
    },

    /// Create a squirrel
    Add {
        /// Squirrel name
        name: String,

        /// Squirrel size
        size: String,
    },

    /// Replace the name and size of a squirrel
    Update {
        /// Squirrel id
        id: u64,

        /// New name
        name: String,

        /// New size
        size: String,
    },

    /// Delete a squirrel
    Delete {
        /// Squirrel id
        id: u64,
    },
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    let repo = SquirrelRepository::open(&cli.path, cli.id_policy)?;

    match cli.command {
        Commands::Init => {
            println!("Initialized squirrel store at {}", cli.path.display());
            Ok(())
        }
        Commands::List => {
            let squirrels = repo.get_all()?;
            if squirrels.is_empty() {
                println!("No squirrels found");
            }
            for squirrel in &squirrels {
                print_squirrel(squirrel)?;
            }
            Ok(())
        }
        Commands::Get { id } => match repo.get_by_id(id)? {
            Some(squirrel) => print_squirrel(&squirrel),
            None => not_found(id),
        },
        Commands::Add { name, size } => {
            let squirrel = repo.create(name, size)?;
            print_squirrel(&squirrel)
        }
        Commands::Update { id, name, size } => {
            if !repo.update_by_id(id, name, size)? {
                not_found(id);
            }
            println!("Updated squirrel {}", id);
            Ok(())
        }
        Commands::Delete { id } => {
            if !repo.delete_by_id(id)? {
                not_found(id);
            }
            println!("Deleted squirrel {}", id);
            Ok(())
        }
    }
}

fn print_squirrel(squirrel: &Squirrel) -> Result<(), AppError> {
    println!("{}", serde_json::to_string(squirrel)?);
    Ok(())
}

fn not_found(id: u64) -> ! {
    eprintln!("Squirrel {} not found", id);
    std::process::exit(1);
}
