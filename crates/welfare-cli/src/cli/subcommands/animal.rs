use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

/// Animal entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnimalCommands {
    /// Register an animal.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        species: String,
        /// Birth date as YYYY-MM-DD.
        #[arg(long)]
        birth_date: NaiveDate,
        #[arg(long)]
        notes: Option<String>,
        /// Image file to store as the animal's photo.
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// List animals, optionally filtered by name or species.
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Get an animal with its score summary.
    Get { id: String },
    /// Update an animal.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        species: Option<String>,
        #[arg(long)]
        birth_date: Option<NaiveDate>,
        #[arg(long, conflicts_with = "clear_notes")]
        notes: Option<String>,
        #[arg(long)]
        clear_notes: bool,
    },
    /// Delete an animal and all of its evaluations.
    Delete { id: String },
    /// Store an image file as the animal's photo.
    Photo { id: String, path: PathBuf },
}
