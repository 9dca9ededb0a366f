use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use minesweeper_alpha_core::{Board, SeedError, load_board};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedFileError {
    #[error("Seed File Not Found Error: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("Seed File Malformed Error: cannot read {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },
    #[error("Seed File Malformed Error: {0}")]
    Malformed(#[from] SeedError),
}

impl SeedFileError {
    /// Process status reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NotFound { .. } => 2,
            Self::Unreadable { .. } | Self::Malformed(_) => 3,
        }
    }
}

pub fn read_board(path: &Path) -> Result<Board, SeedFileError> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SeedFileError::NotFound {
            path: path.to_owned(),
        },
        _ => SeedFileError::Unreadable {
            path: path.to_owned(),
            source,
        },
    })?;
    log::debug!("read seed file {}", path.display());

    Ok(load_board(&text)?)
}
