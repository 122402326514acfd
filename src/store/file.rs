use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::model::Board;
use crate::sample;
use crate::store::StoreResult;

/// Save a board to a JSON file, creating parent directories as needed.
pub fn save_board(board: &Board, path: &Path) -> StoreResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(board)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a board from a JSON file.
pub fn load_board(path: &Path) -> StoreResult<Board> {
    let json = fs::read_to_string(path)?;
    let board = serde_json::from_str(&json)?;
    Ok(board)
}

/// Load a board, falling back to generated sample data when the file is
/// missing, unreadable, or holds no work centers.
pub fn load_or_sample(path: &Path) -> Board {
    match load_board(path) {
        Ok(board) if !board.work_centers.is_empty() => board,
        Ok(_) => {
            log::warn!(
                "board file {} has no work centers, using sample data",
                path.display()
            );
            sample::sample_board(Local::now().date_naive())
        }
        Err(err) => {
            log::warn!(
                "could not load board from {}: {}, using sample data",
                path.display(),
                err
            );
            sample::sample_board(Local::now().date_naive())
        }
    }
}

/// Default per-user location of the board file.
pub fn default_board_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "WorkOrderTimeline")
        .map(|dirs| dirs.data_dir().join("board.json"))
}
