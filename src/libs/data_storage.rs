use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "tack";

/// Per-user application data directory (`<data dir>/tack`).
///
/// Falls back to `./tack` when the platform reports no data directory.
#[derive(Clone, Debug)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_NAME);
        Self { base_path }
    }

    pub fn with_base(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Where `file_name` lives, without touching the filesystem.
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.base_path.join(file_name)
    }

    /// Like [`path_of`](Self::path_of) but creates the directory first.
    pub fn get_path(&self, file_name: &str) -> io::Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.path_of(file_name))
    }
}
