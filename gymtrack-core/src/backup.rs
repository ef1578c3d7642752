use chrono::Local;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Copies the database aside before the first write of a run. Later calls
/// return the copy already taken.
#[derive(Debug)]
pub struct Backup {
    source: PathBuf,
    taken: Option<PathBuf>,
}

impl Backup {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            taken: None,
        }
    }

    pub fn taken(&self) -> Option<&Path> {
        self.taken.as_deref()
    }

    pub fn ensure(&mut self) -> Result<&Path> {
        let target = match self.taken.take() {
            Some(target) => target,
            None => {
                let stamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
                let target = backup_path(&self.source, &stamp);
                fs::copy(&self.source, &target)?;
                info!("Backed up {} to {}", self.source.display(), target.display());
                target
            }
        };
        Ok(self.taken.insert(target).as_path())
    }
}

/// `gymtrack.sqlite` becomes `gymtrack.sqlite.bak.<stamp>` in the same directory.
pub fn backup_path(source: &Path, stamp: &str) -> PathBuf {
    let mut name = source
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(format!(".bak.{stamp}"));
    source.with_file_name(name)
}
