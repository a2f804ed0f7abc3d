//! One JSON file per key under a data directory

use super::Storage;
use crate::errors::StorageError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `<dir>/<key>.json`, a `/` in the key becoming a subdirectory
    ///
    /// Key segments that could escape the directory are replaced.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut path = self.dir.clone();
        for segment in key.split('/') {
            let segment: String = segment
                .chars()
                .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' { ch } else { '_' })
                .collect();
            path.push(segment);
        }
        path.set_extension("json");
        path
    }
}

impl Storage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write then rename so a crash never leaves half a document
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        debug!(path = %path.display(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("sutom-storage-{}-{name}", std::process::id()))
    }

    #[test]
    fn missing_key_loads_nothing() {
        let storage = FileStorage::new(temp_dir("missing"));
        assert_eq!(storage.load("sutom-perso/day-1").unwrap(), None);
    }

    #[test]
    fn saves_under_key_path() {
        let dir = temp_dir("save");
        let mut storage = FileStorage::new(&dir);

        storage.save("sutom-perso/day-4", r#"{"gameOver":true}"#).unwrap();
        assert!(dir.join("sutom-perso").join("day-4.json").exists());
        assert_eq!(
            storage.load("sutom-perso/day-4").unwrap().as_deref(),
            Some(r#"{"gameOver":true}"#)
        );

        storage.save("sutom-perso/day-4", "{}").unwrap();
        assert_eq!(storage.load("sutom-perso/day-4").unwrap().as_deref(), Some("{}"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let storage = FileStorage::new("/data");
        assert_eq!(storage.path_for("../etc/passwd"), PathBuf::from("/data/__/etc/passwd.json"));
        assert_eq!(storage.path_for("sutom-perso/day--2"), PathBuf::from("/data/sutom-perso/day--2.json"));
    }
}
