use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::error::StorageResult;
use super::KeyValueStore;

/// File-backed key-value store: one file per key under a root directory.
///
/// Keys are mapped to file names by escaping every byte outside
/// `[A-Za-z0-9.-]` (see [`FileStore::path_for`]). Values are written to a
/// temporary sibling file and renamed into place, so a reader never sees a
/// half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub async fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        debug!(root = %root.display(), "File store opened");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    ///
    /// ASCII letters, digits, `.` and `-` are kept; every other byte becomes
    /// `_XX` (uppercase hex), `_` included. Distinct keys never share a file.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for byte in key.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'.' | b'-' => name.push(char::from(byte)),
                _ => name.push_str(&format!("_{byte:02X}")),
            }
        }
        self.root.join(format!("{name}.json"))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value.as_bytes()).await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested")).await.unwrap();

        assert_eq!(store.get("@shop:cart").await.unwrap(), None);

        store.set("@shop:cart", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("@shop:cart").await.unwrap().as_deref(), Some("[]"));

        // A second handle on the same directory sees the value
        let reopened = FileStore::open(store.root()).await.unwrap();
        assert_eq!(reopened.get("@shop:cart").await.unwrap().as_deref(), Some("[]"));

        store.remove("@shop:cart").await.unwrap();
        store.remove("@shop:cart").await.unwrap();
        assert_eq!(store.get("@shop:cart").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_key_is_escaped() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        let path = store.path_for("@imperio_bebidas:cart");
        assert_eq!(path.file_name().unwrap(), "_40imperio_5Fbebidas_3Acart.json");
        assert!(path.starts_with(dir.path()));
        assert_eq!(store.path_for("../escape").parent().unwrap(), dir.path());
    }

    #[tokio::test]
    async fn test_similar_keys_use_separate_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();

        assert_ne!(store.path_for("a:b"), store.path_for("a_b"));
        assert_ne!(store.path_for("a/b"), store.path_for("a_2Fb"));

        store.set("a:b", "colon".to_string()).await.unwrap();
        store.set("a_b", "underscore".to_string()).await.unwrap();
        assert_eq!(store.get("a:b").await.unwrap().as_deref(), Some("colon"));
        assert_eq!(store.get("a_b").await.unwrap().as_deref(), Some("underscore"));
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).await.unwrap();
        store.set("cart", "[1]".to_string()).await.unwrap();

        let mut names = Vec::new();
        let mut entries = fs::read_dir(dir.path()).await.unwrap();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["cart.json".to_string()]);
    }
}
