use std::{fs, path::PathBuf, sync::Arc};

use store_adapters::{Snapshot, Store, StoreErr};

/// A file-backed store in its own temp directory, removed on drop.
pub struct TempStore {
    pub path: PathBuf,
}

impl TempStore {
    pub fn new(snapshot: &Snapshot) -> Result<Self, StoreErr> {
        let dir = std::env::temp_dir()
            .join(format!("pm_tracker_{}", uuid::Uuid::now_v7().simple()));
        fs::create_dir_all(&dir).map_err(|e| StoreErr::Io(e.to_string()))?;
        let temp = Self {
            path: dir.join("pm_tracker.json"),
        };
        temp.write(snapshot)?;
        Ok(temp)
    }

    pub fn read(&self) -> Result<Snapshot, StoreErr> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreErr::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| StoreErr::Parse(e.to_string()))
    }

    /// Stands in for the account system editing the file behind our back.
    pub fn write(&self, snapshot: &Snapshot) -> Result<(), StoreErr> {
        let content =
            serde_json::to_string(snapshot).map_err(|e| StoreErr::Parse(e.to_string()))?;
        fs::write(&self.path, content).map_err(|e| StoreErr::Io(e.to_string()))
    }

    pub fn open(&self) -> Result<Arc<Store>, StoreErr> {
        Store::load(&self.path).map(Arc::new)
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        if let Some(dir) = self.path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
