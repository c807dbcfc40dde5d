use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use serde::{Deserialize, Serialize};
use tracing::{event, Level};

use entities::{calendar_event, notification, project, tag, task, user};

use crate::StoreErr;

/// Everything the service reads, plus the notifications it writes.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub users: Vec<user::Model>,
    #[serde(default)]
    pub tags: Vec<tag::Model>,
    #[serde(default)]
    pub projects: Vec<project::Model>,
    #[serde(default)]
    pub tasks: Vec<task::Model>,
    #[serde(default)]
    pub calendar_events: Vec<calendar_event::Model>,
    #[serde(default)]
    pub notifications: Vec<notification::Model>,
}

/// The data file is owned by the account system; this service only appends
/// notifications to it. Lock order is `snapshot` then `pending`.
#[derive(Debug, Default)]
pub struct Store {
    snapshot: RwLock<Snapshot>,
    pending: Mutex<Vec<notification::Model>>,
    path: Option<PathBuf>,
}

impl Store {
    pub fn in_memory(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            pending: Mutex::new(vec![]),
            path: None,
        }
    }

    /// Loads a JSON snapshot. A missing file yields an empty store; the file
    /// is created by the first `sync` that has notifications to write.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreErr> {
        let path = path.as_ref();
        Ok(Self {
            snapshot: RwLock::new(read_snapshot(path)?),
            pending: Mutex::new(vec![]),
            path: Some(path.to_path_buf()),
        })
    }

    /// Re-reads the data file, appends the notifications created since the
    /// last sync and adopts the result as the in-memory snapshot. Everything
    /// else in the file is left as found on disk. Returns the number of
    /// notifications written.
    pub fn sync(&self) -> Result<usize, StoreErr> {
        let Some(path) = &self.path else {
            self.pending()?.clear();
            return Ok(0);
        };
        let mut snapshot = self.write()?;
        let mut pending = self.pending()?;

        let mut fresh = read_snapshot(path)?;
        let new: Vec<notification::Model> = pending
            .iter()
            .filter(|n| !fresh.notifications.iter().any(|m| m.id == n.id))
            .cloned()
            .collect();
        let written = new.len();
        if written > 0 {
            fresh.notifications.extend(new);
            write_snapshot(path, &fresh)?;
        }

        pending.clear();
        *snapshot = fresh;
        Ok(written)
    }

    pub(crate) fn insert_notification(
        &self,
        notification: notification::Model,
    ) -> Result<(), StoreErr> {
        let mut snapshot = self.write()?;
        self.pending()?.push(notification.clone());
        snapshot.notifications.push(notification);
        Ok(())
    }

    pub(crate) fn read(&self) -> Result<RwLockReadGuard<'_, Snapshot>, StoreErr> {
        self.snapshot.read().map_err(|_| StoreErr::Poisoned)
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or_default()
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Snapshot>, StoreErr> {
        self.snapshot.write().map_err(|_| StoreErr::Poisoned)
    }

    fn pending(&self) -> Result<MutexGuard<'_, Vec<notification::Model>>, StoreErr> {
        self.pending.lock().map_err(|_| StoreErr::Poisoned)
    }
}

fn read_snapshot(path: &Path) -> Result<Snapshot, StoreErr> {
    match fs::read_to_string(path) {
        Ok(content) => {
            serde_json::from_str(&content).map_err(|e| StoreErr::Parse(e.to_string()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            event!(
                Level::WARN,
                "Store file {} does not exist, starting empty.",
                path.display()
            );
            Ok(Snapshot::default())
        }
        Err(e) => Err(StoreErr::Io(e.to_string())),
    }
}

/// Writes next to the target and renames over it, so readers see either the
/// old file or the new one.
fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StoreErr> {
    let content =
        serde_json::to_string_pretty(snapshot).map_err(|e| StoreErr::Parse(e.to_string()))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| StoreErr::Io(e.to_string()))?;
        }
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    fs::write(&tmp, content).map_err(|e| StoreErr::Io(e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| StoreErr::Io(e.to_string()))
}
