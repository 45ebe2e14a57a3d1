use pagewire_core::{PreferenceStore, StorageError, StorageResult};
use tracing::debug;
use web_sys::{Storage, Window};

use crate::dom::js_detail;

/// [`PreferenceStore`] backed by `window.localStorage`.
///
/// When storage is disabled (privacy mode, sandboxed iframe) reads return
/// nothing and writes are dropped.
pub(crate) struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    pub(crate) fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                debug!(detail = %js_detail(&err), "localStorage unavailable");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn name(&self) -> &str {
        "localStorage"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Backend(js_detail(&e))),
            None => Ok(None),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        match &self.storage {
            Some(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Backend(js_detail(&e))),
            None => Ok(()),
        }
    }
}
