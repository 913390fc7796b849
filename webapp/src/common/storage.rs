use gloo_console::error as console_error;
use web_sys::Storage;

use menu_core::theme::PreferenceStore;

// localStorage itself can throw (blocked storage, sandboxed frames), so it is looked up per call
fn local_storage() -> Option<Storage> {
    let window = web_sys::window()?;

    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            console_error!(format!("Local storage unavailable: {err:?}"));
            None
        }
    }
}

// preferences in the browser's localStorage
//
// values are stored as plain strings under their bare key, so the entry reads theme=dark or
// theme=light.  without storage every read misses and every write is dropped
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalPreferences;

impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).unwrap_or_else(|err| {
            console_error!(format!("Failed to fetch local storage {key}: {err:?}"));
            None
        })
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = local_storage() else {
            return;
        };

        storage
            .set_item(key, value)
            .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err:?}")))
    }
}
