//! Theme-token persistence on `window.localStorage`.
//!
//! Values are stored as bare text (the theme store writes `dark`, not `"dark"`). Off-browser
//! builds report the store unavailable so native tests and tooling link without a DOM.

use platform_host::PrefsStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
///
/// Storage can be missing even inside a browser (private mode, sandboxed frames); the store then
/// reports itself unavailable instead of failing each call.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl PrefsStore for WebPrefsStore {
    fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage().is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(storage) = local_storage() else {
                return Ok(None);
            };
            storage
                .get_item(key)
                .map_err(|e| format!("reading {key} from localStorage failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_pref(&self, key: &str, raw: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .ok_or_else(|| "localStorage unavailable".to_string())?
                .set_item(key, raw)
                .map_err(|e| format!("writing {key} to localStorage failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw);
            Err("localStorage requires a wasm32 browser target".to_string())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn off_browser_store_is_unavailable() {
        let store = WebPrefsStore;
        assert!(!store.is_available());
        assert_eq!(store.load_pref("theme").expect("load"), None);
        let err = store.save_pref("theme", "dark").expect_err("no storage");
        assert!(err.contains("wasm32"));
    }
}
