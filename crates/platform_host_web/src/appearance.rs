//! Browser appearance adapter backed by `matchMedia` and the document root `classList`.

use platform_host::AppearanceHost;

/// Media query consulted for the host color-scheme preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, Default)]
/// Appearance host reading `window.matchMedia` and toggling classes on `document.documentElement`.
pub struct WebAppearanceHost;

#[cfg(target_arch = "wasm32")]
fn document_root() -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
}

impl AppearanceHost for WebAppearanceHost {
    fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            document_root().is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn prefers_dark(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
                .map(|list| list.matches())
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn set_root_class(&self, class: &str, enabled: bool) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            // No document (worker context): nothing to style.
            let Some(root) = document_root() else {
                return Ok(());
            };
            root.class_list()
                .toggle_with_force(class, enabled)
                .map(|_| ())
                .map_err(|e| format!("classList.toggle({class}) failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (class, enabled);
            Ok(())
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn off_browser_host_is_inert() {
        let host = WebAppearanceHost;
        assert!(!host.is_available());
        assert!(!host.prefers_dark());
        host.set_root_class("dark", true).expect("toggle");
    }
}
