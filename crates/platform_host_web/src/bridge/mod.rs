//! Browser transport interop.
//!
//! Routes calls to target-specific implementations while keeping one API for the adapters in
//! this crate. Off-browser builds report every network call as unavailable.

use platform_host::HttpResponse;

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub async fn fetch_text(url: &str) -> Result<HttpResponse, String> {
    imp::fetch_text(url).await
}
