use super::*;

pub async fn fetch_text(url: &str) -> Result<HttpResponse, String> {
    Err(format!(
        "browser fetch is only available when compiled for wasm32 (GET {url})"
    ))
}
