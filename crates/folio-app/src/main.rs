//! Portfolio Analytics Dashboard entry point

use folio_components::App;
use folio_fetch::{FetchConfig, DEFAULT_API_URL};
use leptos::prelude::*;

/// Port of the API server when its host is taken from the page location
const API_PORT: u16 = 3001;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let config = FetchConfig::new(api_base_url());
    tracing::info!(api = %config.base_url, demo = config.is_demo(), "mounting dashboard");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Compile-time `FOLIO_API_URL` wins; otherwise the API runs next to the page
fn api_base_url() -> String {
    if let Some(url) = option_env!("FOLIO_API_URL") {
        return url.to_string();
    }

    page_location()
        .and_then(|(protocol, hostname)| base_url_for(&protocol, &hostname))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn page_location() -> Option<(String, String)> {
    let location = web_sys::window()?.location();
    Some((location.protocol().ok()?, location.hostname().ok()?))
}

fn base_url_for(protocol: &str, hostname: &str) -> Option<String> {
    if hostname.is_empty() || !protocol.starts_with("http") {
        return None;
    }
    Some(format!("{}//{}:{}", protocol, hostname, API_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_from_location() {
        assert_eq!(
            base_url_for("https:", "folio.example.com").as_deref(),
            Some("https://folio.example.com:3001")
        );
        assert!(base_url_for("file:", "").is_none());
        assert!(base_url_for("http:", "").is_none());
    }
}
