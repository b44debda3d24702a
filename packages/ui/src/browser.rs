//! Thin wrappers over the browser APIs the pages need: navigation, the query
//! string, `history.replaceState`, timers, the `<body>` theme class,
//! `matchMedia`, file downloads and the native confirm/prompt dialogs.
//!
//! On native targets every effect is a logged no-op so shared views still
//! compile for host tests.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Value of `name` in a `?a=b&c=d` query string. Empty values count as absent.
pub fn query_value(search: &str, name: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// `href` with query parameter `name` set to `value`, keeping every other
/// parameter in place. `None` when `href` is not an absolute URL.
pub fn with_query_param(href: &str, name: &str, value: &str) -> Option<String> {
    let mut url = url::Url::parse(href).ok()?;
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    match pairs.iter().position(|(k, _)| k == name) {
        Some(first) => {
            pairs[first].1 = value.to_string();
            let mut seen = false;
            pairs.retain(|(k, _)| {
                if k != name {
                    return true;
                }
                let keep = !seen;
                seen = true;
                keep
            });
        }
        None => pairs.push((name.to_string(), value.to_string())),
    }
    url.query_pairs_mut().clear().extend_pairs(pairs);
    Some(url.into())
}

/// Path plus a single encoded query parameter, e.g. `/search?q=New+Delhi`.
pub fn path_with_query(path: &str, name: &str, value: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(name, value)
        .finish();
    format!("{path}?{query}")
}

/// Full page navigation.
pub fn navigate(href: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(href) {
                tracing::error!(href, error = ?e, "Navigation failed");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::info!(href, "navigate");
}

/// A parameter from the current page's query string.
pub fn query_param(name: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        query_value(&search, name)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = name;
        None
    }
}

/// Rewrite one query parameter of the current URL without reloading.
pub fn replace_query_param(name: &str, value: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(href) = window.location().href() else {
            return;
        };
        let Some(next) = with_query_param(&href, name, value) else {
            return;
        };
        let result = window
            .history()
            .and_then(|h| h.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&next)));
        if let Err(e) = result {
            tracing::warn!(error = ?e, "history.replaceState failed");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(name, value, "replace_query_param");
}

pub async fn sleep_ms(ms: u32) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Swap the theme class on `<body>`: remove every class in `remove`, add `add`.
pub fn set_body_class(remove: &[&str], add: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
        else {
            return;
        };
        let classes = body.class_list();
        for class in remove {
            if let Err(e) = classes.remove_1(class) {
                tracing::warn!(class, error = ?e, "Failed to clear body class");
            }
        }
        if let Err(e) = classes.add_1(add) {
            tracing::warn!(class = add, error = ?e, "Failed to set body class");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    tracing::debug!(?remove, add, "set_body_class");
}

/// `(prefers-color-scheme: dark)`, evaluated once per call.
pub fn prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|mql| mql.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    false
}

/// Offer `contents` to the user as a file download.
pub fn download(filename: &str, mime: &str, contents: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        match start_download(filename, mime, contents) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(filename, error = ?e, "Download failed");
                false
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(filename, mime, bytes = contents.len(), "download");
        true
    }
}

#[cfg(target_arch = "wasm32")]
fn start_download(filename: &str, mime: &str, contents: &str) -> Result<(), wasm_bindgen::JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let link: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(filename);
    link.click();
    web_sys::Url::revoke_object_url(&url)
}

/// The browser's `confirm()` dialog. Native builds always decline.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(message, "confirm");
        false
    }
}

/// The browser's `prompt()` dialog. `None` when dismissed.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()?.prompt_with_message(message).ok().flatten()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(message, "prompt");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value() {
        assert_eq!(query_value("?type=owner&mode=signup", "mode").as_deref(), Some("signup"));
        assert_eq!(query_value("q=New+Delhi", "q").as_deref(), Some("New Delhi"));
        assert_eq!(query_value("?q=", "q"), None);
        assert_eq!(query_value("", "type"), None);
        assert_eq!(query_value("?type=a&type=b", "type").as_deref(), Some("a"));
    }

    #[test]
    fn test_with_query_param_replaces_in_place() {
        let url = "http://localhost:8080/login?mode=signup&type=student";
        let next = with_query_param(url, "type", "owner").unwrap();
        assert_eq!(next, "http://localhost:8080/login?mode=signup&type=owner");
    }

    #[test]
    fn test_with_query_param_appends_when_missing() {
        let next = with_query_param("http://localhost:8080/login", "type", "admin").unwrap();
        assert_eq!(next, "http://localhost:8080/login?type=admin");
        assert!(with_query_param("/login", "type", "admin").is_none());
    }

    #[test]
    fn test_path_with_query_encodes() {
        assert_eq!(
            path_with_query("/search", "q", "Navrangpura, Ahmedabad"),
            "/search?q=Navrangpura%2C+Ahmedabad"
        );
    }

    #[tokio::test]
    async fn test_sleep_ms_returns() {
        sleep_ms(1).await;
    }
}
