//! HTML helpers for fetched pages and search result pages

use super::CollaboratorError;
use scraper::{Html, Selector};
use std::sync::OnceLock;
use url::Url;

/// Elements whose text is never shown to a reader
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Redirect endpoints (path prefix, query parameter) that wrap the real target URL
const REDIRECTS: [(&str, &str); 2] = [("/l/", "uddg"), ("/url", "q")];

fn body_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse("body").unwrap())
}

/// Visible text of an HTML document: text nodes under `<body>` joined by
/// single spaces, skipping script-like elements.
pub fn extract_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let root = document
        .select(body_selector())
        .next()
        .unwrap_or_else(|| document.root_element());

    let mut parts: Vec<&str> = Vec::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
        });
        if hidden {
            continue;
        }
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text);
        }
    }
    parts.join(" ")
}

/// Result URLs from a search page, in page order, at most `limit`.
///
/// Links are resolved against `base`; redirect wrappers (`/l/?uddg=`,
/// `/url?q=`) are unwrapped, non-http(s) links dropped and duplicates
/// removed.
pub fn result_links(
    html: &str,
    base: &Url,
    selector: &str,
    limit: usize,
) -> Result<Vec<String>, CollaboratorError> {
    let selector = Selector::parse(selector)
        .map_err(|e| CollaboratorError::InvalidSelector(format!("{}: {:?}", selector, e)))?;
    let document = Html::parse_document(html);

    let mut links: Vec<String> = Vec::new();
    for element in document.select(&selector) {
        if links.len() >= limit {
            break;
        }
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = resolve_result(base, href) else {
            continue;
        };
        let url = url.to_string();
        if !links.contains(&url) {
            links.push(url);
        }
    }
    Ok(links)
}

fn resolve_result(base: &Url, href: &str) -> Option<Url> {
    let url = base.join(href.trim()).ok()?;
    let target = unwrap_redirect(&url).unwrap_or(url);
    matches!(target.scheme(), "http" | "https").then_some(target)
}

fn unwrap_redirect(url: &Url) -> Option<Url> {
    let (_, param) = REDIRECTS
        .iter()
        .find(|(path, _)| url.path() == *path || url.path() == path.trim_end_matches('/'))?;
    url.query_pairs()
        .find(|(key, _)| **key == **param)
        .and_then(|(_, value)| Url::parse(&value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://html.duckduckgo.com/html/").unwrap()
    }

    #[test]
    fn test_extract_text_skips_scripts_and_head() {
        let html = r#"
            <html>
              <head><title>Title</title><style>body { color: red }</style></head>
              <body>
                <h1>SEO Guide</h1>
                <script>var tracking = "seo";</script>
                <p>Write <b>useful</b> content.</p>
                <noscript>Enable JavaScript</noscript>
              </body>
            </html>"#;
        assert_eq!(extract_text(html), "SEO Guide Write useful content.");
    }

    #[test]
    fn test_extract_text_of_fragment() {
        assert_eq!(extract_text("<p>plain</p> text"), "plain text");
        assert_eq!(extract_text(""), "");
    }

    #[test]
    fn test_result_links_unwraps_redirects() {
        let html = r#"
            <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fseo&rut=abc">One</a>
            <a class="result__a" href="https://direct.example.org/page">Two</a>
            <a class="other" href="https://ignored.example.net/">Ignored</a>"#;
        let links = result_links(html, &base(), "a.result__a", 10).unwrap();
        assert_eq!(
            links,
            vec!["https://example.com/seo", "https://direct.example.org/page"]
        );
    }

    #[test]
    fn test_result_links_google_style() {
        let html = r#"<a href="/url?q=https://blog.example.com/post&sa=U">Post</a>"#;
        let base = Url::parse("https://www.google.com/search").unwrap();
        let links = result_links(html, &base, "a", 1).unwrap();
        assert_eq!(links, vec!["https://blog.example.com/post"]);
    }

    #[test]
    fn test_result_links_keeps_organic_urls_with_query_params() {
        let html = r#"
            <a class="result__a" href="https://tools.example.com/search?q=https%3A%2F%2Fother.example.org%2F">Tool</a>
            <a class="result__a" href="https://news.example.com/story?uddg=https%3A%2F%2Fx.example%2F">Story</a>"#;
        let links = result_links(html, &base(), "a.result__a", 10).unwrap();
        assert_eq!(
            links,
            vec![
                "https://tools.example.com/search?q=https%3A%2F%2Fother.example.org%2F",
                "https://news.example.com/story?uddg=https%3A%2F%2Fx.example%2F"
            ]
        );
    }

    #[test]
    fn test_result_links_limit_and_dedupe() {
        let html = r#"
            <a class="result__a" href="https://a.example.com/">A</a>
            <a class="result__a" href="https://a.example.com/">A again</a>
            <a class="result__a" href="mailto:someone@example.com">Mail</a>
            <a class="result__a">No href</a>
            <a class="result__a" href="https://b.example.com/">B</a>
            <a class="result__a" href="https://c.example.com/">C</a>"#;
        let links = result_links(html, &base(), "a.result__a", 2).unwrap();
        assert_eq!(links, vec!["https://a.example.com/", "https://b.example.com/"]);
    }

    #[test]
    fn test_result_links_empty_page() {
        let links = result_links("<html><body>No results</body></html>", &base(), "a.result__a", 1)
            .unwrap();
        assert!(links.is_empty());
    }

    #[test]
    fn test_result_links_bad_selector() {
        let err = result_links("", &base(), "a[", 1).unwrap_err();
        assert!(matches!(err, CollaboratorError::InvalidSelector(_)));
    }
}
