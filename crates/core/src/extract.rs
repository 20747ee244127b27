//! Main-content text extraction from article pages.
//!
//! Boilerplate elements are removed with a streaming rewrite before the
//! document is parsed. The main content is then the first `<article>`, or the
//! first content-like container, or the whole document as a fallback.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

/// Elements dropped before text extraction.
const BOILERPLATE_TAGS: [&str; 5] = ["script", "style", "nav", "footer", "header"];

/// Container tags searched, in priority order, when there is no `<article>`.
const CONTAINER_TAGS: [&str; 3] = ["div", "main", "section"];

static CONTENT_CLASS_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)content|article|post|entry").unwrap());

/// Line separators recognised when normalizing extracted text.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{000B}', '\u{000C}', '\u{001C}', '\u{001D}', '\u{001E}', '\u{0085}', '\u{2028}', '\u{2029}',
];

/// Extracts the readable main text of an HTML page as a single line.
///
/// # Example
///
/// ```rust
/// use sentimetric_core::extract_article_text;
///
/// let html = "<html><body><nav>Menu</nav><article><p>Hello</p>\n<p>world</p></article></body></html>";
/// assert_eq!(extract_article_text(html), "Hello world");
/// ```
pub fn extract_article_text(html: &str) -> String {
    let stripped = remove_boilerplate(html);
    let document = Html::parse_document(&stripped);

    let mut text = main_content(&document).map(element_text).unwrap_or_default();
    if text.is_empty() {
        debug!("No article container found, using whole document text");
        text = element_text(document.root_element());
    }

    normalize_text(&text)
}

/// Removes [`BOILERPLATE_TAGS`] elements and their content.
///
/// Falls back to the input when the rewrite fails.
fn remove_boilerplate(html: &str) -> String {
    let mut output = Vec::with_capacity(html.len());
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: BOILERPLATE_TAGS
                .iter()
                .map(|tag| {
                    lol_html::element!(tag, |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| output.extend_from_slice(c),
    );

    if let Err(e) = rewriter.write(html.as_bytes()) {
        debug!("Boilerplate removal failed: {e}");
        return html.to_string();
    }
    if let Err(e) = rewriter.end() {
        debug!("Boilerplate removal failed: {e}");
        return html.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| html.to_string())
}

/// The element whose text is the article body, if the page has one.
fn main_content(document: &Html) -> Option<ElementRef<'_>> {
    if let Ok(selector) = Selector::parse("article")
        && let Some(article) = document.select(&selector).next()
    {
        return Some(article);
    }

    CONTAINER_TAGS.iter().find_map(|tag| {
        let selector = Selector::parse(tag).ok()?;
        document
            .select(&selector)
            .find(|el| el.value().attr("class").is_some_and(|class| CONTENT_CLASS_PATTERN.is_match(class)))
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Collapses text to one line: every line is trimmed, split on double
/// spaces, and the non-empty pieces are joined with a single space.
pub fn normalize_text(text: &str) -> String {
    text.split(LINE_BREAKS)
        .flat_map(|line| line.trim().split("  "))
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_preferred() {
        let html = r#"<html><body>
            <div class="content">Sidebar text</div>
            <article><h1>Title</h1><p>Body text.</p></article>
        </body></html>"#;
        assert_eq!(extract_article_text(html), "TitleBody text.");
    }

    #[test]
    fn test_content_container_fallback() {
        let html = r#"<html><body>
            <div class="wrapper">Ignored wrapper</div>
            <div class="Post-Body">
                <p>First paragraph.</p>
                <p>Second paragraph.</p>
            </div>
        </body></html>"#;
        assert_eq!(extract_article_text(html), "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_container_priority_div_before_main() {
        let html = r#"<html><body>
            <main class="content">Main text</main>
            <div class="entry">Div text</div>
        </body></html>"#;
        assert_eq!(extract_article_text(html), "Div text");
    }

    #[test]
    fn test_section_container() {
        let html = r#"<html><body><section class="article-body">Section text</section></body></html>"#;
        assert_eq!(extract_article_text(html), "Section text");
    }

    #[test]
    fn test_whole_document_fallback() {
        let html = "<html><head><title>Page</title></head><body><p>Loose text</p></body></html>";
        assert_eq!(extract_article_text(html), "PageLoose text");
    }

    #[test]
    fn test_empty_article_falls_back() {
        let html = "<html><body><article></article><p>Outside</p></body></html>";
        assert_eq!(extract_article_text(html), "Outside");
    }

    #[test]
    fn test_boilerplate_removed() {
        let html = r#"<html><head><style>p { color: red; }</style></head><body>
            <header>Site header</header>
            <nav>Home | About</nav>
            <article>Story<script>var x = 1;</script></article>
            <footer>Copyright</footer>
        </body></html>"#;
        assert_eq!(extract_article_text(html), "Story");
    }

    #[test]
    fn test_boilerplate_removed_in_fallback() {
        let html = "<html><body><header>Top</header><p>Kept</p><footer>Bottom</footer></body></html>";
        assert_eq!(extract_article_text(html), "Kept");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(extract_article_text(""), "");
    }

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  a  b \n\n   c\r\nd  "), "a b c d");
        assert_eq!(normalize_text("one two"), "one two");
        assert_eq!(normalize_text("x   y"), "x y");
        assert_eq!(normalize_text("\n \t \n"), "");
    }
}
