use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Elements whose text never reaches the screen.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template"];

/// Elements that start a new line when rendered.
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol",
    "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Visible page text: one trimmed, whitespace-collapsed line per rendered line,
/// blank lines dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Strip all markup from a page. Undecodable bytes are replaced, not rejected.
pub fn extract_text(body: &[u8]) -> ExtractedText {
    let html = String::from_utf8_lossy(body);
    let doc = Html::parse_document(&html);

    let mut raw = String::with_capacity(html.len() / 2);
    collect_text(doc.root_element(), &mut raw);

    let lines: Vec<String> = raw.lines().filter_map(normalize_line).collect();
    ExtractedText(lines.join("\n"))
}

/// Collapse internal whitespace (nbsp included) and trim; `None` for blank lines.
pub fn normalize_line(line: &str) -> Option<String> {
    let line = WS_RE.replace_all(line.trim(), " ");
    if line.is_empty() {
        None
    } else {
        Some(line.into_owned())
    }
}

fn collect_text(el: ElementRef, out: &mut String) {
    let name = el.value().name();
    if HIDDEN.contains(&name) {
        return;
    }
    let block = BLOCK.contains(&name);
    if block {
        out.push('\n');
    }
    for child in el.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            collect_text(child_el, out);
        }
    }
    if block {
        out.push('\n');
    }
}
