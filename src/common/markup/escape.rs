use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;

const ATTR_PATTERNS: [&str; 5] = ["&", "<", ">", "\"", "'"];
const ATTR_REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"];

static ATTR_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .build(ATTR_PATTERNS)
        .expect("Failed to build attribute escaper")
});

// "\r\n" must win over "\n" so a CRLF becomes one break
static TEXT_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(["&", "<", ">", "\r\n", "\n"])
        .expect("Failed to build text escaper")
});

/// Escape a value for use inside a double- or single-quoted HTML attribute.
///
/// # Examples
///
/// ```
/// use sheetgrid::common::markup::escape_attr;
/// assert_eq!(escape_attr("a & b"), "a &amp; b");
/// assert_eq!(escape_attr("<b>\"hi\"</b>"), "&lt;b&gt;&quot;hi&quot;&lt;/b&gt;");
/// assert_eq!(escape_attr("it's"), "it&#39;s");
/// ```
#[inline]
pub fn escape_attr(s: &str) -> String {
    ATTR_ESCAPER.replace_all(s, &ATTR_REPLACEMENTS)
}

/// Escape cell text for HTML element content, turning line breaks into `<br>`.
///
/// # Examples
///
/// ```
/// use sheetgrid::common::markup::escape_text;
/// assert_eq!(escape_text("1 < 2"), "1 &lt; 2");
/// assert_eq!(escape_text("one\ntwo\r\nthree"), "one<br>two<br>three");
/// assert_eq!(escape_text("\"quoted\""), "\"quoted\"");
/// ```
#[inline]
pub fn escape_text(s: &str) -> String {
    TEXT_ESCAPER.replace_all(s, &["&amp;", "&lt;", "&gt;", "<br>", "<br>"])
}
