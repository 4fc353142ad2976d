use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static JAVASCRIPT_SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("valid scheme regex"));

/// Strips markup and `javascript:` schemes, then trims surrounding whitespace.
pub fn sanitize(text: &str) -> String {
    let text = TAG.replace_all(text, "");
    let text = JAVASCRIPT_SCHEME.replace_all(&text, "");

    text.trim().to_owned()
}
