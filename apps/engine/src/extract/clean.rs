//! Text cleaning — normalizes extracted text into a canonical line-oriented
//! form consumed by every parser. Pure and idempotent.

/// Normalizes whitespace, line endings, and bullet glyphs.
///
/// Tabs become single spaces, every carriage-return variant becomes a line
/// feed, and bullet glyphs are rewritten as a `- ` line prefix. Lines are
/// trimmed and blank lines dropped. `clean_text(clean_text(x)) == clean_text(x)`.
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = text.replace('\t', " ");
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    // "â€¢" is the cp1252 misread of a UTF-8 bullet; PDF extractors emit both.
    let text = text.replace("â€¢", "\n- ").replace('•', "\n- ");

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
