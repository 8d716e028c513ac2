//! Text normalization — strip Reddit markdown and noise from raw fragments.

/// Clean and normalize a raw text fragment.
///
/// Removes markdown emphasis (keeping inner content), URLs, user/subreddit
/// mentions and quoted-reply lines, then collapses all whitespace to single
/// spaces. Total: `None` and `""` both yield `""`.
pub fn normalize(text: Option<&str>) -> String {
    let raw = match text {
        Some(t) if !t.is_empty() => t,
        _ => return String::new(),
    };

    // Markdown emphasis — keep inner content
    let re_bold = regex::Regex::new(r"\*\*(.*?)\*\*").unwrap();
    let text = re_bold.replace_all(raw, "$1");
    let re_italic = regex::Regex::new(r"\*(.*?)\*").unwrap();
    let text = re_italic.replace_all(&text, "$1");
    let re_strike = regex::Regex::new(r"~~(.*?)~~").unwrap();
    let text = re_strike.replace_all(&text, "$1");
    let re_sup = regex::Regex::new(r"\^(.*?)\^").unwrap();
    let text = re_sup.replace_all(&text, "$1");

    // URLs
    let re_url = regex::Regex::new(r"https?://\S+").unwrap();
    let text = re_url.replace_all(&text, "");

    // Reddit-specific formatting
    let re_user = regex::Regex::new(r"/u/\w+").unwrap();
    let text = re_user.replace_all(&text, "");
    let re_sub = regex::Regex::new(r"/r/\w+").unwrap();
    let text = re_sub.replace_all(&text, "");
    let re_quote = regex::Regex::new(r"&gt;.*?\n").unwrap();
    let text = re_quote.replace_all(&text, "");

    // Whitespace
    let re_newlines = regex::Regex::new(r"\n+").unwrap();
    let text = re_newlines.replace_all(&text, " ");
    let re_spaces = regex::Regex::new(r"\s+").unwrap();
    let text = re_spaces.replace_all(&text, " ");

    text.trim().to_string()
}
