use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

const FENCE: &str = "```";

// Opening fence: optional alphabetic tag, then the line break.
static OPENING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```[A-Za-z]*\r?\n").expect("opening fence pattern"));
// Remaining fences. A fence alone on its last line also takes the line
// break in front of it; inline fences leave surrounding text as is.
static CLOSING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r?\n```(\r?\n|\z)|```").expect("closing fence pattern")
});

/// Remove triple-backtick fences a completion model wraps around its answer.
/// Text without fences is returned borrowed and untouched.
pub fn strip_code_fences(s: &str) -> Cow<'_, str> {
    if !s.contains(FENCE) {
        return Cow::Borrowed(s);
    }
    let opened = OPENING.replace_all(s, "");
    let closed = CLOSING.replace_all(&opened, "$1");
    Cow::Owned(closed.into_owned())
}
