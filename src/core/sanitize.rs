// src/core/sanitize.rs

/// Separator of the legacy "language • stars • built by" line.
pub const META_BULLET: char = '•';

/// Join a label the page renders across several lines. Only line ends are
/// trimmed: "campoy /\n   go-tooling-workshop" → "campoy /go-tooling-workshop".
pub fn collapse_multiline(s: &str) -> String {
    s.split('\n').map(str::trim).collect()
}

/// "(Claudson Oliveira)" → "Claudson Oliveira". At most one paren each side.
pub fn trim_enclosing_parens(s: &str) -> String {
    let t = s.trim();
    let t = t.strip_prefix('(').unwrap_or(t);
    let t = t.strip_suffix(')').unwrap_or(t);
    s!(t)
}

/// First whitespace-delimited token: "cloudson (Claudson Oliveira)" → "cloudson".
pub fn first_token(s: &str) -> String {
    s.split_whitespace().next().map(String::from).unwrap_or_default()
}

/// "1,472 stars this week" → 1472, "2.552" → 2552.
/// Display-only metric: anything unparsable is 0, never an error.
pub fn parse_locale_int(s: &str) -> u64 {
    let head = s.trim().split_whitespace().next().unwrap_or("");
    let digits: String = head.chars().filter(|&c| c != ',' && c != '.').collect();
    digits.parse().unwrap_or(0)
}

/// Split a bullet-separated meta line into (language, stars text).
///
/// Two parts means the language was omitted ("stars • built by"), so the
/// stars segment sits at index 0. Otherwise index 0 is the language.
/// The one exception is a two-part line whose second part is the count
/// ("Go • 105 stars today"): a trailing "Built by" was dropped, not the language.
pub fn split_meta_line(s: &str) -> (String, String) {
    let parts: Vec<&str> = s.split(META_BULLET).map(str::trim).collect();
    match parts.as_slice() {
        [only] => (s!(), s!(*only)),
        [first, second] if !starts_with_digit(first) && starts_with_digit(second) => {
            (s!(*first), s!(*second))
        }
        [first, _] => (s!(), s!(*first)),
        [first, second, ..] => (s!(*first), s!(*second)),
        [] => (s!(), s!()),
    }
}

fn starts_with_digit(s: &str) -> bool {
    s.chars().next().is_some_and(|c| c.is_ascii_digit())
}
