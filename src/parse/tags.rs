use regex::Regex;

/// Build the search pattern for a `key:value` token. The key must sit at
/// line start or right after whitespace, so a short key never matches as
/// the tail of a longer one (`y` vs `key`). The value is the following run
/// of non-whitespace.
fn key_pattern(key: &str) -> Regex {
    Regex::new(&format!(r"(^|\s){}:(\S+)", regex::escape(key))).unwrap()
}

/// Extract the value of the first `key:value` token in `line`.
/// Returns `None` when the key is not present.
pub fn get_tag<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    key_pattern(key)
        .captures(line)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Set, replace, or delete a `key:value` token in `line`.
///
/// With `Some(value)` the first existing token is replaced in place, or
/// ` key:value` is appended when the key is absent (bare `key:value` on an
/// empty line). With `None` the first token is removed along with exactly
/// one separating space, so no double spaces or boundary whitespace are
/// left behind. Pure: returns the rewritten line, the input is untouched.
pub fn set_tag(line: &str, key: &str, value: Option<&str>) -> String {
    let caps = key_pattern(key).captures(line);
    match (caps, value) {
        (Some(caps), Some(value)) => {
            let m = caps.get(0).unwrap();
            let lead = caps.get(1).map_or("", |g| g.as_str());
            format!(
                "{}{}{}:{}{}",
                &line[..m.start()],
                lead,
                key,
                value,
                &line[m.end()..]
            )
        }
        (Some(caps), None) => {
            let m = caps.get(0).unwrap();
            let mut rest = &line[m.end()..];
            if m.start() == 0 {
                // The token was at line start, so the whitespace consumed by
                // the match was the one *after* it, not before.
                rest = rest.strip_prefix(' ').unwrap_or(rest);
            }
            format!("{}{}", &line[..m.start()], rest)
        }
        (None, Some(value)) => {
            if line.is_empty() {
                format!("{}:{}", key, value)
            } else {
                format!("{} {}:{}", line, key, value)
            }
        }
        (None, None) => line.to_string(),
    }
}
