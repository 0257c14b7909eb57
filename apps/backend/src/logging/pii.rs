use std::fmt;

const KEY_MARKER: &str = "Key (";
const MASK: &str = "(***)";

/// Masks the values Postgres echoes back in constraint errors.
///
/// `Key (game_id, word)=(g-1, crane) already exists.` becomes
/// `Key (game_id, word)=(***) already exists.` so guessed words and owners
/// stay out of logs. Anything else passes through unchanged.
pub fn redact(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find(KEY_MARKER) {
        let after_key = &rest[start..];
        let Some(eq) = after_key.find(")=(") else {
            break;
        };
        let values_start = eq + ")=(".len();
        let Some(close) = after_key[values_start..].find(')') else {
            break;
        };

        out.push_str(&rest[..start]);
        out.push_str(&after_key[..eq + 2]);
        out.push_str(MASK);
        rest = &after_key[values_start + close + 1..];
    }

    out.push_str(rest);
    out
}

/// A wrapper that redacts its contents when displayed.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
