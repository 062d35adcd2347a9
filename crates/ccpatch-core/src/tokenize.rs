//! Shell-word splitting that keeps the raw token text.
//!
//! Unlike a full shell parser this does not unquote anything: a token like
//! `-DNAME="a b"` comes back exactly as written, so rejoining the tokens with
//! single spaces reproduces the original arguments.

/// Split a command line into whitespace-separated words.
///
/// Whitespace inside single quotes, double quotes, or after a backslash does
/// not end a word. An unterminated quote extends the final word to the end of
/// the input.
#[must_use]
pub fn tokenize(command: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in command.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }

        if let Some(q) = quote {
            if ch == q {
                quote = None;
            } else if ch == '\\' && q == '"' {
                escaped = true;
            }
            continue;
        }

        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(&command[s..i]);
            }
            continue;
        }

        if start.is_none() {
            start = Some(i);
        }
        match ch {
            '\\' => escaped = true,
            '\'' | '"' => quote = Some(ch),
            _ => {}
        }
    }

    if let Some(s) = start {
        tokens.push(&command[s..]);
    }

    tokens
}
