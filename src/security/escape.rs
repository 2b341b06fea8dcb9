/// Escape a token for use as a CSS class selector.
///
/// Follows `CSS.escape` from CSSOM so any setting value (spaces, dots,
/// leading digits, quotes) yields a selector that matches the literal
/// class name instead of breaking the surrounding rule.
pub fn escape_class_name(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    let first = raw.chars().next();
    let single = raw.chars().nth(1).is_none();

    for (position, c) in raw.chars().enumerate() {
        match c {
            '\0' => escaped.push('\u{FFFD}'),
            '\u{1}'..='\u{1F}' | '\u{7F}' => push_hex(&mut escaped, c),
            '0'..='9' if position == 0 => push_hex(&mut escaped, c),
            '0'..='9' if position == 1 && first == Some('-') => push_hex(&mut escaped, c),
            '-' if position == 0 && single => escaped.push_str("\\-"),
            c if !c.is_ascii() || c == '-' || c == '_' || c.is_ascii_alphanumeric() => {
                escaped.push(c)
            }
            c => {
                escaped.push('\\');
                escaped.push(c);
            }
        }
    }

    escaped
}

/// Whether `name` can be used unescaped as a placeholder or class name
///
/// Accepts `[A-Za-z_-][A-Za-z0-9_-]*`, except a lone `-`.
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    if name == "-" || !(first.is_ascii_alphabetic() || first == '_' || first == '-') {
        return false;
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn push_hex(out: &mut String, c: char) {
    // Trailing space terminates the escape sequence
    out.push_str(&format!("\\{:x} ", c as u32));
}
