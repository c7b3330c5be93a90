/// Quote `value` as a JSON string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    escape_str(value, &mut out);
    out
}

pub(crate) fn escape_str(value: &str, out: &mut String) {
    out.push('"');

    if !value.chars().any(needs_escape) {
        out.push_str(value);
        out.push('"');
        return;
    }

    let mut start = 0;

    for (i, ch) in value.char_indices() {
        let escape = escape_of(ch);
        if escape == 0 {
            continue;
        }

        if start < i {
            out.push_str(&value[start..i]);
        }

        match escape {
            self::B_ => out.push_str("\\b"),
            self::T_ => out.push_str("\\t"),
            self::N_ => out.push_str("\\n"),
            self::F_ => out.push_str("\\f"),
            self::R_ => out.push_str("\\r"),
            self::QT => out.push_str("\\\""),
            self::BS => out.push_str("\\\\"),
            self::U => {
                static HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";
                let code = ch as u32;
                out.push_str("\\u");
                for shift in [12, 8, 4, 0] {
                    out.push(HEX_DIGITS[((code >> shift) & 0xF) as usize] as char);
                }
            }
            _ => unreachable!(),
        }

        start = i + ch.len_utf8();
    }

    if start != value.len() {
        out.push_str(&value[start..]);
    }

    out.push('"');
}

fn needs_escape(ch: char) -> bool {
    escape_of(ch) != 0
}

fn escape_of(ch: char) -> u8 {
    let code = ch as u32;
    if code < 0x80 {
        return ESCAPE[code as usize];
    }
    if UNSAFE.iter().any(|&(lo, hi)| lo <= code && code <= hi) {
        U
    } else {
        0
    }
}

const B_: u8 = b'b'; // \x08
const T_: u8 = b't'; // \x09
const N_: u8 = b'n'; // \x0A
const F_: u8 = b'f'; // \x0C
const R_: u8 = b'r'; // \x0D
const QT: u8 = b'"'; // \x22
const BS: u8 = b'\\'; // \x5C
const U: u8 = b'u'; // \x00...\x1F and \x7F except the ones above

// Lookup table of escape sequences for ASCII. A value of b'x' at index i means
// that byte i is escaped as "\x" in JSON. A value of 0 means that byte i is
// not escaped.
#[rustfmt::skip]
static ESCAPE: [u8; 128] = [
    //  1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    U,  U,  U,  U,  U,  U,  U,  U, B_, T_, N_,  U, F_, R_,  U,  U, // 0
    U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U, // 1
    0,  0, QT,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 2
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 3
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 4
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, BS,  0,  0,  0, // 5
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 6
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  U, // 7
];

// Non-ASCII code points escaped as \uXXXX: C1 controls, soft hyphen and the
// format/separator characters that break embedding in script contexts.
static UNSAFE: [(u32, u32); 10] = [
    (0x0080, 0x009F),
    (0x00AD, 0x00AD),
    (0x0600, 0x0604),
    (0x070F, 0x070F),
    (0x17B4, 0x17B5),
    (0x200C, 0x200F),
    (0x2028, 0x202F),
    (0x2060, 0x206F),
    (0xFEFF, 0xFEFF),
    (0xFFF0, 0xFFFF),
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_text_is_only_wrapped() {
        assert_eq!(quote("John"), "\"John\"");
        assert_eq!(quote(""), "\"\"");
        assert_eq!(quote("héllo wörld 日本"), "\"héllo wörld 日本\"");
    }

    #[test]
    fn short_escapes_are_used_where_known() {
        assert_eq!(quote("a\"b\\c\nd"), r#""a\"b\\c\nd""#);
        assert_eq!(quote("\u{8}\t\u{c}\r"), r#""\b\t\f\r""#);
    }

    #[test]
    fn other_controls_use_four_hex_digits() {
        assert_eq!(quote("\u{0}"), r#""\u0000""#);
        assert_eq!(quote("\u{1f}"), r#""\u001f""#);
        assert_eq!(quote("\u{7f}"), r#""\u007f""#);
        assert_eq!(quote("\u{9f}"), r#""\u009f""#);
    }

    #[test]
    fn unicode_format_characters_are_escaped() {
        assert_eq!(quote("a\u{2028}b\u{2029}"), "\"a\\u2028b\\u2029\"");
        assert_eq!(quote("\u{feff}x"), "\"\\ufeffx\"");
        assert_eq!(quote("\u{ad}\u{200d}\u{ffff}"), "\"\\u00ad\\u200d\\uffff\"");
        assert_eq!(quote("\u{600}\u{70f}\u{17b5}"), "\"\\u0600\\u070f\\u17b5\"");
    }

    #[test]
    fn astral_characters_pass_through() {
        assert_eq!(quote("🎉"), "\"🎉\"");
    }

    #[test]
    fn escaped_text_round_trips_through_a_standard_parser() {
        let original = "say \"hi\"\\\n\u{2028}\u{1}end";
        let parsed: String = serde_json::from_str(&quote(original)).unwrap();
        assert_eq!(parsed, original);
    }
}
