//! `:shortcode:` emoji substitution

const SHORTCODES: &[(&str, &str)] = &[
    ("+1", "👍"),
    ("-1", "👎"),
    ("100", "💯"),
    ("balloon", "🎈"),
    ("bar_chart", "📊"),
    ("bird", "🐦"),
    ("book", "📖"),
    ("bulb", "💡"),
    ("cat", "🐱"),
    ("chart_with_upwards_trend", "📈"),
    ("clap", "👏"),
    ("cloud", "☁️"),
    ("coffee", "☕"),
    ("cookie", "🍪"),
    ("crab", "🦀"),
    ("dog", "🐶"),
    ("eyes", "👀"),
    ("fire", "🔥"),
    ("gear", "⚙️"),
    ("grinning", "😀"),
    ("heart", "❤️"),
    ("heart_eyes", "😍"),
    ("joy", "😂"),
    ("laughing", "😆"),
    ("memo", "📝"),
    ("ok_hand", "👌"),
    ("pencil", "📝"),
    ("point_right", "👉"),
    ("pray", "🙏"),
    ("rainbow", "🌈"),
    ("raised_hands", "🙌"),
    ("rocket", "🚀"),
    ("smile", "😄"),
    ("smiley", "😃"),
    ("sparkles", "✨"),
    ("star", "⭐"),
    ("sunglasses", "😎"),
    ("sunny", "☀️"),
    ("tada", "🎉"),
    ("thinking", "🤔"),
    ("thumbsdown", "👎"),
    ("thumbsup", "👍"),
    ("warning", "⚠️"),
    ("wave", "👋"),
    ("white_check_mark", "✅"),
    ("wink", "😉"),
    ("x", "❌"),
    ("zap", "⚡"),
];

/// Glyph for a shortcode name (without colons)
pub fn lookup(name: &str) -> Option<&'static str> {
    SHORTCODES
        .binary_search_by(|(code, _)| (*code).cmp(name))
        .ok()
        .map(|i| SHORTCODES[i].1)
}

fn is_shortcode_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-')
}

/// Replace every known `:name:` with its emoji; unknown codes stay as written
pub fn emojize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(':') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let name_len = after
            .char_indices()
            .find(|(_, c)| !is_shortcode_char(*c))
            .map_or(after.len(), |(i, _)| i);

        let closes = after[name_len..].starts_with(':');
        match lookup(&after[..name_len]).filter(|_| closes && name_len > 0) {
            Some(glyph) => {
                out.push_str(glyph);
                rest = &after[name_len + 1..];
            }
            None => {
                out.push(':');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_for_lookup() {
        assert!(SHORTCODES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_emojize_known_codes() {
        assert_eq!(
            emojize("Showing :heart: for Streamlit :raised_hands:"),
            "Showing ❤️ for Streamlit 🙌"
        );
    }

    #[test]
    fn test_unknown_and_unterminated_codes_are_kept() {
        assert_eq!(emojize("a :not_an_emoji: b"), "a :not_an_emoji: b");
        assert_eq!(emojize("time 10:30 :heart"), "time 10:30 :heart");
        assert_eq!(emojize("::"), "::");
    }

    #[test]
    fn test_adjacent_codes() {
        assert_eq!(emojize(":tada::balloon:"), "🎉🎈");
        assert_eq!(emojize("ratio :heart::"), "ratio ❤️:");
    }
}
