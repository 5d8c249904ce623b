//! Search input filtering.

/// Result of filtering raw search input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sanitized {
    /// Input with every disallowed character removed.
    pub cleaned: String,
    /// Whether anything was removed.
    pub had_invalid_chars: bool,
}

impl Sanitized {
    /// Returns `true` if nothing searchable is left.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cleaned.trim().is_empty()
    }
}

/// Returns `true` for characters allowed in a species name search.
#[must_use]
pub const fn is_allowed(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-'
}

/// Keep ASCII letters and hyphens, drop everything else.
#[must_use]
pub fn sanitize(raw: &str) -> Sanitized {
    let cleaned: String = raw.chars().filter(|&c| is_allowed(c)).collect();
    let had_invalid_chars = cleaned.len() != raw.len();
    Sanitized {
        cleaned,
        had_invalid_chars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("pikachu", "pikachu", false)]
    #[case::hyphen("ho-oh", "ho-oh", false)]
    #[case::mixed_case("MewTwo", "MewTwo", false)]
    #[case::empty("", "", false)]
    #[case::digits("porygon2", "porygon", true)]
    #[case::spaces(" mr mime ", "mrmime", true)]
    #[case::punctuation("farfetch'd", "farfetchd", true)]
    #[case::non_ascii("flabébé", "flabb", true)]
    #[case::only_invalid("123!", "", true)]
    fn test_sanitize(#[case] raw: &str, #[case] cleaned: &str, #[case] had_invalid: bool) {
        let result = sanitize(raw);
        assert_eq!(result.cleaned, cleaned);
        assert_eq!(result.had_invalid_chars, had_invalid);
    }

    #[test]
    fn test_is_blank() {
        assert!(sanitize("").is_blank());
        assert!(sanitize("42").is_blank());
        assert!(!sanitize("a").is_blank());
    }
}
