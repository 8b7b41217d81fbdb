/// A `like` pattern broken into its anchoring and literal text.
///
/// A `%` at the start leaves the match open on the left, a `%` at the end
/// leaves it open on the right. Every other character, including an inner
/// `%` or `_`, is literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    pub text: String,
    pub open_start: bool,
    pub open_end: bool,
}

impl LikePattern {
    pub fn parse(pattern: &str) -> LikePattern {
        let open_start = pattern.starts_with('%');
        let rest = if open_start { &pattern[1..] } else { pattern };
        let open_end = rest.ends_with('%');
        let text = if open_end {
            &rest[..rest.len() - 1]
        } else {
            rest
        };

        LikePattern {
            text: text.to_string(),
            open_start,
            open_end,
        }
    }

    /// Returns `true` if `value` matches the pattern.
    pub fn matches(&self, value: &str) -> bool {
        match (self.open_start, self.open_end) {
            (true, true) => value.contains(&self.text),
            (true, false) => value.ends_with(&self.text),
            (false, true) => value.starts_with(&self.text),
            (false, false) => value == self.text,
        }
    }
}
