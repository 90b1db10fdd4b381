/// A rule line split into its polarity marker and match pattern.
///
/// Parsing trims surrounding whitespace, then treats a single leading `!` as
/// the blacklist marker. Only one marker is consumed; a second `!` stays part
/// of the pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleLine<'a> {
    /// True when the line starts a blacklist entry.
    pub negated: bool,
    /// The glob pattern, marker stripped.
    pub body: &'a str,
}

impl<'a> RuleLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let trimmed = line.trim();
        match trimmed.strip_prefix('!') {
            Some(body) => RuleLine {
                negated: true,
                body,
            },
            None => RuleLine {
                negated: false,
                body: trimmed,
            },
        }
    }
}
