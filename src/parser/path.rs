// ABOUTME: Context path tokenizer supporting dotted and bracket-quoted segments
// ABOUTME: Bracket segments may contain dots, spaces, and other special characters

/// A parsed reference into the evaluation context.
///
/// Paths are dot-separated (`user.email`), and individual segments may be
/// bracket-quoted to carry characters that would otherwise split the path
/// (`[c355ec2b].[total profit]`). An empty segment list is the current-value
/// binding (`.`) established by block helpers such as `forIn`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextPath {
    segments: Vec<String>,
}

impl ContextPath {
    /// Tokenize a raw path expression.
    ///
    /// This is a dedicated tokenizer rather than a split on `.` because
    /// bracket-quoted segments may themselves contain dots and spaces.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == "." {
            return Self { segments: Vec::new() };
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = raw.chars();
        while let Some(ch) = chars.next() {
            match ch {
                '[' => {
                    for inner in chars.by_ref() {
                        if inner == ']' {
                            break;
                        }
                        current.push(inner);
                    }
                }
                '.' => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
                _ => current.push(ch),
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self { segments }
    }

    /// True when this path refers to the current block binding (`.`).
    pub fn is_current(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}
