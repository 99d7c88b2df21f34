/// Kind of a single physical line in an xvg file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `#` free-form comment.
    Comment,
    /// `@` plot directive.
    Directive,
    /// `&` end of a series block.
    SeriesBoundary,
    /// Empty or whitespace-only.
    Blank,
    /// Anything else: whitespace-separated numbers.
    Data,
}

impl LineKind {
    /// Classify a raw line by its first character.
    pub fn classify(line: &str) -> Self {
        match line.chars().next() {
            Some('#') => LineKind::Comment,
            Some('@') => LineKind::Directive,
            Some('&') => LineKind::SeriesBoundary,
            _ if line.trim().is_empty() => LineKind::Blank,
            _ => LineKind::Data,
        }
    }
}
