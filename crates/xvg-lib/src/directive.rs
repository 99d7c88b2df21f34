//! Plot directive (`@` line) recognition.
//!
//! Patterns are tried in a fixed order and the first match wins, so a line
//! yields at most one [`Directive`].

use regex::Regex;
use std::sync::LazyLock;

static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^title\s*"(.*)""#).expect("valid title regex"));
static RE_XAXIS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^xaxis\s+label\s*"(.*)""#).expect("valid xaxis regex"));
static RE_YAXIS_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^yaxis\s+label\s*"(.*)""#).expect("valid yaxis regex"));
static RE_LEGEND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^s(\d+)\s+legend\s+"(.*)""#).expect("valid legend regex"));
static RE_TARGET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^target\s+[Gg]?(\d*)\.?[Ss](\d+)").expect("valid target regex")
});

/// A recognised plot directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Title(String),
    XAxisLabel(String),
    YAxisLabel(String),
    /// `s<N> legend "<text>"`: name of series `N`.
    Legend { series: i64, text: String },
    /// `target G<g>.S<s>`: opens series `s` in a multi-block file.
    Target { graph: Option<u32>, series: i64 },
}

impl Directive {
    /// Parse a raw directive line, with or without its leading `@`.
    ///
    /// Returns `None` for directives that carry nothing we use
    /// (`@TYPE xy`, `@ view ...`, `@ legend on`, ...).
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.strip_prefix('@').unwrap_or(line).trim();

        if let Some(caps) = RE_TITLE.captures(body) {
            return Some(Directive::Title(caps[1].to_string()));
        }
        if let Some(caps) = RE_XAXIS_LABEL.captures(body) {
            return Some(Directive::XAxisLabel(caps[1].to_string()));
        }
        if let Some(caps) = RE_YAXIS_LABEL.captures(body) {
            return Some(Directive::YAxisLabel(caps[1].to_string()));
        }
        if let Some(caps) = RE_LEGEND.captures(body) {
            let series = caps[1].parse().ok()?;
            return Some(Directive::Legend {
                series,
                text: caps[2].to_string(),
            });
        }
        if let Some(caps) = RE_TARGET.captures(body) {
            let graph = caps.get(1).and_then(|g| g.as_str().parse().ok());
            let series = caps[2].parse().ok()?;
            return Some(Directive::Target { graph, series });
        }
        None
    }
}
