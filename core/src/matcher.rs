use std::sync::LazyLock;

use regex::Regex;

/// One recognized stack line: an optional symbol name plus the generated
/// position embedded in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub name: Option<String>,
    pub line: u32,
    pub column: u32,
}

struct LineRule {
    regex: Regex,
    /// Capture group holding the symbol name, if the format carries one.
    name_group: Option<usize>,
    line_group: usize,
    column_group: usize,
}

/// Frame formats tried in order; the first hit wins.
static LINE_RULES: LazyLock<[LineRule; 3]> = LazyLock::new(|| {
    [
        // someFun@13:12 (mobile engine traces)
        LineRule {
            regex: Regex::new(r"^(.*)@(\d+):(\d+)$").unwrap(),
            name_group: Some(1),
            line_group: 2,
            column_group: 3,
        },
        // at filename:13:12 (anonymous frame; group 1 is a path, not a symbol)
        LineRule {
            regex: Regex::new(r"^at (.*):(\d+):(\d+)$").unwrap(),
            name_group: None,
            line_group: 2,
            column_group: 3,
        },
        // at someFun (filename:13:12)
        LineRule {
            regex: Regex::new(r"^at (.*) \((.*):(\d+):(\d+)\)$").unwrap(),
            name_group: Some(1),
            line_group: 3,
            column_group: 4,
        },
    ]
});

/// Classifies one trace line, extracting the symbol name and generated
/// line/column. Returns `None` for anything that is not a frame, including
/// numbers too large to be real positions.
pub fn match_stack_line(line: &str) -> Option<MatchResult> {
    for rule in LINE_RULES.iter() {
        if let Some(caps) = rule.regex.captures(line) {
            let line_number = caps[rule.line_group].parse().ok()?;
            let column = caps[rule.column_group].parse().ok()?;
            return Some(MatchResult {
                name: rule.name_group.map(|group| caps[group].to_owned()),
                line: line_number,
                column,
            });
        }
    }
    None
}
