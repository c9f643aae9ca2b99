use sourcemap::SourceMap;

use crate::errors::MapLoadError;
use crate::matcher::MatchResult;

/// An original position recovered from the source map. Every field is
/// `None` when the generated position has no mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFrame {
    pub source: Option<String>,
    pub line: Option<u32>,
    pub column: Option<u32>,
    pub name: Option<String>,
}

/// Read-only lookup over a source map parsed once at load time.
pub struct PositionResolver {
    map: SourceMap,
}

impl PositionResolver {
    pub fn from_json(content: &str) -> Result<Self, MapLoadError> {
        let map = SourceMap::from_slice(content.as_bytes())?;
        Ok(Self { map })
    }

    /// Maps a generated position back to its original source location.
    /// Trace lines are 1-based while the map is 0-based; columns are
    /// 0-based on both sides.
    pub fn resolve(&self, matched: &MatchResult) -> ResolvedFrame {
        let generated_line = matched.line.saturating_sub(1);
        let Some(token) = self.map.lookup_token(generated_line, matched.column) else {
            return ResolvedFrame::default();
        };
        // lookup_token is a nearest match across the whole map; only a hit
        // on the queried generated line counts as mapped.
        if token.get_dst_line() != generated_line {
            return ResolvedFrame::default();
        }
        ResolvedFrame {
            source: token.get_source().map(str::to_owned),
            line: Some(token.get_src_line() + 1),
            column: Some(token.get_src_col()),
            name: token.get_name().map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // tokens at generated (11,5) -> src/foo.js:2:1 "foo"
    //       and generated (19,3) -> src/bar.js:7:2 "bar" (0-based)
    fn demo_resolver() -> PositionResolver {
        let map = serde_json::json!({
            "version": 3,
            "sources": ["src/foo.js", "src/bar.js"],
            "names": ["foo", "bar"],
            "mappings": ";;;;;;;;;;;KAECA;;;;;;;;GCKCC",
        });
        PositionResolver::from_json(&map.to_string()).unwrap()
    }

    fn generated(line: u32, column: u32) -> MatchResult {
        MatchResult {
            name: None,
            line,
            column,
        }
    }

    #[test]
    fn resolves_exact_positions() {
        let resolver = demo_resolver();
        let frame = resolver.resolve(&generated(12, 5));
        assert_eq!(frame.source.as_deref(), Some("src/foo.js"));
        assert_eq!(frame.line, Some(3));
        assert_eq!(frame.column, Some(1));
        assert_eq!(frame.name.as_deref(), Some("foo"));

        let frame = resolver.resolve(&generated(20, 3));
        assert_eq!(frame.source.as_deref(), Some("src/bar.js"));
        assert_eq!(frame.line, Some(8));
        assert_eq!(frame.column, Some(2));
        assert_eq!(frame.name.as_deref(), Some("bar"));
    }

    #[test]
    fn resolves_nearest_token_on_the_same_line() {
        let resolver = demo_resolver();
        let frame = resolver.resolve(&generated(12, 40));
        assert_eq!(frame.source.as_deref(), Some("src/foo.js"));
        assert_eq!(frame.name.as_deref(), Some("foo"));
    }

    #[test]
    fn unmapped_position_is_all_none_not_an_error() {
        let resolver = demo_resolver();
        assert_eq!(resolver.resolve(&generated(1, 0)), ResolvedFrame::default());
    }

    #[test]
    fn token_from_an_earlier_line_does_not_count() {
        let resolver = demo_resolver();
        // line 14 holds no token; the nearest token lives on line 12
        assert_eq!(resolver.resolve(&generated(14, 9)), ResolvedFrame::default());
    }

    #[test]
    fn malformed_map_fails_at_load_time() {
        assert!(PositionResolver::from_json("not a source map").is_err());
        assert!(PositionResolver::from_json("{\"version\":true}").is_err());
    }
}
