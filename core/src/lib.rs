pub mod errors;
pub mod formatter;
pub mod matcher;
pub mod processor;
pub mod resolve;

pub use errors::StackliftError;
pub use formatter::format_stack;
pub use matcher::{MatchResult, match_stack_line};
pub use processor::{EXCEPTION_MARKER, Entry, process_stack, select_crash_block};
pub use resolve::{PositionResolver, ResolvedFrame};

/// Convenience function to beautify a crash trace end-to-end: load the map,
/// pick the exception block, resolve every frame and render the result.
pub fn beautify(
    map_json: &str,
    trace_text: &str,
    shorten: bool,
) -> Result<String, StackliftError> {
    let resolver = PositionResolver::from_json(map_json)?;
    let block = select_crash_block(trace_text, EXCEPTION_MARKER)?;
    let entries = process_stack(block.lines(), &resolver)?;
    Ok(format_stack(&entries, shorten))
}

#[cfg(test)]
mod tests {
    use super::*;

    // generated (11,5) -> src/foo.js:2:1 "foo", (19,3) -> src/bar.js:7:2 "bar"
    fn demo_map() -> String {
        serde_json::json!({
            "version": 3,
            "sources": ["src/foo.js", "src/bar.js"],
            "names": ["foo", "bar"],
            "mappings": ";;;;;;;;;;;KAECA;;;;;;;;GCKCC",
        })
        .to_string()
    }

    const TRACE: &str =
        "JavascriptException: boom\nfoo@12:5\nat bar (app.js:20:3)\n\n(other block)";

    #[test]
    fn beautifies_a_crash_log_end_to_end() {
        let out = beautify(&demo_map(), TRACE, false).unwrap();
        assert_eq!(
            out,
            "JavascriptException: boom\n  at foo (src/foo.js:3:1)\n  at bar (src/bar.js:8:2)"
        );
    }

    #[test]
    fn shortening_rewrites_the_shared_source_prefix() {
        let out = beautify(&demo_map(), TRACE, true).unwrap();
        assert_eq!(
            out,
            "JavascriptException: boom\n  at foo (./foo.js:3:1)\n  at bar (./bar.js:8:2)"
        );
    }

    #[test]
    fn logs_without_the_exception_marker_fail() {
        let err = beautify(&demo_map(), "nothing relevant\n\nhere either", true).unwrap_err();
        assert!(matches!(err, StackliftError::BlockSelection(_)));
    }

    #[test]
    fn a_bad_map_fails_before_any_processing() {
        let err = beautify("{]", TRACE, true).unwrap_err();
        assert!(matches!(err, StackliftError::MapLoad(_)));
    }

    #[test]
    fn a_garbled_frame_aborts_the_whole_run() {
        let trace = "JavascriptException: boom\nfoo@12:5\n???frame???";
        let err = beautify(&demo_map(), trace, true).unwrap_err();
        match err {
            StackliftError::StackParse(parse) => {
                assert_eq!(parse.line_number, 3);
                assert_eq!(parse.text, "???frame???");
            }
            other => panic!("expected a parse error, got {other}"),
        }
    }
}
