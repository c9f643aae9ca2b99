use crate::errors::{BlockSelectionError, StackParseError};
use crate::matcher::match_stack_line;
use crate::resolve::{PositionResolver, ResolvedFrame};

/// Marker naming the crash section inside a multi-block log file.
pub const EXCEPTION_MARKER: &str = "JavascriptException";

/// One display entry: either a verbatim header line or a resolved frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Passthrough(String),
    Frame(ResolvedFrame),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Nothing consumed yet; an unrecognized line is the exception header.
    AwaitingHeaderOrFrame,
    /// Past the first line; only frames or the blank terminator may follow.
    InFrames,
    /// A blank line ended the trace; the rest of the input is ignored.
    Done,
}

/// Picks the first blank-line-separated block of `text` mentioning `marker`.
pub fn select_crash_block<'a>(text: &'a str, marker: &str) -> Result<&'a str, BlockSelectionError> {
    text.split("\n\n")
        .find(|block| block.contains(marker))
        .ok_or_else(|| BlockSelectionError {
            marker: marker.to_owned(),
        })
}

/// Walks the trace lines in order, resolving every recognized frame.
///
/// The first line may be an arbitrary exception message and is passed
/// through untouched; a blank line terminates the trace; any other
/// unrecognized line aborts the whole run.
pub fn process_stack<'a, I>(
    lines: I,
    resolver: &PositionResolver,
) -> Result<Vec<Entry>, StackParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut entries = Vec::new();
    let mut state = ParseState::AwaitingHeaderOrFrame;

    for (idx, line) in lines.into_iter().enumerate() {
        if state == ParseState::Done {
            break;
        }
        match match_stack_line(line) {
            Some(matched) => {
                entries.push(Entry::Frame(resolver.resolve(&matched)));
                state = ParseState::InFrames;
            }
            None if state == ParseState::AwaitingHeaderOrFrame => {
                entries.push(Entry::Passthrough(line.to_owned()));
                state = ParseState::InFrames;
            }
            None if line.is_empty() => {
                state = ParseState::Done;
            }
            None => {
                return Err(StackParseError {
                    line_number: idx + 1,
                    text: line.to_owned(),
                });
            }
        }
    }

    Ok(entries)
}
