use crate::processor::Entry;
use crate::resolve::ResolvedFrame;

const DEPENDENCY_DIR: &str = "node_modules";
const UNKNOWN_LOCATION: &str = "<unknown>";

/// Renders entries to the final trace text, one line per entry, joined by
/// `\n` with no trailing newline. With `shorten` the path prefix shared by
/// all resolved sources is replaced by `./`.
pub fn format_stack(entries: &[Entry], shorten: bool) -> String {
    let prefix = if shorten {
        let sources: Vec<&str> = entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Frame(frame) => frame.source.as_deref(),
                Entry::Passthrough(_) => None,
            })
            .collect();
        shared_prefix(&sources)
    } else {
        String::new()
    };

    entries
        .iter()
        .map(|entry| match entry {
            Entry::Passthrough(text) => text.clone(),
            Entry::Frame(frame) => render_frame(frame, &prefix),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Longest prefix shared by every source that stays clear of dependency
/// paths. A candidate containing `node_modules` keeps losing trailing
/// characters until the substring is gone, even below the true common
/// prefix, so shortening anchors above the dependency tree.
fn shared_prefix(sources: &[&str]) -> String {
    let Some((&first, rest)) = sources.split_first() else {
        return String::new();
    };
    if rest.is_empty() {
        return String::new();
    }
    let mut prefix = first.to_owned();
    for source in sources {
        while !source.starts_with(&prefix) || prefix.contains(DEPENDENCY_DIR) {
            prefix.pop();
        }
    }
    // a prefix covering the whole first source means shortening would be a
    // no-op rename of a single distinct path
    if prefix == first {
        return String::new();
    }
    prefix
}

fn render_frame(frame: &ResolvedFrame, prefix: &str) -> String {
    let (Some(source), Some(line), Some(column)) = (&frame.source, frame.line, frame.column)
    else {
        // unmapped generated position: nothing useful to point at
        return match &frame.name {
            Some(name) => format!("  at {name} ({UNKNOWN_LOCATION})"),
            None => format!("  at {UNKNOWN_LOCATION}"),
        };
    };
    let displayed = if !prefix.is_empty() && source.starts_with(prefix) {
        format!("./{}", &source[prefix.len()..])
    } else {
        source.clone()
    };
    match &frame.name {
        Some(name) => format!("  at {name} ({displayed}:{line}:{column})"),
        None => format!("  at {displayed}:{line}:{column}"),
    }
}
