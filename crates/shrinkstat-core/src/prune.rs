//! Line pruning inside a marked area of a generated test case.
//!
//! A test case carries one region per area:
//!
//! ```text
//! /* BEGIN jsfuzzer */
//! <preamble>
//! /* LINE */ try { lineNo++; a.b(); } catch(e) { ... }
//! /* LINE */ try { lineNo++; c.d(); } catch(e) { ... }
//! //endjs
//! <epilogue>
//! /* END jsfuzzer */
//! ```
//!
//! Every reduction pass drops the code lines that raised errors and counts
//! what it removed; those counts end up in the `errorLine` statistics.

use crate::error::StatsError;
use crate::Result;

const LINE_MARK: &str = "/* LINE */";
const END_JS: &str = "//endjs";
const WRAP_START: &str = "lineNo++;";
const WRAP_END: &str = "} catch(e)";

fn begin_marker(area: &str) -> String {
    format!("/* BEGIN {area} */")
}

fn end_marker(area: &str) -> String {
    format!("/* END {area} */")
}

/// Borrowed view of one marked area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSection<'a> {
    /// Text before the BEGIN marker.
    pub before: &'a str,
    /// Text between the markers.
    pub body: &'a str,
    /// Text after the END marker.
    pub after: &'a str,
}

impl<'a> AreaSection<'a> {
    /// Locate `area` in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::MissingMarker`] if either marker is absent.
    pub fn locate(text: &'a str, area: &str) -> Result<Self> {
        let begin = begin_marker(area);
        let end = end_marker(area);
        let (before, rest) = text
            .split_once(begin.as_str())
            .ok_or(StatsError::MissingMarker { marker: begin })?;
        let (body, after) = rest
            .split_once(end.as_str())
            .ok_or(StatsError::MissingMarker { marker: end })?;
        Ok(Self {
            before,
            body,
            after,
        })
    }

    /// Everything before the first code line.
    pub fn preamble(&self) -> &'a str {
        self.body
            .split_once(LINE_MARK)
            .map_or(self.body, |(head, _)| head)
    }

    /// Everything after the last `//endjs`.
    pub fn epilogue(&self) -> &'a str {
        self.body
            .rsplit_once(END_JS)
            .map_or(self.body, |(_, tail)| tail)
    }

    /// Code lines in order.
    pub fn code_lines(self) -> impl Iterator<Item = &'a str> {
        self.body.split('\n').filter(|line| line.starts_with(LINE_MARK))
    }
}

/// Extract the statement from a wrapped code line.
fn unwrap_line(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(WRAP_START)?;
    let rest = rest.split_once(WRAP_START).map_or(rest, |(head, _)| head);
    Some(rest.split_once(WRAP_END).map_or(rest, |(head, _)| head))
}

/// Remove the code lines at `drop` from `area` and reassemble the text.
///
/// With `finalize`, every kept line is reduced to the bare statement found
/// between `lineNo++;` and `} catch(e)`. Out-of-range indices are ignored.
///
/// # Errors
///
/// Returns [`StatsError::MissingMarker`] if the area is not marked and
/// [`StatsError::MalformedLine`] if a line cannot be unwrapped.
pub fn prune_area(text: &str, area: &str, drop: &[usize], finalize: bool) -> Result<String> {
    let section = AreaSection::locate(text, area)?;

    let mut kept = Vec::new();
    for (index, line) in section.code_lines().enumerate() {
        if drop.contains(&index) {
            continue;
        }
        if finalize {
            let statement = unwrap_line(line).ok_or_else(|| StatsError::MalformedLine {
                area: area.to_string(),
                index,
            })?;
            kept.push(statement);
        } else {
            kept.push(line);
        }
    }
    let kept = kept.join("\n");

    let begin = begin_marker(area);
    let end = end_marker(area);
    Ok([
        section.before,
        begin.as_str(),
        section.preamble(),
        kept.as_str(),
        END_JS,
        section.epilogue(),
        end.as_str(),
        section.after,
    ]
    .join("\n"))
}

/// Number of code lines in `area`.
///
/// # Errors
///
/// Returns [`StatsError::MissingMarker`] if the area is not marked.
pub fn count_lines(text: &str, area: &str) -> Result<usize> {
    Ok(AreaSection::locate(text, area)?.code_lines().count())
}
