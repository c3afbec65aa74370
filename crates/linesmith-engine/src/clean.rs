//! Removal of dangling separators from the edges of a rendered line.
//!
//! Callers build lines optimistically (`"A: " + value + ", " + ...`) and
//! values that turn out absent leave punctuation behind. The cleaner strips it
//! from both ends until nothing more matches.

/// Separator tokens stripped from line edges, in the order they are tried.
pub const DELIMITERS: [&str; 10] = [", ", ",", ": ", ":", "; ", ";", " - ", "-", " | ", "|"];

/// Trims whitespace and leading/trailing [`DELIMITERS`] from `line`.
///
/// Each pass tries every token at the start and then at the end of the
/// re-trimmed text; passes repeat until one strips nothing. The result is a
/// fixpoint, so cleaning twice equals cleaning once.
pub fn clean_line(line: &str) -> String {
    let mut line = line.trim();

    loop {
        let mut changed = false;

        for delim in DELIMITERS {
            if let Some(rest) = line.trim().strip_prefix(delim) {
                line = rest;
                changed = true;
            }
            if let Some(rest) = line.trim().strip_suffix(delim) {
                line = rest;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    line.trim().to_string()
}
