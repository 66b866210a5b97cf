//! Reader for whitespace-separated weight matrices.
//!
//! Each non-empty line holds one matrix row. Anything after `#` is a
//! comment, and lines that are blank once comments are removed are skipped.
//! Shape and symmetry are checked by [`Graph::from_rows`].

use std::path::Path;

use arterial_core::{Graph, Weight};

use super::CliError;

/// Parses `text` into a [`Graph`]. `path` is only used in error reports.
///
/// # Errors
/// Returns [`CliError::Parse`] for a token that is not a non-negative
/// integer weight, [`CliError::EmptyMatrix`] when no rows remain, and
/// [`CliError::Graph`] when the rows do not form a valid graph.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use arterial_cli::cli::parse_matrix;
///
/// let text = "# three intersections\n0 4 0\n4 0 7\n\n0 7 0\n";
/// let graph = parse_matrix(Path::new("roads.txt"), text)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.weight(1, 2), Some(7));
/// # Ok::<(), arterial_cli::cli::CliError>(())
/// ```
pub fn parse_matrix(path: &Path, text: &str) -> Result<Graph, CliError> {
    let mut rows: Vec<Vec<Weight>> = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let content = raw.split_once('#').map_or(raw, |(before, _)| before);
        let row = tokens(content)
            .into_iter()
            .map(|(offset, token)| {
                token.parse::<Weight>().map_err(|source| CliError::Parse {
                    path: path.to_path_buf(),
                    line: index + 1,
                    column: offset + 1,
                    token: token.to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if !row.is_empty() {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(CliError::EmptyMatrix {
            path: path.to_path_buf(),
        });
    }
    Ok(Graph::from_rows(&rows)?)
}

/// Splits `line` on whitespace, keeping each token's byte offset.
fn tokens(line: &str) -> Vec<(usize, &str)> {
    let mut found = Vec::new();
    let mut start = None;
    for (index, ch) in line.char_indices() {
        match (ch.is_whitespace(), start) {
            (false, None) => start = Some(index),
            (true, Some(begin)) => {
                found.extend(line.get(begin..index).map(|token| (begin, token)));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(begin) = start {
        found.extend(line.get(begin..).map(|token| (begin, token)));
    }
    found
}
