//! Building a [`Graph`] from a labeled weight matrix.
//!
//! Cell `(row, column)` holds the weight of the edge `column -> row`. Empty
//! cells, zero, negative and infinite values mean there is no edge. The
//! outgoing edges of a node keep the row order of the matrix.

use crate::{AdjacencyList, Error, Graph, NodeMap, Result, Weight};

fn parse_cell(cell: &str, row: &str, column: &str) -> Result<Option<Weight>> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(None);
    }
    let w: Weight = cell.parse().map_err(|_| {
        Error::malformed(format!("non-numeric cell '{cell}' at ({row}, {column})"))
    })?;
    if w.is_nan() {
        return Err(Error::malformed(format!("NaN cell at ({row}, {column})")));
    }
    Ok((w.is_finite() && w > 0.0).then_some(w))
}

/// Build a graph from a square matrix. `rows[r][c]` is the weight of the edge
/// from `labels[c]` to `labels[r]`.
pub fn from_matrix<S: AsRef<str>>(labels: Vec<String>, rows: &[Vec<S>]) -> Result<Graph<String>> {
    let n = labels.len();
    if rows.len() != n {
        return Err(Error::malformed(format!(
            "{} rows for {} labels, matrix is not square",
            rows.len(),
            n
        )));
    }
    if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
        return Err(Error::malformed(format!(
            "row '{}' has {} cells, expected {}",
            labels[r],
            row.len(),
            n
        )));
    }

    let mut g = AdjacencyList::with_capacity(n);
    let nodes: Vec<_> = labels.iter().map(|_| g.add_node()).collect();
    for (c, &from) in nodes.iter().enumerate() {
        for (r, &to) in nodes.iter().enumerate() {
            if let Some(w) = parse_cell(rows[r][c].as_ref(), &labels[r], &labels[c])? {
                g.add_edge(from, to, w);
            }
        }
    }

    Graph::new(&g, labels)
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
}

fn fields(line: &str) -> Vec<&str> {
    line.split(',').map(str::trim).collect()
}

/// Parse a comma separated matrix. The first line is a header with an
/// ignored corner cell followed by the node labels; every other line starts
/// with the label of its row, which must follow the header order.
///
/// ```text
/// ,A,B,C
/// A,0,1,0
/// B,1,0,4
/// C,0,4,0
/// ```
pub fn from_csv(text: &str) -> Result<Graph<String>> {
    let mut lines = lines(text);
    let header = lines
        .next()
        .ok_or_else(|| Error::malformed("empty matrix"))?;
    let labels: Vec<String> = fields(header)
        .into_iter()
        .skip(1)
        .map(str::to_string)
        .collect();

    let mut rows: Vec<Vec<&str>> = Vec::with_capacity(labels.len());
    for line in lines {
        let mut cells = fields(line);
        let row_label = cells.remove(0);
        match labels.get(rows.len()) {
            Some(expected) if expected == row_label => {}
            Some(expected) => {
                return Err(Error::malformed(format!(
                    "row label '{row_label}' does not match column label '{expected}'"
                )))
            }
            None => {
                return Err(Error::malformed(format!(
                    "extra row '{row_label}', matrix is not square"
                )))
            }
        }
        rows.push(cells);
    }

    let g = from_matrix(labels, &rows)?;
    tracing::debug!(nodes = g.len(), "matrix loaded");
    Ok(g)
}

/// Parse `label,estimate` lines into a heuristic table for `g`.
pub fn heuristic_from_csv(g: &Graph<String>, text: &str) -> Result<NodeMap<Weight>> {
    let mut estimates = Vec::new();
    for line in lines(text) {
        let parts = fields(line);
        let [label, value] = parts[..] else {
            return Err(Error::malformed(format!(
                "expected 'label,estimate', got '{line}'"
            )));
        };
        let h: Weight = value.parse().map_err(|_| {
            Error::malformed(format!("non-numeric estimate '{value}' for '{label}'"))
        })?;
        estimates.push((label.to_string(), h));
    }
    g.heuristic_table(estimates)
}
