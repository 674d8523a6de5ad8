//! Built-in demo graphs.
//!
//! Each builder returns the graph together with its labelled vertices, in the
//! order they should be listed.

use fp_graph::{Graph, GraphBuilder, GraphResult, Tagged};

pub type Labelled = Tagged<String>;

/// `rows x columns` lattice. Horizontal and vertical neighbours are joined
/// with weight `1.5 * (row + column)` of the upper/left endpoint, so the
/// desired spacing grows toward the far corner.
pub fn grid(rows: usize, columns: usize) -> GraphResult<(Graph, Vec<Labelled>)> {
    let cells: Vec<Labelled> = (0..rows)
        .flat_map(|row| (0..columns).map(move |column| Tagged::new(format!("{row},{column}"))))
        .collect();
    let at = |row: usize, column: usize| &cells[row * columns + column];

    let mut builder = GraphBuilder::new();
    for cell in &cells {
        builder.add_vertex(cell);
    }
    for row in 0..rows {
        for column in 0..columns.saturating_sub(1) {
            builder.connect(at(row, column), at(row, column + 1), spacing(row, column));
        }
    }
    for row in 0..rows.saturating_sub(1) {
        for column in 0..columns {
            builder.connect(at(row, column), at(row + 1, column), spacing(row, column));
        }
    }

    Ok((builder.build()?, cells))
}

fn spacing(row: usize, column: usize) -> f64 {
    1.5 * (row + column) as f64
}

/// Five-pointed star: a pentagon of short edges with a long-edged star
/// inscribed.
///
/// ```text
///     a
///   b   c
///    d e
/// ```
pub fn pentagram() -> GraphResult<(Graph, Vec<Labelled>)> {
    let [a, b, c, d, e] = ["a", "b", "c", "d", "e"].map(|label| Tagged::new(label.to_string()));

    let mut builder = GraphBuilder::new();
    // star
    builder.connect(&b, &c, 2.0);
    builder.connect(&c, &d, 2.0);
    builder.connect(&d, &a, 2.0);
    builder.connect(&a, &e, 2.0);
    builder.connect(&e, &b, 2.0);
    // pentagon
    builder.connect(&a, &c, 1.0);
    builder.connect(&c, &e, 1.0);
    builder.connect(&e, &d, 1.0);
    builder.connect(&d, &b, 1.0);
    builder.connect(&b, &a, 1.0);

    Ok((builder.build()?, vec![a, b, c, d, e]))
}

/// Ring of `size` vertices joined by edges of equal `weight`.
pub fn cycle(size: usize, weight: f64) -> GraphResult<(Graph, Vec<Labelled>)> {
    let nodes: Vec<Labelled> = (0..size).map(|i| Tagged::new(format!("n{i}"))).collect();

    let mut builder = GraphBuilder::new();
    for node in &nodes {
        builder.add_vertex(node);
    }
    for (i, node) in nodes.iter().enumerate() {
        let next = &nodes[(i + 1) % size];
        builder.connect(node, next, weight);
    }

    Ok((builder.build()?, nodes))
}
