use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters gathered while a search runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier and expanded.
    pub nodes_expanded: u64,
    /// States discovered and queued, including the initial state.
    pub nodes_discovered: u64,
    /// The largest number of nodes the frontier held at once.
    pub peak_frontier_len: usize,
}

/// One row of a search comparison: algorithm name, its stats, and the length
/// in states of the path it found (`None` when the search failed).
pub type ComparisonRow<'a> = (&'a str, &'a SearchStats, Option<usize>);

/// Renders a side-by-side comparison of several search runs over the same
/// problem, one row per algorithm.
pub fn render_comparison_table(rows: &[ComparisonRow<'_>]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Algorithm"),
        Cell::new("Expanded"),
        Cell::new("Discovered"),
        Cell::new("Peak Frontier"),
        Cell::new("Path Length"),
    ]));

    for (name, stats, path_len) in rows {
        let path_cell = match path_len {
            Some(len) => len.to_string(),
            None => "no solution".to_string(),
        };
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&stats.nodes_expanded.to_string()),
            Cell::new(&stats.nodes_discovered.to_string()),
            Cell::new(&stats.peak_frontier_len.to_string()),
            Cell::new(&path_cell),
        ]));
    }

    table.to_string()
}
