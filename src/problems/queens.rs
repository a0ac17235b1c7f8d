//! Placing N queens on an N by N board so that none attacks another.

use std::sync::Arc;

use im::HashMap;

use crate::{
    csp::{constraints::queens::QueensConstraint, engine::Csp},
    error::Result,
};

/// Builds the N-queens problem: one variable per column, rows 1..=n as every
/// column's domain, and a single non-attack constraint over all columns.
pub fn n_queens_csp(n: i64) -> Result<Csp<i64, i64>> {
    let columns: Vec<i64> = (1..=n).collect();
    let rows: Vec<i64> = (1..=n).collect();
    let mut domains = HashMap::new();
    for &column in &columns {
        domains.insert(column, rows.clone());
    }
    let mut csp = Csp::new(columns.clone(), domains)?;
    csp.add_constraint(Arc::new(QueensConstraint::new(columns)))?;
    Ok(csp)
}
