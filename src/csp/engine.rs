use std::hash::Hash;
use std::sync::Arc;

use im::HashMap;
use serde::Serialize;
use tracing::debug;

use crate::{
    csp::constraint::Constraint,
    error::{Result, SolverError},
};

/// A partial or complete assignment of values to variables.
///
/// Backed by a persistent map: extending an assignment at a decision point
/// produces a structurally shared copy, so backtracking never needs to undo
/// anything.
pub type Assignment<V, D> = HashMap<V, D>;

/// Counters gathered during a backtracking run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SolveStats {
    /// Tentative variable-to-value extensions tried.
    pub assignments_tried: u64,
    /// Dead ends reached, i.e. calls that exhausted a variable's domain.
    pub backtracks: u64,
}

/// A constraint satisfaction problem: variables, their finite candidate
/// domains, and the constraints restricting them.
///
/// Variable order and domain order are both significant: the backtracking
/// search branches on the first unassigned variable in declaration order and
/// tries candidate values in domain order, so a given problem always yields
/// the same first solution.
#[derive(Debug)]
pub struct Csp<V, D>
where
    V: Clone + Eq + Hash + std::fmt::Debug,
    D: Clone + std::fmt::Debug,
{
    variables: Vec<V>,
    domains: HashMap<V, Vec<D>>,
    constraints: HashMap<V, Vec<Arc<dyn Constraint<V, D>>>>,
}

impl<V, D> Csp<V, D>
where
    V: Clone + Eq + Hash + std::fmt::Debug,
    D: Clone + std::fmt::Debug,
{
    /// Creates a problem from an ordered variable list and a domain per
    /// variable.
    ///
    /// Fails with [`SolverError::MissingDomain`] if any declared variable has
    /// no domain entry. An *empty* domain is accepted; it simply makes the
    /// problem unsolvable.
    pub fn new(variables: Vec<V>, domains: HashMap<V, Vec<D>>) -> Result<Self> {
        for variable in &variables {
            if !domains.contains_key(variable) {
                return Err(SolverError::MissingDomain {
                    variable: format!("{:?}", variable),
                }
                .into());
            }
        }
        Ok(Self {
            variables,
            domains,
            constraints: HashMap::new(),
        })
    }

    /// Registers a constraint with every variable it references.
    ///
    /// Fails with [`SolverError::UnknownVariable`] if the constraint touches
    /// a variable the problem never declared; nothing is registered in that
    /// case. Per variable, constraints are checked in registration order.
    pub fn add_constraint(&mut self, constraint: Arc<dyn Constraint<V, D>>) -> Result<()> {
        for variable in constraint.variables() {
            if !self.variables.contains(variable) {
                return Err(SolverError::UnknownVariable {
                    constraint: constraint.descriptor().name,
                    variable: format!("{:?}", variable),
                }
                .into());
            }
        }
        for variable in constraint.variables() {
            let mut attached = self
                .constraints
                .get(variable)
                .cloned()
                .unwrap_or_default();
            attached.push(constraint.clone());
            self.constraints.insert(variable.clone(), attached);
        }
        Ok(())
    }

    /// The declared variables, in declaration order.
    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    /// The declared domain of `variable`, if it exists.
    pub fn domain(&self, variable: &V) -> Option<&[D]> {
        self.domains.get(variable).map(|d| d.as_slice())
    }

    /// Checks every constraint attached to `variable` against the given
    /// partial assignment.
    pub fn consistent(&self, variable: &V, assignment: &Assignment<V, D>) -> bool {
        match self.constraints.get(variable) {
            Some(attached) => attached.iter().all(|c| c.satisfied(assignment)),
            None => true,
        }
    }

    /// Runs a backtracking search and returns the first complete consistent
    /// assignment, or `None` if none exists.
    pub fn solve(&self) -> Option<Assignment<V, D>> {
        self.solve_with_stats().0
    }

    /// [`solve`](Self::solve) plus the counters gathered along the way.
    pub fn solve_with_stats(&self) -> (Option<Assignment<V, D>>, SolveStats) {
        let mut stats = SolveStats::default();
        // Every top-level run starts from a genuinely empty assignment; no
        // state is retained between calls.
        let result = self.backtrack(Assignment::new(), &mut stats);
        debug!(
            tried = stats.assignments_tried,
            backtracks = stats.backtracks,
            solved = result.is_some(),
            "backtracking search finished"
        );
        (result, stats)
    }

    fn backtrack(
        &self,
        assignment: Assignment<V, D>,
        stats: &mut SolveStats,
    ) -> Option<Assignment<V, D>> {
        // Branch on the first unassigned variable in declaration order.
        let Some(variable) = self
            .variables
            .iter()
            .find(|v| !assignment.contains_key(*v))
        else {
            // All variables assigned: consistency held at every extension, so
            // this is a complete solution.
            return Some(assignment);
        };

        let domain = self.domains.get(variable).unwrap();
        for value in domain {
            let candidate = assignment.update(variable.clone(), value.clone());
            stats.assignments_tried += 1;
            if self.consistent(variable, &candidate) {
                if let Some(solution) = self.backtrack(candidate, stats) {
                    return Some(solution);
                }
            }
        }

        stats.backtracks += 1;
        debug!(variable = ?variable, "domain exhausted, backtracking");
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::csp::constraints::not_equal::NotEqualConstraint;

    fn two_variable_problem() -> Csp<&'static str, i64> {
        let domains = im::hashmap! {
            "a" => vec![1, 2],
            "b" => vec![1],
        };
        Csp::new(vec!["a", "b"], domains).unwrap()
    }

    #[test]
    fn construction_rejects_variable_without_domain() {
        let domains = im::hashmap! { "a" => vec![1] };
        let result = Csp::new(vec!["a", "b"], domains);
        assert!(result.is_err());
    }

    #[test]
    fn add_constraint_rejects_unknown_variable() {
        let mut csp = two_variable_problem();
        let result = csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "zz")));
        assert!(result.is_err());
        // Nothing was registered for the known variable either.
        assert!(csp.consistent(&"a", &im::hashmap! { "a" => 1, "zz" => 1 }));
    }

    #[test]
    fn solve_deduces_forced_value() {
        let mut csp = two_variable_problem();
        csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "b")))
            .unwrap();
        let solution = csp.solve().unwrap();
        assert_eq!(solution.get(&"a"), Some(&2));
        assert_eq!(solution.get(&"b"), Some(&1));
    }

    #[test]
    fn over_constrained_problem_has_no_solution() {
        let domains = im::hashmap! {
            "a" => vec![1],
            "b" => vec![1],
        };
        let mut csp = Csp::new(vec!["a", "b"], domains).unwrap();
        csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "b")))
            .unwrap();
        assert!(csp.solve().is_none());
    }

    #[test]
    fn empty_domain_makes_problem_unsolvable() {
        let domains = im::hashmap! { "a" => Vec::<i64>::new() };
        let csp = Csp::new(vec!["a"], domains).unwrap();
        assert!(csp.solve().is_none());
    }

    #[test]
    fn repeated_solves_start_fresh_and_agree() {
        let mut csp = two_variable_problem();
        csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "b")))
            .unwrap();
        let first = csp.solve().unwrap();
        let second = csp.solve().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn solution_values_come_from_declared_domains() {
        let mut csp = two_variable_problem();
        csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "b")))
            .unwrap();
        let solution = csp.solve().unwrap();
        for variable in csp.variables() {
            let value = solution.get(variable).unwrap();
            assert!(csp.domain(variable).unwrap().contains(value));
        }
    }

    #[test]
    fn stats_count_dead_ends() {
        let domains = im::hashmap! {
            "a" => vec![1],
            "b" => vec![1],
        };
        let mut csp = Csp::new(vec!["a", "b"], domains).unwrap();
        csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "b")))
            .unwrap();
        let (solution, stats) = csp.solve_with_stats();
        assert!(solution.is_none());
        assert!(stats.backtracks >= 1);
        assert!(stats.assignments_tried >= 2);
    }
}
