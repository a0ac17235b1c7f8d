use std::hash::Hash;

use crate::csp::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::Assignment,
};

/// A pairwise inequality: the two variables must take different values.
///
/// The classic binary constraint of map-coloring problems. Satisfied until
/// both variables are bound.
#[derive(Debug, Clone)]
pub struct NotEqualConstraint<V> {
    pub vars: [V; 2],
}

impl<V> NotEqualConstraint<V> {
    pub fn new(a: V, b: V) -> Self {
        Self { vars: [a, b] }
    }
}

impl<V, D> Constraint<V, D> for NotEqualConstraint<V>
where
    V: Clone + Eq + Hash + std::fmt::Debug,
    D: Clone + Eq + std::fmt::Debug,
{
    fn variables(&self) -> &[V] {
        &self.vars
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "NotEqualConstraint".to_string(),
            description: format!("{:?} != {:?}", self.vars[0], self.vars[1]),
        }
    }

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool {
        match (
            assignment.get(&self.vars[0]),
            assignment.get(&self.vars[1]),
        ) {
            (Some(a), Some(b)) => a != b,
            // Either variable still unbound: nothing to violate yet.
            _ => true,
        }
    }
}
