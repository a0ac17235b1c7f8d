use crate::csp::engine::Assignment;

/// Human-readable identification of a constraint, for logs and error reports.
#[derive(Debug, Clone)]
pub struct ConstraintDescriptor {
    pub name: String,
    pub description: String,
}

/// A rule restricting the values a set of variables may jointly take.
///
/// The set of constraint kinds is open-ended and chosen per problem; the
/// engine only needs the variables a constraint touches and a satisfaction
/// predicate over a partial assignment. Variables absent from the assignment
/// are unconstrained so far, so an implementation must report `true` until
/// enough of its variables are bound to witness a violation.
pub trait Constraint<V, D>: std::fmt::Debug {
    fn variables(&self) -> &[V];

    fn descriptor(&self) -> ConstraintDescriptor;

    fn satisfied(&self, assignment: &Assignment<V, D>) -> bool;
}
