use crate::csp::{
    constraint::{Constraint, ConstraintDescriptor},
    engine::Assignment,
};

/// The N-ary non-attack constraint of the N-queens problem.
///
/// Variables are board columns and values are rows; the constraint holds when
/// no two placed queens share a row or a diagonal. Columns are distinct by
/// construction, so same-column attacks cannot occur.
#[derive(Debug, Clone)]
pub struct QueensConstraint {
    pub columns: Vec<i64>,
}

impl QueensConstraint {
    pub fn new(columns: Vec<i64>) -> Self {
        Self { columns }
    }
}

impl Constraint<i64, i64> for QueensConstraint {
    fn variables(&self) -> &[i64] {
        &self.columns
    }

    fn descriptor(&self) -> ConstraintDescriptor {
        ConstraintDescriptor {
            name: "QueensConstraint".to_string(),
            description: format!("no attacks among queens in columns {:?}", self.columns),
        }
    }

    fn satisfied(&self, assignment: &Assignment<i64, i64>) -> bool {
        for (index, &first_column) in self.columns.iter().enumerate() {
            let Some(&first_row) = assignment.get(&first_column) else {
                continue;
            };
            for &second_column in &self.columns[index + 1..] {
                let Some(&second_row) = assignment.get(&second_column) else {
                    continue;
                };
                if first_row == second_row {
                    return false;
                }
                if (first_row - second_row).abs() == (first_column - second_column).abs() {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_shared_row() {
        let constraint = QueensConstraint::new(vec![1, 2, 3]);
        assert!(!constraint.satisfied(&im::hashmap! { 1 => 4, 3 => 4 }));
    }

    #[test]
    fn detects_diagonal_attack() {
        let constraint = QueensConstraint::new(vec![1, 2, 3]);
        assert!(!constraint.satisfied(&im::hashmap! { 1 => 1, 3 => 3 }));
        assert!(!constraint.satisfied(&im::hashmap! { 2 => 5, 3 => 4 }));
    }

    #[test]
    fn accepts_non_attacking_placement() {
        let constraint = QueensConstraint::new(vec![1, 2, 3, 4]);
        // A known 4-queens solution.
        let assignment = im::hashmap! { 1 => 2, 2 => 4, 3 => 1, 4 => 3 };
        assert!(constraint.satisfied(&assignment));
    }

    #[test]
    fn partial_placements_are_checked_pairwise() {
        let constraint = QueensConstraint::new(vec![1, 2, 3, 4]);
        assert!(constraint.satisfied(&im::hashmap! { 1 => 2 }));
        assert!(constraint.satisfied(&im::hashmap! { 1 => 2, 3 => 1 }));
    }
}
