use std::sync::Arc;

/// A single node in the search tree built during traversal.
///
/// A node wraps a discovered state together with a back-reference to the node
/// it was discovered from. Nodes are immutable once created; children hold
/// their parent via `Arc`, so the tree is reclaimed by reference counting as
/// soon as the caller drops the node returned from a search.
///
/// `cost` is the cumulative path cost from the initial state and `heuristic`
/// is the estimated remaining cost to the goal. Both stay at `0.0` for the
/// uninformed searches; only A* populates them.
#[derive(Debug, Clone)]
pub struct SearchNode<T> {
    pub state: T,
    pub parent: Option<Arc<SearchNode<T>>>,
    pub cost: f64,
    pub heuristic: f64,
}

impl<T> SearchNode<T> {
    /// Creates the root of a search tree: no parent, zero cost and heuristic.
    pub fn root(state: T) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent: None,
            cost: 0.0,
            heuristic: 0.0,
        })
    }

    /// Creates a child node discovered from `parent`, with default costs.
    pub fn child(state: T, parent: Arc<Self>) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent: Some(parent),
            cost: 0.0,
            heuristic: 0.0,
        })
    }

    /// Creates a node carrying explicit cost and heuristic values, as used by
    /// the informed search.
    pub fn with_costs(
        state: T,
        parent: Option<Arc<Self>>,
        cost: f64,
        heuristic: f64,
    ) -> Arc<Self> {
        Arc::new(Self {
            state,
            parent,
            cost,
            heuristic,
        })
    }

    /// The node's ordering key: cumulative cost plus estimated remaining cost.
    pub fn priority(&self) -> f64 {
        self.cost + self.heuristic
    }
}

/// Reconstructs the state sequence from the initial state to `node`'s state by
/// walking parent references back to the root and reversing.
///
/// Pure and repeatable; a root-only node yields a single-element path.
pub fn node_to_path<T: Clone>(node: &SearchNode<T>) -> Vec<T> {
    let mut path = vec![node.state.clone()];
    let mut current = &node.parent;
    while let Some(parent) = current {
        path.push(parent.state.clone());
        current = &parent.parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn path_of_root_only_node_is_the_root_state() {
        let root = SearchNode::root("start");
        assert_eq!(node_to_path(&root), vec!["start"]);
    }

    #[test]
    fn path_runs_from_initial_to_terminal() {
        let a = SearchNode::root(1);
        let b = SearchNode::child(2, a.clone());
        let c = SearchNode::child(3, b.clone());
        assert_eq!(node_to_path(&c), vec![1, 2, 3]);
        // Reconstruction is pure: calling it again gives the same answer.
        assert_eq!(node_to_path(&c), vec![1, 2, 3]);
    }

    #[test]
    fn priority_sums_cost_and_heuristic() {
        let node = SearchNode::with_costs((), None, 3.0, 4.5);
        assert_eq!(node.priority(), 7.5);
    }
}
