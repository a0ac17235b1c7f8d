//! The three search algorithms over an arbitrary state space.
//!
//! A problem is described by an initial state, a goal predicate, and a
//! successor function; the algorithms differ only in the frontier discipline
//! and their bookkeeping of already-seen states. DFS and BFS share one
//! generic loop parameterized over [`Frontier`]; A* has its own loop because
//! its explored set maps states to best-known costs instead of mere
//! membership, allowing cheaper rediscoveries to re-enter the frontier.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::Arc;

use tracing::debug;

use crate::search::{
    frontier::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier},
    node::SearchNode,
    stats::SearchStats,
};

/// Depth-first search: explores most recently discovered states first.
///
/// Returns the goal node on success, `None` when the reachable component
/// contains no goal state. The returned node's parent chain encodes the path;
/// see [`node_to_path`](crate::search::node::node_to_path).
pub fn dfs<T, G, S, I>(initial: T, goal_test: G, successors: S) -> Option<Arc<SearchNode<T>>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    dfs_with_stats(initial, goal_test, successors).0
}

/// [`dfs`] plus the counters gathered along the way.
pub fn dfs_with_stats<T, G, S, I>(
    initial: T,
    goal_test: G,
    successors: S,
) -> (Option<Arc<SearchNode<T>>>, SearchStats)
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    uninformed_search(StackFrontier::new(), initial, goal_test, successors)
}

/// Breadth-first search: explores states in non-decreasing distance from the
/// initial state, so the first goal found is reached by a fewest-edges path.
pub fn bfs<T, G, S, I>(initial: T, goal_test: G, successors: S) -> Option<Arc<SearchNode<T>>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    bfs_with_stats(initial, goal_test, successors).0
}

/// [`bfs`] plus the counters gathered along the way.
pub fn bfs_with_stats<T, G, S, I>(
    initial: T,
    goal_test: G,
    successors: S,
) -> (Option<Arc<SearchNode<T>>>, SearchStats)
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
{
    uninformed_search(QueueFrontier::new(), initial, goal_test, successors)
}

/// The shared DFS/BFS loop. States enter the explored set at discovery time,
/// not at expansion time, so no state is ever queued twice.
fn uninformed_search<T, G, S, I, F>(
    mut frontier: F,
    initial: T,
    goal_test: G,
    successors: S,
) -> (Option<Arc<SearchNode<T>>>, SearchStats)
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    F: Frontier<T>,
{
    let mut stats = SearchStats::default();
    let mut explored: HashSet<T> = HashSet::new();

    explored.insert(initial.clone());
    frontier.push(SearchNode::root(initial));
    stats.nodes_discovered = 1;
    stats.peak_frontier_len = 1;
    let mut frontier_len = 1usize;

    while let Some(node) = frontier.pop() {
        frontier_len -= 1;
        if goal_test(&node.state) {
            debug!(
                expanded = stats.nodes_expanded,
                discovered = stats.nodes_discovered,
                "goal reached"
            );
            return (Some(node), stats);
        }
        stats.nodes_expanded += 1;

        for successor in successors(&node.state) {
            if explored.contains(&successor) {
                continue;
            }
            explored.insert(successor.clone());
            stats.nodes_discovered += 1;
            frontier.push(SearchNode::child(successor, node.clone()));
            frontier_len += 1;
            stats.peak_frontier_len = stats.peak_frontier_len.max(frontier_len);
        }
    }

    debug!(
        expanded = stats.nodes_expanded,
        "frontier exhausted without reaching a goal"
    );
    (None, stats)
}

/// A* search: explores states in ascending `cost + heuristic` order with a
/// uniform unit edge cost.
///
/// The returned path is shortest provided `heuristic` is admissible (never
/// overestimates the true remaining cost); admissibility is the caller's
/// obligation and is not checked here.
pub fn astar<T, G, S, I, H>(
    initial: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> Option<Arc<SearchNode<T>>>
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    H: Fn(&T) -> f64,
{
    astar_with_stats(initial, goal_test, successors, heuristic).0
}

/// [`astar`] plus the counters gathered along the way.
pub fn astar_with_stats<T, G, S, I, H>(
    initial: T,
    goal_test: G,
    successors: S,
    heuristic: H,
) -> (Option<Arc<SearchNode<T>>>, SearchStats)
where
    T: Clone + Eq + Hash,
    G: Fn(&T) -> bool,
    S: Fn(&T) -> I,
    I: IntoIterator<Item = T>,
    H: Fn(&T) -> f64,
{
    let mut stats = SearchStats::default();
    let mut frontier = PriorityFrontier::new();
    // Best path cost found so far per state. Unlike the DFS/BFS membership
    // set, this supports relaxation: a state re-enters the frontier whenever
    // a strictly cheaper path to it turns up.
    let mut explored: HashMap<T, f64> = HashMap::new();

    explored.insert(initial.clone(), 0.0);
    let initial_estimate = heuristic(&initial);
    frontier.push(SearchNode::with_costs(initial, None, 0.0, initial_estimate));
    stats.nodes_discovered = 1;
    stats.peak_frontier_len = 1;
    let mut frontier_len = 1usize;

    while let Some(node) = frontier.pop() {
        frontier_len -= 1;
        if goal_test(&node.state) {
            debug!(
                expanded = stats.nodes_expanded,
                cost = node.cost,
                "goal reached"
            );
            return (Some(node), stats);
        }
        stats.nodes_expanded += 1;

        for successor in successors(&node.state) {
            let new_cost = node.cost + 1.0;
            let improves = match explored.get(&successor) {
                Some(&best) => new_cost < best,
                None => true,
            };
            if !improves {
                continue;
            }
            explored.insert(successor.clone(), new_cost);
            stats.nodes_discovered += 1;
            let estimate = heuristic(&successor);
            frontier.push(SearchNode::with_costs(
                successor,
                Some(node.clone()),
                new_cost,
                estimate,
            ));
            frontier_len += 1;
            stats.peak_frontier_len = stats.peak_frontier_len.max(frontier_len);
        }
    }

    debug!(
        expanded = stats.nodes_expanded,
        "frontier exhausted without reaching a goal"
    );
    (None, stats)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::search::node::node_to_path;

    // A small fixed graph:
    //
    //   0 - 1 - 2
    //   |       |
    //   3 ----- 4 - 5        6 - 7 (disconnected)
    //
    fn neighbours(state: &u32) -> Vec<u32> {
        match state {
            0 => vec![1, 3],
            1 => vec![0, 2],
            2 => vec![1, 4],
            3 => vec![0, 4],
            4 => vec![2, 3, 5],
            5 => vec![4],
            6 => vec![7],
            7 => vec![6],
            _ => vec![],
        }
    }

    #[test]
    fn bfs_finds_fewest_edge_path() {
        let node = bfs(0, |s| *s == 5, neighbours).unwrap();
        assert_eq!(node_to_path(&node), vec![0, 3, 4, 5]);
    }

    #[test]
    fn dfs_reaches_the_goal() {
        let node = dfs(0, |s| *s == 5, neighbours).unwrap();
        let path = node_to_path(&node);
        assert_eq!(path.first(), Some(&0));
        assert_eq!(path.last(), Some(&5));
        // Every consecutive pair must be an actual edge.
        for pair in path.windows(2) {
            assert!(neighbours(&pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn unreachable_goal_fails_for_all_algorithms() {
        assert!(dfs(0, |s| *s == 7, neighbours).is_none());
        assert!(bfs(0, |s| *s == 7, neighbours).is_none());
        assert!(astar(0, |s| *s == 7, neighbours, |_| 0.0).is_none());
    }

    #[test]
    fn astar_with_zero_heuristic_matches_bfs_cost() {
        let node = astar(0, |s| *s == 5, neighbours, |_| 0.0).unwrap();
        assert_eq!(node.cost, 3.0);
        assert_eq!(node_to_path(&node).len(), 4);
    }

    #[test]
    fn astar_cost_equals_edge_count() {
        let node = astar(0, |s| *s == 2, neighbours, |_| 0.0).unwrap();
        let path = node_to_path(&node);
        assert_eq!(node.cost as usize, path.len() - 1);
    }

    #[test]
    fn initial_state_satisfying_goal_returns_root() {
        let node = bfs(5, |s| *s == 5, neighbours).unwrap();
        assert!(node.parent.is_none());
        assert_eq!(node_to_path(&node), vec![5]);
    }
}
