//! Quaero is a generic, reusable state-space search and constraint
//! satisfaction (CSP) library.
//!
//! Two engines share one abstraction: a problem is a space of opaque states
//! explored from an initial state. The engines are problem-agnostic; callers
//! supply the domain knowledge as closures or constraint objects and
//! interpret the returned path or assignment themselves.
//!
//! # Core Concepts
//!
//! - **Graph search**: [`dfs`], [`bfs`], and [`astar`] traverse a state space
//!   described by a goal predicate and a successor function, returning a
//!   [`SearchNode`] whose parent chain encodes the solution path
//!   (reconstructed with [`node_to_path`]).
//! - **[`Frontier`]**: the pluggable container of pending states; the three
//!   disciplines (stack, queue, min-heap) are what distinguish the three
//!   algorithms.
//! - **[`Csp`]**: variables, finite domains, and [`Constraint`] objects,
//!   solved by depth-first backtracking over immutable partial assignments.
//!
//! [`dfs`]: search::engine::dfs
//! [`bfs`]: search::engine::bfs
//! [`astar`]: search::engine::astar
//! [`SearchNode`]: search::node::SearchNode
//! [`node_to_path`]: search::node::node_to_path
//! [`Frontier`]: search::frontier::Frontier
//! [`Csp`]: csp::engine::Csp
//! [`Constraint`]: csp::constraint::Constraint
//!
//! # Example: Searching a Tiny Graph
//!
//! ```
//! use quaero::search::engine::bfs;
//! use quaero::search::node::node_to_path;
//!
//! // States are city names; successors come from a fixed adjacency list.
//! let neighbours = |city: &&str| -> Vec<&'static str> {
//!     match *city {
//!         "Boston" => vec!["New York"],
//!         "New York" => vec!["Boston", "Philadelphia"],
//!         "Philadelphia" => vec!["New York", "Washington"],
//!         _ => vec![],
//!     }
//! };
//!
//! let goal = bfs("Boston", |city| *city == "Washington", neighbours).unwrap();
//! assert_eq!(
//!     node_to_path(&goal),
//!     vec!["Boston", "New York", "Philadelphia", "Washington"],
//! );
//! ```
//!
//! # Example: A Simple 2-Variable CSP
//!
//! Solving `?A != ?B` where `?A` can be `1` or `2` and `?B` only `1`: the
//! solver must deduce that `?A` is `2`.
//!
//! ```
//! use std::sync::Arc;
//!
//! use quaero::csp::constraints::not_equal::NotEqualConstraint;
//! use quaero::csp::engine::Csp;
//!
//! let domains = im::hashmap! {
//!     "a" => vec![1, 2],
//!     "b" => vec![1],
//! };
//! let mut csp = Csp::new(vec!["a", "b"], domains).unwrap();
//! csp.add_constraint(Arc::new(NotEqualConstraint::new("a", "b"))).unwrap();
//!
//! let solution = csp.solve().unwrap();
//! assert_eq!(solution.get(&"a"), Some(&2));
//! ```

pub mod csp;
pub mod error;
pub mod problems;
pub mod search;
