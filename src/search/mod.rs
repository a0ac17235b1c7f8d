pub mod engine;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod stats;
