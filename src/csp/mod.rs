pub mod constraint;
pub mod constraints;
pub mod engine;
