pub mod not_equal;
pub mod queens;
