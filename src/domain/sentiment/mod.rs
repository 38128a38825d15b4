pub mod distribution;
pub mod label;
