pub mod datasets;
pub mod ml;
pub mod repositories;
pub mod security;
pub mod text;
pub mod translation;
