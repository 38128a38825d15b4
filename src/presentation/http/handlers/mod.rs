pub mod batch;
pub mod comments;
pub mod health;
pub mod predictions;
pub mod samples;
