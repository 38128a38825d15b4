pub mod predict_batch;
pub mod predict_comment;
