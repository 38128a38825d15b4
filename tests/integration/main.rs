mod helpers;
mod test_batch;
mod test_comments;
mod test_predictions;
