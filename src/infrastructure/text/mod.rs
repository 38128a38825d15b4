pub mod normalizer;
pub mod pipeline;
pub mod segmenter;
