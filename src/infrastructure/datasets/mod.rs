pub mod batch_file;
pub mod sample_data;
pub mod table;
