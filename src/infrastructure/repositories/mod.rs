pub mod csv_comment_repository;
