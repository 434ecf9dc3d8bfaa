pub mod error;
pub mod gist_repo;
