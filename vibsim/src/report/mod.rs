pub mod summary;
pub mod export;
