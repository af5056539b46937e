pub mod audio;
pub mod enhancement;
pub mod observability;
pub mod storage;
