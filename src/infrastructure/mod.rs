pub mod audio;
pub mod observability;
pub mod speech;
pub mod storage;
pub mod transcode;
pub mod translate;
