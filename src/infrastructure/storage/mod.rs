mod scratch_dir;

pub use scratch_dir::LocalScratchDir;
