mod mock_store;
mod temp_dir_store;

pub use mock_store::MockScratchStore;
pub use temp_dir_store::TempDirScratchStore;
