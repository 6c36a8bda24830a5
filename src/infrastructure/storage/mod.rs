mod filesystem;

pub use filesystem::FilesystemImageStore;
