//! TreeSource implementations

mod embedded;
mod json_file;

pub use embedded::StaticTreeSource;
pub use json_file::JsonFileTreeSource;
