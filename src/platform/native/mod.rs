//! Native platform implementations backed by the standard library

mod confirm;
mod filesystem;
mod process;

pub use confirm::PromptConfirm;
pub use filesystem::NativeFilesystem;
pub use process::NativeProcess;
