//! Editor plug: file upload flow and version command.

pub mod upload;
pub mod version;

pub use upload::{save_file, upload_file, SaveOutcome, Syscalls};
pub use version::version_command;
