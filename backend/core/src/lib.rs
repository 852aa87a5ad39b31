pub mod config;
pub mod error;
pub mod pageref;
pub mod syscalls;
pub mod types;

pub use config::{link_style, maximum_document_size, DEFAULT_MAXIMUM_DOCUMENT_SIZE_MIB};
pub use error::InkError;
pub use pageref::{encode_page_uri, is_valid_path, resolve_markdown_link};
pub use syscalls::{EditorApi, NotificationLevel, SpaceApi, SystemApi};
pub use types::{EditorView, LinkStyle, UploadedFile};
