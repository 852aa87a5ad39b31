/// Host capability traits — the syscall surface a plug calls into.
///
/// The host runtime (editor client, space storage, config store) implements
/// these; plugs only ever see the trait objects. All calls are async because
/// every one of them may round-trip to the client.
use anyhow::Result;
use async_trait::async_trait;

use crate::types::{EditorView, UploadedFile};

/// Severity of a flash notification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Error,
}

/// Editor-facing capabilities: notifications, prompts, cursor access.
#[async_trait]
pub trait EditorApi: Send + Sync {
    /// Show a transient notification to the user.
    async fn flash_notification(&self, message: &str, level: NotificationLevel) -> Result<()>;

    /// Prompt the user for a string. `None` means the user cancelled.
    async fn prompt(&self, label: &str, default_value: &str) -> Result<Option<String>>;

    /// Path of the document currently open in the editor.
    async fn current_path(&self) -> Result<String>;

    /// Which editing surface is active.
    async fn current_editor(&self) -> Result<EditorView>;

    /// Insert text at the cursor position of the active page.
    async fn insert_at_cursor(&self, text: &str) -> Result<()>;

    /// Open the host file picker. `None` means the user cancelled.
    async fn upload_file(
        &self,
        accept: Option<&str>,
        capture: Option<&str>,
    ) -> Result<Option<UploadedFile>>;
}

/// Space (document storage) capabilities.
#[async_trait]
pub trait SpaceApi: Send + Sync {
    /// Persist a document at the given path, overwriting if present.
    async fn write_document(&self, path: &str, content: &[u8]) -> Result<()>;
}

/// System capabilities: config lookup.
#[async_trait]
pub trait SystemApi: Send + Sync {
    /// Read a config value by key. `None` when the key is unset.
    async fn get_config(&self, key: &str) -> Result<Option<serde_json::Value>>;
}
