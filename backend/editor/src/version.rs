/// Version command.
use anyhow::Result;

use inkbase_core::{EditorApi, NotificationLevel};

/// The version string shown to users.
pub const PUBLIC_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Show a fire-and-forget notification with the running version.
pub async fn version_command(editor: &dyn EditorApi) -> Result<()> {
    editor
        .flash_notification(
            &format!("You are currently running inkbase {PUBLIC_VERSION}"),
            NotificationLevel::Info,
        )
        .await
}
