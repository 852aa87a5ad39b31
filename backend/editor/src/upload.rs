/// File upload flow.
///
/// Validates the file against the configured size limit, prompts the user for
/// a destination path, writes the document, and inserts a markdown link when
/// a page is being edited. Every fallible step aborts the whole flow; there
/// are no retries and no partial completions.
use anyhow::Result;
use tracing::{debug, info};

use inkbase_core::config::{self, MAXIMUM_DOCUMENT_SIZE_KEY};
use inkbase_core::{
    encode_page_uri, is_valid_path, resolve_markdown_link, EditorApi, EditorView, InkError,
    LinkStyle, NotificationLevel, SpaceApi, SystemApi, UploadedFile,
};

/// The host capability surface the editor plug calls into.
#[derive(Clone, Copy)]
pub struct Syscalls<'a> {
    pub editor: &'a dyn EditorApi,
    pub space: &'a dyn SpaceApi,
    pub system: &'a dyn SystemApi,
}

/// Which exit the save flow took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { path: String, link_inserted: bool },
    Aborted,
}

/// Save an uploaded file into the space, prompting for the destination path.
pub async fn save_file(sys: Syscalls<'_>, file: &UploadedFile) -> Result<SaveOutcome> {
    let max_mib = match config::maximum_document_size(sys.system).await {
        Ok(max) => max,
        Err(err @ InkError::ConfigType { .. }) => {
            sys.editor
                .flash_notification(
                    &format!("The setting '{MAXIMUM_DOCUMENT_SIZE_KEY}' must be a number"),
                    NotificationLevel::Error,
                )
                .await?;
            debug!("[Editor] Upload aborted: {err}");
            return Ok(SaveOutcome::Aborted);
        }
        Err(err) => return Err(err.into()),
    };

    let max_bytes = (max_mib * 1024.0 * 1024.0) as u64;
    if file.content.len() as u64 > max_bytes {
        sys.editor
            .flash_notification(
                &format!("Document is too large, maximum is {max_mib}MiB"),
                NotificationLevel::Error,
            )
            .await?;
        return Ok(SaveOutcome::Aborted);
    }

    let current_path = sys.editor.current_path().await?;
    let default_name = if is_valid_path(&file.name) {
        file.name.clone()
    } else {
        // Keep the original extension when one can be determined.
        let ext = file.name.rsplit_once('.').map(|(_, e)| e).unwrap_or("txt");
        format!("file.{ext}")
    };
    let suggested = resolve_markdown_link(&current_path, &default_name);

    let Some(final_path) = sys
        .editor
        .prompt("File name for pasted document", &suggested)
        .await?
    else {
        // Cancelled prompts abort silently.
        return Ok(SaveOutcome::Aborted);
    };
    if !is_valid_path(&final_path) {
        debug!("[Editor] Upload aborted: invalid path {final_path:?}");
        return Ok(SaveOutcome::Aborted);
    }

    sys.space.write_document(&final_path, &file.content).await?;
    info!("[Editor] Saved document: {final_path}");

    if sys.editor.current_editor().await? != EditorView::Page {
        return Ok(SaveOutcome::Saved { path: final_path, link_inserted: false });
    }

    let mut link = match config::link_style(sys.system).await? {
        LinkStyle::Wikilink => format!("[[{final_path}]]"),
        LinkStyle::Markdown => {
            format!("[{final_path}]({})", encode_page_uri(&final_path))
        }
    };
    if file.is_image() {
        link.insert(0, '!');
    }
    sys.editor.insert_at_cursor(&link).await?;

    Ok(SaveOutcome::Saved { path: final_path, link_inserted: true })
}

/// Open the host file picker and save whatever the user selects.
pub async fn upload_file(
    sys: Syscalls<'_>,
    accept: Option<&str>,
    capture: Option<&str>,
) -> Result<SaveOutcome> {
    let Some(file) = sys.editor.upload_file(accept, capture).await? else {
        return Ok(SaveOutcome::Aborted);
    };
    save_file(sys, &file).await
}
