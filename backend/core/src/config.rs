/// Typed accessors over the host config store.
///
/// The host owns config storage; plugs read individual keys through
/// [`SystemApi::get_config`] and apply defaults here.
use crate::error::InkError;
use crate::syscalls::SystemApi;
use crate::types::LinkStyle;

/// Default maximum document size, in MiB.
pub const DEFAULT_MAXIMUM_DOCUMENT_SIZE_MIB: f64 = 10.0;

/// Config key for the maximum document size.
pub const MAXIMUM_DOCUMENT_SIZE_KEY: &str = "maximumDocumentSize";

/// Config key for the default link style.
pub const DEFAULT_LINK_STYLE_KEY: &str = "defaultLinkStyle";

/// Read the maximum document size in MiB.
///
/// An unset key falls back to the default silently; a present but non-numeric
/// value is a [`InkError::ConfigType`] error the caller must surface.
pub async fn maximum_document_size(system: &dyn SystemApi) -> Result<f64, InkError> {
    match system.get_config(MAXIMUM_DOCUMENT_SIZE_KEY).await? {
        None => Ok(DEFAULT_MAXIMUM_DOCUMENT_SIZE_MIB),
        Some(value) => value.as_f64().ok_or(InkError::ConfigType {
            key: MAXIMUM_DOCUMENT_SIZE_KEY.to_string(),
        }),
    }
}

/// Read the configured link style. Unset or non-string values fall back to
/// markdown-style links.
pub async fn link_style(system: &dyn SystemApi) -> Result<LinkStyle, InkError> {
    let style = match system.get_config(DEFAULT_LINK_STYLE_KEY).await? {
        Some(serde_json::Value::String(s)) => LinkStyle::from_config(&s),
        _ => LinkStyle::Markdown,
    };
    Ok(style)
}
