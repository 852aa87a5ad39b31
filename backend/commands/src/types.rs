/// Command and slash-command types.
///
/// The manifest shapes (`CommandDef`, `SlashCommandDef`) are what plugs
/// declare; the runtime pairs them with a run callback to form registry
/// entries.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Command definition
// ---------------------------------------------------------------------------

/// Manifest shape for a user-invokable command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDef {
    /// Unique registry key (e.g. "Upload: File").
    pub name: String,
    /// Keyboard shortcut (e.g. "Ctrl-Alt-u").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Mac-specific shortcut override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// Ordering hint for command palettes (higher sorts first).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// Hide from the command palette (still invokable programmatically).
    #[serde(default)]
    pub hide: bool,
}

impl CommandDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), key: None, mac: None, priority: None, hide: false }
    }
}

/// The callback invoked when a command runs.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, args: &[Value]) -> Result<Value>;
}

/// A registered command: its definition, an optional run callback, and the
/// time it last ran.
#[derive(Clone)]
pub struct Command {
    pub def: CommandDef,
    /// Commands without a callback are declaration-only (e.g. key binding
    /// placeholders); invoking them is an error.
    pub run: Option<Arc<dyn CommandRunner>>,
    pub last_run: Option<DateTime<Utc>>,
}

impl Command {
    pub fn new(def: CommandDef, run: Arc<dyn CommandRunner>) -> Self {
        Self { def, run: Some(run), last_run: None }
    }

    pub fn declaration_only(def: CommandDef) -> Self {
        Self { def, run: None, last_run: None }
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("def", &self.def)
            .field("has_run", &self.run.is_some())
            .field("last_run", &self.last_run)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Slash commands
// ---------------------------------------------------------------------------

/// Manifest shape for a slash command (typed with a `/` trigger prefix).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlashCommandDef {
    /// Unique registry key, without the leading slash.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

/// One completion suggestion offered by a slash command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlashCompletionOption {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Text applied when the option is picked; defaults to the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply: Option<String>,
}

/// The completion set a slash command returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlashCompletions {
    pub options: Vec<SlashCompletionOption>,
}

/// The callback invoked when a slash command runs; returns completions.
#[async_trait]
pub trait SlashCommandRunner: Send + Sync {
    async fn run(&self, args: &[Value]) -> Result<SlashCompletions>;
}

/// A registered slash command. Unlike [`Command`], the callback is mandatory.
#[derive(Clone)]
pub struct SlashCommand {
    pub def: SlashCommandDef,
    pub run: Arc<dyn SlashCommandRunner>,
}

impl std::fmt::Debug for SlashCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlashCommand").field("def", &self.def).finish()
    }
}
