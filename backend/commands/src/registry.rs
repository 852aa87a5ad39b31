/// Command and slash-command registries.
///
/// Both registries are name-keyed maps owned by the host runtime. Every
/// mutation of the command set publishes a [`RegistryEvent::CommandsUpdated`]
/// notification so palettes and completion UIs can refresh.
use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tokio::sync::{broadcast, RwLock};
use tracing::info;

use inkbase_core::InkError;

use crate::types::{Command, CommandDef, SlashCommand, SlashCompletions};

/// Notification published when the registered command set changes.
#[derive(Debug, Clone)]
pub enum RegistryEvent {
    CommandsUpdated(Vec<CommandDef>),
}

/// Thread-safe registry of commands and slash commands, keyed by name.
#[derive(Clone)]
pub struct CommandRegistry {
    commands: Arc<RwLock<HashMap<String, Command>>>,
    slash_commands: Arc<RwLock<HashMap<String, SlashCommand>>>,
    events: broadcast::Sender<RegistryEvent>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self {
            commands: Arc::new(RwLock::new(HashMap::new())),
            slash_commands: Arc::new(RwLock::new(HashMap::new())),
            events: tx,
        }
    }

    /// Subscribe to command-set change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    async fn publish_commands_updated(&self) {
        let defs: Vec<CommandDef> = {
            let map = self.commands.read().await;
            map.values().map(|c| c.def.clone()).collect()
        };
        // No subscribers is fine; the send result is irrelevant.
        let _ = self.events.send(RegistryEvent::CommandsUpdated(defs));
    }

    /// Register a command under its definition name, replacing any previous
    /// entry with the same name.
    pub async fn register(&self, command: Command) {
        let name = command.def.name.clone();
        info!("[Commands] Registered: {}", name);
        self.commands.write().await.insert(name, command);
        self.publish_commands_updated().await;
    }

    /// Remove a command by name. Returns true if it existed.
    pub async fn unregister(&self, name: &str) -> bool {
        let removed = self.commands.write().await.remove(name).is_some();
        if removed {
            info!("[Commands] Unregistered: {}", name);
            self.publish_commands_updated().await;
        }
        removed
    }

    pub async fn get(&self, name: &str) -> Option<Command> {
        self.commands.read().await.get(name).cloned()
    }

    /// All command definitions, sorted by name.
    pub async fn list(&self) -> Vec<CommandDef> {
        let map = self.commands.read().await;
        let mut defs: Vec<CommandDef> = map.values().map(|c| c.def.clone()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Invoke a command by name, recording the invocation time on success.
    pub async fn run_command(&self, name: &str, args: &[Value]) -> Result<Value, InkError> {
        let runner = {
            let map = self.commands.read().await;
            let command = map.get(name).ok_or_else(|| InkError::UnknownCommand(name.to_string()))?;
            command
                .run
                .clone()
                .ok_or_else(|| InkError::UnknownCommand(name.to_string()))?
        };

        info!("[Commands] Running: {}", name);
        let result = runner.run(args).await?;

        if let Some(command) = self.commands.write().await.get_mut(name) {
            command.last_run = Some(Utc::now());
        }
        Ok(result)
    }

    // -- slash commands ----------------------------------------------------

    /// Register a slash command, replacing any previous entry with the same name.
    pub async fn register_slash(&self, command: SlashCommand) {
        let name = command.def.name.clone();
        info!("[Commands] Registered slash: /{}", name);
        self.slash_commands.write().await.insert(name, command);
    }

    /// Remove a slash command by name. Returns true if it existed.
    pub async fn unregister_slash(&self, name: &str) -> bool {
        self.slash_commands.write().await.remove(name).is_some()
    }

    /// All slash-command definitions, sorted by name.
    pub async fn list_slash(&self) -> Vec<crate::types::SlashCommandDef> {
        let map = self.slash_commands.read().await;
        let mut defs: Vec<_> = map.values().map(|c| c.def.clone()).collect();
        defs.sort_by(|a, b| a.name.cmp(&b.name));
        defs
    }

    /// Invoke a slash command by name, returning its completion suggestions.
    pub async fn run_slash(&self, name: &str, args: &[Value]) -> Result<SlashCompletions, InkError> {
        let runner = {
            let map = self.slash_commands.read().await;
            let command = map.get(name).ok_or_else(|| InkError::UnknownCommand(name.to_string()))?;
            command.run.clone()
        };
        runner.run(args).await.map_err(InkError::from)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CommandRunner, SlashCommandRunner, SlashCommandDef, SlashCompletionOption};
    use anyhow::Result;
    use async_trait::async_trait;
    use serde_json::json;

    struct ReplyWith(Value);

    #[async_trait]
    impl CommandRunner for ReplyWith {
        async fn run(&self, _args: &[Value]) -> Result<Value> {
            Ok(self.0.clone())
        }
    }

    struct StaticCompletions;

    #[async_trait]
    impl SlashCommandRunner for StaticCompletions {
        async fn run(&self, _args: &[Value]) -> Result<SlashCompletions> {
            Ok(SlashCompletions {
                options: vec![SlashCompletionOption {
                    label: "today".into(),
                    detail: None,
                    apply: None,
                }],
            })
        }
    }

    #[tokio::test]
    async fn register_run_and_record_last_run() {
        let registry = CommandRegistry::new();
        registry
            .register(Command::new(
                CommandDef::named("Stats: Show"),
                Arc::new(ReplyWith(json!("ok"))),
            ))
            .await;

        assert!(registry.get("Stats: Show").await.unwrap().last_run.is_none());

        let out = registry.run_command("Stats: Show", &[]).await.unwrap();
        assert_eq!(out, json!("ok"));
        assert!(registry.get("Stats: Show").await.unwrap().last_run.is_some());
    }

    #[tokio::test]
    async fn unknown_and_declaration_only_commands_error() {
        let registry = CommandRegistry::new();
        registry
            .register(Command::declaration_only(CommandDef::named("Ghost")))
            .await;

        assert!(matches!(
            registry.run_command("Missing", &[]).await,
            Err(InkError::UnknownCommand(_))
        ));
        assert!(matches!(
            registry.run_command("Ghost", &[]).await,
            Err(InkError::UnknownCommand(_))
        ));
    }

    #[tokio::test]
    async fn registration_is_keyed_uniquely_by_name() {
        let registry = CommandRegistry::new();
        registry
            .register(Command::new(
                CommandDef::named("Dup"),
                Arc::new(ReplyWith(json!(1))),
            ))
            .await;
        registry
            .register(Command::new(
                CommandDef::named("Dup"),
                Arc::new(ReplyWith(json!(2))),
            ))
            .await;

        assert_eq!(registry.list().await.len(), 1);
        assert_eq!(registry.run_command("Dup", &[]).await.unwrap(), json!(2));
    }

    #[tokio::test]
    async fn mutations_publish_commands_updated() {
        let registry = CommandRegistry::new();
        let mut rx = registry.subscribe();

        registry
            .register(Command::new(
                CommandDef::named("One"),
                Arc::new(ReplyWith(json!(null))),
            ))
            .await;

        let RegistryEvent::CommandsUpdated(defs) = rx.recv().await.unwrap();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].name, "One");

        registry.unregister("One").await;
        let RegistryEvent::CommandsUpdated(defs) = rx.recv().await.unwrap();
        assert!(defs.is_empty());
    }

    #[tokio::test]
    async fn slash_commands_return_completions() {
        let registry = CommandRegistry::new();
        registry
            .register_slash(SlashCommand {
                def: SlashCommandDef { name: "date".into(), description: None, priority: None },
                run: Arc::new(StaticCompletions),
            })
            .await;

        let completions = registry.run_slash("date", &[]).await.unwrap();
        assert_eq!(completions.options.len(), 1);
        assert_eq!(completions.options[0].label, "today");

        assert!(registry.unregister_slash("date").await);
        assert!(registry.run_slash("date", &[]).await.is_err());
    }
}
