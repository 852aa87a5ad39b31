pub mod registry;
pub mod types;

pub use registry::{CommandRegistry, RegistryEvent};
pub use types::{
    Command, CommandDef, CommandRunner, SlashCommand, SlashCommandDef, SlashCommandRunner,
    SlashCompletionOption, SlashCompletions,
};
