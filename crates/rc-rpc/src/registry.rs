//! Command registry - the immutable-after-init table of command metadata.
//!
//! The table is assembled once at startup by [`CommandTableBuilder`]; a
//! duplicate name is a fatal configuration error at build time, never a
//! runtime surprise. After build the table is read-only and safe for
//! lock-free concurrent lookup from any number of dispatcher tasks.

use crate::context::CommandContext;
use crate::domain::error::RpcError;
use crate::domain::types::RpcRequest;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by command handlers.
pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<Value, RpcError>> + Send + 'static>>;

/// Command handler entry point.
pub type CommandHandler = fn(Arc<CommandContext>, RpcRequest) -> HandlerFuture;

/// Command grouping for help output and operator orientation.
///
/// Closed enumeration: every consuming switch matches exhaustively, so a new
/// category forces the help grouping and gating sites to be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCategory {
    Deprecated,
    Wallet,
    Mining,
    Developer,
    Network,
}

impl CommandCategory {
    pub const ALL: [CommandCategory; 5] = [
        CommandCategory::Deprecated,
        CommandCategory::Wallet,
        CommandCategory::Mining,
        CommandCategory::Developer,
        CommandCategory::Network,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommandCategory::Deprecated => "Deprecated",
            CommandCategory::Wallet => "Wallet",
            CommandCategory::Mining => "Mining",
            CommandCategory::Developer => "Developer",
            CommandCategory::Network => "Network",
        }
    }

    /// Parse a category name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        CommandCategory::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(name))
    }
}

/// Metadata for one registered command.
#[derive(Clone)]
pub struct CommandDescriptor {
    /// Command name, the unique registry key.
    pub name: &'static str,
    /// Handler invoked at execution time.
    pub handler: CommandHandler,
    /// Whether the command may run under the restricted safe-mode posture.
    pub safe_mode_ok: bool,
    /// Category for help grouping.
    pub category: CommandCategory,
    /// One-line usage description.
    pub usage: &'static str,
}

impl CommandDescriptor {
    pub const fn new(
        name: &'static str,
        handler: CommandHandler,
        safe_mode_ok: bool,
        category: CommandCategory,
        usage: &'static str,
    ) -> Self {
        Self {
            name,
            handler,
            safe_mode_ok,
            category,
            usage,
        }
    }
}

impl std::fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("safe_mode_ok", &self.safe_mode_ok)
            .field("category", &self.category)
            .finish()
    }
}

/// Registry construction errors - all fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("duplicate command name: {0}")]
    DuplicateName(&'static str),
}

/// Immutable mapping from command name to descriptor, preserving
/// registration order.
pub struct CommandTable {
    ordered: Vec<CommandDescriptor>,
    by_name: HashMap<&'static str, usize>,
}

impl CommandTable {
    /// Look up a command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&CommandDescriptor> {
        self.by_name.get(name).map(|&index| &self.ordered[index])
    }

    /// All descriptors in registration order.
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.ordered
    }

    /// Descriptors of one category, in registration order.
    pub fn commands_in(&self, category: CommandCategory) -> Vec<&CommandDescriptor> {
        self.ordered
            .iter()
            .filter(|descriptor| descriptor.category == category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

/// Builder assembling the command table from the fixed catalog.
#[derive(Default)]
pub struct CommandTableBuilder {
    ordered: Vec<CommandDescriptor>,
    by_name: HashMap<&'static str, usize>,
}

impl CommandTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one command. A duplicate name fails the whole build.
    pub fn register(mut self, descriptor: CommandDescriptor) -> Result<Self, RegistryError> {
        if self.by_name.contains_key(descriptor.name) {
            return Err(RegistryError::DuplicateName(descriptor.name));
        }
        self.by_name.insert(descriptor.name, self.ordered.len());
        self.ordered.push(descriptor);
        Ok(self)
    }

    pub fn build(self) -> CommandTable {
        CommandTable {
            ordered: self.ordered,
            by_name: self.by_name,
        }
    }
}
