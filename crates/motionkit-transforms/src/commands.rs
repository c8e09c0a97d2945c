//! Host command registry
//!
//! Maps named operator commands to handlers. Command names and parameter
//! keys are case-insensitive: both are normalized to upper case on input.
//! Parameter validation happens here, before a handler runs, so handlers
//! only ever see well-formed arguments.

use std::collections::HashMap;

use motionkit_core::{CommandError, Result};

/// Arguments of a single command invocation
///
/// Carries the (upper-cased) command name plus its key/value parameters.
#[derive(Debug, Clone)]
pub struct CommandArgs {
    command: String,
    params: HashMap<String, String>,
}

impl CommandArgs {
    /// Create arguments for the named command
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into().to_uppercase(),
            params: HashMap::new(),
        }
    }

    /// Add a parameter (builder style)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into().to_uppercase(), value.into());
        self
    }

    /// The upper-cased command name
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Get an optional parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(&key.to_uppercase()).map(|s| s.as_str())
    }

    /// Get a required parameter, or a [`CommandError::MissingParameter`]
    pub fn require(&self, key: &str) -> std::result::Result<&str, CommandError> {
        self.get(key).ok_or_else(|| CommandError::MissingParameter {
            command: self.command.clone(),
            param: key.to_uppercase(),
        })
    }
}

/// Type alias for command handler functions
type CommandHandler = Box<dyn Fn(&CommandArgs) -> Result<()> + Send + Sync>;

struct RegisteredCommand {
    description: String,
    handler: CommandHandler,
}

/// Registry of named host commands
///
/// Components register their commands once at startup; the host dispatches
/// parsed invocations by name.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, RegisteredCommand>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command handler
    ///
    /// Re-registering a name replaces the previous handler.
    pub fn register<F>(&mut self, name: impl Into<String>, description: impl Into<String>, handler: F)
    where
        F: Fn(&CommandArgs) -> Result<()> + Send + Sync + 'static,
    {
        let name = name.into().to_uppercase();
        tracing::debug!(command = %name, "command registered");
        self.commands.insert(
            name,
            RegisteredCommand {
                description: description.into(),
                handler: Box::new(handler),
            },
        );
    }

    /// Dispatch a command invocation to its handler
    pub fn dispatch(&self, args: CommandArgs) -> Result<()> {
        let Some(command) = self.commands.get(args.command()) else {
            return Err(CommandError::UnknownCommand {
                name: args.command().to_string(),
            }
            .into());
        };
        (command.handler)(&args)
    }

    /// Whether a command name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&name.to_uppercase())
    }

    /// List registered commands as (name, description) pairs
    pub fn list(&self) -> Vec<(&str, &str)> {
        self.commands
            .iter()
            .map(|(name, cmd)| (name.as_str(), cmd.description.as_str()))
            .collect()
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.commands.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_dispatch_known_command() {
        let calls = Arc::new(AtomicUsize::new(0));
        let calls_clone = calls.clone();

        let mut registry = CommandRegistry::new();
        registry.register("PING", "Test command", move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        registry.dispatch(CommandArgs::new("PING")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispatch_is_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry.register("exclude_object", "Test command", |_| Ok(()));

        assert!(registry.contains("EXCLUDE_OBJECT"));
        registry.dispatch(CommandArgs::new("Exclude_Object")).unwrap();
    }

    #[test]
    fn test_unknown_command() {
        let registry = CommandRegistry::new();
        let err = registry.dispatch(CommandArgs::new("BOGUS")).unwrap_err();
        assert!(err.is_command_error());
    }

    #[test]
    fn test_require_missing_parameter() {
        let args = CommandArgs::new("EXCLUDE_OBJECT");
        let err = args.require("NAME").unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingParameter { ref command, ref param }
                if command == "EXCLUDE_OBJECT" && param == "NAME"
        ));
    }

    #[test]
    fn test_parameters_are_case_insensitive() {
        let args = CommandArgs::new("START_CURRENT_OBJECT").with("name", "part_a");
        assert_eq!(args.get("NAME"), Some("part_a"));
        assert_eq!(args.require("Name").unwrap(), "part_a");
    }
}
