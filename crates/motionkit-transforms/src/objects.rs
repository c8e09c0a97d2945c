//! Object membership commands
//!
//! The host-facing surface for object exclusion. Four commands mutate the
//! filter's object bookkeeping — which object the upcoming moves belong to
//! and which objects are excluded. They never touch position state; all
//! motion effects happen lazily the next time a move flows through the
//! filter.

use motionkit_core::ThreadSafe;

use crate::commands::CommandRegistry;
use crate::exclude::ExcludeFilter;

/// Registers the object membership commands against a shared filter
pub struct ObjectCommands {
    filter: ThreadSafe<ExcludeFilter>,
}

impl ObjectCommands {
    /// Create the command set for a shared filter handle
    pub fn new(filter: ThreadSafe<ExcludeFilter>) -> Self {
        Self { filter }
    }

    /// Register the four membership commands
    pub fn register(&self, registry: &mut CommandRegistry) {
        let filter = self.filter.clone();
        registry.register(
            "START_CURRENT_OBJECT",
            "Mark the start of moves belonging to the named object",
            move |args| {
                let name = args.require("NAME")?;
                filter.lock().begin_object(name);
                Ok(())
            },
        );

        let filter = self.filter.clone();
        registry.register(
            "END_CURRENT_OBJECT",
            "Mark the end of the current object's moves",
            move |_args| {
                filter.lock().end_object();
                Ok(())
            },
        );

        let filter = self.filter.clone();
        registry.register(
            "EXCLUDE_OBJECT",
            "Cancel all moves belonging to the named object",
            move |args| {
                let name = args.require("NAME")?;
                filter.lock().exclude_object(name);
                Ok(())
            },
        );

        let filter = self.filter.clone();
        registry.register(
            "REMOVE_ALL_EXCLUDED",
            "Clear the excluded-object set",
            move |_args| {
                filter.lock().reset_excluded();
                Ok(())
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandArgs;
    use motionkit_core::thread_safe;

    fn registry_with_filter() -> (CommandRegistry, ThreadSafe<ExcludeFilter>) {
        let filter = thread_safe(ExcludeFilter::new());
        let mut registry = CommandRegistry::new();
        ObjectCommands::new(filter.clone()).register(&mut registry);
        (registry, filter)
    }

    #[test]
    fn test_all_commands_registered() {
        let (registry, _filter) = registry_with_filter();
        for name in [
            "START_CURRENT_OBJECT",
            "END_CURRENT_OBJECT",
            "EXCLUDE_OBJECT",
            "REMOVE_ALL_EXCLUDED",
        ] {
            assert!(registry.contains(name), "{name} not registered");
        }
    }

    #[test]
    fn test_start_and_end_object() {
        let (registry, filter) = registry_with_filter();

        registry
            .dispatch(CommandArgs::new("START_CURRENT_OBJECT").with("NAME", "part_a"))
            .unwrap();
        assert_eq!(filter.lock().current_object(), "PART_A");

        registry
            .dispatch(CommandArgs::new("END_CURRENT_OBJECT"))
            .unwrap();
        assert_eq!(filter.lock().current_object(), "");
    }

    #[test]
    fn test_exclude_and_reset() {
        let (registry, filter) = registry_with_filter();

        registry
            .dispatch(CommandArgs::new("EXCLUDE_OBJECT").with("NAME", "part_b"))
            .unwrap();
        registry
            .dispatch(CommandArgs::new("EXCLUDE_OBJECT").with("NAME", "PART_B"))
            .unwrap();
        assert_eq!(filter.lock().excluded_count(), 1);
        assert!(filter.lock().is_excluded("PART_B"));

        registry
            .dispatch(CommandArgs::new("REMOVE_ALL_EXCLUDED"))
            .unwrap();
        assert_eq!(filter.lock().excluded_count(), 0);
    }

    #[test]
    fn test_missing_name_is_rejected_before_the_filter() {
        let (registry, filter) = registry_with_filter();

        let err = registry
            .dispatch(CommandArgs::new("EXCLUDE_OBJECT"))
            .unwrap_err();
        assert!(err.is_command_error());
        assert_eq!(filter.lock().excluded_count(), 0);

        let err = registry
            .dispatch(CommandArgs::new("START_CURRENT_OBJECT"))
            .unwrap_err();
        assert!(err.is_command_error());
        assert_eq!(filter.lock().current_object(), "");
    }
}
