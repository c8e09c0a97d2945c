//! # MotionKit
//!
//! The motion-transform layer of a 3D-printer host: a composable chain of
//! move transforms with mid-print object exclusion.
//!
//! ## Architecture
//!
//! MotionKit is organized as a workspace with multiple crates:
//!
//! 1. **motionkit-core** - Position data model, transform chain, events, errors
//! 2. **motionkit-settings** - Pipeline configuration and persistence
//! 3. **motionkit-transforms** - The object-exclusion filter and its command surface
//! 4. **motionkit** - Facade crate that re-exports the public API
//!
//! ## Features
//!
//! - **Composable transform chain**: transforms wrap each other by explicit
//!   registration, resolved once at the host's ready phase
//! - **Object exclusion**: cancel a failing object mid-print; its moves are
//!   suppressed and motion resumes with coordinate continuity preserved
//! - **Host command surface**: named, case-insensitive commands for object
//!   membership
//! - **Event bus**: lifecycle, job, and motion diagnostics with filtering

pub use motionkit_core::data;
pub use motionkit_core::event_bus;

pub use motionkit_core::{
    thread_safe, CommandError, Error, EventBus, EventBusConfig, EventCategory, EventFilter,
    JobEvent, LifecycleEvent, MotionEvent, MoveTransform, NoOpTransform, PipelineEvent, Position,
    Result, SubscriptionId, ThreadSafe, TransformChain, TransformError, TransformHandle,
};

pub use motionkit_settings::{
    ConfigError, ExcludeSettings, PipelineSettings, SettingsError, TransformSettings,
};

pub use motionkit_transforms::{
    attach_to_host, install, CommandArgs, CommandRegistry, ExcludeFilter, ObjectCommands,
    SharedExcludeFilter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
