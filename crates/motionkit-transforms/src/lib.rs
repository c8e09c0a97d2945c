//! # MotionKit Transforms
//!
//! Motion-command transforms for the MotionKit pipeline.
//!
//! The centerpiece is the [`ExcludeFilter`], a streaming coordinate filter
//! that suppresses motion for objects cancelled mid-print while keeping the
//! commanded and reported positions continuous for everything that still
//! prints. The crate also carries the host-facing command surface that
//! drives object membership.

pub mod commands;
pub mod exclude;
pub mod objects;

pub use commands::{CommandArgs, CommandRegistry};
pub use exclude::{attach_to_host, install, ExcludeFilter, SharedExcludeFilter};
pub use objects::ObjectCommands;
