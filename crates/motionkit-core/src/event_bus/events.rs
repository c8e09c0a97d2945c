//! Event type definitions for the event bus.
//!
//! This module defines all pipeline events organized by category.
//! Events are designed to be cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::data::Position;

/// Root event enum for all pipeline events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PipelineEvent {
    /// Host lifecycle events
    Lifecycle(LifecycleEvent),
    /// Print-job events
    Job(JobEvent),
    /// Motion diagnostics
    Motion(MotionEvent),
}

impl PipelineEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            PipelineEvent::Lifecycle(_) => EventCategory::Lifecycle,
            PipelineEvent::Job(_) => EventCategory::Job,
            PipelineEvent::Motion(_) => EventCategory::Motion,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            PipelineEvent::Lifecycle(e) => e.description(),
            PipelineEvent::Job(e) => e.description(),
            PipelineEvent::Motion(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Host lifecycle events.
    Lifecycle,
    /// Print-job events.
    Job,
    /// Motion diagnostic events.
    Motion,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Lifecycle => write!(f, "Lifecycle"),
            EventCategory::Job => write!(f, "Job"),
            EventCategory::Motion => write!(f, "Motion"),
        }
    }
}

/// Host lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LifecycleEvent {
    /// All components are registered; transforms may now resolve their
    /// place in the chain. Published exactly once per host start.
    Ready,
    /// The host is shutting down.
    Shutdown,
}

impl LifecycleEvent {
    fn description(&self) -> String {
        match self {
            LifecycleEvent::Ready => "Host ready".to_string(),
            LifecycleEvent::Shutdown => "Host shutting down".to_string(),
        }
    }
}

/// Print-job events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JobEvent {
    /// A job file was loaded for printing.
    FileLoaded {
        /// Path of the loaded file.
        path: String,
    },
    /// The active job file was reset. Per-file state (such as the set of
    /// excluded objects) must be cleared.
    FileReset,
}

impl JobEvent {
    fn description(&self) -> String {
        match self {
            JobEvent::FileLoaded { path } => format!("Job file loaded: {}", path),
            JobEvent::FileReset => "Job file reset".to_string(),
        }
    }
}

/// Motion diagnostic events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MotionEvent {
    /// The tool head entered a suppressed region; moves are being skipped.
    RegionEntered {
        /// Name of the excluded object.
        object: String,
    },
    /// The tool head left a suppressed region; motion resumed with a
    /// continuity-corrected position.
    RegionLeft {
        /// Name of the object motion resumed for.
        object: String,
        /// Position the command stream asked for.
        commanded: Position,
        /// Position actually forwarded downstream.
        corrected: Position,
    },
}

impl MotionEvent {
    fn description(&self) -> String {
        match self {
            MotionEvent::RegionEntered { object } => {
                format!("Entered excluded region for {}", object)
            }
            MotionEvent::RegionLeft {
                object, corrected, ..
            } => format!("Left excluded region for {} at {}", object, corrected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_categories() {
        assert_eq!(
            PipelineEvent::Lifecycle(LifecycleEvent::Ready).category(),
            EventCategory::Lifecycle
        );
        assert_eq!(
            PipelineEvent::Job(JobEvent::FileReset).category(),
            EventCategory::Job
        );
        assert_eq!(
            PipelineEvent::Motion(MotionEvent::RegionEntered {
                object: "PART_A".to_string()
            })
            .category(),
            EventCategory::Motion
        );
    }

    #[test]
    fn test_event_descriptions() {
        let event = PipelineEvent::Motion(MotionEvent::RegionEntered {
            object: "PART_B".to_string(),
        });
        assert_eq!(event.description(), "Entered excluded region for PART_B");

        let event = PipelineEvent::Job(JobEvent::FileLoaded {
            path: "benchy.gcode".to_string(),
        });
        assert_eq!(event.description(), "Job file loaded: benchy.gcode");
    }
}
