//! # Event Bus Module
//!
//! Provides a unified event bus for decoupled communication between the
//! motion pipeline and the surrounding host.
//!
//! ## Overview
//!
//! The event bus enables publish/subscribe patterns across the host:
//! - Publishers emit typed events without knowing subscribers
//! - Subscribers filter and receive events of interest
//! - Supports both sync handlers and async broadcast receivers
//!
//! ## Usage
//!
//! ```rust,ignore
//! use motionkit_core::event_bus::{event_bus, EventCategory, EventFilter, LifecycleEvent, PipelineEvent};
//!
//! // Subscribe to lifecycle events
//! let subscription = event_bus().subscribe(
//!     EventFilter::Categories(vec![EventCategory::Lifecycle]),
//!     |event| {
//!         if let PipelineEvent::Lifecycle(lifecycle) = event {
//!             println!("Lifecycle event: {:?}", lifecycle);
//!         }
//!     },
//! );
//!
//! // Publish an event
//! event_bus().publish(PipelineEvent::Lifecycle(LifecycleEvent::Ready));
//!
//! // Unsubscribe when done
//! event_bus().unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
