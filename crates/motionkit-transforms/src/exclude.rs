//! Object-exclusion move filter
//!
//! Suppresses motion for moves that belong to an excluded object while
//! keeping position bookkeeping consistent, so motion resumes without a
//! jump once a non-excluded object starts printing again.
//!
//! The filter wraps the transform chain's terminal at the host's `Ready`
//! phase, which makes it the last-applied transform: it observes
//! fully-transformed positions and nothing downstream ever sees a
//! suppressed move.

use std::collections::HashSet;
use std::sync::Arc;

use motionkit_core::event_bus::{
    EventBus, EventCategory, EventFilter, JobEvent, LifecycleEvent, MotionEvent, PipelineEvent,
    SubscriptionId,
};
use motionkit_core::{
    MoveTransform, Position, Result, ThreadSafe, TransformChain, TransformError, TransformHandle,
};
use motionkit_settings::ExcludeSettings;

/// Streaming filter that drops moves belonging to excluded objects
///
/// The filter tracks three positions:
/// - `last_position` — the position reported to the rest of the system,
///   whatever the most recent move asked for (or was corrected to);
/// - `last_position_extruded` — the position of the most recent move that
///   actually reached the downstream transform, i.e. the real machine
///   position;
/// - `last_position_excluded` — the position of the most recent suppressed
///   move, i.e. where the command stream believes the tool head is while
///   motion is being skipped.
///
/// When motion resumes after a run of suppressed moves, the next accepted
/// move is rebased so its X/Y/E delta lands on the real machine position
/// instead of the stream's imagined one. Z is forwarded unmodified:
/// excluded regions are assumed co-planar with the surrounding print.
pub struct ExcludeFilter {
    next: Option<TransformHandle>,
    events: Option<Arc<EventBus>>,
    settings: ExcludeSettings,
    current_object: String,
    excluded: HashSet<String>,
    in_excluded_region: bool,
    last_position: Position,
    last_position_extruded: Position,
    last_position_excluded: Position,
}

impl ExcludeFilter {
    /// Create a filter with default settings and no downstream bound
    pub fn new() -> Self {
        Self::with_settings(ExcludeSettings::default())
    }

    /// Create a filter with the given settings and no downstream bound
    pub fn with_settings(settings: ExcludeSettings) -> Self {
        Self {
            next: None,
            events: None,
            settings,
            current_object: String::new(),
            excluded: HashSet::new(),
            in_excluded_region: false,
            last_position: Position::zero(),
            last_position_extruded: Position::zero(),
            last_position_excluded: Position::zero(),
        }
    }

    /// Bind the downstream transform this filter forwards accepted moves to
    pub fn bind_next(&mut self, next: TransformHandle) {
        self.next = Some(next);
    }

    /// Whether a downstream transform is bound
    pub fn is_bound(&self) -> bool {
        self.next.is_some()
    }

    /// Publish motion diagnostics to this bus
    pub fn set_event_bus(&mut self, bus: Arc<EventBus>) {
        self.events = Some(bus);
    }

    /// Fetch the authoritative position from downstream and sync bookkeeping.
    ///
    /// Must be called before the first move to establish a baseline. Fails
    /// only if no downstream transform is bound or it cannot report.
    pub fn get_position(&mut self) -> Result<Position> {
        let pos = self.downstream()?.get_position()?;
        self.last_position = pos;
        Ok(pos)
    }

    /// Submit a move, deciding whether it is forwarded, suppressed, or
    /// forwarded with a continuity correction.
    pub fn move_to(&mut self, newpos: Position, speed: f64) -> Result<()> {
        match (self.is_move_excluded(), self.in_excluded_region) {
            (false, false) => self.normal_move(newpos, speed),
            (true, false) => {
                self.enter_excluded_region(newpos);
                Ok(())
            }
            (true, true) => {
                self.ignore_move(newpos);
                Ok(())
            }
            (false, true) => self.leave_excluded_region(newpos, speed),
        }
    }

    /// Mark the start of moves belonging to the named object
    pub fn begin_object(&mut self, name: &str) {
        self.current_object = name.to_uppercase();
    }

    /// Mark the end of the current object's moves
    pub fn end_object(&mut self) {
        self.current_object.clear();
    }

    /// Exclude the named object's moves from physical motion. Idempotent.
    pub fn exclude_object(&mut self, name: &str) {
        let name = name.to_uppercase();
        if self.excluded.insert(name.clone()) {
            tracing::debug!(object = %name, "object excluded");
        }
    }

    /// Clear the excluded-object set.
    ///
    /// The current object and any in-progress suppression are left alone;
    /// they converge through the normal move flow.
    pub fn reset_excluded(&mut self) {
        if !self.excluded.is_empty() {
            tracing::debug!(count = self.excluded.len(), "excluded object set cleared");
        }
        self.excluded.clear();
    }

    /// Name of the object the upcoming moves belong to (empty if none)
    pub fn current_object(&self) -> &str {
        &self.current_object
    }

    /// Whether the named object is excluded
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded.contains(&name.to_uppercase())
    }

    /// Number of excluded objects
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Whether the filter is currently suppressing motion
    pub fn in_excluded_region(&self) -> bool {
        self.in_excluded_region
    }

    /// Last position reported to the rest of the system
    pub fn last_position(&self) -> Position {
        self.last_position
    }

    /// Position of the most recent move forwarded downstream
    pub fn last_position_extruded(&self) -> Position {
        self.last_position_extruded
    }

    /// Position of the most recent suppressed move
    pub fn last_position_excluded(&self) -> Position {
        self.last_position_excluded
    }

    fn is_move_excluded(&self) -> bool {
        // An empty current object is never a member of the excluded set.
        !self.current_object.is_empty() && self.excluded.contains(&self.current_object)
    }

    fn downstream(&mut self) -> Result<&mut TransformHandle> {
        self.next
            .as_mut()
            .ok_or_else(|| TransformError::MissingBaseline.into())
    }

    fn normal_move(&mut self, newpos: Position, speed: f64) -> Result<()> {
        self.last_position_extruded = newpos;
        self.last_position = newpos;
        self.downstream()?.move_to(newpos, speed)
    }

    fn ignore_move(&mut self, newpos: Position) {
        self.last_position_excluded = newpos;
        self.last_position = newpos;
    }

    fn enter_excluded_region(&mut self, newpos: Position) {
        if self.settings.log_transitions {
            tracing::info!(object = %self.current_object, "entering excluded object region");
        }
        self.in_excluded_region = true;
        self.last_position_excluded = newpos;
        self.last_position = newpos;
        self.publish_motion(MotionEvent::RegionEntered {
            object: self.current_object.clone(),
        });
    }

    fn leave_excluded_region(&mut self, newpos: Position, speed: f64) -> Result<()> {
        let corrected = newpos.rebased(self.last_position_excluded, self.last_position_extruded);
        if self.settings.log_transitions {
            tracing::info!(
                object = %self.current_object,
                commanded = %newpos,
                corrected = %corrected,
                "leaving excluded region, resuming motion"
            );
            tracing::debug!(
                last = %self.last_position,
                extruded = %self.last_position_extruded,
                excluded = %self.last_position_excluded,
                "positions at region exit"
            );
        }
        self.last_position = corrected;
        self.last_position_extruded = corrected;
        self.downstream()?.move_to(corrected, speed)?;
        self.in_excluded_region = false;
        self.publish_motion(MotionEvent::RegionLeft {
            object: self.current_object.clone(),
            commanded: newpos,
            corrected,
        });
        Ok(())
    }

    fn publish_motion(&self, event: MotionEvent) {
        if let Some(bus) = &self.events {
            bus.publish(PipelineEvent::Motion(event)).ok();
        }
    }
}

impl Default for ExcludeFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTransform for ExcludeFilter {
    fn get_position(&mut self) -> Result<Position> {
        ExcludeFilter::get_position(self)
    }

    fn move_to(&mut self, newpos: Position, speed: f64) -> Result<()> {
        ExcludeFilter::move_to(self, newpos, speed)
    }
}

impl std::fmt::Debug for ExcludeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExcludeFilter")
            .field("current_object", &self.current_object)
            .field("excluded", &self.excluded)
            .field("in_excluded_region", &self.in_excluded_region)
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Chain link that delegates to a shared [`ExcludeFilter`]
///
/// The filter state is shared between the move stream (through this link)
/// and the command/event layer; the lock serializes the two.
pub struct SharedExcludeFilter {
    inner: ThreadSafe<ExcludeFilter>,
}

impl SharedExcludeFilter {
    /// Wrap a shared filter handle as a chain link
    pub fn new(inner: ThreadSafe<ExcludeFilter>) -> Self {
        Self { inner }
    }
}

impl MoveTransform for SharedExcludeFilter {
    fn get_position(&mut self) -> Result<Position> {
        self.inner.lock().get_position()
    }

    fn move_to(&mut self, newpos: Position, speed: f64) -> Result<()> {
        self.inner.lock().move_to(newpos, speed)
    }
}

/// Install the filter as the chain's terminal transform.
///
/// The previous terminal becomes the filter's downstream link, making the
/// filter the last-applied transform. Fails with a missing-baseline error
/// if the chain has no transform to wrap; that is fatal during setup.
pub fn install(filter: &ThreadSafe<ExcludeFilter>, chain: &mut TransformChain) -> Result<()> {
    if filter.lock().is_bound() {
        tracing::warn!("exclude filter already installed, skipping re-registration");
        return Ok(());
    }
    if !chain.is_bound() {
        return Err(TransformError::MissingBaseline.into());
    }
    let Some(previous) = chain.set_transform(Box::new(SharedExcludeFilter::new(filter.clone())))
    else {
        return Err(TransformError::MissingBaseline.into());
    };
    filter.lock().bind_next(previous);
    Ok(())
}

/// Wire the filter to the host lifecycle.
///
/// Subscribes to the event bus so the filter installs itself into the
/// chain when the host signals `Ready` (after every transform has had its
/// chance to register, so the filter ends up last), and clears the
/// excluded-object set when the job file is reset. Motion diagnostics are
/// published back to the same bus.
///
/// Returns the two subscription ids for later teardown.
pub fn attach_to_host(
    filter: ThreadSafe<ExcludeFilter>,
    chain: ThreadSafe<TransformChain>,
    bus: &Arc<EventBus>,
) -> (SubscriptionId, SubscriptionId) {
    filter.lock().set_event_bus(bus.clone());

    let ready_filter = filter.clone();
    let ready_chain = chain.clone();
    let ready_id = bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Lifecycle]),
        move |event| {
            if let PipelineEvent::Lifecycle(LifecycleEvent::Ready) = event {
                let mut chain = ready_chain.lock();
                if let Err(error) = install(&ready_filter, &mut chain) {
                    tracing::error!(%error, "failed to install exclude filter into transform chain");
                }
            }
        },
    );

    let reset_filter = filter;
    let reset_id = bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Job]),
        move |event| {
            if let PipelineEvent::Job(JobEvent::FileReset) = event {
                reset_filter.lock().reset_excluded();
            }
        },
    );

    (ready_id, reset_id)
}
