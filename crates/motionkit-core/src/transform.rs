//! Move-transform chain
//!
//! A move transform is one link in a chain that receives a target position
//! and speed and either forwards it, adapts it, or withholds it before it
//! reaches the next link. The chain is composed by decoration: a transform
//! that registers itself takes ownership of the previous terminal and
//! becomes the new terminal, so the last registration is the last-applied
//! transform.
//!
//! Registration is an explicit exchange resolved once at the host's `Ready`
//! phase rather than an artifact of module load order.

use crate::data::Position;
use crate::error::{Result, TransformError};

/// A link in the motion-transform chain
///
/// Implementors receive fully-absolute 4-axis target positions with a speed
/// and either execute them (terminal transforms) or adapt and forward them
/// to the next link. A transform that wraps another must satisfy this same
/// interface so the chain composes transparently.
pub trait MoveTransform: Send {
    /// Report the authoritative current position.
    ///
    /// For wrapping transforms this is fetched from the next link; for
    /// terminal transforms it is the machine position itself.
    fn get_position(&mut self) -> Result<Position>;

    /// Accept a target position and speed.
    ///
    /// Returns an error if the move is refused (for example, out of the
    /// machine's travel). Errors propagate to the caller unmodified.
    fn move_to(&mut self, newpos: Position, speed: f64) -> Result<()>;
}

/// Owned transform link
pub type TransformHandle = Box<dyn MoveTransform>;

/// The motion-transform chain
///
/// Holds the current terminal transform, i.e. the first link every move
/// passes through. `set_transform` exchanges the terminal: the new transform
/// is installed and the previous one is handed back so the caller can bind
/// it as its downstream link.
#[derive(Default)]
pub struct TransformChain {
    terminal: Option<TransformHandle>,
}

impl TransformChain {
    /// Create an empty chain with no transform bound
    pub fn new() -> Self {
        Self { terminal: None }
    }

    /// Install a new terminal transform, returning the previous one.
    ///
    /// The returned transform (if any) must be bound as the new terminal's
    /// downstream link, otherwise its segment of the chain is lost.
    #[must_use = "the previous terminal must become the new transform's downstream link"]
    pub fn set_transform(&mut self, transform: TransformHandle) -> Option<TransformHandle> {
        self.terminal.replace(transform)
    }

    /// Whether any transform is bound
    pub fn is_bound(&self) -> bool {
        self.terminal.is_some()
    }

    /// Report the current position from the terminal transform
    pub fn get_position(&mut self) -> Result<Position> {
        match self.terminal.as_mut() {
            Some(t) => t.get_position(),
            None => Err(TransformError::MissingBaseline.into()),
        }
    }

    /// Submit a move to the terminal transform
    pub fn move_to(&mut self, newpos: Position, speed: f64) -> Result<()> {
        match self.terminal.as_mut() {
            Some(t) => t.move_to(newpos, speed),
            None => Err(TransformError::MissingBaseline.into()),
        }
    }
}

impl std::fmt::Debug for TransformChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformChain")
            .field("bound", &self.is_bound())
            .finish()
    }
}

/// Terminal transform that accepts every move
///
/// Tracks the last commanded position and reports it back. Useful as a
/// chain terminus in tests and benchmarks, or as a stand-in while the real
/// kinematics layer is not connected.
#[derive(Debug, Default)]
pub struct NoOpTransform {
    position: Position,
}

impl NoOpTransform {
    /// Create a no-op transform starting at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a no-op transform reporting the given position
    pub fn with_position(position: Position) -> Self {
        Self { position }
    }
}

impl MoveTransform for NoOpTransform {
    fn get_position(&mut self) -> Result<Position> {
        Ok(self.position)
    }

    fn move_to(&mut self, newpos: Position, _speed: f64) -> Result<()> {
        self.position = newpos;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_chain_has_no_baseline() {
        let mut chain = TransformChain::new();
        assert!(!chain.is_bound());
        assert!(chain.get_position().unwrap_err().is_missing_baseline());
        assert!(chain
            .move_to(Position::xyz(1.0, 2.0, 3.0), 100.0)
            .unwrap_err()
            .is_missing_baseline());
    }

    #[test]
    fn test_set_transform_returns_previous() {
        let mut chain = TransformChain::new();
        let first = chain.set_transform(Box::new(NoOpTransform::new()));
        assert!(first.is_none());

        let second = chain.set_transform(Box::new(NoOpTransform::with_position(Position::xyz(
            1.0, 1.0, 1.0,
        ))));
        assert!(second.is_some());
        assert!(chain.is_bound());
    }

    #[test]
    fn test_chain_delegates_to_terminal() {
        let mut chain = TransformChain::new();
        let _ = chain.set_transform(Box::new(NoOpTransform::new()));

        let target = Position::new(5.0, 6.0, 0.3, 2.5);
        chain.move_to(target, 120.0).unwrap();
        assert_eq!(chain.get_position().unwrap(), target);
    }

    #[test]
    fn test_noop_reports_last_commanded() {
        let mut noop = NoOpTransform::with_position(Position::xyz(9.0, 9.0, 9.0));
        assert_eq!(noop.get_position().unwrap(), Position::xyz(9.0, 9.0, 9.0));

        noop.move_to(Position::zero(), 50.0).unwrap();
        assert_eq!(noop.get_position().unwrap(), Position::zero());
    }
}
