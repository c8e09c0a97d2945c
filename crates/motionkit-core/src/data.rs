//! Data models for tool-head positions
//!
//! This module provides:
//! - 4-axis position tracking (X, Y, Z plus the E extrusion axis)
//! - Component-wise arithmetic used by coordinate-rewriting transforms
//!
//! Positions are plain `Copy` value types; every assignment copies all four
//! components. Transforms must never share mutable position buffers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tool-head position on the three spatial axes plus the extrusion axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
    /// Z-axis position
    pub z: f64,
    /// Extrusion (E) axis position
    pub e: f64,
}

impl Position {
    /// Create a position with the given axis values
    pub fn new(x: f64, y: f64, z: f64, e: f64) -> Self {
        debug_assert!(
            x.is_finite() && y.is_finite() && z.is_finite() && e.is_finite(),
            "Position axes must be finite: x={x}, y={y}, z={z}, e={e}"
        );
        Self { x, y, z, e }
    }

    /// Position with all axes at zero
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Create a position from spatial coordinates with the E axis at zero
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Get all axes as a tuple
    pub fn axes(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.z, self.e)
    }

    /// Re-anchor this target onto a different origin.
    ///
    /// The X, Y and E deltas relative to `from` are re-applied on top of
    /// `onto`; the Z axis is carried over unchanged. This is the continuity
    /// math used when motion resumes after a run of skipped moves: the
    /// command stream's notion of "current position" (`from`) has diverged
    /// from the machine's real position (`onto`), and the next accepted
    /// move must land relative to the machine, not the stream.
    pub fn rebased(self, from: Position, onto: Position) -> Position {
        Position {
            x: self.x - from.x + onto.x,
            y: self.y - from.y + onto.y,
            z: self.z,
            e: self.e - from.e + onto.e,
        }
    }

    /// XY distance to another position
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "X:{:.3} Y:{:.3} Z:{:.3} E:{:.3}",
            self.x, self.y, self.z, self.e
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_default() {
        assert_eq!(Position::default(), Position::zero());
        assert_eq!(Position::zero().axes(), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rebased_keeps_z() {
        let target = Position::new(12.0, 12.0, 0.2, 6.0);
        let from = Position::new(60.0, 50.0, 0.2, 9.0);
        let onto = Position::new(10.0, 10.0, 0.2, 5.0);

        let rebased = target.rebased(from, onto);
        assert_eq!(rebased, Position::new(-38.0, -28.0, 0.2, 2.0));
    }

    #[test]
    fn test_rebased_identity() {
        let target = Position::new(4.0, 5.0, 6.0, 7.0);
        let anchor = Position::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(target.rebased(anchor, anchor), target);
    }

    #[test]
    fn test_distance() {
        let a = Position::xyz(0.0, 0.0, 5.0);
        let b = Position::xyz(3.0, 4.0, 9.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn test_display() {
        let pos = Position::new(1.0, 2.5, 0.2, 10.125);
        assert_eq!(pos.to_string(), "X:1.000 Y:2.500 Z:0.200 E:10.125");
    }
}
