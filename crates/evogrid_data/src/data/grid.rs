use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell on the square world grid.
///
/// Coordinates are signed so that perception windows may extend past the
/// world edge without wrapping; only cells with `0 <= x, y < world_size`
/// exist in the world.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// King's-move distance: `max(|dx|, |dy|)`.
    #[inline]
    #[must_use]
    pub fn chebyshev(self, other: Cell) -> u32 {
        let dx = (i64::from(self.x) - i64::from(other.x)).unsigned_abs();
        let dy = (i64::from(self.y) - i64::from(other.y)).unsigned_abs();
        dx.max(dy) as u32
    }

    #[inline]
    #[must_use]
    pub fn offset(self, dx: i32, dy: i32) -> Cell {
        Cell::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    #[inline]
    pub fn in_bounds(self, world_size: u32) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as u32) < world_size && (self.y as u32) < world_size
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
