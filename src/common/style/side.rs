//! Cell sides and per-side storage.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One edge of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// All sides in CSS shorthand order.
    pub const ALL: [Side; 4] = [Side::Top, Side::Right, Side::Bottom, Side::Left];

    /// The side of the adjacent cell that shares this edge.
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Right => Side::Left,
            Side::Bottom => Side::Top,
            Side::Left => Side::Right,
        }
    }

    #[inline]
    const fn index(self) -> usize {
        match self {
            Side::Top => 0,
            Side::Right => 1,
            Side::Bottom => 2,
            Side::Left => 3,
        }
    }

    /// Lowercase name, as used in CSS property suffixes.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// A value for each of the four sides of a cell.
///
/// # Examples
///
/// ```rust
/// use sheetgrid::common::{Side, SideMap};
///
/// let mut flags = SideMap::splat(true);
/// flags[Side::Left] = false;
/// assert!(flags[Side::Top]);
/// assert!(!flags[Side::Left]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SideMap<T>([T; 4]);

impl<T> SideMap<T> {
    /// Build from explicit values in top, right, bottom, left order.
    #[inline]
    pub fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self([top, right, bottom, left])
    }

    /// Iterate `(side, value)` pairs in top, right, bottom, left order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.0.iter())
    }

    /// Apply `f` to every side's value.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> SideMap<U> {
        SideMap(self.0.map(f))
    }
}

impl<T: Copy> SideMap<T> {
    /// The same value on every side.
    #[inline]
    pub const fn splat(value: T) -> Self {
        Self([value; 4])
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    #[inline]
    fn index(&self, side: Side) -> &T {
        &self.0[side.index()]
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    #[inline]
    fn index_mut(&mut self, side: Side) -> &mut T {
        &mut self.0[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for side in Side::ALL {
            assert_ne!(side.opposite(), side);
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    #[test]
    fn test_side_map_order() {
        let map = SideMap::new(1, 2, 3, 4);
        let pairs: Vec<_> = map.iter().map(|(side, v)| (side, *v)).collect();
        assert_eq!(
            pairs,
            vec![(Side::Top, 1), (Side::Right, 2), (Side::Bottom, 3), (Side::Left, 4)]
        );
    }

    #[test]
    fn test_side_map_map_keeps_sides() {
        let map = SideMap::new(1, 2, 3, 4).map(|v| v * 10);
        assert_eq!(map[Side::Top], 10);
        assert_eq!(map[Side::Left], 40);
    }
}
