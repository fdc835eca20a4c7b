//! Grid, coordinate and direction types.

use serde::Serialize;

use crate::error::{GridError, GridResult};
use crate::game::{Entity, EntityKind};

/// A cell position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: u16,
    /// Y coordinate (row, 0 at the top).
    pub y: u16,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub fn manhattan(self, other: Coord) -> u32 {
        u32::from(self.x.abs_diff(other.x)) + u32::from(self.y.abs_diff(other.y))
    }
}

/// One of the four movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward the bottom row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` unit offset of this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Whether this direction moves along the x axis.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// The world: a fixed-size array of optional entities.
///
/// The grid exclusively owns every entity reachable from its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Width in cells.
    width: u16,
    /// Height in cells.
    height: u16,
    /// Cells stored in row-major order.
    cells: Vec<Option<Entity>>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// Returns `None` if width or height is zero.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let size = usize::from(width) * usize::from(height);
        Some(Self {
            width,
            height,
            cells: vec![None; size],
        })
    }

    /// Width of the grid.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height of the grid.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Check if a coordinate is within the grid.
    #[must_use]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> GridResult<usize> {
        if self.in_bounds(coord) {
            Ok(usize::from(coord.y) * usize::from(self.width) + usize::from(coord.x))
        } else {
            Err(GridError::OutOfBounds {
                coord,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// The neighbor of `coord` in `direction`, or `None` past the edge.
    #[must_use]
    pub fn step(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        let (dx, dy) = direction.delta();
        let x = coord.x.checked_add_signed(i16::from(dx))?;
        let y = coord.y.checked_add_signed(i16::from(dy))?;
        let next = Coord::new(x, y);
        self.in_bounds(next).then_some(next)
    }

    /// The entity at `coord`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn get(&self, coord: Coord) -> GridResult<Option<&Entity>> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx].as_ref())
    }

    /// Mutable access to the entity at `coord`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn get_mut(&mut self, coord: Coord) -> GridResult<Option<&mut Entity>> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx].as_mut())
    }

    /// Kind of the entity at `coord`; `None` for empty or out-of-bounds cells.
    #[must_use]
    pub fn kind_at(&self, coord: Coord) -> Option<EntityKind> {
        self.get(coord).ok().flatten().map(Entity::kind)
    }

    /// Overwrite the cell at `coord`, returning its previous content.
    ///
    /// Callers must have resolved any conflict before replacing one entity
    /// with another.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn set(&mut self, coord: Coord, entity: Option<Entity>) -> GridResult<Option<Entity>> {
        let idx = self.index(coord)?;
        Ok(std::mem::replace(&mut self.cells[idx], entity))
    }

    /// Remove and return the entity at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `coord` is outside the grid.
    pub fn take(&mut self, coord: Coord) -> GridResult<Option<Entity>> {
        let idx = self.index(coord)?;
        Ok(self.cells[idx].take())
    }

    #[allow(clippy::cast_possible_truncation)]
    fn coord_of(width: u16, idx: usize) -> Coord {
        let width = usize::from(width);
        Coord::new((idx % width) as u16, (idx / width) as u16)
    }

    /// Iterate over occupied cells in row-major order (y outer, x inner).
    ///
    /// The order defines which entity acts first within a tick.
    pub fn entities(&self) -> impl Iterator<Item = (Coord, &Entity)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_ref().map(|e| (Self::coord_of(width, idx), e)))
    }

    /// Iterate mutably over occupied cells in row-major order.
    pub fn entities_mut(&mut self) -> impl Iterator<Item = (Coord, &mut Entity)> {
        let width = self.width;
        self.cells
            .iter_mut()
            .enumerate()
            .filter_map(move |(idx, cell)| cell.as_mut().map(|e| (Self::coord_of(width, idx), e)))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Number of entities of the given kind.
    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities().filter(|(_, e)| e.kind() == kind).count()
    }

    /// First position (row-major) holding an entity of the given kind.
    #[must_use]
    pub fn find(&self, kind: EntityKind) -> Option<Coord> {
        self.entities()
            .find(|(_, e)| e.kind() == kind)
            .map(|(coord, _)| coord)
    }
}
