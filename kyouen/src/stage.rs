mod symmetry;

use std::ops::Deref;
use std::str::FromStr;

use rand::Rng;

use crate::{Point, StageError};

/// The character for a stone in a stage string.
pub const STONE: char = '1';
/// The character for a stone that the player has selected.
pub const SELECTED_STONE: char = '2';
/// The character written for empty cells. When reading, any other character is empty, too.
pub const EMPTY: char = '0';

/// The side length of a square grid with `len` cells.
fn grid_size(len: usize) -> Option<usize> {
    let size = (len as f64).sqrt().round() as usize;
    (size > 0 && size.checked_mul(size) == Some(len)).then_some(size)
}

/// Sorts points into the order in which they appear in a stage string.
fn sort_row_major(points: &mut [Point]) {
    points.sort_by_key(|p| (p.y, p.x));
}

/// The stones found on a stage, in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoneSet {
    size: usize,
    stones: Vec<Point>,
}

impl StoneSet {
    /// The side length of the grid the stones were read from.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.stones
    }
}

impl Deref for StoneSet {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.stones
    }
}

/// Reads the stones (the [`STONE`] cells) of a stage string.
///
/// The grid size is recovered from the length of the string, which must
/// therefore be a perfect square. Cell `i * size + j` is the point with
/// `x = j` (column) and `y = i` (row).
pub fn parse(stage: &str) -> Result<StoneSet, StageError> {
    let cells: Vec<char> = stage.chars().collect();
    let size = grid_size(cells.len()).ok_or(StageError::MalformedStage { len: cells.len() })?;

    let mut stones = Vec::new();
    for i in 0..size {
        for j in 0..size {
            if cells[i * size + j] == STONE {
                stones.push(Point::new(j as i32, i as i32));
            }
        }
    }
    Ok(StoneSet { size, stones })
}

/// Like [`parse()`], but only the stones.
pub fn parse_stones(stage: &str) -> Result<Vec<Point>, StageError> {
    parse(stage).map(StoneSet::into_vec)
}

/// The content of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Stone,
    Selected,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => EMPTY,
            Cell::Stone => STONE,
            Cell::Selected => SELECTED_STONE,
        }
    }
}

/// A full board, including the stones the player has selected.
///
/// Both point lists are kept in row-major order, so two stages with the
/// same cells compare equal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stage {
    size: usize,
    stones: Vec<Point>,
    selected: Vec<Point>,
}

impl Stage {
    /// Reads a stage string for a grid with the given side length.
    pub fn with_size(size: usize, text: &str) -> Result<Self, StageError> {
        let len = text.chars().count();
        if size == 0 || size.checked_mul(size) != Some(len) {
            return Err(StageError::MalformedStage { len });
        }

        let mut stones = Vec::new();
        let mut selected = Vec::new();
        for (idx, c) in text.chars().enumerate() {
            let p = Point::new((idx % size) as i32, (idx / size) as i32);
            match c {
                STONE => stones.push(p),
                SELECTED_STONE => selected.push(p),
                _ => {}
            }
        }
        Ok(Self {
            size,
            stones,
            selected,
        })
    }

    /// Creates a stage from point lists, in any order.
    ///
    /// Panics if a point lies outside of the grid.
    pub fn from_points(size: usize, mut stones: Vec<Point>, mut selected: Vec<Point>) -> Self {
        let in_bounds =
            |p: &Point| p.x >= 0 && p.y >= 0 && (p.x as usize) < size && (p.y as usize) < size;
        assert!(stones.iter().chain(&selected).all(in_bounds));
        sort_row_major(&mut stones);
        sort_row_major(&mut selected);
        Self {
            size,
            stones,
            selected,
        }
    }

    /// A board with `num_stones` stones on distinct, uniformly chosen cells.
    ///
    /// Panics if there are more stones than cells.
    pub fn random<R: Rng + ?Sized>(size: usize, num_stones: usize, rng: &mut R) -> Self {
        assert!(
            size.checked_mul(size).is_some_and(|cells| num_stones <= cells),
            "{} stones do not fit on a {}x{} grid",
            num_stones,
            size,
            size
        );
        let stones = rand::seq::index::sample(rng, size * size, num_stones)
            .into_iter()
            .map(|idx| Point::new((idx % size) as i32, (idx / size) as i32))
            .collect();
        Self::from_points(size, stones, Vec::new())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The unselected stones.
    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    /// The stones the player has selected.
    pub fn selected(&self) -> &[Point] {
        &self.selected
    }

    pub fn stone_count(&self) -> usize {
        self.stones.len()
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// The same board with every selected stone turned back into a plain stone.
    pub fn with_selection_cleared(&self) -> Self {
        let stones = self.stones.iter().chain(&self.selected).copied().collect();
        Self::from_points(self.size, stones, Vec::new())
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![Cell::Empty; self.size * self.size];
        for p in &self.stones {
            cells[p.x as usize + p.y as usize * self.size] = Cell::Stone;
        }
        for p in &self.selected {
            cells[p.x as usize + p.y as usize * self.size] = Cell::Selected;
        }
        cells
    }
}

impl FromStr for Stage {
    type Err = StageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        let size = grid_size(len).ok_or(StageError::MalformedStage { len })?;
        Self::with_size(size, s)
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.cells().into_iter().map(Cell::to_char).collect();
        f.write_str(&text)
    }
}

/// Shorthand for creating a [`Stage`] from a string literal.
///
/// This macro is just calling the [`FromStr`] instance of [`Stage`].
/// ```
/// # use kyouen::{stage, Point};
/// let stage = stage!("0000100000000000");
/// assert_eq!(stage.size(), 4);
/// assert_eq!(stage.stones(), &[Point::new(0, 1)]);
/// ```
#[macro_export]
macro_rules! stage {
    ($s:literal) => {
        <$crate::Stage as std::str::FromStr>::from_str($s)
            .expect("Invalid stage given to stage! macro")
    };
}
// The import is for using the macro in other modules
#[allow(unused_imports)]
pub(crate) use stage;
