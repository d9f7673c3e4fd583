//! The 4x4 tile grid and the slide/merge/spawn operations on it
//!
//! Every operation here is a pure function of the grid: methods take `&self`
//! and return a new `Grid`, the receiver is never modified.

use std::fmt;

use rand::Rng;

use crate::direction::Direction;

/// Side length of the grid.
pub const SIZE: usize = 4;

/// Value of a cell holding no tile.
pub const EMPTY: u32 = 0;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// One row or column, ordered so merging runs toward index 0.
pub type Line = [u32; SIZE];

/// Fixed-size square grid of tiles. `EMPTY` marks a free cell, every other
/// cell holds a power of two.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u32; SIZE]; SIZE],
}

impl Grid {
    /// A grid with no tiles.
    pub const EMPTY: Grid = Grid {
        cells: [[EMPTY; SIZE]; SIZE],
    };

    /// Build a grid from row-major cell values.
    ///
    /// Every value must be `EMPTY` or a power of two; debug builds assert it.
    pub fn from_rows(cells: [[u32; SIZE]; SIZE]) -> Self {
        debug_assert!(
            cells.iter().flatten().all(|&v| is_tile_value(v)),
            "not a tile value in {:?}",
            cells
        );
        Grid { cells }
    }

    /// Borrow the rows of the grid.
    pub fn rows(&self) -> &[[u32; SIZE]; SIZE] {
        &self.cells
    }

    /// Value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is `>= SIZE`.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    /// Copy of this grid with `(row, col)` set to `value`.
    ///
    /// `value` must be `EMPTY` or a power of two; debug builds assert it.
    pub fn with_cell(&self, row: usize, col: usize, value: u32) -> Grid {
        debug_assert!(is_tile_value(value), "not a tile value: {}", value);
        let mut cells = self.cells;
        cells[row][col] = value;
        Grid { cells }
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == EMPTY {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == EMPTY).count()
    }

    /// Sum of all tile values. Merging conserves it, spawning adds to it.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| v as u64).sum()
    }

    /// Highest tile value on the grid, `EMPTY` for an empty grid.
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Line `index` as seen by a move in `direction`: row for left/right,
    /// column for up/down, back to front for right/down.
    pub fn line(&self, direction: Direction, index: usize) -> Line {
        let mut line = [EMPTY; SIZE];
        for (k, slot) in line.iter_mut().enumerate() {
            let (r, c) = cell_for(direction, index, k);
            *slot = self.cells[r][c];
        }
        line
    }

    fn write_line(&mut self, direction: Direction, index: usize, line: Line) {
        for (k, &value) in line.iter().enumerate() {
            let (r, c) = cell_for(direction, index, k);
            self.cells[r][c] = value;
        }
    }

    /// Slide and merge every line toward `direction`, without spawning.
    ///
    /// Returns the new grid and the score gained from merges. The grid is
    /// returned unchanged (and the gain is 0) when no line can move.
    pub fn shift(&self, direction: Direction) -> (Grid, u64) {
        let mut next = *self;
        let mut gained = 0;
        for index in 0..SIZE {
            let (merged, score) = slide_line(self.line(direction, index));
            next.write_line(direction, index, merged);
            gained += score;
        }
        (next, gained)
    }

    /// Place one random tile (2 with probability 0.9, else 4) on a
    /// uniformly chosen empty cell. A full grid is returned unchanged.
    pub fn with_random_tile<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return *self;
        }
        let (r, c) = empty[rng.gen_range(0..empty.len())];
        self.with_cell(r, c, random_tile_value(rng))
    }

    /// True when no move can change the grid: every cell is filled and no
    /// two horizontally or vertically adjacent tiles are equal.
    pub fn is_terminal(&self) -> bool {
        for r in 0..SIZE {
            for c in 0..SIZE {
                let value = self.cells[r][c];
                if value == EMPTY {
                    return false;
                }
                if c + 1 < SIZE && value == self.cells[r][c + 1] {
                    return false;
                }
                if r + 1 < SIZE && value == self.cells[r + 1][c] {
                    return false;
                }
            }
        }
        true
    }
}

fn is_tile_value(value: u32) -> bool {
    value == EMPTY || value.is_power_of_two()
}

/// Grid coordinates of position `k` along line `index` for `direction`.
fn cell_for(direction: Direction, index: usize, k: usize) -> (usize, usize) {
    let k = if direction.is_reversed() { SIZE - 1 - k } else { k };
    if direction.is_horizontal() {
        (index, k)
    } else {
        (k, index)
    }
}

/// Compact a line toward index 0 and merge equal neighbours once.
///
/// Pairs are consumed left to right, so a tile produced by a merge is never
/// merged again in the same pass: `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`.
/// Returns the new line and the sum of the merged tile values.
pub fn slide_line(line: Line) -> (Line, u64) {
    let filtered: Vec<u32> = line.iter().copied().filter(|&v| v != EMPTY).collect();
    let mut merged = [EMPTY; SIZE];
    let mut len = 0;
    let mut gained = 0u64;
    let mut i = 0;
    while i < filtered.len() {
        if i + 1 < filtered.len() && filtered[i] == filtered[i + 1] {
            let value = filtered[i] * 2;
            merged[len] = value;
            gained += value as u64;
            i += 2;
        } else {
            merged[len] = filtered[i];
            i += 1;
        }
        len += 1;
    }
    (merged, gained)
}

/// Draw the value of a freshly spawned tile.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_bool(TWO_PROBABILITY) {
        2
    } else {
        4
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid({:?})", self.cells)
    }
}

/// Renders one row per line with empty cells left blank.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "|")?;
            for &value in row {
                if value == EMPTY {
                    write!(f, "{:>5}|", "")?;
                } else {
                    write!(f, "{:>5}|", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
