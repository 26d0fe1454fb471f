//! Direction-indexed extraction of grid lines
//!
//! A line is one full row or column traversal ordered so that index 0 is
//! the cell nearest the edge tiles collapse toward. Each direction fixes a
//! set of starting cells on its target edge and a step offset pointing away
//! from that edge: an upward move starts at row 0 and steps downward, which
//! reads the column top-first. The offset signs look inverted in isolation;
//! they are correct for edge-first ordering.

/// One of the four orthogonal move directions
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Direction {
    /// Collapse tiles toward row 0
    Up,
    /// Collapse tiles toward the last row
    Down,
    /// Collapse tiles toward column 0
    Left,
    /// Collapse tiles toward the last column
    Right,
}

impl Direction {
    /// All four directions in declaration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Per-step (row, col) offset walking a line from its starting cell
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Up => [1, 0],
            Self::Down => [-1, 0],
            Self::Left => [0, 1],
            Self::Right => [0, -1],
        }
    }

    /// Number of lines this direction produces on a height x width grid
    pub const fn line_count(self, height: usize, width: usize) -> usize {
        match self {
            Self::Up | Self::Down => width,
            Self::Left | Self::Right => height,
        }
    }

    /// Number of cells in each of this direction's lines
    pub const fn line_length(self, height: usize, width: usize) -> usize {
        match self {
            Self::Up | Self::Down => height,
            Self::Left | Self::Right => width,
        }
    }
}

/// Starting cell of every line for a direction, one per line
///
/// Vertical moves start one line per column on the target edge row;
/// horizontal moves start one line per row on the target edge column.
pub fn starting_cells(direction: Direction, height: usize, width: usize) -> Vec<[usize; 2]> {
    match direction {
        Direction::Up => (0..width).map(|col| [0, col]).collect(),
        Direction::Down => (0..width)
            .map(|col| [height.saturating_sub(1), col])
            .collect(),
        Direction::Left => (0..height).map(|row| [row, 0]).collect(),
        Direction::Right => (0..height)
            .map(|row| [row, width.saturating_sub(1)])
            .collect(),
    }
}

/// Coordinates of every cell of every line, edge-first
///
/// Walks `line_length` steps from each starting cell along the direction
/// offset. Across all lines every cell of the grid is visited exactly once.
pub fn lines(direction: Direction, height: usize, width: usize) -> Vec<Vec<[usize; 2]>> {
    let [row_step, col_step] = direction.offset();
    let steps = direction.line_length(height, width) as i32;

    starting_cells(direction, height, width)
        .into_iter()
        .map(|[start_row, start_col]| {
            (0..steps)
                .map(|step| {
                    [
                        (start_row as i32 + step * row_step) as usize,
                        (start_col as i32 + step * col_step) as usize,
                    ]
                })
                .collect()
        })
        .collect()
}
