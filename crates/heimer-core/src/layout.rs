//! Cell placement for box glyphs.
//!
//! Column positions are hand-tuned per letter so that glyphs of different
//! widths look centered; they are not derived from the column count.

use crate::constants::{CELL_SIZE, GLYPH_BASELINE};
use crate::glyph::shape_of;
use glam::Vec3;
use smallvec::SmallVec;

/// Up to 5x5 solid cells per glyph.
pub type CellPositions = SmallVec<[Vec3; 25]>;

pub const WIDE_COLUMNS: [f32; 5] = [-1.0, -0.5, 0.0, 0.5, 1.0];
pub const X_COLUMNS: [f32; 5] = [-1.0, -0.75, -0.25, 0.25, 0.5];
pub const FOUR_COLUMNS: [f32; 4] = [-1.0, -0.5, 0.0, 0.5];

#[inline]
pub fn is_wide(letter: char) -> bool {
    matches!(
        letter,
        'H' | 'N' | 'M' | 'S' | 'W' | 'A' | 'C' | 'G' | 'U' | 'Y' | 'O' | 'Q' | 'Z'
    )
}

#[inline]
pub fn is_four_column(letter: char) -> bool {
    matches!(letter, 'R' | 'F' | 'J' | 'K')
}

/// Amount subtracted from `col * 0.5` for letters without an override table.
pub fn centering_offset(letter: char) -> f32 {
    match letter {
        'T' | 'I' => 1.0,
        'E' | 'L' => 0.5,
        'R' | 'F' | 'J' | 'K' => 1.5,
        'X' => 1.0,
        c if is_wide(c) => 1.0,
        _ => 0.75,
    }
}

/// Horizontal position of column `col` inside `letter`.
pub fn column_x(letter: char, col: usize) -> f32 {
    let table: &[f32] = match letter {
        c if is_wide(c) => &WIDE_COLUMNS,
        'X' => &X_COLUMNS,
        c if is_four_column(c) => &FOUR_COLUMNS,
        _ => &[],
    };
    table
        .get(col)
        .copied()
        .unwrap_or_else(|| col as f32 * CELL_SIZE - centering_offset(letter))
}

/// Vertical position of `row` in a glyph of `rows` rows; row 0 is the top.
#[inline]
pub fn row_y(rows: usize, row: usize) -> f32 {
    (rows as f32 - 1.0 - row as f32) * CELL_SIZE - GLYPH_BASELINE
}

/// One `(x, y, 0)` per solid cell of `letter`, in row-major order.
pub fn cell_positions(letter: char) -> CellPositions {
    let glyph = shape_of(letter);
    let rows = glyph.rows();
    glyph
        .on_cells()
        .map(|(i, j)| Vec3::new(column_x(letter, j), row_y(rows, i), 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_letters_use_generic_offset() {
        assert_eq!(column_x('T', 0), -1.0);
        assert_eq!(column_x('T', 2), 0.0);
        assert_eq!(column_x('E', 0), -0.5);
        assert_eq!(column_x('B', 3), 0.75);
    }

    #[test]
    fn rows_are_flipped_bottom_up() {
        assert_eq!(row_y(5, 0), 1.0);
        assert_eq!(row_y(5, 4), -1.0);
    }
}
