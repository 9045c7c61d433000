// Host-side tests for the glyph table and the per-letter layout tables.

use heimer_core::glyph::{lookup, shape_of};
use heimer_core::layout::*;

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[test]
fn every_letter_has_a_five_row_glyph() {
    for c in ALPHABET.chars() {
        let g = lookup(c).unwrap_or_else(|| panic!("missing glyph for {c}"));
        assert_eq!(g.rows(), 5, "rows for {c}");
        assert!((3..=5).contains(&g.cols()), "cols for {c}");
        assert!(g.on_count() > 0, "empty glyph {c}");
    }
}

#[test]
fn shape_of_is_deterministic() {
    for c in ALPHABET.chars() {
        assert!(std::ptr::eq(shape_of(c), shape_of(c)));
        assert_eq!(shape_of(c), shape_of(c));
    }
}

#[test]
fn unknown_letters_fall_back_to_h() {
    for c in ['1', 'h', '!', ' ', 'É', '☃'] {
        assert!(lookup(c).is_none(), "{c:?} unexpectedly in table");
        assert_eq!(shape_of(c), shape_of('H'));
    }
}

#[test]
fn h_grid_matches_reference() {
    let h = shape_of('H');
    let expected = [
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
        [1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1],
        [1, 0, 0, 0, 1],
    ];
    for (i, row) in expected.iter().enumerate() {
        for (j, &flag) in row.iter().enumerate() {
            assert_eq!(h.is_on(i, j), flag == 1, "H[{i}][{j}]");
        }
    }
    assert!(!h.is_on(5, 0));
    assert!(!h.is_on(0, 5));
}

#[test]
fn wide_letters_use_uniform_five_column_spread() {
    for c in "HNMSWACGUYOQZ".chars() {
        for (j, expected) in [-1.0, -0.5, 0.0, 0.5, 1.0].into_iter().enumerate() {
            assert_eq!(column_x(c, j), expected, "{c} column {j}");
        }
    }
}

#[test]
fn x_uses_diagonal_balance_offsets() {
    for (j, expected) in [-1.0, -0.75, -0.25, 0.25, 0.5].into_iter().enumerate() {
        assert_eq!(column_x('X', j), expected, "X column {j}");
    }
}

#[test]
fn four_column_letters_use_shared_offsets() {
    for c in "RFJK".chars() {
        for (j, expected) in [-1.0, -0.5, 0.0, 0.5].into_iter().enumerate() {
            assert_eq!(column_x(c, j), expected, "{c} column {j}");
        }
    }
}

#[test]
fn generic_offsets_per_letter_group() {
    assert_eq!(centering_offset('T'), 1.0);
    assert_eq!(centering_offset('I'), 1.0);
    assert_eq!(centering_offset('E'), 0.5);
    assert_eq!(centering_offset('L'), 0.5);
    for c in "BDPV".chars() {
        assert_eq!(centering_offset(c), 0.75, "{c}");
    }
    // V has five columns but no override table
    assert_eq!(column_x('V', 4), 1.25);
}

#[test]
fn cell_positions_follow_grid() {
    let cells = cell_positions('I');
    assert_eq!(cells.len(), shape_of('I').on_count());
    // top bar of I: row 0 -> y = 1, columns at -1, -0.5, 0
    assert_eq!(cells[0].to_array(), [-1.0, 1.0, 0.0]);
    assert_eq!(cells[1].to_array(), [-0.5, 1.0, 0.0]);
    assert_eq!(cells[2].to_array(), [0.0, 1.0, 0.0]);
    // stem cell at row 1 -> y = 0.5
    assert_eq!(cells[3].to_array(), [-0.5, 0.5, 0.0]);
    // bottom bar at y = -1
    assert!(cells[cells.len() - 3..].iter().all(|c| c.y == -1.0));
    assert!(cells.iter().all(|c| c.z == 0.0));
}

#[test]
fn unknown_letter_keeps_generic_offset_on_h_grid() {
    let cells = cell_positions('7');
    assert_eq!(cells.len(), shape_of('H').on_count());
    assert_eq!(cells[0].x, -0.75);
    assert_eq!(cells[1].x, 1.25);
}
