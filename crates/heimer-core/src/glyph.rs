//! Fixed 5-row box glyphs for the uppercase Latin alphabet.
//!
//! Each glyph is a small binary grid: rows run top to bottom, columns left to
//! right, and every `1` cell becomes one box in the rendered letter.

/// Immutable binary grid describing which cells of a letter are solid.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: &'static [&'static [u8]],
}

impl Glyph {
    const fn new(rows: &'static [&'static [u8]]) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    #[inline]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&flag| flag == 1)
    }

    /// Iterate `(row, col)` of every solid cell in row-major order.
    pub fn on_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &flag)| flag == 1)
                .map(move |(j, _)| (i, j))
        })
    }

    pub fn on_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.iter().filter(|&&f| f == 1).count())
            .sum()
    }
}

static H: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
]);
static E: Glyph = Glyph::new(&[
    &[1, 1, 1],
    &[1, 0, 0],
    &[1, 1, 0],
    &[1, 0, 0],
    &[1, 1, 1],
]);
static I: Glyph = Glyph::new(&[
    &[1, 1, 1],
    &[0, 1, 0],
    &[0, 1, 0],
    &[0, 1, 0],
    &[1, 1, 1],
]);
static M: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[1, 1, 0, 1, 1],
    &[1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
]);
static R: Glyph = Glyph::new(&[
    &[1, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 1, 1, 0],
    &[1, 0, 1, 0],
    &[1, 0, 0, 1],
]);
static N: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[1, 1, 0, 0, 1],
    &[1, 0, 1, 0, 1],
    &[1, 0, 0, 1, 1],
    &[1, 0, 0, 0, 1],
]);
static X: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[0, 1, 0, 1, 0],
    &[0, 0, 1, 0, 0],
    &[0, 1, 0, 1, 0],
    &[1, 0, 0, 0, 1],
]);
static T: Glyph = Glyph::new(&[
    &[1, 1, 1],
    &[0, 1, 0],
    &[0, 1, 0],
    &[0, 1, 0],
    &[0, 1, 0],
]);
static O: Glyph = Glyph::new(&[
    &[0, 1, 1, 1, 0],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[0, 1, 1, 1, 0],
]);
static B: Glyph = Glyph::new(&[
    &[1, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 1, 1, 0],
]);
static D: Glyph = Glyph::new(&[
    &[1, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 0, 0, 1],
    &[1, 1, 1, 0],
]);
static V: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[0, 1, 0, 1, 0],
    &[0, 1, 0, 1, 0],
    &[0, 0, 1, 0, 0],
]);
static P: Glyph = Glyph::new(&[
    &[1, 1, 1, 0],
    &[1, 0, 0, 1],
    &[1, 1, 1, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
]);
static L: Glyph = Glyph::new(&[
    &[1, 0, 0],
    &[1, 0, 0],
    &[1, 0, 0],
    &[1, 0, 0],
    &[1, 1, 1],
]);
static S: Glyph = Glyph::new(&[
    &[0, 1, 1, 1, 0],
    &[1, 0, 0, 0, 0],
    &[0, 1, 1, 1, 0],
    &[0, 0, 0, 0, 1],
    &[0, 1, 1, 1, 0],
]);
static F: Glyph = Glyph::new(&[
    &[1, 1, 1, 1],
    &[1, 0, 0, 0],
    &[1, 1, 1, 0],
    &[1, 0, 0, 0],
    &[1, 0, 0, 0],
]);
static W: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 1, 0, 1],
    &[1, 1, 0, 1, 1],
    &[1, 0, 0, 0, 1],
]);
static A: Glyph = Glyph::new(&[
    &[0, 1, 1, 1, 0],
    &[1, 0, 0, 0, 1],
    &[1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
]);
static C: Glyph = Glyph::new(&[
    &[0, 1, 1, 1, 0],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0],
    &[1, 0, 0, 0, 1],
    &[0, 1, 1, 1, 0],
]);
static G: Glyph = Glyph::new(&[
    &[0, 1, 1, 1, 0],
    &[1, 0, 0, 0, 0],
    &[1, 0, 1, 1, 1],
    &[1, 0, 0, 0, 1],
    &[0, 1, 1, 1, 0],
]);
static U: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 1],
    &[0, 1, 1, 1, 0],
]);
static Y: Glyph = Glyph::new(&[
    &[1, 0, 0, 0, 1],
    &[0, 1, 0, 1, 0],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
    &[0, 0, 1, 0, 0],
]);
static J: Glyph = Glyph::new(&[
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[0, 0, 0, 1],
    &[1, 0, 0, 1],
    &[0, 1, 1, 0],
]);
static K: Glyph = Glyph::new(&[
    &[1, 0, 0, 1],
    &[1, 0, 1, 0],
    &[1, 1, 0, 0],
    &[1, 0, 1, 0],
    &[1, 0, 0, 1],
]);
static Q: Glyph = Glyph::new(&[
    &[0, 1, 1, 1, 0],
    &[1, 0, 0, 0, 1],
    &[1, 0, 1, 0, 1],
    &[1, 0, 0, 1, 1],
    &[0, 1, 1, 1, 1],
]);
static Z: Glyph = Glyph::new(&[
    &[1, 1, 1, 1, 1],
    &[0, 0, 0, 1, 0],
    &[0, 0, 1, 0, 0],
    &[0, 1, 0, 0, 0],
    &[1, 1, 1, 1, 1],
]);

/// Look up a glyph, returning `None` for letters outside the table.
pub fn lookup(letter: char) -> Option<&'static Glyph> {
    let glyph = match letter {
        'A' => &A,
        'B' => &B,
        'C' => &C,
        'D' => &D,
        'E' => &E,
        'F' => &F,
        'G' => &G,
        'H' => &H,
        'I' => &I,
        'J' => &J,
        'K' => &K,
        'L' => &L,
        'M' => &M,
        'N' => &N,
        'O' => &O,
        'P' => &P,
        'Q' => &Q,
        'R' => &R,
        'S' => &S,
        'T' => &T,
        'U' => &U,
        'V' => &V,
        'W' => &W,
        'X' => &X,
        'Y' => &Y,
        'Z' => &Z,
        _ => return None,
    };
    Some(glyph)
}

/// Grid for `letter`; anything outside the table renders as `'H'`.
pub fn shape_of(letter: char) -> &'static Glyph {
    lookup(letter).unwrap_or_else(|| {
        log::debug!("[glyph] no glyph for {:?}; using 'H'", letter);
        &H
    })
}
