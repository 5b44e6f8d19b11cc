use once_cell::sync::Lazy;

use super::Square;

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = KING_DELTAS;

fn targets_for(deltas: &[(isize, isize)]) -> Vec<Vec<Square>> {
    Square::all()
        .map(|from| {
            deltas
                .iter()
                .filter_map(|&(dr, df)| from.offset(dr, df))
                .collect()
        })
        .collect()
}

/// On-board knight destinations per origin square index.
pub(crate) static KNIGHT_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| targets_for(&KNIGHT_DELTAS));

/// On-board king step destinations per origin square index.
pub(crate) static KING_TARGETS: Lazy<Vec<Vec<Square>>> =
    Lazy::new(|| targets_for(&KING_DELTAS));
