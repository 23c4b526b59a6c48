//! Generation and emission of the `PIECE_SQUARE_TO_HASH` key table.
//!
//! Zobrist hashing XOR-combines one independent random key per
//! (piece, square) occupancy fact of a position, plus auxiliary keys for
//! state not tied to occupancy. The table generated here has one row per
//! piece-identity code and one column per square; reserved rows carry keys
//! for side-to-move, en-passant file and castling rights encoding on the
//! consumer side.

use itertools::Itertools;
use rand::RngCore;

/// A single hash key fragment. The keys for all occupancy facts of a
/// position are XOR-combined into its hash.
pub type Key = u64;

/// Number of piece-identity codes, reserved slots included.
pub const PIECE_CODES: usize = 16;

/// Number of board squares.
pub const BOARD_SQUARES: usize = 64;

/// Row labels, positionally aligned with table rows. Sized by the same
/// constant as the matrix, so label count and row count cannot drift apart.
/// Reserved rows are generated and emitted like the rest; their keys have no
/// piece meaning.
pub const ROW_LABELS: [&str; PIECE_CODES] = [
    "[RESERVED FOR STM AND EN_PASSANT FILE]",
    "BlackPawn",
    "BlackKnight",
    "BlackBishop",
    "BlackRook",
    "BlackQueen",
    "BlackKing",
    "[RESERVED FOR CASTLING RIGHTS]",
    "[RESERVED, NOT USED]",
    "WhitePawn",
    "WhiteKnight",
    "WhiteBishop",
    "WhiteRook",
    "WhiteQueen",
    "WhiteKing",
    "[RESERVED, NOT USED]",
];

/// Draws 64-bit candidates from `rng` until one has more than 2 set bits and
/// returns it.
///
/// Keys with very few set bits preserve too much structure under XOR and
/// raise the collision rate across similar positions, so they are discarded.
/// Candidates with popcount <= 2 are a vanishing fraction of the 64-bit
/// space; the loop needs no retry cap.
pub fn generate_key(rng: &mut impl RngCore) -> Key {
    loop {
        let candidate = rng.next_u64();
        if candidate.count_ones() > 2 {
            return candidate;
        }
    }
}

/// The full key matrix: [`PIECE_CODES`] rows in [`ROW_LABELS`] order, each
/// with [`BOARD_SQUARES`] columns in square order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZobristTable {
    rows: [[Key; BOARD_SQUARES]; PIECE_CODES],
}

impl ZobristTable {
    /// Fills the table row by row, each row square 0 through 63.
    ///
    /// The consuming engine indexes the emitted constant positionally, so
    /// this order is part of the output contract and must not change.
    #[must_use]
    pub fn generate(rng: &mut impl RngCore) -> Self {
        let mut rows = [[0; BOARD_SQUARES]; PIECE_CODES];
        for row in &mut rows {
            for key in row.iter_mut() {
                *key = generate_key(rng);
            }
        }
        Self { rows }
    }

    /// Returns the key for a (piece code, square) pair, mirroring
    /// `PIECE_SQUARE_TO_HASH[piece][square]` on the consumer side.
    #[must_use]
    pub const fn key(&self, piece_code: usize, square: usize) -> Key {
        self.rows[piece_code][square]
    }

    /// Renders the table as the `PIECE_SQUARE_TO_HASH` constant declaration:
    /// a comment line with the row label, then the row's 64 keys as
    /// comma-separated hex literals, for each row in generation order.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        result.push_str(&format!(
            "pub const PIECE_SQUARE_TO_HASH: [[u64; {BOARD_SQUARES}]; {PIECE_CODES}] = [\n"
        ));
        for (label, row) in ROW_LABELS.iter().zip(&self.rows) {
            let keys = row.iter().map(|key| format!("{key:#x}")).join(", ");
            result.push_str(&format!("    // {label}\n"));
            result.push_str(&format!("    [{keys}],\n"));
        }
        result.push_str("];\n");
        result
    }
}
