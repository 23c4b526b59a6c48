//! Generator for the Zobrist key table a board-hashing engine compiles in as
//! a constant. For background on the hashing scheme, see [Zobrist hashing].
//!
//! [Zobrist hashing]: https://www.chessprogramming.org/Zobrist_Hashing

pub mod table;
