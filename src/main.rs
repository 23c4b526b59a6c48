//! Prints a freshly generated Zobrist key table to standard output as a
//! complete Rust constant declaration, intended to be redirected into a
//! source file of the consuming engine. No seed is fixed: every run yields a
//! new table.

use std::io::{self, Write};

use anyhow::Result;
use zobrist_codegen::table::ZobristTable;

fn main() -> Result<()> {
    let table = ZobristTable::generate(&mut rand::thread_rng());
    io::stdout().write_all(table.serialize().as_bytes())?;
    Ok(())
}
