//! overlay-cli
//!
//! Replays recorded pointer streams against a text overlay and prints the resulting overlay state.

// Modules
pub(crate) mod cli;
pub(crate) mod monospace;
pub(crate) mod replay;

// Renames
extern crate nalgebra as na;

fn main() -> anyhow::Result<()> {
    cli::run()
}
