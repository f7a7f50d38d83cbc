//! Genres command handler.

use anyhow::Result;
use hype_core::catalog::GenreKind;

pub fn list() -> Result<()> {
    for genre in GenreKind::all() {
        println!("{} {:<18} {}", genre.emoji(), genre.id(), genre.name());
        println!("  {}", genre.description());
    }
    Ok(())
}
