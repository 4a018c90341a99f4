//! Text rendering of a strategy
//!
//! Consumes only the public contract of [`Strategy`] (height and
//! per-level edge classification); the core types know nothing about
//! presentation.

use super::{EdgeKind, Strategy};

/// Glyph set for [`ascii_art`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyphs {
    /// Box-drawing diagonals (`╱╲`)
    Unicode,
    /// Plain ASCII slashes
    Ascii,
}

/// Render a strategy as slash-art, one row per internal level
///
/// Each node position is a two-character cell; rows are centred by
/// padding both sides. The single-node strategy renders as the empty
/// string.
pub fn ascii_art(strategy: &Strategy, glyphs: Glyphs) -> String {
    let (l, r, lr, nil) = match glyphs {
        Glyphs::Unicode => ("╱ ", " ╲", "╱╲", " `"),
        Glyphs::Ascii => ("/ ", " \\", "/\\", " `"),
    };

    let n = strategy.height() - 1;
    let mut out = String::new();
    for level in 0..n {
        let pad = " ".repeat(n - level - 1);
        out.push_str(&pad);
        for edges in strategy.edges_at(level) {
            out.push_str(match edges {
                EdgeKind::Neither => nil,
                EdgeKind::Left => l,
                EdgeKind::Right => r,
                EdgeKind::Both => lr,
            });
        }
        out.push_str(&pad);
        out.push('\n');
    }
    out
}
