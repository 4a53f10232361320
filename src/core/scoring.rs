//! Scoring module.
//!
//! Score delta is a fixed lookup on the number of rows cleared in a single
//! pass: 1 -> 100, 2 -> 300, 3 -> 500, 4 -> 800. Simultaneous clears are one
//! combined bonus, so a double is worth more than two singles. There is no
//! level multiplier, combo, or drop scoring in this ruleset.

use crate::types::LINE_SCORES;

/// Score delta for clearing `lines` rows in one pass.
pub fn line_clear_score(lines: usize) -> u32 {
    // More than 4 rows cannot clear from a single merge.
    LINE_SCORES[lines.min(LINE_SCORES.len() - 1)]
}
