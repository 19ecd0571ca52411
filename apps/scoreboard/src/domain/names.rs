//! Player-name normalization.
//!
//! Names are NFKC-normalized and upper-cased on entry so seat labels, festa
//! labels, and history search all compare the same text.

use unicode_normalization::UnicodeNormalization;

pub fn normalize_player_name(raw: &str) -> String {
    raw.nfkc().collect::<String>().to_uppercase()
}
