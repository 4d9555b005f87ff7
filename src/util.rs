// This is a part of encoding-table.
// Copyright (c) 2026, the encoding-table developers.
// See README.md and LICENSE.txt for details.

//! Internal utilities.

use std::cmp::Ordering;

/// Ordinal comparison of `lhs`, folded byte by byte to ASCII lowercase,
/// against `rhs`. `rhs` is expected to be lowercase already; non-ASCII
/// bytes are compared as they are, so only ASCII case differences are
/// folded away (U+212A KELVIN SIGN does not match `k` and so on).
pub fn cmp_ascii_lowercase(lhs: &str, rhs: &str) -> Ordering {
    lhs.bytes().map(|b| b.to_ascii_lowercase()).cmp(rhs.bytes())
}
