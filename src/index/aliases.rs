// This is a part of encoding-table.
//
// Any copyright to the table data is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! The alias table: every supported IANA/Windows encoding name with the
//! codepage it resolves to.
//!
//! The names are concatenated into a single buffer instead of being stored
//! as an array of separate string literals, so the whole table is plain
//! static data. `NAMES` is decoded through `OFFSETS` (one start offset per
//! name plus a final sentinel); the name starting at `OFFSETS[i]` resolves
//! to `CODE_PAGES[i]`. All names are lowercase and sorted in ascending
//! ordinal order, which the lookup code relies on for binary search.
//! Several names may resolve to the same codepage.

use crate::types::CodePage;

/// All supported alias names, lowercase, sorted, concatenated.
pub static NAMES: &str = concat!(
    "ansi_x3.4-1968",      // 20127
    "ansi_x3.4-1986",      // 20127
    "ascii",               // 20127
    "cp367",               // 20127
    "cp819",               // 28591
    "csascii",             // 20127
    "csisolatin1",         // 28591
    "csunicode11utf7",     // 65000
    "ibm367",              // 20127
    "ibm819",              // 28591
    "iso-10646-ucs-2",     // 1200
    "iso-8859-1",          // 28591
    "iso-ir-100",          // 28591
    "iso-ir-6",            // 20127
    "iso646-us",           // 20127
    "iso8859-1",           // 28591
    "iso_646.irv:1991",    // 20127
    "iso_8859-1",          // 28591
    "iso_8859-1:1987",     // 28591
    "l1",                  // 28591
    "latin1",              // 28591
    "ucs-2",               // 1200
    "unicode",             // 1200
    "unicode-1-1-utf-7",   // 65000
    "unicode-1-1-utf-8",   // 65001
    "unicode-2-0-utf-7",   // 65000
    "unicode-2-0-utf-8",   // 65001
    "unicodefffe",         // 1201
    "us",                  // 20127
    "us-ascii",            // 20127
    "utf-16",              // 1200
    "utf-16be",            // 1201
    "utf-16le",            // 1200
    "utf-32",              // 12000
    "utf-32be",            // 12001
    "utf-32le",            // 12000
    "utf-7",               // 65000
    "utf-8",               // 65001
    "x-unicode-1-1-utf-7", // 65000
    "x-unicode-1-1-utf-8", // 65001
    "x-unicode-2-0-utf-7", // 65000
    "x-unicode-2-0-utf-8", // 65001
);

/// The start offset of every name in `NAMES`, plus a final sentinel equal
/// to `NAMES.len()`.
pub static OFFSETS: &[u16] = &[
    0,   // ansi_x3.4-1968 (20127)
    14,  // ansi_x3.4-1986 (20127)
    28,  // ascii (20127)
    33,  // cp367 (20127)
    38,  // cp819 (28591)
    43,  // csascii (20127)
    50,  // csisolatin1 (28591)
    61,  // csunicode11utf7 (65000)
    76,  // ibm367 (20127)
    82,  // ibm819 (28591)
    88,  // iso-10646-ucs-2 (1200)
    103, // iso-8859-1 (28591)
    113, // iso-ir-100 (28591)
    123, // iso-ir-6 (20127)
    131, // iso646-us (20127)
    140, // iso8859-1 (28591)
    149, // iso_646.irv:1991 (20127)
    165, // iso_8859-1 (28591)
    175, // iso_8859-1:1987 (28591)
    190, // l1 (28591)
    192, // latin1 (28591)
    198, // ucs-2 (1200)
    203, // unicode (1200)
    210, // unicode-1-1-utf-7 (65000)
    227, // unicode-1-1-utf-8 (65001)
    244, // unicode-2-0-utf-7 (65000)
    261, // unicode-2-0-utf-8 (65001)
    278, // unicodefffe (1201)
    289, // us (20127)
    291, // us-ascii (20127)
    299, // utf-16 (1200)
    305, // utf-16be (1201)
    313, // utf-16le (1200)
    321, // utf-32 (12000)
    327, // utf-32be (12001)
    335, // utf-32le (12000)
    343, // utf-7 (65000)
    348, // utf-8 (65001)
    353, // x-unicode-1-1-utf-7 (65000)
    372, // x-unicode-1-1-utf-8 (65001)
    391, // x-unicode-2-0-utf-7 (65000)
    410, // x-unicode-2-0-utf-8 (65001)
    429,
];

/// The codepage for the name starting at the matching index in `OFFSETS`.
pub static CODE_PAGES: &[CodePage] = &[
    20127, // ansi_x3.4-1968
    20127, // ansi_x3.4-1986
    20127, // ascii
    20127, // cp367
    28591, // cp819
    20127, // csascii
    28591, // csisolatin1
    65000, // csunicode11utf7
    20127, // ibm367
    28591, // ibm819
    1200,  // iso-10646-ucs-2
    28591, // iso-8859-1
    28591, // iso-ir-100
    20127, // iso-ir-6
    20127, // iso646-us
    28591, // iso8859-1
    20127, // iso_646.irv:1991
    28591, // iso_8859-1
    28591, // iso_8859-1:1987
    28591, // l1
    28591, // latin1
    1200,  // ucs-2
    1200,  // unicode
    65000, // unicode-1-1-utf-7
    65001, // unicode-1-1-utf-8
    65000, // unicode-2-0-utf-7
    65001, // unicode-2-0-utf-8
    1201,  // unicodefffe
    20127, // us
    20127, // us-ascii
    1200,  // utf-16
    1201,  // utf-16be
    1200,  // utf-16le
    12000, // utf-32
    12001, // utf-32be
    12000, // utf-32le
    65000, // utf-7
    65001, // utf-8
    65000, // x-unicode-1-1-utf-7
    65001, // x-unicode-1-1-utf-8
    65000, // x-unicode-2-0-utf-7
    65001, // x-unicode-2-0-utf-8
];
