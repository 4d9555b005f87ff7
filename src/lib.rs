// This is a part of encoding-table.
// Copyright (c) 2026, the encoding-table developers.
// See README.md and LICENSE.txt for details.

/*!

# Encoding-table

Codepage alias and metadata tables for Rust.

This crate answers two questions an encoding registry has to answer before
it ever touches a codec:

* Which codepage does a textual encoding name ("utf-8", "ISO-8859-1",
  "ibm367", ...) refer to?
* What are the canonical web (MIME) name, English display name, UI-family
  codepage and MIME-context flags for a given codepage?

Both answers come from fixed, read-only tables reproducing the published
IANA/Windows assignments. There are no codecs here, no encoding detection
and no runtime registration; absence from a table is a normal result, not
an error.

## Usage

To resolve a name to a codepage:

~~~~ {.rust}
use encoding_table::EncodingTable;

let table = EncodingTable::new();
assert_eq!(table.code_page_from_name("UTF-8"), Some(65001));
assert_eq!(table.code_page_from_name("latin1"), Some(28591));
assert_eq!(table.code_page_from_name("made-up-encoding"), None);
~~~~

To retrieve the metadata for a well-known codepage:

~~~~ {.rust}
use encoding_table::EncodingTable;

let table = EncodingTable::new();
let info = table.info_from_code_page(1201).unwrap();
assert_eq!(info.web_name, "utf-16BE");
assert_eq!(info.english_name, "Unicode (Big-Endian)");
assert_eq!(info.ui_family_code_page, 1200);

// a codepage reachable through an alias is not guaranteed to carry
// curated metadata; 1252 appears only as a UI-family fallback.
assert!(table.info_from_code_page(1252).is_none());
~~~~

Name matching is case-insensitive for ASCII only and otherwise an exact
ordinal comparison; there is no prefix matching and no locale-sensitive
collation. Lookups are `O(log n)`, never allocate and have no side effects,
so an `EncodingTable` (a trivially copyable handle over static data) can be
shared freely across threads.

*/

#![forbid(unsafe_code)]

pub use crate::table::{AliasTable, EncodingTable};
pub use crate::types::{CodePage, CodePageInfo};
pub use crate::types::{MIMECONTF_BROWSER, MIMECONTF_MAILNEWS,
                       MIMECONTF_SAVABLE_BROWSER, MIMECONTF_SAVABLE_MAILNEWS};

mod util;

pub mod strtab;
pub mod types;

/// Static tables used for name and codepage lookup. Semi-internal.
pub mod index {
    pub mod aliases;
    pub mod mapped;
}

pub mod table;
