// This is a part of encoding-table.
// Copyright (c) 2026, the encoding-table developers.
// See README.md and LICENSE.txt for details.

//! Name and codepage lookup over the static tables.

use std::cmp::Ordering;

use crate::index;
use crate::strtab::StringTable;
use crate::types::{CodePage, CodePageInfo};
use crate::util::cmp_ascii_lowercase;

/// The alias table: resolves an encoding name to a codepage.
///
/// The underlying name sequence is lowercase and strictly sorted in
/// ascending ordinal order with no duplicates; that invariant is
/// established when the table data is edited and asserted by tests, never
/// revalidated per query.
#[derive(Clone, Copy, Debug)]
pub struct AliasTable {
    names: StringTable,
    code_pages: &'static [CodePage],
}

impl AliasTable {
    /// Makes an alias table over the built-in data.
    pub const fn new() -> AliasTable {
        AliasTable {
            names: StringTable::new(index::aliases::NAMES, index::aliases::OFFSETS),
            code_pages: index::aliases::CODE_PAGES,
        }
    }

    /// Resolves an alias to its codepage, or `None` if the name is not a
    /// known alias.
    ///
    /// Matching folds ASCII case and is otherwise an exact ordinal
    /// comparison: no trimming, no prefix matching, no Unicode case
    /// folding. A miss is an expected result and has no side effects.
    pub fn code_page(&self, name: &str) -> Option<CodePage> {
        let mut lo = 0;
        let mut hi = self.names.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match cmp_ascii_lowercase(name, self.names.at(mid)) {
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
                Ordering::Equal => return Some(self.code_pages[mid]),
            }
        }
        None
    }
}

impl Default for AliasTable {
    fn default() -> AliasTable {
        AliasTable::new()
    }
}

/// The two codepage tables behind an encoding registry: name to codepage,
/// and codepage to descriptive metadata.
///
/// This is a zero-cost handle over static data. Construct one wherever
/// encoding resolution is first needed and pass it by value or reference;
/// all lookups are read-only and safe from any number of threads.
#[derive(Clone, Copy, Debug)]
pub struct EncodingTable {
    aliases: AliasTable,
    mapped: &'static [CodePageInfo],
}

impl EncodingTable {
    /// Makes a table over the built-in data.
    pub const fn new() -> EncodingTable {
        EncodingTable {
            aliases: AliasTable::new(),
            mapped: index::mapped::INFOS,
        }
    }

    /// Resolves an encoding name to a codepage. See `AliasTable::code_page`.
    pub fn code_page_from_name(&self, name: &str) -> Option<CodePage> {
        self.aliases.code_page(name)
    }

    /// Returns the curated metadata for a codepage, or `None` if the
    /// codepage carries none.
    ///
    /// A codepage obtained from `code_page_from_name` is not guaranteed to
    /// have an entry here; that absence is a normal result.
    pub fn info_from_code_page(&self, code_page: CodePage) -> Option<&'static CodePageInfo> {
        match self.mapped.binary_search_by_key(&code_page, |info| info.code_page) {
            Ok(index) => Some(&self.mapped[index]),
            Err(_) => None,
        }
    }

    /// Returns the web (MIME) name for a codepage, e.g. `"utf-16BE"` for 1201.
    pub fn web_name_from_code_page(&self, code_page: CodePage) -> Option<&'static str> {
        self.info_from_code_page(code_page).map(|info| info.web_name)
    }

    /// Returns the English display name for a codepage.
    pub fn english_name_from_code_page(&self, code_page: CodePage) -> Option<&'static str> {
        self.info_from_code_page(code_page).map(|info| info.english_name)
    }

    /// Returns the UI-family fallback codepage for a codepage.
    pub fn ui_family_code_page_from_code_page(&self, code_page: CodePage) -> Option<CodePage> {
        self.info_from_code_page(code_page).map(|info| info.ui_family_code_page)
    }

    /// Returns the MIME-context flags for a codepage, uninterpreted.
    pub fn flags_from_code_page(&self, code_page: CodePage) -> Option<u32> {
        self.info_from_code_page(code_page).map(|info| info.flags)
    }

    /// Every codepage with curated metadata, sorted by codepage.
    pub fn mapped_code_pages(&self) -> &'static [CodePageInfo] {
        self.mapped
    }
}

impl Default for EncodingTable {
    fn default() -> EncodingTable {
        EncodingTable::new()
    }
}
