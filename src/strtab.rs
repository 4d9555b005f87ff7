// This is a part of encoding-table.
// Copyright (c) 2026, the encoding-table developers.
// See README.md and LICENSE.txt for details.

//! Compact string tables.
//!
//! A `StringTable` stores a sequence of short strings as one concatenated
//! buffer plus a table of start offsets. The whole table then lives in
//! static data, with no per-string work at startup and no allocation at
//! lookup time.

/// A read-only sequence of strings flattened into a single buffer.
///
/// The `index`-th string spans `data[offsets[index]..offsets[index + 1]]`.
/// `offsets` holds one entry per string plus a final sentinel equal to
/// `data.len()`, so the length of the last string needs no special case.
/// Offsets are non-decreasing; two equal consecutive offsets denote a
/// zero-length string, which is valid.
#[derive(Clone, Copy, Debug)]
pub struct StringTable {
    data: &'static str,
    offsets: &'static [u16],
}

impl StringTable {
    /// Makes a table from a flattened buffer and its offset table.
    pub const fn new(data: &'static str, offsets: &'static [u16]) -> StringTable {
        StringTable { data, offsets }
    }

    /// Returns the number of strings in the table.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Returns true if the table contains no strings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the `index`-th string.
    ///
    /// `index` has to be within `0..len()`. Correct search code never
    /// produces an out-of-range index, so this is an assertion in debug
    /// builds rather than a checked result.
    pub fn at(&self, index: usize) -> &'static str {
        debug_assert!(index < self.len());
        let start = self.offsets[index] as usize;
        let end = self.offsets[index + 1] as usize;
        &self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::StringTable;

    static TABLE: StringTable =
        StringTable::new(concat!("ascii", "latin1", "utf-8"), &[0, 5, 11, 16]);

    #[test]
    fn test_at() {
        assert_eq!(TABLE.len(), 3);
        assert!(!TABLE.is_empty());
        assert_eq!(TABLE.at(0), "ascii");
        assert_eq!(TABLE.at(1), "latin1");
        assert_eq!(TABLE.at(2), "utf-8");
    }

    #[test]
    fn test_zero_length_strings_are_valid() {
        let table = StringTable::new("ab", &[0, 0, 1, 2, 2]);
        assert_eq!(table.len(), 4);
        assert_eq!(table.at(0), "");
        assert_eq!(table.at(1), "a");
        assert_eq!(table.at(2), "b");
        assert_eq!(table.at(3), "");
    }

    #[test]
    fn test_empty_table() {
        let table = StringTable::new("", &[0]);
        assert_eq!(table.len(), 0);
        assert!(table.is_empty());
    }
}
