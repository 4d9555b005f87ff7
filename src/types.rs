// This is a part of encoding-table.
// Copyright (c) 2026, the encoding-table developers.
// See README.md and LICENSE.txt for details.

//! Common types for the codepage tables.

/// A Windows codepage number.
///
/// Every codepage assigned so far fits in 16 bits, but the type is kept
/// 32 bits wide so that a future entry above 65535 cannot be silently
/// truncated anywhere in the crate.
pub type CodePage = u32;

/// The encoding is usable in mail and news contexts.
pub const MIMECONTF_MAILNEWS: u32 = 0x0000_0001;

/// The encoding is usable in browser contexts.
pub const MIMECONTF_BROWSER: u32 = 0x0000_0002;

/// The encoding is appropriate for saving mail and news content.
pub const MIMECONTF_SAVABLE_MAILNEWS: u32 = 0x0000_0100;

/// The encoding is appropriate for saving browser content.
pub const MIMECONTF_SAVABLE_BROWSER: u32 = 0x0000_0200;

/// Descriptive metadata for a well-known codepage.
///
/// Downstream consumers parse and display these strings verbatim
/// (including e.g. the "utf-16BE" casing), so every field is part of the
/// compatibility contract and is returned exactly as published.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodePageInfo {
    /// The codepage this record describes.
    pub code_page: CodePage,
    /// The name used in protocol contexts such as HTTP charset declarations.
    pub web_name: &'static str,
    /// The human-readable English display name.
    pub english_name: &'static str,
    /// The fallback codepage used by legacy code-page-aware UI rendering.
    pub ui_family_code_page: CodePage,
    /// MIME-context applicability flags, a combination of the `MIMECONTF_*`
    /// constants. The value is carried through uninterpreted.
    pub flags: u32,
}
