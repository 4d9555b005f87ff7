// This is a part of encoding-table.
//
// Any copyright to the table data is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/

//! The curated metadata table: the well-known codepages for which a web
//! name, an English display name, a UI-family codepage and MIME-context
//! flags are defined.
//!
//! Each row is one composite record so the five fields of an entry can
//! never drift out of alignment. The rows are sorted by codepage, which
//! the lookup code relies on for binary search. This table covers only a
//! curated subset of the codepages reachable through the alias table; a
//! codepage missing here simply has no curated metadata.

use crate::types::CodePageInfo;
use crate::types::{MIMECONTF_BROWSER, MIMECONTF_MAILNEWS,
                   MIMECONTF_SAVABLE_BROWSER, MIMECONTF_SAVABLE_MAILNEWS};

/// The metadata records, sorted by `code_page`.
pub static INFOS: &[CodePageInfo] = &[
    CodePageInfo {
        code_page: 1200,
        web_name: "utf-16",
        english_name: "Unicode",
        ui_family_code_page: 1200,
        flags: MIMECONTF_SAVABLE_BROWSER,
    },
    CodePageInfo {
        code_page: 1201,
        web_name: "utf-16BE",
        english_name: "Unicode (Big-Endian)",
        ui_family_code_page: 1200,
        flags: 0,
    },
    CodePageInfo {
        code_page: 12000,
        web_name: "utf-32",
        english_name: "Unicode (UTF-32)",
        ui_family_code_page: 1200,
        flags: 0,
    },
    CodePageInfo {
        code_page: 12001,
        web_name: "utf-32BE",
        english_name: "Unicode (UTF-32 Big-Endian)",
        ui_family_code_page: 1200,
        flags: 0,
    },
    CodePageInfo {
        code_page: 20127,
        web_name: "us-ascii",
        english_name: "US-ASCII",
        ui_family_code_page: 1252,
        flags: MIMECONTF_MAILNEWS | MIMECONTF_SAVABLE_MAILNEWS,
    },
    CodePageInfo {
        code_page: 28591,
        web_name: "iso-8859-1",
        english_name: "Western European (ISO)",
        ui_family_code_page: 1252,
        flags: MIMECONTF_MAILNEWS | MIMECONTF_BROWSER |
               MIMECONTF_SAVABLE_MAILNEWS | MIMECONTF_SAVABLE_BROWSER,
    },
    CodePageInfo {
        code_page: 65000,
        web_name: "utf-7",
        english_name: "Unicode (UTF-7)",
        ui_family_code_page: 1200,
        flags: MIMECONTF_MAILNEWS | MIMECONTF_SAVABLE_MAILNEWS,
    },
    CodePageInfo {
        code_page: 65001,
        web_name: "utf-8",
        english_name: "Unicode (UTF-8)",
        ui_family_code_page: 1200,
        flags: MIMECONTF_MAILNEWS | MIMECONTF_BROWSER |
               MIMECONTF_SAVABLE_MAILNEWS | MIMECONTF_SAVABLE_BROWSER,
    },
];
