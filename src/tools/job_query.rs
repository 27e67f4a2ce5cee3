//! Parsing of job-search keywords that may carry an inline `page=<n>` directive.
//!
//! The model sends a single free-text string such as `"rust backend, page=3"`.
//! [`JobQuery::parse`] splits it into the keyword sent upstream and the page
//! number to request.

use once_cell::sync::Lazy;
use regex::Regex;

/// Page requested when the keyword carries no usable directive
pub const DEFAULT_PAGE: u32 = 1;

static PAGE_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)page\s*=\s*(\d+)").expect("page directive pattern is valid"));

/// A cleaned keyword plus the page to request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    pub keyword: String,
    pub page: u32,
}

impl JobQuery {
    /// Split `raw` into keyword and page.
    ///
    /// Only the first directive is consumed. Returns `None` if nothing is
    /// left to search for.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (keyword, page) = match PAGE_DIRECTIVE.captures(trimmed) {
            Some(captures) => {
                let directive = captures.get(0)?;
                let page = captures
                    .get(1)
                    .and_then(|digits| parse_page_digits(digits.as_str()))
                    .map_or(DEFAULT_PAGE, |page| page.max(1));

                let mut remainder = String::with_capacity(trimmed.len());
                remainder.push_str(&trimmed[..directive.start()]);
                remainder.push_str(&trimmed[directive.end()..]);
                (strip_separators(&remainder).to_string(), page)
            }
            None => (trimmed.to_string(), DEFAULT_PAGE),
        };

        if keyword.is_empty() {
            return None;
        }

        Some(Self { keyword, page })
    }
}

/// Code points of `0` for each run of Unicode decimal digits (category Nd).
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

fn digit_value(c: char) -> Option<u32> {
    let code = c as u32;
    DIGIT_ZEROS
        .iter()
        .find(|&&zero| (zero..zero + 10).contains(&code))
        .map(|zero| code - zero)
}

/// Parse a run of decimal digits from any script, e.g. full-width `１２`.
fn parse_page_digits(digits: &str) -> Option<u32> {
    digits.chars().try_fold(0u32, |page, c| {
        page.checked_mul(10)?.checked_add(digit_value(c)?)
    })
}

fn strip_separators(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | ',' | ';')).trim()
}
