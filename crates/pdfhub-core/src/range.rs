// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page-range expressions such as "1-3,5,7-9".
//
// Grammar: comma-separated tokens, each either a page number `N` or an
// inclusive pair `A-B`. Whitespace anywhere in the expression is ignored.
// Page numbers are 1-based; every resolved page must lie in [1, total_pages].

use serde::{Deserialize, Serialize};

use crate::error::{PdfHubError, Result};

/// An ordered list of 1-based page numbers resolved from a range expression.
///
/// Order is preserved and duplicates are kept: `"3,3"` resolves to `[3, 3]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    expression: String,
    pages: Vec<u32>,
}

impl PageRange {
    /// Parse `expression` against a document of `total_pages` pages.
    pub fn parse(expression: &str, total_pages: usize) -> Result<Self> {
        let compact: String = expression.chars().filter(|c| !c.is_whitespace()).collect();
        let mut pages = Vec::new();

        for token in compact.split(',') {
            let reject = |reason: &str| PdfHubError::InvalidRange {
                expression: expression.to_string(),
                token: token.to_string(),
                reason: reason.to_string(),
                total_pages,
            };

            match token.split_once('-') {
                Some((start, end)) => {
                    let start = parse_page_number(start).ok_or_else(|| reject("not a page number"))?;
                    let end = parse_page_number(end).ok_or_else(|| reject("not a page number"))?;
                    if start > end {
                        return Err(reject("start is after end"));
                    }
                    if start < 1 || end as usize > total_pages {
                        return Err(reject("page out of bounds"));
                    }
                    pages.extend(start..=end);
                }
                None => {
                    let page = parse_page_number(token).ok_or_else(|| reject("not a page number"))?;
                    if page < 1 || page as usize > total_pages {
                        return Err(reject("page out of bounds"));
                    }
                    pages.push(page);
                }
            }
        }

        Ok(Self {
            expression: expression.to_string(),
            pages,
        })
    }

    /// The expression as supplied by the caller.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Resolved 1-based page numbers, in expression order.
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Digits only: signs, decimals, and empty strings are rejected.
fn parse_page_number(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
