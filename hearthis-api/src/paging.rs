//! Pagination limits.

use crate::error::{HearthisError, Result};

/// Largest page size hearthis.at accepts.
pub const MAX_PAGE_COUNT: u32 = 20;

/// Page requested when the caller has no preference.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size requested when the caller has no preference.
pub const DEFAULT_COUNT: u32 = 5;

/// Reject page sizes above [`MAX_PAGE_COUNT`].
///
/// The page index is not bounded here; the service decides whether a page exists.
pub fn validate_page(_page: u32, count: u32) -> Result<()> {
    if count > MAX_PAGE_COUNT {
        return Err(HearthisError::PageCountExceeded {
            count,
            max: MAX_PAGE_COUNT,
        });
    }
    Ok(())
}
