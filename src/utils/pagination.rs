// src/utils/pagination.rs

use std::num::IntErrorKind;

pub const QUESTIONS_PER_PAGE: i64 = 10;

/// Parses the `page` query parameter. Absent or non-numeric input means 0 (no pagination).
///
/// Numbers too large for `i64` saturate, so an oversized page is still a page
/// (an empty one) rather than a request for everything.
pub fn parse_page(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 0;
    };

    match raw.trim().parse::<i64>() {
        Ok(page) => page,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}

/// Returns the page slice `[(page-1)*10, page*10)` of `items`, or all of `items` when `page` is 0.
///
/// Bounds behave like sequence slicing: negative indices count back from the end
/// and clamp at zero, indices past the end clamp to the length, and an empty or
/// inverted range yields an empty slice.
///
/// The whole table is loaded before slicing, which is fine for a trivia-sized
/// dataset but does not scale to large tables.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page == 0 {
        return items;
    }

    let upper = page.saturating_mul(QUESTIONS_PER_PAGE);
    let lower = upper.saturating_sub(QUESTIONS_PER_PAGE);

    let start = clamp_index(lower, items.len());
    let end = clamp_index(upper, items.len());

    if start >= end { &[] } else { &items[start..end] }
}

fn clamp_index(index: i64, len: usize) -> usize {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolved = if index < 0 { index.saturating_add(len_i) } else { index };
    resolved.clamp(0, len_i) as usize
}
