use serde::Deserialize;

/// Fixed page size for every paginated question listing.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// The `?page=N` query parameter, 1-indexed. Kept as a raw string so that a
/// non-numeric value falls back to page 1 instead of rejecting the request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Requested page number. Unparseable values default to 1 and values
    /// below 1 are clamped to 1.
    pub fn number(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .max(1) as usize
    }
}

/// The window of `items` for the given 1-indexed page. Pages past the end of
/// the list yield an empty slice.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + QUESTIONS_PER_PAGE).min(items.len());
    &items[start..end]
}
