pub const QUESTIONS_PER_PAGE: usize = 10;

/// Fixed-size window over the full ordered result set. Pages are 1-based;
/// a page past the end comes back empty rather than erroring.
pub fn paginate<T>(page: usize, items: Vec<T>) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
