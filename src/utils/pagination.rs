pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slices a result list into the 1-based page of fixed size 10.
///
/// Pages past the end yield an empty vec; callers decide whether that is an
/// error. Page values below 1 are clamped to the first page.
pub fn paginate<T: Clone>(page: u32, records: &[T]) -> Vec<T> {
    let start = (page.max(1) as usize - 1) * QUESTIONS_PER_PAGE;

    records
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}
