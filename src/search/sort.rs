use std::cmp::Ordering;

/// A named ordering over one record kind.
pub trait SortKey<R>: Copy {
    fn compare(&self, a: &R, b: &R) -> Ordering;
}

/// Returns a new, stably sorted ordering of `records`.
///
/// Records that compare equal keep their relative input order, which keeps
/// pagination deterministic when many records tie on the active key.
pub fn sort<'a, R, K>(records: impl IntoIterator<Item = &'a R>, key: K) -> Vec<&'a R>
where
    R: 'a,
    K: SortKey<R>,
{
    let mut ordered: Vec<&'a R> = records.into_iter().collect();
    // slice::sort_by is a stable merge sort
    ordered.sort_by(|a, b| key.compare(a, b));
    ordered
}

/// Locale-aware-ish string order: case-folded first, exact bytes as the
/// tiebreak so the result is still a total order.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
