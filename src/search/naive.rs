/// Finds every starting index of `needle` in `haystack` by comparing the
/// needle against each candidate window, stopping at the first mismatch.
///
/// An empty `needle`, or one longer than the `haystack`, has no matches.
///
/// ### Complexity
///
/// *O(nm)* in the worst case and *O(n)* when windows usually mismatch on their
/// first symbol.
#[must_use]
pub fn find_all_naive<T: PartialEq>(haystack: &[T], needle: &[T]) -> Vec<usize> {
    let (n, m) = (haystack.len(), needle.len());
    if m > n || m == 0 {
        return Vec::new();
    }

    haystack
        .windows(m)
        .enumerate()
        .filter_map(|(i, w)| (needle == w).then_some(i))
        .collect()
}
