use super::PrefixTable;

/// Finds every starting index of `needle` in `haystack` using the
/// Knuth-Morris-Pratt algorithm. Overlapping occurrences are reported.
///
/// An empty `needle`, or one longer than the `haystack`, has no matches and
/// the [`PrefixTable`] is not built.
///
/// ### Complexity
///
/// *O(n + m)* regardless of the input.
#[must_use]
pub fn find_all_kmp<T: PartialEq>(haystack: &[T], needle: &[T]) -> Vec<usize> {
    let (n, m) = (haystack.len(), needle.len());
    if m > n || m == 0 {
        return Vec::new();
    }

    let table = PrefixTable::new(needle);
    let mut positions = Vec::new();

    let mut i = 0;
    let mut j = 0;

    while i < n {
        if haystack[i] == needle[j] {
            i += 1;
            j += 1;

            if j == m {
                positions.push(i - j);
                // Resume from the longest border so overlapping hits are kept
                j = table[j - 1];
            }
        } else if j != 0 {
            j = table[j - 1];
        } else {
            i += 1;
        }
    }

    positions
}
