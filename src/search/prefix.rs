use std::ops::Index;

/// The prefix (failure) function of a needle. Entry `k` holds the length of
/// the longest proper prefix of `needle[..=k]` that is also a suffix of it.
///
/// The first entry is always `0` and entry `k` never exceeds `k`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct PrefixTable(Vec<usize>);

impl PrefixTable {
    /// Builds the table for `needle` in *O(m)* time. On a mismatch the
    /// candidate length falls back through the table until a match or zero is
    /// reached, so the longest reachable border is always kept.
    #[must_use]
    pub fn new<T: PartialEq>(needle: &[T]) -> Self {
        let m = needle.len();
        let mut table = vec![0; m];

        let mut len = 0;
        let mut i = 1;

        while i < m {
            if needle[i] == needle[len] {
                len += 1;
                table[i] = len;
                i += 1;
            } else if len != 0 {
                len = table[len - 1];
            } else {
                table[i] = 0;
                i += 1;
            }
        }

        PrefixTable(table)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Index<usize> for PrefixTable {
    type Output = usize;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl AsRef<[usize]> for PrefixTable {
    #[inline]
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}
