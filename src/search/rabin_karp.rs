/// Modulus of the rolling hash.
pub const PRIME: i64 = 101;
/// Radix of the rolling hash, covering the range of a byte.
pub const BASE: i64 = 256;

#[inline]
fn value<T: Into<u32>>(symbol: T) -> i64 {
    i64::from(symbol.into())
}

/// Horner's-method hash of `window` modulo [`PRIME`].
#[inline]
pub(crate) fn window_hash<T: Copy + Into<u32>>(window: &[T]) -> i64 {
    window.iter().fold(0, |acc, &symbol| (BASE * acc + value(symbol)) % PRIME)
}

/// Finds every starting index of `needle` in `haystack` using the Rabin-Karp
/// rolling hash. Every window whose hash equals the needle's hash is verified
/// symbol by symbol before it is reported, so hash collisions never produce
/// false positives.
///
/// Symbols are hashed by their `u32` value, which for ASCII bytes is the
/// character code.
///
/// An empty `needle`, or one longer than the `haystack`, has no matches.
///
/// ### Complexity
///
/// Expected *O(n + m)*, degrading to *O(nm)* when many windows collide with
/// the needle's hash.
#[must_use]
pub fn find_all_rabin_karp<T>(haystack: &[T], needle: &[T]) -> Vec<usize>
where
    T: Copy + PartialEq + Into<u32>, {
    let (n, m) = (haystack.len(), needle.len());
    if m > n || m == 0 {
        return Vec::new();
    }

    // BASE^(m-1) mod PRIME, the weight of the leading symbol
    let mut h = 1;
    for _ in 1..m {
        h = (h * BASE) % PRIME;
    }

    let p = window_hash(needle);
    let mut t = window_hash(&haystack[..m]);
    let mut positions = Vec::new();

    for i in 0..=n - m {
        if p == t && haystack[i..i + m] == *needle {
            positions.push(i);
        }

        if i < n - m {
            t = (BASE * (t - value(haystack[i]) * h) + value(haystack[i + m])) % PRIME;
            // `%` keeps the sign of the dividend
            if t < 0 {
                t += PRIME;
            }
        }
    }

    positions
}
