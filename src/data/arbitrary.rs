//! A module providing implementations of
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! for generating search inputs.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! functions.
//!
//! </div>

use crate::search::Algorithm;
use arbitrary::{Arbitrary, Result, Unstructured};

/// A byte vector whose implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates the bases `ACGT`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VecAcgt(pub Vec<u8>);

impl std::ops::Deref for VecAcgt {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> Arbitrary<'a> for VecAcgt {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGT";
        Ok(VecAcgt(
            u.arbitrary_iter::<u8>()?
                .flatten()
                .map(|b| ALPHA[b as usize % ALPHA.len()])
                .collect(),
        ))
    }
}

/// A haystack, needle, and algorithm for fuzzing the matchers. The needle is
/// kept short so that matches are likely.
#[derive(Debug, Clone)]
pub struct SearchCase {
    pub haystack:  Vec<u8>,
    pub needle:    Vec<u8>,
    pub algorithm: Algorithm,
}

impl<'a> Arbitrary<'a> for SearchCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        const ALPHA: &[u8] = b"ACGT";
        let algorithm = Algorithm::arbitrary(u)?;
        let needle_len = u.int_in_range(0..=8usize)?;
        let needle = (0..needle_len)
            .map(|_| Ok(ALPHA[usize::from(u8::arbitrary(u)?) % ALPHA.len()]))
            .collect::<Result<Vec<u8>>>()?;
        let haystack = VecAcgt::arbitrary(u)?.0;

        Ok(SearchCase {
            haystack,
            needle,
            algorithm,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::find_all_naive;

    #[test]
    fn search_case_agrees_with_naive() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let mut u = Unstructured::new(&data);

        while let Ok(case) = SearchCase::arbitrary(&mut u) {
            assert!(case.haystack.iter().chain(&case.needle).all(|b| b"ACGT".contains(b)));
            assert_eq!(
                case.algorithm.find_all(&case.haystack, &case.needle),
                find_all_naive(&case.haystack, &case.needle)
            );
            if u.is_empty() {
                break;
            }
        }
    }
}
