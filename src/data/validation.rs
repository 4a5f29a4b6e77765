use crate::data::alphas::ACGT_UC;

/// Provides sequence alphabet validation methods.
pub trait CheckSequence {
    /// Checks that the sequence is non-empty and every byte is one of `A`, `C`,
    /// `G`, or `T`, ignoring case.
    fn is_acgt(&self) -> bool;
}

impl<T> CheckSequence for T
where
    T: AsRef<[u8]> + ?Sized,
{
    #[inline]
    fn is_acgt(&self) -> bool {
        is_valid_dna(self.as_ref())
    }
}

/// Returns `true` if `sequence` is non-empty and only contains the bases `A`,
/// `C`, `G`, and `T` in either case.
#[inline]
#[must_use]
pub fn is_valid_dna(sequence: &[u8]) -> bool {
    !sequence.is_empty() && sequence.iter().all(|b| ACGT_UC.contains(&b.to_ascii_uppercase()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_dna() {
        assert!(is_valid_dna(b"ACGT"));
        assert!(is_valid_dna(b"acgtACGT"));
        assert!("gattaca".is_acgt());
    }

    #[test]
    fn invalid_dna() {
        assert!(!is_valid_dna(b""));
        assert!(!is_valid_dna(b"ACGU"));
        assert!(!is_valid_dna(b"ACG T"));
        assert!(!is_valid_dna(b"ACGN"));
        assert!(!"ACGT-".is_acgt());
    }
}

#[cfg(all(test, feature = "rand"))]
mod random {
    use super::*;

    #[test]
    fn random_acgt() {
        let s = crate::generate::rand_sequence(b"ACGTacgt", 1000, 7);
        assert!(s.is_acgt());

        let s = crate::generate::rand_sequence(b"ACGTN", 1000, 7);
        assert!(!s.is_acgt());
    }
}
