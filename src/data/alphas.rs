/// The unambiguous uppercase DNA bases.
pub(crate) const ACGT_UC: &[u8; 4] = b"ACGT";
