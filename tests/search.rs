use dnascan::{prelude::*, search::*};

#[test]
fn overlapping_matches_are_reported() {
    assert_eq!(automaton_match(b"AAAA", b"AA").positions, vec![0, 1, 2]);
    assert_eq!(brute_force_match(b"AAAA", b"AA").positions, vec![0, 1, 2]);
    assert_eq!(rolling_hash_match(b"AAAA", b"AA").positions, vec![0, 1, 2]);
}

#[test]
fn degenerate_needles() {
    for algorithm in Algorithm::ALL {
        assert!(algorithm.search(b"ACGT", b"").is_empty());
        assert!(algorithm.search(b"ACGT", b"ACGTA").is_empty());
        assert_eq!(algorithm.search(b"ACGT", b"ACGT").positions, vec![0]);
    }
}

#[test]
fn rabin_karp_constants() {
    assert_eq!(PRIME, 101);
    assert_eq!(BASE, 256);
}

#[test]
fn prefix_function() {
    assert_eq!(PrefixTable::new(b"ABABAB").as_slice(), &[0, 0, 1, 2, 3, 4]);
}

#[cfg(feature = "rand")]
#[test]
fn agreement_on_random_dna() {
    let haystack = rand_sequence(b"ACGT", 20_000, 1);
    for seed in 0..16 {
        let needle = rand_sequence(b"ACGT", 3 + (seed as usize % 6), seed);
        let expected = find_all_naive(&haystack, &needle);
        assert_eq!(find_all_kmp(&haystack, &needle), expected);
        assert_eq!(find_all_rabin_karp(&haystack, &needle), expected);
    }
}
