use dnascan::prelude::*;
use std::{io::ErrorKind, path::PathBuf};

fn write_temp(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dnascan-{pid}-{name}", pid = std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn fasta_file_is_concatenated() {
    let path = write_temp("multi.fasta", b">chr1 test\nacgt\nACGT\n>chr2\nTTAA\n");
    assert_eq!(read_sequence_file(&path).unwrap(), b"ACGTACGTTTAA");

    let records: Vec<FastaSeq> = FastaReader::from_filename(&path)
        .unwrap()
        .collect::<std::io::Result<_>>()
        .unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "chr1 test");
    assert_eq!(records[1].sequence, b"TTAA");

    std::fs::remove_file(path).unwrap();
}

#[test]
fn text_file_is_cleaned() {
    let path = write_temp("plain.txt", b"gatt aca\nGATTACA\n");
    assert_eq!(read_sequence_file(&path).unwrap(), b"GATTACAGATTACA");
    std::fs::remove_file(path).unwrap();
}

#[test]
fn invalid_files() {
    let path = write_temp("bad.txt", b"ACGTN");
    let err = read_sequence_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(err.to_string().contains("bad.txt"));
    std::fs::remove_file(path).unwrap();

    let path = write_temp("empty.fasta", b"");
    assert_eq!(read_sequence_file(&path).unwrap_err().kind(), ErrorKind::InvalidInput);
    std::fs::remove_file(path).unwrap();

    let err = read_sequence_file("genome.gb").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(
        err.to_string(),
        "Invalid file format. Please upload a .txt or .fasta file"
    );

    assert!(read_sequence_file("does/not/exist.fasta").is_err());
}

#[test]
fn fasta_then_search() {
    let path = write_temp("search.fasta", b">s1\nGATTACA\nGATTACA\n");
    let sequence = read_sequence_file(&path).unwrap();
    std::fs::remove_file(path).unwrap();

    for algorithm in Algorithm::ALL {
        assert_eq!(sequence.find_all_matches(b"ACAG", algorithm), vec![4]);
    }
}
