use dnascan::{data::ingest::SequenceFormat, prelude::*, search::AlgorithmParseError};
use std::{
    env,
    io::{BufWriter, Write, stdin, stdout},
};

const PROGRAM: &str = "dnascan";

fn usage() -> ! {
    eprintln!(
        "Usage: {PROGRAM} <SEQUENCE_FILE | -> <PATTERN> [naive | kmp | rabin-karp | all]\n       \
         {PROGRAM} --algorithms\n\n\
         SEQUENCE_FILE must be a .txt or .fasta file. Use - to read plain text from stdin."
    );
    std::process::exit(2);
}

fn describe_algorithms(out: &mut impl Write) -> std::io::Result<()> {
    for algorithm in Algorithm::ALL {
        writeln!(out, "{name} ({id})", name = algorithm.name(), id = algorithm.id())?;
        writeln!(out, "  {}", algorithm.description())?;
        writeln!(out, "  Time Complexity: {}", algorithm.time_complexity())?;
        writeln!(out, "  Best For: {}\n", algorithm.best_for())?;
    }
    writeln!(out, "Only sequences containing A, C, G, T characters are considered valid.")
}

/// Splits positional arguments into the sequence source, the pattern, and an
/// optional algorithm choice. Returns `None` for the wrong number of arguments.
fn split_args(args: &[String]) -> Option<(&str, &str, Option<&str>)> {
    match args {
        [source, pattern] => Some((source.as_str(), pattern.as_str(), None)),
        [source, pattern, choice] => {
            Some((source.as_str(), pattern.as_str(), Some(choice.as_str())))
        }
        _ => None,
    }
}

/// Naive when no choice is given, every algorithm for `all` in any case, and
/// otherwise the algorithm with the given id.
fn select_algorithms(choice: Option<&str>) -> Result<Vec<Algorithm>, AlgorithmParseError> {
    match choice {
        None => Ok(vec![Algorithm::default()]),
        Some(choice) if choice.trim().eq_ignore_ascii_case("all") => Ok(Algorithm::ALL.to_vec()),
        Some(choice) => Ok(vec![choice.parse()?]),
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.first().is_some_and(|a| a == "--algorithms") {
        describe_algorithms(&mut out).unwrap_or_fail();
        out.flush().unwrap_or_fail();
        return;
    }

    let Some((source, pattern, choice)) = split_args(&args) else {
        usage();
    };
    let algorithms = select_algorithms(choice).unwrap_or_fail();

    let sequence = if source == "-" {
        dnascan::data::ingest::read_sequence(stdin().lock(), SequenceFormat::Plain)
            .unwrap_or_die("Could not read a DNA sequence from stdin!")
    } else {
        read_sequence_file(source).unwrap_or_fail()
    };

    for algorithm in algorithms {
        let analysis = analyze(&sequence, pattern, algorithm).unwrap_or_fail();
        writeln!(out, "{analysis}").unwrap_or_fail();
    }

    out.flush().unwrap_or_fail();
}
