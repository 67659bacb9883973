#![allow(clippy::uninlined_format_args)]

use epsnfa::{Error, Nfa};
use log::LevelFilter;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "epsnfa-tool")]
struct Opt {
    /// The regular expression.
    pattern: String,

    /// Dump the NFA states to stdout.
    #[structopt(long)]
    dump_nfa: bool,

    /// Dump the epsilon-transition graph to stdout.
    #[structopt(long)]
    dump_graph: bool,

    /// Log to stderr; repeat for more detail. Overrides RUST_LOG.
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,

    /// The input values to match against.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Match against each line of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark matching each line of the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

/// Map the -v count to a log filter. No -v leaves the filter to RUST_LOG.
fn level_for(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Warn),
        2 => Some(LevelFilter::Info),
        3 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn init_logging(verbose: u8) {
    let mut logger = env_logger::Builder::from_env(env_logger::Env::default());
    if let Some(level) = level_for(verbose) {
        logger.filter_level(level);
    }
    logger.init();
}

fn format_result(res: Result<bool, Error>) -> String {
    match res {
        Ok(true) => "Match".to_string(),
        Ok(false) => "No match".to_string(),
        Err(err) => format!("Error: {}", err),
    }
}

fn exec_nfa_on_path(nfa: &Nfa, path: &Path) {
    match fs::read_to_string(path) {
        Ok(contents) => {
            for (idx, line) in contents.lines().enumerate() {
                println!("{}: {}", idx + 1, format_result(nfa.matches(line)));
            }
        }
        Err(err) => println!("{}: {}", err, path.display()),
    };
}

fn bench_nfa_on_path(nfa: &Nfa, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return;
        }
    };
    let run = || contents.lines().filter(|line| nfa.matches(line) == Ok(true)).count();
    // Warmup
    let matched = run();
    let start = Instant::now();
    for _ in 0..25 {
        run();
    }
    let duration = start.elapsed();
    println!("{} ms ({} matching lines)", duration.as_millis(), matched);
}

fn main() -> Result<(), Error> {
    let args = Opt::from_args();
    init_logging(args.verbose);

    let nfa = Nfa::new(&args.pattern)?;
    if args.dump_nfa {
        println!("{}", nfa.to_readable_string());
    }
    if args.dump_graph {
        print!("{}", nfa.graph());
    }

    if let Some(ref path) = args.file {
        exec_nfa_on_path(&nfa, path);
    } else if let Some(ref path) = args.bench {
        bench_nfa_on_path(&nfa, path);
    } else {
        for input in &args.inputs {
            println!("{}", format_result(nfa.matches(input)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), None);
        assert_eq!(level_for(1), Some(LevelFilter::Warn));
        assert_eq!(level_for(2), Some(LevelFilter::Info));
        assert_eq!(level_for(3), Some(LevelFilter::Debug));
        assert_eq!(level_for(4), Some(LevelFilter::Trace));
        assert_eq!(level_for(u8::MAX), Some(LevelFilter::Trace));
    }

    #[test]
    fn test_format_result() {
        let nfa = Nfa::new("A*").unwrap();
        assert_eq!(format_result(nfa.matches("AAA")), "Match");
        assert_eq!(format_result(nfa.matches("B")), "No match");
        assert_eq!(
            format_result(nfa.matches("A|")),
            "Error: text contains the metacharacter '|' at position 1"
        );
    }
}
