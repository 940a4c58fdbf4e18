use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tandem::{
    dedup_in_place, is_palindrome, is_subsequence, merge_sorted, parse_bits, parse_integers,
    partition_binary, two_sum_sorted,
};

#[derive(Parser, Debug)]
#[command(name = "tandem", about = "Two-pointer scans over ordered sequences")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compact a sorted sequence so each distinct value appears once.
    Dedup {
        /// Comma-separated integers, sorted ascending.
        values: String,
    },
    /// Rearrange a binary sequence so all 0s precede all 1s.
    Partition {
        /// String of 0/1 digits.
        bits: String,
    },
    /// Merge two sorted sequences into one sorted sequence.
    Merge {
        /// First comma-separated sorted sequence.
        first: String,
        /// Second comma-separated sorted sequence.
        second: String,
    },
    /// Test whether a pattern occurs as a subsequence of a text.
    Subseq {
        /// Pattern whose characters must appear in order.
        pattern: String,
        /// Text to scan.
        text: String,
    },
    /// Find two entries of a sorted sequence that sum to a target.
    TwoSum {
        /// Comma-separated integers, sorted ascending.
        values: String,
        /// Sum to search for.
        #[arg(long)]
        target: i64,
    },
    /// Test whether a string reads the same forwards and backwards.
    Palindrome {
        /// Text to check.
        text: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Dedup { values } => run_dedup(&values)?,
        Commands::Partition { bits } => run_partition(&bits)?,
        Commands::Merge { first, second } => run_merge(&first, &second)?,
        Commands::Subseq { pattern, text } => run_subseq(&pattern, &text),
        Commands::TwoSum { values, target } => run_two_sum(&values, target)?,
        Commands::Palindrome { text } => run_palindrome(&text),
    }

    Ok(())
}

fn run_dedup(values: &str) -> Result<()> {
    let mut seq = parse_integers(values)
        .with_context(|| format!("failed to parse sequence '{values}'"))?;
    let unique = dedup_in_place(&mut seq);
    tracing::debug!(total = seq.len(), unique, "deduplicated sequence");

    println!("{}\tunique={}", join_integers(&seq[..unique]), unique);
    Ok(())
}

fn run_partition(bits: &str) -> Result<()> {
    let mut seq =
        parse_bits(bits).with_context(|| format!("failed to parse binary sequence '{bits}'"))?;
    partition_binary(&mut seq);
    tracing::debug!(len = seq.len(), "partitioned binary sequence");

    let rendered: String = seq.iter().map(|&bit| if bit == 0 { '0' } else { '1' }).collect();
    println!("{rendered}");
    Ok(())
}

fn run_merge(first: &str, second: &str) -> Result<()> {
    let left = parse_integers(first)
        .with_context(|| format!("failed to parse first sequence '{first}'"))?;
    let right = parse_integers(second)
        .with_context(|| format!("failed to parse second sequence '{second}'"))?;
    let merged = merge_sorted(&left, &right);
    tracing::debug!(left = left.len(), right = right.len(), merged = merged.len(), "merged sequences");

    println!("{}", join_integers(&merged));
    Ok(())
}

fn run_subseq(pattern: &str, text: &str) {
    let contained = is_subsequence(pattern, text);
    println!("pattern={pattern}\ttext={text}\tsubsequence={contained}");
}

fn run_two_sum(values: &str, target: i64) -> Result<()> {
    let arr = parse_integers(values)
        .with_context(|| format!("failed to parse sequence '{values}'"))?;

    match two_sum_sorted(&arr, target) {
        Some((left, right)) => println!(
            "left={left}\tright={right}\tvalues={}+{}={target}",
            arr[left], arr[right]
        ),
        None => println!("No pair of entries sums to {target}."),
    }

    Ok(())
}

fn run_palindrome(text: &str) {
    println!("'{text}' is palindrome: {}", is_palindrome(text));
}

fn join_integers(values: &[i64]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
