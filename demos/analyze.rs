use clap::{Parser, Subcommand};
use keytree::balance;
use keytree::ingest;
use keytree::search;
use keytree::subtree;
use log::{info, warn};
use std::path::PathBuf;
use std::process::exit;

/**
 * Read integer key files into unbalanced binary search trees and run one
 * of the three analyses on them.
 */
#[derive(Debug, Parser)]
#[clap(name = "analyze")]
struct Opts {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Report every node's balance factor and classify the tree
    Audit {
        /// Text file of whitespace-separated integer keys
        tree_file: PathBuf,
    },
    /// Locate a key and report the root-to-key descent path
    Find {
        /// Text file of whitespace-separated integer keys
        tree_file: PathBuf,
        /// The key to locate
        key: i64,
    },
    /// Test whether a candidate tree embeds in the main tree
    Subtree {
        /// Text file for the main tree
        tree_file: PathBuf,
        /// Text file for the candidate tree
        candidate_file: PathBuf,
    },
}

// ============================================================================
fn audit(tree_file: &PathBuf) -> Result<(), ingest::Error> {
    let tree = ingest::tree_from_path(tree_file)?;
    info!(
        "{}: {} nodes, height {}",
        tree_file.display(),
        tree.len(),
        tree.height()
    );

    let report = balance::audit_balance(&tree);

    for entry in report.entries() {
        if entry.is_violation() {
            println!("bal({}) = {} (AVL violation!)", entry.key, entry.factor);
        } else {
            println!("bal({}) = {}", entry.key, entry.factor);
        }
    }
    println!("AVL: {}", if report.is_avl() { "yes" } else { "no" });

    match (tree.minimum(), tree.maximum()) {
        (Some(min), Some(max)) => {
            println!("min: {}, max: {}, avg: {:.1}", min, max, tree.average())
        }
        _ => println!("Empty tree!"),
    }
    Ok(())
}

fn find(tree_file: &PathBuf, key: i64) -> Result<(), ingest::Error> {
    let tree = ingest::tree_from_path(tree_file)?;
    info!(
        "{}: {} nodes, height {}",
        tree_file.display(),
        tree.len(),
        tree.height()
    );

    let outcome = search::find_path(&tree, key);

    if outcome.truncated {
        warn!(
            "descent deeper than {} nodes; reported path is truncated",
            search::MAX_RECORDED_DEPTH
        );
    }
    if outcome.found {
        let path: Vec<_> = outcome.path.iter().map(|k| k.to_string()).collect();
        println!("{} found {}", key, path.join(", "));
    } else {
        println!("{} not found!", key);
    }
    Ok(())
}

fn embeds(tree_file: &PathBuf, candidate_file: &PathBuf) -> Result<(), ingest::Error> {
    let tree = ingest::tree_from_path(tree_file)?;
    let candidate = ingest::tree_from_path(candidate_file)?;
    info!(
        "main tree: {} nodes, candidate: {} nodes",
        tree.len(),
        candidate.len()
    );

    if subtree::is_subtree(&tree, &candidate) {
        println!("Subtree found!");
    } else {
        println!("Subtree not found!");
    }
    Ok(())
}

// ============================================================================
fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();

    let opts = Opts::parse();

    let result = match &opts.command {
        Command::Audit { tree_file } => audit(tree_file),
        Command::Find { tree_file, key } => find(tree_file, *key),
        Command::Subtree {
            tree_file,
            candidate_file,
        } => embeds(tree_file, candidate_file),
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        exit(1)
    }
}
