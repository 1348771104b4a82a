//! Demo driver: builds a few fixed trees and prints what each operation
//! returns for them.

use std::process;

use bintree::{compare, Node, Order, Tree};
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Runs traversal, search, comparison and insertion on example binary trees
#[derive(Parser, Debug)]
#[command(name = "bintree", version, about, long_about = None)]
struct Cli {
    /// Log more to stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,

    /// Also traverse the first tree in this order (pre-order, in-order, post-order)
    #[arg(long, env = "BINTREE_ORDER")]
    order: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "aborting");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
    tracing::info!(%filter, "logging initialised");
}

/// Root 10, left child `left` (with left child `left_left`), right child 15.
fn example(left: i64, left_left: i64) -> Tree {
    Tree::with_root(
        Node::leaf(10)
            .with_left(Node::leaf(left).with_left(Node::leaf(left_left)))
            .with_right(Node::leaf(15)),
    )
}

fn run(cli: &Cli) -> bintree::Result<()> {
    let tree = example(5, 4);
    let tree_b = example(5, 4);
    let tree_c = example(7, 5);

    for order in Order::ALL {
        println!("{order} traversal: {}", tree.traverse(order));
    }
    if let Some(order) = &cli.order {
        println!("{order} traversal: {}", tree.traverse_named(order)?);
    }

    for needle in [10, 42] {
        println!("bfs: did find {needle} in tree? {}", tree.bfs(needle));
    }

    println!(
        "tree and treeB are the same? {}",
        compare(tree.root(), tree_b.root())
    );
    println!(
        "tree and treeC are the same? {}",
        compare(tree.root(), tree_c.root())
    );

    println!("inserting nodes into new tree...");
    let mut tree_d = Tree::with_root(Node::leaf(10));
    for data in [7, 15, 3, 12] {
        tree_d.insert(Node::leaf(data));
        println!("path: {}", tree_d.traverse(Order::InOrder));
    }

    for needle in [3, 42] {
        println!("dfs: did find {needle} in treeD? {}", tree_d.dfs(needle));
    }

    Ok(())
}
