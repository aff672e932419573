use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use bintree::render::RenderOptions;
use bintree::{build_ideal, build_optimal, AvlTree, Tree, TreeError, UnbalancedTree};

#[derive(Parser, Debug)]
#[command(name = "bintree", about = "Build a binary search tree and report on its shape")]
struct Cli {
    /// Which kind of tree to build.
    #[arg(long, value_enum, default_value_t = Kind::Avl)]
    kind: Kind,
    /// How many random values to generate.
    #[arg(long, default_value_t = 100)]
    count: usize,
    /// Smallest random value (inclusive).
    #[arg(long, default_value_t = 100, allow_hyphen_values = true)]
    min: i64,
    /// Largest random value (exclusive).
    #[arg(long, default_value_t = 500, allow_hyphen_values = true)]
    max: i64,
    /// Seed for the random values, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    /// Use these values instead of random ones (comma separated).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Vec<i64>,
    /// Delete these values after building (unbalanced and avl only).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    delete: Vec<i64>,
    /// Write the tree as a Graphviz DOT file.
    #[arg(long)]
    dot: Option<PathBuf>,
    /// Draw NULL leaves for missing children in the DOT output.
    #[arg(long)]
    show_empty: bool,
    /// Print the tree sideways to stdout.
    #[arg(long)]
    print: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    /// Perfectly balanced, from the sorted values.
    Ideal,
    /// Plain BST in insertion order.
    Unbalanced,
    /// Self-balancing AVL tree.
    Avl,
    /// Minimum weighted search cost, with random weights.
    Optimal,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let values = if cli.values.is_empty() {
        if cli.min >= cli.max {
            bail!("--min ({}) must be below --max ({})", cli.min, cli.max);
        }
        (0..cli.count)
            .map(|_| rng.gen_range(cli.min..cli.max))
            .collect()
    } else {
        cli.values.clone()
    };

    let tree = build(&cli, values, &mut rng)?;
    report(&tree);

    if cli.print {
        print!("{}", tree.sideways());
    }

    if let Some(path) = &cli.dot {
        let options = RenderOptions {
            show_empty: cli.show_empty,
        };
        fs::write(path, tree.render_graph().to_dot(&options))
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote graph");
    }

    Ok(())
}

fn build(cli: &Cli, mut values: Vec<i64>, rng: &mut StdRng) -> Result<Tree<i64>> {
    if !cli.delete.is_empty() && matches!(cli.kind, Kind::Ideal | Kind::Optimal) {
        bail!("--delete needs a mutable tree (unbalanced or avl)");
    }

    let tree = match cli.kind {
        Kind::Ideal => {
            values.sort_unstable();
            values.dedup();
            build_ideal(&values)?
        }
        Kind::Unbalanced => {
            let mut tree: UnbalancedTree<_> = values.into_iter().collect();
            for value in &cli.delete {
                if tree.delete(value).is_none() {
                    warn!(value = *value, "{}", TreeError::NotFound);
                }
            }
            tree.into_tree()
        }
        Kind::Avl => {
            let mut tree: AvlTree<_> = values.into_iter().collect();
            for value in &cli.delete {
                if tree.delete(value).is_none() {
                    warn!(value = *value, "{}", TreeError::NotFound);
                }
            }
            tree.check_invariants()?;
            tree.into_tree()
        }
        Kind::Optimal => {
            values.sort_unstable();
            values.dedup();
            let weighted: Vec<(i64, u64)> = values
                .into_iter()
                .map(|value| (value, rng.gen_range(1..=100)))
                .collect();
            build_optimal(weighted)?.into_tree()
        }
    };

    Ok(tree)
}

fn report(tree: &Tree<i64>) {
    println!("size:          {}", tree.size());
    println!("height:        {}", tree.height());
    match tree.average_depth() {
        Ok(depth) => println!("average depth: {:.3}", depth),
        Err(err) => warn!("average depth: {}", err),
    }
    println!("checksum:      {}", tree.checksum());
}
