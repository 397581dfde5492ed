use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use chess_core::board::Position;

/// Perft driver: count legal-move-tree leaves and check them against
/// expected node counts.
#[derive(Parser, Debug)]
#[command(author, version, about = "Perft harness for the chess position core")]
struct Cli {
    /// Expected-count file with `<FEN> ; <d1> ; <d2> ; ...` lines.
    #[arg(long, conflicts_with = "fen")]
    file: Option<PathBuf>,

    /// Single position to expand instead of a file run.
    #[arg(long)]
    fen: Option<String>,

    /// Depth for --fen mode, and the cap for file runs.
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Print per-move subtree counts in --fen mode.
    #[arg(long)]
    divide: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match (&cli.file, &cli.fen) {
        (Some(path), _) => run_file(path, cli.depth),
        (None, Some(fen)) => run_fen(fen, cli.depth, cli.divide),
        (None, None) => bail!("pass either --file or --fen"),
    }
}

fn run_file(path: &PathBuf, depth_cap: u32) -> Result<()> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut failures = 0usize;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut parts = line.split(';').map(str::trim);
        let fen = parts.next().context("line must start with a FEN")?;
        let pos = Position::from_fen(fen).with_context(|| format!("parsing '{fen}'"))?;

        for (idx, token) in parts.enumerate() {
            let depth = idx as u32 + 1;
            if depth > depth_cap {
                break;
            }
            let expected: u64 = token
                .parse()
                .with_context(|| format!("bad node count '{token}'"))?;
            let nodes = pos.perft(depth);
            if nodes == expected {
                println!("ok   {fen} perft({depth}) = {nodes}");
            } else {
                println!("FAIL {fen} perft({depth}) = {nodes}, expected {expected}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} perft checks failed");
    }
    Ok(())
}

fn run_fen(fen: &str, depth: u32, divide: bool) -> Result<()> {
    let pos = Position::from_fen(fen).with_context(|| format!("parsing '{fen}'"))?;
    println!("{pos}");

    if !divide {
        println!("perft({depth}) = {}", pos.perft(depth));
        return Ok(());
    }

    let mut work = pos.clone();
    let mut total = 0u64;
    for mv in pos.legal_moves() {
        work.make_move(mv);
        let nodes = if depth > 1 { work.perft(depth - 1) } else { 1 };
        work.unmake_move();
        println!("{mv}: {nodes}");
        total += nodes;
    }
    println!("total: {total}");
    Ok(())
}
