//! Command-line surface, grounded on the original's `processParameters`:
//! same flags (`-a -c -f -m -n -r -v`), same defaults, reimplemented with
//! `clap`'s derive API instead of a hand-rolled `argv` switch.

use clap::Parser;
use std::path::PathBuf;

/// Four classical MST algorithms driven by a distributed sort/scan phase
/// over a simulated worker cohort.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Algorithm: 0 Kruskal, 1 Prim (Fibonacci), 2 Prim (Binary), 3 Borůvka.
    #[arg(short = 'a', long = "algorithm", default_value_t = 0)]
    pub algorithm: i64,

    /// Number of columns, used only with `--new-maze`/`--print-maze`.
    #[arg(short = 'c', long = "columns", default_value_t = 3)]
    pub columns: usize,

    /// Number of rows, used only with `--new-maze`/`--print-maze`.
    #[arg(short = 'r', long = "rows", default_value_t = 2)]
    pub rows: usize,

    /// Graph file to read (or to write to, with `--new-maze`).
    #[arg(short = 'f', long = "file", default_value = "maze.csv")]
    pub graph_file: PathBuf,

    /// Generate a new random grid graph and write it to `--file` before
    /// running.
    #[arg(short = 'n', long = "new-maze")]
    pub new_maze: bool,

    /// Render the resulting MST as an ASCII maze (requires the correct
    /// `--rows`/`--columns` for the graph actually loaded).
    #[arg(short = 'm', long = "print-maze")]
    pub print_maze: bool,

    /// Print the input graph and the resulting MST, edge by edge.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Cli {
        Cli::parse()
    }
}
