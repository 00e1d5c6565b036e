//! # bplus
//!
//! Command-line front end for the B+ tree index.
//!
//! ```text
//! bplus init <page_size>     create an empty index file and report the page size
//! bplus [--order <t>]        run commands from stdin against one tree
//! ```

use std::env;
use std::io;
use std::process::ExitCode;

use tracing::Level;

use bplus_index::common::config::{INDEX_FILE_NAME, LOG_ENV_VAR};
use bplus_index::{BPlusTree, IndexFile, Session, TreeConfig};

const USAGE: &str = "usage: bplus init <page_size>\n       bplus [--order <t>]";

enum Mode {
    Init { page_size: String },
    Session { order: Option<usize> },
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(mode) = parse_args(&args) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let result = match mode {
        Mode::Init { page_size } => init(&page_size),
        Mode::Session { order } => run_session(order),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Option<Mode> {
    match args {
        [] => Some(Mode::Session { order: None }),
        [flag, order] if flag == "--order" => Some(Mode::Session {
            order: Some(order.parse().ok()?),
        }),
        [cmd, page_size] if cmd == "init" => Some(Mode::Init {
            page_size: page_size.clone(),
        }),
        _ => None,
    }
}

/// Log to stderr so protocol output on stdout stays clean.
fn init_logging() {
    let level = env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<Level>().ok())
        .unwrap_or(Level::WARN);

    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .try_init();
}

fn init(page_size: &str) -> bplus_index::Result<()> {
    let page_size = IndexFile::parse_page_size(page_size)?;
    IndexFile::initialize(INDEX_FILE_NAME, page_size)?;
    println!("Initialized B+ tree with page size {} bytes.", page_size);
    Ok(())
}

fn run_session(order: Option<usize>) -> bplus_index::Result<()> {
    let mut config = TreeConfig::default();
    if let Some(order) = order {
        config = config.order(order);
    }
    let tree = BPlusTree::with_config(config)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(tree, stdout.lock());
    session.run(stdin.lock())?;
    Ok(())
}
