//! Print the share indices assigned to a sequence of blobs.
//!
//! ```sh
//! cargo run --features cli --bin square-layout -- --cursor 1 128 128 128
//! ```

use clap::{value_parser, Arg, ArgAction, Command};
use commonware_inclusion::{Config, DEFAULT_SUBTREE_ROOT_THRESHOLD};
use std::{num::NonZeroUsize, process::exit};
use tracing::{debug, error, info, Level};

fn main() {
    let matches = Command::new("square-layout")
        .about("Place blobs in a data square following the blob share commitment rules")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("cursor")
                .long("cursor")
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Index of the first unoccupied share"),
        )
        .arg(
            Arg::new("threshold")
                .long("threshold")
                .value_parser(value_parser!(NonZeroUsize))
                .help(format!(
                    "Subtree root threshold shared by all participants \
                     [default: {DEFAULT_SUBTREE_ROOT_THRESHOLD}]"
                )),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the layout as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Log each placement"),
        )
        .arg(
            Arg::new("blobs")
                .required(true)
                .num_args(1..)
                .value_delimiter(',')
                .value_parser(value_parser!(usize))
                .help("Length of each blob in shares, in placement order"),
        )
        .get_matches();

    // Initialize logging
    let level = if matches.get_flag("verbose") {
        Level::TRACE
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    // Parse arguments
    let cursor = *matches
        .get_one::<usize>("cursor")
        .expect("cursor has a default");
    let mut config = Config::default();
    if let Some(threshold) = matches.get_one::<NonZeroUsize>("threshold") {
        config.subtree_root_threshold = *threshold;
    }
    let blob_lens: Vec<usize> = matches
        .get_many::<usize>("blobs")
        .expect("blobs are required")
        .copied()
        .collect();
    debug!(cursor, ?config, blobs = blob_lens.len(), "planning layout");

    // Place blobs
    let layout = match config.plan(cursor, &blob_lens) {
        Ok(layout) => layout,
        Err(err) => {
            error!(?err, root = %err.root(), "failed to plan layout");
            exit(1);
        }
    };

    // Report
    if matches.get_flag("json") {
        match serde_json::to_string(&layout) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                error!(?err, "failed to serialize layout");
                exit(1);
            }
        }
        return;
    }
    for (blob, (&index, &len)) in layout.indexes.iter().zip(&blob_lens).enumerate() {
        println!(
            "blob={blob} len={len} index={index} width={}",
            config.subtree_width(len)
        );
    }
    info!(shares_used = layout.shares_used, "planned layout");
}
