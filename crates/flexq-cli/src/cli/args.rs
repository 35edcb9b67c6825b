//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be
//! composed into several commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// JSON tree file, or `-` for stdin (positional).
pub fn tree_path_arg() -> Arg {
    Arg::new("tree_path")
        .value_name("TREE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON-encoded query tree file, or - for stdin")
}

/// Inline JSON tree (-t/--tree).
pub fn tree_text_arg() -> Arg {
    Arg::new("tree_text")
        .short('t')
        .long("tree")
        .value_name("JSON")
        .conflicts_with("tree_path")
        .help("Inline JSON-encoded query tree")
}

/// Field treated as implicit (--default-field).
pub fn default_field_arg() -> Arg {
    Arg::new("default_field")
        .long("default-field")
        .value_name("FIELD")
        .help("Field used for terms without one")
}

/// Disable escaping (--no-escape).
pub fn no_escape_arg() -> Arg {
    Arg::new("no_escape")
        .long("no-escape")
        .action(ArgAction::SetTrue)
        .help("Print field names and terms verbatim")
}

/// Boolean clause limit (--max-clauses).
pub fn max_clauses_arg() -> Arg {
    Arg::new("max_clauses")
        .long("max-clauses")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("Maximum number of clauses in one boolean query [default: 1024]")
}

/// Prefix elements with node ids (--ids).
pub fn ids_arg() -> Arg {
    Arg::new("ids")
        .long("ids")
        .action(ArgAction::SetTrue)
        .help("Show node ids")
}

/// Print the normalized tree as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .conflicts_with("ids")
        .help("Print the loaded tree as JSON instead of the debug dump")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log to stderr (-v for debug, -vv for trace)")
}
