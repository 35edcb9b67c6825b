//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("flexq")
        .about("Inspect, print, and compile query node trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(dump_command())
        .subcommand(print_command())
        .subcommand(compile_command())
}

fn with_tree_args(cmd: Command) -> Command {
    cmd.arg(tree_path_arg())
        .arg(tree_text_arg())
        .arg(verbose_arg())
}

/// Show the debug dump of a tree.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the debug dump of a query tree")
        .override_usage(
            "\
  flexq dump <TREE>
  flexq dump -t <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  flexq dump tree.json                          # XML-like dump
  flexq dump tree.json --ids                    # with node ids
  flexq dump tree.json --json                   # normalized JSON
  flexq dump -t '{"type":"field","text":"a"}'   # inline tree"#,
        )
        .arg(ids_arg())
        .arg(json_arg());

    with_tree_args(cmd)
}

/// Print the round-trip query string of a tree.
pub fn print_command() -> Command {
    let cmd = Command::new("print")
        .about("Print a query tree in query syntax")
        .override_usage(
            "\
  flexq print <TREE> [--default-field <FIELD>]
  flexq print -t <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  flexq print tree.json                         # escaped query syntax
  flexq print tree.json --default-field body    # omit body: prefixes
  flexq print tree.json --no-escape             # verbatim terms"#,
        )
        .arg(default_field_arg())
        .arg(no_escape_arg());

    with_tree_args(cmd)
}

/// Compile a tree with the standard builders.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a query tree with the standard builders")
        .override_usage(
            "\
  flexq compile <TREE> [--default-field <FIELD>] [--max-clauses <N>]
  flexq compile -t <JSON>",
        )
        .after_help(
            r#"EXAMPLES:
  flexq compile tree.json                       # compiled query dump
  flexq compile tree.json --default-field body  # resolve unscoped terms
  cat tree.json | flexq compile - -vv           # from stdin, trace builders"#,
        )
        .arg(default_field_arg())
        .arg(max_clauses_arg());

    with_tree_args(cmd)
}
