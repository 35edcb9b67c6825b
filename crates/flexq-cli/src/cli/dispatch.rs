//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::compile::CompileArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::print::PrintArgs;

pub struct DumpParams {
    pub tree_path: Option<PathBuf>,
    pub tree_text: Option<String>,
    pub ids: bool,
    pub json: bool,
    pub verbose: u8,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: m.get_one::<PathBuf>("tree_path").cloned(),
            tree_text: m.get_one::<String>("tree_text").cloned(),
            ids: m.get_flag("ids"),
            json: m.get_flag("json"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            tree_path: p.tree_path,
            tree_text: p.tree_text,
            ids: p.ids,
            json: p.json,
        }
    }
}

pub struct PrintParams {
    pub tree_path: Option<PathBuf>,
    pub tree_text: Option<String>,
    pub default_field: Option<String>,
    pub no_escape: bool,
    pub verbose: u8,
}

impl PrintParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: m.get_one::<PathBuf>("tree_path").cloned(),
            tree_text: m.get_one::<String>("tree_text").cloned(),
            default_field: m.get_one::<String>("default_field").cloned(),
            no_escape: m.get_flag("no_escape"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<PrintParams> for PrintArgs {
    fn from(p: PrintParams) -> Self {
        Self {
            tree_path: p.tree_path,
            tree_text: p.tree_text,
            default_field: p.default_field,
            escape: !p.no_escape,
        }
    }
}

pub struct CompileParams {
    pub tree_path: Option<PathBuf>,
    pub tree_text: Option<String>,
    pub default_field: Option<String>,
    pub max_clauses: Option<usize>,
    pub verbose: u8,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            tree_path: m.get_one::<PathBuf>("tree_path").cloned(),
            tree_text: m.get_one::<String>("tree_text").cloned(),
            default_field: m.get_one::<String>("default_field").cloned(),
            max_clauses: m.get_one::<usize>("max_clauses").copied(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            tree_path: p.tree_path,
            tree_text: p.tree_text,
            default_field: p.default_field,
            max_clauses: p.max_clauses,
        }
    }
}
