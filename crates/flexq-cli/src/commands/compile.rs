use std::path::PathBuf;

use flexq_compiler::{CompileOptions, TreeCompiler};

use super::tree_loader::load_tree;

pub struct CompileArgs {
    pub tree_path: Option<PathBuf>,
    pub tree_text: Option<String>,
    pub default_field: Option<String>,
    pub max_clauses: Option<usize>,
}

impl CompileArgs {
    fn options(&self) -> CompileOptions {
        let mut options = CompileOptions::new();
        if let Some(field) = &self.default_field {
            options = options.default_field(field.as_str());
        }
        if let Some(max) = self.max_clauses {
            options = options.max_clause_count(max);
        }
        options
    }
}

pub fn run(args: CompileArgs) {
    let tree = match load_tree(args.tree_path.as_deref(), args.tree_text.as_deref()) {
        Ok(tree) => tree,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let compiler = TreeCompiler::standard().with_options(args.options());
    match compiler.compile(&tree) {
        Ok(query) => print!("{}", query),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
