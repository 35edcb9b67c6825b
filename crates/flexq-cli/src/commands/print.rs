use std::path::PathBuf;

use flexq_core::{EscapeQuerySyntax, QueryStringWriter, StandardEscaper, Verbatim};

use super::tree_loader::load_tree;

pub struct PrintArgs {
    pub tree_path: Option<PathBuf>,
    pub tree_text: Option<String>,
    pub default_field: Option<String>,
    pub escape: bool,
}

pub fn run(args: PrintArgs) {
    let tree = match load_tree(args.tree_path.as_deref(), args.tree_text.as_deref()) {
        Ok(tree) => tree,
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    };

    let Some(root) = tree.root() else {
        eprintln!("error: query tree has no root");
        std::process::exit(1);
    };

    let escaper: &dyn EscapeQuerySyntax = if args.escape {
        &StandardEscaper
    } else {
        &Verbatim
    };
    let mut writer = QueryStringWriter::new(escaper);
    if let Some(field) = args.default_field {
        writer = writer.default_field(field);
    }

    println!("{}", writer.write(tree.get(root)));
}
