use std::path::PathBuf;

use flexq_core::TreePrinter;

use super::tree_loader::load_tree;

pub struct DumpArgs {
    pub tree_path: Option<PathBuf>,
    pub tree_text: Option<String>,
    pub ids: bool,
    pub json: bool,
}

pub fn run(args: DumpArgs) {
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

    if !args.json {
        print!("{}", TreePrinter::new(&tree).with_ids(args.ids).dump(root));
        return;
    }

    // Loading already propagated proximity fields, so this is the normalized form
    let json = tree
        .to_raw(root)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::to_string_pretty(&raw).map_err(|e| e.to_string()));
    match json {
        Ok(json) => println!("{}", json),
        Err(msg) => {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        }
    }
}
