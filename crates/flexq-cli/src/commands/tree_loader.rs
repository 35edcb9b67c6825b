use std::fs;
use std::io::{self, Read};
use std::path::Path;

use flexq_core::{QueryTree, parse_tree};
use tracing::debug;

pub fn load_tree(tree_path: Option<&Path>, tree_text: Option<&str>) -> Result<QueryTree, String> {
    let json = load_tree_source(tree_path, tree_text)?;
    if json.trim().is_empty() {
        return Err("query tree cannot be empty".to_string());
    }
    let tree = parse_tree(&json).map_err(|e| e.to_string())?;
    debug!(nodes = tree.len(), "loaded query tree");
    Ok(tree)
}

pub fn load_tree_source(
    tree_path: Option<&Path>,
    tree_text: Option<&str>,
) -> Result<String, String> {
    if let Some(text) = tree_text {
        return Ok(text.to_string());
    }

    if let Some(path) = tree_path {
        if path.as_os_str() == "-" {
            debug!("reading query tree from stdin");
            return load_stdin();
        }
        debug!(path = %path.display(), "reading query tree");
        return fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e));
    }

    Err("query tree is required: use positional argument or -t/--tree".to_string())
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}
