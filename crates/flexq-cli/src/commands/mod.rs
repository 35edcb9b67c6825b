pub mod compile;
pub mod dump;
pub mod print;
pub mod tree_loader;

#[cfg(test)]
mod tree_loader_tests;
