pub mod check;
pub mod dump;
pub mod expand;
pub mod generate;
pub mod run_common;
pub mod spec_loader;

#[cfg(test)]
mod generate_tests;
