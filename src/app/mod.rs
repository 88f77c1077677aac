// Application layer: wires CLI arguments, config and transport into a run.

pub mod runner;

pub use runner::run_cli;
