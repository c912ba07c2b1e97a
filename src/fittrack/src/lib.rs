#[macro_use]
extern crate log;

mod driver;
pub use driver::{OutputFormat, RunOptions, load_packages, render, run, sample_packages};

pub use fittrack_algos as algos;
pub use fittrack_types as types;
