pub mod tables;

pub use tables::{render_config, render_results};
