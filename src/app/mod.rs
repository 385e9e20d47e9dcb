pub mod commands;

pub use commands::{demo, run};
