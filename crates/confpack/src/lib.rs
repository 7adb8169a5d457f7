mod compiler;
mod plugins;
mod utils;

pub use crate::{compiler::Compiler, plugins::global_config::GlobalConfigPlugin};
pub use confpack_common::*;
pub use confpack_plugin::{Plugin, SharedPlugin};
