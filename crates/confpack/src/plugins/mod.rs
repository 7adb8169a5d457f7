pub mod global_config;
