pub mod normalize_options;
