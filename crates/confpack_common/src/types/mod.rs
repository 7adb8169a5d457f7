pub mod compilation;
pub mod compilation_asset;
