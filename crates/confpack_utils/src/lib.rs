pub mod ecmascript;
pub mod indexmap;
