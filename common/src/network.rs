pub mod adapter;
pub mod codec;
pub mod range;
