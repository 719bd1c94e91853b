mod provider;

pub use provider::{make_reader, BlockHeader, ChainReader};
