pub mod ethereum;
pub mod runtime;
pub mod wallet;
