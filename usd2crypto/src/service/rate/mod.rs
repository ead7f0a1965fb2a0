pub mod provider_coinbase;
mod rate;

pub use rate::*;
pub use provider_coinbase as coinbase;
