mod network;

pub use network::{Network, AddressPrefixes};
