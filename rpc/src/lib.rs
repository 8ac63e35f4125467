extern crate jsonrpc_core;
#[macro_use]
extern crate log;
extern crate reqwest;
extern crate rustc_hex as hex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

extern crate chain;
extern crate primitives;

mod client;
mod error;
mod poll;
pub mod types;

pub use client::{RpcClient, RpcConfig, Transport, HttpTransport, DEFAULT_POLL_INTERVAL, MAX_CONFIRMATIONS};
pub use error::Error;
pub use poll::poll;
