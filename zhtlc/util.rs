use std::str::FromStr;
use std::fmt::Display;
use clap::ArgMatches;
use chain::{TransactionDecoder, LocalDecoder};
use primitives::bytes::Bytes;
use rpc::RpcClient;
use config::{Config, DecoderKind};

pub fn parse_arg<T>(matches: &ArgMatches, name: &str) -> Result<T, String> where T: FromStr, T::Err: Display {
	let value = matches.value_of(name).ok_or_else(|| format!("Missing --{}", name))?;
	value.parse().map_err(|err| format!("Invalid --{} {}: {}", name, value, err))
}

pub fn parse_arg_or<T>(matches: &ArgMatches, name: &str, default: T) -> Result<T, String> where T: FromStr, T::Err: Display {
	if matches.is_present(name) {
		parse_arg(matches, name)
	} else {
		Ok(default)
	}
}

pub fn hex_arg(matches: &ArgMatches, name: &str) -> Result<Bytes, String> {
	parse_arg(matches, name)
}

pub fn rpc_client(cfg: &Config) -> Result<RpcClient, String> {
	RpcClient::http(&cfg.rpc)
		.map(|client| client.with_poll_interval(cfg.poll_interval))
		.map_err(|err| err.to_string())
}

pub fn decoder(cfg: &Config) -> Result<Box<dyn TransactionDecoder>, String> {
	match cfg.decoder {
		DecoderKind::Local => Ok(Box::new(LocalDecoder)),
		DecoderKind::Rpc => Ok(Box::new(rpc_client(cfg)?)),
	}
}
