use std::time::Duration;
use clap;
use network::Network;
use rpc::{RpcConfig, DEFAULT_POLL_INTERVAL};
use util::parse_arg_or;
use LOG_INFO;

/// Where raw transactions are turned into decoded views.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum DecoderKind {
	/// Structural parse of the transparent section, in process.
	Local,
	/// `decoderawtransaction` of the node.
	Rpc,
}

pub struct Config {
	pub network: Network,
	pub quiet: bool,
	pub colored_logs: bool,
	pub log_filters: String,
	pub rpc: RpcConfig,
	pub decoder: DecoderKind,
	pub poll_interval: Duration,
	pub wait_timeout: Duration,
}

pub const DEFAULT_RPC_TIMEOUT: u64 = 30;
pub const DEFAULT_WAIT_TIMEOUT: u64 = 300;

pub fn parse(matches: &clap::ArgMatches) -> Result<Config, String> {
	let network = match (matches.is_present("testnet"), matches.is_present("regtest")) {
		(true, false) => Network::Testnet,
		(false, true) => Network::Regtest,
		(false, false) => Network::Mainnet,
		(true, true) => return Err("Only one testnet option can be used".into()),
	};

	let log_filters = match matches.value_of("log") {
		Some(log) => format!("{},{}", LOG_INFO, log),
		None => LOG_INFO.into(),
	};

	let rpc = RpcConfig {
		url: matches.value_of("rpc-url")
			.map(str::to_owned)
			.unwrap_or_else(|| format!("http://127.0.0.1:{}", network.default_rpc_port())),
		user: matches.value_of("rpc-user").map(str::to_owned),
		password: matches.value_of("rpc-password").map(str::to_owned),
		timeout: Duration::from_secs(parse_arg_or(matches, "rpc-timeout", DEFAULT_RPC_TIMEOUT)?),
	};

	let decoder = match matches.value_of("decoder") {
		Some("rpc") => DecoderKind::Rpc,
		Some("local") | None => DecoderKind::Local,
		Some(other) => return Err(format!("Unknown decoder {}", other)),
	};

	let config = Config {
		network: network,
		quiet: matches.is_present("quiet"),
		colored_logs: !matches.is_present("no-color"),
		log_filters: log_filters,
		rpc: rpc,
		decoder: decoder,
		poll_interval: Duration::from_secs(parse_arg_or(matches, "poll-interval", DEFAULT_POLL_INTERVAL.as_secs())?),
		wait_timeout: Duration::from_secs(parse_arg_or(matches, "wait-timeout", DEFAULT_WAIT_TIMEOUT)?),
	};

	Ok(config)
}

#[cfg(test)]
mod tests {
	use std::time::Duration;
	use clap;
	use network::Network;
	use super::{parse, Config, DecoderKind};

	fn parse_args(args: &[&str]) -> Result<Config, String> {
		let yaml = load_yaml!("cli.yml");
		let matches = clap::App::from_yaml(yaml).get_matches_from_safe(args).map_err(|err| err.to_string())?;
		parse(&matches)
	}

	#[test]
	fn test_defaults() {
		let config = parse_args(&["zhtlc"]).unwrap();
		assert_eq!(config.network, Network::Mainnet);
		assert_eq!(config.rpc.url, "http://127.0.0.1:8232");
		assert_eq!(config.rpc.user, None);
		assert_eq!(config.rpc.timeout, Duration::from_secs(30));
		assert_eq!(config.decoder, DecoderKind::Local);
		assert_eq!(config.poll_interval, Duration::from_secs(5));
		assert_eq!(config.wait_timeout, Duration::from_secs(300));
		assert_eq!(config.log_filters, "info");
	}

	#[test]
	fn test_network_and_rpc() {
		let config = parse_args(&[
			"zhtlc", "--regtest", "--rpc-user", "user", "--rpc-password", "pass",
			"--decoder", "rpc", "--log", "rpc=trace", "--poll-interval", "1",
		]).unwrap();
		assert_eq!(config.network, Network::Regtest);
		assert_eq!(config.rpc.url, "http://127.0.0.1:18232");
		assert_eq!(config.rpc.user, Some("user".to_owned()));
		assert_eq!(config.rpc.password, Some("pass".to_owned()));
		assert_eq!(config.decoder, DecoderKind::Rpc);
		assert_eq!(config.log_filters, "info,rpc=trace");
		assert_eq!(config.poll_interval, Duration::from_secs(1));
	}

	#[test]
	fn test_invalid_options() {
		assert!(parse_args(&["zhtlc", "--testnet", "--regtest"]).is_err());
		assert!(parse_args(&["zhtlc", "--rpc-timeout", "soon"]).is_err());
		assert!(parse_args(&["zhtlc", "--decoder", "zcash-cli"]).is_err());
	}
}
