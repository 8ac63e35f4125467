use clap::ArgMatches;
use rpc::types::H256;
use config::Config;
use util::{self, parse_arg, parse_arg_or};

pub fn wait(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let client = util::rpc_client(cfg)?;

	if let Some(operation) = matches.value_of("operation") {
		let status = client.wait_for_operation(operation, cfg.wait_timeout).map_err(|err| err.to_string())?;
		match status.result {
			Some(result) => println!("{}", result.txid),
			None => println!("{}", status.id),
		}
		return Ok(());
	}

	let txid: H256 = parse_arg(matches, "txid")?;
	let confirmations = parse_arg_or(matches, "confirmations", 1u32)?;
	let confirmed = client.wait_for_confirmation(&txid, confirmations, cfg.wait_timeout)
		.map_err(|err| err.to_string())?;

	println!("{}", confirmed);
	Ok(())
}
