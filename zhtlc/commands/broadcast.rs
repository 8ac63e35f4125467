use clap::ArgMatches;
use config::Config;
use util::{self, parse_arg, hex_arg};

pub fn broadcast(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let raw = hex_arg(matches, "tx")?;
	let client = util::rpc_client(cfg)?;

	let txid = client.send_raw_transaction(&raw).map_err(|err| err.to_string())?;
	println!("{}", txid);

	if matches.is_present("confirmations") {
		let confirmations: u32 = parse_arg(matches, "confirmations")?;
		let confirmed = client.wait_for_confirmation(&txid, confirmations, cfg.wait_timeout)
			.map_err(|err| err.to_string())?;
		info!(target: "zhtlc", "Transaction {} has {} confirmations", txid, confirmed);
	}

	Ok(())
}
