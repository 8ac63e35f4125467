use clap::ArgMatches;
use chain::{TransactionDecoder, splice_script_sig};
use config::Config;
use util::{self, parse_arg, hex_arg};

pub fn splice(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let raw = hex_arg(matches, "tx")?;
	let input: usize = parse_arg(matches, "input")?;
	let script_sig = hex_arg(matches, "script-sig")?;

	let view = util::decoder(cfg)?.decode_raw_transaction(&raw)?;
	let patched = splice_script_sig(&raw, &view, input, &script_sig).map_err(|err| err.to_string())?;

	println!("{}", patched);
	Ok(())
}
