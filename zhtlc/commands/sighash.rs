use clap::ArgMatches;
use chain::TransactionDecoder;
use script::{Script, SighashBase, build_sighash};
use config::Config;
use util::{self, parse_arg, parse_arg_or, hex_arg};

pub fn sighash(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let raw = hex_arg(matches, "tx")?;
	let input: usize = parse_arg(matches, "input")?;
	let script: Script = hex_arg(matches, "script")?.into();
	let hash_type = parse_arg_or(matches, "hash-type", SighashBase::All as u32)?;

	let view = util::decoder(cfg)?.decode_raw_transaction(&raw)?;
	let digest = build_sighash(&view, input, &script, hash_type).map_err(|err| err.to_string())?;

	println!("{}", digest);
	Ok(())
}
