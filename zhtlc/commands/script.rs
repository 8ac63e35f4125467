use clap::ArgMatches;
use crypto::sha256;
use primitives::hash::H256;
use script::{HtlcLeg, HtlcParams, HtlcScript, build_htlc_script};
use config::Config;
use util::{parse_arg, hex_arg};

pub fn script(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let htlc = build(matches)?;

	println!("redeem script: {}", htlc.to_bytes());
	println!("asm:           {}", htlc.script());
	println!("p2sh address:  {}", htlc.address(cfg.network));
	println!("scriptPubKey:  {}", htlc.p2sh_script_pubkey().to_bytes());
	Ok(())
}

fn parse_leg(value: Option<&str>) -> Result<HtlcLeg, String> {
	match value {
		Some("source") => Ok(HtlcLeg::Source),
		Some("destination") => Ok(HtlcLeg::Destination),
		_ => Err("--leg must be source or destination".into()),
	}
}

fn build(matches: &ArgMatches) -> Result<HtlcScript, String> {
	let leg = parse_leg(matches.value_of("leg"))?;

	let order_hash: H256 = parse_arg(matches, "order-hash")?;
	let hashlock = match matches.value_of("secret") {
		Some(_) => sha256(&hex_arg(matches, "secret")?).to_vec().into(),
		None => hex_arg(matches, "hashlock")?,
	};

	let mut params = HtlcParams::for_leg(
		leg,
		order_hash,
		hashlock,
		hex_arg(matches, "user-pubkey")?,
		hex_arg(matches, "resolver-pubkey")?,
		parse_arg(matches, "withdrawal")?,
		parse_arg(matches, "cancellation")?,
	);
	params.lock_till_withdrawal = !matches.is_present("no-withdrawal-lock");

	build_htlc_script(leg, &params).map_err(|err| err.to_string())
}
