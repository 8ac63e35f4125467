//! Zcash transparent HTLC toolkit.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
extern crate bitcrypto as crypto;
extern crate chain;
extern crate keys;
extern crate logs;
extern crate network;
extern crate primitives;
extern crate rpc;
extern crate script;

mod commands;
mod config;
mod util;

pub const LOG_INFO: &'static str = "info";

fn main() {
	if let Err(err) = run() {
		println!("{}", err);
		::std::process::exit(1);
	}
}

fn run() -> Result<(), String> {
	let yaml = load_yaml!("cli.yml");
	let matches = clap::App::from_yaml(yaml).get_matches();
	let cfg = config::parse(&matches)?;

	if !cfg.quiet {
		if cfg!(windows) || !cfg.colored_logs {
			logs::init(&cfg.log_filters, logs::DateLogFormatter)?;
		} else {
			logs::init(&cfg.log_filters, logs::DateAndColorLogFormatter)?;
		}
	}

	match matches.subcommand() {
		("script", Some(script_matches)) => commands::script(&cfg, script_matches),
		("sighash", Some(sighash_matches)) => commands::sighash(&cfg, sighash_matches),
		("splice", Some(splice_matches)) => commands::splice(&cfg, splice_matches),
		("claim", Some(claim_matches)) => commands::claim(&cfg, claim_matches),
		("refund", Some(refund_matches)) => commands::refund(&cfg, refund_matches),
		("broadcast", Some(broadcast_matches)) => commands::broadcast(&cfg, broadcast_matches),
		("wait", Some(wait_matches)) => commands::wait(&cfg, wait_matches),
		_ => Err("No command given, see --help".into()),
	}
}
