//! Logger setup shared by the binaries.

extern crate ansi_term;
extern crate log;
extern crate env_logger;
extern crate time;

use std::env;
use std::io::Write;
use ansi_term::Colour as Color;
use log::Record;
use env_logger::Builder;

fn strftime() -> String {
	time::strftime("%Y-%m-%d %H:%M:%S %Z", &time::now()).unwrap_or_default()
}

/// Implement this trait to format a single log line.
pub trait LogFormatter: Send + Sync + 'static {
	fn format(&self, log_record: &Record) -> String;
}

/// Timestamp, level, target and message.
pub struct DateLogFormatter;

impl LogFormatter for DateLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		format!("{} {} {} {}", timestamp, record.level(), record.target(), record.args())
	}
}

/// `DateLogFormatter` with the timestamp and target highlighted for terminals.
pub struct DateAndColorLogFormatter;

impl LogFormatter for DateAndColorLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		format!("{} {} {} {}",
			Color::Black.bold().paint(timestamp),
			record.level(),
			Color::White.bold().paint(record.target()),
			record.args())
	}
}

/// Merges `filters` with `RUST_LOG`, the latter taking precedence.
pub fn filters(filters: &str) -> String {
	match env::var("RUST_LOG") {
		Ok(ref env_filters) if !env_filters.is_empty() => format!("{},{}", filters, env_filters),
		_ => filters.to_owned(),
	}
}

/// Installs the global logger. Fails when one is already installed.
pub fn init<T>(filters_spec: &str, formatter: T) -> Result<(), String> where T: LogFormatter {
	let mut builder = Builder::new();
	builder.parse(&filters(filters_spec));
	builder.format(move |buf, record| {
		writeln!(buf, "{}", formatter.format(record))
	});

	builder.try_init().map_err(|err| err.to_string())
}
