//! Conversion between decimal ZEC amounts and integer zatoshis.
//!
//! Amounts are handled as text so that no value is ever rounded through a float.

use constants::{COIN, MAX_MONEY};
use Error;

const DECIMALS: usize = 8;

/// Parses a decimal amount such as `"0.1"` or `"12.00000001"` into zatoshis.
pub fn parse_amount(amount: &str) -> Result<u64, Error> {
	let invalid = || Error::InvalidAmount(amount.to_owned());
	let trimmed = amount.trim();

	let (whole, fraction) = match trimmed.find('.') {
		Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
		None => (trimmed, ""),
	};

	if whole.is_empty() && fraction.is_empty() {
		return Err(invalid());
	}

	if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
		return Err(invalid());
	}

	if fraction.len() > DECIMALS {
		// zcashd prints exactly eight decimals, anything further is precision we would lose
		if fraction[DECIMALS..].bytes().any(|b| b != b'0') {
			return Err(invalid());
		}
	}

	let whole: u64 = if whole.is_empty() {
		0
	} else {
		whole.parse().map_err(|_| invalid())?
	};

	let mut fraction_value = 0u64;
	for (i, digit) in fraction.bytes().take(DECIMALS).enumerate() {
		fraction_value += (digit - b'0') as u64 * 10u64.pow((DECIMALS - 1 - i) as u32);
	}

	let value = whole.checked_mul(COIN)
		.and_then(|v| v.checked_add(fraction_value))
		.ok_or_else(invalid)?;

	if value > MAX_MONEY {
		return Err(invalid());
	}

	Ok(value)
}

/// Formats zatoshis as a decimal amount with eight fractional digits.
pub fn format_amount(zatoshis: u64) -> String {
	format!("{}.{:08}", zatoshis / COIN, zatoshis % COIN)
}
