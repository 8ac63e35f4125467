/// Setting nSequence to this value for every input in a transaction disables nLockTime.
pub const SEQUENCE_FINAL: u32 = 0xffffffff;

/// If this flag set, CTxIn::nSequence is NOT interpreted as a relative lock-time.
pub const SEQUENCE_LOCKTIME_DISABLE_FLAG: u32 = 1u32 << 31;

/// If CTxIn::nSequence encodes a relative lock-time and this flag
/// is set, the relative lock-time has units of 512 seconds,
/// otherwise it specifies blocks with a granularity of 1.
pub const SEQUENCE_LOCKTIME_TYPE_FLAG: u32 = 1u32 << 22;

/// If CTxIn::nSequence encodes a relative lock-time, this mask is
/// applied to extract that lock-time from the sequence field.
pub const SEQUENCE_LOCKTIME_MASK: u32 = 0x0000ffff;

/// Threshold for `nLockTime`: below this value it is interpreted as block number,
/// otherwise as UNIX timestamp.
pub const LOCKTIME_THRESHOLD: u32 = 500000000; // Tue Nov  5 00:53:20 1985 UTC

/// Number of zatoshis in one ZEC.
pub const COIN: u64 = 100_000_000;

/// No amount larger than this (in zatoshis) is valid.
pub const MAX_MONEY: u64 = 21_000_000 * COIN;

/// Set in the serialized header of every transaction from Overwinter on.
pub const OVERWINTERED_FLAG: u32 = 0x80000000;

/// Original bitcoin transaction version.
pub const BTC_TX_VERSION: u32 = 1;
/// Sprout-era transaction version with JoinSplits.
pub const SPROUT_TX_VERSION: u32 = 2;
/// Overwinter-era transaction version.
pub const OVERWINTER_TX_VERSION: u32 = 3;
/// Sapling-era transaction version.
pub const SAPLING_TX_VERSION: u32 = 4;
/// NU5 transaction version.
pub const NU5_TX_VERSION: u32 = 5;

/// Overwinter version group id.
pub const OVERWINTER_TX_VERSION_GROUP_ID: u32 = 0x03C48270;
/// Sapling version group id.
pub const SAPLING_TX_VERSION_GROUP_ID: u32 = 0x892F2085;
/// NU5 version group id.
pub const NU5_TX_VERSION_GROUP_ID: u32 = 0x26A7270A;
