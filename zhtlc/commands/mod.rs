mod broadcast;
mod script;
mod sighash;
mod spend;
mod splice;
mod wait;

pub use self::broadcast::broadcast;
pub use self::script::script;
pub use self::sighash::sighash;
pub use self::spend::{claim, refund};
pub use self::splice::splice;
pub use self::wait::wait;
