use std::cmp;
use std::thread;
use std::time::{Duration, Instant};
use Error;

/// Calls `attempt` every `interval` until it yields a value or `timeout` elapses.
///
/// Transient errors are logged and retried. Any other error ends the loop.
pub fn poll<T, F>(what: &str, interval: Duration, timeout: Duration, mut attempt: F) -> Result<T, Error>
	where F: FnMut() -> Result<Option<T>, Error>
{
	let started = Instant::now();
	loop {
		match attempt() {
			Ok(Some(value)) => return Ok(value),
			Ok(None) => trace!(target: "rpc", "{}: not ready yet", what),
			Err(ref err) if err.is_transient() => debug!(target: "rpc", "{}: {}, retrying", what, err),
			Err(err) => return Err(err),
		}

		let waited = started.elapsed();
		if waited >= timeout {
			return Err(Error::Timeout {
				what: what.to_owned(),
				waited: waited,
			});
		}

		thread::sleep(cmp::min(interval, timeout - waited));
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;
	use Error;
	use super::poll;

	#[test]
	fn test_poll_returns_first_value() {
		let mut attempts = 0;
		let result = poll("counter", Duration::from_millis(0), Duration::from_secs(10), || {
			attempts += 1;
			Ok(if attempts == 3 { Some(attempts) } else { None })
		});
		assert_eq!(result, Ok(3));
	}

	#[test]
	fn test_poll_retries_transient_errors() {
		let mut attempts = 0;
		let result = poll("flaky", Duration::from_millis(0), Duration::from_secs(10), || {
			attempts += 1;
			match attempts {
				1 => Err(Error::Transport("connection refused".into())),
				2 => Err(Error::Rpc { code: -5, message: "No information available".into() }),
				_ => Ok(Some("done")),
			}
		});
		assert_eq!(result, Ok("done"));
		assert_eq!(attempts, 3);
	}

	#[test]
	fn test_poll_stops_on_fatal_error() {
		let mut attempts = 0;
		let result: Result<(), _> = poll("operation", Duration::from_millis(0), Duration::from_secs(10), || {
			attempts += 1;
			Err(Error::OperationFailed("insufficient funds".into()))
		});
		assert_eq!(result, Err(Error::OperationFailed("insufficient funds".into())));
		assert_eq!(attempts, 1);
	}

	#[test]
	fn test_poll_times_out() {
		let result: Result<(), _> = poll("never", Duration::from_millis(1), Duration::from_millis(5), || Ok(None));
		match result {
			Err(Error::Timeout { what, waited }) => {
				assert_eq!(what, "never");
				assert!(waited >= Duration::from_millis(5));
			},
			other => panic!("expected timeout, got {:?}", other),
		}
	}
}
