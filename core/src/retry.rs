//! Fixed-delay retry wrapper applied to every transport call.
//!
//! # Design
//! `with_retry` is a plain higher-order function rather than anything fancier:
//! the policy is immutable for the duration of one call, the delay is a fixed
//! blocking sleep, and the final failure is handed back to the caller
//! unmodified. Success returns immediately without consuming further budget.

use std::fmt::Display;
use std::thread;
use std::time::Duration;

/// Attempt budget and fixed inter-attempt delay for one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts, delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(2),
        }
    }
}

/// Run `op` until it succeeds or the attempt budget is spent.
///
/// Each failure is logged with its attempt number; if attempts remain, the
/// wrapper sleeps `policy.delay` and runs `op` again from scratch. The error
/// from the last attempt is returned as-is.
pub fn with_retry<T, E: Display>(
    policy: &RetryPolicy,
    mut op: impl FnMut() -> Result<T, E>,
) -> Result<T, E> {
    let mut attempt = 1u32;
    loop {
        match op() {
            Ok(value) => return Ok(value),
            Err(error) => {
                tracing::warn!(attempt, error = %error, "attempt failed");
                if attempt >= policy.max_attempts {
                    return Err(error);
                }
                thread::sleep(policy.delay);
                attempt += 1;
            }
        }
    }
}
