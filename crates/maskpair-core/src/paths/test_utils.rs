//! Environment isolation for path tests.
//!
//! Tests that touch `MASKPAIR_DATA_DIR` or `MASKPAIR_DB_PATH` hold
//! `ENV_LOCK` for their whole body so they never observe each other's values.

use std::env;
use std::ffi::OsString;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Shared lock serializing every test that reads or writes the environment.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Acquire `ENV_LOCK`, ignoring poison left by a failed test.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Restores an environment variable to its previous value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    /// Set `key` to `value` until the guard is dropped.
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        let previous = env::var_os(key);
        // SAFETY: callers hold ENV_LOCK, so no other test thread touches the environment.
        unsafe {
            env::set_var(key, value);
        }
        Self { key, previous }
    }

    /// Remove `key` until the guard is dropped.
    #[allow(unsafe_code)]
    pub fn unset(key: &'static str) -> Self {
        let previous = env::var_os(key);
        // SAFETY: as in `set`.
        unsafe {
            env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        // SAFETY: the guard is dropped while ENV_LOCK is still held.
        unsafe {
            match self.previous.take() {
                Some(value) => env::set_var(self.key, value),
                None => env::remove_var(self.key),
            }
        }
    }
}
