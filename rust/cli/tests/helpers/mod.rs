//! Shared setup for CLI integration tests.
//!
//! Every test that calls `run` reads `DEALKIT_*` variables through config
//! loading, so tests start from [`clear_env`] and are marked `#[serial]`.
#![allow(dead_code)]

use dealkit_cli::run;

pub const KEYS: [&str; 6] = [
    "DEALKIT_CONFIG",
    "DEALKIT_DECK",
    "DEALKIT_PLAYERS",
    "DEALKIT_CARDS_PER_HAND",
    "DEALKIT_SEED",
    "DEALKIT_DECKS_DIR",
];

pub fn clear_env() {
    for key in KEYS {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

/// Sets a variable for the lifetime of the guard.
pub struct EnvVar(&'static str);

impl EnvVar {
    pub fn set(key: &'static str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        unsafe {
            std::env::set_var(key, value);
        }
        EnvVar(key)
    }
}

impl Drop for EnvVar {
    fn drop(&mut self) {
        unsafe {
            std::env::remove_var(self.0);
        }
    }
}

/// Runs `dealkit <args>` and returns `(exit code, stdout, stderr)`.
pub fn capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = std::iter::once("dealkit").chain(args.iter().copied());
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).to_string(),
        String::from_utf8_lossy(&err).to_string(),
    )
}
