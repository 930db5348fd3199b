use std::collections::HashMap;
use std::ffi::OsString;
use std::hash::BuildHasher;
use tracing::warn;

/// Source of configuration variables.
///
/// A variable that is unset or not valid Unicode is reported as `None`.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads variables from the process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).and_then(|value| decode(key, value))
    }
}

fn decode(key: &str, value: OsString) -> Option<String> {
    match value.into_string() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("{key} is set but is not valid Unicode, ignoring it");
            None
        }
    }
}

impl<S: BuildHasher> Environment for HashMap<String, String, S> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}
