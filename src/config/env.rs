//! Environment sources the loader can read from.

use std::collections::{BTreeMap, HashMap};

/// A read-only mapping of variable name to value.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
}

/// The real process environment. Non-UTF-8 values read as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Environment for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Look up `key`, treating an empty value the same as an unset one.
pub fn non_empty<E: Environment + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|value| !value.is_empty())
}
