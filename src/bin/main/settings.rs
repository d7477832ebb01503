use std::{fmt::Display, path::PathBuf, str::FromStr};

use log::warn;

const STORE_DIR_VAR: &str = "FOLIO_STORE_DIR";
const SCRIPT_VAR: &str = "FOLIO_SCRIPT";
const VIEWPORT_WIDTH_VAR: &str = "FOLIO_VIEWPORT_WIDTH";
const SESSION_MS_VAR: &str = "FOLIO_SESSION_MS";

const DEFAULT_STORE_DIR: &str = ".folio";
const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;
const DEFAULT_SESSION_MS: u64 = 20_000;

/// Host configuration read from the environment at boot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct HostSettings {
    pub(super) store_dir: PathBuf,
    /// `None` replays the built-in demo script.
    pub(super) script_path: Option<PathBuf>,
    pub(super) viewport_width: u32,
    /// Hard stop for the session, whatever the script still holds.
    pub(super) session_ms: u64,
}

impl HostSettings {
    pub(super) fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let store_dir = lookup(STORE_DIR_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_DIR.to_owned());
        let script_path = lookup(SCRIPT_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Self {
            store_dir: PathBuf::from(store_dir),
            script_path,
            viewport_width: parsed(&lookup, VIEWPORT_WIDTH_VAR, DEFAULT_VIEWPORT_WIDTH),
            session_ms: parsed(&lookup, SESSION_MS_VAR, DEFAULT_SESSION_MS),
        }
    }
}

fn parsed<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str, default: T) -> T
where
    T: FromStr + Display,
{
    let Some(raw) = lookup(name) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!("config: ignoring {}={:?}; using {}", name, raw, default);
            default
        }
    }
}
