//! Process-wide engine lifecycle.
//!
//! One [`NearDupe`] instance backs the crate-level functions. It is created
//! on first use (or by [`initialize`]) and released by [`shutdown`], after
//! which calls fail with [`NearDupeError::NotInitialized`] until the
//! runtime is initialized again. Every call holds the runtime lock from
//! start to finish, so calls never overlap.

use std::path::Path;
use std::sync::Arc;

use log::{error, info, warn};
use parking_lot::{Mutex, const_mutex};

use crate::error::{NearDupeError, Result};
use crate::near_dupe::NearDupe;
use crate::resources::Resources;

enum RuntimeState {
    Uninitialized,
    Ready(Arc<NearDupe>),
    ShutDown,
}

static RUNTIME: Mutex<RuntimeState> = const_mutex(RuntimeState::Uninitialized);

fn load(resources: Result<Resources>) -> Result<Arc<NearDupe>> {
    let engine = NearDupe::new(Arc::new(resources?))?;
    info!(
        "near-dupe runtime ready ({} languages)",
        engine.resources().languages().len()
    );
    Ok(Arc::new(engine))
}

/// Load resources (from `NEARDUPE_DATA_DIR` when set) and start the runtime.
///
/// Returns `false` and logs the cause when the resources cannot be loaded.
/// Calling it on a running runtime is a no-op.
pub fn initialize() -> bool {
    let mut state = RUNTIME.lock();
    if matches!(*state, RuntimeState::Ready(_)) {
        return true;
    }
    match load(Resources::from_env()) {
        Ok(engine) => {
            *state = RuntimeState::Ready(engine);
            true
        }
        Err(e) => {
            error!("failed to initialize near-dupe resources: {}", e);
            false
        }
    }
}

/// Start (or restart) the runtime with resources from `dir`.
pub fn initialize_from<P: AsRef<Path>>(dir: P) -> Result<()> {
    let engine = load(Resources::load_from_dir(dir))?;
    *RUNTIME.lock() = RuntimeState::Ready(engine);
    Ok(())
}

/// Release the resources. Later calls fail until the runtime is initialized again.
pub fn shutdown() {
    let mut state = RUNTIME.lock();
    if matches!(*state, RuntimeState::Ready(_)) {
        info!("near-dupe runtime shut down");
    }
    *state = RuntimeState::ShutDown;
}

pub fn is_initialized() -> bool {
    matches!(*RUNTIME.lock(), RuntimeState::Ready(_))
}

/// Run `f` against the shared engine, holding the runtime lock throughout.
pub(crate) fn with_engine<T, F>(f: F) -> Result<T>
where
    F: FnOnce(&NearDupe) -> Result<T>,
{
    let mut state = RUNTIME.lock();
    if matches!(*state, RuntimeState::Uninitialized) {
        *state = RuntimeState::Ready(load(Resources::from_env())?);
    }
    let engine = match &*state {
        RuntimeState::Ready(engine) => Arc::clone(engine),
        _ => return Err(NearDupeError::not_initialized("runtime has been shut down")),
    };
    f(&engine)
}

/// Turn malformed-input errors into an empty result.
pub(crate) fn contain(result: Result<Vec<String>>) -> Result<Vec<String>> {
    match result {
        Err(e) if e.is_input_error() => {
            warn!("returning no results: {}", e);
            Ok(Vec::new())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contain() {
        assert!(contain(Err(NearDupeError::EmptyInput)).unwrap().is_empty());
        assert_eq!(
            contain(Ok(vec!["x".to_string()])).unwrap(),
            vec!["x".to_string()]
        );
        assert!(matches!(
            contain(Err(NearDupeError::not_initialized("down"))),
            Err(NearDupeError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_engine_is_created_lazily() {
        assert!(with_engine(|engine| Ok(engine.resources().has_dictionary("en"))).unwrap());
    }
}
