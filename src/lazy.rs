use crate::error::Error;
use futures::future::BoxFuture;
use std::{fmt, sync::OnceLock};
use tracing::{debug, trace, warn};

type Loader<T> = Box<dyn Fn() -> BoxFuture<'static, Result<T, Error>> + Send + Sync>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Unloaded,
    Loaded,
}

/// A value fetched on first use. Once loaded it stays loaded; a failed load leaves it
/// unloaded so the next request tries again.
pub struct Deferred<T> {
    name: &'static str,
    loader: Loader<T>,
    slot: OnceLock<T>,
}

impl<T: Clone + Send + Sync + 'static> Deferred<T> {
    pub fn new<F>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> BoxFuture<'static, Result<T, Error>> + Send + Sync + 'static,
    {
        Self {
            name,
            loader: Box::new(loader),
            slot: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> LoadState {
        match self.slot.get() {
            Some(_) => LoadState::Loaded,
            None => LoadState::Unloaded,
        }
    }

    /// Returns the value only if it has already been loaded.
    pub fn get(&self) -> Option<T> {
        self.slot.get().cloned()
    }

    pub async fn load(&self) -> Result<T, Error> {
        if let Some(value) = self.slot.get() {
            trace!(name = self.name, "deferred module already loaded");
            return Ok(value.clone());
        }

        debug!(name = self.name, "loading deferred module");
        match (self.loader)().await {
            // a concurrent load may have won the race; keep whichever landed first
            Ok(value) => Ok(self.slot.get_or_init(|| value).clone()),
            Err(error) => {
                warn!(name = self.name, %error, "deferred module failed to load");
                Err(error)
            }
        }
    }
}

impl<T> fmt::Debug for Deferred<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("name", &self.name)
            .field("loaded", &self.slot.get().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::{executor::block_on, FutureExt};
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn loads_once_then_serves_cached() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let deferred = Deferred::new("counter", move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(n + 100) }.boxed()
        });

        assert_eq!(deferred.state(), LoadState::Unloaded);
        assert_eq!(deferred.get(), None);

        assert_eq!(block_on(deferred.load()), Ok(100));
        assert_eq!(deferred.state(), LoadState::Loaded);
        assert_eq!(block_on(deferred.load()), Ok(100));
        assert_eq!(deferred.get(), Some(100));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_stays_unloaded_and_retries() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let deferred = Deferred::new("flaky", move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(Error::load("flaky", "chunk missing"))
                } else {
                    Ok("ready")
                }
            }
            .boxed()
        });

        assert_eq!(
            block_on(deferred.load()),
            Err(Error::load("flaky", "chunk missing"))
        );
        assert_eq!(deferred.state(), LoadState::Unloaded);

        assert_eq!(block_on(deferred.load()), Ok("ready"));
        assert_eq!(deferred.state(), LoadState::Loaded);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
