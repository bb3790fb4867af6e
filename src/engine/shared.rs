use std::borrow::Borrow;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::catalog::RawRecord;
use crate::engine::{Engine, RecommendationResult, TopN};
use crate::error::Result;

/// An engine that can be replaced while queries are running.
///
/// Readers take an `Arc` snapshot and query it without holding the lock.
/// `reload` builds the new engine before touching the lock, so a reader
/// sees either the old engine or the new one as a whole, never a mix.
#[derive(Debug)]
pub struct SharedEngine {
    current: RwLock<Arc<Engine>>,
}

impl SharedEngine {
    pub fn new(engine: Engine) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    pub fn load<I>(records: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Borrow<RawRecord>,
    {
        Ok(Self::new(Engine::load(records)?))
    }

    /// current engine
    pub fn snapshot(&self) -> Arc<Engine> {
        Arc::clone(&self.current.read())
    }

    pub fn recommend(&self, query: &str, top_n: impl Into<TopN>) -> Result<RecommendationResult> {
        self.snapshot().recommend(query, top_n)
    }

    /// Build a new engine from `records` and swap it in.
    /// On failure the current engine stays in place.
    /// Returns the engine that was replaced.
    pub fn reload<I>(&self, records: I) -> Result<Arc<Engine>>
    where
        I: IntoIterator,
        I::Item: Borrow<RawRecord>,
    {
        let fresh = match Engine::load(records) {
            Ok(engine) => engine,
            Err(err) => {
                warn!(error = %err, "reload failed, keeping current engine");
                return Err(err);
            }
        };
        Ok(self.swap(fresh))
    }

    /// Swap in an already built engine, returns the previous one
    pub fn swap(&self, engine: Engine) -> Arc<Engine> {
        let items = engine.len();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(engine));
        info!(items, previous_items = previous.len(), "engine swapped");
        previous
    }
}
