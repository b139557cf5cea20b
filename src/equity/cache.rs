use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::core::{classify, Card, ClassifiedHand};

/// Errors from loading or persisting the evaluation cache. Both are
/// fatal to a run: a missing or corrupt backing store must not be
/// silently treated as empty.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("can't read or write the cache store")]
    Io(#[from] std::io::Error),

    #[error("the cache store is malformed")]
    Malformed(#[from] serde_json::Error),
}

/// Memoized hand classification, keyed by the canonical representation
/// of the unordered card set.
///
/// Reads share the map; a miss takes the write lock just long enough to
/// insert. Two workers may race to classify the same set, but the value
/// for a key is always identical so last-write-wins is harmless. The
/// dirty marker makes persistence a no-op for pure-hit runs.
#[derive(Debug, Default)]
pub struct EvalCache {
    entries: RwLock<HashMap<String, ClassifiedHand>>,
    dirty: AtomicBool,
}

impl EvalCache {
    /// An empty in-memory cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a previously persisted cache. Fails if the file is missing
    /// or does not parse; callers are expected to abort rather than
    /// fall back to an empty cache.
    pub fn load(path: &Path) -> Result<Self, CacheError> {
        let data = fs::read_to_string(path)?;
        let stored: BTreeMap<String, ClassifiedHand> = serde_json::from_str(&data)?;
        debug!(entries = stored.len(), ?path, "loaded evaluation cache");
        Ok(Self {
            entries: RwLock::new(stored.into_iter().collect()),
            dirty: AtomicBool::new(false),
        })
    }

    /// Write the cache back if any entry was added since it was loaded
    /// or created. Returns whether a write happened. Entries are
    /// serialized in key order so an unchanged cache round-trips to
    /// byte-identical content.
    pub fn save_if_dirty(&self, path: &Path) -> Result<bool, CacheError> {
        if !self.dirty.load(Ordering::Acquire) {
            return Ok(false);
        }
        let entries = self.entries.read();
        let ordered: BTreeMap<&String, &ClassifiedHand> = entries.iter().collect();
        let json = serde_json::to_string_pretty(&ordered)?;
        fs::write(path, json)?;
        debug!(entries = ordered.len(), ?path, "wrote evaluation cache");
        Ok(true)
    }

    /// Classify a card set through the cache. Any ordering of the same
    /// cards hits the same entry; the hit path never re-runs detectors.
    pub fn classify(&self, cards: &[Card]) -> ClassifiedHand {
        let key = canonical_key(cards);
        if let Some(hand) = self.entries.read().get(&key) {
            return *hand;
        }
        let hand = classify(cards);
        self.entries.write().insert(key, hand);
        self.dirty.store(true, Ordering::Release);
        hand
    }

    /// How many card sets have been classified.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True if nothing has been classified or loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// True if an entry has been added since load/creation.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }
}

/// Order-independent key: cards sorted into canonical order and their
/// tokens concatenated.
fn canonical_key(cards: &[Card]) -> String {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable();
    let mut key = String::with_capacity(sorted.len() * 2);
    for card in sorted {
        key.push(card.value.to_char());
        key.push(card.suit.to_char());
    }
    key
}
