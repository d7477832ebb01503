//! Reading positions keyed by post id, persisted through a key-value backend.

use heapless::{String, Vec};
use log::{debug, info, warn};

use crate::catalog::PostCatalog;

/// Store key holding the whole position mapping.
pub const POSITIONS_KEY: &str = "blogScrollPositions";
/// Upper bound on tracked posts. Entries are never evicted.
pub const MAX_POSITIONS: usize = 32;
/// Slots a load may give to ids the catalog does not know. The rest stay free
/// for catalog posts.
pub const MAX_STALE_ON_LOAD: usize = MAX_POSITIONS / 2;
pub const POST_ID_BYTES: usize = 64;
const STORE_KEY_BYTES: usize = 48;
const MEMORY_BACKEND_KEYS: usize = 4;

pub type PostId = String<POST_ID_BYTES>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PositionMapError {
    IdTooLong,
    Full,
}

pub fn post_id(id: &str) -> Result<PostId, PositionMapError> {
    let mut out = PostId::new();
    out.push_str(id).map_err(|_| PositionMapError::IdTooLong)?;
    Ok(out)
}

/// Insertion-ordered mapping from post id to scroll offset.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PositionMap {
    entries: Vec<(PostId, u32), MAX_POSITIONS>,
}

impl PositionMap {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str() == id)
            .map(|(_, offset)| *offset)
    }

    /// Insert or overwrite the offset for `id`, returning the previous value.
    pub fn set(&mut self, id: &str, offset: u32) -> Result<Option<u32>, PositionMapError> {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(key, _)| key.as_str() == id) {
            let previous = *slot;
            *slot = offset;
            return Ok(Some(previous));
        }

        let key = post_id(id)?;
        self.entries
            .push((key, offset))
            .map_err(|_| PositionMapError::Full)?;
        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + Clone + '_ {
        self.entries
            .iter()
            .map(|(key, offset)| (key.as_str(), *offset))
    }

    /// Build a map from stored entries, `preferred` ids first.
    ///
    /// Other ids take at most [`MAX_STALE_ON_LOAD`] slots. Entries left out
    /// are only missing from memory; backends keep them on save.
    pub fn from_ranked<'a, I>(entries: I, preferred: &dyn Fn(&str) -> bool) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
        I::IntoIter: Clone,
    {
        let entries = entries.into_iter();
        let mut map = Self::new();
        let mut skipped = 0usize;

        for (id, offset) in entries.clone().filter(|&(id, _)| preferred(id)) {
            if let Err(err) = map.set(id, offset) {
                warn!("store: saved position not loaded id={} err={:?}", id, err);
                skipped += 1;
            }
        }

        let mut stale = 0usize;
        for (id, offset) in entries.filter(|&(id, _)| !preferred(id)) {
            if stale >= MAX_STALE_ON_LOAD || map.set(id, offset).is_err() {
                skipped += 1;
                continue;
            }
            stale += 1;
        }

        if skipped > 0 {
            info!("store: {} saved positions left in storage only", skipped);
        }
        map
    }
}

fn no_preference(_id: &str) -> bool {
    false
}

/// Abstract key-value persistence backend.
pub trait PositionBackend {
    type Error: core::fmt::Debug;

    /// Read the mapping under `key`, ranking entries with
    /// [`PositionMap::from_ranked`] when they do not all fit.
    fn load(
        &mut self,
        key: &str,
        preferred: &dyn Fn(&str) -> bool,
    ) -> Result<Option<PositionMap>, Self::Error>;

    /// Merge `positions` into the mapping under `key`. Stored ids missing
    /// from `positions` are kept.
    fn save(&mut self, key: &str, positions: &PositionMap) -> Result<(), Self::Error>;
}

/// Volatile backend used when no persistent storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    slots: Vec<(String<STORE_KEY_BYTES>, PositionMap), MEMORY_BACKEND_KEYS>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MemoryBackendError {
    KeyTooLong,
    Full,
}

impl MemoryBackend {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn with_positions(key: &str, positions: PositionMap) -> Result<Self, MemoryBackendError> {
        let mut slot_key = String::new();
        slot_key
            .push_str(key)
            .map_err(|_| MemoryBackendError::KeyTooLong)?;
        let mut backend = Self::new();
        backend
            .slots
            .push((slot_key, positions))
            .map_err(|_| MemoryBackendError::Full)?;
        Ok(backend)
    }

    pub fn get(&self, key: &str) -> Option<&PositionMap> {
        self.slots
            .iter()
            .find(|(slot_key, _)| slot_key.as_str() == key)
            .map(|(_, positions)| positions)
    }
}

impl PositionBackend for MemoryBackend {
    type Error = MemoryBackendError;

    fn load(
        &mut self,
        key: &str,
        preferred: &dyn Fn(&str) -> bool,
    ) -> Result<Option<PositionMap>, Self::Error> {
        Ok(self
            .get(key)
            .map(|stored| PositionMap::from_ranked(stored.iter(), preferred)))
    }

    fn save(&mut self, key: &str, positions: &PositionMap) -> Result<(), Self::Error> {
        if let Some((_, slot)) = self
            .slots
            .iter_mut()
            .find(|(slot_key, _)| slot_key.as_str() == key)
        {
            for (id, offset) in positions.iter() {
                slot.set(id, offset).map_err(|_| MemoryBackendError::Full)?;
            }
            return Ok(());
        }

        let mut slot_key = String::new();
        slot_key
            .push_str(key)
            .map_err(|_| MemoryBackendError::KeyTooLong)?;
        self.slots
            .push((slot_key, positions.clone()))
            .map_err(|_| MemoryBackendError::Full)
    }
}

/// Write-through cache of reading positions.
///
/// The mapping is read once on construction. Every update rewrites the whole
/// mapping under [`POSITIONS_KEY`]. Backend failures degrade to volatile
/// tracking and never reach the caller.
#[derive(Debug)]
pub struct PositionStore<B: PositionBackend> {
    backend: B,
    positions: PositionMap,
}

impl<B: PositionBackend> PositionStore<B> {
    pub fn load(backend: B) -> Self {
        Self::load_ranked(backend, &no_preference)
    }

    /// Load positions, giving ids known to `catalog` the first slots.
    pub fn load_for<C: PostCatalog>(backend: B, catalog: &C) -> Self {
        Self::load_ranked(backend, &|id: &str| catalog.index_of(id).is_some())
    }

    fn load_ranked(mut backend: B, preferred: &dyn Fn(&str) -> bool) -> Self {
        let positions = match backend.load(POSITIONS_KEY, preferred) {
            Ok(Some(positions)) => {
                info!("store: restored positions entries={}", positions.len());
                positions
            }
            Ok(None) => {
                info!("store: no saved positions");
                PositionMap::new()
            }
            Err(err) => {
                warn!("store: load failed err={:?}; starting empty", err);
                PositionMap::new()
            }
        };

        Self { backend, positions }
    }

    /// Saved offset for `id`; `0` when the post was never opened.
    pub fn offset_of(&self, id: &str) -> u32 {
        self.positions.get(id).unwrap_or(0)
    }

    /// Record `offset` for `id` and persist the mapping.
    /// Returns `false` when the write could not be persisted.
    pub fn record(&mut self, id: &str, offset: u32) -> bool {
        if let Err(err) = self.positions.set(id, offset) {
            warn!("store: position dropped id={} err={:?}", id, err);
            return false;
        }

        match self.backend.save(POSITIONS_KEY, &self.positions) {
            Ok(()) => {
                debug!("store: saved id={} offset={}", id, offset);
                true
            }
            Err(err) => {
                warn!("store: save failed id={} err={:?}", id, err);
                false
            }
        }
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::site_catalog;

    #[derive(Debug, Default)]
    struct BrokenBackend {
        save_attempts: usize,
    }

    impl PositionBackend for BrokenBackend {
        type Error = ();

        fn load(
            &mut self,
            _key: &str,
            _preferred: &dyn Fn(&str) -> bool,
        ) -> Result<Option<PositionMap>, Self::Error> {
            Err(())
        }

        fn save(&mut self, _key: &str, _positions: &PositionMap) -> Result<(), Self::Error> {
            self.save_attempts += 1;
            Err(())
        }
    }

    #[test]
    fn map_overwrites_existing_ids() {
        let mut map = PositionMap::new();
        assert_eq!(map.set("a", 10), Ok(None));
        assert_eq!(map.set("b", 20), Ok(None));
        assert_eq!(map.set("a", 30), Ok(Some(10)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(30));
        let entries: Vec<(&str, u32), 4> = map.iter().collect();
        assert_eq!(entries.as_slice(), &[("a", 30), ("b", 20)]);
    }

    #[test]
    fn map_rejects_new_ids_when_full() {
        let mut map = PositionMap::new();
        for i in 0..MAX_POSITIONS {
            let mut id: String<8> = String::new();
            core::fmt::Write::write_fmt(&mut id, format_args!("p{}", i)).unwrap();
            map.set(&id, i as u32).unwrap();
        }
        assert_eq!(map.set("overflow", 1), Err(PositionMapError::Full));
        assert_eq!(map.set("p0", 99), Ok(Some(0)));
    }

    fn numbered(prefix: &str, i: usize) -> String<16> {
        let mut id = String::new();
        core::fmt::Write::write_fmt(&mut id, format_args!("{}{:02}", prefix, i)).unwrap();
        id
    }

    #[test]
    fn ranked_load_keeps_room_for_preferred_ids() {
        let mut stored = PositionMap::new();
        for i in 0..MAX_POSITIONS - 1 {
            stored.set(&numbered("a", i), 5).unwrap();
        }
        stored.set("bias-ai-module", 500).unwrap();

        let map = PositionMap::from_ranked(stored.iter(), &|id: &str| id.starts_with("bias"));
        assert_eq!(map.get("bias-ai-module"), Some(500));
        assert_eq!(map.len(), 1 + MAX_STALE_ON_LOAD);
        assert_eq!(map.get("a00"), Some(5));
        assert_eq!(map.get(&numbered("a", MAX_STALE_ON_LOAD)), None);

        let mut map = map;
        assert_eq!(map.set("automl-module", 80), Ok(None));
    }

    #[test]
    fn map_rejects_oversized_ids() {
        let mut map = PositionMap::new();
        let long = "x".repeat(POST_ID_BYTES + 1);
        assert_eq!(map.set(&long, 1), Err(PositionMapError::IdTooLong));
    }

    #[test]
    fn unknown_id_defaults_to_zero() {
        let store = PositionStore::load(MemoryBackend::new());
        assert_eq!(store.offset_of("never-opened"), 0);
    }

    #[test]
    fn record_writes_whole_mapping_under_fixed_key() {
        let mut store = PositionStore::load(MemoryBackend::new());
        assert!(store.record("x", 240));
        assert!(store.record("y", 12));

        let saved = store.backend().get(POSITIONS_KEY).unwrap();
        assert_eq!(saved.get("x"), Some(240));
        assert_eq!(saved.get("y"), Some(12));
    }

    #[test]
    fn saved_positions_survive_reload() {
        let mut store = PositionStore::load(MemoryBackend::new());
        store.record("x", 240);
        let backend = store.into_backend();

        let reloaded = PositionStore::load(backend);
        assert_eq!(reloaded.offset_of("x"), 240);
    }

    #[test]
    fn save_keeps_entries_that_were_not_loaded() {
        let mut stored = PositionMap::new();
        for i in 0..MAX_POSITIONS - 1 {
            stored.set(&numbered("a", i), 5).unwrap();
        }
        let backend = MemoryBackend::with_positions(POSITIONS_KEY, stored).unwrap();

        let mut store = PositionStore::load_for(backend, &site_catalog());
        assert_eq!(store.positions().len(), MAX_STALE_ON_LOAD);
        assert!(store.record("bias-ai-module", 700));

        let saved = store.backend().get(POSITIONS_KEY).unwrap();
        assert_eq!(saved.len(), MAX_POSITIONS);
        assert_eq!(saved.get(&numbered("a", MAX_POSITIONS - 2)), Some(5));
        assert_eq!(saved.get("bias-ai-module"), Some(700));
    }

    #[test]
    fn broken_backend_degrades_to_volatile_tracking() {
        let mut store = PositionStore::load(BrokenBackend::default());
        assert_eq!(store.offset_of("x"), 0);
        assert!(!store.record("x", 50));
        assert_eq!(store.offset_of("x"), 50);
        assert_eq!(store.backend().save_attempts, 1);
    }
}
