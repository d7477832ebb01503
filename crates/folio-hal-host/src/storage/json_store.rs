use std::{
    fs, io,
    path::{Path, PathBuf},
};

use folio_core::store::{PositionBackend, PositionMap};
use log::{debug, warn};
use serde_json::{Map, Value};

const FILE_EXTENSION: &str = "json";
const TEMP_EXTENSION: &str = "json.tmp";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum JsonStoreError {
    Io(io::ErrorKind),
    /// Stored document is not a JSON object of offsets.
    Malformed,
    /// Keys become file names and must be plain identifiers.
    InvalidKey,
}

impl From<io::Error> for JsonStoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

/// Position backend keeping one `<key>.json` document per key in a directory.
///
/// Saves merge into the document on disk, so entries that were never loaded
/// survive. Writes go to a sibling temp file that is renamed over the target,
/// so a crash mid-write leaves the previous document intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Like [`JsonFileStore::new`], creating the directory when missing.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, JsonStoreError> {
        let store = Self::new(dir);
        fs::create_dir_all(&store.dir)?;
        Ok(store)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf, JsonStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(JsonStoreError::InvalidKey);
        }
        Ok(self.dir.join(key).with_extension(FILE_EXTENSION))
    }
}

impl PositionBackend for JsonFileStore {
    type Error = JsonStoreError;

    fn load(
        &mut self,
        key: &str,
        preferred: &dyn Fn(&str) -> bool,
    ) -> Result<Option<PositionMap>, Self::Error> {
        let path = self.path_for(key)?;
        match read_document(&path)? {
            Some(bytes) => decode_positions(&bytes, preferred).map(Some),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, positions: &PositionMap) -> Result<(), Self::Error> {
        let path = self.path_for(key)?;
        let existing = read_document(&path)?;
        let bytes = merge_positions(existing.as_deref(), positions)?;
        let temp = path.with_extension(TEMP_EXTENSION);
        fs::write(&temp, &bytes)?;
        fs::rename(&temp, &path)?;
        debug!(
            "store: wrote {} entries={} bytes={}",
            path.display(),
            positions.len(),
            bytes.len()
        );
        Ok(())
    }
}

fn read_document(path: &Path) -> Result<Option<Vec<u8>>, JsonStoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parse_document(bytes: &[u8]) -> Result<Map<String, Value>, JsonStoreError> {
    match serde_json::from_slice(bytes) {
        Ok(Value::Object(entries)) => Ok(entries),
        _ => Err(JsonStoreError::Malformed),
    }
}

/// Parse a stored `{ "<post id>": <offset>, ... }` document.
///
/// Fractional offsets are rounded and negative ones clamped to zero.
/// Non-numeric values are skipped. When the document holds more ids than the
/// map, `preferred` ids are loaded first.
pub fn decode_positions(
    bytes: &[u8],
    preferred: &dyn Fn(&str) -> bool,
) -> Result<PositionMap, JsonStoreError> {
    let entries = parse_document(bytes)?;

    let mut offsets: Vec<(&str, u32)> = Vec::with_capacity(entries.len());
    for (id, offset) in &entries {
        match offset_from_json(offset) {
            Some(offset) => offsets.push((id.as_str(), offset)),
            None => warn!("store: skipping non-numeric offset id={}", id),
        }
    }
    Ok(PositionMap::from_ranked(offsets.iter().copied(), preferred))
}

/// Overlay `positions` on the `existing` document. Other keys are kept as
/// they are; an unreadable document is replaced.
pub fn merge_positions(
    existing: Option<&[u8]>,
    positions: &PositionMap,
) -> Result<Vec<u8>, JsonStoreError> {
    let mut entries = match existing.map(parse_document) {
        Some(Ok(entries)) => entries,
        Some(Err(_)) => {
            warn!("store: replacing unreadable positions document");
            Map::new()
        }
        None => Map::new(),
    };
    for (id, offset) in positions.iter() {
        entries.insert(id.to_owned(), Value::from(offset));
    }
    serde_json::to_vec(&Value::Object(entries)).map_err(|_| JsonStoreError::Malformed)
}

fn offset_from_json(value: &Value) -> Option<u32> {
    let offset = value.as_f64()?;
    if !offset.is_finite() {
        return None;
    }
    Some(offset.round().clamp(0.0, u32::MAX as f64) as u32)
}
