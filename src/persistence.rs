// File: src/persistence.rs
use crate::error::{DictError, Result};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// On-disk entries. Unlike a plain `HashMap`, a repeated key is an error
/// instead of silently keeping the last definition.
struct DiskEntries(HashMap<String, String>);

impl<'de> Deserialize<'de> for DiskEntries {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = DiskEntries;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a flat object of word -> definition strings")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = HashMap::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((word, definition)) = map.next_entry::<String, String>()? {
                    match entries.entry(word) {
                        Entry::Occupied(slot) => {
                            return Err(de::Error::custom(format!(
                                "duplicate key {:?}",
                                slot.key()
                            )));
                        }
                        Entry::Vacant(slot) => {
                            slot.insert(definition);
                        }
                    }
                }
                Ok(DiskEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Reads a flat JSON object of word -> definition strings.
/// Repeated keys make the file malformed.
pub fn load_from_disk(path: &Path) -> Result<HashMap<String, String>> {
    let file = File::open(path).map_err(|source| DictError::Load {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader)
        .map(|DiskEntries(entries)| entries)
        .map_err(|source| DictError::Malformed {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes `entries` back as a flat JSON object followed by a newline.
///
/// The object is written to a temporary file next to `path`, flushed, and then
/// renamed over the target, so readers never observe a half-written file.
/// An existing target keeps its permissions. Keys are emitted in sorted order.
pub fn save_to_disk(entries: &HashMap<String, String>, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let sorted: BTreeMap<&str, &str> = entries
        .iter()
        .map(|(word, definition)| (word.as_str(), definition.as_str()))
        .collect();

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer(&mut writer, &sorted).map_err(std::io::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    if let Ok(metadata) = fs::metadata(path) {
        temp_file.as_file().set_permissions(metadata.permissions())?;
    }
    temp_file.as_file().sync_all()?;

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
