use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use recipebook_types::RecipeMap;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::traits::RecipeStorage;

/// Backing file name used when no other path is configured.
pub const DEFAULT_RECIPES_FILE: &str = "recipes.json";

/// The backing JSON file.
///
/// On-disk format is a single JSON object:
/// ```text
/// { "<name>": { "ingredients": ["..."], "instructions": "..." }, ... }
/// ```
/// The file is rewritten in full on every save. There is no atomic
/// replace and no locking; a crash mid-write leaves a file that the next
/// `load` treats as empty.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_map(&self, recipes: &RecipeMap) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut writer = BufWriter::new(File::create(&self.path)?);
        serde_json::to_writer(&mut writer, recipes)?;
        writer.flush()
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPES_FILE)
    }
}

impl RecipeStorage for JsonFileStorage {
    fn load(&self) -> RecipeMap {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no recipe file; starting empty");
                return RecipeMap::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable recipe file; starting empty");
                return RecipeMap::new();
            }
        };

        match serde_json::from_str::<RecipeMap>(&text) {
            Ok(recipes) => {
                debug!(path = %self.path.display(), count = recipes.len(), "loaded recipes");
                recipes
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed recipe file; starting empty");
                RecipeMap::new()
            }
        }
    }

    fn save(&self, recipes: &RecipeMap) -> StoreResult<()> {
        self.write_map(recipes).map_err(|e| {
            // Non-I/O serde_json errors arrive wrapped in an io::Error.
            match e.get_ref().and_then(|inner| inner.downcast_ref::<serde_json::Error>()) {
                Some(json) => StoreError::Serialization(json.to_string()),
                _ => StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                },
            }
        })?;
        debug!(path = %self.path.display(), count = recipes.len(), "saved recipes");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebook_types::Recipe;

    fn sample_map() -> RecipeMap {
        let mut map = RecipeMap::new();
        map.insert(
            "Pasta".into(),
            Recipe::new(vec!["Pasta".into(), "Water".into()], "Boil water, add pasta"),
        );
        map.insert("Tea".into(), Recipe::new(vec!["Leaves".into()], "Steep"));
        map
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("recipes.json"));

        storage.save(&sample_map()).unwrap();
        assert_eq!(storage.load(), sample_map());
    }

    #[test]
    fn save_of_load_is_identity_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let storage = JsonFileStorage::new(&path);
        storage.save(&sample_map()).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        storage.save(&storage.load()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("absent.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let storage = JsonFileStorage::new(&path);
        storage.save(&sample_map()).unwrap();

        fs::write(&path, b"{\"Pasta\": {\"ingredients\": [").unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(&path, b"[1, 2, 3]").unwrap();
        assert!(JsonFileStorage::new(&path).load().is_empty());
    }

    #[test]
    fn removed_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        let storage = JsonFileStorage::new(&path);
        storage.save(&sample_map()).unwrap();

        fs::remove_file(&path).unwrap();
        assert!(storage.load().is_empty());
    }

    #[test]
    fn reads_file_written_by_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        fs::write(
            &path,
            br#"{"Soup": {"ingredients": ["Stock", "Salt"], "instructions": "Simmer"}}"#,
        )
        .unwrap();

        let recipes = JsonFileStorage::new(&path).load();
        assert_eq!(recipes["Soup"].ingredients, vec!["Stock", "Salt"]);
        assert_eq!(recipes["Soup"].instructions, "Simmer");
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/deeper/recipes.json"));
        storage.save(&sample_map()).unwrap();
        assert_eq!(storage.load().len(), 2);
    }

    #[test]
    fn save_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes File::create fail.
        let storage = JsonFileStorage::new(dir.path());
        let err = storage.save(&sample_map()).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn default_path() {
        assert_eq!(JsonFileStorage::default().path(), Path::new(DEFAULT_RECIPES_FILE));
    }
}
