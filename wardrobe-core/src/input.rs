//! Loading configurations from JSON files.

use crate::error::{CutlistError, Result};
use crate::model::{DoorInput, WardrobeConfig};
use serde::de::DeserializeOwned;
use std::path::Path;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    use std::fs;

    if !path.exists() {
        return Err(CutlistError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| CutlistError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a simple-model wardrobe configuration.
pub fn load_wardrobe_config(path: &Path) -> Result<WardrobeConfig> {
    let config = load_json(path)?;
    tracing::debug!("Loaded wardrobe configuration from {}", path.display());
    Ok(config)
}

/// Load a column/door configuration.
pub fn load_door_input(path: &Path) -> Result<DoorInput> {
    let input = load_json(path)?;
    tracing::debug!("Loaded column configuration from {}", path.display());
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Material;
    use crate::model::DoorStyle;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_wardrobe_config() {
        let file = write_temp(
            r#"{
                "width_cm": 150, "height_cm": 200, "depth_cm": 55, "shelves": 4,
                "thickness_mm": 18, "material": "Plywood", "back_panel": false,
                "doors": true, "door_style": "split",
                "price_per_m2": 30, "band_price_per_m": 2.5
            }"#,
        );
        let config = load_wardrobe_config(file.path()).unwrap();
        assert_eq!(config.width_cm, 150.0);
        assert_eq!(config.material, Material::Plywood);
        assert_eq!(config.door_style, DoorStyle::Split);
        assert!(config.door_sections.is_empty());
    }

    #[test]
    fn test_load_door_input_defaults_optional_lists() {
        let file = write_temp(
            r#"{
                "total_width_cm": 100, "total_height_cm": 240,
                "columns": [{"width_cm": 100, "shelf_count": 2, "door_type": "full"}],
                "door_thickness_mm": 18, "material": "MDF",
                "price_per_m2": 25, "band_price_per_m": 3.5
            }"#,
        );
        let input = load_door_input(file.path()).unwrap();
        assert_eq!(input.columns.len(), 1);
        assert!(input.columns[0].shelf_heights.is_empty());
        assert_eq!(input.columns[0].shelf_height(1), 40.0);
    }

    #[test]
    fn test_missing_file() {
        let err = load_wardrobe_config(Path::new("/nonexistent/wardrobe.json")).unwrap_err();
        assert!(matches!(err, CutlistError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let file = write_temp("{ not json");
        let err = load_wardrobe_config(file.path()).unwrap_err();
        assert!(matches!(err, CutlistError::Json { .. }));
    }
}
