//! Attribute taxonomy: the candidate label lists per category.
//!
//! The built-in lists describe everyday tops and bottoms. A TOML file with
//! the same field names can replace any subset of them (`taxonomy.file`).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Category label that gates the tops-specific branch.
pub const TOPS_LABEL: &str = "tops";

pub const KEY_SEASONS: &str = "seasons";
pub const KEY_OCCASIONS: &str = "occasions";
pub const KEY_CATEGORIES: &str = "categories";
pub const KEY_TYPES: &str = "types";
pub const KEY_COLORS: &str = "colors";
pub const KEY_STYLES: &str = "styles";
pub const KEY_FITS: &str = "fits";
pub const KEY_NECKLINES: &str = "necklines";
pub const KEY_SLEEVES: &str = "sleeves";
pub const KEY_WAIST_STYLES: &str = "waist_styles";
pub const KEY_CLOTHING_LENGTHS: &str = "clothing_lengths";

/// Candidate labels for every attribute category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeTaxonomy {
    pub seasons: Vec<String>,
    pub occasions: Vec<String>,
    pub categories: Vec<String>,
    pub tops_types: Vec<String>,
    pub bottoms_types: Vec<String>,
    pub styles: Vec<String>,
    pub fits: Vec<String>,
    pub necklines: Vec<String>,
    pub sleeves: Vec<String>,
    pub tops_lengths: Vec<String>,
    pub waist_styles: Vec<String>,
    pub bottoms_lengths: Vec<String>,
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for AttributeTaxonomy {
    fn default() -> Self {
        Self {
            seasons: labels(&["spring", "summer", "fall", "winter"]),
            occasions: labels(&[
                "daily", "work", "date", "formal", "travel", "home", "party", "sport", "special",
                "school", "beach",
            ]),
            categories: labels(&["tops", "bottoms"]),
            tops_types: labels(&[
                "t-shirt",
                "long-sleeve t-shirt",
                "sleeveless t-shirt",
                "polo shirt",
                "tanks & camis",
                "crop tops",
                "blouses",
                "shirts",
                "sweatshirts",
                "hoodies",
                "sweaters",
                "sweater vests",
                "cardigan tops",
                "sports tops",
                "bodysuits",
            ]),
            bottoms_types: labels(&[
                "jeans",
                "trousers",
                "pants",
                "shorts",
                "skirts",
                "leggings",
                "joggers",
                "sweatpants",
                "chinos",
                "cargo pants",
                "culottes",
                "capris",
                "maxi skirt",
                "mini skirt",
                "midi skirt",
                "athletic shorts",
                "denim shorts",
                "formal pants",
                "track pants",
                "bike shorts",
            ]),
            styles: labels(&[
                "casual",
                "comfortable",
                "business casual",
                "formal",
                "modern",
                "classic",
                "minimalist",
                "bohemian",
                "luxury",
                "sporty",
                "athleisure",
                "affordable",
                "trendy",
                "premium",
                "kidcore",
                "basic",
                "artistic",
                "dress-up",
                "hipster",
                "feminine",
                "chic",
                "street",
            ]),
            fits: labels(&["slim", "regular", "loose", "oversized"]),
            necklines: labels(&["round neckline", "v-neck neckline", "turtleneck neckline"]),
            sleeves: labels(&["sleeveless", "short sleeve", "long sleeve"]),
            tops_lengths: labels(&["short", "regular", "long"]),
            waist_styles: labels(&["high-waisted", "mid-rise", "low-rise"]),
            bottoms_lengths: labels(&["short", "knee-length", "midi", "ankle-length", "full-length"]),
        }
    }
}

impl AttributeTaxonomy {
    /// Load a taxonomy from a TOML file; missing fields keep the built-in lists.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a taxonomy from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let taxonomy: Self = toml::from_str(content)?;
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// Built-in lists, or the file override when one is configured.
    pub fn resolve(file: Option<&Path>) -> Result<Self, ConfigError> {
        match file {
            Some(path) => {
                tracing::debug!("Loading attribute taxonomy from {:?}", path);
                Self::load_from(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Every list must be non-empty and `categories` must offer the tops gate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, list) in self.lists() {
            if list.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "taxonomy list '{name}' must not be empty"
                )));
            }
        }
        if !self.categories.iter().any(|c| c == TOPS_LABEL) {
            return Err(ConfigError::ValidationError(format!(
                "taxonomy categories must contain '{TOPS_LABEL}'"
            )));
        }
        Ok(())
    }

    fn lists(&self) -> [(&'static str, &[String]); 12] {
        [
            ("seasons", &self.seasons),
            ("occasions", &self.occasions),
            ("categories", &self.categories),
            ("tops_types", &self.tops_types),
            ("bottoms_types", &self.bottoms_types),
            ("styles", &self.styles),
            ("fits", &self.fits),
            ("necklines", &self.necklines),
            ("sleeves", &self.sleeves),
            ("tops_lengths", &self.tops_lengths),
            ("waist_styles", &self.waist_styles),
            ("bottoms_lengths", &self.bottoms_lengths),
        ]
    }

    /// Keys a complete record carries for a top (`true`) or a bottom (`false`).
    pub fn keys_for(is_tops: bool) -> Vec<&'static str> {
        let mut keys = vec![
            KEY_SEASONS,
            KEY_OCCASIONS,
            KEY_CATEGORIES,
            KEY_TYPES,
            KEY_COLORS,
            KEY_STYLES,
            KEY_FITS,
        ];
        if is_tops {
            keys.extend([KEY_NECKLINES, KEY_SLEEVES, KEY_CLOTHING_LENGTHS]);
        } else {
            keys.extend([KEY_WAIST_STYLES, KEY_CLOTHING_LENGTHS]);
        }
        keys
    }
}

/// Borrow a label list as the `&[&str]` shape scorers take.
pub(crate) fn as_strs(list: &[String]) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists() {
        let t = AttributeTaxonomy::default();
        assert_eq!(t.seasons.len(), 4);
        assert_eq!(t.occasions.len(), 11);
        assert_eq!(t.categories, vec!["tops", "bottoms"]);
        assert_eq!(t.tops_types.len(), 15);
        assert_eq!(t.bottoms_types.len(), 20);
        assert_eq!(t.styles.len(), 22);
        assert_eq!(t.fits.len(), 4);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_keys_for_branches() {
        let tops = AttributeTaxonomy::keys_for(true);
        let bottoms = AttributeTaxonomy::keys_for(false);
        assert_eq!(tops.len(), 10);
        assert_eq!(bottoms.len(), 9);
        assert!(tops.contains(&"necklines") && !tops.contains(&"waist_styles"));
        assert!(bottoms.contains(&"waist_styles") && !bottoms.contains(&"sleeves"));
        assert!(tops.contains(&"clothing_lengths") && bottoms.contains(&"clothing_lengths"));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let t = AttributeTaxonomy::from_toml_str(
            r#"
fits = ["tailored", "relaxed"]
"#,
        )
        .unwrap();
        assert_eq!(t.fits, vec!["tailored", "relaxed"]);
        assert_eq!(t.seasons, AttributeTaxonomy::default().seasons);
    }

    #[test]
    fn test_rejects_empty_list() {
        let err = AttributeTaxonomy::from_toml_str("styles = []").unwrap_err();
        assert!(err.to_string().contains("styles"));
    }

    #[test]
    fn test_rejects_categories_without_tops() {
        let err = AttributeTaxonomy::from_toml_str(r#"categories = ["shoes"]"#).unwrap_err();
        assert!(err.to_string().contains("tops"));
    }

    #[test]
    fn test_resolve_without_file_is_default() {
        assert_eq!(
            AttributeTaxonomy::resolve(None).unwrap(),
            AttributeTaxonomy::default()
        );
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("taxonomy.toml");
        std::fs::write(&path, "seasons = [\"all-season\"]\n").unwrap();
        let t = AttributeTaxonomy::resolve(Some(&path)).unwrap();
        assert_eq!(t.seasons, vec!["all-season"]);
    }
}
