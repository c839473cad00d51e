use serde::{Deserialize, Deserializer, Serialize};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use super::error::RecommendationError;

/// One row of the food catalog.
///
/// `food_name` is the lookup and deduplication key but the catalog does not
/// guarantee it is unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub food_name: String,
    #[serde(deserialize_with = "empty_as_zero")]
    pub energy_kcal: f64,
    #[serde(deserialize_with = "empty_as_zero")]
    pub freesugar_g: f64,
    #[serde(deserialize_with = "empty_as_zero")]
    pub fat_g: f64,
    #[serde(deserialize_with = "empty_as_zero")]
    pub sodium_mg: f64,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub protein_g: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub carb_g: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub fibre_g: Option<f64>,
}

impl FoodRecord {
    /// Record with only the nutrients the scorer reads.
    pub fn new(
        food_name: impl Into<String>,
        energy_kcal: f64,
        freesugar_g: f64,
        fat_g: f64,
        sodium_mg: f64,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            energy_kcal,
            freesugar_g,
            fat_g,
            sodium_mg,
            protein_g: None,
            carb_g: None,
            fibre_g: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to open food catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid food catalog data: {0}")]
    Csv(#[from] csv::Error),
}

/// Read-only food catalog shared by every request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    records: Vec<FoodRecord>,
}

impl FoodCatalog {
    pub fn from_records(records: Vec<FoodRecord>) -> Self {
        Self { records }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(file)?;
        info!(path = %path.display(), foods = catalog.len(), "food catalog loaded");
        Ok(catalog)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize::<FoodRecord>()
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record, in catalog order, whose name contains `query`
    /// case-insensitively.
    pub fn find_by_name(&self, query: &str) -> Result<&FoodRecord, RecommendationError> {
        let needle = query.trim().to_lowercase();
        self.records
            .iter()
            .find(|record| record.food_name.to_lowercase().contains(&needle))
            .ok_or_else(|| RecommendationError::FoodNotFound {
                query: query.to_string(),
            })
    }
}

/// Whether the catalog made it through startup.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loaded(Arc<FoodCatalog>),
    Unavailable(String),
}

impl CatalogState {
    /// Load from disk, keeping the failure reason instead of aborting startup.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match FoodCatalog::from_path(path) {
            Ok(catalog) => Self::Loaded(Arc::new(catalog)),
            Err(err) => Self::Unavailable(err.to_string()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    pub fn catalog(&self) -> Result<&Arc<FoodCatalog>, RecommendationError> {
        match self {
            Self::Loaded(catalog) => Ok(catalog),
            Self::Unavailable(reason) => Err(RecommendationError::CatalogUnavailable {
                reason: reason.clone(),
            }),
        }
    }
}

impl From<FoodCatalog> for CatalogState {
    fn from(catalog: FoodCatalog) -> Self {
        Self::Loaded(Arc::new(catalog))
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("'{raw}' is not a number ({err})"))),
    }
}

fn empty_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    empty_as_none(deserializer).map(|value| value.unwrap_or(0.0))
}
