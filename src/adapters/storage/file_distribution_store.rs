//! File-based Distribution Store Adapter
//!
//! Stores the current distribution as a JSON object mapping sector names to
//! amounts, in distribution order:
//!
//! ```json
//! { "Healthcare": 50000, "Infrastructure": 45000 }
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::budget::BudgetDistribution;
use crate::ports::{DistributionStore, StoreError};

/// File name of the stored distribution inside the data directory.
pub const DISTRIBUTION_FILE: &str = "budget_distribution.json";

/// JSON file storage for the current distribution
#[derive(Debug, Clone)]
pub struct FileDistributionStore {
    base_path: PathBuf,
}

impl FileDistributionStore {
    /// Create a store writing into `base_path`
    ///
    /// # Example
    /// ```ignore
    /// let store = FileDistributionStore::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn file_path(&self) -> PathBuf {
        self.base_path.join(DISTRIBUTION_FILE)
    }
}

/// Encodes per-sector amounts as an ordered JSON object.
pub(crate) fn encode_amounts(distribution: &BudgetDistribution) -> Value {
    let map: Map<String, Value> = distribution
        .sector_amounts()
        .into_iter()
        .map(|(sector, amount)| (sector, Value::from(amount)))
        .collect();
    Value::Object(map)
}

/// Decodes an amounts object back into a distribution.
///
/// Fractional amounts written by other tools are rounded to whole units.
pub(crate) fn decode_amounts(value: Value) -> Result<BudgetDistribution, StoreError> {
    let Value::Object(map) = value else {
        return Err(StoreError::Corrupt(
            "expected an object of sector amounts".to_string(),
        ));
    };

    let mut amounts = Vec::with_capacity(map.len());
    for (sector, amount) in map {
        let amount = match amount.as_i64() {
            Some(whole) => whole,
            None => amount
                .as_f64()
                .map(|f| f.round() as i64)
                .ok_or_else(|| StoreError::Corrupt(format!("amount for {} is not a number", sector)))?,
        };
        amounts.push((sector, amount));
    }

    BudgetDistribution::from_amounts(amounts).map_err(|e| StoreError::Corrupt(e.to_string()))
}

#[async_trait]
impl DistributionStore for FileDistributionStore {
    async fn save_current(&self, distribution: &BudgetDistribution) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await?;

        let json = serde_json::to_string_pretty(&encode_amounts(distribution))?;
        fs::write(self.file_path(), json).await?;

        Ok(())
    }

    async fn load_current(&self) -> Result<Option<BudgetDistribution>, StoreError> {
        let file_path = self.file_path();
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).await?;
        let value: Value = serde_json::from_str(&json)?;

        decode_amounts(value).map(Some)
    }
}
