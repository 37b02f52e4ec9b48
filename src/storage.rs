//! JSON persistence for the coupon stash.
//!
//! The stash file is a JSON array of plain-text records. Loading runs every
//! field back through its value type's constructor, so a hand-edited file
//! cannot smuggle invalid data into the model.

use std::{collections::BTreeSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::coupon::{
    Coupon, ExpiryDate, MonetaryAmount, Name, PercentageAmount, Phone, Saveable, Savings, Tag,
    ValidationError,
};

/// The failures loading or saving a stash file can report.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The stash file could not be read or written.
    #[error("could not read or write the stash file: {0}")]
    Io(#[from] std::io::Error),

    /// The stash file is not well-formed JSON.
    #[error("the stash file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A record in the stash file failed value-type validation.
    #[error("the stash file contains an invalid coupon: {0}")]
    InvalidCoupon(#[from] ValidationError),
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredSavings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    monetary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    percentage: Option<f64>,
    #[serde(default)]
    saveables: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredCoupon {
    name: String,
    phone: String,
    savings: StoredSavings,
    expiry_date: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl From<&Coupon> for StoredCoupon {
    fn from(coupon: &Coupon) -> Self {
        Self {
            name: coupon.name().as_ref().to_string(),
            phone: coupon.phone().as_ref().to_string(),
            savings: StoredSavings {
                monetary: coupon.savings().monetary().map(|amount| amount.value()),
                percentage: coupon.savings().percentage().map(|amount| amount.value()),
                saveables: coupon
                    .savings()
                    .saveables()
                    .iter()
                    .map(|saveable| saveable.as_ref().to_string())
                    .collect(),
            },
            expiry_date: coupon.expiry_date().to_string(),
            tags: coupon
                .tags()
                .iter()
                .map(|tag| tag.as_ref().to_string())
                .collect(),
        }
    }
}

impl StoredCoupon {
    fn into_coupon(self) -> Result<Coupon, ValidationError> {
        let monetary = self.savings.monetary.map(MonetaryAmount::new).transpose()?;
        let percentage = self
            .savings
            .percentage
            .map(PercentageAmount::new)
            .transpose()?;
        let saveables = self
            .savings
            .saveables
            .iter()
            .map(|text| Saveable::new(text))
            .collect::<Result<Vec<_>, _>>()?;
        let tags = self
            .tags
            .iter()
            .map(|name| Tag::new(name))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Coupon::new(
            Name::new(&self.name)?,
            Phone::new(&self.phone)?,
            Savings::new(monetary, percentage, saveables)?,
            ExpiryDate::new(&self.expiry_date)?,
            tags,
        ))
    }
}

/// Load an ordered coupon collection from the stash file at `path`.
///
/// # Errors
///
/// Returns a [StorageError] if the file cannot be read, is not valid JSON,
/// or contains a coupon that fails validation.
pub fn load_stash(path: &Path) -> Result<Vec<Coupon>, StorageError> {
    let text = fs::read_to_string(path)?;
    let stored: Vec<StoredCoupon> = serde_json::from_str(&text)?;

    stored
        .into_iter()
        .map(|coupon| coupon.into_coupon().map_err(StorageError::from))
        .collect()
}

/// Save an ordered coupon collection to the stash file at `path`.
///
/// # Errors
///
/// Returns a [StorageError] if the file cannot be written.
pub fn save_stash(path: &Path, coupons: &[Coupon]) -> Result<(), StorageError> {
    let stored: Vec<StoredCoupon> = coupons.iter().map(StoredCoupon::from).collect();
    let text = serde_json::to_string_pretty(&stored)?;

    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        storage::{StorageError, load_stash, save_stash},
        test_util::{amy, bob, carl},
    };

    #[test]
    fn saved_stash_loads_back_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.json");
        let coupons = vec![amy(), bob(), carl()];

        save_stash(&path, &coupons).unwrap();
        let loaded = load_stash(&path).unwrap();

        assert_eq!(loaded, coupons);
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        let dir = tempfile::tempdir().unwrap();

        let got = load_stash(&dir.path().join("missing.json"));

        assert!(matches!(got, Err(StorageError::Io(_))));
    }

    #[test]
    fn malformed_json_reports_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.json");
        std::fs::write(&path, "not json").unwrap();

        let got = load_stash(&path);

        assert!(matches!(got, Err(StorageError::Json(_))));
    }

    #[test]
    fn invalid_field_text_reports_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stash.json");
        let record = r#"[{
            "name": "Amy Bee",
            "phone": "911a",
            "savings": { "saveables": ["Cake"] },
            "expiry_date": "30-12-2020",
            "tags": []
        }]"#;
        std::fs::write(&path, record).unwrap();

        let got = load_stash(&path);

        assert!(matches!(got, Err(StorageError::InvalidCoupon(_))));
    }
}
