//! Crop catalog providers

use shared::{default_catalog, CropCatalogEntry};

use crate::error::{AppError, AppResult};

/// Source of crop catalog records
pub trait CatalogProvider: Send + Sync {
    /// All crops, in catalog order
    fn list_crops(&self) -> AppResult<Vec<CropCatalogEntry>>;

    /// A single crop by id
    fn find_crop(&self, crop_id: &str) -> AppResult<CropCatalogEntry> {
        self.list_crops()?
            .into_iter()
            .find(|c| c.id == crop_id)
            .ok_or_else(|| AppError::NotFound(format!("Crop {}", crop_id)))
    }
}

/// In-memory catalog, seeded with the built-in crops
#[derive(Debug, Clone)]
pub struct DefaultCatalogProvider {
    crops: Vec<CropCatalogEntry>,
}

impl DefaultCatalogProvider {
    pub fn new() -> Self {
        Self {
            crops: default_catalog(),
        }
    }

    pub fn with_crops(crops: Vec<CropCatalogEntry>) -> Self {
        Self { crops }
    }
}

impl Default for DefaultCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogProvider for DefaultCatalogProvider {
    fn list_crops(&self) -> AppResult<Vec<CropCatalogEntry>> {
        Ok(self.crops.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_lists_builtin_catalog() {
        let provider = DefaultCatalogProvider::new();
        assert_eq!(provider.list_crops().unwrap().len(), 8);
        assert_eq!(provider.find_crop("wheat").unwrap().name, "Wheat");
    }

    #[test]
    fn unknown_crop_is_not_found() {
        let provider = DefaultCatalogProvider::with_crops(Vec::new());
        assert!(matches!(
            provider.find_crop("wheat"),
            Err(AppError::NotFound(_))
        ));
    }
}
