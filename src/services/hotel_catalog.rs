use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use crate::models::hotel::{HotelDetails, HotelRecord, HotelSummary};

pub const MAX_SEARCH_RESULTS: usize = 20;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("City or area is required")]
    MissingCriteria,
    #[error("Hotel not found")]
    NotFound,
    #[error("Failed to read hotel dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("Hotel loader task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Read-only hotel table shared by every worker.
///
/// The table is filled once. Until then every query sees an empty table.
#[derive(Clone, Default)]
pub struct HotelCatalog {
    hotels: Arc<OnceLock<Vec<HotelRecord>>>,
}

impl HotelCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<HotelRecord>) -> Self {
        let catalog = Self::new();
        catalog.install(records);
        catalog
    }

    /// Reads the dataset on the blocking pool and installs it when done.
    /// Failures are logged and leave the table empty.
    pub fn load_in_background(&self, path: PathBuf) -> tokio::task::JoinHandle<()> {
        let catalog = self.clone();
        tokio::spawn(async move {
            match catalog.load_from_path(path.clone()).await {
                Ok(count) => log::info!("Loaded {} hotels from {}", count, path.display()),
                Err(err) => log::warn!("Could not load hotels CSV {}: {}", path.display(), err),
            }
        })
    }

    pub async fn load_from_path(&self, path: PathBuf) -> Result<usize, CatalogError> {
        let records = tokio::task::spawn_blocking(move || read_csv_file(&path)).await??;
        Ok(self.install(records))
    }

    /// Returns how many rows the table holds after the call. A second install
    /// is ignored.
    pub fn install(&self, records: Vec<HotelRecord>) -> usize {
        if self.hotels.set(records).is_err() {
            log::warn!("Hotel table already loaded, ignoring reload");
        }
        self.len()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    fn records(&self) -> &[HotelRecord] {
        self.hotels.get().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Case-insensitive substring search on city and/or area. Both criteria
    /// must match when both are given. Blank criteria count as absent.
    pub fn search(
        &self,
        city: Option<&str>,
        area: Option<&str>,
    ) -> Result<Vec<HotelSummary>, CatalogError> {
        let city = lowercase_criterion(city);
        let area = lowercase_criterion(area);

        if city.is_none() && area.is_none() {
            return Err(CatalogError::MissingCriteria);
        }

        Ok(self
            .records()
            .iter()
            .filter(|hotel| contains_ignore_case(&hotel.city, city.as_deref()))
            .filter(|hotel| contains_ignore_case(&hotel.area, area.as_deref()))
            .take(MAX_SEARCH_RESULTS)
            .map(HotelSummary::from)
            .collect())
    }

    pub fn get_by_id(&self, hotel_id: &str) -> Result<HotelDetails, CatalogError> {
        self.records()
            .iter()
            .find(|hotel| hotel.property_id == hotel_id)
            .map(HotelDetails::from)
            .ok_or(CatalogError::NotFound)
    }
}

/// Rows that fail to decode are logged and skipped. Only a failure to read the
/// header fails the whole load.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<HotelRecord>, CatalogError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    reader.headers()?;

    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<HotelRecord>().enumerate() {
        match row {
            Ok(record) => records.push(record),
            Err(err) => {
                let record = err
                    .position()
                    .map(|pos| pos.record())
                    .unwrap_or(index as u64 + 1);
                log::warn!("Skipping hotel record {}: {}", record, err);
            }
        }
    }
    Ok(records)
}

fn read_csv_file(path: &Path) -> Result<Vec<HotelRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_csv(file)
}

fn lowercase_criterion(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.is_empty())
        .map(str::to_lowercase)
}

fn contains_ignore_case(field: &str, needle: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => !field.is_empty() && field.to_lowercase().contains(needle),
    }
}
