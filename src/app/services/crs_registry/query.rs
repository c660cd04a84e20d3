//! Registry browse and search queries
//!
//! This module provides the read side of the registry: listing rows with
//! pagination, grouping them by IAU version or solar body, keyword search
//! and the OGC identifier bridge.

use super::CrsRegistry;
use crate::app::models::{WktId, WktRow};
use crate::constants::{
    DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, MIN_IAU_VERSION_EXCLUSIVE, OGC_IAU_BASE_URL,
};
use crate::{Error, Result};
use std::collections::BTreeSet;

/// Offset/limit window over a query result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub limit: usize,
}

impl Page {
    /// Create a page, rejecting limits above [`MAX_PAGE_LIMIT`]
    pub fn new(offset: usize, limit: usize) -> Result<Self> {
        Self::bounded(offset, limit, MAX_PAGE_LIMIT)
    }

    /// Create a page with a custom upper bound on the limit
    pub fn bounded(offset: usize, limit: usize, max_limit: usize) -> Result<Self> {
        if limit > max_limit {
            return Err(Error::invalid_query(format!(
                "limit {} exceeds the maximum of {}",
                limit, max_limit
            )));
        }
        Ok(Self { offset, limit })
    }

    fn apply<'a>(&self, rows: impl Iterator<Item = &'a WktRow>) -> Vec<&'a WktRow> {
        rows.skip(self.offset).take(self.limit).collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

fn check_version(version: u32) -> Result<()> {
    if version <= MIN_IAU_VERSION_EXCLUSIVE {
        return Err(Error::invalid_query(format!(
            "IAU version {} must be greater than {}",
            version, MIN_IAU_VERSION_EXCLUSIVE
        )));
    }
    Ok(())
}

impl CrsRegistry {
    /// All rows regardless of version
    pub fn all(&self, page: Page) -> Vec<&WktRow> {
        page.apply(self.rows.iter())
    }

    /// Row for an `IAU:<version>:<code>` identifier
    pub fn get(&self, id: &str) -> Result<&WktRow> {
        let wkt_id: WktId = id.parse()?;
        self.get_by_id(&wkt_id)
            .ok_or_else(|| Error::record_not_found(id))
    }

    /// Distinct IAU versions, ascending
    pub fn versions(&self) -> Vec<u32> {
        self.rows
            .iter()
            .map(|row| row.version)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows of one IAU version
    ///
    /// # Errors
    /// * `InvalidQuery` if the version is not greater than 2014
    /// * `RecordNotFound` if the page is empty
    pub fn by_version(&self, version: u32, page: Page) -> Result<Vec<&WktRow>> {
        check_version(version)?;
        let rows = page.apply(self.rows.iter().filter(|row| row.version == version));
        if rows.is_empty() {
            return Err(Error::record_not_found(version.to_string()));
        }
        Ok(rows)
    }

    /// Number of rows of one IAU version
    pub fn count_by_version(&self, version: u32) -> Result<usize> {
        check_version(version)?;
        Ok(self.rows.iter().filter(|row| row.version == version).count())
    }

    /// Row for an identifier, required to belong to `version`
    pub fn get_for_version(&self, version: u32, id: &str) -> Result<&WktRow> {
        check_version(version)?;
        let row = self.get(id)?;
        if row.version != version {
            return Err(Error::mismatch(format!(
                "Wrong version {} for this WKT {}",
                version, id
            )));
        }
        Ok(row)
    }

    /// Distinct solar bodies, sorted
    pub fn solar_bodies(&self) -> Vec<&str> {
        self.rows
            .iter()
            .map(|row| row.solar_body.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Rows of one solar body, compared case-insensitively
    pub fn by_solar_body(&self, solar_body: &str, page: Page) -> Result<Vec<&WktRow>> {
        let rows = page.apply(self.rows_for_body(solar_body));
        if rows.is_empty() {
            return Err(Error::record_not_found(solar_body));
        }
        Ok(rows)
    }

    /// Number of rows of one solar body
    pub fn count_by_solar_body(&self, solar_body: &str) -> usize {
        self.rows_for_body(solar_body).count()
    }

    /// Row for an identifier, required to belong to `solar_body`
    pub fn get_for_solar_body(&self, solar_body: &str, id: &str) -> Result<&WktRow> {
        let row = self.get(id)?;
        if row.solar_body.to_lowercase() != solar_body.to_lowercase() {
            return Err(Error::mismatch(format!("{} not found for {}", id, solar_body)));
        }
        Ok(row)
    }

    /// Rows whose WKT text or identifier contains `term`
    pub fn search(&self, term: &str, page: Page) -> Vec<&WktRow> {
        page.apply(self.rows_matching(term))
    }

    /// Number of rows whose WKT text or identifier contains `term`
    pub fn search_count(&self, term: &str) -> usize {
        self.rows_matching(term).count()
    }

    /// OGC URI of every IAU version
    pub fn ogc_versions(&self) -> Vec<String> {
        self.versions()
            .into_iter()
            .map(|version| format!("{}/{}", OGC_IAU_BASE_URL, version))
            .collect()
    }

    /// OGC URI of every biaxial CRS of one version
    ///
    /// Triaxial definitions have no OGC counterpart and are left out.
    pub fn ogc_identifiers(&self, version: u32) -> Result<Vec<String>> {
        check_version(version)?;
        let rows: Vec<&WktRow> = self
            .rows
            .iter()
            .filter(|row| row.version == version)
            .collect();
        if rows.is_empty() {
            return Err(Error::record_not_found(version.to_string()));
        }

        Ok(rows
            .into_iter()
            .filter(|row| !row.is_triaxial())
            .map(|row| format!("{}/{}/{}", OGC_IAU_BASE_URL, version, row.code))
            .collect())
    }

    fn rows_for_body<'a>(
        &'a self,
        solar_body: &str,
    ) -> impl Iterator<Item = &'a WktRow> + use<'a> {
        let wanted = solar_body.to_lowercase();
        self.rows
            .iter()
            .filter(move |row| row.solar_body.to_lowercase() == wanted)
    }

    fn rows_matching<'a, 'b>(
        &'a self,
        term: &'b str,
    ) -> impl Iterator<Item = &'a WktRow> + use<'a, 'b> {
        self.rows
            .iter()
            .filter(move |row| row.wkt.contains(term) || row.id.contains(term))
    }
}
