//! Price Value Object
//!
//! A finite, non-negative amount. Stored as `DOUBLE PRECISION`.

use derive_more::Display;

use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> CatalogResult<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidRequest(
                "Price must be a non-negative number".to_string(),
            ));
        }
        Ok(Self(amount))
    }

    pub(crate) fn from_db(amount: f64) -> Self {
        Self(amount)
    }

    pub fn get(&self) -> f64 {
        self.0
    }
}
