//! Supported year ranges
//!
//! The race catalog covers more seasons than the lap-timing table, so the two
//! ranges are configured separately. Both default to the reference dataset.

use serde::{Deserialize, Serialize};

use crate::AnalysisError;

/// Inclusive range of supported season years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearBounds {
    pub min: i32,
    pub max: i32,
}

impl YearBounds {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    pub fn check_not_after(self, year: i32) -> Result<(), AnalysisError> {
        if year > self.max {
            return Err(AnalysisError::YearAfterSupported {
                year,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn check_not_before(self, year: i32) -> Result<(), AnalysisError> {
        if year < self.min {
            return Err(AnalysisError::YearBeforeSupported {
                year,
                min: self.min,
            });
        }
        Ok(())
    }

    /// Fails with the bound `year` violates, if any.
    pub fn check(self, year: i32) -> Result<(), AnalysisError> {
        self.check_not_after(year)?;
        self.check_not_before(year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Seasons accepted by the race index and the standings resolver.
    pub race_years: YearBounds,
    /// Bounds of the cross-season aggregation range.
    ///
    /// `max` caps the first (most recent) year, `min` is the lowest accepted
    /// exclusive end year.
    pub lap_years: YearBounds,
}

impl AnalysisConfig {
    pub const DEFAULT_RACE_YEARS: YearBounds = YearBounds::new(1950, 2023);
    pub const DEFAULT_LAP_YEARS: YearBounds = YearBounds::new(1994, 2023);
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            race_years: Self::DEFAULT_RACE_YEARS,
            lap_years: Self::DEFAULT_LAP_YEARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_check_names_offending_bound() {
        let bounds = AnalysisConfig::DEFAULT_RACE_YEARS;
        assert!(bounds.check(2023).is_ok());
        assert!(bounds.check(1950).is_ok());

        let err = bounds.check(2024).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::YearAfterSupported {
                year: 2024,
                max: 2023
            }
        );
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("2023"));

        let err = bounds.check(1949).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::YearBeforeSupported {
                year: 1949,
                min: 1950
            }
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AnalysisConfig =
            serde_json::from_str(r#"{"lap_years": {"min": 2000, "max": 2010}}"#).unwrap();
        assert_eq!(config.race_years, AnalysisConfig::DEFAULT_RACE_YEARS);
        assert_eq!(config.lap_years, YearBounds::new(2000, 2010));
        assert!(config.lap_years.contains(2005));
        assert!(!config.lap_years.contains(2011));
    }
}
