use pitwall_data::{DriverId, RaceId};

/// Broad class of an [`AnalysisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value outside the supported domain.
    InvalidArgument,
    /// A referenced identifier has no row in its catalog.
    NotFound,
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum AnalysisError {
    #[display("year {year} is after the latest supported year {max}")]
    YearAfterSupported { year: i32, max: i32 },
    #[display("year {year} is before the earliest supported year {min}")]
    YearBeforeSupported { year: i32, min: i32 },
    #[display("number of standard deviations must be finite and positive, got {std_devs}")]
    InvalidStdDevs { std_devs: f64 },
    #[display("birth period must be a positive number of years, got {period}")]
    InvalidPeriod { period: i32 },
    #[display("no driver with id {driver} in the driver catalog")]
    DriverNotFound { driver: DriverId },
    #[display("no race with id {race} in the race catalog")]
    RaceNotFound { race: RaceId },
}

impl AnalysisError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::YearAfterSupported { .. }
            | AnalysisError::YearBeforeSupported { .. }
            | AnalysisError::InvalidStdDevs { .. }
            | AnalysisError::InvalidPeriod { .. } => ErrorKind::InvalidArgument,
            AnalysisError::DriverNotFound { .. } | AnalysisError::RaceNotFound { .. } => {
                ErrorKind::NotFound
            }
        }
    }
}
