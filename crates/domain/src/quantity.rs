use derive_more::{Display, Into};

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub fn new(value: f64) -> Result<Self, DistanceError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DistanceError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Distance {
    type Error = DistanceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Distance::new(parsed_value),
            Err(_) => Err(DistanceError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DistanceError {
    #[error("Distance must be a positive number of kilometers")]
    OutOfRange,
    #[error("Distance must be a number")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Duration(f64);

impl Duration {
    pub fn new(value: f64) -> Result<Self, DurationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(DurationError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Duration {
    type Error = DurationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Duration::new(parsed_value),
            Err(_) => Err(DurationError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DurationError {
    #[error("Duration must be a positive number of minutes")]
    OutOfRange,
    #[error("Duration must be a number")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Cadence(f64);

impl Cadence {
    pub fn new(value: f64) -> Result<Self, CadenceError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(CadenceError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Cadence {
    type Error = CadenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Cadence::new(parsed_value),
            Err(_) => Err(CadenceError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CadenceError {
    #[error("Cadence must be a positive number of steps per minute")]
    OutOfRange,
    #[error("Cadence must be a number")]
    ParseError,
}

/// Elevation gain in meters. A descent is a negative gain, so only
/// finiteness is required.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Elevation(f64);

impl Elevation {
    pub fn new(value: f64) -> Result<Self, ElevationError> {
        if !value.is_finite() {
            return Err(ElevationError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Elevation {
    type Error = ElevationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<f64>() {
            Ok(parsed_value) => Elevation::new(parsed_value),
            Err(_) => Err(ElevationError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ElevationError {
    #[error("Elevation gain must be a finite number of meters")]
    OutOfRange,
    #[error("Elevation gain must be a number")]
    ParseError,
}

/// Pace in minutes per kilometer, derived once at creation time and
/// stored as is.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Pace(f64);

impl Pace {
    #[must_use]
    pub fn calculate(duration: Duration, distance: Distance) -> Self {
        Self(f64::from(duration) / f64::from(distance))
    }
}

impl From<f64> for Pace {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// Speed in kilometers per hour, derived once at creation time and
/// stored as is.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Speed(f64);

impl Speed {
    #[must_use]
    pub fn calculate(distance: Distance, duration: Duration) -> Self {
        Self(f64::from(distance) / (f64::from(duration) / 60.0))
    }
}

impl From<f64> for Speed {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("5", Ok(Distance(5.0)))]
    #[case("0.4", Ok(Distance(0.4)))]
    #[case(" 5 ", Ok(Distance(5.0)))]
    #[case("0", Err(DistanceError::OutOfRange))]
    #[case("-3", Err(DistanceError::OutOfRange))]
    #[case("inf", Err(DistanceError::OutOfRange))]
    #[case("NaN", Err(DistanceError::OutOfRange))]
    #[case("", Err(DistanceError::ParseError))]
    #[case("abc", Err(DistanceError::ParseError))]
    fn test_distance_try_from(
        #[case] value: &str,
        #[case] expected: Result<Distance, DistanceError>,
    ) {
        assert_eq!(Distance::try_from(value), expected);
    }

    #[rstest]
    #[case("30", Ok(Duration(30.0)))]
    #[case("0", Err(DurationError::OutOfRange))]
    #[case("-10", Err(DurationError::OutOfRange))]
    #[case("half an hour", Err(DurationError::ParseError))]
    fn test_duration_try_from(
        #[case] value: &str,
        #[case] expected: Result<Duration, DurationError>,
    ) {
        assert_eq!(Duration::try_from(value), expected);
    }

    #[rstest]
    #[case("170", Ok(Cadence(170.0)))]
    #[case("0", Err(CadenceError::OutOfRange))]
    #[case("-170", Err(CadenceError::OutOfRange))]
    #[case("", Err(CadenceError::ParseError))]
    fn test_cadence_try_from(
        #[case] value: &str,
        #[case] expected: Result<Cadence, CadenceError>,
    ) {
        assert_eq!(Cadence::try_from(value), expected);
    }

    #[rstest]
    #[case("523", Ok(Elevation(523.0)))]
    #[case("0", Ok(Elevation(0.0)))]
    #[case("-120", Ok(Elevation(-120.0)))]
    #[case("inf", Err(ElevationError::OutOfRange))]
    #[case("", Err(ElevationError::ParseError))]
    fn test_elevation_try_from(
        #[case] value: &str,
        #[case] expected: Result<Elevation, ElevationError>,
    ) {
        assert_eq!(Elevation::try_from(value), expected);
    }

    #[rstest]
    #[case(30.0, 5.0, 6.0)]
    #[case(25.0, 5.0, 5.0)]
    #[case(10.0, 4.0, 2.5)]
    fn test_pace_calculate(#[case] duration: f64, #[case] distance: f64, #[case] expected: f64) {
        assert_eq!(
            f64::from(Pace::calculate(
                Duration::new(duration).unwrap(),
                Distance::new(distance).unwrap()
            )),
            expected
        );
    }

    #[rstest]
    #[case(11.0, 24.0, 27.5)]
    #[case(20.0, 60.0, 20.0)]
    #[case(1.0, 120.0, 0.5)]
    fn test_speed_calculate(#[case] distance: f64, #[case] duration: f64, #[case] expected: f64) {
        assert_eq!(
            f64::from(Speed::calculate(
                Distance::new(distance).unwrap(),
                Duration::new(duration).unwrap()
            )),
            expected
        );
    }
}
