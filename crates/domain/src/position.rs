#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, PositionError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(PositionError::Latitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(PositionError::Longitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PositionError {
    #[error("Latitude must be between -90 and 90 degrees ({0})")]
    Latitude(f64),
    #[error("Longitude must be between -180 and 180 degrees ({0})")]
    Longitude(f64),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(10.0, 20.0, Ok(Position { latitude: 10.0, longitude: 20.0 }))]
    #[case(-90.0, 180.0, Ok(Position { latitude: -90.0, longitude: 180.0 }))]
    #[case(90.1, 0.0, Err(PositionError::Latitude(90.1)))]
    #[case(f64::NAN, 0.0, Err(PositionError::Latitude(f64::NAN)))]
    #[case(0.0, -180.5, Err(PositionError::Longitude(-180.5)))]
    fn test_position_new(
        #[case] latitude: f64,
        #[case] longitude: f64,
        #[case] expected: Result<Position, PositionError>,
    ) {
        match (Position::new(latitude, longitude), expected) {
            (Err(PositionError::Latitude(a)), Err(PositionError::Latitude(b)))
                if a.is_nan() && b.is_nan() => {}
            (result, expected) => assert_eq!(result, expected),
        }
    }
}
