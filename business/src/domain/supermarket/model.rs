use super::errors::SupermarketError;

/// Search radius used when the caller does not supply one.
pub const DEFAULT_RADIUS_METERS: u32 = 500;

/// A WGS84 point, parsed from the `"latitude,longitude"` query format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl std::str::FromStr for Coordinates {
    type Err = SupermarketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (latitude, longitude) = s
            .split_once(',')
            .ok_or(SupermarketError::InvalidLocation)?;

        let latitude: f64 = latitude
            .trim()
            .parse()
            .map_err(|_| SupermarketError::InvalidLocation)?;
        let longitude: f64 = longitude
            .trim()
            .parse()
            .map_err(|_| SupermarketError::InvalidLocation)?;

        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(SupermarketError::InvalidLocation);
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Supermarket {
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}
