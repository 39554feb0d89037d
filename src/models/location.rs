use serde::{Deserialize, Serialize};

/// A geolocation fix taken at the moment of a clock event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationReading {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: Option<f64>, // metres, when the provider reports it
}

impl LocationReading {
    pub fn new(latitude: f64, longitude: f64, accuracy: Option<f64>) -> Self {
        Self {
            latitude,
            longitude,
            accuracy,
        }
    }

    /// "45.4642, 9.1900" — four decimals, as shown in confirmations.
    pub fn short(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// Parse provider output of the form `lat,lon[,accuracy]`.
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.trim().split(',').map(str::trim);

        let latitude = parts.next()?.parse::<f64>().ok()?;
        let longitude = parts.next()?.parse::<f64>().ok()?;
        let accuracy = match parts.next() {
            Some(a) if !a.is_empty() => Some(a.parse::<f64>().ok()?),
            _ => None,
        };

        if parts.next().is_some() {
            return None;
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return None;
        }

        Some(Self::new(latitude, longitude, accuracy))
    }
}
