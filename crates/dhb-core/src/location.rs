//! Supported places and their fixed coordinates.

use std::fmt;

/// One of the fixed supported locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlaceName {
    AddisAbaba,
    Haramaya,
    BaleRobe,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl PlaceName {
    pub const ALL: [PlaceName; 3] = [
        PlaceName::AddisAbaba,
        PlaceName::Haramaya,
        PlaceName::BaleRobe,
    ];

    /// Human-readable name; also the query key sent to the weather service.
    pub fn display_name(self) -> &'static str {
        match self {
            PlaceName::AddisAbaba => "Addis Ababa",
            PlaceName::Haramaya => "Haramaya",
            PlaceName::BaleRobe => "Bale Robe",
        }
    }

    /// Short form used in command names (`weather_addis`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            PlaceName::AddisAbaba => "addis",
            PlaceName::Haramaya => "haramaya",
            PlaceName::BaleRobe => "balerobe",
        }
    }

    pub fn coordinates(self) -> Coordinates {
        let (latitude, longitude) = match self {
            PlaceName::AddisAbaba => (9.03, 38.74),
            PlaceName::Haramaya => (9.36, 42.03),
            PlaceName::BaleRobe => (6.98, 39.84),
        };
        Coordinates {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_place_has_plausible_coordinates() {
        for place in PlaceName::ALL {
            let c = place.coordinates();
            assert!((-90.0..=90.0).contains(&c.latitude), "{place}");
            assert!((-180.0..=180.0).contains(&c.longitude), "{place}");
        }
        assert_eq!(
            PlaceName::AddisAbaba.coordinates(),
            Coordinates {
                latitude: 9.03,
                longitude: 38.74
            }
        );
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = PlaceName::ALL.iter().map(|p| p.slug()).collect();
        assert_eq!(slugs.len(), PlaceName::ALL.len());
    }
}
