use serde::Serialize;

/// An administrative division with forecast coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Division {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

pub const DIVISIONS: &[Division] = &[
    Division { name: "Dhaka", latitude: 23.8103, longitude: 90.4125 },
    Division { name: "Chattogram", latitude: 22.3569, longitude: 91.7832 },
    Division { name: "Rajshahi", latitude: 24.3636, longitude: 88.6241 },
    Division { name: "Khulna", latitude: 22.8456, longitude: 89.5403 },
    Division { name: "Barishal", latitude: 22.7010, longitude: 90.3535 },
    Division { name: "Sylhet", latitude: 24.8949, longitude: 91.8687 },
    Division { name: "Rangpur", latitude: 25.7439, longitude: 89.2752 },
    Division { name: "Mymensingh", latitude: 24.7471, longitude: 90.4203 },
];

impl Division {
    /// Look up a division by name; unknown names fall back to Dhaka.
    pub fn lookup(district: &str) -> &'static Division {
        DIVISIONS
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(district.trim()))
            .unwrap_or_else(|| {
                tracing::debug!("Unknown district {:?}, using Dhaka coordinates", district);
                &DIVISIONS[0]
            })
    }

    pub fn is_known(district: &str) -> bool {
        DIVISIONS
            .iter()
            .any(|d| d.name.eq_ignore_ascii_case(district.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_division() {
        let sylhet = Division::lookup("Sylhet");
        assert_eq!(sylhet.name, "Sylhet");
        assert_eq!(sylhet.latitude, 24.8949);
        assert_eq!(Division::lookup("khulna").name, "Khulna");
    }

    #[test]
    fn unknown_district_falls_back_to_dhaka() {
        assert_eq!(Division::lookup("Atlantis").name, "Dhaka");
        assert!(!Division::is_known("Atlantis"));
        assert!(Division::is_known("Rangpur"));
    }
}
