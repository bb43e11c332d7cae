//! Catalog record types and their JSON wire format.

use serde::{Deserialize, Serialize};

/// Disc rotation scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationType {
    /// Constant angular velocity.
    #[serde(rename = "CAV")]
    Cav,
    /// Constant linear velocity.
    #[serde(rename = "CLV")]
    Clv,
}

/// Analog video encoding of the disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoFormat {
    #[serde(rename = "NTSC")]
    Ntsc,
    #[serde(rename = "PAL")]
    Pal,
}

/// A catalog entry as stored and returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaserDisc {
    /// Store-assigned identifier, unique for the process lifetime.
    pub id: u64,
    pub film_name: String,
    pub rotation_type: RotationType,
    /// Free-form region code (e.g. "US", "EU").
    pub region: String,
    /// Runtime in minutes.
    pub length_minutes: u32,
    pub video_format: VideoFormat,
}

/// Payload for creating a catalog entry.
///
/// Carries every field except `id`. An `id` key in the request body is
/// ignored like any other unknown field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLaserDisc {
    pub film_name: String,
    pub rotation_type: RotationType,
    pub region: String,
    pub length_minutes: u32,
    pub video_format: VideoFormat,
}

impl NewLaserDisc {
    /// Attach a store-assigned id.
    pub fn with_id(self, id: u64) -> LaserDisc {
        LaserDisc {
            id,
            film_name: self.film_name,
            rotation_type: self.rotation_type,
            region: self.region,
            length_minutes: self.length_minutes,
            video_format: self.video_format,
        }
    }
}

/// The two records every fresh store starts with.
pub fn seed_records() -> Vec<LaserDisc> {
    vec![
        LaserDisc {
            id: 1,
            film_name: "Blade Runner".to_string(),
            rotation_type: RotationType::Cav,
            region: "US".to_string(),
            length_minutes: 117,
            video_format: VideoFormat::Ntsc,
        },
        LaserDisc {
            id: 2,
            film_name: "Terminator 2".to_string(),
            rotation_type: RotationType::Clv,
            region: "EU".to_string(),
            length_minutes: 137,
            video_format: VideoFormat::Pal,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_uses_camel_case_keys() {
        let value = serde_json::to_value(&seed_records()[0]).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "filmName": "Blade Runner",
                "rotationType": "CAV",
                "region": "US",
                "lengthMinutes": 117,
                "videoFormat": "NTSC",
            })
        );
    }

    #[test]
    fn test_new_record_ignores_client_id() {
        let payload: NewLaserDisc = serde_json::from_value(json!({
            "id": 99,
            "filmName": "Jurassic Park",
            "rotationType": "CAV",
            "region": "US",
            "lengthMinutes": 127,
            "videoFormat": "NTSC",
        }))
        .unwrap();

        let disc = payload.with_id(7);
        assert_eq!(disc.id, 7);
        assert_eq!(disc.film_name, "Jurassic Park");
    }

    #[test]
    fn test_unknown_tokens_rejected() {
        let result = serde_json::from_value::<NewLaserDisc>(json!({
            "filmName": "Alien",
            "rotationType": "CAV",
            "region": "US",
            "lengthMinutes": 117,
            "videoFormat": "SECAM",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_seed_ids_are_distinct() {
        let seed = seed_records();
        assert_eq!(seed.len(), 2);
        assert_ne!(seed[0].id, seed[1].id);
    }
}
