//! Mock vehicle recognition.

use crate::random::{ChoiceSource, choose};
use stylr_core::message::{VehicleAnalysis, VehicleCondition};

pub const UPLOAD_CAPTION: &str =
    "I've uploaded an image of my car. Please analyze it and suggest parts.";

struct VehicleRecord {
    make: &'static str,
    model: &'static str,
    year: &'static str,
    color: &'static str,
    license_plate: &'static str,
    body_type: &'static str,
    estimated_mileage: &'static str,
    condition: VehicleCondition,
    identified_parts: &'static [&'static str],
    recommended_upgrades: &'static [&'static str],
}

const KNOWN_VEHICLES: &[VehicleRecord] = &[
    VehicleRecord {
        make: "Toyota",
        model: "Camry",
        year: "2021",
        color: "Silver",
        license_plate: "ABC123",
        body_type: "Sedan",
        estimated_mileage: "45,000 miles",
        condition: VehicleCondition::Good,
        identified_parts: &["Front Bumper", "Headlights", "Grille", "Hood", "Wheels", "Side Mirrors"],
        recommended_upgrades: &[
            "LED Headlight Upgrade for better visibility",
            "Cold Air Intake for improved performance",
            "Sport Wheels for enhanced aesthetics",
            "Tinted Windows for privacy and UV protection",
        ],
    },
    VehicleRecord {
        make: "Honda",
        model: "Civic",
        year: "2022",
        color: "Blue",
        license_plate: "XYZ789",
        body_type: "Hatchback",
        estimated_mileage: "25,000 miles",
        condition: VehicleCondition::Excellent,
        identified_parts: &["Front Bumper", "Fog Lights", "Grille", "Spoiler", "Alloy Wheels"],
        recommended_upgrades: &[
            "Sport Exhaust System for better sound",
            "Carbon Fiber Front Lip for aggressive look",
            "Performance Air Filter for engine efficiency",
        ],
    },
];

impl From<&VehicleRecord> for VehicleAnalysis {
    fn from(record: &VehicleRecord) -> Self {
        let owned = |values: &[&str]| -> Vec<String> { values.iter().map(|v| v.to_string()).collect() };
        Self {
            make: record.make.to_string(),
            model: record.model.to_string(),
            year: record.year.to_string(),
            color: record.color.to_string(),
            license_plate: Some(record.license_plate.to_string()),
            body_type: record.body_type.to_string(),
            estimated_mileage: Some(record.estimated_mileage.to_string()),
            condition: record.condition,
            identified_parts: owned(record.identified_parts),
            recommended_upgrades: owned(record.recommended_upgrades),
        }
    }
}

/// Picks one of the known vehicles.
pub fn analyze_vehicle(rng: &mut dyn ChoiceSource) -> VehicleAnalysis {
    let record = choose(rng, KNOWN_VEHICLES).unwrap_or(&KNOWN_VEHICLES[0]);
    VehicleAnalysis::from(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedChoice;
    use stylr_core::catalog::HONDA_CIVIC;

    #[test]
    fn test_pick_is_driven_by_source() {
        let camry = analyze_vehicle(&mut ScriptedChoice::new([0]));
        assert_eq!(camry.make, "Toyota");
        assert_eq!(camry.condition, VehicleCondition::Good);

        let civic = analyze_vehicle(&mut ScriptedChoice::new([1]));
        assert_eq!(civic.body_type, "Hatchback");
        assert_eq!(civic.vehicle_key(), HONDA_CIVIC);
        assert_eq!(civic.license_plate.as_deref(), Some("XYZ789"));
    }
}
