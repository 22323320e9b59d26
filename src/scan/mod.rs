//! Leaf scan classifier
//!
//! The demo's "AI analysis": a classifier interface with a fixture-backed
//! implementation that picks one of the canned disease profiles. The pick is
//! seedable so demos and tests are reproducible; production wiring without a
//! seed uses OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

mod fixtures;

/// What the scanner claims the plant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    Fruit,
    Vegetable,
    Herb,
    Ornamental,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantIdentification {
    pub plant_type: PlantType,
    pub species: String,
    pub common_name: String,
    /// Percentage, 0-100.
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeafTraits {
    pub shape: String,
    pub color: String,
    pub size: String,
    pub texture: String,
    pub abnormalities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseFinding {
    pub name: String,
    pub confidence: u8,
    pub severity: Severity,
    pub description: String,
    pub causative_agent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Symptom {
    pub symptom_type: String,
    pub severity: Severity,
    pub description: String,
    pub affected_area: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub category: String,
    pub action: String,
    pub description: String,
    pub urgency: Urgency,
    pub timing: String,
}

/// Full scan result returned to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanAnalysis {
    pub plant: PlantIdentification,
    pub leaf: LeafTraits,
    pub disease: DiseaseFinding,
    pub symptoms: Vec<Symptom>,
    pub treatments: Vec<Treatment>,
    pub preventive_measures: Vec<String>,
}

/// Pluggable classifier seam so a real model can replace the fixtures later.
pub trait LeafClassifier: Send + Sync {
    fn analyze(&self) -> ScanAnalysis;
}

/// Fixture-backed classifier: picks one known disease profile per scan and
/// attaches the shared treatment plan.
pub struct FixtureClassifier {
    rng: Mutex<StdRng>,
}

impl FixtureClassifier {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    /// Deterministic variant: the same seed yields the same scan sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for FixtureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LeafClassifier for FixtureClassifier {
    fn analyze(&self) -> ScanAnalysis {
        let mut profiles = fixtures::disease_profiles();
        let pick = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.random_range(0..profiles.len())
        };
        let profile = profiles.swap_remove(pick);

        ScanAnalysis {
            plant: profile.plant,
            leaf: profile.leaf,
            disease: profile.disease,
            symptoms: profile.symptoms,
            treatments: fixtures::treatment_plan(),
            preventive_measures: fixtures::preventive_measures(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_scans_are_reproducible() {
        let a = FixtureClassifier::with_seed(42);
        let b = FixtureClassifier::with_seed(42);

        for _ in 0..5 {
            assert_eq!(a.analyze().plant.common_name, b.analyze().plant.common_name);
        }
    }

    #[test]
    fn every_scan_is_a_known_profile_with_full_guidance() {
        let classifier = FixtureClassifier::with_seed(7);

        for _ in 0..10 {
            let analysis = classifier.analyze();
            assert!(
                analysis.plant.common_name == "Tomato" || analysis.plant.common_name == "Cabbage"
            );
            assert_eq!(analysis.treatments.len(), 4);
            assert_eq!(analysis.preventive_measures.len(), 5);
            assert!(!analysis.symptoms.is_empty());
            assert!(analysis.disease.confidence <= 100);
        }
    }

    #[test]
    fn analysis_serializes_with_lowercase_enums() {
        let analysis = FixtureClassifier::with_seed(1).analyze();
        let json = serde_json::to_value(&analysis).unwrap();

        let severity = json["disease"]["severity"].as_str().unwrap();
        assert!(matches!(severity, "mild" | "moderate" | "severe"));
        assert!(json["treatments"][0]["urgency"].is_string());
    }
}
