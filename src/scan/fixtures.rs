// src/scan/fixtures.rs
// Canned disease profiles and the shared treatment guidance

use super::{
    DiseaseFinding, LeafTraits, PlantIdentification, PlantType, Severity, Symptom, Treatment,
    Urgency,
};

/// One pickable scan outcome: identification, leaf findings, disease, symptoms.
pub(super) struct DiseaseProfile {
    pub plant: PlantIdentification,
    pub leaf: LeafTraits,
    pub disease: DiseaseFinding,
    pub symptoms: Vec<Symptom>,
}

pub(super) fn disease_profiles() -> Vec<DiseaseProfile> {
    vec![tomato_early_blight(), cabbage_clubroot()]
}

fn tomato_early_blight() -> DiseaseProfile {
    DiseaseProfile {
        plant: PlantIdentification {
            plant_type: PlantType::Fruit,
            species: "Solanum lycopersicum".into(),
            common_name: "Tomato".into(),
            confidence: 94,
        },
        leaf: LeafTraits {
            shape: "Compound pinnate".into(),
            color: "Dark green with yellowing edges".into(),
            size: "Medium (15-20cm)".into(),
            texture: "Slightly fuzzy with visible veins".into(),
            abnormalities: vec![
                "Brown spots".into(),
                "Yellowing margins".into(),
                "Wilting edges".into(),
            ],
        },
        disease: DiseaseFinding {
            name: "Early Blight".into(),
            confidence: 92,
            severity: Severity::Moderate,
            description: "Fungal disease causing dark spots with concentric rings on leaves"
                .into(),
            causative_agent: "Alternaria solani".into(),
        },
        symptoms: vec![
            Symptom {
                symptom_type: "Leaf spots".into(),
                severity: Severity::Moderate,
                description: "Dark brown spots with yellow halos".into(),
                affected_area: "Lower leaves primarily".into(),
            },
            Symptom {
                symptom_type: "Leaf yellowing".into(),
                severity: Severity::Mild,
                description: "Progressive yellowing from leaf margins".into(),
                affected_area: "Older leaves".into(),
            },
        ],
    }
}

fn cabbage_clubroot() -> DiseaseProfile {
    DiseaseProfile {
        plant: PlantIdentification {
            plant_type: PlantType::Vegetable,
            species: "Brassica oleracea".into(),
            common_name: "Cabbage".into(),
            confidence: 88,
        },
        leaf: LeafTraits {
            shape: "Broad ovate".into(),
            color: "Blue-green with purple tinge".into(),
            size: "Large (20-30cm)".into(),
            texture: "Smooth with waxy coating".into(),
            abnormalities: vec![
                "Small holes".into(),
                "Chewed edges".into(),
                "Discoloration patches".into(),
            ],
        },
        disease: DiseaseFinding {
            name: "Clubroot Disease".into(),
            confidence: 85,
            severity: Severity::Severe,
            description: "Soil-borne disease affecting root system and causing stunted growth"
                .into(),
            causative_agent: "Plasmodiophora brassicae".into(),
        },
        symptoms: vec![
            Symptom {
                symptom_type: "Stunted growth".into(),
                severity: Severity::Severe,
                description: "Plant appears smaller than normal".into(),
                affected_area: "Entire plant".into(),
            },
            Symptom {
                symptom_type: "Leaf wilting".into(),
                severity: Severity::Moderate,
                description: "Leaves wilt during hot weather".into(),
                affected_area: "Outer leaves".into(),
            },
        ],
    }
}

/// Treatment guidance is the same for every profile in the demo fixture set.
pub(super) fn treatment_plan() -> Vec<Treatment> {
    vec![
        Treatment {
            category: "Immediate Action".into(),
            action: "Remove affected leaves".into(),
            description: "Carefully remove and dispose of infected plant material".into(),
            urgency: Urgency::High,
            timing: "Within 24 hours".into(),
        },
        Treatment {
            category: "Fungicide Treatment".into(),
            action: "Apply organic fungicide".into(),
            description: "Use copper-based or neem oil fungicide spray".into(),
            urgency: Urgency::Medium,
            timing: "Every 7-10 days".into(),
        },
        Treatment {
            category: "Cultural Control".into(),
            action: "Improve air circulation".into(),
            description: "Space plants properly and prune lower branches".into(),
            urgency: Urgency::Medium,
            timing: "Next growing season".into(),
        },
        Treatment {
            category: "Soil Management".into(),
            action: "Soil amendment".into(),
            description: "Add organic compost and ensure proper drainage".into(),
            urgency: Urgency::Low,
            timing: "Before next planting".into(),
        },
    ]
}

pub(super) fn preventive_measures() -> Vec<String> {
    vec![
        "Rotate crops annually to break disease cycles".into(),
        "Water at soil level to avoid wetting leaves".into(),
        "Ensure adequate spacing between plants".into(),
        "Remove plant debris at end of season".into(),
        "Use disease-resistant varieties when available".into(),
    ]
}
