//! Curated activities offered to the recommendation stage.
//!
//! The list is embedded verbatim in the recommendation prompt. The model may
//! pick from it or suggest activities that are not listed.

use crate::types::Activity;
use std::sync::OnceLock;

pub const CITY: &str = "Singapore";

struct Entry {
    name: &'static str,
    location: &'static str,
    personality_match: &'static [&'static str],
    social_level: &'static str,
    energy_required: &'static str,
    price_range: &'static str,
    best_for: &'static [&'static str],
}

const ENTRIES: [Entry; 15] = [
    Entry {
        name: "Gardens by the Bay Light Show",
        location: "Marina Bay",
        personality_match: &["romantic", "creative", "relaxed"],
        social_level: "Large Group",
        energy_required: "Low",
        price_range: "$",
        best_for: &["photography", "nature", "nightlife"],
    },
    Entry {
        name: "Chinatown Heritage Walk",
        location: "Chinatown",
        personality_match: &["curious", "organized", "reflective"],
        social_level: "Small Group",
        energy_required: "Medium",
        price_range: "$",
        best_for: &["history", "culture", "architecture"],
    },
    Entry {
        name: "Maxwell Food Centre Hawker Crawl",
        location: "Tanjong Pagar",
        personality_match: &["extroverted", "adventurous", "spontaneous"],
        social_level: "Small Group",
        energy_required: "Low",
        price_range: "$",
        best_for: &["food", "local culture"],
    },
    Entry {
        name: "National Museum of Singapore",
        location: "Bras Basah",
        personality_match: &["introverted", "curious", "analytical"],
        social_level: "Solo",
        energy_required: "Low",
        price_range: "$$",
        best_for: &["history", "art", "culture"],
    },
    Entry {
        name: "MacRitchie Treetop Walk",
        location: "Central Catchment Nature Reserve",
        personality_match: &["adventurous", "independent", "active"],
        social_level: "Solo",
        energy_required: "High",
        price_range: "$",
        best_for: &["nature", "hiking", "wildlife"],
    },
    Entry {
        name: "Kampong Glam and Haji Lane Stroll",
        location: "Kampong Glam",
        personality_match: &["creative", "trendy", "social"],
        social_level: "Small Group",
        energy_required: "Medium",
        price_range: "$$",
        best_for: &["shopping", "street art", "cafes"],
    },
    Entry {
        name: "Singapore Night Safari",
        location: "Mandai",
        personality_match: &["adventurous", "curious", "family-oriented"],
        social_level: "Large Group",
        energy_required: "Medium",
        price_range: "$$$",
        best_for: &["wildlife", "nature", "nightlife"],
    },
    Entry {
        name: "Little India Spice and Temple Tour",
        location: "Little India",
        personality_match: &["open-minded", "spiritual", "curious"],
        social_level: "Small Group",
        energy_required: "Medium",
        price_range: "$",
        best_for: &["culture", "food", "religion"],
    },
    Entry {
        name: "Sentosa Beach Clubs",
        location: "Sentosa Island",
        personality_match: &["extroverted", "fun-loving", "relaxed"],
        social_level: "Large Group",
        energy_required: "Medium",
        price_range: "$$$",
        best_for: &["beach", "nightlife", "socializing"],
    },
    Entry {
        name: "Peranakan Museum and Katong Shophouses",
        location: "Katong",
        personality_match: &["detail-oriented", "reflective", "curious"],
        social_level: "Solo",
        energy_required: "Low",
        price_range: "$$",
        best_for: &["history", "architecture", "food"],
    },
    Entry {
        name: "Southern Ridges Trail",
        location: "Mount Faber to Kent Ridge",
        personality_match: &["active", "independent", "outdoorsy"],
        social_level: "Small Group",
        energy_required: "High",
        price_range: "$",
        best_for: &["hiking", "views", "photography"],
    },
    Entry {
        name: "Clarke Quay River Cruise",
        location: "Clarke Quay",
        personality_match: &["romantic", "relaxed", "social"],
        social_level: "Large Group",
        energy_required: "Low",
        price_range: "$$",
        best_for: &["sightseeing", "history", "nightlife"],
    },
    Entry {
        name: "Pulau Ubin Cycling Day Trip",
        location: "Pulau Ubin",
        personality_match: &["adventurous", "nostalgic", "active"],
        social_level: "Small Group",
        energy_required: "High",
        price_range: "$",
        best_for: &["cycling", "nature", "rural life"],
    },
    Entry {
        name: "Local Cooking Class",
        location: "Tiong Bahru",
        personality_match: &["hands-on", "social", "creative"],
        social_level: "Small Group",
        energy_required: "Medium",
        price_range: "$$$",
        best_for: &["food", "learning", "culture"],
    },
    Entry {
        name: "Marina Bay Sands SkyPark Observation Deck",
        location: "Marina Bay",
        personality_match: &["ambitious", "luxury-loving", "romantic"],
        social_level: "Large Group",
        energy_required: "Low",
        price_range: "$$$",
        best_for: &["views", "photography", "architecture"],
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

/// The fifteen built-in activities.
pub fn sample_activities() -> &'static [Activity] {
    static ACTIVITIES: OnceLock<Vec<Activity>> = OnceLock::new();
    ACTIVITIES.get_or_init(|| {
        ENTRIES
            .iter()
            .map(|entry| Activity {
                name: entry.name.to_string(),
                location: entry.location.to_string(),
                personality_match: owned(entry.personality_match),
                social_level: entry.social_level.to_string(),
                energy_required: entry.energy_required.to_string(),
                price_range: entry.price_range.to_string(),
                best_for: owned(entry.best_for),
            })
            .collect()
    })
}

/// The catalog as pretty JSON for prompt embedding.
pub fn catalog_json() -> String {
    serde_json::to_string_pretty(sample_activities()).unwrap_or_else(|_| "[]".to_string())
}

pub fn find_by_name(name: &str) -> Option<&'static Activity> {
    sample_activities()
        .iter()
        .find(|activity| activity.name.eq_ignore_ascii_case(name.trim()))
}
