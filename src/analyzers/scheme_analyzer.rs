use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::debug;

use crate::models::SchemeRecord;
use crate::utils::constants::{
    FUNCTIONAL_STATUSES, UNREGISTERED_LABEL, WATER_AVAILABILITY_CATEGORIES,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemeAnalytics {
    pub water_availability: WaterAvailability,
    pub infrastructure_status: BTreeMap<String, u64>,
    pub application_methods: BTreeMap<String, u64>,
    pub current_status: BTreeMap<String, u64>,
    pub registration_status: BTreeMap<String, u64>,
    pub statistics: SchemeStatistics,
}

/// Water availability category by subcounty, zero-filled for every
/// standard category and every subcounty that reported one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WaterAvailability {
    pub subcounties: Vec<String>,
    pub categories: BTreeMap<String, BTreeMap<String, u64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemeStatistics {
    pub total_schemes: u64,
    pub functional_rate: u64,
    pub functional_count: u64,
}

impl SchemeStatistics {
    pub fn summary(&self) -> String {
        format!(
            "{} schemes, {} functional ({}%)",
            self.total_schemes, self.functional_count, self.functional_rate
        )
    }
}

pub struct SchemeAnalyzer;

impl SchemeAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, schemes: &[SchemeRecord]) -> SchemeAnalytics {
        let total_schemes = schemes.len() as u64;

        let functional_count = schemes
            .iter()
            .filter_map(|s| present(&s.infrastructure_status))
            .filter(|status| FUNCTIONAL_STATUSES.contains(status))
            .count() as u64;

        let mut registration_status =
            count_values(schemes.iter().map(|s| &s.registration_status));
        let registered: u64 = registration_status.values().sum();
        if total_schemes > registered {
            registration_status.insert(UNREGISTERED_LABEL.to_string(), total_schemes - registered);
        }

        let statistics = SchemeStatistics {
            total_schemes,
            functional_rate: percentage(functional_count, total_schemes),
            functional_count,
        };
        debug!(summary = %statistics.summary(), "analyzed schemes");

        SchemeAnalytics {
            water_availability: self.water_availability(schemes),
            infrastructure_status: count_values(schemes.iter().map(|s| &s.infrastructure_status)),
            application_methods: count_values(schemes.iter().map(|s| &s.application_type)),
            current_status: count_values(schemes.iter().map(|s| &s.current_status)),
            registration_status,
            statistics,
        }
    }

    fn water_availability(&self, schemes: &[SchemeRecord]) -> WaterAvailability {
        let mut categories: BTreeMap<String, BTreeMap<String, u64>> = BTreeMap::new();
        let mut subcounties = BTreeSet::new();

        for scheme in schemes {
            if let Some(availability) = present(&scheme.water_availability) {
                subcounties.insert(scheme.subcounty.clone());
                *categories
                    .entry(availability.to_string())
                    .or_default()
                    .entry(scheme.subcounty.clone())
                    .or_insert(0) += 1;
            }
        }

        for category in WATER_AVAILABILITY_CATEGORIES {
            categories.entry(category.to_string()).or_default();
        }
        for by_subcounty in categories.values_mut() {
            for subcounty in &subcounties {
                by_subcounty.entry(subcounty.clone()).or_insert(0);
            }
        }

        WaterAvailability {
            subcounties: subcounties.into_iter().collect(),
            categories,
        }
    }
}

impl Default for SchemeAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn count_values<'a>(values: impl Iterator<Item = &'a Option<String>>) -> BTreeMap<String, u64> {
    let mut counts = BTreeMap::new();
    for value in values.filter_map(present) {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Whole-number percentage, halves rounded to even.
fn percentage(part: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }
    let scaled = part * 100;
    let quotient = scaled / total;
    let doubled_remainder = (scaled % total) * 2;
    if doubled_remainder > total || (doubled_remainder == total && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scheme(id: u32, subcounty: &str) -> SchemeRecord {
        SchemeRecord::new(id, format!("Scheme {}", id), subcounty.to_string())
    }

    fn sample_schemes() -> Vec<SchemeRecord> {
        vec![
            scheme(1, "Mogotio")
                .with_water_availability("Adequate")
                .with_infrastructure_status("Fully functional")
                .with_application_type("Furrow")
                .with_registration_status("CBO"),
            scheme(2, "Baringo South")
                .with_water_availability("Seasonal")
                .with_infrastructure_status("Needs repair")
                .with_application_type("Furrow")
                .with_current_status("Active"),
            scheme(3, "Mogotio")
                .with_water_availability("Adequate")
                .with_infrastructure_status("Partially functional")
                .with_application_type("Drip")
                .with_current_status("Dormant"),
            scheme(4, "Marigat"),
        ]
    }

    #[test]
    fn test_water_availability_is_zero_filled() {
        let analytics = SchemeAnalyzer::new().analyze(&sample_schemes());
        let water = &analytics.water_availability;

        assert_eq!(water.subcounties, vec!["Baringo South", "Mogotio"]);
        assert_eq!(water.categories.len(), 4);
        assert_eq!(water.categories["Adequate"]["Mogotio"], 2);
        assert_eq!(water.categories["Adequate"]["Baringo South"], 0);
        assert_eq!(water.categories["Seasonal"]["Baringo South"], 1);
        assert_eq!(water.categories["No water"]["Mogotio"], 0);
        assert!(!water.categories["Inadequate"].contains_key("Marigat"));
    }

    #[test]
    fn test_unknown_water_category_is_kept() {
        let schemes = vec![scheme(1, "Koibatek").with_water_availability("Flooded")];
        let analytics = SchemeAnalyzer::new().analyze(&schemes);
        assert_eq!(analytics.water_availability.categories.len(), 5);
        assert_eq!(analytics.water_availability.categories["Flooded"]["Koibatek"], 1);
    }

    #[test]
    fn test_distributions() {
        let analytics = SchemeAnalyzer::new().analyze(&sample_schemes());

        assert_eq!(analytics.application_methods["Furrow"], 2);
        assert_eq!(analytics.application_methods["Drip"], 1);
        assert_eq!(analytics.current_status.len(), 2);
        assert_eq!(analytics.infrastructure_status["Needs repair"], 1);
        assert_eq!(analytics.registration_status["CBO"], 1);
        assert_eq!(analytics.registration_status["Unregistered"], 3);
    }

    #[test]
    fn test_statistics() {
        let analytics = SchemeAnalyzer::new().analyze(&sample_schemes());
        assert_eq!(
            analytics.statistics,
            SchemeStatistics {
                total_schemes: 4,
                functional_rate: 50,
                functional_count: 2,
            }
        );
    }

    #[test]
    fn test_empty_input() {
        let analytics = SchemeAnalyzer::new().analyze(&[]);
        assert_eq!(analytics.statistics.functional_rate, 0);
        assert!(analytics.registration_status.is_empty());
        assert!(analytics.water_availability.subcounties.is_empty());
        assert_eq!(analytics.water_availability.categories.len(), 4);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(5, 8), 62); // 62.5 rounds to even
        assert_eq!(percentage(7, 8), 88); // 87.5 rounds to even
        assert_eq!(percentage(0, 0), 0);
    }
}
