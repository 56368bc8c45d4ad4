//! Worker directory queries - lookups and price comparisons over the static
//! roster loaded from configuration.

use crate::entities::Worker;

/// Best (lowest) price per material across the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestPrices {
    /// Lowest steel price.
    pub steel: u32,
    /// Lowest plastic price.
    pub plastic: u32,
    /// Lowest paper price.
    pub paper: u32,
}

/// Finds a roster entry by id.
#[must_use]
pub fn find_worker<'a>(roster: &'a [Worker], id: &str) -> Option<&'a Worker> {
    roster.iter().find(|w| w.id == id)
}

/// Filters the roster by case-insensitive name match or phone substring.
#[must_use]
pub fn search_workers<'a>(roster: &'a [Worker], term: &str) -> Vec<&'a Worker> {
    let needle = term.to_lowercase();
    roster
        .iter()
        .filter(|w| w.name.to_lowercase().contains(&needle) || w.phone.contains(term))
        .collect()
}

/// Computes the per-material minimum across the roster, or `None` for an
/// empty roster.
#[must_use]
pub fn best_prices(roster: &[Worker]) -> Option<BestPrices> {
    if roster.is_empty() {
        return None;
    }
    Some(BestPrices {
        steel: roster.iter().map(|w| w.price_steel).min()?,
        plastic: roster.iter().map(|w| w.price_plastic).min()?,
        paper: roster.iter().map(|w| w.price_paper).min()?,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn roster() -> Vec<Worker> {
        let toml_str = r#"
            [[workers]]
            id = "1"
            name = "Raj Kumar"
            phone = "+91-9876543210"
            price_steel = 45
            price_plastic = 20
            price_paper = 15

            [[workers]]
            id = "3"
            name = "Amit Singh"
            phone = "+91-9876543212"
            price_steel = 42
            price_plastic = 18
            price_paper = 14

            [[workers]]
            id = "4"
            name = "Sunita Devi"
            phone = "+91-9876543213"
            price_steel = 50
            price_plastic = 25
            price_paper = 18
        "#;
        let config: crate::config::workers::Config = toml::from_str(toml_str).unwrap();
        config.workers
    }

    #[test]
    fn find_worker_by_id() {
        let roster = roster();
        assert_eq!(find_worker(&roster, "3").unwrap().name, "Amit Singh");
        assert!(find_worker(&roster, "9").is_none());
    }

    #[test]
    fn search_matches_name_case_insensitively_and_phone() {
        let roster = roster();
        let by_name = search_workers(&roster, "amit");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "3");

        let by_phone = search_workers(&roster, "43213");
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "Sunita Devi");

        assert!(search_workers(&roster, "zzz").is_empty());
    }

    #[test]
    fn best_prices_take_the_per_material_minimum() {
        let roster = roster();
        assert_eq!(
            best_prices(&roster).unwrap(),
            BestPrices {
                steel: 42,
                plastic: 18,
                paper: 14,
            }
        );
    }

    #[test]
    fn best_prices_on_an_empty_roster() {
        assert!(best_prices(&[]).is_none());
    }
}
