use crate::finder::highest_ranked;
use crate::player::TechHolder;
use starsdata::{TechStore, TechTerraform, TerraformHabType};

/// Highest-ranked terraform of `hab_type` that `player` holds.
///
/// Missing rankings count as 0. On equal rankings the one declared first in
/// the catalog wins. `None` if the player holds none of that type.
pub fn best_terraform<'a>(
    store: &'a TechStore,
    player: &impl TechHolder,
    hab_type: TerraformHabType,
) -> Option<&'a TechTerraform> {
    highest_ranked(
        store
            .terraforms()
            .iter()
            .filter(|t| t.hab_type == hab_type && player.has_tech(&t.tech)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{terraform, PlayerBuilder};
    use starsdata::{Tech, TechStoreData};

    fn store(terraforms: Vec<TechTerraform>) -> TechStore {
        TechStore::new(TechStoreData {
            terraforms,
            ..TechStoreData::default()
        })
    }

    #[test]
    fn test_highest_ranking_wins() {
        let store = store(vec![
            terraform("Gravity Terraform ±3", 5, 3, TerraformHabType::Gravity),
            terraform("Gravity Terraform ±7", 10, 7, TerraformHabType::Gravity),
        ]);
        let player = PlayerBuilder::new().build();
        let best = best_terraform(&store, &player, TerraformHabType::Gravity).unwrap();
        assert_eq!(best.tech.ranking, Some(10));
    }

    #[test]
    fn test_no_match_is_none() {
        let store = store(vec![terraform(
            "Gravity Terraform ±3",
            5,
            3,
            TerraformHabType::Gravity,
        )]);
        let player = PlayerBuilder::new().build();
        assert!(best_terraform(&store, &player, TerraformHabType::Radiation).is_none());
        assert!(best_terraform(&TechStore::default(), &player, TerraformHabType::All).is_none());
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let store = store(vec![
            terraform("First", 10, 3, TerraformHabType::Temperature),
            terraform("Second", 10, 7, TerraformHabType::Temperature),
        ]);
        let player = PlayerBuilder::new().build();
        let best = best_terraform(&store, &player, TerraformHabType::Temperature).unwrap();
        assert_eq!(best.tech.name, "First");
    }

    #[test]
    fn test_missing_ranking_counts_as_zero() {
        let mut unranked = terraform("Unranked", 0, 3, TerraformHabType::All);
        unranked.tech.ranking = None;
        let store = store(vec![
            unranked,
            terraform("Negative", -1, 3, TerraformHabType::All),
        ]);
        let player = PlayerBuilder::new().build();
        let best = best_terraform(&store, &player, TerraformHabType::All).unwrap();
        assert_eq!(best.tech.name, "Unranked");
    }

    #[test]
    fn test_only_held_terraforms_count() {
        struct Holds(&'static str);
        impl TechHolder for Holds {
            fn has_tech(&self, tech: &Tech) -> bool {
                tech.name == self.0
            }
        }

        let store = store(vec![
            terraform("Low", 5, 3, TerraformHabType::Gravity),
            terraform("High", 10, 7, TerraformHabType::Gravity),
        ]);
        let best = best_terraform(&store, &Holds("Low"), TerraformHabType::Gravity).unwrap();
        assert_eq!(best.tech.name, "Low");
    }
}
