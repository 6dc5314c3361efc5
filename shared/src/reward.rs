use std::sync::Arc;

use rand::Rng;

use crate::catalog::{Case, Item};
use crate::error::OpeningError;

/// Draws one item from the case pool with every index equally likely.
///
/// Rarity plays no part in the draw. Each call is independent, so the same item can come
/// up any number of times in a row.
pub fn draw<R: Rng + ?Sized>(case: &Case, rng: &mut R) -> Result<Arc<Item>, OpeningError> {
    let pool = case.items();
    debug_assert!(!pool.is_empty(), "case {} reached the selector with no items", case.id());
    if pool.is_empty() {
        return Err(OpeningError::EmptyPool(case.id()));
    }

    let index = rng.gen_range(0..pool.len());
    Ok(pool[index].clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_draw_stays_in_pool() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for case in catalog.list_cases() {
            for _ in 0..500 {
                let item = draw(case, &mut rng).unwrap();
                assert!(case.contains(&item));
            }
        }
    }

    #[test]
    fn test_draw_is_uniform_not_rarity_weighted() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let draws = 10_000;

        for case in catalog.list_cases() {
            let mut counts: HashMap<u32, usize> = HashMap::new();
            for _ in 0..draws {
                let item = draw(case, &mut rng).unwrap();
                *counts.entry(item.id.0).or_default() += 1;
            }

            let expected = draws as f64 / case.items().len() as f64;
            for item in case.items() {
                let seen = counts.get(&item.id.0).copied().unwrap_or(0) as f64;
                // A legendary item would sit near 10% if rarity were used as a weight.
                assert!(
                    (seen - expected).abs() < expected * 0.1,
                    "{} drawn {} times from {}, expected about {}",
                    item.name,
                    seen,
                    case.name(),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_duplicates_in_pool_double_the_odds() {
        let catalog = Catalog::builtin().unwrap();
        let knife = catalog.items()[0].clone();
        let steel = catalog.items()[1].clone();
        let case = Case::unchecked(9, vec![knife.clone(), knife.clone(), steel]);
        let mut rng = StdRng::seed_from_u64(99);

        let knives = (0..9_000)
            .filter(|_| draw(&case, &mut rng).unwrap().id == knife.id)
            .count();
        assert!((5_400..6_600).contains(&knives), "knife drawn {} times", knives);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_empty_pool_is_an_error() {
        let case = Case::unchecked(4, Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(draw(&case, &mut rng), Err(OpeningError::EmptyPool(case.id())));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "no items")]
    fn test_empty_pool_asserts_in_debug() {
        let case = Case::unchecked(4, Vec::new());
        let mut rng = StdRng::seed_from_u64(1);
        let _ = draw(&case, &mut rng);
    }
}
