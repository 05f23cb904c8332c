use proptest::prelude::*;

use kicks::catalog::{Catalog, NewSneaker, SearchFilters};
use kicks::storage::MemoryStore;

fn new_sneaker(brand: String, article: Option<String>) -> NewSneaker {
    NewSneaker {
        brand,
        model: "Model".into(),
        main_color: "White".into(),
        article,
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn ids_strictly_increase_and_stay_unique(
        adds in prop::collection::vec(("[A-Z][a-z]{0,6}", prop::option::of("[a-z0-9]{0,5}")), 1..30)
    ) {
        let mut catalog = Catalog::with_seed(MemoryStore::new());
        let mut last = catalog.list().iter().map(|r| r.id).max().unwrap_or(0);

        for (brand, article) in adds {
            let added = catalog.add(new_sneaker(brand, article)).unwrap();
            prop_assert!(added.id > last);
            last = added.id;
        }

        let mut ids: Vec<u64> = catalog.list().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn generated_articles_count_up_from_one(count in 1usize..20) {
        let mut catalog = Catalog::with_seed(MemoryStore::new());

        for n in 1..=count {
            let added = catalog.add(new_sneaker("Puma".into(), None)).unwrap();
            prop_assert_eq!(added.article, format!("unknown{n}"));
        }
    }

    #[test]
    fn search_never_reorders_or_mutates(query in "[a-zA-Z ]{0,8}") {
        let catalog = Catalog::with_seed(MemoryStore::new());
        let before = catalog.list().to_vec();

        let hits = catalog.search(&query, &SearchFilters::none());

        let positions: Vec<usize> = hits
            .iter()
            .map(|hit| before.iter().position(|r| r == hit).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(catalog.list(), before.as_slice());
    }

    #[test]
    fn search_is_case_insensitive(query in "[a-zA-Z]{1,6}") {
        let catalog = Catalog::with_seed(MemoryStore::new());
        let lower = catalog.search(&query.to_lowercase(), &SearchFilters::none());
        let upper = catalog.search(&query.to_uppercase(), &SearchFilters::none());
        prop_assert_eq!(lower, upper);
    }
}
