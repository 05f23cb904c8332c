use kicks::catalog::{
    Catalog, NewSneaker, RestoreOutcome, SearchFilters, Year, DEFAULT_PLACEHOLDER_IMAGE, UNKNOWN,
};
use kicks::storage::SqliteStore;

fn puma_suede() -> NewSneaker {
    NewSneaker {
        brand: "Puma".into(),
        model: "Suede".into(),
        main_color: "Blue".into(),
        ..Default::default()
    }
}

#[test]
fn add_to_seed_end_to_end() {
    let mut catalog = Catalog::with_seed(SqliteStore::open_in_memory().unwrap());

    let added = catalog.add(puma_suede()).unwrap();

    assert_eq!(added.id, 3);
    assert_eq!(added.article, "unknown1");
    assert_eq!(added.year, Year::unknown());
    assert_eq!(added.country, UNKNOWN);
    assert!(added.details.is_empty());
    assert_eq!(added.image, DEFAULT_PLACEHOLDER_IMAGE);
    assert_eq!(catalog.list().len(), 3);
    assert_eq!(catalog.list()[2], added);
}

#[test]
fn snapshot_round_trips_through_a_fresh_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kicks.db");

    let before = {
        let mut catalog = Catalog::with_seed(SqliteStore::open(&path).unwrap());
        catalog.add(puma_suede()).unwrap();
        catalog
            .add(NewSneaker {
                article: Some("DD1391-100".into()),
                year: Some(Year::Text("2021".into())),
                details: Some(vec!["Leather".into(), "Perforated toe".into()]),
                collaboration: "Travis Scott".into(),
                ..puma_suede()
            })
            .unwrap();
        catalog.persist().unwrap();
        catalog.list().to_vec()
    };

    let mut fresh = Catalog::new(SqliteStore::open(&path).unwrap());
    assert_eq!(fresh.restore(), RestoreOutcome::Restored(4));
    assert_eq!(fresh.list(), before.as_slice());

    // year keeps its original json type
    assert_eq!(fresh.list()[0].year, Year::Number(1985));
    assert_eq!(fresh.list()[3].year, Year::Text("2021".into()));
}

#[test]
fn restored_catalog_keeps_numbering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kicks.db");

    {
        let mut catalog = Catalog::with_seed(SqliteStore::open(&path).unwrap());
        catalog.add(puma_suede()).unwrap();
    }

    let mut catalog = Catalog::with_seed(SqliteStore::open(&path).unwrap());
    catalog.restore();
    let added = catalog.add(puma_suede()).unwrap();

    assert_eq!(added.id, 4);
    assert_eq!(added.article, "unknown2");
}

#[test]
fn seed_queries() {
    let catalog = Catalog::with_seed(SqliteStore::open_in_memory().unwrap());

    assert_eq!(catalog.list_brands(), vec!["Adidas", "Nike"]);

    let jordan = catalog.search("jordan", &SearchFilters::none());
    assert_eq!(jordan.len(), 1);
    assert_eq!(jordan[0].model, "Air Jordan 1");

    let adidas = catalog.search("", &SearchFilters::none().with_brand("Adidas"));
    assert_eq!(adidas.len(), 1);
    assert_eq!(adidas[0].model, "Superstar");

    let by_year = catalog.search("", &SearchFilters::none().with_year(Year::parse("1985")));
    assert_eq!(by_year.len(), 1);
    assert_eq!(by_year[0].brand, "Nike");
}

#[test]
fn quota_failure_is_not_fatal() {
    let store = SqliteStore::open_in_memory().unwrap().with_quota(Some(64));
    let mut catalog = Catalog::with_seed(store);

    let added = catalog.add(puma_suede()).unwrap();

    assert_eq!(added.id, 3);
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.take_diagnostics().len(), 1);
    assert_eq!(catalog.last_saved().unwrap(), None);
}
