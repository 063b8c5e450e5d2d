use chrono::{Duration, Utc};
use memstore::catalog::{CatalogParams, Constraint, ProductPredicate, SortKey, search_products};
use memstore::domain::lead::{LeadType, NewLead};
use memstore::domain::product::{MemoryType, ProductStatus};
use memstore::domain::types::{
    CapacityGb, CompanyName, ContactName, LeadEmail, LeadMessage, OrderQuantity, ProductId,
    ProductSlug,
};
use memstore::repository::errors::RepositoryError;
use memstore::repository::{
    LeadReader, LeadWriter, ProductListQuery, ProductReader, ProductWriter,
};

mod common;

fn params(query: &str) -> CatalogParams {
    CatalogParams::from_query_str(query).unwrap()
}

fn slugs(products: &[memstore::domain::product::Product]) -> Vec<&str> {
    products.iter().map(|p| p.slug.as_str()).collect()
}

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = test_db.repo();

    let created = repo.create_product(&common::new_product("ddr5-32")).unwrap();
    assert_eq!(created.slug.as_str(), "ddr5-32");
    assert_eq!(created.created_at, created.updated_at);

    let by_slug = repo
        .get_product_by_slug(&ProductSlug::new("ddr5-32").unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(by_slug.id, created.id);

    let mut changes = common::new_product("ddr5-32-ecc");
    changes.stock_qty = 3;
    changes.status = ProductStatus::LastBuyAvailable;
    let updated = repo.update_product(created.id, &changes).unwrap();
    assert_eq!(updated.slug.as_str(), "ddr5-32-ecc");
    assert_eq!(updated.stock_qty, 3);
    assert_eq!(updated.status, ProductStatus::LastBuyAvailable);
    assert_eq!(updated.created_at, created.created_at);

    repo.delete_product(created.id).unwrap();
    assert!(repo.get_product_by_id(created.id).unwrap().is_none());
    assert!(matches!(
        repo.delete_product(created.id),
        Err(RepositoryError::NotFound)
    ));
}

#[test]
fn test_missing_product_update_is_not_found() {
    let test_db = common::TestDb::new("test_missing_product_update_is_not_found.db");
    let repo = test_db.repo();

    let result = repo.update_product(ProductId::new(404).unwrap(), &common::new_product("x"));

    assert!(matches!(result, Err(RepositoryError::NotFound)));
}

#[test]
fn test_duplicate_slug_is_a_unique_violation() {
    let test_db = common::TestDb::new("test_duplicate_slug_is_a_unique_violation.db");
    let repo = test_db.repo();

    repo.create_product(&common::new_product("taken")).unwrap();
    let err = repo
        .create_product(&common::new_product("taken"))
        .unwrap_err();

    assert!(err.is_unique_violation());
}

#[test]
fn test_specs_are_stored_as_json() {
    let test_db = common::TestDb::new("test_specs_are_stored_as_json.db");
    let repo = test_db.repo();
    let mut product = common::new_product("with-specs");
    product.specs = vec![memstore::domain::product::ProductSpec {
        key: "CAS latency".to_string(),
        value: "CL40".to_string(),
    }];

    let created = repo.create_product(&product).unwrap();

    assert_eq!(created.specs, product.specs);
}

#[test]
fn test_in_stock_memory_type_and_capacity_filters_with_stock_sort() {
    let test_db = common::TestDb::new("test_scenario_a.db");
    let repo = test_db.repo();

    for i in 1..=25 {
        let mut product = common::new_product(&format!("match-{i}"));
        product.memory_type = if i % 2 == 0 {
            MemoryType::Ddr4
        } else {
            MemoryType::Ddr5
        };
        product.capacity_gb = CapacityGb::new(16).unwrap();
        product.stock_qty = i;
        repo.create_product(&product).unwrap();
    }
    let mut out_of_stock = common::new_product("no-stock");
    out_of_stock.stock_qty = 0;
    repo.create_product(&out_of_stock).unwrap();
    let mut too_small = common::new_product("too-small");
    too_small.capacity_gb = CapacityGb::new(8).unwrap();
    repo.create_product(&too_small).unwrap();
    let mut lpddr = common::new_product("lpddr5");
    lpddr.memory_type = MemoryType::Lpddr5;
    repo.create_product(&lpddr).unwrap();

    let page = search_products(
        &repo,
        &params("type=DDR5,DDR4&capMin=16&inStock=true&sort=stock-desc&page=2&limit=10"),
    )
    .unwrap();

    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 2);
    let stock: Vec<i32> = page.items.iter().map(|p| p.stock_qty).collect();
    assert_eq!(stock, (6..=15).rev().collect::<Vec<_>>());
}

#[test]
fn test_capacity_list_takes_precedence_over_range() {
    let test_db = common::TestDb::new("test_scenario_b.db");
    let repo = test_db.repo();
    for cap in [8, 16, 32, 64] {
        let mut product = common::new_product(&format!("cap-{cap}"));
        product.capacity_gb = CapacityGb::new(cap).unwrap();
        repo.create_product(&product).unwrap();
    }

    let page = search_products(&repo, &params("cap=8,16&capMin=32&sort=cap-desc")).unwrap();

    assert_eq!(page.total, 2);
    assert_eq!(slugs(&page.items), vec!["cap-16", "cap-8"]);
}

#[test]
fn test_unrecognised_ecc_value_is_ignored() {
    let test_db = common::TestDb::new("test_scenario_c.db");
    let repo = test_db.repo();
    let mut non_ecc = common::new_product("non-ecc");
    non_ecc.ecc = false;
    repo.create_product(&non_ecc).unwrap();
    repo.create_product(&common::new_product("ecc")).unwrap();

    let all = search_products(&repo, &params("ecc=maybe")).unwrap();
    let only_non_ecc = search_products(&repo, &params("ecc=false")).unwrap();

    assert_eq!(all.total, 2);
    assert_eq!(slugs(&only_non_ecc.items), vec!["non-ecc"]);
}

#[test]
fn test_page_past_the_end_is_empty_but_counted() {
    let test_db = common::TestDb::new("test_page_past_the_end.db");
    let repo = test_db.repo();
    for i in 0..5 {
        repo.create_product(&common::new_product(&format!("p-{i}")))
            .unwrap();
    }

    let page = search_products(&repo, &params("page=4&limit=2")).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn test_lead_time_sort_puts_unknown_lead_times_first() {
    let test_db = common::TestDb::new("test_lead_time_sort.db");
    let repo = test_db.repo();
    for (slug, days) in [("slow", Some(30)), ("unknown", None), ("fast", Some(2))] {
        let mut product = common::new_product(slug);
        product.lead_time_days = days;
        repo.create_product(&product).unwrap();
    }

    let query = ProductListQuery::new(ProductPredicate::all(), SortKey::LeadAsc.ordering());
    let products = repo.list_products(&query).unwrap();

    assert_eq!(slugs(&products), vec!["unknown", "fast", "slow"]);
}

#[test]
fn test_count_matches_list_for_status_and_low_stock() {
    let test_db = common::TestDb::new("test_count_matches_list.db");
    let repo = test_db.repo();
    for (slug, stock, status) in [
        ("a", 5, ProductStatus::Active),
        ("b", 10, ProductStatus::Discontinued),
        ("c", 11, ProductStatus::Active),
        ("d", 0, ProductStatus::Active),
    ] {
        let mut product = common::new_product(slug);
        product.stock_qty = stock;
        product.status = status;
        repo.create_product(&product).unwrap();
    }

    let low_stock = ProductPredicate::all()
        .and(Constraint::InStock)
        .and(Constraint::StockAtMost(10));
    let active = ProductPredicate::all().and(Constraint::StatusIn(vec![ProductStatus::Active]));

    assert_eq!(repo.count_products(&low_stock).unwrap(), 2);
    assert_eq!(repo.count_products(&active).unwrap(), 3);
    let listed = repo
        .list_products(&ProductListQuery::new(active, SortKey::StockDesc.ordering()))
        .unwrap();
    assert_eq!(slugs(&listed), vec!["c", "a", "d"]);
}

#[test]
fn test_lead_repository_create_list_and_count() {
    let test_db = common::TestDb::new("test_lead_repository.db");
    let repo = test_db.repo();
    let lead = |company: &str| {
        NewLead::new(
            LeadType::Quote,
            CompanyName::new(company).unwrap(),
            ContactName::new("Hanako").unwrap(),
            LeadEmail::new("hanako@example.com").unwrap(),
            Some("  ".to_string()),
            LeadMessage::new("Need a quote").unwrap(),
            Some(ProductSlug::new("ddr5-32").unwrap()),
            Some(OrderQuantity::new(50).unwrap()),
        )
    };

    let first = repo.create_lead(&lead("First KK")).unwrap();
    let second = repo.create_lead(&lead("Second KK")).unwrap();
    assert_eq!(first.phone, None);
    assert_eq!(first.qty.map(OrderQuantity::get), Some(50));

    let leads = repo.list_leads().unwrap();
    assert_eq!(
        leads.iter().map(|l| l.id).collect::<Vec<_>>(),
        vec![second.id, first.id]
    );

    let now = Utc::now().naive_utc();
    assert_eq!(repo.count_leads(None).unwrap(), 2);
    assert_eq!(repo.count_leads(Some(now - Duration::days(7))).unwrap(), 2);
    assert_eq!(repo.count_leads(Some(now + Duration::days(1))).unwrap(), 0);
}
