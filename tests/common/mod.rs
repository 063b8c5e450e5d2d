#![allow(dead_code)]

use std::path::PathBuf;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use memstore::db::{DbPool, establish_connection_pool};
use memstore::domain::product::{FormFactor, MemoryType, NewProduct, ProductStatus, TempGrade};
use memstore::domain::types::{
    CapacityGb, Manufacturer, OrderQuantity, ProductName, ProductSlug, SpeedMt,
};
use memstore::repository::DieselRepository;
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let url = path.to_str().expect("utf-8 temp path").to_string();

        let pool = establish_connection_pool(&url).expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

/// A plain in-stock DDR5 RDIMM; tests override the fields they care about.
pub fn new_product(slug: &str) -> NewProduct {
    NewProduct {
        slug: ProductSlug::new(slug).unwrap(),
        name: ProductName::new(format!("Module {slug}")).unwrap(),
        manufacturer: Manufacturer::new("Micron").unwrap(),
        category: "memory-module".to_string(),
        status: ProductStatus::Active,
        memory_type: MemoryType::Ddr5,
        form_factor: FormFactor::Rdimm,
        capacity_gb: CapacityGb::new(32).unwrap(),
        ecc: true,
        speed_mt: SpeedMt::new(4800).unwrap(),
        voltage_v: Some(1.1),
        temp_grade: TempGrade::Consumer,
        lead_time_days: Some(14),
        stock_qty: 100,
        moq: OrderQuantity::new(1).unwrap(),
        datasheet_url: None,
        image_url: None,
        short_desc: String::new(),
        specs: Vec::new(),
        reference_price_jpy: None,
    }
}
