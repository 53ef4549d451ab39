use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m20260301_000001_create_agents::Migration),
            Box::new(migrations::m20260301_000002_create_clients::Migration),
            Box::new(migrations::m20260301_000003_create_sites::Migration),
            Box::new(migrations::m20260301_000004_create_attendances::Migration),
            Box::new(migrations::m20260301_000005_create_corrections::Migration),
            Box::new(migrations::m20260301_000006_create_payrolls::Migration),
        ]
    }
}
