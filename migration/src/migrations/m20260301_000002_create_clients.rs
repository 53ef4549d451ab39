use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m20260301_000002_create_clients"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("clients"))
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Alias::new("id"))
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Alias::new("company_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("contact_name")).string().not_null())
                    .col(ColumnDef::new(Alias::new("contact_email")).string().not_null())
                    .col(
                        ColumnDef::new(Alias::new("contact_phone"))
                            .string_len(20)
                            .null(),
                    )
                    .col(ColumnDef::new(Alias::new("address")).text().null())
                    .col(ColumnDef::new(Alias::new("city")).string().null())
                    .col(
                        ColumnDef::new(Alias::new("contract_status"))
                            .string_len(20)
                            .not_null()
                            .default("active"),
                    )
                    .col(
                        ColumnDef::new(Alias::new("created_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .col(
                        ColumnDef::new(Alias::new("updated_at"))
                            .timestamp()
                            .not_null()
                            .default(Expr::cust("CURRENT_TIMESTAMP")),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("clients")).to_owned())
            .await
    }
}
