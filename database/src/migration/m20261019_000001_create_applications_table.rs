use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Applications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Applications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Applications::Email).text().not_null())
                    .col(ColumnDef::new(Applications::Phone).text().not_null())
                    .col(ColumnDef::new(Applications::Website).text())
                    .col(ColumnDef::new(Applications::StartupName).text().not_null())
                    // "1".."6" or ">6"
                    .col(ColumnDef::new(Applications::TeamSize).text().not_null())
                    .col(ColumnDef::new(Applications::Sector).text().not_null())
                    .col(ColumnDef::new(Applications::Description).text().not_null())
                    .col(ColumnDef::new(Applications::Problem).text().not_null())
                    .col(ColumnDef::new(Applications::Differentiation).text().not_null())
                    .col(ColumnDef::new(Applications::Milestones).text().not_null())
                    .col(
                        ColumnDef::new(Applications::HasCustomerValidation)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Applications::FundingSecured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Applications::ActiveCustomers)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Applications::ProgressPercent)
                            .integer()
                            .not_null()
                            .default(0)
                            .check(
                                Expr::col(Applications::ProgressPercent)
                                    .gte(0)
                                    .and(Expr::col(Applications::ProgressPercent).lte(100)),
                            ),
                    )
                    .col(ColumnDef::new(Applications::InvestmentAmount).text())
                    .col(ColumnDef::new(Applications::InvestmentType).text())
                    .col(ColumnDef::new(Applications::Valuation).text())
                    .col(
                        ColumnDef::new(Applications::SupportRequested)
                            .json_binary()
                            .not_null()
                            .default("[]"),
                    )
                    .col(ColumnDef::new(Applications::PitchDeck).binary())
                    .col(ColumnDef::new(Applications::PitchDeckMimeType).text())
                    .col(ColumnDef::new(Applications::PitchDeckFilename).text())
                    .col(ColumnDef::new(Applications::PitchDeckSize).integer())
                    .col(
                        ColumnDef::new(Applications::Status)
                            .string_len(16)
                            .not_null()
                            .default("pending")
                            .check(Expr::col(Applications::Status).is_in([
                                "pending", "approved", "rejected",
                            ])),
                    )
                    .col(ColumnDef::new(Applications::Notes).text())
                    .col(
                        ColumnDef::new(Applications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard filters and analytics read these columns
        for (name, column) in [
            ("idx_applications_status", Applications::Status),
            ("idx_applications_created_at", Applications::CreatedAt),
            ("idx_applications_sector", Applications::Sector),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Applications::Table)
                        .col(column)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Applications::Table).to_owned())
            .await
    }
}

/// Applications table definition
#[derive(Iden)]
enum Applications {
    Table,
    Id,
    Email,
    Phone,
    Website,
    StartupName,
    TeamSize,
    Sector,
    Description,
    Problem,
    Differentiation,
    Milestones,
    HasCustomerValidation,
    FundingSecured,
    ActiveCustomers,
    ProgressPercent,
    InvestmentAmount,
    InvestmentType,
    Valuation,
    SupportRequested,
    PitchDeck,
    PitchDeckMimeType,
    PitchDeckFilename,
    PitchDeckSize,
    Status,
    Notes,
    CreatedAt,
}
