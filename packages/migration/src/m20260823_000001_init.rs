use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Games {
    Table,
    Id,
    OwnerId,
    CzarId,
    WinnerId,
    Started,
    TextChannelId,
    VoiceChannelId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    GameId,
    DiscordId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Expansions {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum QuestionCards {
    Table,
    Id,
    ExpansionId,
    Text,
    CreatedAt,
}

#[derive(Iden)]
enum AnswerCards {
    Table,
    Id,
    ExpansionId,
    Text,
    CreatedAt,
}

#[derive(Iden)]
enum ExpansionPools {
    Table,
    Id,
    GameId,
    ExpansionId,
    CreatedAt,
}

#[derive(Iden)]
enum Rounds {
    Table,
    Id,
    GameId,
    RoundNo,
    CreatedAt,
}

#[derive(Iden)]
enum PlayerCards {
    Table,
    Id,
    PlayerId,
    AnswerCardId,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        //
        // owner_id/czar_id/winner_id reference players but carry no DB-level
        // foreign key: the owner row is inserted in the same transaction as
        // the game, which would otherwise be a circular constraint.
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::OwnerId).big_integer().null())
                    .col(ColumnDef::new(Games::CzarId).big_integer().null())
                    .col(ColumnDef::new(Games::WinnerId).big_integer().null())
                    .col(
                        ColumnDef::new(Games::Started)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Games::TextChannelId).big_integer().null())
                    .col(ColumnDef::new(Games::VoiceChannelId).big_integer().null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::GameId).big_integer().not_null())
                    .col(ColumnDef::new(Players::DiscordId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Players::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_game")
                            .from(Players::Table, Players::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_players_game_discord")
                    .table(Players::Table)
                    .col(Players::GameId)
                    .col(Players::DiscordId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // expansions
        manager
            .create_table(
                Table::create()
                    .table(Expansions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expansions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Expansions::Name).string().not_null())
                    .col(
                        ColumnDef::new(Expansions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // question_cards
        manager
            .create_table(
                Table::create()
                    .table(QuestionCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(QuestionCards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(QuestionCards::ExpansionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(QuestionCards::Text).string().not_null())
                    .col(
                        ColumnDef::new(QuestionCards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_question_cards_expansion")
                            .from(QuestionCards::Table, QuestionCards::ExpansionId)
                            .to(Expansions::Table, Expansions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // answer_cards
        manager
            .create_table(
                Table::create()
                    .table(AnswerCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AnswerCards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(AnswerCards::ExpansionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AnswerCards::Text).string().not_null())
                    .col(
                        ColumnDef::new(AnswerCards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_answer_cards_expansion")
                            .from(AnswerCards::Table, AnswerCards::ExpansionId)
                            .to(Expansions::Table, Expansions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // expansion_pools
        manager
            .create_table(
                Table::create()
                    .table(ExpansionPools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ExpansionPools::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(ExpansionPools::GameId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExpansionPools::ExpansionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ExpansionPools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expansion_pools_game")
                            .from(ExpansionPools::Table, ExpansionPools::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_expansion_pools_expansion")
                            .from(ExpansionPools::Table, ExpansionPools::ExpansionId)
                            .to(Expansions::Table, Expansions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_expansion_pools_game_expansion")
                    .table(ExpansionPools::Table)
                    .col(ExpansionPools::GameId)
                    .col(ExpansionPools::ExpansionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // rounds
        manager
            .create_table(
                Table::create()
                    .table(Rounds::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rounds::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Rounds::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Rounds::RoundNo)
                            .small_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rounds::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rounds_game")
                            .from(Rounds::Table, Rounds::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // player_cards
        manager
            .create_table(
                Table::create()
                    .table(PlayerCards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlayerCards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(PlayerCards::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerCards::AnswerCardId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlayerCards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_cards_player")
                            .from(PlayerCards::Table, PlayerCards::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_cards_answer_card")
                            .from(PlayerCards::Table, PlayerCards::AnswerCardId)
                            .to(AnswerCards::Table, AnswerCards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rounds::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ExpansionPools::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AnswerCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(QuestionCards::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expansions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        Ok(())
    }
}
