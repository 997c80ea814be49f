use super::*;

/// Tests listing current clan members.
///
/// Verifies that former members and deleted players are left out and members are
/// ordered by nickname.
///
/// Expected: Ok with the two active members in nickname order
#[tokio::test]
async fn lists_current_members_by_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await?;

    let zed = factory::player::PlayerFactory::new(db)
        .nickname("Zed")
        .build()
        .await?;
    let bisu = factory::player::PlayerFactory::new(db)
        .nickname("Bisu")
        .build()
        .await?;
    let former = factory::create_player(db).await?;
    let deleted = factory::player::PlayerFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    factory::create_player_clan(db, zed.id, clan.id).await?;
    factory::create_player_clan(db, bisu.id, clan.id).await?;
    factory::create_player_clan(db, deleted.id, clan.id).await?;
    factory::player_clan::PlayerClanFactory::new(db, former.id, clan.id)
        .status(EntityStatus::Expired)
        .build()
        .await?;

    let repo = ClanRepository::new(db);
    let members = repo.members(clan.id).await?;

    let nicknames: Vec<&str> = members.iter().map(|p| p.nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["Bisu", "Zed"]);

    Ok(())
}
