use super::*;

/// Tests resolving the current clan of players.
///
/// Verifies that the latest registered membership wins over an older one and that
/// players without a registered membership are absent.
///
/// Expected: Ok with the newer clan for the first player only
#[tokio::test]
async fn picks_latest_registered_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_clan = factory::create_clan(db).await?;
    let new_clan = factory::create_clan(db).await?;
    let player = factory::create_player(db).await?;
    let clanless = factory::create_player(db).await?;

    factory::player_clan::PlayerClanFactory::new(db, player.id, old_clan.id)
        .joined_at(Utc::now() - Duration::days(30))
        .build()
        .await?;
    factory::player_clan::PlayerClanFactory::new(db, player.id, new_clan.id)
        .joined_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    factory::player_clan::PlayerClanFactory::new(db, clanless.id, old_clan.id)
        .status(EntityStatus::Expired)
        .exited_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = PlayerClanRepository::new(db);
    let current = repo.current_for_players(&[player.id, clanless.id]).await?;

    let (membership, clan) = current.get(&player.id).unwrap();
    assert_eq!(membership.clan_id, new_clan.id);
    assert_eq!(clan.id, new_clan.id);
    assert!(!current.contains_key(&clanless.id));

    Ok(())
}
