use super::*;

/// Tests moving a player into a new clan.
///
/// Verifies that the previous open membership is expired with an exit time and the
/// new membership is the only registered one.
///
/// Expected: Ok with one registered and one expired membership
#[tokio::test]
async fn expires_previous_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_clan = factory::create_clan(db).await?;
    let new_clan = factory::create_clan(db).await?;
    let player = factory::create_player(db).await?;
    let previous = factory::player_clan::PlayerClanFactory::new(db, player.id, old_clan.id)
        .joined_at(Utc::now() - Duration::days(10))
        .build()
        .await?;

    let repo = PlayerClanRepository::new(db);
    let membership = repo.switch_clan(player.id, new_clan.id).await?;

    assert_eq!(membership.clan_id, new_clan.id);
    assert_eq!(membership.status, EntityStatus::Registered);

    let history = repo.history(player.id).await?;
    assert_eq!(history.len(), 2);

    let (expired, _) = history.iter().find(|(m, _)| m.id == previous.id).unwrap();
    assert_eq!(expired.status, EntityStatus::Expired);
    assert!(expired.exited_at.is_some());

    let registered = history
        .iter()
        .filter(|(m, _)| m.status == EntityStatus::Registered)
        .count();
    assert_eq!(registered, 1);

    Ok(())
}

/// Tests assigning a first clan to a player.
///
/// Expected: Ok with a single registered membership
#[tokio::test]
async fn opens_first_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await?;
    let player = factory::create_player(db).await?;

    let repo = PlayerClanRepository::new(db);
    repo.switch_clan(player.id, clan.id).await?;

    let current = repo.current_for_players(&[player.id]).await?;
    assert_eq!(current.get(&player.id).map(|(m, _)| m.clan_id), Some(clan.id));

    Ok(())
}
