use super::*;

/// Tests renaming a player and changing their race.
///
/// Expected: Ok(Some) with the new nickname and race
#[tokio::test]
async fn updates_nickname_and_race() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let updated = repo
        .update(&UpdatePlayerParams {
            id: player.id,
            nickname: Some("Stork".to_string()),
            race: Some(Race::Zerg),
            grade_id: None,
            status: None,
            clan_name: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.nickname, "Stork");
    assert_eq!(updated.race, Some(Race::Zerg));
    assert_eq!(updated.grade_id, player.grade_id);

    Ok(())
}

/// Tests soft deleting a player.
///
/// Expected: Ok(Some) with status deleted, and the player no longer counted
#[tokio::test]
async fn soft_deletes_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;

    let repo = PlayerRepository::new(db);
    let deleted = repo.soft_delete(player.id).await?.unwrap();

    assert_eq!(deleted.status, EntityStatus::Deleted);
    assert!(deleted.deleted_at.is_some());
    assert_eq!(repo.count_registered().await?, 0);

    Ok(())
}
