use super::*;

/// Tests creating a new player with a grade.
///
/// Expected: Ok with a registered player holding the grade
#[tokio::test]
async fn creates_player_with_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grade = factory::create_grade(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo
        .create(
            &CreatePlayerParams {
                nickname: "Flash".to_string(),
                race: Some(Race::Terran),
                grade_id: Some(grade.id),
                clan_name: None,
            },
            None,
        )
        .await?;

    assert_eq!(player.nickname, "Flash");
    assert_eq!(player.race, Some(Race::Terran));
    assert_eq!(player.grade_id, Some(grade.id));
    assert_eq!(player.status, EntityStatus::Registered);

    Ok(())
}

/// Tests creating a player with a nickname already in use.
///
/// Verifies that the unique index reports the violation as such.
///
/// Expected: Err(SqlErr::UniqueConstraintViolation)
#[tokio::test]
async fn fails_for_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::player::PlayerFactory::new(db)
        .nickname("Flash")
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let result = repo.create(&params("Flash"), None).await;

    assert!(matches!(
        result.map_err(|e| e.sql_err()),
        Err(Some(SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}

/// Tests creating a player together with a clan membership.
///
/// Expected: Ok with one registered membership in the clan
#[tokio::test]
async fn creates_player_with_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await?;

    let repo = PlayerRepository::new(db);
    let player = repo.create(&params("Flash"), Some(clan.id)).await?;

    let memberships = PlayerClanRepository::new(db).history(player.id).await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].0.clan_id, clan.id);
    assert_eq!(memberships[0].0.status, EntityStatus::Registered);

    Ok(())
}

/// Tests that a failed membership insert rolls back the player.
///
/// Expected: Err and no player row
#[tokio::test]
async fn rolls_back_player_when_membership_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    let result = repo.create(&params("Flash"), Some(404)).await;

    assert!(result.is_err());
    assert!(repo.find_by_nickname("Flash").await?.is_none());

    Ok(())
}

fn params(nickname: &str) -> CreatePlayerParams {
    CreatePlayerParams {
        nickname: nickname.to_string(),
        race: None,
        grade_id: None,
        clan_name: None,
    }
}
