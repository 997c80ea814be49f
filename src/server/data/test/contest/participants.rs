use super::*;

/// Tests registering the same participant twice.
///
/// Verifies that the second registration is a no-op and the participant is counted
/// once.
///
/// Expected: Ok(true) then Ok(false), with a count of 1
#[tokio::test]
async fn add_participant_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let contest = factory::create_contest(db).await?;
    let player = factory::create_player(db).await?;

    let repo = ContestRepository::new(db);
    assert!(repo.add_participant(contest.id, player.id).await?);
    assert!(!repo.add_participant(contest.id, player.id).await?);

    let counts = repo.participant_counts(&[contest.id]).await?;
    assert_eq!(counts.get(&contest.id), Some(&1));

    Ok(())
}

/// Tests removing participants.
///
/// Verifies that removing a registered player succeeds once and removing an
/// unregistered player reports false.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn remove_participant_reports_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let contest = factory::create_contest(db).await?;
    let player = factory::create_player(db).await?;
    factory::create_contest_participant(db, contest.id, player.id).await?;

    let repo = ContestRepository::new(db);
    assert!(repo.remove_participant(contest.id, player.id).await?);
    assert!(!repo.remove_participant(contest.id, player.id).await?);
    assert!(repo.participants(contest.id).await?.is_empty());

    Ok(())
}

/// Tests listing participants of a contest.
///
/// Expected: Ok with the contest's participants in nickname order
#[tokio::test]
async fn lists_participants_by_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let contest = factory::create_contest(db).await?;
    let other_contest = factory::create_contest(db).await?;
    let stork = factory::player::PlayerFactory::new(db)
        .nickname("Stork")
        .build()
        .await?;
    let best = factory::player::PlayerFactory::new(db)
        .nickname("Best")
        .build()
        .await?;
    let outsider = factory::create_player(db).await?;

    factory::create_contest_participant(db, contest.id, stork.id).await?;
    factory::create_contest_participant(db, contest.id, best.id).await?;
    factory::create_contest_participant(db, other_contest.id, outsider.id).await?;

    let repo = ContestRepository::new(db);
    let participants = repo.participants(contest.id).await?;

    let nicknames: Vec<&str> = participants.iter().map(|p| p.nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["Best", "Stork"]);

    Ok(())
}
