use super::*;

/// Tests listing a player's matches from both sides.
///
/// Verifies that matches without the player are left out and results are ordered by
/// match time descending.
///
/// Expected: Ok with the player's two matches, latest first
#[tokio::test]
async fn lists_matches_as_either_participant() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let rival = factory::create_player(db).await?;
    let other = factory::create_player(db).await?;
    let now = Utc::now();

    let older = factory::game_match::MatchFactory::new(db, player.id, rival.id)
        .match_time(Some(now - Duration::days(3)))
        .build()
        .await?;
    let newer = factory::game_match::MatchFactory::new(db, rival.id, player.id)
        .match_time(Some(now - Duration::days(1)))
        .build()
        .await?;
    factory::create_match(db, rival.id, other.id).await?;

    let repo = GameMatchRepository::new(db);
    let (matches, total) = repo
        .for_player(player.id, &PlayerMatchFilter::default(), 0, 20)
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests that the opponent filter ignores the player's own nickname.
///
/// Expected: Ok with only the match against the named opponent
#[tokio::test]
async fn filters_by_opponent_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::player::PlayerFactory::new(db)
        .nickname("Light")
        .build()
        .await?;
    let fantasy = factory::player::PlayerFactory::new(db)
        .nickname("Fantasy")
        .build()
        .await?;
    let mind = factory::player::PlayerFactory::new(db)
        .nickname("Mind")
        .build()
        .await?;

    let target = factory::create_match(db, fantasy.id, player.id).await?;
    factory::create_match(db, player.id, mind.id).await?;

    let repo = GameMatchRepository::new(db);
    let filter = PlayerMatchFilter {
        opponent_nickname: Some("Fant".to_string()),
        ..Default::default()
    };
    let (matches, total) = repo.for_player(player.id, &filter, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(matches[0].id, target.id);

    let own_name = PlayerMatchFilter {
        opponent_nickname: Some("Light".to_string()),
        ..Default::default()
    };
    let (_, none) = repo.for_player(player.id, &own_name, 0, 20).await?;
    assert_eq!(none, 0);

    Ok(())
}

/// Tests the inclusive match time range.
///
/// Expected: Ok with only the match inside the range
#[tokio::test]
async fn filters_by_time_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let rival = factory::create_player(db).await?;
    let now = Utc::now();

    factory::game_match::MatchFactory::new(db, player.id, rival.id)
        .match_time(Some(now - Duration::days(10)))
        .build()
        .await?;
    let inside = factory::game_match::MatchFactory::new(db, player.id, rival.id)
        .match_time(Some(now - Duration::days(5)))
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let filter = PlayerMatchFilter {
        started_at: Some(now - Duration::days(6)),
        ended_at: Some(now),
        ..Default::default()
    };
    let (matches, total) = repo.for_player(player.id, &filter, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(matches[0].id, inside.id);

    Ok(())
}
