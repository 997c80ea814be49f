use super::*;

/// Tests creating a decided match.
///
/// Verifies that the given loser is stored alongside the winner and that a missing
/// match time defaults to the creation time.
///
/// Expected: Ok with winner, loser and match time set
#[tokio::test]
async fn creates_match_with_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let one = factory::create_player(db).await?;
    let two = factory::create_player(db).await?;

    let repo = GameMatchRepository::new(db);
    let game_match = repo
        .create(
            CreateMatchParams {
                player_one_id: one.id,
                player_two_id: two.id,
                player_one_race: Some(Race::Protoss),
                player_two_race: Some(Race::Zerg),
                winner_id: Some(two.id),
                map_name: Some("Python".to_string()),
                description: None,
                streaming_url: None,
                match_time: None,
                contest_id: None,
            },
            Some(one.id),
        )
        .await?;

    assert_eq!(game_match.winner_id, Some(two.id));
    assert_eq!(game_match.loser_id, Some(one.id));
    assert_eq!(game_match.player_two_race, Some(Race::Zerg));
    assert_eq!(game_match.status, EntityStatus::Registered);
    assert!(game_match.match_time.is_some());

    Ok(())
}
