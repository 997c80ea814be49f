use super::*;

/// Tests recording a result on an undecided match.
///
/// Expected: Ok(Some) with winner and loser set and the map kept
#[tokio::test]
async fn records_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let one = factory::create_player(db).await?;
    let two = factory::create_player(db).await?;
    let game_match = factory::game_match::MatchFactory::new(db, one.id, two.id)
        .map_name(Some("Circuit Breaker".to_string()))
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let updated = repo
        .update(
            UpdateMatchParams {
                id: game_match.id,
                winner_id: Some(one.id),
                ..Default::default()
            },
            Some(two.id),
        )
        .await?
        .unwrap();

    assert_eq!(updated.winner_id, Some(one.id));
    assert_eq!(updated.loser_id, Some(two.id));
    assert_eq!(updated.map_name, Some("Circuit Breaker".to_string()));

    Ok(())
}

/// Tests soft deleting a match.
///
/// Verifies that the result is kept on the deleted row.
///
/// Expected: Ok(Some) with status deleted and the original winner
#[tokio::test]
async fn soft_delete_keeps_result() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (winner, loser, game_match) = factory::helpers::create_match_with_players(db).await?;

    let repo = GameMatchRepository::new(db);
    let deleted = repo.soft_delete(game_match.id).await?.unwrap();

    assert_eq!(deleted.status, EntityStatus::Deleted);
    assert!(deleted.deleted_at.is_some());
    assert_eq!(deleted.winner_id, Some(winner.id));
    assert_eq!(deleted.loser_id, Some(loser.id));

    Ok(())
}
