use super::*;

/// Tests computing win, loss and match totals.
///
/// Verifies that undecided matches count towards the total only and deleted matches
/// are ignored entirely.
///
/// Expected: Ok with 2 wins, 1 loss and 4 matches for the first player
#[tokio::test]
async fn counts_non_deleted_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let rival = factory::create_player(db).await?;
    let idle = factory::create_player(db).await?;

    for _ in 0..2 {
        factory::game_match::MatchFactory::new(db, player.id, rival.id)
            .winner(player.id)
            .build()
            .await?;
    }
    factory::game_match::MatchFactory::new(db, rival.id, player.id)
        .winner(rival.id)
        .build()
        .await?;
    factory::create_match(db, rival.id, player.id).await?;
    factory::game_match::MatchFactory::new(db, player.id, rival.id)
        .winner(player.id)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let stats = repo.stats(&[player.id, rival.id, idle.id]).await?;

    let player_stats = stats.get(&player.id).copied().unwrap_or_default();
    assert_eq!(player_stats.wins, 2);
    assert_eq!(player_stats.losses, 1);
    assert_eq!(player_stats.total_matches, 4);

    let rival_stats = stats.get(&rival.id).copied().unwrap_or_default();
    assert_eq!(rival_stats.wins, 1);
    assert_eq!(rival_stats.losses, 2);

    assert!(!stats.contains_key(&idle.id));

    Ok(())
}
