use super::*;

/// Tests aggregating a player's results per opponent.
///
/// Verifies counts, wins and losses per opponent, ordering by match count, and that
/// deleted matches are ignored.
///
/// Expected: Ok with two opponent rows, the more frequent opponent first
#[tokio::test]
async fn aggregates_per_opponent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let frequent = factory::create_player(db).await?;
    let rare = factory::create_player(db).await?;

    factory::game_match::MatchFactory::new(db, player.id, frequent.id)
        .winner(player.id)
        .build()
        .await?;
    factory::game_match::MatchFactory::new(db, frequent.id, player.id)
        .winner(player.id)
        .build()
        .await?;
    factory::game_match::MatchFactory::new(db, frequent.id, player.id)
        .winner(frequent.id)
        .build()
        .await?;
    factory::game_match::MatchFactory::new(db, rare.id, player.id)
        .winner(rare.id)
        .build()
        .await?;
    factory::game_match::MatchFactory::new(db, rare.id, player.id)
        .winner(rare.id)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let (rows, total) = repo.opponent_stats(player.id, None, 0, 20).await?;

    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].opponent_id, frequent.id);
    assert_eq!(rows[0].total_count, 3);
    assert_eq!(rows[0].wins, 2);
    assert_eq!(rows[0].losses, 1);

    assert_eq!(rows[1].opponent_id, rare.id);
    assert_eq!(rows[1].total_count, 1);
    assert_eq!(rows[1].wins, 0);
    assert_eq!(rows[1].losses, 1);

    Ok(())
}

/// Tests filtering and paging opponent rows.
///
/// Verifies that the nickname filter narrows both the rows and the total, and that
/// paging applies after aggregation.
///
/// Expected: Ok with one row per page and a total of distinct opponents
#[tokio::test]
async fn filters_and_pages_opponents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let soulkey = factory::player::PlayerFactory::new(db)
        .nickname("Soulkey")
        .build()
        .await?;
    let soma = factory::player::PlayerFactory::new(db)
        .nickname("Soma")
        .build()
        .await?;
    let rush = factory::player::PlayerFactory::new(db)
        .nickname("Rush")
        .build()
        .await?;

    for opponent in [&soulkey, &soma, &rush] {
        factory::create_match(db, player.id, opponent.id).await?;
    }

    let repo = GameMatchRepository::new(db);
    let (first_page, total) = repo.opponent_stats(player.id, Some("So"), 0, 1).await?;
    let (second_page, _) = repo.opponent_stats(player.id, Some("So"), 1, 1).await?;

    assert_eq!(total, 2);
    assert_eq!(first_page.len(), 1);
    assert_eq!(second_page.len(), 1);
    assert_eq!(first_page[0].opponent_id, soulkey.id);
    assert_eq!(second_page[0].opponent_id, soma.id);

    Ok(())
}

/// Tests the opponent filter with a wildcard character and a far out page.
///
/// Verifies that `_` matches only a literal underscore and that a page past the end of
/// the offset range returns no rows instead of failing.
///
/// Expected: Ok with the underscored opponent, then an empty page
#[tokio::test]
async fn handles_wildcard_filter_and_far_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_player(db).await?;
    let plain = factory::player::PlayerFactory::new(db)
        .nickname("Stork")
        .build()
        .await?;
    let underscored = factory::player::PlayerFactory::new(db)
        .nickname("Last_Stork")
        .build()
        .await?;

    factory::create_match(db, player.id, plain.id).await?;
    factory::create_match(db, player.id, underscored.id).await?;

    let repo = GameMatchRepository::new(db);
    let (rows, total) = repo.opponent_stats(player.id, Some("_"), 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(rows[0].opponent_id, underscored.id);

    let (rows, total) = repo.opponent_stats(player.id, None, u64::MAX, 20).await?;

    assert_eq!(total, 2);
    assert!(rows.is_empty());

    Ok(())
}
