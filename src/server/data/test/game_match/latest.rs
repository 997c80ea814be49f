use super::*;

/// Tests fetching the most recent registered matches.
///
/// Verifies the limit, the ordering by match time and that deleted matches are
/// skipped.
///
/// Expected: Ok with the two newest registered matches
#[tokio::test]
async fn returns_newest_registered_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let one = factory::create_player(db).await?;
    let two = factory::create_player(db).await?;
    let now = Utc::now();

    let mut created = Vec::new();
    for days in [3, 2, 1] {
        let game_match = factory::game_match::MatchFactory::new(db, one.id, two.id)
            .match_time(Some(now - Duration::days(days)))
            .build()
            .await?;
        created.push(game_match);
    }
    factory::game_match::MatchFactory::new(db, one.id, two.id)
        .match_time(Some(now))
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let latest = repo.latest(2).await?;

    let ids: Vec<i32> = latest.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![created[2].id, created[1].id]);
    assert_eq!(repo.count_registered().await?, 3);

    Ok(())
}
