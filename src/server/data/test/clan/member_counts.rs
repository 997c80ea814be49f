use super::*;

/// Tests counting open memberships per clan.
///
/// Verifies that expired memberships are not counted and clans without members are
/// absent from the result.
///
/// Expected: Ok with a count of 2 for the first clan only
#[tokio::test]
async fn counts_registered_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await?;
    let empty = factory::create_clan(db).await?;

    for _ in 0..2 {
        let player = factory::create_player(db).await?;
        factory::create_player_clan(db, player.id, clan.id).await?;
    }
    let former = factory::create_player(db).await?;
    factory::player_clan::PlayerClanFactory::new(db, former.id, clan.id)
        .status(EntityStatus::Expired)
        .build()
        .await?;

    let repo = ClanRepository::new(db);
    let counts = repo.member_counts(&[clan.id, empty.id]).await?;

    assert_eq!(counts.get(&clan.id), Some(&2));
    assert!(!counts.contains_key(&empty.id));

    Ok(())
}

/// Tests counting with no clans requested.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    let counts = repo.member_counts(&[]).await?;

    assert!(counts.is_empty());

    Ok(())
}
