use super::*;

/// Tests that a nickname filter matches either participant.
///
/// Expected: Ok with both matches the player took part in
#[tokio::test]
async fn nickname_matches_either_side() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flash = factory::player::PlayerFactory::new(db)
        .nickname("Flash")
        .build()
        .await?;
    let jaedong = factory::player::PlayerFactory::new(db)
        .nickname("Jaedong")
        .build()
        .await?;
    let bisu = factory::player::PlayerFactory::new(db)
        .nickname("Bisu")
        .build()
        .await?;

    let first = factory::create_match(db, flash.id, jaedong.id).await?;
    let second = factory::create_match(db, bisu.id, flash.id).await?;
    factory::create_match(db, bisu.id, jaedong.id).await?;

    let repo = GameMatchRepository::new(db);
    let filter = MatchSearchFilter {
        player_one_nickname: Some("flash".to_string()),
        ..Default::default()
    };
    let (matches, total) = repo.search(&filter, &[], 0, 20).await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Tests combining both nickname filters.
///
/// Expected: Ok with only the match between the two players
#[tokio::test]
async fn both_nicknames_must_match() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let flash = factory::player::PlayerFactory::new(db)
        .nickname("Flash")
        .build()
        .await?;
    let jaedong = factory::player::PlayerFactory::new(db)
        .nickname("Jaedong")
        .build()
        .await?;
    let bisu = factory::player::PlayerFactory::new(db)
        .nickname("Bisu")
        .build()
        .await?;

    let target = factory::create_match(db, jaedong.id, flash.id).await?;
    factory::create_match(db, flash.id, bisu.id).await?;

    let repo = GameMatchRepository::new(db);
    let filter = MatchSearchFilter {
        player_one_nickname: Some("Flash".to_string()),
        player_two_nickname: Some("Jaedong".to_string()),
        ..Default::default()
    };
    let (matches, total) = repo.search(&filter, &[], 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(matches[0].id, target.id);

    Ok(())
}

/// Tests the deleted-match visibility rule.
///
/// Verifies that deleted matches only appear with `include_deleted`, and that matches
/// in other statuses never appear.
///
/// Expected: Ok with 1 match by default and 2 with deleted ones included
#[tokio::test]
async fn includes_deleted_only_on_request() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let one = factory::create_player(db).await?;
    let two = factory::create_player(db).await?;
    factory::create_match(db, one.id, two.id).await?;
    factory::game_match::MatchFactory::new(db, one.id, two.id)
        .status(EntityStatus::Deleted)
        .build()
        .await?;
    factory::game_match::MatchFactory::new(db, one.id, two.id)
        .status(EntityStatus::Pending)
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let (_, visible) = repo
        .search(&MatchSearchFilter::default(), &[], 0, 20)
        .await?;
    let filter = MatchSearchFilter {
        include_deleted: true,
        ..Default::default()
    };
    let (_, with_deleted) = repo.search(&filter, &[], 0, 20).await?;

    assert_eq!(visible, 1);
    assert_eq!(with_deleted, 2);

    Ok(())
}

/// Tests ordering by match time with undated matches last.
///
/// Expected: Ok with the newest dated match first and the undated match last
#[tokio::test]
async fn sorts_by_match_time_with_nulls_last() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let one = factory::create_player(db).await?;
    let two = factory::create_player(db).await?;
    let now = Utc::now();

    let undated = factory::game_match::MatchFactory::new(db, one.id, two.id)
        .match_time(None)
        .build()
        .await?;
    let older = factory::game_match::MatchFactory::new(db, one.id, two.id)
        .match_time(Some(now - Duration::days(2)))
        .build()
        .await?;
    let newer = factory::game_match::MatchFactory::new(db, one.id, two.id)
        .match_time(Some(now - Duration::days(1)))
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let (matches, _) = repo
        .search(
            &MatchSearchFilter::default(),
            &[(MatchSort::MatchTime, SortDirection::Desc)],
            0,
            20,
        )
        .await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![newer.id, older.id, undated.id]);

    Ok(())
}

/// Tests ordering by the first participant's nickname.
///
/// Expected: Ok with matches ordered by player one nickname ascending
#[tokio::test]
async fn sorts_by_player_one_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let zero = factory::player::PlayerFactory::new(db)
        .nickname("Zero")
        .build()
        .await?;
    let action = factory::player::PlayerFactory::new(db)
        .nickname("Action")
        .build()
        .await?;

    let second = factory::create_match(db, zero.id, action.id).await?;
    let first = factory::create_match(db, action.id, zero.id).await?;

    let repo = GameMatchRepository::new(db);
    let (matches, _) = repo
        .search(
            &MatchSearchFilter::default(),
            &[(MatchSort::PlayerOneNickname, SortDirection::Asc)],
            0,
            20,
        )
        .await?;

    let ids: Vec<i32> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that wildcard characters in the map filter match literally.
///
/// Expected: Ok with only the match played on a map containing `%`
#[tokio::test]
async fn map_filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let one = factory::create_player(db).await?;
    let two = factory::create_player(db).await?;

    factory::game_match::MatchFactory::new(db, one.id, two.id)
        .map_name(Some("Fighting Spirit".to_string()))
        .build()
        .await?;
    let target = factory::game_match::MatchFactory::new(db, one.id, two.id)
        .map_name(Some("100% Circuit".to_string()))
        .build()
        .await?;

    let repo = GameMatchRepository::new(db);
    let filter = MatchSearchFilter {
        map_name: Some("%".to_string()),
        ..Default::default()
    };
    let (matches, total) = repo.search(&filter, &[], 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(matches[0].id, target.id);

    let filter = MatchSearchFilter {
        player_one_nickname: Some("_".to_string()),
        ..Default::default()
    };
    let (_, total) = repo.search(&filter, &[], 0, 20).await?;

    assert_eq!(total, 0);

    Ok(())
}
