use super::*;

/// Tests the default player listing.
///
/// Verifies that only registered players are listed; banned and deleted players are
/// left out.
///
/// Expected: Ok with only the registered player
#[tokio::test]
async fn lists_only_registered_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let registered = factory::create_player(db).await?;
    factory::player::PlayerFactory::new(db)
        .status(EntityStatus::Banned)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let (players, total) = repo
        .get_paginated(
            &PlayerListFilter::default(),
            &[(PlayerSort::Id, SortDirection::Desc)],
            0,
            20,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(players[0].id, registered.id);

    Ok(())
}

/// Tests listing deleted players on request.
///
/// Verifies that deleted players join the listing while banned ones stay hidden.
///
/// Expected: Ok with the registered and deleted players
#[tokio::test]
async fn includes_deleted_players_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db).await?;
    factory::player::PlayerFactory::new(db)
        .status(EntityStatus::Banned)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let filter = PlayerListFilter {
        include_deleted: true,
        nickname: None,
    };
    let (_, total) = repo
        .get_paginated(&filter, &[(PlayerSort::Id, SortDirection::Desc)], 0, 20)
        .await?;

    assert_eq!(total, 2);

    Ok(())
}

/// Tests filtering players by nickname substring.
///
/// Expected: Ok with the two matching players
#[tokio::test]
async fn filters_by_nickname_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for nickname in ["Jaedong", "JangBi", "Flash"] {
        factory::player::PlayerFactory::new(db)
            .nickname(nickname)
            .build()
            .await?;
    }

    let repo = PlayerRepository::new(db);
    let filter = PlayerListFilter {
        include_deleted: false,
        nickname: Some("Ja".to_string()),
    };
    let (players, total) = repo
        .get_paginated(&filter, &[(PlayerSort::Nickname, SortDirection::Asc)], 0, 20)
        .await?;

    assert_eq!(total, 2);
    let nicknames: Vec<&str> = players.iter().map(|p| p.nickname.as_str()).collect();
    assert_eq!(nicknames, vec!["Jaedong", "JangBi"]);

    Ok(())
}

/// Tests ordering players by win count.
///
/// Verifies that the win count used for ordering ignores deleted matches.
///
/// Expected: Ok with the player holding two live wins first
#[tokio::test]
async fn sorts_by_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let strong = factory::create_player(db).await?;
    let weak = factory::create_player(db).await?;

    for _ in 0..2 {
        factory::game_match::MatchFactory::new(db, strong.id, weak.id)
            .winner(strong.id)
            .build()
            .await?;
    }
    for _ in 0..3 {
        factory::game_match::MatchFactory::new(db, strong.id, weak.id)
            .winner(weak.id)
            .status(EntityStatus::Deleted)
            .build()
            .await?;
    }
    factory::game_match::MatchFactory::new(db, strong.id, weak.id)
        .winner(weak.id)
        .build()
        .await?;

    let repo = PlayerRepository::new(db);
    let (players, _) = repo
        .get_paginated(
            &PlayerListFilter::default(),
            &[(PlayerSort::Wins, SortDirection::Desc)],
            0,
            20,
        )
        .await?;

    let ids: Vec<i32> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![strong.id, weak.id]);

    Ok(())
}

/// Tests that wildcard characters in the nickname filter match literally.
///
/// Expected: Ok with only the player whose nickname contains an underscore
#[tokio::test]
async fn nickname_filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for nickname in ["Flash", "Bisu", "Sea_Bass"] {
        factory::player::PlayerFactory::new(db)
            .nickname(nickname)
            .build()
            .await?;
    }

    let repo = PlayerRepository::new(db);
    let sort = [(PlayerSort::Nickname, SortDirection::Asc)];

    let filter = PlayerListFilter {
        include_deleted: false,
        nickname: Some("_".to_string()),
    };
    let (players, total) = repo.get_paginated(&filter, &sort, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(players[0].nickname, "Sea_Bass");

    let filter = PlayerListFilter {
        include_deleted: false,
        nickname: Some("%".to_string()),
    };
    let (_, total) = repo.get_paginated(&filter, &sort, 0, 20).await?;

    assert_eq!(total, 0);

    Ok(())
}
