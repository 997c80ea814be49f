use super::*;

/// Tests that deleted clans are hidden by default.
///
/// Expected: Ok with only the registered clan
#[tokio::test]
async fn excludes_deleted_clans() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_clan(db).await?;
    factory::clan::ClanFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = ClanRepository::new(db);
    let (clans, total) = repo
        .get_paginated(false, &[(ClanSort::Id, SortDirection::Desc)], 0, 20)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(clans[0].id, kept.id);

    Ok(())
}

/// Tests ordering clans by founding date.
///
/// Expected: Ok with the oldest clan first
#[tokio::test]
async fn sorts_by_founding_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let newer = factory::clan::ClanFactory::new(db)
        .founding_date(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap())
        .build()
        .await?;
    let older = factory::clan::ClanFactory::new(db)
        .founding_date(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap())
        .build()
        .await?;

    let repo = ClanRepository::new(db);
    let (clans, _) = repo
        .get_paginated(false, &[(ClanSort::FoundingDate, SortDirection::Asc)], 0, 20)
        .await?;

    let ids: Vec<i32> = clans.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![older.id, newer.id]);

    Ok(())
}
