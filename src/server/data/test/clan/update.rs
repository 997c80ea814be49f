use super::*;

/// Tests closing a clan.
///
/// Verifies that setting a closing date keeps the name and description.
///
/// Expected: Ok(Some) with closing date set
#[tokio::test]
async fn sets_closing_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::clan::ClanFactory::new(db)
        .name("Wings")
        .build()
        .await?;
    let closing_date = NaiveDate::from_ymd_opt(2012, 8, 1).unwrap();

    let repo = ClanRepository::new(db);
    let updated = repo
        .update(UpdateClanParams {
            id: clan.id,
            name: None,
            description: None,
            closing_date: Some(closing_date),
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Wings");
    assert_eq!(updated.closing_date, Some(closing_date));

    Ok(())
}

/// Tests soft deleting a clan.
///
/// Expected: Ok(Some) with status deleted and a deletion time
#[tokio::test]
async fn soft_deletes_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let clan = factory::create_clan(db).await?;

    let repo = ClanRepository::new(db);
    let deleted = repo.soft_delete(clan.id).await?.unwrap();

    assert_eq!(deleted.status, EntityStatus::Deleted);
    assert!(deleted.deleted_at.is_some());
    assert_eq!(repo.count_registered().await?, 0);

    Ok(())
}

/// Tests deleting a clan that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ClanRepository::new(db);
    let result = repo.soft_delete(42).await?;

    assert!(result.is_none());

    Ok(())
}
