use super::*;

/// Tests editing a notice's text.
///
/// Expected: Ok(Some) with the new text and the original title
#[tokio::test]
async fn updates_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notice = factory::notice::NoticeFactory::new(db)
        .title("Season opening")
        .build()
        .await?;

    let repo = NoticeRepository::new(db);
    let updated = repo
        .update(UpdateNoticeParams {
            id: notice.id,
            title: None,
            text: Some("Opening moved to Friday".to_string()),
            notice_type: None,
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Season opening");
    assert_eq!(updated.text, "Opening moved to Friday");

    Ok(())
}

/// Tests soft deleting a notice.
///
/// Verifies that the deleted notice stays fetchable by id but leaves the listing.
///
/// Expected: Ok(Some) with status deleted and an empty listing
#[tokio::test]
async fn soft_deletes_notice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let notice = factory::create_notice(db).await?;

    let repo = NoticeRepository::new(db);
    let deleted = repo.soft_delete(notice.id).await?.unwrap();

    assert_eq!(deleted.status, EntityStatus::Deleted);
    assert!(repo.get_by_id(notice.id).await?.is_some());

    let (_, total) = repo.get_paginated(None, 0, 20).await?;
    assert_eq!(total, 0);

    Ok(())
}
