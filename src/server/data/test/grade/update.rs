use super::*;

/// Tests updating only the provided fields.
///
/// Verifies that a name-only update leaves the description untouched.
///
/// Expected: Ok(Some) with the new name and the old description
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grade = factory::grade::GradeFactory::new(db)
        .description(Some("Original".to_string()))
        .build()
        .await?;

    let repo = GradeRepository::new(db);
    let updated = repo
        .update(UpdateGradeParams {
            id: grade.id,
            name: Some("Renamed".to_string()),
            description: None,
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.description, Some("Original".to_string()));
    assert!(updated.updated_at >= grade.updated_at);

    Ok(())
}

/// Tests restoring a deleted grade through a status update.
///
/// Verifies that moving a deleted grade back to registered clears its deletion time.
///
/// Expected: Ok(Some) with status registered and no deleted_at
#[tokio::test]
async fn restores_deleted_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grade = factory::grade::GradeFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;
    assert!(grade.deleted_at.is_some());

    let repo = GradeRepository::new(db);
    let restored = repo
        .update(UpdateGradeParams {
            id: grade.id,
            name: None,
            description: None,
            status: Some(EntityStatus::Registered),
        })
        .await?
        .unwrap();

    assert_eq!(restored.status, EntityStatus::Registered);
    assert!(restored.deleted_at.is_none());

    Ok(())
}

/// Tests updating a grade that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GradeRepository::new(db);
    let result = repo
        .update(UpdateGradeParams {
            id: 999,
            name: Some("Nobody".to_string()),
            description: None,
            status: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
