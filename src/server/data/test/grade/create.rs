use super::*;

/// Tests creating a new grade.
///
/// Verifies that the repository inserts a registered grade with the given name and
/// description and no deletion time.
///
/// Expected: Ok with grade created
#[tokio::test]
async fn creates_registered_grade() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GradeRepository::new(db);
    let grade = repo
        .create(CreateGradeParams {
            name: "Gold".to_string(),
            description: Some("Upper tier".to_string()),
        })
        .await?;

    assert_eq!(grade.name, "Gold");
    assert_eq!(grade.description, Some("Upper tier".to_string()));
    assert_eq!(grade.status, EntityStatus::Registered);
    assert!(grade.deleted_at.is_none());

    Ok(())
}

/// Tests creating a grade with a name already in use.
///
/// Verifies that the unique constraint on the name column rejects the insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::grade::GradeFactory::new(db).name("Gold").build().await?;

    let repo = GradeRepository::new(db);
    let result = repo
        .create(CreateGradeParams {
            name: "Gold".to_string(),
            description: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
