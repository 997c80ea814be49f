use super::*;

/// Tests soft deleting a grade.
///
/// Verifies that the row is kept with status deleted and a deletion time, and can
/// still be fetched by id.
///
/// Expected: Ok(Some) with status deleted
#[tokio::test]
async fn marks_grade_deleted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grade = factory::create_grade(db).await?;

    let repo = GradeRepository::new(db);
    let deleted = repo.soft_delete(grade.id).await?.unwrap();

    assert_eq!(deleted.status, EntityStatus::Deleted);
    assert!(deleted.deleted_at.is_some());

    let fetched = repo.get_by_id(grade.id).await?;
    assert!(fetched.is_some());

    Ok(())
}

/// Tests deleting a grade twice.
///
/// Verifies that the original deletion time is kept.
///
/// Expected: Ok(Some) with unchanged deleted_at
#[tokio::test]
async fn keeps_first_deletion_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grade = factory::create_grade(db).await?;

    let repo = GradeRepository::new(db);
    let first = repo.soft_delete(grade.id).await?.unwrap();
    let second = repo.soft_delete(grade.id).await?.unwrap();

    assert_eq!(first.deleted_at, second.deleted_at);

    Ok(())
}
