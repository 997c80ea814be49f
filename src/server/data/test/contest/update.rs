use super::*;

/// Tests ending a contest.
///
/// Expected: Ok(Some) with ended_at set and the name kept
#[tokio::test]
async fn sets_end_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let contest = factory::contest::ContestFactory::new(db)
        .name("Summer Cup")
        .build()
        .await?;
    let ended_at = Utc::now();

    let repo = ContestRepository::new(db);
    let updated = repo
        .update(UpdateContestParams {
            id: contest.id,
            name: None,
            description: None,
            ended_at: Some(ended_at),
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Summer Cup");
    assert_eq!(updated.ended_at, Some(ended_at));

    Ok(())
}

/// Tests soft deleting a contest.
///
/// Expected: Ok(Some) with status deleted
#[tokio::test]
async fn soft_deletes_contest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let contest = factory::create_contest(db).await?;

    let repo = ContestRepository::new(db);
    let deleted = repo.soft_delete(contest.id).await?.unwrap();

    assert_eq!(deleted.status, EntityStatus::Deleted);
    assert!(deleted.deleted_at.is_some());

    Ok(())
}
