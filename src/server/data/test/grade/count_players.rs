use super::*;

/// Tests counting the players holding a grade.
///
/// Verifies that deleted players and players of other grades are not counted.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_non_deleted_players() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let grade = factory::create_grade(db).await?;
    let other = factory::create_grade(db).await?;

    for _ in 0..2 {
        factory::player::PlayerFactory::new(db)
            .grade_id(Some(grade.id))
            .build()
            .await?;
    }
    factory::player::PlayerFactory::new(db)
        .grade_id(Some(grade.id))
        .status(EntityStatus::Deleted)
        .build()
        .await?;
    factory::player::PlayerFactory::new(db)
        .grade_id(Some(other.id))
        .build()
        .await?;

    let repo = GradeRepository::new(db);
    let count = repo.count_players(grade.id).await?;

    assert_eq!(count, 2);

    Ok(())
}
