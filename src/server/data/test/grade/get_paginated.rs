use super::*;

/// Tests that deleted grades are hidden by default.
///
/// Verifies that the listing skips soft-deleted grades and reports a total that
/// only counts visible rows.
///
/// Expected: Ok with only registered grades
#[tokio::test]
async fn excludes_deleted_grades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_grade(db).await?;
    factory::grade::GradeFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = GradeRepository::new(db);
    let (grades, total) = repo
        .get_paginated(false, &[(GradeSort::Id, SortDirection::Desc)], 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].id, kept.id);

    Ok(())
}

/// Tests listing deleted grades on request.
///
/// Expected: Ok with every grade
#[tokio::test]
async fn includes_deleted_grades_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_grade(db).await?;
    factory::grade::GradeFactory::new(db)
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = GradeRepository::new(db);
    let (grades, total) = repo
        .get_paginated(true, &[(GradeSort::Id, SortDirection::Desc)], 0, 10)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(grades.len(), 2);

    Ok(())
}

/// Tests sorting and paging grades by name.
///
/// Verifies that the second page of a name-ascending listing holds the expected
/// grade while the total still covers every grade.
///
/// Expected: Ok with the third grade alone on page 1
#[tokio::test]
async fn sorts_and_pages_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Silver", "Bronze", "Gold"] {
        factory::grade::GradeFactory::new(db).name(name).build().await?;
    }

    let repo = GradeRepository::new(db);
    let (grades, total) = repo
        .get_paginated(false, &[(GradeSort::Name, SortDirection::Asc)], 1, 2)
        .await?;

    assert_eq!(total, 3);
    assert_eq!(grades.len(), 1);
    assert_eq!(grades[0].name, "Silver");

    Ok(())
}
