use super::*;

/// Tests listing contests by name with deleted ones hidden.
///
/// Expected: Ok with the two live contests in name order
#[tokio::test]
async fn lists_live_contests_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_match_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::contest::ContestFactory::new(db)
        .name("Spring Cup")
        .build()
        .await?;
    factory::contest::ContestFactory::new(db)
        .name("Autumn Cup")
        .build()
        .await?;
    factory::contest::ContestFactory::new(db)
        .name("Cancelled Cup")
        .status(EntityStatus::Deleted)
        .build()
        .await?;

    let repo = ContestRepository::new(db);
    let (contests, total) = repo
        .get_paginated(false, &[(ContestSort::Name, SortDirection::Asc)], 0, 20)
        .await?;

    assert_eq!(total, 2);
    let names: Vec<&str> = contests.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Autumn Cup", "Spring Cup"]);

    Ok(())
}
