use super::*;

/// Tests creating a new clan.
///
/// Verifies that the clan is registered with the given founding date and no
/// closing date.
///
/// Expected: Ok with clan created
#[tokio::test]
async fn creates_registered_clan() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let founding_date = NaiveDate::from_ymd_opt(2004, 3, 1).unwrap();
    let repo = ClanRepository::new(db);
    let clan = repo
        .create(CreateClanParams {
            name: "Wings".to_string(),
            description: None,
            founding_date,
        })
        .await?;

    assert_eq!(clan.name, "Wings");
    assert_eq!(clan.founding_date, founding_date);
    assert!(clan.closing_date.is_none());
    assert_eq!(clan.status, EntityStatus::Registered);

    Ok(())
}
