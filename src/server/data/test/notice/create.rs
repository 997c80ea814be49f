use super::*;

/// Tests creating a notice.
///
/// Expected: Ok with a registered notice of the given type
#[tokio::test]
async fn creates_notice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NoticeRepository::new(db);
    let notice = repo
        .create(CreateNoticeParams {
            title: "Maintenance".to_string(),
            writer: "admin".to_string(),
            text: "Server restarts at midnight".to_string(),
            notice_type: NoticeType::System,
        })
        .await?;

    assert_eq!(notice.title, "Maintenance");
    assert_eq!(notice.notice_type, NoticeType::System);
    assert_eq!(notice.status, EntityStatus::Registered);

    Ok(())
}
