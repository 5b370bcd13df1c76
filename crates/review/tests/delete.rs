use laptop_review_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_delete_comment() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let users = helpers::create_users(&state, ["john", "albert"]).await?;
    let laptops = helpers::create_laptops(&state, 1).await?;
    let cmd = laptop_review_review::Command::new(state);

    let comment = cmd
        .create_comment(users[0], helpers::input(laptops[0], "Nice", 4))
        .await?;

    let err = cmd
        .delete_comment(users[1], comment.comment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden));
    assert!(cmd.find_with_author(comment.comment.id).await?.is_some());

    cmd.delete_comment(users[0], comment.comment.id).await?;

    assert!(cmd.find_with_author(comment.comment.id).await?.is_none());
    assert!(cmd.find_with_author(comment.comment.id).await?.is_none());
    assert!(cmd.list_with_author(Some(laptops[0])).await?.is_empty());

    let err = cmd
        .delete_comment(users[0], comment.comment.id)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "comment not found");

    Ok(())
}
