use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_list_with_author() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let users = helpers::create_users(&state, ["john", "albert"]).await?;
    let laptops = helpers::create_laptops(&state, 2).await?;
    let cmd = laptop_review_review::Command::new(state);

    cmd.create_comment(users[0], helpers::input(laptops[0], "First", 5))
        .await?;
    cmd.create_comment(users[1], helpers::input(laptops[0], "Second", 3))
        .await?;
    cmd.create_comment(users[1], helpers::input(laptops[1], "Other laptop", 2))
        .await?;

    let all = cmd.list_with_author(None).await?;
    assert_eq!(all.len(), 3);

    let on_first = cmd.list_with_author(Some(laptops[0])).await?;
    let authors = on_first
        .iter()
        .map(|c| c.user.username.as_str())
        .collect::<Vec<_>>();
    assert_eq!(authors, vec!["john", "albert"]);
    assert_eq!(on_first[0].comment.content, "First");
    assert_eq!(on_first[1].user.id, users[1]);

    let on_second = cmd.list_with_author(Some(laptops[1])).await?;
    assert_eq!(on_second.len(), 1);
    assert_eq!(on_second[0].comment.rating, 2);
    assert_eq!(on_second[0].laptop.id, laptops[1]);
    assert_eq!(on_second[0].laptop.name, "Latitude 1");

    Ok(())
}
