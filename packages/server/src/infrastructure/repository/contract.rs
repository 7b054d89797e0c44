//! LobbyRepository の共通契約テスト
//!
//! 各実装のテストモジュールから呼び出し、同じ振る舞いであることを確認します。

use crate::domain::{LobbyId, LobbyRepository, MessageBody, RepositoryError, SenderName, Timestamp};

fn lobby_id(raw: &str) -> LobbyId {
    LobbyId::new(raw.to_string()).unwrap()
}

fn name(raw: &str) -> SenderName {
    SenderName::new(raw.to_string()).unwrap()
}

fn body(raw: &str) -> MessageBody {
    MessageBody::new(raw.to_string()).unwrap()
}

pub(crate) async fn create_and_check_lobby(repo: &dyn LobbyRepository) {
    // テスト項目: 作成したロビーだけが存在する
    // given (前提条件):
    let id = lobby_id("abcxyz");

    // when (操作):
    let lobby = repo.create_lobby(id.clone(), Timestamp::new(100)).await.unwrap();

    // then (期待する結果):
    assert_eq!(lobby.id, id);
    assert_eq!(lobby.created_at, Timestamp::new(100));
    assert!(repo.lobby_exists(&id).await.unwrap());
    assert!(!repo.lobby_exists(&lobby_id("zzzzzz")).await.unwrap());
}

pub(crate) async fn duplicate_lobby_is_rejected(repo: &dyn LobbyRepository) {
    // テスト項目: 同じ ID のロビーは二重に作成できない
    // given (前提条件):
    let id = lobby_id("abcxyz");
    repo.create_lobby(id.clone(), Timestamp::new(1)).await.unwrap();

    // when (操作):
    let result = repo.create_lobby(id, Timestamp::new(2)).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::DuplicateLobby("abcxyz".to_string()))
    );
}

pub(crate) async fn message_ids_are_store_wide_and_increasing(repo: &dyn LobbyRepository) {
    // テスト項目: メッセージ ID はロビーをまたいで一意かつ単調増加し、ロビーごとに挿入順で返る
    // given (前提条件):
    let first = lobby_id("aaaaaa");
    let second = lobby_id("bbbbbb");
    repo.create_lobby(first.clone(), Timestamp::new(0)).await.unwrap();
    repo.create_lobby(second.clone(), Timestamp::new(0)).await.unwrap();

    // when (操作):
    let m1 = repo
        .append_message(&first, name("bob"), body("one"), Timestamp::new(10))
        .await
        .unwrap();
    let m2 = repo
        .append_message(&second, name("eve"), body("two"), Timestamp::new(11))
        .await
        .unwrap();
    let m3 = repo
        .append_message(&first, name("bob"), body("three"), Timestamp::new(12))
        .await
        .unwrap();

    // then (期待する結果):
    assert!(m1.id < m2.id && m2.id < m3.id);
    assert_eq!(m2.id.value(), m1.id.value() + 1);
    assert_eq!(m3.id.value(), m2.id.value() + 1);

    let messages = repo.messages_for(&first).await.unwrap();
    assert_eq!(messages, vec![m1, m3]);
    let messages = repo.messages_for(&second).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body.as_str(), "two");
    assert_eq!(messages[0].timestamp, Timestamp::new(11));
}

pub(crate) async fn append_to_unknown_lobby_creates_nothing(repo: &dyn LobbyRepository) {
    // テスト項目: 存在しないロビーへのメッセージ追加は失敗し、何も残らない
    // given (前提条件):
    let ghost = lobby_id("ghosty");

    // when (操作):
    let result = repo
        .append_message(&ghost, name("bob"), body("hi"), Timestamp::new(1))
        .await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::LobbyNotFound("ghosty".to_string()))
    );
    assert!(repo.messages_for(&ghost).await.unwrap().is_empty());
}

pub(crate) async fn upsert_sender_is_idempotent(repo: &dyn LobbyRepository) {
    // テスト項目: 同じ名前の送信者は 1 件だけで、2 回目は入力中フラグを変えない
    // given (前提条件):
    let id = lobby_id("abcxyz");
    repo.create_lobby(id.clone(), Timestamp::new(0)).await.unwrap();

    // when (操作):
    let created = repo.upsert_sender(&id, name("alice")).await.unwrap();
    assert!(repo.set_typing(&id, &name("alice"), true).await.unwrap());
    let created_again = repo.upsert_sender(&id, name("alice")).await.unwrap();

    // then (期待する結果):
    assert!(created);
    assert!(!created_again);
    let senders = repo.senders_for(&id).await.unwrap();
    assert_eq!(senders.len(), 1);
    assert_eq!(senders[0].name, name("alice"));
    assert_eq!(senders[0].lobby_id, id);
    assert!(senders[0].is_typing);
}

pub(crate) async fn upsert_sender_to_unknown_lobby_creates_nothing(repo: &dyn LobbyRepository) {
    // テスト項目: 存在しないロビーへの送信者追加は失敗し、何も残らない
    // given (前提条件):
    let ghost = lobby_id("ghosty");

    // when (操作):
    let result = repo.upsert_sender(&ghost, name("bob")).await;

    // then (期待する結果):
    assert_eq!(
        result,
        Err(RepositoryError::LobbyNotFound("ghosty".to_string()))
    );
    assert!(repo.senders_for(&ghost).await.unwrap().is_empty());
}

pub(crate) async fn same_name_in_two_lobbies_is_two_senders(repo: &dyn LobbyRepository) {
    // テスト項目: 送信者は (名前, ロビー) の組で区別される
    // given (前提条件):
    let first = lobby_id("aaaaaa");
    let second = lobby_id("bbbbbb");
    repo.create_lobby(first.clone(), Timestamp::new(0)).await.unwrap();
    repo.create_lobby(second.clone(), Timestamp::new(0)).await.unwrap();

    // when (操作):
    assert!(repo.upsert_sender(&first, name("bob")).await.unwrap());
    assert!(repo.upsert_sender(&second, name("bob")).await.unwrap());
    assert!(repo.set_typing(&first, &name("bob"), true).await.unwrap());

    // then (期待する結果): 片方のロビーの更新はもう片方に影響しない
    assert!(repo.senders_for(&first).await.unwrap()[0].is_typing);
    assert!(!repo.senders_for(&second).await.unwrap()[0].is_typing);
}

pub(crate) async fn set_typing_reports_absent_sender(repo: &dyn LobbyRepository) {
    // テスト項目: 存在しない送信者の更新は false を返し、送信者を作成しない
    // given (前提条件):
    let id = lobby_id("abcxyz");
    repo.create_lobby(id.clone(), Timestamp::new(0)).await.unwrap();
    repo.upsert_sender(&id, name("bob")).await.unwrap();

    // when (操作):
    let found = repo.set_typing(&id, &name("ghost"), true).await.unwrap();
    let found_in_unknown_lobby = repo
        .set_typing(&lobby_id("zzzzzz"), &name("bob"), true)
        .await
        .unwrap();

    // then (期待する結果):
    assert!(!found);
    assert!(!found_in_unknown_lobby);
    let senders = repo.senders_for(&id).await.unwrap();
    assert_eq!(senders.len(), 1);
    assert!(!senders[0].is_typing);
}

pub(crate) async fn senders_keep_insertion_order(repo: &dyn LobbyRepository) {
    // テスト項目: 送信者は入室順で返される
    // given (前提条件):
    let id = lobby_id("abcxyz");
    repo.create_lobby(id.clone(), Timestamp::new(0)).await.unwrap();

    // when (操作):
    for raw in ["charlie", "alice", "bob"] {
        repo.upsert_sender(&id, name(raw)).await.unwrap();
    }

    // then (期待する結果):
    let names: Vec<String> = repo
        .senders_for(&id)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name.into_string())
        .collect();
    assert_eq!(names, vec!["charlie", "alice", "bob"]);
}
