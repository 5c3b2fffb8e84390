//! End-to-end tests of the WebSocket relay.

mod common;

use common::TestServer;
use serde_json::json;

#[tokio::test]
async fn test_join_demo_room_and_presence() {
    // テスト項目: デモ Room への参加で シード済みの状態が届き、既存メンバーに USER_JOINED が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;

    // when (操作):
    let x_state = x.join("ALPHA-4291", "X").await;
    let mut y = server.connect().await;
    let y_state = y.join("ALPHA-4291", "Y").await;

    // then (期待する結果):
    for state in [&x_state, &y_state] {
        assert_eq!(state["messages"].as_array().unwrap().len(), 3);
        assert_eq!(state["files"].as_object().unwrap().len(), 3);
        assert_eq!(state["snapshots"].as_array().unwrap().len(), 5);
    }
    assert_eq!(x_state["messages"], y_state["messages"]);
    assert_eq!(y_state["users"].as_array().unwrap().len(), 2);

    let joined = x.recv().await;
    assert_eq!(joined["type"], "USER_JOINED");
    assert_eq!(joined["userName"], "Y");
    let names: Vec<&str> = joined["users"]
        .as_array()
        .unwrap()
        .iter()
        .map(|user| user["userName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["X", "Y"]);
    assert!(y.is_silent().await);
}

#[tokio::test]
async fn test_message_delivered_once_to_everyone() {
    // テスト項目: 新しい Room での最初のメッセージは ID 1 で、送信者を含む全員にちょうど一度届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    x.join("ROOM-B", "X").await;
    let mut y = server.connect().await;
    y.join("ROOM-B", "Y").await;
    x.recv().await; // USER_JOINED

    // when (操作):
    x.send_json(json!({
        "type": "SEND_MESSAGE",
        "roomId": "ROOM-B",
        "userName": "X",
        "avatarColor": "#EF4444",
        "content": "hello",
    }))
    .await;

    // then (期待する結果):
    for client in [&mut x, &mut y] {
        let frame = client.recv().await;
        assert_eq!(frame["type"], "NEW_MESSAGE");
        assert_eq!(frame["message"]["id"], 1);
        assert_eq!(frame["message"]["content"], "hello");
        assert!(client.is_silent().await);
    }
}

#[tokio::test]
async fn test_snapshot_and_file_events() {
    // テスト項目: スナップショットとファイル操作が Room 全体に順番どおり届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    x.join("ROOM-C", "X").await;
    let mut y = server.connect().await;
    y.join("ROOM-C", "Y").await;
    x.recv().await; // USER_JOINED

    // when (操作):
    x.send_json(json!({
        "type": "SAVE_SNAPSHOT",
        "roomId": "ROOM-C",
        "fileName": "a.js",
        "content": "x=1",
        "label": "v1",
    }))
    .await;

    // then (期待する結果):
    for client in [&mut x, &mut y] {
        let saved = client.recv().await;
        assert_eq!(saved["type"], "SNAPSHOT_SAVED");
        assert_eq!(saved["snapshot"]["id"], 1);
        assert_eq!(saved["snapshot"]["label"], "v1");
        assert_eq!(saved["snapshot"]["fileName"], "a.js");
    }

    y.send_json(json!({"type": "CREATE_FILE", "roomId": "ROOM-C", "fileName": "b.js"}))
        .await;
    for client in [&mut x, &mut y] {
        let created = client.recv().await;
        assert_eq!(created["type"], "FILE_CREATED");
        assert_eq!(created["fileName"], "b.js");
    }

    x.send_json(json!({
        "type": "UPDATE_FILE",
        "roomId": "ROOM-C",
        "fileName": "b.js",
        "content": "let b = 2;",
    }))
    .await;
    x.send_json(json!({"type": "DELETE_FILE", "roomId": "ROOM-C", "fileName": "b.js"}))
        .await;
    for client in [&mut x, &mut y] {
        let updated = client.recv().await;
        assert_eq!(updated["type"], "FILE_UPDATED");
        assert_eq!(updated["content"], "let b = 2;");
        let deleted = client.recv().await;
        assert_eq!(deleted["type"], "FILE_DELETED");
        assert_eq!(deleted["fileName"], "b.js");
    }
}

#[tokio::test]
async fn test_bad_frames_do_not_break_the_connection() {
    // テスト項目: 不正なフレームは黙って無視され、同じ接続で操作を続けられる
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    x.join("ROOM-D", "X").await;

    // when (操作):
    x.send_text("{not json").await;
    x.send_json(json!({"type": "DANCE", "roomId": "ROOM-D"})).await;
    x.send_json(json!({"type": "SEND_MESSAGE"})).await;
    x.send_json(json!({"type": "SEND_MESSAGE", "roomId": "OTHER", "content": "nope"}))
        .await;

    // then (期待する結果):
    assert!(x.is_silent().await);

    x.send_json(json!({"type": "SEND_MESSAGE", "roomId": "ROOM-D", "content": "still here"}))
        .await;
    let frame = x.recv().await;
    assert_eq!(frame["message"]["content"], "still here");
    assert_eq!(frame["message"]["userName"], "X");
}

#[tokio::test]
async fn test_rooms_are_isolated() {
    // テスト項目: 別の Room のイベントは届かない
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    x.join("ROOM-E1", "X").await;
    let mut z = server.connect().await;
    z.join("ROOM-E2", "Z").await;

    // when (操作):
    x.send_json(json!({"type": "SEND_MESSAGE", "roomId": "ROOM-E1", "content": "private"}))
        .await;

    // then (期待する結果):
    assert_eq!(x.recv().await["type"], "NEW_MESSAGE");
    assert!(z.is_silent().await);
}

#[tokio::test]
async fn test_disconnect_announces_user_left() {
    // テスト項目: 切断すると残りのメンバーに USER_LEFT と更新後のユーザー一覧が届く
    // given (前提条件):
    let server = TestServer::start().await;
    let mut x = server.connect().await;
    x.join("ROOM-F", "X").await;
    let mut y = server.connect().await;
    y.join("ROOM-F", "Y").await;
    x.recv().await; // USER_JOINED

    // when (操作):
    y.close().await;

    // then (期待する結果):
    let left = x.recv().await;
    assert_eq!(left["type"], "USER_LEFT");
    assert_eq!(left["userName"], "Y");
    assert_eq!(left["users"].as_array().unwrap().len(), 1);
    assert_eq!(left["users"][0]["userName"], "X");
}
