use patterncraft::connection::{Connection, ConnectionError, ConnectionState, IoEvent};

#[test]
fn open_write_read_close_then_read_fails() {
    let mut conn = Connection::with_observer(Vec::new());

    assert_eq!(conn.describe(), "Closed");
    assert_eq!(conn.open(), Ok(()));
    assert_eq!(conn.describe(), "Open");
    assert_eq!(conn.write(), Ok(()));
    assert_eq!(conn.read(), Ok(()));
    assert_eq!(conn.close(), Ok(()));
    assert_eq!(conn.describe(), "Closed");
    assert_eq!(conn.read(), Err(ConnectionError::ConnectionClosed));

    assert_eq!(conn.observer(), &vec![IoEvent::Writing, IoEvent::Reading]);
    assert_eq!(
        conn.history().get_path(),
        vec![
            &ConnectionState::Closed,
            &ConnectionState::Open,
            &ConnectionState::Closed,
        ]
    );
}

#[test]
fn errors_render_readable_messages() {
    let mut conn = Connection::new();

    let closed = conn.close().unwrap_err();
    assert_eq!(closed.to_string(), "connection closed");

    conn.open().unwrap();
    let open = conn.open().unwrap_err();
    assert_eq!(open.to_string(), "connection already open");
}

#[test]
fn connection_can_reopen_after_close() {
    let mut conn = Connection::with_observer(Vec::new());

    for _ in 0..3 {
        conn.open().unwrap();
        conn.write().unwrap();
        conn.close().unwrap();
    }

    assert_eq!(conn.history().len(), 6);
    assert_eq!(conn.into_observer(), vec![IoEvent::Writing; 3]);
}

#[test]
fn history_round_trips_through_json() {
    let mut conn = Connection::with_observer(Vec::new());
    conn.open().unwrap();
    conn.close().unwrap();

    let json = serde_json::to_string(conn.history()).unwrap();
    let restored: patterncraft::StateHistory<ConnectionState> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(restored.get_path(), conn.history().get_path());
}
