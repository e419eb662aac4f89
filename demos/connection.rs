//! Connection State Machine
//!
//! Walks a connection through open, write, read and close, then reads from
//! the closed connection. That last read is treated as fatal here: the demo
//! panics with the returned error. The library itself only returns it.
//!
//! Run with: cargo run --example connection

use patterncraft::connection::Connection;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_target(false)
        .init();

    let mut conn = Connection::new();
    println!("{}", conn); // Closed

    conn.open().expect("closed connection opens");
    println!("{}", conn); // Open

    conn.write().expect("open connection writes");
    conn.read().expect("open connection reads");

    conn.close().expect("open connection closes");
    println!("{}", conn); // Closed

    if let Err(err) = conn.read() {
        panic!("{}", err);
    }
}
