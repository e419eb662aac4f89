//! Functional Options
//!
//! Builds the same server twice: once from option functions, once through
//! the fluent builder.
//!
//! Run with: cargo run --example options

use patterncraft::options::{with_label, with_limit, with_timeout, Server, ServerBuilder};
use std::time::Duration;

fn main() {
    let server = Server::new(
        "server",
        "",
        10000,
        [
            with_label("ooo"),
            with_limit(2),
            with_timeout(Duration::from_secs(1)),
        ],
    );
    println!("{:?}", server);

    let built = ServerBuilder::new()
        .name("server")
        .port(10000)
        .options([
            with_label("ooo"),
            with_limit(2),
            with_timeout(Duration::from_secs(1)),
        ])
        .build()
        .expect("name and port are set");

    assert_eq!(server, built);
    println!("builder produced an identical server");
}
