//! Fluent builder for servers.

use super::error::BuildError;
use super::{Server, ServerOption};

/// Builder for constructing a [`Server`] with a fluent API.
///
/// Options are collected and applied in order at `build()`, exactly as
/// [`Server::new`] applies them.
#[derive(Debug, Default)]
pub struct ServerBuilder {
    name: Option<String>,
    host: String,
    port: Option<u16>,
    ops: Vec<ServerOption>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server name (required).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the host. Defaults to empty.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port (required).
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Append one option.
    pub fn option(mut self, op: ServerOption) -> Self {
        self.ops.push(op);
        self
    }

    /// Append several options at once.
    pub fn options<I>(mut self, ops: I) -> Self
    where
        I: IntoIterator<Item = ServerOption>,
    {
        self.ops.extend(ops);
        self
    }

    pub fn build(self) -> Result<Server, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;
        let port = self.port.ok_or(BuildError::MissingPort)?;

        Ok(Server::new(name, self.host, port, self.ops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{with_label, with_limit, with_timeout, Options};
    use std::time::Duration;

    #[test]
    fn builder_requires_name() {
        let result = ServerBuilder::new().port(80).build();
        assert_eq!(result.unwrap_err(), BuildError::MissingName);
    }

    #[test]
    fn builder_requires_port() {
        let result = ServerBuilder::new().name("api").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingPort);
    }

    #[test]
    fn fluent_api_builds_server() {
        let server = ServerBuilder::new()
            .name("api")
            .host("127.0.0.1")
            .port(9000)
            .option(with_label("primary"))
            .options([with_limit(3), with_timeout(Duration::from_secs(2))])
            .build()
            .unwrap();

        assert_eq!(server.name, "api");
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.port, 9000);
        assert_eq!(
            server.options(),
            &Options {
                label: "primary".to_string(),
                limit: 3,
                timeout: Duration::from_secs(2),
            }
        );
    }

    #[test]
    fn builder_matches_constructor() {
        let built = ServerBuilder::new()
            .name("s")
            .port(1)
            .option(with_limit(5))
            .build()
            .unwrap();
        let direct = Server::new("s", "", 1, [with_limit(5)]);

        assert_eq!(built, direct);
    }
}
