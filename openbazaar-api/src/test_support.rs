//! Helpers shared by the unit tests.

use crate::client::{ClientBuilder, OpenBazaarClient};
use httpmock::MockServer;
use std::net::TcpListener;

/// Builder pointed at `server`, logging in as `alice` / `hunter2`.
pub fn builder_for(server: &MockServer) -> ClientBuilder {
    ClientBuilder::new("alice", "hunter2")
        .host(server.host())
        .port(server.port())
}

/// Client pointed at `server`, without logging in.
pub fn client_for(server: &MockServer) -> OpenBazaarClient {
    builder_for(server).build().unwrap()
}

/// A local port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
