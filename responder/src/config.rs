use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::routes::{MethodPattern, Route, RouteTable};

/// Port the mock listens on. Clients under test hardcode it, so there is no override.
pub const DEFAULT_PORT: u16 = 9898;

/// Address the mock binds to. All IPv4 interfaces, like a bare `listen(port)`.
pub const DEFAULT_BIND_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Path answered with the fixed payload.
pub const TEST_PATH: &str = "/test";

/// Payload returned for every request to [`TEST_PATH`].
pub static TEST_PAYLOAD: Lazy<Value> = Lazy::new(|| json!({ "message": "Hewwo" }));

/// Everything [`crate::server::start`] needs to bring up a responder.
#[derive(Debug, Clone)]
pub struct ResponderConfig {
    pub bind_address: IpAddr,
    pub port: u16,
    pub routes: RouteTable,
}

impl ResponderConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Same routes, bound to an ephemeral loopback port.
    pub fn ephemeral() -> Self {
        Self {
            bind_address: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            ..Self::default()
        }
    }
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS,
            port: DEFAULT_PORT,
            routes: RouteTable::new(vec![Route {
                method: MethodPattern::Any,
                path: TEST_PATH,
                payload: &TEST_PAYLOAD,
            }]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixture_contract() {
        let config = ResponderConfig::default();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9898");
        let routes = config.routes.routes();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/test");
        assert_eq!(routes[0].method, MethodPattern::Any);
    }

    #[test]
    fn payload_serializes_to_stable_json() {
        let first = serde_json::to_string(&*TEST_PAYLOAD).unwrap();
        let second = serde_json::to_string(&*TEST_PAYLOAD).unwrap();
        assert_eq!(first, r#"{"message":"Hewwo"}"#);
        assert_eq!(first, second);
    }

    #[test]
    fn ephemeral_config_uses_loopback() {
        let config = ResponderConfig::ephemeral();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:0");
        assert_eq!(config.routes.routes().len(), 1);
    }
}
