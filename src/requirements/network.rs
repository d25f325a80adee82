//! Network reachability probing.
//!
//! A host counts as reachable when a TCP connection to it completes within
//! the timeout. Hosts are tried in order and probing stops at the first
//! success.

use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Try to open a TCP connection to `host:port`.
///
/// Every resolved address is tried; resolution failure counts as unreachable.
pub fn probe_host(address: &str, timeout: Duration) -> bool {
    let addrs = match address.to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(e) => {
            tracing::debug!("Could not resolve {}: {}", address, e);
            return false;
        }
    };

    for addr in addrs {
        if TcpStream::connect_timeout(&addr, timeout).is_ok() {
            tracing::debug!("{} reachable via {}", address, addr);
            return true;
        }
    }

    tracing::debug!("{} unreachable", address);
    false
}

/// Return the first host for which `probe` succeeds.
pub fn first_reachable<'h, F>(hosts: &'h [String], probe: F) -> Option<&'h str>
where
    F: Fn(&str) -> bool,
{
    hosts.iter().map(String::as_str).find(|host| probe(host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::net::TcpListener;

    #[test]
    fn local_listener_is_reachable() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        assert!(probe_host(&addr.to_string(), Duration::from_secs(1)));
    }

    #[test]
    fn closed_port_is_unreachable() {
        // Bind then drop to get a port nobody listens on
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        assert!(!probe_host(
            &format!("127.0.0.1:{}", port),
            Duration::from_millis(500)
        ));
    }

    #[test]
    fn unparseable_address_is_unreachable() {
        assert!(!probe_host("no port here", Duration::from_millis(100)));
    }

    #[test]
    fn first_reachable_stops_at_first_success() {
        let hosts = vec![
            "a:1".to_string(),
            "b:2".to_string(),
            "c:3".to_string(),
        ];
        let tried = RefCell::new(Vec::new());

        let found = first_reachable(&hosts, |h| {
            tried.borrow_mut().push(h.to_string());
            h == "b:2"
        });

        assert_eq!(found, Some("b:2"));
        assert_eq!(*tried.borrow(), vec!["a:1", "b:2"]);
    }

    #[test]
    fn first_reachable_none_when_all_fail() {
        let hosts = vec!["a:1".to_string(), "b:2".to_string()];
        assert_eq!(first_reachable(&hosts, |_| false), None);
    }
}
