//! Shared utilities for integration and load testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;

use gp_relay::config::{CorsPolicy, RelayConfig};
use gp_relay::http::HttpServer;
use gp_relay::lifecycle::Shutdown;
use gp_relay::net;

/// Path and query of the real feed, reused against mock upstreams.
pub const FEED_PATH: &str = "/NORAD/elements/gp.php";

/// Upstream URL for a mock server at `base`.
pub fn feed_url(base: &str) -> String {
    format!("{}{}?GROUP=starlink&FORMAT=json", base, FEED_PATH)
}

/// Start a relay on an ephemeral loopback port.
///
/// The listener is bound before this returns, so requests can be sent
/// immediately.
pub async fn start_relay(upstream_url: String, policy: CorsPolicy) -> (SocketAddr, Shutdown) {
    let mut config = RelayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.url = upstream_url;
    config.cors.policy = policy;

    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Client that never pools or goes through a system proxy.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub async fn refused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start a raw TCP backend that writes whatever `f` produces and closes.
///
/// Lets tests send responses no well-behaved server would, such as a body
/// shorter than its Content-Length.
#[allow(dead_code)]
pub async fn start_raw_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = String> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        // Give the client time to send its request first.
                        tokio::time::sleep(Duration::from_millis(10)).await;
                        let raw = f().await;
                        let _ = socket.write_all(raw.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
