//! Load testing for the relay.

use std::time::{Duration, Instant};

use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use gp_relay::config::CorsPolicy;

mod common;

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    const REQUESTS: u64 = 200;

    let upstream = MockServer::start().await;
    Mock::given(matchers::method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"[{"OBJECT_NAME":"STARLINK-1007"}]"#)
                .set_delay(Duration::from_millis(20)),
        )
        .expect(REQUESTS)
        .mount(&upstream)
        .await;

    let (addr, shutdown) =
        common::start_relay(common::feed_url(&upstream.uri()), CorsPolicy::Permissive).await;

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let url = format!("http://{}/gp", addr);
    let start = Instant::now();

    let mut handles = Vec::new();
    for _ in 0..REQUESTS {
        let client = client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            let res = client.get(&url).send().await.unwrap();
            let status = res.status();
            let body = res.text().await.unwrap();
            (status, body)
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, 200);
        assert_eq!(body, r#"[{"OBJECT_NAME":"STARLINK-1007"}]"#);
    }

    let elapsed = start.elapsed();
    println!("{} relayed requests in {:?}", REQUESTS, elapsed);
    // Serialized handling would take REQUESTS * 20ms = 4s.
    assert!(elapsed < Duration::from_secs(4));

    shutdown.trigger();
}
