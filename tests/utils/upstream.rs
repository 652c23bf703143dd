use serde_json::{json, Value};
use streamhub::StreamHub;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SECRET: &str = "test-secret";

/// A [`StreamHub`] talking to `server`.
pub fn client(server: &MockServer) -> StreamHub {
    StreamHub::builder()
        .api_base(server.uri())
        .api_secret(SECRET)
        .build()
}

/// A successful `{ ok, data }` response.
pub fn ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "statusCode": 200,
        "statusMessage": "OK",
        "message": "",
        "ok": true,
        "data": data
    }))
}

pub fn not_ok(message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "ok": false, "message": message }))
}

/// Mount a `GET <route>` mock which expects the api secret and is called exactly `calls` times.
pub async fn mount(server: &MockServer, route: &str, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(header("X-API-Key", SECRET))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
