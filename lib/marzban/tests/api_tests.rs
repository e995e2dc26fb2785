//! Integration tests for the typed panel operations.

use std::collections::BTreeMap;

use assert2::{check, let_assert};
use marzban::models::{
    NodeCreate, ProxyHost, UserTemplateRequest, UserTemplatesQuery, UsersResponse,
};
use marzban::prelude::*;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

fn authenticated(server: &MockServer) -> MarzbanClient {
    MarzbanClient::new(server.uri())
        .expect("client")
        .with_token("abc123")
}

fn user_json(username: &str, subscription_url: &str) -> Value {
    json!({
        "username": username,
        "status": "active",
        "used_traffic": 1024,
        "proxies": {"vless": {}, "vmess": {}},
        "inbounds": {
            "vless": ["VLESS TCP REALITY"],
            "vmess": ["VMess TCP", "VMess WS"]
        },
        "subscription_url": subscription_url,
        "links": []
    })
}

#[tokio::test]
async fn test_create_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user"))
        .and(header("authorization", "Bearer abc123"))
        .and(body_json(json!({
            "username": "alice",
            "proxies": {"vless": {}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("alice", "/sub/x")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = authenticated(&mock_server)
        .create_user(&UserCreate::new("alice", ["vless"]))
        .await
        .expect("created");

    check!(user.username == "alice");
    check!(user.status == UserStatus::Active);
}

#[tokio::test]
async fn test_user_conflict() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"detail": "User already exists"})),
        )
        .mount(&mock_server)
        .await;

    let err = authenticated(&mock_server)
        .create_user(&UserCreate::new("alice", ["vless"]))
        .await
        .expect_err("conflict");

    check!(err.is_conflict());
    check!(err.status() == Some(409));
}

#[tokio::test]
async fn test_subscription_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(user_json("alice", "https://panel.example.com/sub/abc")),
        )
        .mount(&mock_server)
        .await;

    let url = authenticated(&mock_server)
        .user_subscription_url("alice")
        .await
        .expect("url");

    check!(url == "https://panel.example.com/sub/abc");
}

#[tokio::test]
async fn test_empty_subscription_url_is_semantic_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("bob", "")))
        .mount(&mock_server)
        .await;

    let err = authenticated(&mock_server)
        .user_subscription_url("bob")
        .await
        .expect_err("empty url");

    check!(err.kind() == ErrorKind::Semantic);
    check!(err.to_string().contains("No subscription URL found"));
}

#[tokio::test]
async fn test_user_inbounds_are_flattened() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json("alice", "/sub/x")))
        .mount(&mock_server)
        .await;

    let tags = authenticated(&mock_server)
        .user_inbounds("alice")
        .await
        .expect("inbounds");

    check!(tags == ["VLESS TCP REALITY", "VMess TCP", "VMess WS"]);
}

#[tokio::test]
async fn test_users_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(query_param("limit", "2"))
        .and(query_param("status", "on_hold"))
        .and(query_param("username", "alice"))
        .and(query_param("username", "bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "users": [user_json("alice", "/sub/a"), user_json("bob", "/sub/b")],
            "total": 7
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = UsersQuery {
        limit: Some(2),
        username: vec!["alice".to_string(), "bob".to_string()],
        status: Some(UserStatus::OnHold),
        ..UsersQuery::default()
    };
    let UsersResponse { users, total } = authenticated(&mock_server)
        .users(&query)
        .await
        .expect("users");

    check!(total == 7);
    check!(users.len() == 2);

    let requests = mock_server.received_requests().await.expect("recording");
    let_assert!([request] = requests.as_slice());
    check!(request.url.query_pairs().all(|(name, _)| name != "offset"));
}

#[tokio::test]
async fn test_expired_users_window() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/users/expired"))
        .and(query_param("expired_before", "2024-01-01T00:00:00"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["old1", "old2"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let removed = authenticated(&mock_server)
        .delete_expired_users(&ExpiredUsersQuery {
            expired_before: Some("2024-01-01T00:00:00".to_string()),
            ..ExpiredUsersQuery::default()
        })
        .await
        .expect("deleted");

    check!(removed == ["old1", "old2"]);
}

#[tokio::test]
async fn test_nodes_usage_range() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/nodes/usage"))
        .and(query_param("start", "2024-01-01"))
        .and(query_param("end", "2024-02-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "usages": [
                {"node_id": null, "node_name": "Master", "uplink": 10, "downlink": 20},
                {"node_id": 2, "node_name": "edge", "uplink": 5, "downlink": 6}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let usage = authenticated(&mock_server)
        .nodes_usage(&UsageRange::between("2024-01-01", "2024-02-01"))
        .await
        .expect("usage");

    check!(usage.usages.len() == 2);
    check!(usage.usages[0].node_id.is_none());
    check!(usage.usages[1].downlink == 6);
}

#[tokio::test]
async fn test_add_node_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/node"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "name": "edge",
            "address": "10.0.0.4",
            "port": 62050,
            "api_port": 62051,
            "status": "connecting"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let node = authenticated(&mock_server)
        .add_node(&NodeCreate::new("edge", "10.0.0.4"))
        .await
        .expect("node");

    check!(node.id == 4);

    let requests = mock_server.received_requests().await.expect("recording");
    let_assert!([request] = requests.as_slice());
    let sent: Value = serde_json::from_slice(&request.body).expect("json body");
    check!(sent["port"] == json!(62050));
    check!(sent["api_port"] == json!(62051));
}

#[tokio::test]
async fn test_admins_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admins"))
        .and(query_param("username", "ro"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"username": "root", "is_sudo": true}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let admins = authenticated(&mock_server)
        .admins(&AdminsQuery {
            username: Some("ro".to_string()),
            ..AdminsQuery::default()
        })
        .await
        .expect("admins");

    let_assert!([admin] = admins.as_slice());
    check!(admin.username == "root");
}

#[tokio::test]
async fn test_unit_operations_ignore_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/core/restart"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = authenticated(&mock_server);
    client.remove_user("alice").await.expect("removed");
    client.restart_core().await.expect("restarted");
}

#[tokio::test]
async fn test_modify_hosts_keeps_unknown_fields() {
    let mock_server = MockServer::start().await;
    let hosts = json!({
        "VLESS TCP REALITY": [{
            "remark": "{USERNAME}",
            "address": "{SERVER_IP}",
            "port": null,
            "sni": null,
            "host": null,
            "path": null,
            "security": "inbound_default"
        }]
    });

    Mock::given(method("PUT"))
        .and(path("/api/hosts"))
        .and(body_json(&hosts))
        .respond_with(ResponseTemplate::new(200).set_body_json(&hosts))
        .expect(1)
        .mount(&mock_server)
        .await;

    let parsed: BTreeMap<String, Vec<ProxyHost>> =
        serde_json::from_value(hosts.clone()).expect("hosts");
    let echoed = authenticated(&mock_server)
        .modify_hosts(&parsed)
        .await
        .expect("modified");

    check!(echoed == parsed);
}

#[tokio::test]
async fn test_subscription_is_anonymous_with_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sub/tok3n/"))
        .and(header("user-agent", "clash-verge/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("proxies: []"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let content = authenticated(&mock_server)
        .user_subscription("tok3n", Some("clash-verge/1.0"))
        .await
        .expect("subscription");

    check!(content == "proxies: []");

    let requests = mock_server.received_requests().await.expect("recording");
    let_assert!([request] = requests.as_slice());
    check!(!request.headers.contains_key("authorization"));
}

#[tokio::test]
async fn test_subscription_usage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sub/tok3n/usage"))
        .and(query_param("start", "2024-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "username": "alice",
            "usages": [{"node_id": null, "node_name": "Master", "used_traffic": 42}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let range = UsageRange {
        start: Some("2024-03-01".to_string()),
        end: None,
    };
    let usage = MarzbanClient::new(mock_server.uri())
        .expect("client")
        .user_subscription_usage("tok3n", &range)
        .await
        .expect("usage");

    check!(usage.username == "alice");
    check!(usage.usages[0].used_traffic == 42);
}

#[tokio::test]
async fn test_admin_usage_is_a_number() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/admin/usage/root"))
        .respond_with(ResponseTemplate::new(200).set_body_string("123456789"))
        .mount(&mock_server)
        .await;

    let used = authenticated(&mock_server)
        .admin_usage("root")
        .await
        .expect("usage");

    check!(used == 123_456_789);
}

#[tokio::test]
async fn test_reset_and_revoke_accept_empty_body() {
    let mock_server = MockServer::start().await;

    for route in [
        "/api/user/alice/reset",
        "/api/user/alice/revoke_sub",
        "/api/admin/usage/reset/root",
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let client = authenticated(&mock_server);
    client
        .reset_user_data_usage("alice")
        .await
        .expect("reset");
    client
        .revoke_user_subscription("alice")
        .await
        .expect("revoked");
    client.reset_admin_usage("root").await.expect("admin reset");
}

#[tokio::test]
async fn test_missing_subscription_url_is_semantic_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"username": "alice"})))
        .mount(&mock_server)
        .await;

    let err = authenticated(&mock_server)
        .user_subscription_url("alice")
        .await
        .expect_err("no url");

    check!(err.kind() == ErrorKind::Semantic);
}

#[tokio::test]
async fn test_inbounds_read_from_partial_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user/alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "inbounds": {"trojan": ["Trojan WS"]}
        })))
        .mount(&mock_server)
        .await;

    let tags = authenticated(&mock_server)
        .user_inbounds("alice")
        .await
        .expect("inbounds");

    check!(tags == ["Trojan WS"]);
}

fn template_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "data_limit": 10_737_418_240_u64,
        "expire_duration": 2_592_000,
        "inbounds": {"vless": ["VLESS TCP REALITY"]}
    })
}

#[tokio::test]
async fn test_user_templates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/user_template"))
        .and(query_param("limit", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([template_json(1, "monthly")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/user_template/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(template_json(1, "monthly")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = authenticated(&mock_server);

    let templates = client
        .user_templates(&UserTemplatesQuery {
            limit: Some(5),
            ..UserTemplatesQuery::default()
        })
        .await
        .expect("templates");
    let_assert!([listed] = templates.as_slice());
    check!(listed.name.as_deref() == Some("monthly"));

    let template = client.user_template(1).await.expect("template");
    check!(template.expire_duration == Some(2_592_000));
    check!(template.inbounds["vless"] == ["VLESS TCP REALITY"]);
}

#[tokio::test]
async fn test_user_template_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/user_template"))
        .and(body_json(json!({"name": "weekly", "expire_duration": 604_800})))
        .respond_with(ResponseTemplate::new(200).set_body_json(template_json(2, "weekly")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/user_template/2"))
        .and(body_json(json!({"name": "weekly-plus"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(template_json(2, "weekly-plus")))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/user_template/2"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = authenticated(&mock_server);

    let created = client
        .add_user_template(&UserTemplateRequest {
            name: Some("weekly".to_string()),
            expire_duration: Some(604_800),
            ..UserTemplateRequest::default()
        })
        .await
        .expect("created");
    check!(created.id == 2);

    let modified = client
        .modify_user_template(
            created.id,
            &UserTemplateRequest {
                name: Some("weekly-plus".to_string()),
                ..UserTemplateRequest::default()
            },
        )
        .await
        .expect("modified");
    check!(modified.name.as_deref() == Some("weekly-plus"));

    client
        .remove_user_template(created.id)
        .await
        .expect("removed");
}
