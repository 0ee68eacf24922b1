use reqwest::Method;
use serde_json::Value;

use crate::support::{start, Caller};

const BASES: [&str; 5] = [
    "/api/menuitemreviews",
    "/api/ucsbdiningcommonsmenuitem",
    "/api/ucsborganizations",
    "/api/articles",
    "/api/recommendationrequests",
];

fn every_route(base: &str) -> Vec<(Method, String)> {
    let id = if base == "/api/ucsborganizations" {
        "orgcode=ZPR"
    } else {
        "id=7"
    };
    vec![
        (Method::GET, format!("{base}/all")),
        (Method::GET, format!("{base}?{id}")),
        (Method::POST, format!("{base}/post")),
        (Method::PUT, format!("{base}?{id}")),
        (Method::DELETE, format!("{base}?{id}")),
    ]
}

#[tokio::test]
async fn logged_out_users_are_forbidden_everywhere() {
    let server = start().await;

    for base in BASES {
        for (method, path) in every_route(base) {
            let resp = server
                .request(method.clone(), &path, Caller::Anonymous)
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 403, "{method} {path}");
            assert!(resp.text().await.unwrap().is_empty());
        }
    }

    assert_eq!(server.calls().total(), 0);
}

#[tokio::test]
async fn regular_users_cannot_write_admin_resources() {
    let server = start().await;

    for base in &BASES[1..] {
        for (method, path) in every_route(base).into_iter().skip(2) {
            let resp = server
                .request(method.clone(), &path, Caller::User)
                .send()
                .await
                .unwrap();
            assert_eq!(resp.status(), 403, "{method} {path}");
        }
    }

    assert_eq!(server.calls().total(), 0);
}

#[tokio::test]
async fn logged_in_users_can_list() {
    let server = start().await;

    for base in BASES {
        let resp = server
            .get(&format!("{base}/all"), Caller::User)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body, Value::Array(vec![]));
    }

    assert_eq!(server.calls().find_all(), 5);
}

#[tokio::test]
async fn user_without_roles_is_forbidden() {
    let server = start().await;

    let resp = server
        .get("/api/articles/all", Caller::Anonymous)
        .header(campus_crud::auth::USER_HEADER, "nobody@ucsb.edu")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
    assert_eq!(server.calls().total(), 0);
}

#[tokio::test]
async fn undeclared_routes_are_forbidden() {
    let server = start().await;

    let resp = server
        .get("/api/students/all", Caller::Admin)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);

    let resp = server
        .request(Method::PATCH, "/api/articles?id=1", Caller::Admin)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn health_is_public() {
    let server = start().await;

    let resp = server.get("/health", Caller::Anonymous).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["resources"].as_array().unwrap().len(), 5);
}
