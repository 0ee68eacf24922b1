//! The same API over a SQLite file instead of memory.

use campus_crud::auth::{ROLES_HEADER, USER_HEADER};
use campus_crud::SqliteRecordStore;
use serde_json::{json, Value};

async fn start(store: SqliteRecordStore) -> String {
    let app = campus_crud::app(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn crud_round_trip_over_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let base = start(SqliteRecordStore::open(dir.path().join("campus.db")).unwrap()).await;
    let client = reqwest::Client::new();
    let admin = |builder: reqwest::RequestBuilder| {
        builder
            .header(USER_HEADER, "admin@ucsb.edu")
            .header(ROLES_HEADER, "ROLE_ADMIN,ROLE_USER")
    };

    let resp = admin(client.post(format!("{base}/api/ucsbdiningcommonsmenuitem/post")))
        .query(&[("diningCommonsCode", "DLG"), ("name", "Burger"), ("station", "Grill")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let created: Value = resp.json().await.unwrap();
    assert_eq!(created["id"], 1);

    let resp = admin(client.put(format!("{base}/api/ucsbdiningcommonsmenuitem?id=1")))
        .json(&json!({ "diningCommonsCode": "DLG", "name": "Veggie Burger", "station": "Grill" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = admin(client.get(format!("{base}/api/ucsbdiningcommonsmenuitem/all")))
        .send()
        .await
        .unwrap();
    let all: Value = resp.json().await.unwrap();
    assert_eq!(
        all,
        json!([{ "id": 1, "diningCommonsCode": "DLG", "name": "Veggie Burger", "station": "Grill" }])
    );

    let resp = admin(client.delete(format!("{base}/api/ucsbdiningcommonsmenuitem?id=1")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = admin(client.get(format!("{base}/api/ucsbdiningcommonsmenuitem?id=1")))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_posts_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let base = start(SqliteRecordStore::open(dir.path().join("campus.db")).unwrap()).await;
    let client = reqwest::Client::new();

    let posts = (0..8).map(|n| {
        let request = client
            .post(format!("{base}/api/menuitemreviews/post"))
            .header(USER_HEADER, "cgaucho@ucsb.edu")
            .header(ROLES_HEADER, "ROLE_USER")
            .query(&[
                ("itemId", n.to_string()),
                ("reviewerEmail", "cgaucho@ucsb.edu".to_string()),
                ("stars", "4".to_string()),
                ("dateReviewed", "2023-10-29T12:00".to_string()),
                ("comments", format!("visit {n}")),
            ]);
        tokio::spawn(async move {
            let resp = request.send().await.unwrap();
            assert_eq!(resp.status(), 200);
            resp.json::<Value>().await.unwrap()["id"].as_i64().unwrap()
        })
    });

    let mut ids = Vec::new();
    for post in posts.collect::<Vec<_>>() {
        ids.push(post.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<i64>>());
}
