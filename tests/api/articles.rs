use campus_crud::resources::Article;
use serde_json::{json, Value};

use crate::support::{ldt, start, Caller};

fn article(id: i64, title: &str, url: &str) -> Article {
    Article {
        id,
        title: title.into(),
        url: url.into(),
        explanation: "This is an article.".into(),
        email: "article@ucsb.edu".into(),
        date_added: ldt("2022-01-03T00:00:00"),
    }
}

#[tokio::test]
async fn admin_can_post() {
    let server = start().await;

    let resp = server
        .post("/api/articles/post", Caller::Admin)
        .query(&[
            ("title", "FirstArticle"),
            ("url", "https://google.com/"),
            ("explanation", "This is an article."),
            ("email", "article@ucsb.edu"),
            ("dateAdded", "2022-01-03T00:00:00"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::to_value(article(1, "FirstArticle", "https://google.com/")).unwrap()
    );
    assert_eq!(server.calls().save(), 1);
}

#[tokio::test]
async fn bad_timestamp_is_a_bad_request() {
    let server = start().await;

    let resp = server
        .post("/api/articles/post", Caller::Admin)
        .query(&[
            ("title", "FirstArticle"),
            ("url", "https://google.com/"),
            ("explanation", "This is an article."),
            ("email", "article@ucsb.edu"),
            ("dateAdded", "January 3rd"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    assert_eq!(server.calls().save(), 0);
}

#[tokio::test]
async fn list_and_get() {
    let server = start().await;
    let first = server.seed(article(0, "FirstArticle", "https://google.com/"));
    let second = server.seed(article(0, "SecondArticle", "https://baidu.com/"));

    let resp = server.get("/api/articles/all", Caller::User).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::to_value(vec![&first, &second]).unwrap());

    let resp = server
        .get(&format!("/api/articles?id={}", second.id), Caller::User)
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::to_value(&second).unwrap());
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let server = start().await;
    let stored = server.seed(article(0, "FirstArticle", "https://google.com/"));
    let path = format!("/api/articles?id={}", stored.id);

    let resp = server.delete(&path, Caller::Admin).send().await.unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Article with id 1 deleted" }));

    let resp = server.get(&path, Caller::User).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Articles with id 1 not found");
}

#[tokio::test]
async fn post_accepts_minute_precision_timestamps() {
    let server = start().await;

    let resp = server
        .post("/api/articles/post", Caller::Admin)
        .query(&[
            ("title", "FirstArticle"),
            ("url", "https://google.com/"),
            ("explanation", "This is an article."),
            ("email", "article@ucsb.edu"),
            ("dateAdded", "2022-01-03T00:00"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["dateAdded"], "2022-01-03T00:00:00");
    assert_eq!(
        server.stored::<Article>(),
        vec![article(1, "FirstArticle", "https://google.com/")]
    );
}

#[tokio::test]
async fn put_accepts_null_id_and_minute_precision() {
    let server = start().await;
    server.seed(article(0, "FirstArticle", "https://google.com/"));

    let resp = server
        .put("/api/articles?id=1", Caller::Admin)
        .json(&json!({
            "id": null,
            "title": "Renamed",
            "url": "https://ucsb.edu/",
            "explanation": "This is an article.",
            "email": "article@ucsb.edu",
            "dateAdded": "2022-02-14T09:30"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["dateAdded"], "2022-02-14T09:30:00");

    let stored = server.stored::<Article>();
    assert_eq!(stored[0].date_added, ldt("2022-02-14T09:30:00"));
    assert_eq!(stored[0].title, "Renamed");
}
