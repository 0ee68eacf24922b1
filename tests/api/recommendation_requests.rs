use campus_crud::resources::RecommendationRequest;
use serde_json::Value;

use crate::support::{ldt, start, Caller};

fn request(id: i64, explanation: &str, done: bool) -> RecommendationRequest {
    RecommendationRequest {
        id,
        requester_email: "alsojavin".into(),
        professor_email: "javin".into(),
        explanation: explanation.into(),
        date_requested: ldt("2022-01-03T00:00:00"),
        date_needed: ldt("2022-01-03T00:00:00"),
        done,
    }
}

#[tokio::test]
async fn admin_can_post_with_done_bool() {
    let server = start().await;

    let resp = server
        .post("/api/recommendationrequests/post", Caller::Admin)
        .query(&[
            ("professorEmail", "javin"),
            ("requesterEmail", "alsojavin"),
            ("explanation", "JUSTDOITALREADY"),
            ("dateNeeded", "2022-01-03T00:00:00"),
            ("dateRequested", "2022-01-03T00:00:00"),
            ("doneBool", "false"),
        ])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::to_value(request(1, "JUSTDOITALREADY", false)).unwrap()
    );
}

#[tokio::test]
async fn regular_user_cannot_post() {
    let server = start().await;

    let resp = server
        .post("/api/recommendationrequests/post", Caller::User)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 403);
    assert_eq!(server.calls().total(), 0);
}

#[tokio::test]
async fn admin_can_mark_done() {
    let server = start().await;
    server.seed(request(0, "pwease?!", false));

    let resp = server
        .put("/api/recommendationrequests?id=1", Caller::Admin)
        .json(&request(1, "pwease?!", true))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["done"], true);
    assert!(server.stored::<RecommendationRequest>()[0].done);
}
