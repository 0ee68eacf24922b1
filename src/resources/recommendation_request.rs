use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::fields;
use crate::record::Record;

/// A student's request for a letter of recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "fields::null_as_default")]
    pub id: i64,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(with = "fields::timestamp")]
    pub date_requested: NaiveDateTime,
    #[serde(with = "fields::timestamp")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

/// Query parameters for `POST /api/recommendationrequests/post`.
///
/// The completion flag arrives as `doneBool`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendationRequest {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(with = "fields::timestamp")]
    pub date_requested: NaiveDateTime,
    #[serde(with = "fields::timestamp")]
    pub date_needed: NaiveDateTime,
    #[serde(rename = "doneBool")]
    pub done: bool,
}

impl Record for RecommendationRequest {
    const COLLECTION: &'static str = "recommendationrequests";
    const TYPE_NAME: &'static str = "RecommendationRequest";
    const LABEL: &'static str = "RecommendationRequest";
    type Key = i64;
    type Create = NewRecommendationRequest;

    fn key(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn from_create(params: NewRecommendationRequest) -> Self {
        Self {
            id: 0,
            requester_email: params.requester_email,
            professor_email: params.professor_email,
            explanation: params.explanation,
            date_requested: params.date_requested,
            date_needed: params.date_needed,
            done: params.done,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        *self = Self {
            id: self.id,
            ..incoming
        };
    }
}
