use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::fields;
use crate::record::Record;

/// A news article shared by a student, with the date it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "fields::null_as_default")]
    pub id: i64,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(with = "fields::timestamp")]
    pub date_added: NaiveDateTime,
}

/// Query parameters for `POST /api/articles/post`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewArticle {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(with = "fields::timestamp")]
    pub date_added: NaiveDateTime,
}

impl Record for Article {
    const COLLECTION: &'static str = "articles";
    const TYPE_NAME: &'static str = "Articles";
    const LABEL: &'static str = "Article";
    type Key = i64;
    type Create = NewArticle;

    fn key(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn from_create(params: NewArticle) -> Self {
        Self {
            id: 0,
            title: params.title,
            url: params.url,
            explanation: params.explanation,
            email: params.email,
            date_added: params.date_added,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        *self = Self {
            id: self.id,
            ..incoming
        };
    }
}
