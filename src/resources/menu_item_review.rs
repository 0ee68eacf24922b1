use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::fields;
use crate::record::Record;

/// A student's review of a dining-commons menu item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default, deserialize_with = "fields::null_as_default")]
    pub id: i64,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(with = "fields::timestamp")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

/// Query parameters for `POST /api/menuitemreviews/post`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItemReview {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(with = "fields::timestamp")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Record for MenuItemReview {
    const COLLECTION: &'static str = "menuitemreviews";
    const TYPE_NAME: &'static str = "MenuItemReviews";
    const LABEL: &'static str = "MenuItemReview";
    type Key = i64;
    type Create = NewMenuItemReview;

    fn key(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn from_create(params: NewMenuItemReview) -> Self {
        Self {
            id: 0,
            item_id: params.item_id,
            reviewer_email: params.reviewer_email,
            stars: params.stars,
            date_reviewed: params.date_reviewed,
            comments: params.comments,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        *self = Self {
            id: self.id,
            ..incoming
        };
    }
}
