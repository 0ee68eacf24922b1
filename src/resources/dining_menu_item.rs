use serde::{Deserialize, Serialize};

use super::fields;
use crate::record::Record;

/// An item served at a dining-commons station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiningCommonsMenuItem {
    #[serde(default, deserialize_with = "fields::null_as_default")]
    pub id: i64,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

/// Query parameters for `POST /api/ucsbdiningcommonsmenuitem/post`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiningCommonsMenuItem {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Record for DiningCommonsMenuItem {
    const COLLECTION: &'static str = "ucsbdiningcommonsmenuitem";
    const TYPE_NAME: &'static str = "UCSBDiningCommonsMenuItem";
    const LABEL: &'static str = "UCSBDiningCommonsMenuItem";
    type Key = i64;
    type Create = NewDiningCommonsMenuItem;

    fn key(&self) -> Option<i64> {
        (self.id != 0).then_some(self.id)
    }

    fn set_key(&mut self, key: i64) {
        self.id = key;
    }

    fn from_create(params: NewDiningCommonsMenuItem) -> Self {
        Self {
            id: 0,
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        *self = Self {
            id: self.id,
            ..incoming
        };
    }
}
