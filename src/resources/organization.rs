use serde::{Deserialize, Serialize};

use super::fields;
use crate::record::Record;

/// A registered student organization, keyed by its org code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(default, deserialize_with = "fields::null_as_default")]
    pub orgcode: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

/// Query parameters for `POST /api/ucsborganizations/post`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrganization {
    pub orgcode: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Record for Organization {
    const COLLECTION: &'static str = "ucsborganizations";
    const TYPE_NAME: &'static str = "UCSBOrganizations";
    const LABEL: &'static str = "UCSBOrganization";
    const ID_PARAM: &'static str = "orgcode";
    type Key = String;
    type Create = NewOrganization;

    fn key(&self) -> Option<String> {
        (!self.orgcode.is_empty()).then(|| self.orgcode.clone())
    }

    fn set_key(&mut self, key: String) {
        self.orgcode = key;
    }

    fn from_create(params: NewOrganization) -> Self {
        Self {
            orgcode: params.orgcode,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.org_translation_short = incoming.org_translation_short;
        self.org_translation = incoming.org_translation;
        self.inactive = incoming.inactive;
    }
}
