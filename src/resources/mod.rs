//! The campus resources served by this API and the roles each one requires.
//!
//! | Resource | Base route | Reads | Writes |
//! |---|---|---|---|
//! | menu item reviews | `/api/menuitemreviews` | USER | USER |
//! | dining menu items | `/api/ucsbdiningcommonsmenuitem` | USER | ADMIN |
//! | organizations | `/api/ucsborganizations` | USER | ADMIN |
//! | articles | `/api/articles` | USER | ADMIN |
//! | recommendation requests | `/api/recommendationrequests` | USER | ADMIN |

mod article;
mod dining_menu_item;
mod fields;
mod menu_item_review;
mod organization;
mod recommendation_request;

pub use article::{Article, NewArticle};
pub use dining_menu_item::{DiningCommonsMenuItem, NewDiningCommonsMenuItem};
pub use menu_item_review::{MenuItemReview, NewMenuItemReview};
pub use organization::{NewOrganization, Organization};
pub use recommendation_request::{NewRecommendationRequest, RecommendationRequest};

use crate::api::Api;
use crate::auth::{Access, CrudRoles, Role};
use crate::store::RecordStore;

pub const MENU_ITEM_REVIEWS: &str = "/api/menuitemreviews";
pub const DINING_MENU_ITEMS: &str = "/api/ucsbdiningcommonsmenuitem";
pub const ORGANIZATIONS: &str = "/api/ucsborganizations";
pub const ARTICLES: &str = "/api/articles";
pub const RECOMMENDATION_REQUESTS: &str = "/api/recommendationrequests";

fn users_read_admins_write() -> CrudRoles {
    CrudRoles::split(Access::role(Role::User), Access::role(Role::Admin))
}

/// Mount every campus resource on `api` with its declared roles.
pub fn register<S: RecordStore + 'static>(api: Api<S>) -> Api<S> {
    api.resource::<MenuItemReview>(
        MENU_ITEM_REVIEWS,
        CrudRoles::uniform(Access::role(Role::User)),
    )
    .resource::<DiningCommonsMenuItem>(DINING_MENU_ITEMS, users_read_admins_write())
    .resource::<Organization>(ORGANIZATIONS, users_read_admins_write())
    .resource::<Article>(ARTICLES, users_read_admins_write())
    .resource::<RecommendationRequest>(RECOMMENDATION_REQUESTS, users_read_admins_write())
}
