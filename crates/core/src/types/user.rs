//! Authenticated user profile.

use serde::{Deserialize, Serialize};

use super::id::{BrandId, UserId};

/// User type granted every brand's resources; brand checks are skipped for it.
pub const SUPER_ADMIN_USER_TYPE: i32 = 1;

/// Profile of the authenticated user, as returned by the profile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,
    pub account: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub self_user_type: i32,
    /// Integer capability flags checked by the permission predicate.
    #[serde(default)]
    pub permissions: Vec<i32>,
    #[serde(default)]
    pub account_brand_id: Option<BrandId>,
    #[serde(default)]
    pub brand_name: Option<String>,
}
