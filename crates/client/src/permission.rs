//! Authorization predicate for UI gating.
//!
//! A [`Requirement`] declares what a piece of UI demands of the session; the
//! rendering layer evaluates [`is_authorized`] on every render against a
//! [`Grants`] snapshot. Keeping the policy a pure function means a gate is
//! re-checked whenever the session changes, instead of being decided once at
//! element attach time.

use thiserror::Error;

use repairhub_core::SUPER_ADMIN_USER_TYPE;

/// User-type criterion: a single accepted type or a set of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTypeReq {
    One(i32),
    AnyOf(Vec<i32>),
}

impl UserTypeReq {
    fn accepts(&self, user_type: Option<i32>) -> bool {
        match (self, user_type) {
            (Self::One(required), Some(actual)) => *required == actual,
            (Self::AnyOf(required), Some(actual)) => required.contains(&actual),
            (_, None) => false,
        }
    }
}

/// Declaring a requirement that checks nothing is a programming error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequirementError {
    #[error("requirement must declare at least one criterion (permission, user type, or brand)")]
    Empty,
}

/// What a gated piece of UI demands of the current session.
///
/// Omitted criteria are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    permission: Option<i32>,
    user_type: Option<UserTypeReq>,
    brand_name: Option<String>,
}

impl Requirement {
    /// Build a requirement from its three optional criteria.
    ///
    /// # Errors
    ///
    /// Returns [`RequirementError::Empty`] when every criterion is omitted:
    /// a gate that checks nothing is a usage error and is surfaced
    /// synchronously at construction.
    pub fn new(
        permission: Option<i32>,
        user_type: Option<UserTypeReq>,
        brand_name: Option<String>,
    ) -> Result<Self, RequirementError> {
        if permission.is_none() && user_type.is_none() && brand_name.is_none() {
            return Err(RequirementError::Empty);
        }
        Ok(Self {
            permission,
            user_type,
            brand_name,
        })
    }

    /// Requirement checking a single permission id.
    #[must_use]
    pub const fn permission(id: i32) -> Self {
        Self {
            permission: Some(id),
            user_type: None,
            brand_name: None,
        }
    }

    /// Requirement checking a single user type.
    #[must_use]
    pub const fn user_type(user_type: i32) -> Self {
        Self {
            permission: None,
            user_type: Some(UserTypeReq::One(user_type)),
            brand_name: None,
        }
    }
}

/// Snapshot of the session fields authorization is decided on.
///
/// An anonymous session yields the default: no permissions, no user type, no
/// brand - so any specified criterion fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grants {
    pub permissions: Vec<i32>,
    pub user_type: Option<i32>,
    pub brand_name: Option<String>,
}

/// Decide whether the session satisfies the requirement.
///
/// Criteria are checked in order (permission, user type, brand name); the
/// brand check is skipped for the super-admin user type.
#[must_use]
pub fn is_authorized(grants: &Grants, requirement: &Requirement) -> bool {
    if let Some(required) = requirement.permission {
        if !grants.permissions.contains(&required) {
            tracing::debug!(required, "missing permission");
            return false;
        }
    }

    if let Some(required) = &requirement.user_type {
        if !required.accepts(grants.user_type) {
            tracing::debug!(?required, actual = ?grants.user_type, "user type mismatch");
            return false;
        }
    }

    if grants.user_type != Some(SUPER_ADMIN_USER_TYPE) {
        if let Some(required) = &requirement.brand_name {
            if grants.brand_name.as_deref() != Some(required.as_str()) {
                tracing::debug!(
                    required,
                    actual = ?grants.brand_name,
                    "brand name mismatch"
                );
                return false;
            }
        }
    }

    true
}
