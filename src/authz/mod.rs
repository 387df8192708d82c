//! The two authorization policies. Movie/Game routes are catalog data behind
//! an admin-only gate; Comment/Wishlist/FavoriteMovies routes are user content
//! gated on the resource's owner field. Handlers pick exactly one policy per
//! route so the security-relevant branching stays auditable.

use uuid::Uuid;

use crate::error::ApiError;

/// Caller identity resolved from the bearer token by the auth extractor.
#[derive(Clone, Debug)]
pub struct Caller {
    pub id: Uuid,
    pub email: String,
    pub is_admin: bool,
}

/// Admin gate: grants mutation rights on globally managed catalog data.
/// Ownership is never consulted.
pub fn require_admin(caller: &Caller) -> Result<(), ApiError> {
    if caller.is_admin {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "administrator access is required to change catalog data",
        ))
    }
}

/// Ownership gate: the caller must be the stored owner. Admins override.
/// Evaluated only after the resource has been fetched, so a missing id is
/// always reported as NotFound before this check can fire.
pub fn require_ownership(caller: &Caller, owner: Uuid) -> Result<(), ApiError> {
    if caller.id == owner || caller.is_admin {
        Ok(())
    } else {
        Err(ApiError::forbidden("you do not own this resource"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caller(is_admin: bool) -> Caller {
        Caller {
            id: Uuid::new_v4(),
            email: "user@example.com".into(),
            is_admin,
        }
    }

    #[test]
    fn owner_may_mutate_own_resource() {
        let c = caller(false);
        assert!(require_ownership(&c, c.id).is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let c = caller(false);
        let err = require_ownership(&c, Uuid::new_v4()).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[test]
    fn admin_overrides_ownership() {
        let c = caller(true);
        assert!(require_ownership(&c, Uuid::new_v4()).is_ok());
    }

    #[test]
    fn admin_gate_ignores_ownership_entirely() {
        assert!(require_admin(&caller(true)).is_ok());
        let err = require_admin(&caller(false)).unwrap_err();
        assert_eq!(err.status_code(), 403);
    }
}
