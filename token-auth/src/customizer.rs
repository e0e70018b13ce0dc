use crate::jwt::Claims;
use crate::user::AuthUser;

/// Host hook that enriches the claim set of a login before it is signed.
///
/// Runs after `sub` and `username` are set. Returning an error aborts the
/// login. Implemented for any matching closure.
///
/// `exp` is always overwritten at signing time; removing `sub` or `username`
/// is possible but not something callers should depend on.
pub trait ClaimsCustomizer: Send + Sync {
    fn customize(&self, user: &dyn AuthUser, claims: &mut Claims) -> anyhow::Result<()>;
}

impl<F> ClaimsCustomizer for F
where
    F: Fn(&dyn AuthUser, &mut Claims) -> anyhow::Result<()> + Send + Sync,
{
    fn customize(&self, user: &dyn AuthUser, claims: &mut Claims) -> anyhow::Result<()> {
        self(user, claims)
    }
}
