use crate::{BearerToken, Permission, PlanFeature};

/// Actor context resolved for the current request. Either id may be absent:
/// a signed-out visitor has neither, a personal account has no organization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentAuth {
    pub user_id: Option<String>,
    pub org_id: Option<String>,
}

impl CurrentAuth {
    pub fn signed_in(&self) -> bool {
        self.user_id.is_some()
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TokenError {
    #[error("no authenticated actor to issue a token for")]
    NoActor,

    #[error("identity provider rejected the token request :: {0}")]
    Provider(String),
}

/// The external identity/authorization collaborator.
///
/// Capability checks are intentionally not cached anywhere: roles can change
/// between requests, so every action re-asks the provider.
pub trait IdentityProvider {
    fn current(&self) -> impl Future<Output = CurrentAuth> + Send;

    fn issue_token(&self) -> impl Future<Output = Result<BearerToken, TokenError>> + Send;

    fn has_capability(&self, permission: Permission) -> impl Future<Output = bool> + Send;

    fn has_plan_feature(&self, feature: PlanFeature) -> impl Future<Output = bool> + Send;
}
