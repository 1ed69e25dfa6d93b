use auth::IdentityProvider;
use cache::DashCache;
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};

use super::cache::{resume_scopes, user_scopes};
use super::dto::{User, UserResume};

/// Full profile of the signed-in user; `None` when signed out or when the
/// remote is unreachable.
#[tracing::instrument(skip_all)]
pub async fn get_current_user(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
) -> Option<User> {
    let user_id = provider.current().await.user_id?;
    let token = provider.issue_token().await.ok();

    let fetched = access
        .read(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::get("/user/me").maybe_bearer(token))
                    .await?;
                let envelope: Envelope<User> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "user__from__id",
            user_id.clone(),
            |_: &Option<User>| user_scopes(&user_id),
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(user) => user,
        Err(err) => {
            tracing::warn!(%err, "user fetch failed");
            None
        }
    }
}

#[tracing::instrument(skip_all, fields(%user_id))]
pub async fn get_user_resume(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    user_id: &str,
) -> Option<UserResume> {
    let token = provider.issue_token().await.ok();
    let path = format!("/user/{user_id}/resume");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<UserResume> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "user_resume__from__user_id",
            user_id.to_string(),
            |_: &Option<UserResume>| resume_scopes(user_id),
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(resume) => resume,
        Err(err) => {
            tracing::warn!(%err, "resume fetch failed");
            None
        }
    }
}
