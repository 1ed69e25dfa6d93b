use auth::IdentityProvider;
use cache::DashCache;
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};

use super::cache::{org_scopes, settings_scopes};
use super::dto::{Organization, OrganizationUserSettings};

#[tracing::instrument(skip_all, fields(%org_id))]
pub async fn get_organization(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    org_id: &str,
) -> Option<Organization> {
    let token = provider.issue_token().await.ok();
    let path = format!("/org/{org_id}");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<Organization> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "organization__from__id",
            org_id.to_string(),
            |_: &Option<Organization>| org_scopes(org_id),
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(organization) => organization,
        Err(err) => {
            tracing::warn!(%err, "organization fetch failed");
            None
        }
    }
}

#[tracing::instrument(skip_all, fields(%org_id, %user_id))]
pub async fn get_organization_user_settings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    org_id: &str,
    user_id: &str,
) -> Option<OrganizationUserSettings> {
    let token = provider.issue_token().await.ok();
    let path = format!("/org/{org_id}/user/{user_id}/settings");

    let fetched = access
        .read(
            |transport| async move {
                let value = transport.execute(ApiRequest::get(path).maybe_bearer(token)).await?;
                let envelope: Envelope<OrganizationUserSettings> = serde_json::from_value(value)?;
                Ok(envelope.into_option())
            },
            "org_user_settings__from__org_and_user",
            (org_id.to_string(), user_id.to_string()),
            |_: &Option<OrganizationUserSettings>| settings_scopes(org_id, user_id),
            DashCache::new,
        )
        .await;

    match fetched {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(%err, "settings fetch failed");
            None
        }
    }
}
