use auth::IdentityProvider;
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};
use validation::Validate;

use crate::{ActionError, ActionResult};

use super::cache::settings_scopes;
use super::dto::{OrganizationUserSettings, OrganizationUserSettingsPayload};

#[tracing::instrument(skip_all)]
pub async fn update_organization_user_settings(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    payload: OrganizationUserSettingsPayload,
) -> ActionResult<OrganizationUserSettings> {
    match update(access, provider, payload).await {
        Ok(settings) => ActionResult::success_with(
            settings,
            "Successfully updated your notification settings",
        ),
        Err(ActionError::Unauthorized) => ActionResult::failure(
            "You must be signed in to update notification settings",
        ),
        Err(err) => {
            tracing::warn!(%err, "settings update failed");
            ActionResult::failure("There was an error updating your notification settings")
        }
    }
}

async fn update(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    payload: OrganizationUserSettingsPayload,
) -> Result<OrganizationUserSettings, ActionError> {
    let auth = provider.current().await;
    let (Some(user_id), Some(org_id)) = (auth.user_id, auth.org_id) else {
        return Err(ActionError::Unauthorized);
    };

    let payload = payload.validate()?.inner();
    let token = provider.issue_token().await?;

    let body = serde_json::to_value(&payload).map_err(remote::TransportError::from)?;
    let path = format!("/org/{org_id}/user/{user_id}/settings");

    let settings = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::patch(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<OrganizationUserSettings>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(settings) => {
                    settings_scopes(&settings.organization_id, &settings.user_id)
                }
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    Ok(settings)
}
