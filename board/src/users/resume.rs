use auth::IdentityProvider;
use remote::{ApiRequest, Envelope, RemoteAccess, Transport};
use validation::ValidationError;

use crate::{ActionError, ActionResult};

use super::cache::resume_scopes;
use super::dto::UserResume;
use super::fetch::get_user_resume;

pub const MAX_RESUME_BYTES: u64 = 8 * 1024 * 1024;

/// Pre-upload gate run before any bytes leave the client: one PDF, 8 MiB cap.
pub fn validate_resume_file(content_type: &str, size: u64) -> Result<(), ValidationError> {
    if content_type != "application/pdf" {
        return Err(ValidationError::new("resume", "must be a PDF"));
    }
    if size > MAX_RESUME_BYTES {
        return Err(ValidationError::new("resume", "must be 8MB or smaller"));
    }
    Ok(())
}

/// What the upload collaborator hands back once the blob is durable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedResume {
    pub file_url: String,
    pub file_key: String,
}

#[derive(thiserror::Error, Debug)]
#[error("file store operation failed :: {0}")]
pub struct FileStoreError(pub String);

/// The external blob-storage collaborator. Only deletion is needed here; the
/// upload itself happens before [`finalize_resume_upload`] runs.
pub trait FileStore: Send + Sync {
    fn delete(&self, file_key: &str) -> impl Future<Output = Result<(), FileStoreError>> + Send;
}

/// Record a completed upload: remember the previous blob, point the user's
/// resume at the new file, invalidate resume reads, then delete the old blob
/// so storage holds no orphans. A failed old-blob deletion is logged but
/// does not fail the action — the new resume is already authoritative.
#[tracing::instrument(skip_all)]
pub async fn finalize_resume_upload(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    store: &impl FileStore,
    uploaded: UploadedResume,
) -> ActionResult<UserResume> {
    match finalize(access, provider, store, uploaded).await {
        Ok(resume) => ActionResult::success_with(resume, "Resume uploaded successfully"),
        Err(ActionError::Unauthorized) => {
            ActionResult::failure("You must be signed in to upload a resume")
        }
        Err(err) => {
            tracing::warn!(%err, "resume upload failed");
            ActionResult::failure("There was an error uploading your resume")
        }
    }
}

async fn finalize(
    access: &RemoteAccess<impl Transport>,
    provider: &impl IdentityProvider,
    store: &impl FileStore,
    uploaded: UploadedResume,
) -> Result<UserResume, ActionError> {
    let user_id = provider
        .current()
        .await
        .user_id
        .ok_or(ActionError::Unauthorized)?;

    let previous_key = get_user_resume(access, provider, &user_id)
        .await
        .and_then(|resume| resume.resume_file_key);

    let token = provider.issue_token().await?;
    let body = serde_json::json!({
        "resumeFileUrl": uploaded.file_url,
        "resumeFileKey": uploaded.file_key,
    });
    let path = format!("/user/{user_id}/resume");

    let resume = access
        .write(
            |transport| async move {
                let value = transport
                    .execute(ApiRequest::put(path).bearer(token).json(body))
                    .await?;
                Ok(serde_json::from_value::<Envelope<UserResume>>(value)?)
            },
            |envelope| match envelope {
                Envelope::Success(resume) => resume_scopes(&resume.user_id),
                Envelope::Failure { .. } => vec![],
            },
        )
        .await?
        .into_result()?;

    if let Some(key) = previous_key {
        if let Err(err) = store.delete(&key).await {
            tracing::warn!(%err, "previous resume blob not deleted");
        }
    }

    Ok(resume)
}
