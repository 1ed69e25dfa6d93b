mod shared;

use std::sync::{Arc, Mutex};

use auth::Permission;
use board::applications::{
    ApplicationPayload, ApplicationStage, change_application_rating, change_application_stage,
    create_application,
};
use optimistic::{Notify, OptimisticCell};
use remote::{Method, RemoteAccess};
use shared::{FakeProvider, FakeTransport, envelope, listing_json};

fn application_json(rating: Option<u8>, stage: &str) -> serde_json::Value {
    serde_json::json!({
        "jobListingId": "jl_1",
        "userId": "user_2",
        "coverLetter": "Dear team",
        "stage": stage,
        "rating": rating,
        "createdAt": "2025-02-01T00:00:00Z",
        "updatedAt": "2025-02-01T00:00:00Z",
    })
}

fn resume_json() -> serde_json::Value {
    serde_json::json!({
        "userId": "user_1",
        "resumeFileUrl": "https://files.example.com/resume.pdf",
        "resumeFileKey": "key_old",
        "aiSummary": null,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
    })
}

#[tokio::test]
async fn job_seeker_submits_an_application() {
    let provider = FakeProvider::job_seeker();
    let access = RemoteAccess::new(FakeTransport::respond_with(vec![
        envelope(resume_json()),
        envelope(listing_json("jl_1", "published", Some("2025-01-05T00:00:00Z"), false)),
        envelope(application_json(None, "applied")),
    ]));

    let result = create_application(
        &access,
        &provider,
        "jl_1",
        ApplicationPayload {
            cover_letter: Some("  Dear team  ".into()),
        },
    )
    .await;

    assert!(!result.is_error());
    assert_eq!(
        result.message(),
        Some("Your application was successfully submitted")
    );

    let calls = access.transport().calls();
    let post = calls.last().unwrap();
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.path, "/job-listings/jl_1/application");
    // trimmed before it hit the wire
    assert_eq!(
        post.body.as_ref().unwrap()["coverLetter"],
        serde_json::json!("Dear team")
    );
}

#[tokio::test]
async fn applying_without_a_resume_is_refused() {
    let provider = FakeProvider::job_seeker();
    // resume lookup comes back declined, listing lookup succeeds
    let access = RemoteAccess::new(FakeTransport::respond_with(vec![
        serde_json::json!({"success": false, "message": "no resume on file"}),
        envelope(listing_json("jl_1", "published", Some("2025-01-05T00:00:00Z"), false)),
    ]));

    let result = create_application(
        &access,
        &provider,
        "jl_1",
        ApplicationPayload { cover_letter: None },
    )
    .await;

    assert!(result.is_error());
    assert_eq!(
        result.message(),
        Some("You don't have permission to submit an application")
    );
    // both precondition reads happened, the submit never did
    assert!(access.transport().calls().iter().all(|c| c.method == Method::Get));
}

#[tokio::test]
async fn unpublished_listings_accept_no_applications() {
    let provider = FakeProvider::job_seeker();
    let access = RemoteAccess::new(FakeTransport::respond_with(vec![
        envelope(resume_json()),
        envelope(listing_json("jl_1", "draft", None, false)),
    ]));

    let result = create_application(
        &access,
        &provider,
        "jl_1",
        ApplicationPayload { cover_letter: None },
    )
    .await;

    assert!(result.is_error());
}

#[tokio::test]
async fn stage_change_patches_and_invalidates() {
    let provider = FakeProvider::employer(vec![Permission::ApplicantChangeStage], vec![]);
    let access = RemoteAccess::new(FakeTransport::respond_with(vec![envelope(
        application_json(None, "interviewed"),
    )]));

    let result = change_application_stage(
        &access,
        &provider,
        "jl_1",
        "user_2",
        ApplicationStage::Interviewed,
    )
    .await;

    assert!(!result.is_error());
    let calls = access.transport().calls();
    assert_eq!(calls[0].path, "/job-listings/jl_1/applications/user_2/stage");
    assert_eq!(
        calls[0].body.as_ref().unwrap()["stage"],
        serde_json::json!("interviewed")
    );
}

#[derive(Clone, Default)]
struct CountingNotifier {
    errors: Arc<Mutex<Vec<String>>>,
}

impl Notify for CountingNotifier {
    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[tokio::test]
async fn optimistic_rating_edit_rolls_back_on_denial() {
    let provider = FakeProvider::employer(vec![], vec![]);
    let access = RemoteAccess::new(FakeTransport::default());
    let notifier = CountingNotifier::default();

    let cell = OptimisticCell::new(Some(2u8));

    cell.submit(
        Some(5),
        async {
            change_application_rating(&access, &provider, "jl_1", "user_2", Some(5))
                .await
                .into_settlement()
        },
        &notifier,
    )
    .await;

    // denied: render reverted, one notification, nothing on the wire
    assert_eq!(cell.get(), Some(2));
    assert_eq!(
        notifier.errors.lock().unwrap().as_slice(),
        ["You don't have permission to update this application"]
    );
    assert!(access.transport().calls().is_empty());
}

#[tokio::test]
async fn optimistic_rating_edit_settles_on_success() {
    let provider = FakeProvider::employer(vec![Permission::ApplicantChangeRating], vec![]);
    let access = RemoteAccess::new(FakeTransport::respond_with(vec![envelope(
        application_json(Some(5), "applied"),
    )]));
    let notifier = CountingNotifier::default();

    let cell = OptimisticCell::new(Some(2u8));

    cell.submit(
        Some(5),
        async {
            change_application_rating(&access, &provider, "jl_1", "user_2", Some(5))
                .await
                .into_settlement()
        },
        &notifier,
    )
    .await;

    assert_eq!(cell.get(), Some(5));
    assert!(!cell.is_pending());
    assert!(notifier.errors.lock().unwrap().is_empty());
}
