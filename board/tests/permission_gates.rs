mod shared;

use auth::Permission;
use board::applications::change_application_rating;
use board::job_listings::delete_job_listing;
use remote::RemoteAccess;
use shared::{FakeProvider, FakeTransport, envelope};

#[tokio::test]
async fn denied_delete_issues_no_remote_call() {
    let provider = FakeProvider::employer(vec![Permission::UpdateJobListing], vec![]);
    let access = RemoteAccess::new(FakeTransport::default());

    let result = delete_job_listing(&access, &provider, "jl_1").await;

    assert!(result.is_error());
    assert_eq!(
        result.message(),
        Some("You don't have permission to delete this job listing")
    );
    // the gate was consulted, the wire was not
    assert_eq!(provider.capability_checks(), vec![Permission::DeleteJobListing]);
    assert!(access.transport().calls().is_empty());
}

#[tokio::test]
async fn granted_delete_reaches_the_remote() {
    let provider = FakeProvider::employer(vec![Permission::DeleteJobListing], vec![]);
    let access = RemoteAccess::new(FakeTransport::respond_with(vec![envelope(
        serde_json::json!({"id": "jl_1"}),
    )]));

    let result = delete_job_listing(&access, &provider, "jl_1").await;

    assert!(!result.is_error());
    let calls = access.transport().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, remote::Method::Delete);
    assert_eq!(calls[0].path, "/org/org_1/job-listings/jl_1");
}

#[tokio::test]
async fn permission_is_rechecked_on_every_action() {
    let provider = FakeProvider::employer(vec![], vec![]);
    let access = RemoteAccess::new(FakeTransport::default());

    let first = change_application_rating(&access, &provider, "jl_1", "user_2", Some(4)).await;
    let second = change_application_rating(&access, &provider, "jl_1", "user_2", Some(4)).await;

    assert!(first.is_error());
    assert!(second.is_error());
    // no caching of the decision: two actions, two provider consultations
    assert_eq!(
        provider.capability_checks(),
        vec![
            Permission::ApplicantChangeRating,
            Permission::ApplicantChangeRating
        ]
    );
    assert!(access.transport().calls().is_empty());
}
