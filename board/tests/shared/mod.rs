use std::sync::Mutex;

use auth::{BearerToken, CurrentAuth, IdentityProvider, Permission, PlanFeature, TokenError};
use remote::{ApiRequest, Method, Transport, TransportError};

/// Records every request and answers from a fixed queue.
#[derive(Default)]
pub struct FakeTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<Vec<serde_json::Value>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
}

impl FakeTransport {
    pub fn respond_with(responses: Vec<serde_json::Value>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(responses),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn execute(&self, request: ApiRequest) -> Result<serde_json::Value, TransportError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method: request.method,
            path: request.path.clone(),
            body: request.body.clone(),
        });

        let mut responses = self.responses.lock().unwrap();
        match responses.is_empty() {
            true => Err(TransportError::Status(503)),
            false => Ok(responses.remove(0)),
        }
    }
}

pub struct FakeProvider {
    pub auth: CurrentAuth,
    pub permissions: Vec<Permission>,
    pub features: Vec<PlanFeature>,
    capability_checks: Mutex<Vec<Permission>>,
}

impl FakeProvider {
    pub fn employer(permissions: Vec<Permission>, features: Vec<PlanFeature>) -> Self {
        Self {
            auth: CurrentAuth {
                user_id: Some("user_1".to_string()),
                org_id: Some("org_1".to_string()),
            },
            permissions,
            features,
            capability_checks: Mutex::new(Vec::new()),
        }
    }

    pub fn job_seeker() -> Self {
        Self {
            auth: CurrentAuth {
                user_id: Some("user_1".to_string()),
                org_id: None,
            },
            permissions: vec![],
            features: vec![],
            capability_checks: Mutex::new(Vec::new()),
        }
    }

    pub fn capability_checks(&self) -> Vec<Permission> {
        self.capability_checks.lock().unwrap().clone()
    }
}

impl IdentityProvider for FakeProvider {
    async fn current(&self) -> CurrentAuth {
        self.auth.clone()
    }

    async fn issue_token(&self) -> Result<BearerToken, TokenError> {
        match self.auth.user_id.is_some() {
            true => Ok(BearerToken::new("test-token")),
            false => Err(TokenError::NoActor),
        }
    }

    async fn has_capability(&self, permission: Permission) -> bool {
        self.capability_checks.lock().unwrap().push(permission);
        self.permissions.contains(&permission)
    }

    async fn has_plan_feature(&self, feature: PlanFeature) -> bool {
        self.features.contains(&feature)
    }
}

pub fn listing_json(
    id: &str,
    status: &str,
    posted_at: Option<&str>,
    is_featured: bool,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": "Backend Engineer",
        "description": "Rust, mostly",
        "wage": 160_000,
        "wageInterval": "yearly",
        "stateAbbreviation": null,
        "city": null,
        "isFeatured": is_featured,
        "locationRequirement": "remote",
        "experienceLevel": "senior",
        "status": status,
        "type": "full-time",
        "postedAt": posted_at,
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
    })
}

pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "data": data })
}
