use crate::{
    auth::credentials::Credentials,
    config::Config,
    error::{ServiceError, ServiceResult},
    model::{
        holiday::PublicHoliday, leave::Leave, schema::LeaveSchema, submission::LeaveSubmission,
    },
    models::RefreshQuery,
    store::LeaveStore,
};
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::{info, instrument};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<Leave>,
    #[schema(example = 1)]
    pub total: usize,
}

#[derive(Serialize, ToSchema)]
pub struct HolidayListResponse {
    pub data: Vec<PublicHoliday>,
    #[schema(example = 1)]
    pub total: usize,
}

/* =========================
List leaves
========================= */
/// for getting every leave on the sheet endpoint
#[utoipa::path(
    get,
    path = "/api/leave",
    params(RefreshQuery),
    responses(
        (status = 200, description = "Leaves in sheet order", body = LeaveListResponse),
        (status = 401, description = "Missing or rejected credentials"),
        (status = 502, description = "Sheet endpoint unavailable")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn list_leaves(
    credentials: Credentials,
    store: web::Data<LeaveStore>,
    query: web::Query<RefreshQuery>,
) -> ServiceResult<HttpResponse> {
    let leaves = store.leaves(&credentials, query.force()).await?;

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        total: leaves.len(),
        data: leaves.as_ref().clone(),
    }))
}

/* =========================
Submit leave request
========================= */
/// Swagger doc for create_leave endpoint
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body(
        content = LeaveSubmission,
        description = "Leave request form",
        content_type = "application/json"
    ),
    responses(
        (status = 201, description = "Leave request forwarded to the sheet",
         body = Object,
         example = json!({
            "message": "Leave request submitted",
            "leave_type": "Multiple Days"
         })
        ),
        (status = 401, description = "Missing or rejected credentials"),
        (status = 422, description = "One or more fields are invalid", body = Object, example = json!({
            "error": "validation failed",
            "fields": { "email": "Invalid email", "role": "Role is required" }
        })),
        (status = 502, description = "Sheet endpoint unavailable")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Leave"
)]
#[instrument(
    name = "create_leave",
    skip(credentials, store, config, payload),
    fields(username = %credentials.username)
)]
pub async fn create_leave(
    credentials: Credentials,
    store: web::Data<LeaveStore>,
    config: web::Data<Config>,
    payload: web::Json<LeaveSubmission>,
) -> ServiceResult<HttpResponse> {
    let submission = payload.into_inner().normalized();

    submission
        .validate(&config.schema, config.allowed_email_domain.as_deref())
        .map_err(ServiceError::Validation)?;

    store.submit(&credentials, &submission).await.map_err(|e| {
        tracing::error!(error = %e, "Failed to submit leave request");
        e
    })?;

    info!(
        start = %submission.leave_start_date,
        end = %submission.leave_end_date,
        leave_type = submission.effective_leave_type(),
        "Leave request submitted"
    );

    Ok(HttpResponse::Created().json(serde_json::json!({
        "message": "Leave request submitted",
        "leave_type": submission.effective_leave_type()
    })))
}

/// for getting the allowed form values endpoint
#[utoipa::path(
    get,
    path = "/api/leave/schema",
    responses(
        (status = 200, description = "Departments, leave types and categories the form accepts", body = LeaveSchema),
        (status = 401, description = "Missing credentials")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn leave_schema(_credentials: Credentials, config: web::Data<Config>) -> HttpResponse {
    HttpResponse::Ok().json(&config.schema)
}

/// for getting public holidays endpoint
#[utoipa::path(
    get,
    path = "/api/holiday",
    params(RefreshQuery),
    responses(
        (status = 200, description = "Holidays in sheet order", body = HolidayListResponse),
        (status = 401, description = "Missing or rejected credentials"),
        (status = 502, description = "Sheet endpoint unavailable")
    ),
    security(
        ("basic_auth" = [])
    ),
    tag = "Leave"
)]
pub async fn list_holidays(
    credentials: Credentials,
    store: web::Data<LeaveStore>,
    query: web::Query<RefreshQuery>,
) -> ServiceResult<HttpResponse> {
    let holidays = store.holidays(&credentials, query.force()).await?;

    Ok(HttpResponse::Ok().json(HolidayListResponse {
        total: holidays.len(),
        data: holidays.as_ref().clone(),
    }))
}
