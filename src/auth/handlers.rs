use crate::{
    auth::credentials::Credentials,
    error::{ServiceError, ServiceResult},
    models::{LoginReqDto, LoginResponse},
    store::LeaveStore,
};
use actix_web::{HttpResponse, web};
use tracing::{error, info, instrument};

/// Swagger doc for login endpoint
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body(
        content = LoginReqDto,
        description = "Sheet credentials",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Credentials accepted by the sheet", body = LoginResponse),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Invalid credentials"),
        (status = 502, description = "Sheet endpoint unavailable")
    ),
    tag = "Auth"
)]
#[instrument(
    name = "auth_login",
    skip(store, user),
    fields(username = %user.username)
)]
pub async fn login(
    user: web::Json<LoginReqDto>,
    store: web::Data<LeaveStore>,
) -> ServiceResult<HttpResponse> {
    info!("Login request received");

    if user.username.trim().is_empty() || user.password.is_empty() {
        info!("Validation failed: empty username or password");
        return Err(ServiceError::BadRequest(
            "Username or password required".into(),
        ));
    }

    let credentials = Credentials::new(user.username.trim(), user.password.as_str());

    // the sheet is the only judge of credentials; a forced fetch probes it
    let leaves = store.leaves(&credentials, true).await.map_err(|e| {
        match &e {
            ServiceError::Unauthorized(_) => info!("Invalid credentials"),
            _ => error!(error = %e, "Login probe failed"),
        }
        e
    })?;

    info!("Login successful");

    Ok(HttpResponse::Ok().json(LoginResponse {
        username: credentials.username,
        leave_count: leaves.len(),
    }))
}

/// Swagger doc for logout endpoint
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 204, description = "Cached state dropped (idempotent)")
    ),
    tag = "Auth"
)]
pub async fn logout(credentials: Option<Credentials>, store: web::Data<LeaveStore>) -> HttpResponse {
    if let Some(credentials) = credentials {
        store.reset(&credentials.username).await;
    }
    // success even without credentials
    HttpResponse::NoContent().finish()
}
