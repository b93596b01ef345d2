use anyhow::Context;
use async_trait::async_trait;
use chrono_tz::Tz;
use reqwest::{Client, Response, StatusCode, header::ACCEPT};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, instrument};

use super::{
    card::adaptive_card,
    parse::{RawHolidayRow, RawLeaveRow, SheetResponse, parse_holidays, parse_leaves, submission_row},
    source::LeaveSource,
};
use crate::{
    auth::credentials::Credentials,
    config::Config,
    error::{ServiceError, ServiceResult},
    model::{holiday::PublicHoliday, leave::Leave, submission::LeaveSubmission},
};

/// Longest slice of an upstream error body kept in the error message.
const MAX_ERROR_BODY: usize = 500;

/// Client for the spreadsheet-backed HTTP endpoint.
pub struct SheetClient {
    http: Client,
    url: String,
    leaves_sheet: String,
    holidays_sheet: String,
    tz: Tz,
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    #[serde(rename = "sheetName")]
    sheet_name: &'a str,
    username: &'a str,
    password: &'a str,
    row: RawLeaveRow,
    card: Value,
}

impl SheetClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            url: config.leaves_api_url.clone(),
            leaves_sheet: config.leaves_sheet.clone(),
            holidays_sheet: config.holidays_sheet.clone(),
            tz: config.business_timezone,
        })
    }

    async fn fetch_sheet<T: DeserializeOwned>(
        &self,
        sheet: &str,
        credentials: &Credentials,
    ) -> ServiceResult<Vec<T>> {
        let response = self
            .http
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .form(&[
                ("sheetName", sheet),
                ("username", credentials.username.as_str()),
                ("password", credentials.password.as_str()),
            ])
            .send()
            .await?;

        let response = check_status(response).await?;
        let body: SheetResponse<T> = response.json().await.map_err(|e| {
            ServiceError::Upstream(format!("malformed {sheet} response: {e}"))
        })?;

        if let Some(message) = body.error {
            return Err(ServiceError::Upstream(format!("{sheet}: {message}")));
        }

        debug!(sheet, rows = body.data.len(), "Fetched sheet");
        Ok(body.data)
    }
}

async fn check_status(response: Response) -> ServiceResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        return Err(ServiceError::Unauthorized("Invalid credentials".into()));
    }

    let detail = match response.text().await {
        Ok(body) if body.len() > MAX_ERROR_BODY => {
            let cut = (0..=MAX_ERROR_BODY)
                .rev()
                .find(|&i| body.is_char_boundary(i))
                .unwrap_or(0);
            format!("HTTP {}: {}", status.as_u16(), &body[..cut])
        }
        Ok(body) => format!("HTTP {}: {}", status.as_u16(), body),
        Err(_) => format!("HTTP {} error", status.as_u16()),
    };
    Err(ServiceError::Upstream(detail))
}

#[async_trait]
impl LeaveSource for SheetClient {
    #[instrument(name = "sheet_fetch_leaves", skip_all, fields(username = %credentials.username))]
    async fn fetch_leaves(&self, credentials: &Credentials) -> ServiceResult<Vec<Leave>> {
        let rows: Vec<RawLeaveRow> = self.fetch_sheet(&self.leaves_sheet, credentials).await?;
        Ok(parse_leaves(rows, self.tz))
    }

    #[instrument(name = "sheet_fetch_holidays", skip_all, fields(username = %credentials.username))]
    async fn fetch_holidays(&self, credentials: &Credentials) -> ServiceResult<Vec<PublicHoliday>> {
        let rows: Vec<RawHolidayRow> = self.fetch_sheet(&self.holidays_sheet, credentials).await?;
        Ok(parse_holidays(rows, self.tz))
    }

    #[instrument(name = "sheet_submit_leave", skip_all, fields(username = %credentials.username))]
    async fn submit_leave(
        &self,
        credentials: &Credentials,
        submission: &LeaveSubmission,
    ) -> ServiceResult<()> {
        let request = SubmitRequest {
            sheet_name: &self.leaves_sheet,
            username: &credentials.username,
            password: &credentials.password,
            row: submission_row(submission),
            card: adaptive_card(submission),
        };

        let response = self
            .http
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Leave submission failed"))?;

        check_status(response).await?;
        Ok(())
    }
}
