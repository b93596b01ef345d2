use async_trait::async_trait;

use crate::{
    auth::credentials::Credentials,
    error::ServiceResult,
    model::{holiday::PublicHoliday, leave::Leave, submission::LeaveSubmission},
};

/// Where leaves and holidays come from and where new requests go.
///
/// Every fetch returns the complete collection; callers replace what they
/// hold rather than merging.
#[async_trait]
pub trait LeaveSource: Send + Sync {
    async fn fetch_leaves(&self, credentials: &Credentials) -> ServiceResult<Vec<Leave>>;

    async fn fetch_holidays(&self, credentials: &Credentials) -> ServiceResult<Vec<PublicHoliday>>;

    async fn submit_leave(
        &self,
        credentials: &Credentials,
        submission: &LeaveSubmission,
    ) -> ServiceResult<()>;
}
