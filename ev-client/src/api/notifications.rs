//! End-user error reports

use shared::request::ErrorReport;

use super::{CentralServerClient, log_call};
use crate::endpoint::ServerRoute;
use crate::ClientResult;

impl CentralServerClient {
    pub async fn send_error_report(
        &self,
        mobile: &str,
        subject: &str,
        description: &str,
    ) -> ClientResult<serde_json::Value> {
        log_call("send_error_report");
        let url = self.url(ServerRoute::EndUserReportError, &[])?;
        let body = ErrorReport {
            mobile: mobile.to_string(),
            subject: subject.to_string(),
            description: description.to_string(),
        };
        self.rest.post_json(&url, &self.secured(), &body).await
    }
}
