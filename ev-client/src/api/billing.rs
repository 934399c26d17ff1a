//! Invoices, payment methods and billing settings

use std::path::{Path, PathBuf};

use shared::DataResult;
use shared::models::{BillingInvoice, BillingOperationResult, BillingPaymentMethod, BillingSettings};
use shared::request::{PaymentMethodAttachParams, PaymentMethodAttachRequest, PaymentMethodSetupRequest};

use super::{CentralServerClient, log_call};
use crate::endpoint::ServerRoute;
use crate::query::{PagingParams, QueryParams, build_query};
use crate::ClientResult;

const PDF_MIME: &str = "application/pdf";

/// Host hook that shows a downloaded file to the user
pub trait FileViewer: Send + Sync {
    fn open(&self, path: &Path, mime: &str) -> ClientResult<()>;
}

impl CentralServerClient {
    pub async fn get_invoices(
        &self,
        params: QueryParams,
        paging: &PagingParams,
        sorting: &[&str],
    ) -> ClientResult<DataResult<BillingInvoice>> {
        log_call("get_invoices");
        let url = self.url(ServerRoute::BillingInvoices, &[])?;
        self.get_list(&url, params, paging, sorting).await
    }

    /// Stream the invoice PDF to `<download_dir>/<label>_<number>.pdf`
    ///
    /// `label` is the localized word for "invoice". The file is handed to the
    /// [`FileViewer`] when one is set; the path is returned either way.
    pub async fn download_invoice(
        &self,
        invoice: &BillingInvoice,
        label: &str,
    ) -> ClientResult<PathBuf> {
        log_call("download_invoice");
        let url = self.url(ServerRoute::BillingDownloadInvoice, &[("invoiceID", &invoice.id)])?;
        let file_name = sanitize_file_name(&format!("{}_{}.pdf", label, invoice.number));
        let path = self.session.config().download_dir.join(file_name);

        self.rest
            .download_to_file(&url, &self.secured(), None, &path)
            .await?;
        if let Some(viewer) = &self.file_viewer {
            viewer.open(&path, PDF_MIME)?;
        }
        Ok(path)
    }

    /// Start a payment-method setup intent
    pub async fn set_up_payment_method(&self, user_id: &str) -> ClientResult<BillingOperationResult> {
        log_call("set_up_payment_method");
        let url = self.url(ServerRoute::BillingPaymentMethodSetup, &[("userID", user_id)])?;
        let body = PaymentMethodSetupRequest {
            user_id: user_id.to_string(),
        };
        self.rest.post_json(&url, &self.secured(), &body).await
    }

    pub async fn attach_payment_method(
        &self,
        user_id: &str,
        payment_method_id: &str,
    ) -> ClientResult<BillingOperationResult> {
        log_call("attach_payment_method");
        let url = self.url(
            ServerRoute::BillingPaymentMethodAttach,
            &[("userID", user_id), ("paymentMethodID", payment_method_id)],
        )?;
        let body = PaymentMethodAttachRequest {
            params: PaymentMethodAttachParams {
                user_id: user_id.to_string(),
                payment_method_id: payment_method_id.to_string(),
            },
        };
        self.rest.post_json(&url, &self.secured(), &body).await
    }

    pub async fn delete_payment_method(
        &self,
        user_id: &str,
        payment_method_id: &str,
    ) -> ClientResult<BillingOperationResult> {
        log_call("delete_payment_method");
        let url = self.url(
            ServerRoute::BillingPaymentMethod,
            &[("userID", user_id), ("paymentMethodID", payment_method_id)],
        )?;
        self.rest.delete_json(&url, &self.secured(), None).await
    }

    /// Best-effort: any failure is logged and reported as `None`
    pub async fn get_payment_methods(
        &self,
        user_id: &str,
        paging: &PagingParams,
    ) -> Option<DataResult<BillingPaymentMethod>> {
        log_call("get_payment_methods");
        let result: ClientResult<DataResult<BillingPaymentMethod>> = async {
            let url = self.url(ServerRoute::BillingPaymentMethods, &[("userID", user_id)])?;
            let query = build_query(QueryParams::new(), paging, &[]);
            self.rest.get_json(&url, &self.secured(), Some(&query)).await
        }
        .await;
        result
            .inspect_err(|e| tracing::warn!(error = %e, "Payment methods unavailable"))
            .ok()
    }

    /// Best-effort: any failure is logged and reported as `None`
    pub async fn get_billing_settings(&self) -> Option<BillingSettings> {
        log_call("get_billing_settings");
        let result: ClientResult<BillingSettings> = async {
            let url = self.url(ServerRoute::BillingSettings, &[])?;
            self.rest.get_json(&url, &self.secured(), None).await
        }
        .await;
        result
            .inspect_err(|e| tracing::warn!(error = %e, "Billing settings unavailable"))
            .ok()
    }
}

/// Invoice numbers may contain path separators
fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect()
}
