//! `/api/invoice-series`

use async_trait::async_trait;
use shared::folio::{FolioFormatPatch, IssuedFolio};
use shared::models::{
    CfdiType, DefaultSeriesQuery, InitializeDefaults, InvoiceSeries, InvoiceSeriesCreate,
    InvoiceSeriesQuery, InvoiceSeriesUpdate, SetInitialFolio,
};

use super::{SequenceGateway, SeriesGateway};
use crate::{ClientError, ClientResult, HttpClient};

const BASE: &str = "/api/invoice-series";

/// Invoice series, optionally scoped to one tax profile
#[derive(Debug, Clone)]
pub struct InvoiceSeriesApi<C> {
    http: C,
    scope: InvoiceSeriesQuery,
}

impl<C: HttpClient> InvoiceSeriesApi<C> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            scope: InvoiceSeriesQuery::default(),
        }
    }

    /// Restrict `list` to the series of one company tax profile
    pub fn scoped(mut self, company_setting_id: i64) -> Self {
        self.scope.company_setting_id = Some(company_setting_id);
        self
    }

    pub fn scope(&self) -> &InvoiceSeriesQuery {
        &self.scope
    }

    pub fn company_setting_id(&self) -> Option<i64> {
        self.scope.company_setting_id
    }

    pub async fn list(&self) -> ClientResult<Vec<InvoiceSeries>> {
        self.list_where(&self.scope).await
    }

    pub async fn list_where(&self, query: &InvoiceSeriesQuery) -> ClientResult<Vec<InvoiceSeries>> {
        self.http
            .get(&format!("{BASE}{}", query.to_query_string()))
            .await
    }

    pub async fn get(&self, id: i64) -> ClientResult<InvoiceSeries> {
        self.http.get(&format!("{BASE}/{id}")).await
    }

    pub async fn create(&self, payload: &InvoiceSeriesCreate) -> ClientResult<InvoiceSeries> {
        tracing::info!(code = %payload.code, cfdi_type = %payload.cfdi_type, "Creating invoice series");
        self.http.post(BASE, payload).await
    }

    pub async fn update(&self, id: i64, payload: &InvoiceSeriesUpdate) -> ClientResult<InvoiceSeries> {
        tracing::debug!(id, "Patching invoice series");
        self.http.patch(&format!("{BASE}/{id}"), payload).await
    }

    pub async fn delete(&self, id: i64) -> ClientResult<bool> {
        tracing::info!(id, "Deleting invoice series");
        self.http.delete(&format!("{BASE}/{id}")).await
    }

    pub async fn set_default(&self, id: i64) -> ClientResult<InvoiceSeries> {
        self.http
            .post_empty(&format!("{BASE}/{id}/set-default"))
            .await
    }

    pub async fn set_initial_folio(
        &self,
        id: i64,
        payload: SetInitialFolio,
    ) -> ClientResult<InvoiceSeries> {
        tracing::info!(
            id,
            current_sequence = payload.current_sequence,
            "Overriding series counter"
        );
        self.http
            .post(&format!("{BASE}/{id}/set-initial-folio"), &payload)
            .await
    }

    pub async fn issue(&self, id: i64) -> ClientResult<IssuedFolio> {
        self.http.post_empty(&format!("{BASE}/{id}/issue")).await
    }

    /// Series used when a document does not pick one explicitly
    pub async fn default_for(&self, query: &DefaultSeriesQuery) -> ClientResult<InvoiceSeries> {
        let mut path = format!(
            "{BASE}/default?company_setting_id={}&cfdi_type={}",
            query.company_setting_id,
            query.cfdi_type.code()
        );
        if let Some(source) = query.source_type {
            path.push_str(&format!("&source_type={source}"));
        }
        self.http.get(&path).await
    }

    pub async fn initialize_defaults(
        &self,
        company_setting_id: i64,
    ) -> ClientResult<Vec<InvoiceSeries>> {
        tracing::info!(company_setting_id, "Initializing default invoice series");
        self.http
            .post(
                &format!("{BASE}/initialize-defaults"),
                &InitializeDefaults { company_setting_id },
            )
            .await
    }

    /// Default of `cfdi_type` within the scoped tax profile
    pub async fn default_for_type(&self, cfdi_type: CfdiType) -> ClientResult<InvoiceSeries> {
        let company_setting_id = self.company_setting_id().ok_or_else(|| {
            ClientError::Config("invoice series API is not scoped to a tax profile".into())
        })?;
        self.default_for(&DefaultSeriesQuery {
            company_setting_id,
            cfdi_type,
            source_type: None,
        })
        .await
    }
}

#[async_trait]
impl<C: HttpClient> SequenceGateway<InvoiceSeries> for InvoiceSeriesApi<C> {
    async fn list(&self) -> ClientResult<Vec<InvoiceSeries>> {
        InvoiceSeriesApi::list(self).await
    }

    async fn update_format(&self, key: &i64, patch: &FolioFormatPatch) -> ClientResult<InvoiceSeries> {
        self.update(*key, &InvoiceSeriesUpdate::from(patch.clone()))
            .await
    }

    async fn set_initial(&self, key: &i64, payload: SetInitialFolio) -> ClientResult<InvoiceSeries> {
        self.set_initial_folio(*key, payload).await
    }
}

#[async_trait]
impl<C: HttpClient> SeriesGateway for InvoiceSeriesApi<C> {
    fn company_setting_id(&self) -> Option<i64> {
        InvoiceSeriesApi::company_setting_id(self)
    }

    async fn create(&self, payload: &InvoiceSeriesCreate) -> ClientResult<InvoiceSeries> {
        InvoiceSeriesApi::create(self, payload).await
    }

    async fn delete(&self, id: i64) -> ClientResult<bool> {
        InvoiceSeriesApi::delete(self, id).await
    }

    async fn set_default(&self, id: i64) -> ClientResult<InvoiceSeries> {
        InvoiceSeriesApi::set_default(self, id).await
    }

    async fn initialize_defaults(
        &self,
        company_setting_id: i64,
    ) -> ClientResult<Vec<InvoiceSeries>> {
        InvoiceSeriesApi::initialize_defaults(self, company_setting_id).await
    }
}
