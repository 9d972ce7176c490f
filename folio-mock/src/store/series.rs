//! CFDI invoice series

use shared::folio::validation::{
    normalize_series_code, validate_format, validate_initial_folio, validate_patch,
};
use shared::folio::{FolioCounter, FolioFormat, IssuedFolio};
use shared::models::{
    CfdiType, DefaultSeriesQuery, InvoiceSeries, InvoiceSeriesCreate, InvoiceSeriesQuery,
    InvoiceSeriesUpdate, SetInitialFolio,
};
use shared::util::{now_millis, snowflake_id};
use shared::{AppError, AppResult, ErrorCode};

use super::{FolioStore, StoreInner};

impl StoreInner {
    fn series_mut(&mut self, id: i64) -> AppResult<&mut InvoiceSeries> {
        self.series
            .get_mut(&id)
            .ok_or_else(|| AppError::series_not_found(id))
    }

    fn require_company_setting(&self, company_setting_id: i64) -> AppResult<()> {
        if self.company_setting_ids.contains(&company_setting_id) {
            Ok(())
        } else {
            Err(
                AppError::with_message(ErrorCode::TaxProfileNotFound, "Tax profile not found")
                    .with_detail("company_setting_id", company_setting_id),
            )
        }
    }

    /// Draw ids until one is free; snowflakes minted in the same
    /// millisecond can collide.
    fn unused_series_id(&self, mut generate: impl FnMut() -> i64) -> i64 {
        loop {
            let id = generate();
            if !self.series.contains_key(&id) {
                return id;
            }
        }
    }

    fn code_taken(&self, company_setting_id: i64, code: &str) -> bool {
        self.series
            .values()
            .any(|s| s.company_setting_id == company_setting_id && s.code == code)
    }

    /// Make `id` the only default among its profile's series of the same CFDI type
    fn make_default(&mut self, id: i64) -> AppResult<()> {
        let (company_setting_id, cfdi_type) = {
            let target = self.series_mut(id)?;
            (target.company_setting_id, target.cfdi_type)
        };
        for series in self.series.values_mut() {
            if series.company_setting_id == company_setting_id && series.cfdi_type == cfdi_type {
                series.is_default = series.id == id;
            }
        }
        Ok(())
    }

    fn insert_series(&mut self, payload: InvoiceSeriesCreate, year: i32) -> AppResult<InvoiceSeries> {
        self.require_company_setting(payload.company_setting_id)?;
        let code = normalize_series_code(&payload.code)?;
        validate_format(&payload.format)?;
        if payload.name.trim().is_empty() {
            return Err(AppError::invalid_field(
                ErrorCode::RequiredField,
                "name",
                "Series name is required",
            ));
        }
        if self.code_taken(payload.company_setting_id, &code) {
            return Err(AppError::new(ErrorCode::SeriesCodeExists).with_detail("code", code));
        }

        let now = now_millis();
        let mut series = InvoiceSeries {
            id: self.unused_series_id(snowflake_id),
            company_setting_id: payload.company_setting_id,
            code,
            name: payload.name.trim().to_string(),
            cfdi_type: payload.cfdi_type,
            source_type: payload.source_type,
            is_active: true,
            is_default: false,
            format: payload.format,
            counter: FolioCounter::new(payload.reset_yearly),
            next_folio: String::new(),
            issued_count: 0,
            created_at: Some(now),
            updated_at: Some(now),
        };
        series.refresh_next_folio(year);

        let id = series.id;
        let first_of_type = !self.series.values().any(|s| {
            s.company_setting_id == series.company_setting_id && s.cfdi_type == series.cfdi_type
        });
        self.series.insert(id, series);
        if payload.is_default || first_of_type {
            self.make_default(id)?;
        }
        self.series
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::series_not_found(id))
    }
}

impl FolioStore {
    pub fn list_series(&self, query: &InvoiceSeriesQuery) -> Vec<InvoiceSeries> {
        let year = self.year();
        let mut series: Vec<_> = self
            .inner
            .read()
            .series
            .values()
            .filter(|s| query.matches(s))
            .cloned()
            .collect();
        series.sort_by(|a, b| {
            a.cfdi_type
                .code()
                .cmp(b.cfdi_type.code())
                .then_with(|| a.code.cmp(&b.code))
        });
        for s in &mut series {
            s.refresh_next_folio(year);
        }
        series
    }

    pub fn get_series(&self, id: i64) -> AppResult<InvoiceSeries> {
        let year = self.year();
        let mut series = self
            .inner
            .read()
            .series
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::series_not_found(id))?;
        series.refresh_next_folio(year);
        Ok(series)
    }

    pub fn create_series(&self, payload: InvoiceSeriesCreate) -> AppResult<InvoiceSeries> {
        let year = self.year();
        let series = self.inner.write().insert_series(payload, year)?;
        tracing::info!(id = series.id, code = %series.code, cfdi_type = %series.cfdi_type, "Invoice series created");
        Ok(series)
    }

    pub fn update_series(&self, id: i64, payload: &InvoiceSeriesUpdate) -> AppResult<InvoiceSeries> {
        validate_patch(&payload.format)?;
        if payload.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(AppError::invalid_field(
                ErrorCode::RequiredField,
                "name",
                "Series name is required",
            ));
        }
        let year = self.year();
        let mut inner = self.inner.write();
        let series = inner.series_mut(id)?;
        if let Some(name) = &payload.name {
            series.name = name.trim().to_string();
        }
        if let Some(is_active) = payload.is_active {
            series.is_active = is_active;
        }
        payload.format.apply(&mut series.format, &mut series.counter);
        series.updated_at = Some(now_millis());
        series.refresh_next_folio(year);
        tracing::info!(id, "Invoice series updated");
        Ok(series.clone())
    }

    /// Only series that never issued a folio may be deleted
    pub fn delete_series(&self, id: i64) -> AppResult<bool> {
        let mut inner = self.inner.write();
        let series = inner.series_mut(id)?;
        if series.issued_count > 0 {
            return Err(AppError::series_in_use(id, series.issued_count));
        }
        inner.series.remove(&id);
        tracing::info!(id, "Invoice series deleted");
        Ok(true)
    }

    pub fn set_default_series(&self, id: i64) -> AppResult<InvoiceSeries> {
        let year = self.year();
        let mut inner = self.inner.write();
        let series = inner.series_mut(id)?;
        if !series.is_active {
            return Err(AppError::new(ErrorCode::SeriesInactive).with_detail("id", id));
        }
        inner.make_default(id)?;
        let series = inner.series_mut(id)?;
        series.updated_at = Some(now_millis());
        series.refresh_next_folio(year);
        tracing::info!(id, cfdi_type = %series.cfdi_type, "Default invoice series changed");
        Ok(series.clone())
    }

    /// Store `current_sequence` verbatim
    pub fn set_series_initial(&self, id: i64, payload: SetInitialFolio) -> AppResult<InvoiceSeries> {
        validate_initial_folio(payload.current_sequence)?;
        let year = self.year();
        let mut inner = self.inner.write();
        let series = inner.series_mut(id)?;
        let previous = series.counter.current_sequence;
        series.counter.set_current(payload.current_sequence, year);
        series.updated_at = Some(now_millis());
        series.refresh_next_folio(year);
        tracing::warn!(
            id,
            previous,
            current_sequence = payload.current_sequence,
            "Series counter overridden"
        );
        Ok(series.clone())
    }

    pub fn issue_series(&self, id: i64) -> AppResult<IssuedFolio> {
        let year = self.year();
        let mut inner = self.inner.write();
        let series = inner.series_mut(id)?;
        if !series.is_active {
            return Err(AppError::new(ErrorCode::SeriesInactive).with_detail("id", id));
        }
        let issued = series.counter.issue(&series.format, year);
        series.issued_count += 1;
        series.updated_at = Some(now_millis());
        series.refresh_next_folio(year);
        tracing::info!(id, folio = %issued.folio, "Series folio issued");
        Ok(issued)
    }

    /// Active default for a profile's CFDI type, preferring an exact source match
    pub fn resolve_default(&self, query: &DefaultSeriesQuery) -> AppResult<InvoiceSeries> {
        let year = self.year();
        let inner = self.inner.read();
        inner.require_company_setting(query.company_setting_id)?;
        let candidates: Vec<_> = inner
            .series
            .values()
            .filter(|s| {
                s.company_setting_id == query.company_setting_id
                    && s.cfdi_type == query.cfdi_type
                    && s.is_active
            })
            .collect();

        let exact = query.source_type.and_then(|source| {
            candidates
                .iter()
                .filter(|s| s.source_type == Some(source))
                .find(|s| s.is_default)
                .or_else(|| candidates.iter().find(|s| s.source_type == Some(source)))
        });
        let fallback = || {
            candidates
                .iter()
                .find(|s| s.is_default && s.source_type.is_none())
                .or_else(|| candidates.iter().find(|s| s.source_type.is_none()))
        };

        let mut series = exact
            .or_else(fallback)
            .map(|s| (*s).clone())
            .ok_or_else(|| {
                AppError::new(ErrorCode::DefaultSeriesMissing)
                    .with_detail("cfdi_type", query.cfdi_type.code())
            })?;
        series.refresh_next_folio(year);
        Ok(series)
    }

    /// One default series per CFDI type for a profile with no series yet
    pub fn initialize_defaults(&self, company_setting_id: i64) -> AppResult<Vec<InvoiceSeries>> {
        let year = self.year();
        let mut inner = self.inner.write();
        inner.require_company_setting(company_setting_id)?;
        if inner
            .series
            .values()
            .any(|s| s.company_setting_id == company_setting_id)
        {
            return Err(AppError::new(ErrorCode::SeriesAlreadyInitialized)
                .with_detail("company_setting_id", company_setting_id));
        }

        let mut created = Vec::with_capacity(CfdiType::ALL.len());
        for cfdi_type in CfdiType::ALL {
            let code = cfdi_type.default_series_code();
            let payload = InvoiceSeriesCreate {
                company_setting_id,
                code: code.to_string(),
                name: cfdi_type.label().to_string(),
                cfdi_type,
                source_type: None,
                format: FolioFormat::new(code),
                reset_yearly: false,
                is_default: true,
            };
            created.push(inner.insert_series(payload, year)?);
        }
        tracing::info!(company_setting_id, count = created.len(), "Default invoice series initialized");
        Ok(created)
    }
}
