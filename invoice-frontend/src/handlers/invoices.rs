use crate::handlers::views::{FormView, TableView, TotalsView};
use crate::models::{FormMode, Invoice, InvoiceForm, InvoiceFormInput, Submission};
use crate::services::invoice_client::InvoiceApiError;
use crate::services::{metrics, InvoiceListSnapshot};
use crate::theme::{Palette, Theme};
use crate::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use service_core::error::AppError;

const HX_REQUEST_HEADER: &str = "hx-request";

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub palette: Palette,
    pub form: FormView,
    pub totals: TotalsView,
    pub table: TableView,
}

impl IndexTemplate {
    pub fn new(
        theme: Theme,
        form: &InvoiceForm,
        error: Option<&'static str>,
        snapshot: &InvoiceListSnapshot,
    ) -> Self {
        Self {
            palette: theme.palette(),
            form: FormView::new(form, error),
            totals: form.totals().into(),
            table: TableView::from(snapshot),
        }
    }
}

/// Form panel swapped in by htmx. After a successful save it also carries an
/// out-of-band replacement of the table.
#[derive(Template)]
#[template(path = "partials/form_response.html")]
pub struct FormPanelTemplate {
    pub palette: Palette,
    pub form: FormView,
    pub totals: TotalsView,
    pub show_table: bool,
    pub table: TableView,
}

impl FormPanelTemplate {
    pub fn new(
        theme: Theme,
        form: &InvoiceForm,
        error: Option<&'static str>,
        refreshed: Option<&InvoiceListSnapshot>,
    ) -> Self {
        Self {
            palette: theme.palette(),
            form: FormView::new(form, error),
            totals: form.totals().into(),
            show_table: refreshed.is_some(),
            table: refreshed.map(TableView::from).unwrap_or(TableView {
                rows: Vec::new(),
                load_error: None,
            }),
        }
    }
}

#[derive(Template)]
#[template(path = "partials/invoice_table_body.html")]
pub struct InvoiceTableTemplate {
    pub palette: Palette,
    pub table: TableView,
}

#[derive(Template)]
#[template(path = "partials/totals.html")]
pub struct TotalsTemplate {
    pub palette: Palette,
    pub totals: TotalsView,
}

fn is_htmx(headers: &HeaderMap) -> bool {
    headers.contains_key(HX_REQUEST_HEADER)
}

/// Full page: empty form and a freshly loaded list.
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state
        .invoice_list
        .refresh(state.invoice_api.as_ref())
        .await;
    IndexTemplate::new(state.theme, &InvoiceForm::empty(), None, &snapshot)
}

/// Refresh action: reload the list and return the table body.
pub async fn list_invoices(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state
        .invoice_list
        .refresh(state.invoice_api.as_ref())
        .await;
    InvoiceTableTemplate {
        palette: state.theme.palette(),
        table: TableView::from(&snapshot),
    }
}

/// Recompute the totals preview for the current form inputs.
pub async fn preview_totals(
    State(state): State<AppState>,
    Form(input): Form<InvoiceFormInput>,
) -> impl IntoResponse {
    let form = InvoiceForm::from_input(FormMode::Create, input, None);
    TotalsTemplate {
        palette: state.theme.palette(),
        totals: form.totals().into(),
    }
}

pub async fn create_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<InvoiceFormInput>,
) -> Response {
    let form = InvoiceForm::from_input(FormMode::Create, input, None);
    save(&state, &headers, form).await
}

/// Load a listed invoice into the form.
pub async fn edit_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let invoice = find_listed(&state, &id).await?;
    let form = InvoiceForm::editing(&invoice)
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice {} has no id", id)))?;

    tracing::debug!(id = %id, invoice_no = %invoice.invoice_no, "Editing invoice");

    if is_htmx(&headers) {
        return Ok(FormPanelTemplate::new(state.theme, &form, None, None).into_response());
    }
    let snapshot = state.invoice_list.snapshot().await;
    Ok(IndexTemplate::new(state.theme, &form, None, &snapshot).into_response())
}

pub async fn update_invoice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Form(input): Form<InvoiceFormInput>,
) -> Result<Response, AppError> {
    let existing = find_listed(&state, &id).await?;
    let invoice_id = existing
        .id
        .clone()
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice {} has no id", id)))?;

    let form = InvoiceForm::from_input(
        FormMode::Edit(invoice_id),
        input,
        Some(&existing.invoice_no),
    );
    Ok(save(&state, &headers, form).await)
}

/// Find an invoice in the displayed list, reloading once if it is missing.
async fn find_listed(state: &AppState, id: &str) -> Result<Invoice, AppError> {
    if let Some(invoice) = state.invoice_list.find(id).await {
        return Ok(invoice);
    }
    state
        .invoice_list
        .refresh(state.invoice_api.as_ref())
        .await;
    state
        .invoice_list
        .find(id)
        .await
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Invoice {} not found", id)))
}

/// Submit the form. On success the saved record is merged into the list and
/// the form resets; on failure the form is shown again unchanged with the
/// error message.
async fn save(state: &AppState, headers: &HeaderMap, form: InvoiceForm) -> Response {
    let operation = if form.is_editing() { "update" } else { "create" };

    let result = match form.submission() {
        Submission::Create(request) => state.invoice_api.create_invoice(&request).await,
        Submission::Update { id, request } => {
            state.invoice_api.update_invoice(&id, &request).await
        }
    };

    match result {
        Ok(saved) => {
            metrics::record_save(operation, "ok");
            state.invoice_list.upsert(saved).await;
            let form = form.saved();

            if !is_htmx(headers) {
                return Redirect::to("/").into_response();
            }
            let snapshot = state.invoice_list.snapshot().await;
            FormPanelTemplate::new(state.theme, &form, None, Some(&snapshot)).into_response()
        }
        Err(e) => {
            metrics::record_save(operation, e.kind());
            tracing::warn!(operation, error = %e, "Invoice save failed");
            let message = e.save_message();

            if is_htmx(headers) {
                return FormPanelTemplate::new(state.theme, &form, Some(message), None)
                    .into_response();
            }
            let status = match e {
                InvoiceApiError::DuplicateInvoiceNumber => StatusCode::CONFLICT,
                _ => StatusCode::BAD_GATEWAY,
            };
            let snapshot = state.invoice_list.snapshot().await;
            (
                status,
                IndexTemplate::new(state.theme, &form, Some(message), &snapshot),
            )
                .into_response()
        }
    }
}
