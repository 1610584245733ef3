//! # Page Handlers
//!
//! Turns one user action into at most one Record Service write plus a
//! freshly loaded page.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    One Interaction                                      │
//! │                                                                         │
//! │  Request::Submit(form)          Request::MarkCompleted(id)             │
//! │       │                                │                                │
//! │       ▼                                ▼                                │
//! │  add_record(table, fields)      id in pending selector?                │
//! │       │                           yes → update_status(id, Completed)   │
//! │       │                           no  → Feedback::Error                │
//! │       ▼                                │                                │
//! │  Ok  → Feedback::Success               │                                │
//! │  Err → Feedback::Error  ◄──────────────┘                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_page(page): fetch_all, CSV download, pending ids                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Response { feedback, view }                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Write failures are reported inline and never abort the page. Only a
//! failure to load the page itself is returned as `Err`.

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

use bizledger_core::export::{self, CSV_MIME};
use bizledger_core::{OrderStatus, RecordId, TableData};
use bizledger_db::RecordService;

use crate::error::{AppError, AppResult};
use crate::pages::{today, Form, Page};

/// Shown on the orders page when no order is Pending.
pub const NO_PENDING_ORDERS: &str = "No pending orders to update.";

/// Shown after an order is marked completed.
pub const ORDER_COMPLETED: &str = "Order marked as completed!";

/// One user action.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Navigate to a page.
    Show(Page),
    /// Submit an entry form; the page is the form's page.
    Submit(Form),
    /// Mark a pending order as completed.
    MarkCompleted(RecordId),
    /// Load a page for its CSV download.
    Export(Page),
}

impl Request {
    /// The page rendered after handling this request.
    pub fn page(&self) -> Page {
        match self {
            Request::Show(page) | Request::Export(page) => *page,
            Request::Submit(form) => form.page(),
            Request::MarkCompleted(_) => Page::Orders,
        }
    }
}

/// Outcome of a write, shown above the page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum Feedback {
    Success(String),
    Error(AppError),
}

impl Feedback {
    pub fn is_success(&self) -> bool {
        matches!(self, Feedback::Success(_))
    }
}

/// A CSV file offered for download.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Download {
    pub label: String,
    pub file_name: String,
    pub mime: &'static str,
    #[serde(skip)]
    pub data: Vec<u8>,
}

/// The order status section, present on the orders page once it has rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    /// Selector options, ascending.
    pub pending_ids: Vec<RecordId>,
    /// Set when there is nothing to select.
    pub info: Option<&'static str>,
}

/// Everything needed to draw one page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub page: Page,
    pub title: &'static str,
    pub form_title: &'static str,
    pub records_heading: &'static str,
    pub records: TableData,
    /// Set instead of a table when there are no rows.
    pub info: Option<&'static str>,
    /// Absent when there are no rows.
    pub download: Option<Download>,
    pub status_update: Option<StatusUpdate>,
}

/// Handler result.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub feedback: Option<Feedback>,
    pub view: PageView,
}

/// Handles one request against `service`.
///
/// ## Returns
/// * `Ok(Response)` - the page, with feedback for writes (success or error)
/// * `Err(AppError)` - the page could not be loaded
pub async fn handle(service: &RecordService, request: Request) -> AppResult<Response> {
    let start = Instant::now();
    let page = request.page();

    let feedback = match request {
        Request::Show(_) | Request::Export(_) => None,
        Request::Submit(form) => Some(submit(service, form).await),
        Request::MarkCompleted(id) => Some(mark_completed(service, id).await?),
    };

    let view = load_page(service, page).await?;

    debug!(
        page = ?page,
        rows = view.records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Page handled"
    );

    Ok(Response { feedback, view })
}

async fn submit(service: &RecordService, form: Form) -> Feedback {
    let page = form.page();
    let fields = form.into_fields(today());

    match service.add_record(page.table(), &fields).await {
        Ok(id) => {
            info!(page = ?page, id = %id, "Form submitted");
            Feedback::Success(page.added_message().to_string())
        }
        Err(err) => Feedback::Error(err.into()),
    }
}

/// Only ids offered by the pending selector are accepted.
async fn mark_completed(service: &RecordService, id: RecordId) -> AppResult<Feedback> {
    let pending = service.pending_order_ids().await?;
    if !pending.contains(&id) {
        return Ok(Feedback::Error(AppError::invalid_input(format!(
            "Order {} is not pending",
            id
        ))));
    }

    Ok(match service.update_status(id, OrderStatus::Completed).await {
        Ok(()) => Feedback::Success(ORDER_COMPLETED.to_string()),
        Err(err) => Feedback::Error(err.into()),
    })
}

/// Loads a page's record table and its derived sections.
pub async fn load_page(service: &RecordService, page: Page) -> AppResult<PageView> {
    let records = service.fetch_all(page.table()).await?;

    let (info, download) = if records.is_empty() {
        (Some(page.empty_message()), None)
    } else {
        let download = Download {
            label: page.download_label(),
            file_name: export::file_name(page.table()),
            mime: CSV_MIME,
            data: export::to_csv(&records)?,
        };
        (None, Some(download))
    };

    let status_update = if page == Page::Orders && !records.is_empty() {
        let pending_ids = service.pending_order_ids().await?;
        let info = pending_ids.is_empty().then_some(NO_PENDING_ORDERS);
        Some(StatusUpdate { pending_ids, info })
    } else {
        None
    };

    Ok(PageView {
        page,
        title: page.title(),
        form_title: page.form_title(),
        records_heading: page.records_heading(),
        records,
        info,
        download,
        status_update,
    })
}
