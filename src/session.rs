//! Session and invoice cache for one Sem Parar account.
//!
//! Everything is lazy: the first read that needs account data logs in, the
//! first read that needs invoice numbers queries the summary, and the first
//! read of the selected month's invoice runs the page fetch. Results are kept
//! until the selected month changes.

use rust_decimal::Decimal;
use tracing::{debug, error, Span};

use crate::api::{self, Endpoints, InvoiceFilter, InvoicePage, LoginResponse, JSON_HEADERS};
use crate::config::Credentials;
use crate::error::{Result, SemPararError};
use crate::invoice::{InvoiceItem, InvoiceNumberIndex, InvoiceView, Vehicle};
use crate::month;
use crate::profile::AccountProfile;
use crate::transport::Transport;

/// Stateful client for one account.
///
/// Not meant to be shared: every operation takes `&mut self` and a fetch
/// runs to completion before the call returns.
pub struct Session<T: Transport> {
    credentials: Credentials,
    transport: T,
    endpoints: Endpoints,
    current_month: u32,
    span: Span,
    /// Set once login succeeds; doubles as the authenticated flag
    profile: Option<AccountProfile>,
    invoice_numbers: Option<InvoiceNumberIndex>,
    /// `None` selects the open invoice
    month: Option<u32>,
    invoice: Option<InvoiceView>,
}

impl<T: Transport> Session<T> {
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self {
            credentials,
            transport,
            endpoints: Endpoints::default(),
            current_month: month::current_month(),
            span: Span::none(),
            profile: None,
            invoice_numbers: None,
            month: None,
            invoice: None,
        }
    }

    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Pin the month treated as "now" instead of reading the clock.
    pub fn with_current_month(mut self, current_month: u32) -> Self {
        self.current_month = current_month;
        self
    }

    /// Span entered by every operation on this session
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn cpf(&self) -> &str {
        &self.credentials.cpf
    }

    pub fn current_month(&self) -> u32 {
        self.current_month
    }

    pub fn selected_month(&self) -> Option<u32> {
        self.month
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.is_some()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in unless already logged in, returning the account profile.
    pub fn authenticate(&mut self) -> Result<&AccountProfile> {
        let span = self.span.clone();
        let _entered = span.enter();

        let profile = match self.profile.take() {
            Some(profile) => profile,
            None => self.login()?,
        };
        Ok(self.profile.insert(profile))
    }

    pub fn profile(&mut self) -> Result<&AccountProfile> {
        self.authenticate()
    }

    /// Invoice numbers of the tracked months, queried once per session.
    pub fn invoice_numbers(&mut self) -> Result<&InvoiceNumberIndex> {
        self.authenticate()?;
        let span = self.span.clone();
        let _entered = span.enter();

        let index = match self.invoice_numbers.take() {
            Some(index) => index,
            None => self.fetch_invoice_numbers()?,
        };
        Ok(self.invoice_numbers.insert(index))
    }

    /// Select the month whose invoice is read next and drop the cached one.
    ///
    /// `None` and the current month are always accepted. Any other month must
    /// have an invoice number in the tracked window.
    pub fn select_month(&mut self, month: Option<u32>) -> Result<()> {
        self.authenticate()?;
        let span = self.span.clone();
        let _entered = span.enter();
        debug!(?month, "changing the invoice month");

        if let Some(month) = month {
            if month != self.current_month && self.invoice_numbers()?.invoice_number(month).is_none() {
                error!(month, "failed to change the invoice month");
                return Err(SemPararError::InvalidMonth(month));
            }
        }

        self.month = month;
        self.invoice = None;
        debug!(month = ?self.month, "invoice month changed");
        Ok(())
    }

    /// The selected month's invoice, fetched on first access.
    pub fn invoice_view(&mut self) -> Result<&InvoiceView> {
        self.authenticate()?;
        let span = self.span.clone();
        let _entered = span.enter();

        let view = match self.invoice.take() {
            Some(view) => view,
            None => self.fetch_invoice()?,
        };
        Ok(self.invoice.insert(view))
    }

    pub fn invoice(&mut self) -> Result<&[InvoiceItem]> {
        Ok(self.invoice_view()?.items())
    }

    pub fn invoice_total_price(&mut self) -> Result<Decimal> {
        Ok(self.invoice_view()?.total())
    }

    /// Vehicle of the first item on the invoice, if it has any items
    pub fn vehicle(&mut self) -> Result<Option<&Vehicle>> {
        Ok(self.invoice_view()?.vehicle())
    }

    fn login(&mut self) -> Result<AccountProfile> {
        debug!(cpf = %self.credentials.cpf, "logging in");
        let payload = api::login_payload(&self.credentials);
        let body = self
            .transport
            .execute_post(&self.endpoints.login, &payload, true, JSON_HEADERS)
            .map_err(|e| {
                error!(cpf = %self.credentials.cpf, "failed to log in: {e}");
                SemPararError::Connect(e)
            })?;

        let response: LoginResponse = serde_json::from_str(&body).map_err(|e| {
            error!(cpf = %self.credentials.cpf, "cpf or password invalid");
            SemPararError::CpfOrPasswordIncorrect {
                cpf: self.credentials.cpf.clone(),
                source: e,
            }
        })?;

        debug!(cpf = %self.credentials.cpf, "logged in");
        Ok(AccountProfile::from(response))
    }

    fn fetch_invoice_numbers(&mut self) -> Result<InvoiceNumberIndex> {
        debug!("getting the invoice numbers");
        let body = self
            .transport
            .execute_post(
                &self.endpoints.invoice_summary,
                &api::invoice_summary_payload(),
                true,
                JSON_HEADERS,
            )
            .map_err(|e| {
                error!("failed to connect to get the invoice numbers: {e}");
                SemPararError::Connect(e)
            })?;

        let index = InvoiceNumberIndex::from_summary(self.current_month, &body).inspect_err(|e| {
            error!("failed to get the invoice numbers: {e}");
        })?;
        debug!(?index, "invoice numbers loaded");
        Ok(index)
    }

    fn invoice_filter(&mut self) -> Result<InvoiceFilter> {
        let Some(month) = self.month else {
            return Ok(InvoiceFilter::Open);
        };
        let current_month = self.current_month;

        match self.invoice_numbers()?.invoice_number(month) {
            Some(number) => Ok(InvoiceFilter::Number(number.clone())),
            None if month == current_month => Ok(InvoiceFilter::Open),
            None => Err(SemPararError::InvalidMonth(month)),
        }
    }

    /// Request pages from 1 upward until one comes back empty. Nothing is
    /// kept unless every page succeeds.
    fn fetch_invoice(&mut self) -> Result<InvoiceView> {
        debug!(month = ?self.month, "getting the invoice data");
        let filter = self.invoice_filter()?;

        let mut pages: Vec<InvoicePage> = Vec::new();
        let mut page_index = 1;
        loop {
            let payload = api::invoice_page_payload(&filter, page_index);
            let body = self
                .transport
                .execute_post(&self.endpoints.invoice, &payload, true, JSON_HEADERS)
                .map_err(|e| {
                    error!(page = page_index, "failed to connect to get the invoice data: {e}");
                    SemPararError::Connect(e)
                })?;

            let page: InvoicePage = serde_json::from_str(&body).map_err(|e| {
                error!(page = page_index, "failed to get the invoice data: {e}");
                SemPararError::InvoiceData(e)
            })?;

            if page.is_empty() {
                break;
            }
            debug!(page = page_index, items = page.item_faturas.len(), "invoice page received");
            pages.push(page);
            page_index += 1;
        }

        let view = InvoiceView::from_pages(pages);
        debug!(
            month = ?self.month,
            items = view.items().len(),
            total = %view.total(),
            "invoice data loaded"
        );
        Ok(view)
    }
}
