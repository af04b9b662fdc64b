use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::InvoiceSummaryEntry;
use crate::error::{Result, SemPararError};
use crate::month::tracked_months;

/// Invoice identifier assigned by the service.
///
/// Kept in the JSON type it arrived in so it can be sent back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceNumber {
    Numeric(u64),
    Code(String),
}

impl fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceNumber::Numeric(n) => write!(f, "{n}"),
            InvoiceNumber::Code(code) => f.write_str(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvoiceSlot {
    Issued(InvoiceNumber),
    /// The month is tracked but has no invoice (yet)
    NotIssued,
}

impl From<Option<InvoiceNumber>> for InvoiceSlot {
    fn from(number: Option<InvoiceNumber>) -> Self {
        match number {
            Some(InvoiceNumber::Code(code)) if code.trim().is_empty() => InvoiceSlot::NotIssued,
            Some(number) => InvoiceSlot::Issued(number),
            None => InvoiceSlot::NotIssued,
        }
    }
}

/// Invoice numbers for the three previous months and the current one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumberIndex {
    slots: [(u32, InvoiceSlot); 4],
}

impl InvoiceNumberIndex {
    /// Build the index from the summary endpoint response.
    ///
    /// Entries are oldest first. The first three belong to the previous
    /// months; a fourth, if present, belongs to `current_month`.
    pub fn from_summary(current_month: u32, body: &str) -> Result<Self> {
        let entries: Vec<InvoiceSummaryEntry> = serde_json::from_str(body)
            .map_err(|e| SemPararError::InvoiceNumbers(e.to_string()))?;
        if entries.len() < 3 {
            return Err(SemPararError::InvoiceNumbers(format!(
                "expected at least 3 invoices, got {}",
                entries.len()
            )));
        }

        let mut numbers = entries.into_iter().map(|entry| entry.numero_fatura);
        let slots = tracked_months(current_month)
            .map(|month| (month, InvoiceSlot::from(numbers.next().flatten())));
        Ok(Self { slots })
    }

    /// Tracked months with their slots, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (u32, &InvoiceSlot)> {
        self.slots.iter().map(|(month, slot)| (*month, slot))
    }

    pub fn slot(&self, month: u32) -> Option<&InvoiceSlot> {
        self.iter()
            .find(|(tracked, _)| *tracked == month)
            .map(|(_, slot)| slot)
    }

    /// The invoice number for `month`, if the month is tracked and invoiced
    pub fn invoice_number(&self, month: u32) -> Option<&InvoiceNumber> {
        match self.slot(month) {
            Some(InvoiceSlot::Issued(number)) => Some(number),
            _ => None,
        }
    }
}
