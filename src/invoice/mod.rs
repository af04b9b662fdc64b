mod index;
mod view;

pub use index::{InvoiceNumber, InvoiceNumberIndex, InvoiceSlot};
pub use view::{InvoiceItem, InvoiceView, Vehicle};
