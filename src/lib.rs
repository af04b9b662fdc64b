pub mod api;
pub mod config;
pub mod error;
pub mod invoice;
pub mod logging;
pub mod month;
pub mod profile;
pub mod report;
pub mod session;
pub mod transport;

pub use config::{load_config, Config, Credentials};
pub use error::{Result, SemPararError};
pub use invoice::{InvoiceItem, InvoiceNumber, InvoiceNumberIndex, InvoiceSlot, InvoiceView, Vehicle};
pub use month::month_from_any_number;
pub use profile::AccountProfile;
pub use session::Session;
pub use transport::{HttpTransport, Transport, TransportError};
