// Domain layer modules
pub mod clock;
pub mod contact_record;

// Re-exports
pub use clock::{format_timestamp, Clock, SystemClock, TIMESTAMP_FORMAT};
pub use contact_record::{ContactRecord, ContactSubmission, PayloadError};
