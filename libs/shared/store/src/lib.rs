pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileAppointmentStore;
pub use memory::MemoryAppointmentStore;

use shared_models::AppointmentRecord;

/// Process-wide persisted slot for the single tracked appointment.
///
/// All methods are synchronous and expected to complete in microseconds;
/// monitors call them inline from their polling tick. Implementations must
/// serialize access so a read-modify-clear sequence cannot interleave with
/// a booking write.
pub trait AppointmentStore: Send + Sync {
    fn get(&self) -> Result<Option<AppointmentRecord>, StoreError>;

    /// Overwrites any previously stored appointment.
    fn put(&self, record: AppointmentRecord) -> Result<(), StoreError>;

    fn clear(&self) -> Result<(), StoreError>;

    /// Compare-and-clear: removes the record only while the stored raw
    /// timestamp still equals `scheduled_at`. Returns whether a clear
    /// happened. Lets a monitor expire the record it read without racing a
    /// fresh booking.
    fn clear_if_matches(&self, scheduled_at: &str) -> Result<bool, StoreError>;
}
