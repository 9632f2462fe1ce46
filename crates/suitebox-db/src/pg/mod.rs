//! PostgreSQL repository implementations

mod invoice;
mod notification;
mod package;
mod rate;
mod shipment;
mod user;

pub use invoice::PgInvoiceRepository;
pub use notification::PgNotificationRepository;
pub use package::PgPackageRepository;
pub use rate::PgRateRepository;
pub use shipment::PgShipmentRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub packages: PgPackageRepository,
    pub shipments: PgShipmentRepository,
    pub invoices: PgInvoiceRepository,
    pub rates: PgRateRepository,
    pub notifications: PgNotificationRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            packages: PgPackageRepository::new(pool.clone()),
            shipments: PgShipmentRepository::new(pool.clone()),
            invoices: PgInvoiceRepository::new(pool.clone()),
            rates: PgRateRepository::new(pool.clone()),
            notifications: PgNotificationRepository::new(pool),
        }
    }
}
