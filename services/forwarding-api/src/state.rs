//! Application state for the Forwarding API service.

use std::sync::Arc;

use suitebox_core::{
    ConsolidationConfig, ConsolidationService, LogMailer, PackageLifecycleService, PackageNotifier,
    RateResolver,
};
use suitebox_db::pg::{
    PgInvoiceRepository, PgNotificationRepository, PgPackageRepository, PgRateRepository,
    PgShipmentRepository, PgUserRepository,
};
use suitebox_db::{DbPool, MemoryParcelRepository, Repositories};

use crate::config::Config;

/// Consolidation service wired to the PostgreSQL repositories
pub type Consolidator = ConsolidationService<
    PgPackageRepository,
    PgUserRepository,
    PgRateRepository,
    PgShipmentRepository,
    PgInvoiceRepository,
    PgNotificationRepository,
>;

/// Rate resolver wired to the PostgreSQL rate table
pub type Resolver = RateResolver<PgRateRepository>;

/// Lifecycle service over the in-memory parcel store
pub type Lifecycle = PackageLifecycleService<MemoryParcelRepository>;

/// Notifier wired to PostgreSQL and the log-only mailer
pub type Notifier = PackageNotifier<PgPackageRepository, PgUserRepository, LogMailer>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub consolidator: Arc<Consolidator>,
    pub resolver: Arc<Resolver>,
    pub lifecycle: Arc<Lifecycle>,
    pub notifier: Arc<Notifier>,
    /// Database pool (readiness probe)
    pub pool: DbPool,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire up all services from the repository bundle
    pub fn new(repos: Repositories, pool: DbPool, config: Config) -> Self {
        let packages = Arc::new(repos.packages);
        let users = Arc::new(repos.users);
        let rates = Arc::new(repos.rates);

        let consolidator = ConsolidationService::new(
            Arc::clone(&packages),
            Arc::clone(&users),
            Arc::clone(&rates),
            Arc::new(repos.shipments),
            Arc::new(repos.invoices),
            Arc::new(repos.notifications),
            ConsolidationConfig::default().with_due_days(config.invoice_due_days),
        );

        let resolver = RateResolver::new(rates);
        let lifecycle = PackageLifecycleService::new(Arc::new(MemoryParcelRepository::new()));
        let notifier = PackageNotifier::new(packages, users, Arc::new(LogMailer));

        Self {
            consolidator: Arc::new(consolidator),
            resolver: Arc::new(resolver),
            lifecycle: Arc::new(lifecycle),
            notifier: Arc::new(notifier),
            pool,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
