//! Outbound notification seam
//!
//! Email delivery is an external collaborator reached through the
//! [`Mailer`] trait; sends are fire-and-forget and a failed send never
//! fails the operation that triggered it.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use suitebox_db::{PackageRepository, UserRepository};
use suitebox_types::UserId;
use uuid::Uuid;

use crate::error::CoreError;

/// Payload for the package-received email
#[derive(Debug, Clone)]
pub struct PackageReceivedEmail {
    pub user_name: String,
    pub tracking_number: String,
    pub carrier: String,
    pub received_date: String,
}

/// Outbound mail delivery error
#[derive(Debug, Error)]
#[error("mail delivery failed: {0}")]
pub struct MailerError(pub String);

/// Outbound email collaborator
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the package-received notification email
    async fn send_package_received(
        &self,
        to: &str,
        email: PackageReceivedEmail,
    ) -> Result<(), MailerError>;
}

/// Mailer that only logs, for environments without an email provider
#[derive(Debug, Default, Clone)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send_package_received(
        &self,
        to: &str,
        email: PackageReceivedEmail,
    ) -> Result<(), MailerError> {
        tracing::info!(
            to,
            tracking_number = %email.tracking_number,
            carrier = %email.carrier,
            "package received email (log only)"
        );
        Ok(())
    }
}

/// Sends package-received notifications on behalf of warehouse staff
pub struct PackageNotifier<P, U, M>
where
    P: PackageRepository,
    U: UserRepository,
    M: Mailer,
{
    packages: Arc<P>,
    users: Arc<U>,
    mailer: Arc<M>,
}

impl<P, U, M> PackageNotifier<P, U, M>
where
    P: PackageRepository,
    U: UserRepository,
    M: Mailer,
{
    /// Create a new notifier
    pub fn new(packages: Arc<P>, users: Arc<U>, mailer: Arc<M>) -> Self {
        Self { packages, users, mailer }
    }

    /// Email a package's owner that it arrived.
    ///
    /// Admin-gated: the requester must carry the `admin` role. The email
    /// send itself is fire-and-forget; a delivery failure is logged and
    /// the call still succeeds.
    pub async fn notify_received(
        &self,
        requester: UserId,
        package_id: Uuid,
    ) -> Result<(), CoreError> {
        let admin = self.users.find_by_id(requester.0).await?.ok_or(CoreError::Unauthorized)?;
        if admin.role != "admin" {
            return Err(CoreError::Forbidden);
        }

        let package = self.packages.find_by_id(package_id).await?.ok_or(CoreError::NotFound)?;
        let owner = self.users.find_by_id(package.user_id).await?.ok_or(CoreError::NotFound)?;

        let email = PackageReceivedEmail {
            user_name: owner.name.clone().unwrap_or_else(|| owner.email.clone()),
            tracking_number: package.tracking_number.clone(),
            carrier: package.carrier.clone().unwrap_or_else(|| "Unknown".to_string()),
            received_date: package.received_at.format("%Y-%m-%d").to_string(),
        };

        if let Err(e) = self.mailer.send_package_received(&owner.email, email).await {
            tracing::warn!(package_id = %package_id, error = %e, "package received email failed");
        }

        Ok(())
    }
}
