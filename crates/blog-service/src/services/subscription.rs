//! Newsletter subscription service

use blog_core::EmailSignup;
use tracing::{info, instrument};

use crate::dto::SubscriptionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

pub struct SubscriptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SubscriptionService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Subscribe an address. Subscribing twice is not an error.
    #[instrument(skip(self, email))]
    pub async fn subscribe(&self, email: &str) -> ServiceResult<SubscriptionResponse> {
        let signup = EmailSignup::new(email);
        if signup.email.is_empty() {
            return Err(ServiceError::validation("Email is required"));
        }

        let created = self.ctx.subscription_repo().subscribe(&signup.email).await?;
        if created {
            info!("Subscription created");
        }

        Ok(SubscriptionResponse::new(!created))
    }
}
