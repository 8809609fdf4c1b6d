//! Domain models for `QuotaBar`.

mod credential;
mod quota;

pub use credential::Credential;
pub use quota::PremiumQuota;
