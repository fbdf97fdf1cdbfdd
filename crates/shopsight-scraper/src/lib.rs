pub mod about;
pub mod aggregate;
pub mod catalog;
pub mod client;
pub mod contact;
pub mod error;
pub mod faqs;
pub mod home;
pub mod links;
pub mod policies;
mod probe;
mod text;

pub use aggregate::fetch_brand_context;
pub use catalog::CatalogLimits;
pub use client::{store_root, StorefrontClient};
pub use error::ScrapeError;
