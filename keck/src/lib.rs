mod auth;
mod client;
mod keck_url;
pub mod domain;

pub use auth::*;
pub use client::*;
pub use keck_url::KeckURL;
