//! Configuration module

mod site;

pub use site::ApiConfig;
pub use site::MessagesConfig;
pub use site::SiteConfig;
pub use site::StatusConfig;
