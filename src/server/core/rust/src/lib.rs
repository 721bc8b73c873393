/* src/server/core/rust/src/lib.rs */

pub mod compose;
pub mod config;
pub mod dictionary;
pub mod errors;
pub mod injector;
pub mod locale;
pub mod resolve;
pub mod routing;
pub mod server;

// Re-exports for ergonomic use
pub use compose::{ComposeContext, LegalBody, LegalDocument, Page, compose};
pub use config::SiteConfig;
pub use dictionary::{Dictionary, DictionaryLoader, DictionarySource, MissingKey, check_symmetry};
pub use errors::SiteError;
pub use locale::Locale;
pub use resolve::{ResolveContext, cookie_value, resolve, resolve_request};
pub use routing::{RouteDecision, switch_locale_path};
pub use server::{SiteParts, SiteServer};
