//! Business logic services for the application layer.

pub mod code_allocator;
pub mod url_registry;

pub use code_allocator::{Allocation, CodeAllocator};
pub use url_registry::{CreateOutcome, RegistrySettings, ResolvedUrl, Shortened, UrlRegistry};
