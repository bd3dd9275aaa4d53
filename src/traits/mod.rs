pub mod name_matcher;
pub mod property_source;
pub mod ownership_resolver;

// Re-export traits
pub use name_matcher::NameMatcher;
pub use property_source::PropertySource;
pub use ownership_resolver::OwnershipResolver;
