//! Core domain types.
//!
//! Typed renditions of the CMS content model, independent of any transport
//! concern. Field names serialize in camelCase to match the GraphQL schema
//! the site queries, so these types deserialize straight out of upstream
//! (or fixture) responses.

mod content;

// Re-export content types at the domain level for convenience
pub use content::{
    CampusEvent, Envelope, EventsData, Faculty, FacultyData, Highlight, Homepage, HomepageData,
    Image, ImageVariation, NewsData, NewsItem, NodeList, Page, Program, ProgramsData, RichText,
    StatItem, Term, Timestamp,
};
