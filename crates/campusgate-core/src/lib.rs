#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod graphql;
pub mod ports;
pub mod queries;

// ============================================================================
// Public API
// ============================================================================

// Configuration
pub use config::{
    ConfigStatus, ENV_DEMO_MODE, ENV_DRUPAL_BASE_URL, ENV_DRUPAL_CLIENT_ID,
    ENV_DRUPAL_CLIENT_SECRET, ENV_NODE_ENV, Environment, GatewayConfig, REQUIRED_VARS,
};

// Domain entities
pub use domain::{
    CampusEvent, Envelope, EventsData, Faculty, FacultyData, Highlight, Homepage, HomepageData,
    Image, ImageVariation, NewsData, NewsItem, NodeList, Page, Program, ProgramsData, RichText,
    StatItem, Term, Timestamp,
};

// GraphQL wire shapes
pub use graphql::{
    CONFIGURATION_REQUIRED_CODE, CONFIGURATION_REQUIRED_MESSAGE, GraphqlRequest,
    configuration_required_envelope,
};

// Ports
pub use ports::TokenSource;

// Query documents
pub use queries::QueryTarget;
