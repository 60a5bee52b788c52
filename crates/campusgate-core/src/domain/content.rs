//! Content entity types.
//!
//! These mirror the shapes the GraphQL schema returns for each content
//! type. Optional fields stay optional: listing queries request fewer
//! fields than detail queries, and editors leave plenty of fields blank.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Shared value types
// ─────────────────────────────────────────────────────────────────────────────

/// A processed rich-text field, optionally with a teaser summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichText {
    /// Sanitized HTML produced by the CMS text filters.
    pub processed: String,
    /// Editor-supplied teaser, when the field carries one.
    pub summary: Option<String>,
}

/// A date field; the schema exposes it as a Unix timestamp.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Timestamp {
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
}

/// A managed image with optional derivative variations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// URL of the original upload, usually under `/sites/default/files/`.
    pub url: String,
    pub alt: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Pre-rendered image-style derivatives (LARGE, MEDIUM, THUMBNAIL).
    pub variations: Option<Vec<ImageVariation>>,
}

/// One rendered image-style derivative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageVariation {
    /// Image-style machine name, e.g. `LARGE`.
    pub name: String,
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// A taxonomy term reference (department, event type, news category).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: String,
    pub name: String,
    pub path: Option<String>,
}

/// One homepage statistic ("14,000+ Students").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatItem {
    pub id: String,
    /// The headline figure, kept as text ("98%", "14,000+").
    pub number: String,
    pub label: String,
}

/// One program highlight paragraph (icon + title + blurb).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Highlight {
    pub id: String,
    /// Icon key the front end maps to an SVG.
    pub icon: Option<String>,
    pub title: String,
    pub description: Option<RichText>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Content entities
// ─────────────────────────────────────────────────────────────────────────────

/// An academic program (degree page).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    pub id: String,
    pub title: String,
    pub path: String,
    pub body: Option<RichText>,
    /// Degree awarded, e.g. `"Bachelor of Science"`.
    pub degree_type: Option<String>,
    pub department: Option<Vec<Term>>,
    /// Typical time to completion, e.g. `"4 years"`.
    pub duration: Option<String>,
    pub credits: Option<u32>,
    pub image: Option<Image>,
    pub highlights: Option<Vec<Highlight>>,
}

/// A faculty member profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    pub id: String,
    /// Display name, e.g. `"Dr. Elena Vasquez"`.
    pub title: String,
    pub path: String,
    pub body: Option<RichText>,
    pub position: Option<String>,
    pub department: Option<Vec<Term>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub office: Option<String>,
    pub photo: Option<Image>,
    pub research_interests: Option<Vec<String>>,
    pub education: Option<RichText>,
}

/// A campus event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusEvent {
    pub id: String,
    pub title: String,
    pub path: String,
    pub body: Option<RichText>,
    pub event_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub location: Option<String>,
    pub event_type: Option<Vec<Term>>,
    pub registration_url: Option<String>,
    pub image: Option<Image>,
}

/// A news article.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: String,
    pub title: String,
    pub path: String,
    pub created: Option<Timestamp>,
    pub body: Option<RichText>,
    pub image: Option<Image>,
    pub category: Option<Vec<Term>>,
    /// Editorially pinned to the homepage.
    pub featured: Option<bool>,
}

/// The homepage singleton node.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homepage {
    pub id: String,
    pub title: String,
    pub path: Option<String>,
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub hero_description: Option<RichText>,
    pub stats_items: Option<Vec<StatItem>>,
    pub featured_programs_title: Option<String>,
    pub cta_title: Option<String>,
    pub cta_description: Option<RichText>,
    /// Label of the primary call-to-action button.
    pub cta_primary: Option<String>,
    pub cta_secondary: Option<String>,
}

/// A basic page (about, policies, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub body: Option<RichText>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response wrappers
// ─────────────────────────────────────────────────────────────────────────────

/// The `{ nodes: [...] }` collection wrapper every listing field uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeList<T> {
    pub nodes: Vec<T>,
}

/// `data.nodeHomepages` payload of `GetHomepageData`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageData {
    pub node_homepages: NodeList<Homepage>,
}

/// `data.nodePrograms` payload of `GetPrograms` / `GetFeaturedPrograms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramsData {
    pub node_programs: NodeList<Program>,
}

/// `data.nodeFaculties` payload of `GetFaculty`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyData {
    pub node_faculties: NodeList<Faculty>,
}

/// `data.nodeEvents` payload of `GetEvents` / `GetUpcomingEvents`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsData {
    pub node_events: NodeList<CampusEvent>,
}

/// `data.nodeNewsItems` payload of `GetNews` / `GetFeaturedNews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsData {
    pub node_news_items: NodeList<NewsItem>,
}

/// The outer `{ data: ... }` GraphQL response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}
