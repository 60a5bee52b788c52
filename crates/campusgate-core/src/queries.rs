//! Canonical GraphQL documents the site issues against the CMS.
//!
//! Operation names (`GetPrograms`, `GetFeaturedPrograms`, ...) are part of
//! the external interface: the demo-mode router matches on them, and the
//! front end ships these exact documents. Changing a name here breaks both.

/// Homepage singleton with hero, stats, and CTA content.
pub const GET_HOMEPAGE_DATA: &str = r"
query GetHomepageData {
  nodeHomepages(first: 1) {
    nodes {
      id
      title
      path
      heroTitle
      heroSubtitle
      heroDescription {
        processed
      }
      statsItems {
        ... on ParagraphStatItem {
          id
          number
          label
        }
      }
      featuredProgramsTitle
      ctaTitle
      ctaDescription {
        processed
      }
      ctaPrimary
      ctaSecondary
    }
  }
}
";

/// Full academic-programs listing, sorted by title.
pub const GET_PROGRAMS: &str = r"
query GetPrograms($first: Int = 20) {
  nodePrograms(first: $first, sortKey: TITLE) {
    nodes {
      id
      title
      path
      ... on NodeProgram {
        body {
          processed
          summary
        }
        degreeType
        department {
          ... on TermInterface {
            id
            name
          }
        }
        duration
        image {
          url
          alt
          width
          height
          variations(styles: [LARGE, MEDIUM]) {
            name
            url
            width
            height
          }
        }
        highlights {
          ... on ParagraphHighlightItem {
            id
            icon
            title
            description {
              processed
            }
          }
        }
      }
    }
  }
}
";

/// Single program resolved through the route system.
pub const GET_PROGRAM_BY_PATH: &str = r"
query GetProgramByPath($path: String!) {
  route(path: $path) {
    ... on RouteInternal {
      entity {
        ... on NodeProgram {
          id
          title
          path
          body {
            processed
          }
          degreeType
          department {
            ... on TermInterface {
              id
              name
            }
          }
          duration
          image {
            url
            alt
            width
            height
            variations(styles: [LARGE, MEDIUM]) {
              name
              url
              width
              height
            }
          }
          highlights {
            ... on ParagraphHighlightItem {
              id
              icon
              title
              description {
                processed
              }
            }
          }
        }
      }
    }
  }
}
";

/// Faculty directory, sorted by name.
pub const GET_FACULTY: &str = r"
query GetFaculty($first: Int = 50) {
  nodeFaculties(first: $first, sortKey: TITLE) {
    nodes {
      id
      title
      path
      ... on NodeFaculty {
        body {
          processed
        }
        position
        department {
          ... on TermInterface {
            id
            name
          }
        }
        email
        phone
        office
        photo {
          url
          alt
          width
          height
          variations(styles: [MEDIUM, THUMBNAIL]) {
            name
            url
            width
            height
          }
        }
        researchInterests
        education {
          processed
        }
      }
    }
  }
}
";

/// Single faculty profile resolved through the route system.
pub const GET_FACULTY_BY_PATH: &str = r"
query GetFacultyByPath($path: String!) {
  route(path: $path) {
    ... on RouteInternal {
      entity {
        ... on NodeFaculty {
          id
          title
          path
          body {
            processed
          }
          position
          department {
            ... on TermInterface {
              id
              name
            }
          }
          email
          phone
          office
          photo {
            url
            alt
            width
            height
            variations(styles: [LARGE, MEDIUM]) {
              name
              url
              width
              height
            }
          }
          researchInterests
          education {
            processed
          }
        }
      }
    }
  }
}
";

/// Campus events listing.
pub const GET_EVENTS: &str = r"
query GetEvents($first: Int = 20) {
  nodeEvents(first: $first, sortKey: CREATED_AT) {
    nodes {
      id
      title
      path
      ... on NodeEvent {
        body {
          processed
          summary
        }
        eventDate {
          timestamp
        }
        endDate {
          timestamp
        }
        location
        eventType {
          ... on TermInterface {
            id
            name
          }
        }
        registrationUrl
        image {
          url
          alt
          width
          height
          variations(styles: [LARGE, MEDIUM]) {
            name
            url
            width
            height
          }
        }
      }
    }
  }
}
";

/// Single event resolved through the route system.
pub const GET_EVENT_BY_PATH: &str = r"
query GetEventByPath($path: String!) {
  route(path: $path) {
    ... on RouteInternal {
      entity {
        ... on NodeEvent {
          id
          title
          path
          body {
            processed
          }
          eventDate {
            timestamp
          }
          endDate {
            timestamp
          }
          location
          eventType {
            ... on TermInterface {
              id
              name
            }
          }
          registrationUrl
          image {
            url
            alt
            width
            height
            variations(styles: [LARGE, MEDIUM]) {
              name
              url
              width
              height
            }
          }
        }
      }
    }
  }
}
";

/// News listing, newest first.
pub const GET_NEWS: &str = r"
query GetNews($first: Int = 20) {
  nodeNewsItems(first: $first, sortKey: CREATED_AT) {
    nodes {
      id
      title
      path
      created {
        timestamp
      }
      ... on NodeNews {
        body {
          processed
          summary
        }
        image {
          url
          alt
          width
          height
          variations(styles: [LARGE, MEDIUM, THUMBNAIL]) {
            name
            url
            width
            height
          }
        }
        category {
          ... on TermInterface {
            id
            name
          }
        }
        featured
      }
    }
  }
}
";

/// Single news article resolved through the route system.
pub const GET_NEWS_BY_PATH: &str = r"
query GetNewsByPath($path: String!) {
  route(path: $path) {
    ... on RouteInternal {
      entity {
        ... on NodeNews {
          id
          title
          path
          created {
            timestamp
          }
          body {
            processed
          }
          image {
            url
            alt
            width
            height
            variations(styles: [LARGE, MEDIUM]) {
              name
              url
              width
              height
            }
          }
          category {
            ... on TermInterface {
              id
              name
            }
          }
          featured
        }
      }
    }
  }
}
";

/// Generic route resolution for any content type (used by catch-all pages).
pub const GET_NODE_BY_PATH: &str = r"
query GetNodeByPath($path: String!) {
  route(path: $path) {
    ... on RouteInternal {
      entity {
        ... on NodePage {
          id
          title
          body {
            processed
          }
        }
        ... on NodeProgram {
          id
          title
          path
          body {
            processed
          }
          degreeType
          department {
            ... on TermInterface {
              id
              name
            }
          }
          duration
          highlights {
            ... on ParagraphHighlightItem {
              id
              icon
              title
              description {
                processed
              }
            }
          }
        }
        ... on NodeFaculty {
          id
          title
          path
          body {
            processed
          }
          position
          department {
            ... on TermInterface {
              id
              name
            }
          }
          email
          phone
          office
          researchInterests
          education {
            processed
          }
        }
        ... on NodeEvent {
          id
          title
          path
          body {
            processed
          }
          eventDate {
            timestamp
          }
          endDate {
            timestamp
          }
          location
          eventType {
            ... on TermInterface {
              id
              name
            }
          }
          registrationUrl
        }
        ... on NodeNews {
          id
          title
          path
          created {
            timestamp
          }
          body {
            processed
          }
          category {
            ... on TermInterface {
              id
              name
            }
          }
          featured
        }
        ... on NodeHomepage {
          id
          title
          heroTitle
          heroSubtitle
          heroDescription {
            processed
          }
          statsItems {
            ... on ParagraphStatItem {
              id
              number
              label
            }
          }
          featuredProgramsTitle
          ctaTitle
          ctaDescription {
            processed
          }
          ctaPrimary
          ctaSecondary
        }
      }
    }
  }
}
";

/// First three programs for the homepage cards.
pub const GET_FEATURED_PROGRAMS: &str = r"
query GetFeaturedPrograms {
  nodePrograms(first: 3, sortKey: TITLE) {
    nodes {
      id
      title
      path
      ... on NodeProgram {
        degreeType
        department {
          ... on TermInterface {
            id
            name
          }
        }
        duration
        image {
          url
          alt
          variations(styles: [MEDIUM]) {
            name
            url
            width
            height
          }
        }
      }
    }
  }
}
";

/// Latest three news articles for the homepage.
pub const GET_FEATURED_NEWS: &str = r"
query GetFeaturedNews {
  nodeNewsItems(first: 3, sortKey: CREATED_AT) {
    nodes {
      id
      title
      path
      created {
        timestamp
      }
      ... on NodeNews {
        body {
          summary
        }
        image {
          url
          alt
          variations(styles: [MEDIUM, THUMBNAIL]) {
            name
            url
            width
            height
          }
        }
        category {
          ... on TermInterface {
            id
            name
          }
        }
        featured
      }
    }
  }
}
";

/// Next three events for the homepage.
pub const GET_UPCOMING_EVENTS: &str = r"
query GetUpcomingEvents {
  nodeEvents(first: 3, sortKey: CREATED_AT) {
    nodes {
      id
      title
      path
      ... on NodeEvent {
        eventDate {
          timestamp
        }
        location
        eventType {
          ... on TermInterface {
            id
            name
          }
        }
      }
    }
  }
}
";

/// One canonical document per CLI query target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTarget {
    Homepage,
    Programs,
    FeaturedPrograms,
    Faculty,
    Events,
    UpcomingEvents,
    News,
    FeaturedNews,
    /// Generic path lookup; requires a `--path` argument.
    Route,
}

impl QueryTarget {
    /// The GraphQL document for this target.
    pub const fn document(self) -> &'static str {
        match self {
            Self::Homepage => GET_HOMEPAGE_DATA,
            Self::Programs => GET_PROGRAMS,
            Self::FeaturedPrograms => GET_FEATURED_PROGRAMS,
            Self::Faculty => GET_FACULTY,
            Self::Events => GET_EVENTS,
            Self::UpcomingEvents => GET_UPCOMING_EVENTS,
            Self::News => GET_NEWS,
            Self::FeaturedNews => GET_FEATURED_NEWS,
            Self::Route => GET_NODE_BY_PATH,
        }
    }

    /// The operation name inside the document.
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Homepage => "GetHomepageData",
            Self::Programs => "GetPrograms",
            Self::FeaturedPrograms => "GetFeaturedPrograms",
            Self::Faculty => "GetFaculty",
            Self::Events => "GetEvents",
            Self::UpcomingEvents => "GetUpcomingEvents",
            Self::News => "GetNews",
            Self::FeaturedNews => "GetFeaturedNews",
            Self::Route => "GetNodeByPath",
        }
    }

    /// Whether the document takes the `$path` variable.
    pub const fn requires_path(self) -> bool {
        matches!(self, Self::Route)
    }
}
