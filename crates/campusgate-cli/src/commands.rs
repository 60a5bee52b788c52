//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Subcommand, ValueEnum};

use campusgate_core::QueryTarget;

/// Available commands for the campus gateway.
///
/// Each command works from the same environment snapshot the HTTP
/// server reads, so what the CLI reports is what the server would do.
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP gateway
    Serve {
        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value = "4000")]
        port: u16,

        /// Serve bundled fixtures regardless of NEXT_PUBLIC_DEMO_MODE
        #[arg(long)]
        demo: bool,
    },

    /// Report which required environment variables are set
    CheckConfig {
        /// Print the status as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run one of the site's canonical queries and print the response
    Query {
        /// Query to run
        #[arg(value_enum)]
        target: QueryName,

        /// Content path to resolve (required for `route`, e.g. "/programs/nursing")
        #[arg(long)]
        path: Option<String>,

        /// Answer from bundled fixtures regardless of NEXT_PUBLIC_DEMO_MODE
        #[arg(long)]
        demo: bool,
    },
}

/// The canonical queries addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryName {
    /// Homepage singleton with hero, stats, and CTA content
    Homepage,
    /// Full academic-programs listing
    Programs,
    /// First three programs for the homepage cards
    FeaturedPrograms,
    /// Faculty directory
    Faculty,
    /// Campus events listing
    Events,
    /// Next three events for the homepage
    UpcomingEvents,
    /// News listing
    News,
    /// Latest three news articles for the homepage
    FeaturedNews,
    /// Generic path lookup across all content types
    Route,
}

impl QueryName {
    /// The query document this name selects.
    pub const fn target(self) -> QueryTarget {
        match self {
            Self::Homepage => QueryTarget::Homepage,
            Self::Programs => QueryTarget::Programs,
            Self::FeaturedPrograms => QueryTarget::FeaturedPrograms,
            Self::Faculty => QueryTarget::Faculty,
            Self::Events => QueryTarget::Events,
            Self::UpcomingEvents => QueryTarget::UpcomingEvents,
            Self::News => QueryTarget::News,
            Self::FeaturedNews => QueryTarget::FeaturedNews,
            Self::Route => QueryTarget::Route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_names_map_to_their_targets() {
        assert_eq!(QueryName::Homepage.target(), QueryTarget::Homepage);
        assert_eq!(
            QueryName::FeaturedPrograms.target(),
            QueryTarget::FeaturedPrograms
        );
        assert_eq!(QueryName::Route.target(), QueryTarget::Route);
    }

    #[test]
    fn test_only_route_requires_a_path() {
        let with_path: Vec<QueryName> = [
            QueryName::Homepage,
            QueryName::Programs,
            QueryName::FeaturedPrograms,
            QueryName::Faculty,
            QueryName::Events,
            QueryName::UpcomingEvents,
            QueryName::News,
            QueryName::FeaturedNews,
            QueryName::Route,
        ]
        .into_iter()
        .filter(|name| name.target().requires_path())
        .collect();

        assert_eq!(with_path, vec![QueryName::Route]);
    }
}
