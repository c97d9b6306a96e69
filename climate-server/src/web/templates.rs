//! Askama templates for the index page.

use askama::Template;

/// An endpoint listed on the index page.
#[derive(Debug, Clone, Copy)]
pub struct RouteLink {
    pub path: &'static str,
    pub description: &'static str,
}

/// Every JSON endpoint, in the order the index page lists them.
pub const API_ROUTES: &[RouteLink] = &[
    RouteLink {
        path: "/api/v1.0/precipitation",
        description: "precipitation for every measurement, keyed by date",
    },
    RouteLink {
        path: "/api/v1.0/stations",
        description: "names of all stations",
    },
    RouteLink {
        path: "/api/v1.0/tobs",
        description: "temperature observations for the last year of data",
    },
    RouteLink {
        path: "/api/v1.0/YYYY-MM-DD",
        description: "min, average and max temperature from a start date",
    },
    RouteLink {
        path: "/api/v1.0/YYYY-MM-DD/YYYY-MM-DD",
        description: "min, average and max temperature between two dates, inclusive",
    },
];

/// Home page listing the available routes.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub routes: &'static [RouteLink],
}

impl Default for IndexTemplate {
    fn default() -> Self {
        Self { routes: API_ROUTES }
    }
}
