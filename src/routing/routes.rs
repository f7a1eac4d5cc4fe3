//! The static route table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// A named, path-addressed view with its authorization requirement.
///
/// Descriptors are fixed at registration time; `requires_auth` is never
/// computed at runtime. Routes registered without an explicit requirement
/// are open (`requires_auth: false`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Redirect target for unauthenticated attempts at protected routes.
pub const LOGIN_PATH: &str = "/login";

/// Redirect target for authenticated users landing on the login view.
pub const INDEX_PATH: &str = "/index";

pub const LOGIN_ROUTE: RouteDescriptor = RouteDescriptor {
    path: "/login",
    name: "Login",
    requires_auth: false,
};

pub const QUEEN_ROUTE: RouteDescriptor = RouteDescriptor {
    path: "/queen",
    name: "Queen",
    requires_auth: true,
};

pub const RUNWAY_ROUTE: RouteDescriptor = RouteDescriptor {
    path: "/runway",
    name: "Runway",
    requires_auth: true,
};

pub const PROFILE_ROUTE: RouteDescriptor = RouteDescriptor {
    path: "/profile",
    name: "Profile",
    requires_auth: true,
};

pub const INDEX_ROUTE: RouteDescriptor = RouteDescriptor {
    path: "/index",
    name: "Index",
    requires_auth: true,
};

/// The route table, in registration order.
pub const ROUTES: &[RouteDescriptor] = &[
    LOGIN_ROUTE,
    QUEEN_ROUTE,
    RUNWAY_ROUTE,
    PROFILE_ROUTE,
    INDEX_ROUTE,
];

/// Look up a route descriptor by its path.
pub fn by_path(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().find(|route| route.path == path)
}
