//! Client-side routes.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Every page the router knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Dashboard => "/dashboard",
        }
    }
}
