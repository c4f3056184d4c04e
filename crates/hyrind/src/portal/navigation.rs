use serde::{Deserialize, Serialize};

/// Top-level pages addressable by fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Landing,
    Interest,
    Register,
    Login,
    Dashboard,
}

impl Route {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Landing,
            Self::Interest,
            Self::Register,
            Self::Login,
            Self::Dashboard,
        ]
    }

    /// Total mapping from a location fragment to a route; anything unrecognized is the landing page.
    pub fn from_fragment(raw: &str) -> Self {
        let fragment = raw.trim();
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        let fragment = fragment.trim_matches('/');

        Self::ordered()
            .into_iter()
            .find(|route| route.fragment() == fragment)
            .unwrap_or(Self::Landing)
    }

    pub const fn fragment(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Interest => "interest",
            Self::Register => "register",
            Self::Login => "login",
            Self::Dashboard => "dashboard",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/landing",
            Self::Interest => "/interest",
            Self::Register => "/register",
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }

    pub const fn requires_session(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}

/// Outcome of asking to show a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    /// Nothing is rendered for this cycle; the client is sent on to the target.
    Deferred(Route),
}

pub fn resolve(route: Route, signed_in: bool) -> Navigation {
    if route.requires_session() && !signed_in {
        Navigation::Deferred(Route::Login)
    } else {
        Navigation::Render(route)
    }
}

/// Dashboard sub-views. Not every view exists for every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    Dashboard,
    Candidates,
    Recruiters,
    Profile,
    Billing,
    Documents,
    Settings,
    Jobs,
}

impl DashboardView {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Dashboard,
            Self::Candidates,
            Self::Recruiters,
            Self::Profile,
            Self::Billing,
            Self::Documents,
            Self::Settings,
            Self::Jobs,
        ]
    }

    pub fn from_tag(raw: &str) -> Self {
        let tag = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|view| view.tag() == tag)
            .unwrap_or(Self::Dashboard)
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Candidates => "candidates",
            Self::Recruiters => "recruiters",
            Self::Profile => "profile",
            Self::Billing => "billing",
            Self::Documents => "documents",
            Self::Settings => "settings",
            Self::Jobs => "jobs",
        }
    }

    /// Header title: the tag with its first letter capitalized.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Candidates => "Candidates",
            Self::Recruiters => "Recruiters",
            Self::Profile => "Profile",
            Self::Billing => "Billing",
            Self::Documents => "Documents",
            Self::Settings => "Settings",
            Self::Jobs => "Jobs",
        }
    }

    pub fn href(self) -> String {
        format!("{}?view={}", Route::Dashboard.path(), self.tag())
    }
}
