//! Static route table handed to the frontend router.
//!
//! `/login` is deliberately not an entry: it is where the 401 policy sends the
//! user and is served outside this table.

/// Page rendered for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Users,
    Orders,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::Users => "Users",
            View::Orders => "Orders",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Redirect target after the session is invalidated by a 401.
pub const LOGIN_PATH: &str = "/login";

pub const HOME: RouteEntry = RouteEntry {
    path: "/",
    name: "Home",
    view: View::Home,
};

pub const USERS: RouteEntry = RouteEntry {
    path: "/users",
    name: "Users",
    view: View::Users,
};

pub const ORDERS: RouteEntry = RouteEntry {
    path: "/orders",
    name: "Orders",
    view: View::Orders,
};

/// All routes, in registration order.
pub static ROUTES: [RouteEntry; 3] = [HOME, USERS, ORDERS];

/// Route registered for exactly `path`. A trailing slash is ignored, except
/// for the root itself.
pub fn match_path(path: &str) -> Option<&'static RouteEntry> {
    let normalized = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    ROUTES.iter().find(|route| route.path == normalized)
}

pub fn by_name(name: &str) -> Option<&'static RouteEntry> {
    ROUTES.iter().find(|route| route.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_ordered_and_fixed() {
        let paths: Vec<_> = ROUTES.iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/users", "/orders"]);

        let views: Vec<_> = ROUTES.iter().map(|r| r.view).collect();
        assert_eq!(views, vec![View::Home, View::Users, View::Orders]);
    }

    #[test]
    fn paths_do_not_overlap() {
        for (i, a) in ROUTES.iter().enumerate() {
            for b in ROUTES.iter().skip(i + 1) {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn matches_exact_paths() {
        assert_eq!(match_path("/").map(|r| r.view), Some(View::Home));
        assert_eq!(match_path("/users/").map(|r| r.view), Some(View::Users));
        assert_eq!(match_path("/orders").map(|r| r.view), Some(View::Orders));
        assert!(match_path("/orders/12").is_none());
    }

    #[test]
    fn login_is_not_a_registered_route() {
        assert!(match_path(LOGIN_PATH).is_none());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("Users").map(|r| r.path), Some("/users"));
        assert!(by_name("Login").is_none());
    }
}
