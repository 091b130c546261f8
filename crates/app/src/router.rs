use std::collections::HashMap;

use models::HeroId;

/// Views reachable through the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Heroes,
    HeroDetail,
}

impl Route {
    pub fn detail_url(id: HeroId) -> String {
        format!("/detail/{id}")
    }
}

#[derive(Debug, Clone, Copy)]
enum Target {
    Redirect(&'static str),
    View(Route),
}

struct RouteDef {
    pattern: &'static str,
    target: Target,
}

const ROUTES: &[RouteDef] = &[
    RouteDef { pattern: "", target: Target::Redirect("/dashboard") },
    RouteDef { pattern: "dashboard", target: Target::View(Route::Dashboard) },
    RouteDef { pattern: "detail/:id", target: Target::View(Route::HeroDetail) },
    RouteDef { pattern: "heroes", target: Target::View(Route::Heroes) },
];

/// Result of a successful lookup. `url` is the canonical path after redirects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    pub url: String,
    pub params: HashMap<String, String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Router;

impl Router {
    pub fn new() -> Self { Self }

    /// Match `path` against the table. Leading and trailing slashes are ignored;
    /// the empty path redirects to the dashboard.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = path.trim().trim_matches('/');
        let (def, params) = ROUTES
            .iter()
            .find_map(|def| match_pattern(def.pattern, path).map(|params| (def, params)))?;
        match def.target {
            // redirect targets are plain routes in the same table
            Target::Redirect(to) => self.resolve(to),
            Target::View(route) => Some(RouteMatch { route, url: format!("/{path}"), params }),
        }
    }
}

fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    if pattern.is_empty() || path.is_empty() {
        return (pattern.is_empty() && path.is_empty()).then(HashMap::new);
    }
    let pattern: Vec<&str> = pattern.split('/').collect();
    let segments: Vec<&str> = path.split('/').collect();
    if pattern.len() != segments.len() {
        return None;
    }
    let mut params = HashMap::new();
    for (p, s) in pattern.iter().zip(segments.iter()) {
        if let Some(name) = p.strip_prefix(':') {
            if s.is_empty() {
                return None;
            }
            params.insert(name.to_string(), s.to_string());
        } else if p != s {
            return None;
        }
    }
    Some(params)
}
