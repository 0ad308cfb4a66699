//! Application route table and path resolution.
//!
//! Every route that needs a signed-in user opts in with `requires_auth`;
//! unmarked routes are public. Paths that match nothing redirect to `/`,
//! and that navigation is guarded like any other.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Landing route used when there is nowhere better to go.
pub const DEFAULT_ROUTE: &str = "/";

/// Query parameter carrying the originally requested path through login.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Dashboard,
    Login,
    Profile,
    Documents,
    DocumentCreate,
    DocumentDetail,
    DocumentEdit,
    Stock,
    ItemDetail,
    Nomenclature,
    Suppliers,
    SupplierDetail,
    Warehouses,
    WarehouseDetail,
    Reports,
}

impl RouteName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Login => "login",
            Self::Profile => "profile",
            Self::Documents => "documents",
            Self::DocumentCreate => "document-create",
            Self::DocumentDetail => "document-detail",
            Self::DocumentEdit => "document-edit",
            Self::Stock => "stock",
            Self::ItemDetail => "item-detail",
            Self::Nomenclature => "nomenclature",
            Self::Suppliers => "suppliers",
            Self::SupplierDetail => "supplier-detail",
            Self::Warehouses => "warehouses",
            Self::WarehouseDetail => "warehouse-detail",
            Self::Reports => "reports",
        }
    }

    /// Route definition for this name.
    #[must_use]
    pub fn def(self) -> &'static RouteDef {
        ROUTES.iter().find(|r| r.name == self).unwrap_or(&ROUTES[0])
    }
}

/// Page chrome a route renders in. Presentation only; the guard ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    Auth,
    #[default]
    App,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub layout: Option<Layout>,
}

impl RouteMeta {
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    /// `/`-separated segments; `:name` segments capture a parameter.
    pub pattern: &'static str,
    pub meta: RouteMeta,
}

const fn protected(name: RouteName, pattern: &'static str) -> RouteDef {
    RouteDef { name, pattern, meta: RouteMeta { requires_auth: true, layout: None } }
}

/// Matched top to bottom; the first match wins.
pub const ROUTES: &[RouteDef] = &[
    protected(RouteName::Dashboard, "/"),
    RouteDef {
        name: RouteName::Login,
        pattern: "/login",
        meta: RouteMeta { requires_auth: false, layout: Some(Layout::Auth) },
    },
    protected(RouteName::Profile, "/profile"),
    protected(RouteName::Documents, "/documents"),
    protected(RouteName::DocumentCreate, "/documents/new"),
    protected(RouteName::DocumentDetail, "/documents/:id"),
    protected(RouteName::DocumentEdit, "/documents/:id/edit"),
    protected(RouteName::Stock, "/stock"),
    protected(RouteName::ItemDetail, "/items/:id"),
    protected(RouteName::Nomenclature, "/nomenclature"),
    protected(RouteName::Suppliers, "/suppliers"),
    protected(RouteName::SupplierDetail, "/suppliers/:id"),
    protected(RouteName::Warehouses, "/warehouses"),
    protected(RouteName::WarehouseDetail, "/warehouses/:id"),
    protected(RouteName::Reports, "/reports"),
];

/// Decoded query parameters in their original order. Repeated keys are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self(url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    /// The value of `key` when it appears exactly once; repeated (list-valued)
    /// or missing keys yield `None`.
    #[must_use]
    pub fn single(&self, key: &str) -> Option<&str> {
        let mut values = self.0.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str());
        let first = values.next()?;
        values.next().is_none().then_some(first)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A navigation target matched against [`ROUTES`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub name: RouteName,
    pub path: String,
    /// Path plus query string exactly as requested.
    pub full_path: String,
    pub params: Vec<(String, String)>,
    pub query: QueryParams,
    pub meta: RouteMeta,
}

impl ResolvedRoute {
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Matched(ResolvedRoute),
    /// Catch-all: no route matched; navigate here instead.
    Redirect(String),
}

/// Match `full_path` (path, optional `?query`, optional `#fragment`).
#[must_use]
pub fn resolve(full_path: &str) -> Resolution {
    let (path, query) = split_location(full_path);
    for def in ROUTES {
        if let Some(params) = match_pattern(def.pattern, path) {
            return Resolution::Matched(ResolvedRoute {
                name: def.name,
                path: path.to_owned(),
                full_path: full_path.to_owned(),
                params,
                query: QueryParams::parse(query),
                meta: def.meta,
            });
        }
    }
    Resolution::Redirect(DEFAULT_ROUTE.to_owned())
}

fn split_location(full_path: &str) -> (&str, &str) {
    let without_fragment = full_path.split_once('#').map_or(full_path, |(before, _)| before);
    without_fragment.split_once('?').unwrap_or((without_fragment, ""))
}

fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let mut pattern_segments = pattern.split('/').filter(|s| !s.is_empty());
    let mut path_segments = path.split('/').filter(|s| !s.is_empty());
    let mut params = Vec::new();

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    params.push((name.to_owned(), actual.to_owned()));
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}
