pub(crate) const HOME_PATH: &str = "/";

/// Named pages of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Route {
    Home,
    Introduction,
    GettingStarted,
    Configuration,
    Mysql,
    Mongodb,
    Postgres,
    Sqlserver,
    Sqlite,
    Migration,
    Schema,
    QueryBuilder,
    Entity,
    Utils,
}

impl Route {
    pub(crate) const ALL: [Route; 14] = [
        Route::Home,
        Route::Introduction,
        Route::GettingStarted,
        Route::Configuration,
        Route::Mysql,
        Route::Mongodb,
        Route::Postgres,
        Route::Sqlserver,
        Route::Sqlite,
        Route::Migration,
        Route::Schema,
        Route::QueryBuilder,
        Route::Entity,
        Route::Utils,
    ];

    /// Path of the route relative to the site basename.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Route::Home => HOME_PATH,
            Route::Introduction => "/docs",
            Route::GettingStarted => "/docs/getting-started",
            Route::Configuration => "/docs/configuration",
            Route::Mysql => "/docs/database/mysql",
            Route::Mongodb => "/docs/database/mongodb",
            Route::Postgres => "/docs/database/postgres",
            Route::Sqlserver => "/docs/database/sqlserver",
            Route::Sqlite => "/docs/database/sqlite",
            Route::Migration => "/docs/orm/migration",
            Route::Schema => "/docs/orm/schema",
            Route::QueryBuilder => "/docs/orm/query-builder",
            Route::Entity => "/docs/orm/entity",
            Route::Utils => "/docs/utils",
        }
    }
}

/// Resolves navigation targets to routes under a basename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RouteTable {
    basename: String,
}

impl RouteTable {
    /// Create a table; the basename is normalised to `/name` or empty.
    pub(crate) fn new(basename: &str) -> Self {
        let trimmed = basename.trim().trim_matches('/');
        let basename = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{trimmed}")
        };
        Self { basename }
    }

    /// Resolve a target written with or without the basename. A trailing
    /// slash is ignored.
    pub(crate) fn resolve(&self, target: &str) -> Option<Route> {
        let path = self.strip_basename(target.trim());
        let path = match path.trim_end_matches('/') {
            "" => HOME_PATH,
            path => path,
        };

        Route::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Full path of a route including the basename.
    pub(crate) fn href(&self, route: Route) -> String {
        match route {
            Route::Home if !self.basename.is_empty() => {
                format!("{}/", self.basename)
            },
            route => format!("{}{}", self.basename, route.path()),
        }
    }

    fn strip_basename<'a>(&self, target: &'a str) -> &'a str {
        if self.basename.is_empty() {
            return target;
        }

        match target.strip_prefix(self.basename.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_paths_when_resolved_then_every_route_is_found() {
        let table = RouteTable::new("/focca-orm");

        for route in Route::ALL {
            assert_eq!(table.resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn given_basename_prefixed_paths_when_resolved_then_prefix_is_ignored() {
        let table = RouteTable::new("/focca-orm");

        assert_eq!(
            table.resolve("/focca-orm/docs/orm/entity"),
            Some(Route::Entity)
        );
        assert_eq!(table.resolve("/focca-orm"), Some(Route::Home));
        assert_eq!(table.resolve("/focca-orm/"), Some(Route::Home));
    }

    #[test]
    fn given_trailing_slash_when_resolved_then_route_matches() {
        let table = RouteTable::new("/focca-orm");

        assert_eq!(table.resolve("/docs/"), Some(Route::Introduction));
        assert_eq!(
            table.resolve("/docs/database/sqlite/"),
            Some(Route::Sqlite)
        );
    }

    #[test]
    fn given_unknown_or_lookalike_paths_when_resolved_then_nothing_matches() {
        let table = RouteTable::new("/focca-orm");

        assert_eq!(table.resolve("/docs/unknown"), None);
        assert_eq!(table.resolve("/focca-ormdocs"), None);
        assert_eq!(table.resolve("docs"), None);
    }

    #[test]
    fn given_basename_when_href_built_then_prefix_is_applied() {
        let table = RouteTable::new("focca-orm/");

        assert_eq!(table.href(Route::Utils), "/focca-orm/docs/utils");
        assert_eq!(table.href(Route::Home), "/focca-orm/");
        assert_eq!(RouteTable::new("").href(Route::Home), "/");
    }
}
