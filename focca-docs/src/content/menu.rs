use focca_ui_menu::MenuEntry;

/// Built-in documentation menu shown in the sidebar.
pub(crate) fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::link("introduction", "Introduction", "/docs"),
        MenuEntry::link(
            "getting-started",
            "Getting Started",
            "/docs/getting-started",
        ),
        MenuEntry::link(
            "configuration",
            "Configuration",
            "/docs/configuration",
        ),
        MenuEntry::group(
            "database",
            "Database",
            vec![
                MenuEntry::link(
                    "mysql",
                    "Using Mysql",
                    "/docs/database/mysql",
                ),
                MenuEntry::link(
                    "mongo",
                    "Using Mongodb",
                    "/docs/database/mongodb",
                ),
                MenuEntry::link(
                    "postgres",
                    "Using Postgres",
                    "/docs/database/postgres",
                ),
                MenuEntry::link(
                    "sqlserver",
                    "Using Sqlserver",
                    "/docs/database/sqlserver",
                ),
                MenuEntry::link(
                    "sqlite",
                    "Using Sqlite",
                    "/docs/database/sqlite",
                ),
            ],
        ),
        MenuEntry::group(
            "migration",
            "ORM",
            vec![
                MenuEntry::link(
                    "migration",
                    "Migrations",
                    "/docs/orm/migration",
                ),
                MenuEntry::link("schema", "Schemas", "/docs/orm/schema"),
                MenuEntry::link(
                    "query-builder",
                    "Query Builders",
                    "/docs/orm/query-builder",
                ),
                MenuEntry::link("entity", "Entities", "/docs/orm/entity"),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use focca_ui_menu::{MenuNode, MenuTree, validate_entries};

    use super::default_menu;
    use crate::routes::RouteTable;

    fn targets<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            out.extend(node.target());
            targets(node.children(), out);
        }
    }

    #[test]
    fn given_builtin_menu_when_validated_then_no_issues_are_reported() {
        assert!(validate_entries(&default_menu()).is_empty());
    }

    #[test]
    fn given_builtin_menu_when_converted_then_groups_keep_definition_order() {
        let tree = MenuTree::from_entries(default_menu());
        let labels: Vec<_> =
            tree.roots().iter().map(MenuNode::label).collect();

        assert_eq!(
            labels,
            vec![
                "Introduction",
                "Getting Started",
                "Configuration",
                "Database",
                "ORM"
            ]
        );
        assert_eq!(tree.roots()[3].children().len(), 5);
        assert_eq!(tree.roots()[4].children().len(), 4);
        assert!(tree.roots()[3].is_expandable());
    }

    #[test]
    fn given_builtin_menu_when_targets_resolved_then_every_target_is_a_route()
    {
        let tree = MenuTree::from_entries(default_menu());
        let routes = RouteTable::new("/focca-orm");
        let mut found = Vec::new();
        targets(tree.roots(), &mut found);

        assert_eq!(found.len(), 12);
        for target in found {
            assert!(routes.resolve(target).is_some(), "{target}");
        }
    }
}
