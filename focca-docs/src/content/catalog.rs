//! Page content for every route of the site.

use super::Page;
use crate::routes::Route;

/// Build the page shown for `route`.
pub(crate) fn page(route: Route) -> Page {
    match route {
        Route::Home => home(),
        Route::Introduction => introduction(),
        Route::GettingStarted => getting_started(),
        Route::Configuration => configuration(),
        Route::Mysql => database(&MYSQL),
        Route::Mongodb => database(&MONGODB),
        Route::Postgres => database(&POSTGRES),
        Route::Sqlserver => database(&SQLSERVER),
        Route::Sqlite => database(&SQLITE),
        Route::Migration => migrations(),
        Route::Schema => schema(),
        Route::QueryBuilder => query_builder(),
        Route::Entity => entity(),
        Route::Utils => utils(),
    }
}

/// Page shown for targets that match no route.
pub(crate) fn not_found(target: &str) -> Page {
    Page::new("Page not found")
        .paragraph(&format!("There is no documentation page at `{target}`."))
        .link("Back to the introduction", "/docs")
}

const ENTITY_EXAMPLE: &str = r#"
import { Entity } from "focca";

export class Book extends Entity {
  protected static table = "books";
  protected static softDeletes = true;

  public static async getAuthor() {
    return this.belongsTo(Author, "author_id");
  }

  public static async getCategory() {
    return this.belongsTo(Category, "category_id");
  }
}

import { Entity } from "focca";

export class Author extends Entity {
  protected static table = "authors";

  public static async getBooks() {
    return this.hasMany(Book, "author_id");
  }
}

const author = await Author.create({ name: "J.K . Rowling" });
const category = await Category.create({ name: "Fantasy" });
const book = await Book.create({
    title: "Harry Potter and the Philosopher's Stone",
    author_id: author.getAttribute("id"),
    category_id: category.getAttribute("id"),
});
console.log("Book created:", book.toJson());
"#;

fn home() -> Page {
    Page::new("Modern ORM for Node.js")
        .section("Revolutionize your data interaction")
        .paragraph(
            "FOCCA is a modern and flexible ORM for Node.js, designed to \
             simplify interaction with relational and non-relational \
             databases, speeding up your development with clean and \
             intuitive code.",
        )
        .tabs([("npm", "npm install focca"), ("yarn", "yarn add focca")])
        .link("Start Using", "/docs")
        .section("Simplified Schema Creation")
        .paragraph(
            "With FOCCA, creating database schemas is quick and efficient. \
             Define your tables and relationships clearly and concisely, \
             making data management in your applications easier.",
        )
        .callout(
            "The flexibility of FOCCA ensures that you can adapt your schemas \
             as needed, providing an agile and productive development \
             experience.",
        )
        .link("See Examples", "/docs/orm/schema")
        .section("Why Choose FOCCA?")
        .paragraph(
            "A complete solution for data management that simplifies your \
             workflow.",
        )
        .terms([
            (
                "Flexibility",
                "Support for multiple databases with simplified configuration \
                 for connections and adapters.",
            ),
            (
                "Ease of Use",
                "Intuitive API for CRUD operations and CLI commands for \
                 migrations, models, and seeders.",
            ),
            (
                "Migrations",
                "Robust system for versioning database changes with efficient \
                 commands.",
            ),
            (
                "Relationships",
                "Support for complex relationships with intuitive methods for \
                 data manipulation.",
            ),
            (
                "Data Validation",
                "Integration with validation system to ensure data integrity.",
            ),
            (
                "Performance",
                "Optimizations for queries and bulk operations, ensuring \
                 exceptional performance.",
            ),
        ])
        .section("Intuitive and Elegant Code")
        .paragraph(
            "FOCCA is designed to make your code cleaner and more expressive. \
             With intuitive syntax, you write less and achieve more.",
        )
        .tabs([("Entity.js", ENTITY_EXAMPLE)])
        .link("View More Examples", "/docs/orm/entity")
        .section("Ready to revolutionize your projects?")
        .paragraph(
            "Join thousands of developers who are already using FOCCA to \
             simplify and enhance their applications.",
        )
        .link("Get Started", "/docs")
}

fn introduction() -> Page {
    Page::new("Introduction to the FOCCA Library")
        .paragraph(
            "The FOCCA library is a modern and flexible ORM (Object-Relational \
             Mapping) for Node.js, designed to simplify interaction with \
             relational and non-relational databases. With an intuitive and \
             powerful API, FOCCA enables developers to build robust and \
             scalable applications with ease.",
        )
        .section("Main Features")
        .terms([
            (
                "Multiple Database Support",
                "FOCCA supports a variety of databases, including MySQL, \
                 PostgreSQL, SQLite, MongoDB, and SQL Server, allowing you to \
                 choose the best option for your needs.",
            ),
            (
                "Ease of Use",
                "The library is designed to be easy to use, with a clear and \
                 concise syntax that reduces code complexity and improves \
                 readability.",
            ),
            (
                "Migrations and Seeders",
                "FOCCA includes integrated tools for managing database \
                 migrations and seeders, making it easy to create and \
                 maintain your database structure.",
            ),
            (
                "Data Validation",
                "The library provides a robust validation system that helps \
                 ensure the integrity of data before it is saved to the \
                 database.",
            ),
            (
                "Relationship Management",
                "FOCCA allows you to define and manage relationships between \
                 entities in a simple way, supporting relationships such as \
                 one-to-one, one-to-many and many-to-many.",
            ),
        ])
        .section("Why Use FOCCA?")
        .paragraph(
            "If you are developing an application that requires efficient \
             interaction with a database, FOCCA is the ideal choice. Its \
             flexibility and ease of use allow you to focus on developing \
             functionality, while the library takes care of the complexity \
             of communicating with the database.",
        )
        .section("Next Steps")
        .paragraph(
            "Let's get started, time to expand your project in a simple and \
             professional way. You can find the installation guide here:",
        )
        .link("Getting Started", "/docs/getting-started")
}

fn getting_started() -> Page {
    Page::new("FOCCA Library Installation")
        .paragraph(
            "To start using the FOCCA library in your project, follow the \
             steps below to install it correctly.",
        )
        .section("Prerequisites")
        .paragraph(
            "Before installing FOCCA, make sure you have the following \
             prerequisites:",
        )
        .terms([
            (
                "Node.js",
                "The FOCCA library is compatible with Node.js. You can \
                 download the latest version from nodejs.org.",
            ),
            (
                "Package Manager",
                "You can use npm (which comes with Node.js) or Yarn to manage \
                 your dependencies.",
            ),
        ])
        .section("Step 1: Create a New Project")
        .paragraph(
            "If you don't have a project yet, create a new directory and \
             initialize a new Node.js project:",
        )
        .tabs([("Bash", "mkdir my-project\ncd my-project\nnpm init -y")])
        .section("Step 2: Install the FOCCA Library")
        .paragraph(
            "To install the FOCCA library, run the following command in the \
             terminal:",
        )
        .tabs([("NPM", "npm install focca"), ("YARN", "yarn add focca")])
        .section("Next Steps")
        .paragraph(
            "After installing the FOCCA library, the next step is to \
             configure the ORM. You can find the configuration guide here:",
        )
        .link("Configuration", "/docs/configuration")
}

fn configuration() -> Page {
    Page::new("FOCCA Library Configuration")
        .paragraph(
            "After installing the FOCCA library, the next step is to \
             configure the database connection. Follow the steps below to \
             complete this configuration.",
        )
        .section("Step 1: Generate the Configuration File")
        .paragraph(
            "To configure the database connection, use the following \
             command. Replace mysql with the type of database you want to \
             configure (for example, mongodb, sqlite, etc.):",
        )
        .tabs([("Bash", "npx focca config:database mysql")])
        .paragraph(
            "This command will create a focca.config.json file in the root \
             of your project, containing the necessary settings to connect \
             to the specified database.",
        )
        .section("Step 2: Check and Edit the Configuration File")
        .paragraph(
            "After generating the configuration file, open the \
             focca.config.json and verify that the connection information \
             is correct. The file should have a structure similar to this:",
        )
        .code(&connection_config(&MYSQL))
        .section("Step 3: Adjust the Settings")
        .terms([
            (
                "driver",
                "The type of database you are using (for example, mysql, \
                 mongodb, sqlite, postgres, sqlserver).",
            ),
            (
                "host",
                "The address of the database server (usually localhost for \
                 local development).",
            ),
            (
                "port",
                "The port on which the database is listening (for example, \
                 3306 for MySQL).",
            ),
            ("username", "The username for database authentication."),
            ("password", "The password corresponding to the username."),
            ("database", "The name of the database you want to connect to."),
        ])
        .section("Next Steps")
        .paragraph(
            "After setting up the FOCCA library, the next step is to use the \
             database. Pick the guide for the database your project uses:",
        )
        .links(DATABASES.iter().map(|guide| (guide.link, guide.route.path())))
}

/// Connection settings of one database guide.
enum Connection {
    Server { port: u16 },
    Url(&'static str),
    File(&'static str),
}

/// Parameters of the per-database setup guide.
struct DatabaseGuide {
    route: Route,
    name: &'static str,
    driver: &'static str,
    package: &'static str,
    link: &'static str,
    connection: Connection,
}

const MYSQL: DatabaseGuide = DatabaseGuide {
    route: Route::Mysql,
    name: "MySQL",
    driver: "mysql",
    package: "mysql2",
    link: "Focus Mysql",
    connection: Connection::Server { port: 3306 },
};

const MONGODB: DatabaseGuide = DatabaseGuide {
    route: Route::Mongodb,
    name: "MongoDB",
    driver: "mongodb",
    package: "mongodb",
    link: "Focus Mongodb",
    connection: Connection::Url("mongodb://localhost:27017/your_database_name"),
};

const POSTGRES: DatabaseGuide = DatabaseGuide {
    route: Route::Postgres,
    name: "PostgreSQL",
    driver: "postgres",
    package: "pg",
    link: "Focus Postgres",
    connection: Connection::Server { port: 5432 },
};

const SQLSERVER: DatabaseGuide = DatabaseGuide {
    route: Route::Sqlserver,
    name: "SQL Server",
    driver: "sqlserver",
    package: "mssql",
    link: "Focus Sqlserver",
    connection: Connection::Server { port: 1433 },
};

const SQLITE: DatabaseGuide = DatabaseGuide {
    route: Route::Sqlite,
    name: "SQLite",
    driver: "sqlite",
    package: "sqlite3",
    link: "Focus Sqlite",
    connection: Connection::File("database.sqlite"),
};

const DATABASES: [&DatabaseGuide; 5] =
    [&MYSQL, &MONGODB, &POSTGRES, &SQLSERVER, &SQLITE];

fn connection_config(guide: &DatabaseGuide) -> String {
    let driver = guide.driver;
    let settings = match guide.connection {
        Connection::Server { port } => format!(
            "      \"driver\": \"{driver}\",\n      \
             \"host\": \"localhost\",\n      \
             \"port\": {port},\n      \
             \"username\": \"your_username\",\n      \
             \"password\": \"your_password\",\n      \
             \"database\": \"your_database_name\""
        ),
        Connection::Url(url) => format!(
            "      \"driver\": \"{driver}\",\n      \"url\": \"{url}\""
        ),
        Connection::File(file) => format!(
            "      \"driver\": \"{driver}\",\n      \"database\": \"{file}\""
        ),
    };

    format!(
        "{{\n  \"default\": \"{driver}\",\n  \"connections\": {{\n    \
         \"{driver}\": {{\n{settings}\n    }}\n  }}\n}}"
    )
}

fn database(guide: &DatabaseGuide) -> Page {
    let name = guide.name;
    let is_document_store = matches!(guide.connection, Connection::Url(_));
    let model = if is_document_store {
        "import { Entity } from 'focca';\n\n\
         export class ModelName extends Entity {\n  \
         protected static collection = 'collection_name';\n  \
         protected static primaryKey = '_id';\n  \
         protected static fillable = ['field1', 'field2'];\n}"
    } else {
        "import { Entity } from 'focca';\n\n\
         export class ModelName extends Entity {\n  \
         protected static table = 'table_name';\n  \
         protected static primaryKey = 'id';\n  \
         protected static fillable = ['field1', 'field2'];\n}"
    };
    let migrations = if is_document_store {
        "Although MongoDB is a NoSQL database and does not use migrations in \
         the same way as relational databases, you can use FOCCA to manage \
         data structure and perform update operations."
    } else {
        "Migrations allow you to manage the database structure \
         programmatically."
    };

    Page::new(&format!("FOCCA ORM Documentation for {name}"))
        .paragraph(&format!(
            "To use {name} in Focca Library, follow the steps below."
        ))
        .section("Requirements")
        .bullets([
            "Node.js installed",
            format!("{name} running").as_str(),
            format!("{} package installed", guide.package).as_str(),
        ])
        .tabs([("NPM", format!("npm install {}", guide.package).as_str())])
        .section("Database Configuration")
        .subsection("Create the Configuration File")
        .paragraph(
            "FOCCA uses a configuration file called focca.config.json to \
             manage connections to the database. You can create this file \
             manually or use the CLI command to generate the configuration.",
        )
        .code(&connection_config(guide))
        .subsection("Use the CLI Command to Create the Configuration")
        .tabs([(
            "Bash",
            format!("npx focca config:database {}", guide.driver).as_str(),
        )])
        .paragraph(&format!(
            "This will generate a focca.config.json file with the default \
             settings for {name}."
        ))
        .section("Connecting to the Database")
        .paragraph(
            "To connect to the database, you can use the Database class from \
             FOCCA. The default connection will be the one defined in the \
             configuration file.",
        )
        .code(&format!(
            "import {{ Database }} from 'focca';\n\n\
             async function initialize() {{\n  \
             await Database.getConnection('{driver}');\n  \
             console.log('Connection to {name} established successfully!');\n\
             }}\n\n\
             initialize().catch(console.error);",
            driver = guide.driver,
        ))
        .section("Creating Migrations")
        .paragraph(migrations)
        .tabs([("Bash", "npx focca create:migration MigrationName")])
        .paragraph(
            "The generated migration will have an up method to apply changes \
             and a down method to revert changes.",
        )
        .code(
            "import { Migration } from 'focca';\n\n\
             export default class MigrationName extends Migration {\n  \
             async up() {\n    // Code to apply changes\n  }\n\n  \
             async down() {\n    // Code to revert changes\n  }\n}",
        )
        .subsection("Running Migrations")
        .tabs([("Bash", "npx focca migrate")])
        .section("Creating Models")
        .paragraph("Models represent the entities in your database.")
        .tabs([("Bash", "npx focca create:entity ModelName")])
        .code(model)
        .section("Running Seeders")
        .paragraph("Seeders are used to populate the database with initial data.")
        .tabs([("Bash", "npx focca create:seeder SeederName")])
        .code(
            "import { Seeder } from 'focca';\n\n\
             export class SeederName extends Seeder {\n  \
             async run() {\n    \
             await this.insert([\n      \
             { field1: 'value1', field2: 'value2' },\n      \
             { field1: 'value3', field2: 'value4' },\n    \
             ]);\n  }\n}",
        )
        .tabs([("Bash", "npx focca run:seeder SeederName")])
        .section("Final Considerations")
        .bullets([
            format!("Ensure that {name} is running and accessible.").as_str(),
            "Check the permissions of the user configured in the \
             configuration file.",
        ])
        .section("Available CLI Commands")
        .terms([
            ("info", "Displays information about the application."),
            ("create:migration", "Creates a new migration."),
            ("create:entity", "Creates a new model."),
            ("create:seeder", "Creates a new seeder."),
            ("migrate", "Executes all pending migrations."),
            ("rollback", "Reverts the last migration."),
            ("refresh", "Restores the database and reapplies migrations."),
        ])
        .section("Next Steps")
        .links(
            DATABASES
                .iter()
                .filter(|other| other.route != guide.route)
                .map(|other| (other.link, other.route.path())),
        )
}

fn migrations() -> Page {
    Page::new("Detailed Documentation on Migrations in FOCCA ORM")
        .paragraph(
            "Migrations let you version and apply changes to the database \
             structure in a controlled manner. The FOCCA ORM provides a \
             robust interface for creating, applying, and reverting \
             migrations.",
        )
        .section("Benefits of Migrations")
        .terms([
            (
                "Versioning",
                "Each migration is versioned, so you know exactly what \
                 changes were made and when.",
            ),
            (
                "Reversibility",
                "Migrations can be reverted, allowing you to undo changes if \
                 necessary.",
            ),
            (
                "Collaboration",
                "All developers can apply the same migrations in their local \
                 environments.",
            ),
            (
                "Automation",
                "The database update process can be automated, reducing \
                 manual errors.",
            ),
        ])
        .section("Creating a New Migration")
        .paragraph(
            "The create:migration command generates a migration file with a \
             timestamp and the specified name.",
        )
        .code("npx focca create:migration MigrationName")
        .section("Migration File Structure")
        .code(
            r#"
import { Migration } from '../cli/Migration';

export class MigrationName extends Migration {
    async up(): Promise<void> {
        // Code to apply the migration (e.g., create tables, add columns)
    }

    async down(): Promise<void> {
        // Code to revert the migration (e.g., drop tables, remove columns)
    }
}
"#,
        )
        .section("Running Migrations")
        .code("npx focca migrate")
        .section("Example Migration")
        .code(
            r#"
import { Migration } from '../cli/Migration';
import { Schema } from '../Schema/Schema';

export class CreateUsersTable extends Migration {
    async up(): Promise<void> {
        await Schema.create('users', (table) => {
            table.id();
            table.string('name');
            table.string('email').unique();
            table.timestamps();
        });
    }

    async down(): Promise<void> {
        await Schema.dropIfExists('users');
    }
}
"#,
        )
        .section("Reverting Migrations")
        .paragraph("Revert the last applied migration with rollback.")
        .code("npx focca rollback")
        .section("Updating All Migrations")
        .paragraph("Roll back every migration and reapply them with refresh.")
        .code("npx focca refresh")
        .section("Next Steps")
        .paragraph(
            "After creating a migration, see step by step how to create the \
             schemas:",
        )
        .link("Schemas", "/docs/orm/schema")
}

fn schema() -> Page {
    Page::new("Detailed Documentation on Schema Builder in FOCCA ORM")
        .paragraph(
            "The Schema Builder provides a fluent, database-agnostic \
             interface for creating and modifying tables, columns, indexes \
             and relationships without writing raw SQL.",
        )
        .section("Core Components")
        .terms([
            (
                "Schema",
                "The main entry point for creating, modifying, and dropping \
                 tables.",
            ),
            (
                "Blueprint",
                "Defines the structure of a table including columns, indexes, \
                 and modifiers.",
            ),
            (
                "ForeignKeyDefinition",
                "Handles the creation of foreign key constraints.",
            ),
        ])
        .section("Creating Tables")
        .code(
            r#"
import { Schema } from '../Schema/Schema';

await Schema.create('users', (table) => {
  table.id();
  table.string('name', 100);
  table.string('email').unique();
  table.timestamps();
});
"#,
        )
        .section("Column Types")
        .subsection("String & Text Types")
        .code(
            r#"
table.string('username', 50);     // VARCHAR(50)
table.char('code', 10);           // CHAR(10)
table.text('description');        // TEXT
table.mediumText('content');      // MEDIUMTEXT
table.longText('article');        // LONGTEXT
"#,
        )
        .subsection("Numeric Types")
        .code(
            r#"
table.integer('count');           // INTEGER
table.bigInteger('big_number');   // BIGINT
table.unsignedBigInteger('views'); // UNSIGNED BIGINT
table.decimal('price', 8, 2);     // DECIMAL(8,2)
table.float('amount', 8, 2);      // FLOAT(8,2)
table.double('measurement');      // DOUBLE
"#,
        )
        .subsection("Boolean and Date Types")
        .code(
            r#"
table.boolean('is_active');       // BOOLEAN/TINYINT
table.date('birth_date');         // DATE
table.dateTime('published_at');   // DATETIME
table.time('opening_time');       // TIME
table.timestamp('last_login');    // TIMESTAMP
"#,
        )
        .section("Column Modifiers")
        .code(
            r#"
table.string('middle_name').nullable();
table.boolean('is_active').default(true);
table.integer('position').unsigned();
table.string('email').unique();
table.string('username').index();
table.uuid('custom_id').primary();
"#,
        )
        .section("Defining Relationships")
        .code(
            r#"
await Schema.create('posts', (table) => {
  table.id();
  table.string('title');
  table.unsignedBigInteger('user_id');
  table.timestamps();

  table.foreign('user_id')
    .references('id')
    .on('users')
    .onDelete('CASCADE')
    .getForeignKeyDefinition();
});
"#,
        )
        .section("Dropping Tables")
        .code("await Schema.dropIfExists('users');")
        .section("Next Steps")
        .paragraph("Query the tables you created with the query builder:")
        .link("Query Builders", "/docs/orm/query-builder")
}

fn query_builder() -> Page {
    Page::new("Detailed Documentation on Query Builder in FOCCA ORM")
        .paragraph(
            "The Query Builder provides a fluent interface for constructing \
             and executing database queries without writing raw SQL.",
        )
        .section("Core Features")
        .terms([
            (
                "Fluent Interface",
                "Chain methods to build queries in a readable manner.",
            ),
            (
                "Dynamic Query Building",
                "Construct queries based on runtime conditions.",
            ),
            (
                "Support for Various Operations",
                "Perform SELECT, INSERT, UPDATE, and DELETE operations easily.",
            ),
        ])
        .section("Basic Usage")
        .code(
            r#"
import { Connection } from './Connection';
import { QueryBuilder } from './QueryBuilder';

const connection = new Connection();
const queryBuilder = new QueryBuilder(connection);

const users = await queryBuilder
  .table('users')
  .select('id', 'name', 'email')
  .where('is_active', '=', true)
  .orderBy('created_at', 'desc')
  .get();
"#,
        )
        .section("Query Methods")
        .subsection("Inserting Data")
        .code(
            r#"
await queryBuilder
  .table('users')
  .insert({ name: 'John Doe', email: 'john@example.com', is_active: true });
"#,
        )
        .subsection("Updating Data")
        .code(
            r#"
await queryBuilder
  .table('users')
  .where('id', '=', 1)
  .update({ is_active: false });
"#,
        )
        .subsection("Deleting Data")
        .code(
            r#"
await queryBuilder
  .table('users')
  .where('id', '=', 1)
  .delete();
"#,
        )
        .section("Advanced Querying")
        .subsection("Joining Tables")
        .code(
            r#"
const postsWithUsers = await queryBuilder
  .table('posts')
  .join('users', 'posts.user_id', '=', 'users.id')
  .select('posts.title', 'users.name')
  .get();
"#,
        )
        .subsection("Limiting Results")
        .code(
            r#"
const limitedUsers = await queryBuilder
  .table('users')
  .limit(10)
  .get();
"#,
        )
        .section("Next Steps")
        .paragraph("Define the tables behind your queries with the schema builder:")
        .link("Schemas", "/docs/orm/schema")
}

fn entity() -> Page {
    Page::new("Detailed Documentation on Entity Class in FOCCA ORM")
        .paragraph(
            "The Entity class is the base for all models that represent \
             database tables. It implements the Active Record pattern: each \
             instance corresponds to a row and offers methods for create, \
             read, update and delete operations.",
        )
        .section("Static Properties")
        .terms([
            ("table", "Name of the database table."),
            ("primaryKey", "Name of the primary key (default: \"id\")."),
            ("connection", "Name of the database connection."),
            ("timestamps", "Enables or disables automatic timestamp fields."),
            ("softDeletes", "Enables or disables soft deletes."),
        ])
        .section("Defining a Model")
        .tabs([("Entity.js", ENTITY_EXAMPLE)])
        .section("Next Steps")
        .paragraph("Learn about the helpers shipped alongside the ORM:")
        .link("Utils", "/docs/utils")
}

fn utils() -> Page {
    Page::new("Detailed Documentation on Utility Classes in FOCCA ORM")
        .paragraph(
            "FOCCA ORM provides utility classes for string manipulation, \
             UUID generation, and password hashing: Str, Uuid and Hash.",
        )
        .section("Str Class")
        .terms([
            ("camelCase(value)", "Converts a string to camelCase format."),
            ("kebabCase(value)", "Converts a string to kebab-case format."),
            ("snakeCase(value)", "Converts a string to snake_case format."),
            (
                "contains(value, search)",
                "Checks if a string contains a specified substring.",
            ),
            ("trim(value)", "Trims whitespace from both ends of a string."),
            ("removeSpaces(value)", "Removes all spaces from a string."),
        ])
        .code(
            r#"
import { Str } from 'focca';

const exampleString = " Hello World ";
console.log(Str.camelCase(exampleString)); // helloWorld
console.log(Str.kebabCase(exampleString)); // hello-world
console.log(Str.snakeCase(exampleString)); // hello_world
console.log(Str.trim(exampleString)); // "Hello World"
"#,
        )
        .section("Hash Class")
        .paragraph(
            "The Hash class supports Bcrypt and Argon2. Pick the algorithm \
             with the HashAlgorithm enum.",
        )
        .code(
            r#"
import { Hash, HashAlgorithm } from 'focca';

const password = "MySecurePassword!123";
const hashedPassword = await Hash.make(password, HashAlgorithm.BCRYPT);
const isMatch = await Hash.check(password, hashedPassword, HashAlgorithm.BCRYPT);
console.log(isMatch); // true
"#,
        )
        .section("Next Steps")
        .paragraph(
            "Explore the Entity class documentation to learn how to define \
             and manage your database models:",
        )
        .link("Entity Class", "/docs/orm/entity")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentBlock;
    use crate::routes::RouteTable;

    #[test]
    fn given_every_route_when_page_built_then_title_and_content_exist() {
        for route in Route::ALL {
            let page = page(route);

            assert!(!page.title().is_empty(), "{route:?}");
            assert!(!page.blocks().is_empty(), "{route:?}");
        }
    }

    #[test]
    fn given_every_page_when_links_resolved_then_each_points_at_a_route() {
        let routes = RouteTable::new("/focca-orm");

        for route in Route::ALL {
            for target in page(route).link_targets() {
                assert!(
                    routes.resolve(target).is_some(),
                    "{route:?} links to {target}"
                );
            }
        }
    }

    #[test]
    fn given_home_page_when_built_then_install_snippet_has_npm_and_yarn_tabs() {
        let page = page(Route::Home);
        let install = page.snippets().next().expect("install snippet");

        let labels: Vec<_> =
            install.blocks().iter().filter_map(|b| b.label()).collect();
        assert_eq!(labels, vec!["npm", "yarn"]);
        assert_eq!(install.blocks()[0].code(), "npm install focca");
        assert_eq!(install.blocks()[1].code(), "yarn add focca");
        assert!(install.shows_tab_strip());
    }

    #[test]
    fn given_database_guides_when_built_then_next_steps_skip_the_current_one() {
        let page = page(Route::Postgres);
        let targets: Vec<_> = page.link_targets().collect();

        assert_eq!(targets.len(), 4);
        assert!(!targets.contains(&Route::Postgres.path()));
        assert_eq!(page.title(), "FOCCA ORM Documentation for PostgreSQL");
    }

    #[test]
    fn given_server_database_when_config_rendered_then_json_is_valid() {
        let config: serde_json::Value =
            serde_json::from_str(&connection_config(&POSTGRES))
                .expect("valid json");

        assert_eq!(config["default"], "postgres");
        assert_eq!(config["connections"]["postgres"]["port"], 5432);
    }

    #[test]
    fn given_document_store_when_config_rendered_then_url_is_used() {
        let config: serde_json::Value =
            serde_json::from_str(&connection_config(&MONGODB))
                .expect("valid json");

        assert_eq!(
            config["connections"]["mongodb"]["url"],
            "mongodb://localhost:27017/your_database_name"
        );
    }

    #[test]
    fn given_unknown_target_when_not_found_built_then_target_is_mentioned() {
        let page = not_found("/docs/nope");

        assert_eq!(page.title(), "Page not found");
        assert!(page.blocks().iter().any(|block| matches!(
            block,
            ContentBlock::Paragraph(text) if text.contains("/docs/nope")
        )));
    }
}
