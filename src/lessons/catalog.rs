//! The built-in lesson catalog
//!
//! Ten lessons across four categories, ordered from first principles to
//! constraints. Every example query is a complete submission that runs
//! cleanly against the seeded sandbox; the catalog tests enforce this.

use super::model::{Lesson, LessonExample, LessonSummary};

/// Fixed, ordered collection of lessons.
pub struct LessonCatalog {
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// The built-in curriculum.
    pub fn builtin() -> Self {
        Self {
            lessons: build_lessons(),
        }
    }

    /// Navigation summaries in catalog order.
    pub fn summaries(&self) -> Vec<LessonSummary> {
        self.lessons.iter().map(Lesson::summary).collect()
    }

    /// Look up a full lesson by id.
    pub fn get(&self, id: u32) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Iterate lessons in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }
}

impl Default for LessonCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

const WHITE_BELT: &str = "WHITE BELT BASICS";
const SPARRING: &str = "SPARRING DRILLS";
const ADVANCED: &str = "ADVANCED FORMS";
const BLACK_BELT: &str = "BLACK BELT TRIALS";

fn build_lessons() -> Vec<Lesson> {
    vec![
        Lesson::new(
            1,
            "Introduction to SQL",
            WHITE_BELT,
            "Understand what SQL is and why we use it.",
            "SQL (Structured Query Language) is the standard language for working with \
relational databases.\n\n\
Think of it as a way to talk to data. You can ask questions (queries), add new \
data, or change existing data.\n\n\
**Key Concepts:**\n\
- **Data** is stored in **Tables**\n\
- Tables have **Rows** (records) and **Columns** (fields)\n\
- We use **Statements** to interact with these tables",
            vec![LessonExample::new(
                "Your First Kata",
                "Run a SELECT * FROM students query to see the dojo roster.",
                "SELECT * FROM students;",
                "This query retrieves all columns (*) from the students table.",
            )],
        ),
        Lesson::new(
            2,
            "Relational Databases",
            WHITE_BELT,
            "Learn how data is organized in tables with relationships.",
            "A relational database organizes data into tables that can be linked, or \
related, based on data common to each.\n\n\
**Key Features:**\n\
- **Tables**: Store data in rows and columns\n\
- **Relationships**: Tables can be connected through common fields\n\
- **Primary Keys**: Unique identifiers for each row\n\
- **Foreign Keys**: References to primary keys in other tables\n\n\
**Example:**\n\
The `students` table has an `id` as primary key.\n\
The `techniques` table references `student_id` as a foreign key, linking each \
technique to the student who trains it.",
            vec![LessonExample::new(
                "View Related Data",
                "See how the students and techniques tables are related.",
                "SELECT students.name, techniques.name AS technique, techniques.style\n\
FROM students\n\
JOIN techniques ON students.id = techniques.student_id;",
                "This joins two tables to show which student trains which technique.",
            )],
        ),
        Lesson::new(
            3,
            "SQL Statements",
            WHITE_BELT,
            "Overview of the main SQL statement types.",
            "SQL statements are commands we use to interact with databases. They fall \
into several categories:\n\n\
**Data Manipulation Language (DML):**\n\
- `SELECT` - Retrieve data\n\
- `INSERT` - Add new data\n\
- `UPDATE` - Modify existing data\n\
- `DELETE` - Remove data\n\n\
**Data Definition Language (DDL):**\n\
- `CREATE` - Create new tables or databases\n\
- `ALTER` - Modify table structure\n\
- `DROP` - Delete tables or databases\n\n\
**Data Control Language (DCL):**\n\
- `GRANT` - Give permissions\n\
- `REVOKE` - Remove permissions\n\n\
The sandbox accepts the DML statements plus `CREATE` and `ALTER`; destructive \
or administrative statements are blocked by the safety guard.",
            vec![LessonExample::new(
                "Basic SELECT Statement",
                "The most common SQL statement: retrieving data.",
                "SELECT name, hometown FROM students;",
                "Retrieves only the name and hometown columns from the students table.",
            )],
        ),
        Lesson::new(
            4,
            "CREATE TABLE",
            SPARRING,
            "Learn how to create new tables in your database.",
            "The CREATE TABLE statement creates a new table in the database.\n\n\
**Syntax:**\n\
```sql\n\
CREATE TABLE table_name (\n\
    column1 datatype,\n\
    column2 datatype,\n\
    column3 datatype\n\
);\n\
```\n\n\
**Common Data Types:**\n\
- `INTEGER` - Whole numbers\n\
- `TEXT` - String/text data\n\
- `REAL` - Decimal numbers\n\
- `BLOB` - Binary data\n\
- `NULL` - Empty value",
            vec![LessonExample::new(
                "Create a Tournaments Table",
                "Create a new table to track tournament entries, then confirm it \
exists (it will be empty).",
                "CREATE TABLE tournaments (\n\
    id INTEGER,\n\
    name TEXT,\n\
    city TEXT,\n\
    prize INTEGER\n\
);\n\
SELECT * FROM tournaments;",
                "Creates a tournaments table with 4 columns, then selects from it. \
The SELECT shows the column structure but no rows yet.",
            )],
        ),
        Lesson::new(
            5,
            "INSERT INTO",
            SPARRING,
            "Add new data to your tables.",
            "The INSERT INTO statement adds new rows to a table.\n\n\
**Syntax for single row:**\n\
```sql\n\
INSERT INTO table_name (column1, column2)\n\
VALUES (value1, value2);\n\
```\n\n\
**Syntax for multiple rows:**\n\
```sql\n\
INSERT INTO table_name (column1, column2)\n\
VALUES\n\
    (value1, value2),\n\
    (value3, value4);\n\
```\n\n\
**Note:** If you insert values for all columns in order, you can omit the \
column names.",
            vec![
                LessonExample::new(
                    "Enroll a Single Student",
                    "Add one new student to the students table and view the roster.",
                    "INSERT INTO students (id, name, hometown, medals)\n\
VALUES (5, 'Ren Park', 'Millbrook', 0);\n\
SELECT * FROM students;",
                    "Adds a new student with id=5, then displays all students \
including the new enrollment.",
                ),
                LessonExample::new(
                    "Record Multiple Techniques",
                    "Add two techniques in a single statement.",
                    "INSERT INTO techniques (id, name, style, student_id, level, power, notes)\n\
VALUES\n\
    (150, 'Phoenix Rise', 'Taekwondo', 4, 40, 700, 'Demonstration only'),\n\
    (151, 'Silent Step', 'Aikido', 2, 35, 500, 'Footwork drill');\n\
SELECT * FROM techniques WHERE id >= 150;",
                    "Adds two new techniques in a single INSERT, then selects them back.",
                ),
            ],
        ),
        Lesson::new(
            6,
            "The SELECT Statement",
            SPARRING,
            "Query and retrieve data from your database.",
            "SELECT is the most used SQL statement. It retrieves data from one or more \
tables.\n\n\
**Basic Syntax:**\n\
```sql\n\
SELECT column1, column2 FROM table_name;\n\
```\n\n\
**Select all columns:**\n\
```sql\n\
SELECT * FROM table_name;\n\
```\n\n\
**Filtering with WHERE:**\n\
```sql\n\
SELECT * FROM table_name WHERE condition;\n\
```\n\n\
**Sorting with ORDER BY:**\n\
```sql\n\
SELECT * FROM table_name ORDER BY column ASC/DESC;\n\
```\n\n\
**Limiting results:**\n\
```sql\n\
SELECT * FROM table_name LIMIT number;\n\
```",
            vec![
                LessonExample::new(
                    "Select Specific Columns",
                    "Get only name and style from techniques.",
                    "SELECT name, style FROM techniques;",
                    "Returns only the name and style columns.",
                ),
                LessonExample::new(
                    "Filter with WHERE",
                    "Find all Judo techniques.",
                    "SELECT * FROM techniques WHERE style = 'Judo';",
                    "Returns only techniques whose style is Judo.",
                ),
                LessonExample::new(
                    "Sort Results",
                    "List techniques ordered by level (highest first).",
                    "SELECT name, level FROM techniques ORDER BY level DESC;",
                    "DESC means descending order (largest to smallest).",
                ),
                LessonExample::new(
                    "Limit Results",
                    "Get only the first 3 techniques.",
                    "SELECT * FROM techniques LIMIT 3;",
                    "LIMIT restricts the number of rows returned.",
                ),
            ],
        ),
        Lesson::new(
            7,
            "ALTER TABLE",
            ADVANCED,
            "Modify the structure of existing tables.",
            "ALTER TABLE modifies an existing table's structure.\n\n\
**Add a new column:**\n\
```sql\n\
ALTER TABLE table_name\n\
ADD column_name datatype;\n\
```\n\n\
**Rename a table:**\n\
```sql\n\
ALTER TABLE old_name\n\
RENAME TO new_name;\n\
```\n\n\
**Note:** SQLite has limited ALTER TABLE support compared to other databases. \
You can add columns and rename tables, but dropping columns requires \
recreating the table.",
            vec![LessonExample::new(
                "Add a Column",
                "Add a 'nickname' column to the techniques table and view the result.",
                "ALTER TABLE techniques ADD nickname TEXT;\n\
SELECT name, nickname FROM techniques;",
                "Adds a new nickname column. Existing rows show NULL for it until \
they are updated.",
            )],
        ),
        Lesson::new(
            8,
            "UPDATE",
            ADVANCED,
            "Modify existing data in your tables.",
            "UPDATE changes existing data in a table.\n\n\
**Syntax:**\n\
```sql\n\
UPDATE table_name\n\
SET column1 = value1, column2 = value2\n\
WHERE condition;\n\
```\n\n\
**WARNING:** Always use a WHERE clause! Without it, ALL rows will be updated.\n\n\
**Examples:**\n\
- Update one row: `WHERE id = 1`\n\
- Update multiple rows: `WHERE level > 20`\n\
- Update all rows: Omit WHERE (use carefully!)",
            vec![
                LessonExample::new(
                    "Level Up a Technique",
                    "Promote Thunder Kick after a grading.",
                    "UPDATE techniques\n\
SET level = 30, power = 450\n\
WHERE name = 'Thunder Kick';\n\
SELECT name, level, power FROM techniques WHERE name = 'Thunder Kick';",
                    "Updates only the row where name is 'Thunder Kick', then shows \
the new values.",
                ),
                LessonExample::new(
                    "Update Multiple Columns",
                    "Adjust both level and power for Riptide Slam.",
                    "UPDATE techniques\n\
SET level = 35, power = 640\n\
WHERE name = 'Riptide Slam';\n\
SELECT name, level, power FROM techniques WHERE name = 'Riptide Slam';",
                    "You can update multiple columns in one statement.",
                ),
            ],
        ),
        Lesson::new(
            9,
            "DELETE",
            ADVANCED,
            "Remove data from your tables.",
            "DELETE removes rows from a table.\n\n\
**Syntax:**\n\
```sql\n\
DELETE FROM table_name\n\
WHERE condition;\n\
```\n\n\
**WARNING:** Always use a WHERE clause! Without it, ALL rows will be deleted.\n\n\
**Examples:**\n\
- Delete one row: `WHERE id = 1`\n\
- Delete multiple rows: `WHERE level < 15`\n\
- Delete all rows: `DELETE FROM table_name` (use carefully!)\n\n\
**Note:** DELETE removes the data but keeps the table structure. DROP TABLE \
would remove the entire table, which is why the sandbox blocks it.",
            vec![
                LessonExample::new(
                    "Retire a Single Technique",
                    "Remove the technique with id = 7 and view what remains.",
                    "DELETE FROM techniques WHERE id = 7;\n\
SELECT id, name FROM techniques;",
                    "Removes only the row where id equals 7 (Tide Throw).",
                ),
                LessonExample::new(
                    "Retire Beginner Techniques",
                    "Remove all techniques below level 15.",
                    "DELETE FROM techniques WHERE level < 15;\n\
SELECT name, level FROM techniques ORDER BY level;",
                    "Removes every row matching the condition, then shows the \
remaining techniques.",
                ),
            ],
        ),
        Lesson::new(
            10,
            "SQL Constraints",
            BLACK_BELT,
            "Enforce rules on your data to maintain integrity.",
            "Constraints are rules enforced on data columns to ensure accuracy and \
reliability.\n\n\
**Common Constraints:**\n\n\
**PRIMARY KEY** - Uniquely identifies each row\n\
```sql\n\
CREATE TABLE members (\n\
    id INTEGER PRIMARY KEY,\n\
    name TEXT\n\
);\n\
```\n\n\
**NOT NULL** - Column cannot be empty\n\
```sql\n\
CREATE TABLE members (\n\
    id INTEGER PRIMARY KEY,\n\
    name TEXT NOT NULL\n\
);\n\
```\n\n\
**UNIQUE** - All values must be different\n\
```sql\n\
CREATE TABLE members (\n\
    email TEXT UNIQUE\n\
);\n\
```\n\n\
**DEFAULT** - Sets a default value\n\
```sql\n\
CREATE TABLE members (\n\
    status TEXT DEFAULT 'active'\n\
);\n\
```\n\n\
**CHECK** - Ensures values meet a condition\n\
```sql\n\
CREATE TABLE members (\n\
    age INTEGER CHECK(age >= 18)\n\
);\n\
```\n\n\
**FOREIGN KEY** - Links to another table\n\
```sql\n\
CREATE TABLE gradings (\n\
    id INTEGER PRIMARY KEY,\n\
    member_id INTEGER,\n\
    FOREIGN KEY (member_id) REFERENCES members(id)\n\
);\n\
```",
            vec![LessonExample::new(
                "Create a Table with Constraints",
                "Create a gradings table with multiple constraints, add a valid row, \
and view it.",
                "CREATE TABLE gradings (\n\
    id INTEGER PRIMARY KEY,\n\
    student TEXT NOT NULL,\n\
    belt TEXT UNIQUE,\n\
    score INTEGER CHECK(score >= 1 AND score <= 100),\n\
    status TEXT DEFAULT 'Pending'\n\
);\n\
INSERT INTO gradings (id, student, belt, score)\n\
VALUES (1, 'Kenji Sato', 'Storm Belt', 88);\n\
SELECT * FROM gradings;",
                "The table has PRIMARY KEY, NOT NULL, UNIQUE, CHECK, and DEFAULT \
constraints. The insert satisfies all of them, and the status column shows \
the 'Pending' default.",
            )],
        ),
    ]
}
