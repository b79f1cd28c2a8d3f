//! Sandbox seed data
//!
//! Every execution gets a fresh in-memory database seeded with the dojo
//! dataset. Nothing a student does survives the request.
//!
//! Tables:
//! - `students`: dojo members
//! - `techniques`: moves each student is training, linked by `student_id`
//! - `belts`: the ranks awarded by the dojo
//! - `gear`: the pro shop inventory

use rusqlite::{params, Connection};

/// Table definitions for the practice dataset.
const SCHEMA: &str = "
CREATE TABLE students (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    hometown TEXT,
    medals INTEGER DEFAULT 0
);

CREATE TABLE techniques (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    style TEXT NOT NULL,
    student_id INTEGER,
    level INTEGER DEFAULT 1,
    power INTEGER,
    notes TEXT,
    FOREIGN KEY (student_id) REFERENCES students(id)
);

CREATE TABLE belts (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    color TEXT NOT NULL,
    style TEXT NOT NULL,
    awarded_by TEXT
);

CREATE TABLE gear (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    price INTEGER,
    purpose TEXT
);
";

const STUDENTS: &[(i64, &str, &str, i64)] = &[
    (1, "Kenji Sato", "Harbor Town", 8),
    (2, "Mara Voss", "Cliffside", 8),
    (3, "Tomas Reyes", "Stonegate", 8),
    (4, "Ingrid Hall", "Harbor Town", 10),
];

const TECHNIQUES: &[(i64, &str, &str, i64, i64, i64, &str)] = &[
    (25, "Thunder Kick", "Taekwondo", 1, 25, 320, "Signature move"),
    (1, "Vine Sweep", "Judo", 1, 15, 180, "Low entry"),
    (4, "Ember Strike", "Karate", 1, 12, 150, "Close range"),
    (7, "Tide Throw", "Judo", 1, 10, 140, "Needs grip work"),
    (120, "Star Guard", "Aikido", 2, 22, 280, "Defensive form"),
    (121, "Comet Palm", "Aikido", 2, 28, 380, "Tournament ready"),
    (95, "Iron Wall", "Karate", 3, 28, 450, "Block chain"),
    (74, "Boulder Fist", "Karate", 3, 18, 220, "Conditioning drill"),
    (59, "Blaze Rush", "Muay Thai", 4, 30, 520, "High tempo"),
    (130, "Riptide Slam", "Judo", 4, 32, 580, "Competition only"),
];

const BELTS: &[(i64, &str, &str, &str, &str)] = &[
    (1, "Foundation Belt", "White", "Karate", "Master Ito"),
    (2, "River Belt", "Blue", "Judo", "Master Voss"),
    (3, "Storm Belt", "Yellow", "Taekwondo", "Master Chen"),
    (4, "Forest Belt", "Green", "Aikido", "Master Okafor"),
    (5, "Dusk Belt", "Purple", "Judo", "Master Reyes"),
    (6, "Mind Belt", "Brown", "Aikido", "Master Silva"),
    (7, "Flame Belt", "Red", "Muay Thai", "Master Duarte"),
    (8, "Mountain Belt", "Black", "Karate", "Master Ito"),
];

const GEAR: &[(i64, &str, &str, i64, &str)] = &[
    (1, "Cotton Gi", "Uniforms", 300, "Everyday training"),
    (2, "Competition Gi", "Uniforms", 700, "Tournament grade"),
    (3, "Sparring Gloves", "Protection", 200, "Standard padding"),
    (4, "Headgear", "Protection", 600, "Required for sparring"),
    (5, "Shin Guards", "Protection", 1200, "Full contact classes"),
    (6, "Grip Trainer", "Conditioning", 1000, "Strengthens holds"),
    (7, "Practice Scroll", "Study", 3000, "Form diagrams, volume 1"),
    (8, "Ceremonial Belt", "Uniforms", 99999, "Display only"),
];

/// Open a fresh in-memory database seeded with the dojo dataset.
pub fn seeded_connection() -> Result<Connection, rusqlite::Error> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;

    {
        let mut insert = conn.prepare("INSERT INTO students VALUES (?1, ?2, ?3, ?4)")?;
        for (id, name, hometown, medals) in STUDENTS {
            insert.execute(params![id, name, hometown, medals])?;
        }
    }

    {
        let mut insert =
            conn.prepare("INSERT INTO techniques VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)")?;
        for (id, name, style, student_id, level, power, notes) in TECHNIQUES {
            insert.execute(params![id, name, style, student_id, level, power, notes])?;
        }
    }

    {
        let mut insert = conn.prepare("INSERT INTO belts VALUES (?1, ?2, ?3, ?4, ?5)")?;
        for (id, name, color, style, awarded_by) in BELTS {
            insert.execute(params![id, name, color, style, awarded_by])?;
        }
    }

    {
        let mut insert = conn.prepare("INSERT INTO gear VALUES (?1, ?2, ?3, ?4, ?5)")?;
        for (id, name, category, price, purpose) in GEAR {
            insert.execute(params![id, name, category, price, purpose])?;
        }
    }

    Ok(conn)
}
