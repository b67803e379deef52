use crate::parser::tree::LocationTree;

pub const EMPTY_SEED: &str = "-- No centres found.\n";

const INSERT_HEADER: &str =
    "INSERT INTO fellowship_centres (name, state, region, created_at, updated_at)\nVALUES\n";

pub struct CentreRow<'a> {
    pub name: &'a str,
    pub state: &'a str,
    pub region: &'a str,
}

/// One row per (state, region, centre), in tree order.
pub fn rows(tree: &LocationTree) -> Vec<CentreRow<'_>> {
    tree.iter()
        .flat_map(|(state, entry)| {
            entry.regions.iter().flat_map(move |(region, centres)| {
                centres.iter().map(move |name| CentreRow {
                    name,
                    state,
                    region,
                })
            })
        })
        .collect()
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Render the seed script; a comment-only document when there are no centres.
pub fn render(tree: &LocationTree) -> String {
    let values: Vec<String> = rows(tree)
        .iter()
        .map(|r| {
            format!(
                "({}, {}, {}, NOW(), NOW())",
                quote(r.name),
                quote(r.state),
                quote(r.region)
            )
        })
        .collect();

    if values.is_empty() {
        return EMPTY_SEED.to_string();
    }

    format!("{}{};\n", INSERT_HEADER, values.join(",\n"))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::extract_locations;
    use crate::parser::tree::StateEntry;

    fn tree(entries: &[(&str, &str, &[&str])]) -> LocationTree {
        let mut t = LocationTree::new();
        for (state, region, centres) in entries {
            t.entry(state.to_string())
                .or_insert_with(StateEntry::default)
                .regions
                .insert(region.to_string(), centres.iter().map(|c| c.to_string()).collect());
        }
        t
    }

    #[test]
    fn single_row_layout() {
        let sql = render(&tree(&[("Lagos", "Ikeja", &["Ikeja City Mall"])]));
        assert_eq!(
            sql,
            "INSERT INTO fellowship_centres (name, state, region, created_at, updated_at)\n\
             VALUES\n\
             ('Ikeja City Mall', 'Lagos', 'Ikeja', NOW(), NOW());\n"
        );
    }

    #[test]
    fn quotes_are_doubled() {
        let sql = render(&tree(&[("Lagos", "Ikeja", &["O'Brien's Hall"])]));
        assert!(sql.contains("('O''Brien''s Hall', 'Lagos', 'Ikeja', NOW(), NOW())"));
    }

    #[test]
    fn quotes_in_state_and_region_are_doubled() {
        let sql = render(&tree(&[("Akwa'Ibom", "Uyo'East", &["Itam"])]));
        assert!(sql.contains("('Itam', 'Akwa''Ibom', 'Uyo''East', NOW(), NOW())"));
    }

    #[test]
    fn empty_tree_is_comment_only() {
        assert_eq!(render(&LocationTree::new()), "-- No centres found.\n");
    }

    #[test]
    fn regions_without_centres_emit_no_rows() {
        let sql = render(&tree(&[("Oyo", "Ibadan", &[]), ("Kano", "Nassarawa", &[])]));
        assert_eq!(sql, EMPTY_SEED);
    }

    #[test]
    fn rows_separated_by_comma_newline() {
        let sql = render(&tree(&[
            ("Lagos", "Ikeja", &["Allen Avenue", "Maryland"]),
            ("Oyo", "Ibadan", &["Bodija"]),
        ]));
        let body = sql.strip_prefix(INSERT_HEADER).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(
            lines,
            vec![
                "('Allen Avenue', 'Lagos', 'Ikeja', NOW(), NOW()),",
                "('Maryland', 'Lagos', 'Ikeja', NOW(), NOW()),",
                "('Bodija', 'Oyo', 'Ibadan', NOW(), NOW());",
            ]
        );
    }

    #[test]
    fn seed_loads_into_sqlite() {
        use rusqlite::functions::FunctionFlags;
        use rusqlite::Connection;

        let src = std::fs::read_to_string("tests/fixtures/dlcfform.php").unwrap();
        let ex = extract_locations(&src);

        let conn = Connection::open_in_memory().unwrap();
        conn.create_scalar_function("NOW", 0, FunctionFlags::SQLITE_UTF8, |_| {
            Ok("2024-01-01 00:00:00".to_string())
        })
        .unwrap();
        conn.execute_batch(
            "CREATE TABLE fellowship_centres (
                id         INTEGER PRIMARY KEY,
                name       TEXT NOT NULL,
                state      TEXT NOT NULL,
                region     TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )
        .unwrap();
        conn.execute_batch(&render(&ex.tree)).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM fellowship_centres", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 9);

        let (state, region): (String, String) = conn
            .query_row(
                "SELECT state, region FROM fellowship_centres WHERE name = ?1",
                ["O'Brien's Hall"],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!((state.as_str(), region.as_str()), ("Lagos", "Ikeja"));

        let stamped: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM fellowship_centres WHERE created_at = updated_at",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(stamped, 9);
    }
}
