mod common;

use common::*;

#[test]
fn print_renders_first_item_open() {
    let env = TestEnv::new();
    env.write("rows.json", ROWS);

    let result = env.run(&["print", "rows.json"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(
        result.stdout,
        "  [-] [] [2]\n    [-] Item 1: {2}\n        a: 1\n        b: x\n    [+] Item 2: {2}\n"
    );
}

#[test]
fn print_table_aligns_columns() {
    let env = TestEnv::new();
    env.write("rows.json", ROWS);

    let result = env.run(&["print", "rows.json", "--table"]);
    assert!(result.success, "stderr: {}", result.stderr);
    assert_eq!(result.stdout, "#  a  b\n-------\n1  1  x\n2  2  y\n");
}

#[test]
fn print_table_falls_back_to_tree_for_non_tabular() {
    let env = TestEnv::new();
    env.write("people.json", PEOPLE);

    let result = env.run(&["print", "people.json", "--table"]);
    assert!(result.success);
    assert!(result.stderr.contains("table view needs an array of flat objects"));
    assert!(result.stdout.contains("[+] team {2}"));
}

#[test]
fn print_reads_stdin() {
    let env = TestEnv::new();
    let result = env.run_with_stdin(&["print", "-", "--table"], ROWS);
    assert!(result.success, "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("#  a  b\n"));
}

#[test]
fn print_search_shows_matching_branch() {
    let env = TestEnv::new();
    env.write("people.json", PEOPLE);

    let result = env.run(&["print", "people.json", "--search", "bob"]);
    assert!(result.success);
    assert!(result.stdout.contains("name: Bob"));
    assert!(!result.stdout.contains("Alice"));
    assert!(!result.stdout.contains("size"));
}

#[test]
fn print_placeholders() {
    let env = TestEnv::new();
    env.write("scalar.json", SCALAR);
    env.write("empty.json", NO_PAYLOAD);

    assert_eq!(env.run(&["print", "scalar.json"]).stdout, "Invalid data\n");
    assert_eq!(env.run(&["print", "empty.json"]).stdout, "No data yet\n");
}

#[test]
fn print_depth_flag_and_env_override() {
    let env = TestEnv::new();
    env.write("deep.json", &nested(6).to_string());

    let result = env.run(&["print", "deep.json", "--expand-all", "--depth", "3"]);
    assert!(result.success);
    assert!(result.stdout.ends_with("        [v] Expand deeper\n"), "{}", result.stdout);

    let result = env.run_with_env(&["print", "deep.json", "--expand-all"], &[("TREELENS_MAX_DEPTH", "2")]);
    assert!(result.stdout.ends_with("      [v] Expand deeper\n"), "{}", result.stdout);
}

#[test]
fn print_height_sizes_window() {
    let env = TestEnv::new();
    let items: Vec<_> = (1..=400).collect();
    env.write("items.json", &serde_json::json!(items).to_string());

    // Default chunk is 100
    let result = env.run(&["print", "items.json"]);
    assert!(result.stdout.contains("... Show more (300 remaining)"));

    // 60 rows of 28px: ceil(60 * 28 * 3 / 28) = 180
    let result = env.run(&["print", "items.json", "--height", "60"]);
    assert!(result.stdout.contains("... Show more (220 remaining)"));

    // Short terminals fall back to the minimum chunk of 50
    let result = env.run(&["print", "items.json", "--height", "10"]);
    assert!(result.stdout.contains("... Show more (350 remaining)"));
}

#[test]
fn print_json_emits_ndjson_events() {
    let env = TestEnv::new();
    env.write("rows.json", ROWS);

    let result = env.run(&["--json", "print", "rows.json"]);
    assert!(result.success);

    let events = result.events();
    assert_eq!(events.first().unwrap()["event"], "start");
    assert_eq!(events.last().unwrap()["event"], "complete");
    assert_eq!(events.last().unwrap()["success"], true);

    let rows: Vec<_> = events.iter().filter(|e| e["event"] == "row").collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["address"], "root");
    assert_eq!(rows[0]["kind"], "header");
    assert_eq!(rows[2]["address"], "root.1.a");
    assert_eq!(rows[2]["value"], "1");
    assert_eq!(rows[2]["class"], "number");
}

#[test]
fn print_json_table_rows() {
    let env = TestEnv::new();
    env.write("customers.json", ROWS_ENVELOPE);

    let result = env.run(&["print", "customers.json", "--table", "--json"]);
    let events = result.events();
    let rows: Vec<_> = events.iter().filter(|e| e["event"] == "table_row").collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1]["position"], 2);
    assert_eq!(rows[1]["cells"][0][0], "Customer ID");
    assert_eq!(rows[1]["cells"][0][1], "9");
}

#[test]
fn print_missing_file_fails() {
    let env = TestEnv::new();
    let result = env.run(&["print", "missing.json"]);
    assert!(!result.success);
    assert!(result.stderr.contains("[FAIL]"));
}

#[test]
fn print_invalid_json_reports_document() {
    let env = TestEnv::new();
    env.write("bad.json", "{not json");

    let result = env.run(&["print", "bad.json"]);
    assert!(!result.success);
    assert!(result.stderr.contains("invalid document"));
    assert!(result.stderr.contains("JSON or YAML"));
}
