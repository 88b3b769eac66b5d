use super::*;

#[test]
fn test_column_widths_take_longest_cell() {
    let rows = vec![
        vec!["db-x-1".to_string(), "20".to_string()],
        vec!["db-x-snapshot-long".to_string(), "5".to_string()],
    ];
    assert_eq!(calculate_column_widths(&["SNAPSHOT", "GIB"], &rows), vec![18, 3]);
}

#[test]
fn test_render_table_layout() {
    let rows = vec![vec!["snap-a".to_string(), "20".to_string()]];
    let lines = render_table(&["SNAPSHOT", "GIB"], &rows);
    assert_eq!(
        lines,
        vec![
            "SNAPSHOT  GIB".to_string(),
            "--------  ---".to_string(),
            "snap-a    20".to_string(),
        ]
    );
}

#[test]
fn test_render_table_without_rows() {
    let lines = render_table(&["STACK", "STATE"], &[]);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "-----  -----");
}
