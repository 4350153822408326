use std::io::{self, Write};
use tableify::{AppError, Table, Value, row, tableify_record};

tableify_record! {
    #[allow(dead_code)]
    struct Person {
        #[tableify = "Name"]
        name: String,
        #[tableify = "Age"]
        age: u32,
        nickname: String,
    }
}

fn person(name: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        age,
        nickname: String::new(),
    }
}

fn name_age() -> Table {
    let mut table = Table::new();
    table.set_headers(["Name", "Age"]);
    table
}

#[test]
fn test_render_name_age() {
    let mut table = name_age();
    table.add_row(row!["Bob", 30]).unwrap();

    assert_eq!(table.render(), "Name   Age\n----------\nBob    30 \n");
}

#[test]
fn test_defaults() {
    let table = Table::new();
    assert_eq!(table.margin, 3);
    assert!(table.split_line);
    assert!(table.empty_text.is_empty());
    assert_eq!(table.column_count(), 0);
}

#[test]
fn test_empty_text_replaces_rows() {
    let mut table = name_age().with_empty_text("no data");
    assert!(table.is_empty());
    assert_eq!(table.render(), "Name   Age\n----------\nno data\n");

    table.add_row(row!["Bob", 30]).unwrap();
    assert!(!table.render().contains("no data"));
}

#[test]
fn test_empty_without_text() {
    let table = name_age();
    assert_eq!(table.render(), "Name   Age\n----------\n");
}

#[test]
fn test_no_split_line_and_margin() {
    let mut table = name_age().with_split_line(false).with_margin(1);
    table.add_row(row!["Bob", 30]).unwrap();
    assert_eq!(table.render(), "Name Age\nBob  30 \n");
}

#[test]
fn test_min_widths() {
    let mut table = name_age();
    table.set_widths(&[6, 0]).unwrap();
    table.add_row(row!["Bob", 30]).unwrap();

    assert_eq!(table.widths(), vec![6, 3]);
    assert_eq!(
        table.render(),
        "Name     Age\n------------\nBob      30 \n"
    );
}

#[test]
fn test_widths_cover_headers_minwidths_and_cells() {
    let mut table = Table::new();
    table.set_headers(["id", "description"]);
    table.set_widths(&[3, 0]).unwrap();
    table.add_row(row![1, "a much longer description"]).unwrap();
    table.add_row(row![12345, "x"]).unwrap();

    let widths = table.widths();
    assert_eq!(widths, vec![5, 25]);
    for (i, header) in table.headers().iter().enumerate() {
        assert!(widths[i] >= header.len());
        assert!(widths[i] >= table.minwidths()[i]);
        for row in table.rows() {
            assert!(row[i].len() <= widths[i]);
        }
    }
}

#[test]
fn test_width_counts_bytes() {
    let mut table = Table::new();
    table.set_headers(["A"]);
    table.add_row(row!["é"]).unwrap();
    assert_eq!(table.render(), "A \n--\né\n");
}

#[test]
fn test_set_widths_wrong_count_is_rejected() {
    let mut table = name_age();
    table.set_widths(&[6, 0]).unwrap();

    let err = table.set_widths(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfiguration(_)));
    assert_eq!(table.minwidths(), &[6, 0]);
}

#[test]
fn test_set_formats_wrong_count_is_rejected() {
    let mut table = name_age();
    let err = table.set_formats(["%s"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidConfiguration(_)));
    assert_eq!(table.formats(), &["", ""]);
}

#[test]
fn test_add_row_wrong_count_is_rejected() {
    let mut table = name_age();
    table.add_row(row!["Bob", 30]).unwrap();
    let before = table.render();

    let err = table.add_row(row!["Ann"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(table.rows().len(), 1);
    assert_eq!(table.render(), before);
}

#[test]
fn test_add_row_before_headers_is_rejected() {
    let mut table = Table::new();
    let err = table.add_row(row!["Bob"]).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn test_add_row_list_is_all_or_nothing() {
    let mut table = name_age();
    let err = table
        .add_row_list(vec![vec!["Bob", "30"], vec!["Ann"]])
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert!(table.rows().is_empty());
}

#[test]
fn test_render_is_idempotent() {
    let mut table = name_age().with_empty_text("none");
    table.add_row(row!["Bob", 30]).unwrap();
    table.add_row(row![Value::Nil, 1.5]).unwrap();

    let first = table.render();
    let second = table.render();
    assert_eq!(first, second);
    assert_eq!(table.to_string(), first);
}

#[test]
fn test_row_order_across_insertions() {
    let mut table = Table::new();
    table.set_headers_from_struct::<Person>().unwrap();
    assert_eq!(table.headers(), &["Name", "Age"]);

    table.add_row(row!["Ann", 41]).unwrap();
    table.add_row_list([["Bob", "30"]]).unwrap();
    table.add_row_object(&person("Cid", 25)).unwrap();
    table
        .add_row_object_list(&[person("Dee", 52), person("Eve", 19)])
        .unwrap();
    table.add_row(row!["Fay", 33]).unwrap();

    let names: Vec<&str> = table.rows().iter().map(|r| r[0].as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob", "Cid", "Dee", "Eve", "Fay"]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[2].starts_with("Ann"));
    assert!(lines[7].starts_with("Fay"));
}

#[test]
fn test_set_headers_resets_columns() {
    let mut table = name_age();
    table.set_widths(&[10, 10]).unwrap();
    table.set_formats(["%s", "%d"]).unwrap();
    table.add_row(row!["Bob", 30]).unwrap();

    table.set_headers(["Id", "Name", "Team"]);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.minwidths(), &[0, 0, 0]);
    assert_eq!(table.formats(), &["", "", ""]);
    assert!(table.rows().is_empty());
    assert_eq!(table.widths(), vec![2, 4, 4]);
}

#[test]
fn test_column_formats_apply_to_new_rows() {
    let mut table = Table::new();
    table.set_headers(["Item", "Price"]);
    table.set_formats(["", "%.2f"]).unwrap();
    table.add_row(row!["Tea", 3.14159]).unwrap();
    table.add_row(row!["Coffee", 12.5]).unwrap();

    assert_eq!(table.rows()[0], vec!["Tea", "3.14"]);
    assert_eq!(table.rows()[1], vec!["Coffee", "12.50"]);
}

#[test]
fn test_custom_formatter() {
    let mut table = Table::with_formatter(Box::new(|header: &str, value: &Value| {
        if header == "Age" {
            format!("{} y", value)
        } else {
            tableify::format_value(header, value).to_uppercase()
        }
    }));
    table.set_headers(["Name", "Age"]);
    table.add_row(row!["bob", 30]).unwrap();

    assert_eq!(table.rows()[0], vec!["BOB", "30 y"]);
    assert_eq!(table.render(), "Name   Age \n-----------\nBOB    30 y\n");
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_propagates() {
    let mut table = name_age();
    table.add_row(row!["Bob", 30]).unwrap();

    let err = table.write_to(&mut BrokenSink).unwrap_err();
    match err {
        AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_write_to_buffer() {
    let mut table = name_age();
    table.add_row(row!["Bob", 30]).unwrap();

    let mut out = Vec::new();
    table.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), table.render());
}
