use sheet_unify::mapping::ColumnMapping;
use sheet_unify::merge::merge_tables;
use sheet_unify::model::{CellValue, Column, Table};
use sheet_unify::standardize::{MANDATORY_COLUMNS, StandardizeOptions, Standardizer, standardize};
use sheet_unify::ToolError;

fn text(value: &str) -> CellValue {
    CellValue::from(value)
}

fn expected_default_layout() -> Vec<&'static str> {
    vec![
        "Site",
        "Market",
        "DA",
        "DR",
        "Traffic",
        "Price",
        "Status",
        "Publish",
        "Anchor Text",
        "Target URL",
        "Live URL / Published Link",
        "Project",
        "Published Date",
        "Published Date",
        "Owner",
        "Project",
        "Expiry Warranty",
    ]
}

#[test]
fn default_mapping_produces_fixed_layout() {
    let table = Table::from_rows(
        &["Domain", "DA", "Unrelated"],
        vec![vec![text("a.com"), CellValue::Number(40.0), text("x")]],
    );

    let standardized = standardize(&table, &ColumnMapping::default(), "links.xlsx");

    assert_eq!(standardized.column_names(), expected_default_layout());
    assert_eq!(standardized.row_count(), 1);
    assert_eq!(standardized.cell(0, "Site"), Some(&text("a.com")));
    assert_eq!(standardized.cell(0, "DA"), Some(&CellValue::Number(40.0)));
    assert_eq!(standardized.cell(0, "Market"), Some(&CellValue::Empty));
    assert!(!standardized.has_column("Unrelated"));
    assert!(!standardized.has_column("Domain"));
}

#[test]
fn layout_is_independent_of_present_columns() {
    let mapping = ColumnMapping::new([("Domain", "Site"), ("Site", "Site"), ("Cost", "Price")])
        .expect("valid mapping");
    let with_columns = Table::from_rows(&["Cost", "Domain"], vec![vec![text("5"), text("b.com")]]);
    let without_columns = Table::from_rows(&["Whatever"], vec![vec![text("?")]]);
    let empty = Table::default();

    let expected: Vec<&str> = vec![
        "Site",
        "Price",
        "Published Date",
        "Owner",
        "Project",
        "Expiry Warranty",
    ];
    for table in [with_columns, without_columns, empty] {
        let standardized = standardize(&table, &mapping, "file.xlsx");
        assert_eq!(standardized.column_names(), expected);
        assert_eq!(standardized.row_count(), table.row_count());
    }
}

#[test]
fn mandatory_columns_are_filled_on_every_row() {
    let table = Table::from_rows(
        &["Site", "Project"],
        vec![
            vec![text("a.com"), text("Alpha")],
            vec![text("b.com"), text("Beta")],
        ],
    );

    let standardized = standardize(&table, &ColumnMapping::default(), "Links_March.xlsx");

    for row in 0..standardized.row_count() {
        assert_eq!(standardized.cell(row, "Expiry Warranty"), Some(&text("1 year")));
        assert_eq!(standardized.cell(row, "Project"), Some(&CellValue::Empty));
        assert_eq!(standardized.cell(row, "Owner"), Some(&CellValue::Empty));
        assert_eq!(standardized.cell(row, "Published Date"), Some(&text("March")));
    }
    for column in standardized.columns() {
        if column.name == "Project" {
            assert!(column.values.iter().all(CellValue::is_empty));
        }
    }
}

#[test]
fn source_date_column_is_replaced_by_file_month() {
    let table = Table::from_rows(&["Date"], vec![vec![CellValue::DateTime(45000.0)]]);

    let standardized = standardize(&table, &ColumnMapping::default(), "report.xlsx");

    let published: Vec<&Column> = standardized
        .columns()
        .iter()
        .filter(|column| column.name == "Published Date")
        .collect();
    assert_eq!(published.len(), 2);
    assert!(published.iter().all(|column| column.values == vec![CellValue::Empty]));
}

#[test]
fn keep_project_data_preserves_mapped_project() {
    let table = Table::from_rows(&["Project"], vec![vec![text("Alpha")]]);
    let options = StandardizeOptions {
        keep_project_data: true,
        ..StandardizeOptions::default()
    };
    let standardizer = Standardizer::new(ColumnMapping::default(), options);

    let standardized = standardizer.standardize(&table, "file.xlsx");

    assert_eq!(standardized.cell(0, "Project"), Some(&text("Alpha")));
}

#[test]
fn custom_expiry_warranty_is_applied() {
    let options = StandardizeOptions {
        expiry_warranty: "2 years".into(),
        ..StandardizeOptions::default()
    };
    let standardizer = Standardizer::new(ColumnMapping::default(), options);
    let table = Table::from_rows(&["Site"], vec![vec![text("a.com")]]);

    let standardized = standardizer.standardize(&table, "file.xlsx");

    assert_eq!(standardized.cell(0, "Expiry Warranty"), Some(&text("2 years")));
}

#[test]
fn leftmost_source_column_wins_on_clash() {
    let table = Table::from_rows(
        &["Link origin", "Domain"],
        vec![vec![text("first.com"), text("second.com")]],
    );

    let standardized = standardize(&table, &ColumnMapping::default(), "file.xlsx");

    assert_eq!(standardized.cell(0, "Site"), Some(&text("first.com")));
}

#[test]
fn mapping_rejects_duplicate_sources() {
    let result = ColumnMapping::new([("Site", "Site"), ("Site", "Domain")]);
    assert!(matches!(result, Err(ToolError::InvalidMapping(_))));
}

#[test]
fn mapping_canonical_columns_are_deduplicated_in_order() {
    let mapping = ColumnMapping::default();
    let canonical = mapping.canonical_columns();
    assert_eq!(canonical.len(), 13);
    assert_eq!(canonical[0], "Site");
    assert_eq!(canonical[10], "Live URL / Published Link");
    assert_eq!(canonical[12], "Published Date");
    assert_eq!(mapping.canonical_for("Price €"), Some("Price"));
    assert_eq!(mapping.canonical_for("price"), None);
}

#[test]
fn merge_preserves_counts_and_order() {
    let mapping = ColumnMapping::default();
    let first = standardize(
        &Table::from_rows(&["Site"], vec![vec![text("a")], vec![text("b")]]),
        &mapping,
        "january.xlsx",
    );
    let second = standardize(
        &Table::from_rows(&["Domain"], vec![vec![text("c")]]),
        &mapping,
        "february.xlsx",
    );
    let third = standardize(&Table::default(), &mapping, "march.xlsx");

    let merged = merge_tables([first, second, third])
        .expect("layouts match")
        .expect("tables supplied");

    assert_eq!(merged.row_count(), 3);
    assert_eq!(merged.column_names(), expected_default_layout());
    let sites: Vec<&CellValue> = merged.column("Site").expect("site column").values.iter().collect();
    assert_eq!(sites, vec![&text("a"), &text("b"), &text("c")]);
    assert_eq!(merged.cell(1, "Published Date"), Some(&text("January")));
    assert_eq!(merged.cell(2, "Published Date"), Some(&text("February")));
}

#[test]
fn merge_of_nothing_is_none() {
    let merged = merge_tables(Vec::<Table>::new()).expect("no error");
    assert!(merged.is_none());
}

#[test]
fn merge_rejects_mismatched_layouts() {
    let mut left = Table::with_rows(1);
    left.push_column(Column::new("A", vec![text("1")]))
        .expect("column fits");
    let mut right = Table::with_rows(1);
    right.push_column(Column::new("B", vec![text("2")]))
        .expect("column fits");

    let result = merge_tables([left, right]);

    assert!(matches!(result, Err(ToolError::LayoutMismatch { .. })));
}

#[test]
fn push_column_rejects_wrong_length() {
    let mut table = Table::with_rows(2);

    let result = table.push_column(Column::new("A", vec![text("only one")]));

    assert!(matches!(result, Err(ToolError::InvalidWorkbook(_))));
    assert!(table.columns().is_empty());
}

#[test]
fn mandatory_columns_close_the_layout() {
    let standardizer = Standardizer::default();
    let layout = standardizer.layout();
    let tail: Vec<&str> = layout[layout.len() - 4..]
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(tail, MANDATORY_COLUMNS);
}
