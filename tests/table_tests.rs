mod common;

use common::{TestResult, convert_body};

#[test]
fn test_bordered_table_from_markup() -> TestResult {
    let lines = convert_body(
        r#"<table border="1">
  <tr><td>alpha</td><td>beta</td></tr>
  <tr><td>gamma</td><td>delta</td></tr>
</table>"#,
        80,
    )?;
    assert_eq!(
        lines,
        vec![
            "+-----+-----+",
            "|alpha|beta |",
            "+-----+-----+",
            "|gamma|delta|",
            "+-----+-----+",
        ]
    );
    Ok(())
}

#[test]
fn test_table_between_paragraphs() -> TestResult {
    let lines = convert_body(
        r#"<p>Before the table.</p>
<table>
  <tbody>
    <tr><th>Name</th><th>Value</th></tr>
    <tr><td>x</td><td align="right">42</td></tr>
  </tbody>
</table>
<p>After the table.</p>"#,
        80,
    )?;
    assert_eq!(
        lines,
        vec![
            "Before the table.",
            "Name Value",
            "x       42",
            "After the table.",
        ]
    );
    Ok(())
}

#[test]
fn test_spans_from_markup() -> TestResult {
    let lines = convert_body(
        r#"<table border="1">
  <tr><td>eins</td><td colspan="2">zwei</td><td rowspan="2">drei</td></tr>
  <tr><td>vier</td><td>fünf</td><td>sechs</td></tr>
</table>"#,
        80,
    )?;
    assert_eq!(
        lines,
        vec![
            "+----+----------+----+",
            "|eins|zwei      |drei|",
            "+----+----+-----+    +",
            "|vier|fünf|sechs|    |",
            "+----+----+-----+----+",
        ]
    );
    Ok(())
}

#[test]
fn test_wide_table_wraps_cells_to_fit_the_page() -> TestResult {
    let lines = convert_body(
        r#"<table border="1">
  <tr>
    <td>The quick brown fox jumps over the lazy dog.</td>
    <td>Pack my box with five dozen liquor jugs.</td>
  </tr>
</table>"#,
        31,
    )?;
    // Measure 30; minimum widths 5 + 6 plus 3 border columns leave 16 to spread.
    assert_eq!(
        lines,
        vec![
            "+-------------+--------------+",
            "|The quick    |Pack my box   |",
            "|brown fox    |with five     |",
            "|jumps over   |dozen liquor  |",
            "|the lazy dog.|jugs.         |",
            "+-------------+--------------+",
        ]
    );
    Ok(())
}
