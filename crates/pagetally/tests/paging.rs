//! End-to-end pagination flow through the public facade surface.

use pagetally::core::executor::ExecutionError;
use pagetally::prelude::*;
use std::{cell::RefCell, collections::VecDeque};

/// Scripted driver stand-in: hands back queued results in order and keeps
/// the statements it was asked to run.
#[derive(Default)]
struct ScriptedExecutor {
    results: RefCell<VecDeque<Vec<Row>>>,
    statements: RefCell<Vec<String>>,
}

impl ScriptedExecutor {
    fn script(&self, rows: Vec<Row>) {
        self.results.borrow_mut().push_back(rows);
    }

    fn script_count(&self, count: u64) {
        self.script(vec![Row::new().with_column(ROW_COUNT_COLUMN, count)]);
    }

    fn statements(&self) -> Vec<String> {
        self.statements.borrow().clone()
    }
}

impl ExecuteQuery for ScriptedExecutor {
    fn execute(&self, sql: &str) -> Result<Vec<Row>, ExecutionError> {
        self.statements.borrow_mut().push(sql.to_string());
        Ok(self.results.borrow_mut().pop_front().unwrap_or_default())
    }
}

fn number_rows(numbers: std::ops::RangeInclusive<i64>) -> Vec<Row> {
    numbers
        .map(|n| Row::new().with_column("number", Value::Int(n)))
        .collect()
}

#[test]
fn counts_once_then_pages_through_an_ordered_table() {
    let executor = ScriptedExecutor::default();
    executor.script_count(500);
    executor.script(number_rows(1..=10));
    executor.script(number_rows(11..=20));

    let select = Select::from_table("test").order_by("number");
    let pager = SelectPager::new(select, &executor);

    assert_eq!(pager.count().expect("count should succeed"), 500);
    assert_eq!(pager.count().expect("count should succeed"), 500);

    let first = pager.fetch_page(0, 10).expect("first page should fetch");
    let second = pager.fetch_page(10, 10).expect("second page should fetch");
    assert_eq!(first.count(), 10);
    assert_eq!(second.count(), 10);
    assert_eq!(
        second.first().and_then(|row| row.get("number")),
        Some(&Value::Int(11))
    );

    assert_eq!(
        executor.statements(),
        vec![
            r#"SELECT COUNT(1) AS "pagetally_row_count" FROM "test""#.to_string(),
            r#"SELECT "test".* FROM "test" ORDER BY "number" ASC LIMIT 10 OFFSET 0"#.to_string(),
            r#"SELECT "test".* FROM "test" ORDER BY "number" ASC LIMIT 10 OFFSET 10"#.to_string(),
        ]
    );
}

#[test]
fn grouped_and_filtered_select_derives_the_shortcut_count() {
    let executor = ScriptedExecutor::default();
    executor.script_count(250);

    let select = Select::from_table("test")
        .and_where("number > 250")
        .group_by("number")
        .order_by("number");
    let pager = SelectPager::new(select, &executor);

    assert_eq!(pager.count().expect("count should succeed"), 250);
    assert_eq!(
        executor.statements()[0],
        r#"SELECT COUNT(DISTINCT "test"."number") AS "pagetally_row_count" FROM "test" WHERE (number > 250)"#
    );
}

#[test]
fn having_select_counts_through_the_wrapped_subquery() {
    let executor = ScriptedExecutor::default();
    executor.script_count(250);

    let select = Select::from_table("test")
        .group_by("number")
        .having("number > 250");
    let pager = SelectPager::new(select, &executor);

    assert_eq!(pager.count().expect("count should succeed"), 250);
    assert_eq!(
        executor.statements()[0],
        r#"SELECT COUNT(1) AS "pagetally_row_count" FROM (SELECT "test".* FROM "test" GROUP BY "number" HAVING (number > 250)) AS "t""#
    );
}

#[test]
fn explicit_override_skips_execution_entirely() {
    let executor = ScriptedExecutor::default();
    let select = Select::from_table("test").order_by("number");
    let mut pager = SelectPager::new(select, &executor);

    pager
        .set_row_count(RowCount::Fixed(101))
        .expect("explicit row count should be accepted");

    assert_eq!(pager.count().expect("count should succeed"), 101);
    assert!(executor.statements().is_empty());
}
