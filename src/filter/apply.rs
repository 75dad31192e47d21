//! Applies filter queries to ledger records.

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};

use crate::{
    filter::parse::{FilterPart, FilterValue, Operator, split_filter_part},
    ledger::{Cell, Column, Record},
};

/// Separates the expressions of a filter query.
pub const EXPRESSION_SEPARATOR: &str = " && ";

/// Keep the records that satisfy every expression in `filter_query`.
///
/// Expressions are separated by `" && "`. Expressions that cannot be parsed
/// or that refer to an unknown column are skipped. The order of `records`
/// is preserved.
pub fn filter_table(mut records: Vec<Record>, filter_query: &str) -> Vec<Record> {
    for expression in filter_query.split(EXPRESSION_SEPARATOR) {
        let Some(filter_part) = split_filter_part(expression) else {
            if !expression.trim().is_empty() {
                tracing::debug!("skipping filter expression without operator: {expression:?}");
            }
            continue;
        };

        let Some(column) = Column::from_name(&filter_part.column) else {
            tracing::warn!(
                "skipping filter expression on unknown column {:?}: {expression:?}",
                filter_part.column
            );
            continue;
        };

        tracing::debug!(
            "filtering on {} {} {}",
            column.name(),
            filter_part.operator.as_str(),
            filter_part.raw_value
        );
        let predicate = Predicate::new(filter_part);
        records.retain(|record| predicate.matches(&record.cell(column)));
    }

    records
}

/// A filter expression prepared for matching against cells.
enum Predicate {
    Compare(Operator, FilterValue),
    Contains(Regex),
    ContainsLiteral(String),
    StartsWith(String),
}

impl Predicate {
    fn new(filter_part: FilterPart) -> Self {
        match filter_part.operator {
            Operator::Contains => {
                let pattern = filter_part.raw_value;
                match RegexBuilder::new(&pattern).case_insensitive(true).build() {
                    Ok(regex) => Predicate::Contains(regex),
                    Err(error) => {
                        tracing::debug!("searching for {pattern:?} literally: {error}");
                        Predicate::ContainsLiteral(pattern.to_lowercase())
                    }
                }
            }
            Operator::DateStartsWith => Predicate::StartsWith(filter_part.raw_value),
            operator => Predicate::Compare(operator, filter_part.value),
        }
    }

    fn matches(&self, cell: &Cell) -> bool {
        match self {
            Predicate::Compare(operator, value) => {
                let ordering = compare(cell, value);

                match operator {
                    Operator::Eq => ordering == Some(Ordering::Equal),
                    Operator::Ne => ordering != Some(Ordering::Equal),
                    Operator::Lt => ordering == Some(Ordering::Less),
                    Operator::Le => {
                        matches!(ordering, Some(Ordering::Less | Ordering::Equal))
                    }
                    Operator::Gt => ordering == Some(Ordering::Greater),
                    Operator::Ge => {
                        matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
                    }
                    Operator::Contains | Operator::DateStartsWith => false,
                }
            }
            Predicate::Contains(regex) => regex.is_match(&cell.to_string()),
            Predicate::ContainsLiteral(needle) => {
                cell.to_string().to_lowercase().contains(needle.as_str())
            }
            Predicate::StartsWith(prefix) => cell.to_string().starts_with(prefix.as_str()),
        }
    }
}

/// Order `cell` relative to `value`, `None` if they are of different kinds.
fn compare(cell: &Cell, value: &FilterValue) -> Option<Ordering> {
    match (cell, value) {
        (Cell::Number(cell), FilterValue::Number(value)) => cell.partial_cmp(value),
        (Cell::Text(cell), FilterValue::Text(value)) => Some(cell.as_str().cmp(value.as_str())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::ledger::{Record, test_ledger::test_records};

    use super::filter_table;

    fn generals(records: &[Record]) -> Vec<i64> {
        records.iter().map(|record| record.general).collect()
    }

    fn amounts(records: &[Record]) -> Vec<f64> {
        records.iter().map(|record| record.amount).collect()
    }

    #[test]
    fn empty_query_keeps_everything() {
        let got = filter_table(test_records(), "");

        assert_eq!(got, test_records());
    }

    #[test]
    fn numeric_comparisons() {
        assert_eq!(
            amounts(&filter_table(test_records(), "{amount} > 800")),
            vec![850.0, 1190.0]
        );
        assert_eq!(
            amounts(&filter_table(test_records(), "{amount} ge 850")),
            vec![850.0, 1190.0]
        );
        assert_eq!(
            amounts(&filter_table(test_records(), "{amount} < -200")),
            vec![-850.0, -1000.0]
        );
        assert_eq!(
            amounts(&filter_table(test_records(), "{amount} le -850")),
            vec![-850.0, -1000.0]
        );
        assert_eq!(
            amounts(&filter_table(test_records(), "{amount} = 12.5")),
            vec![12.5]
        );
        assert_eq!(
            filter_table(test_records(), "{amount} != 12.5").len(),
            test_records().len() - 1
        );
    }

    #[test]
    fn integer_columns_compare_numerically() {
        let got = filter_table(test_records(), "{account} eq 1200");

        assert_eq!(generals(&got), vec![1, 2]);
    }

    #[test]
    fn text_comparison_is_lexicographic() {
        let got = filter_table(test_records(), "{date} >= '2017-08-15'");

        assert_eq!(generals(&got), vec![2, 2, 2, 3, 3]);
    }

    #[test]
    fn mismatched_kinds_never_compare() {
        assert!(filter_table(test_records(), "{text} eq 5").is_empty());
        assert!(filter_table(test_records(), "{amount} > 'abc'").is_empty());
        assert_eq!(
            filter_table(test_records(), "{account} ne '1200'").len(),
            test_records().len()
        );
    }

    #[test]
    fn contains_is_case_insensitive() {
        let got = filter_table(test_records(), "{text} contains RENT");

        assert_eq!(generals(&got), vec![1, 1]);
    }

    #[test]
    fn contains_accepts_patterns() {
        let got = filter_table(test_records(), "{text} contains ^(rent|printer)");

        assert_eq!(generals(&got), vec![1, 1, 3, 3]);
    }

    #[test]
    fn contains_searches_invalid_pattern_literally() {
        let mut records = test_records();
        records[0].text = "Deposit (refund".to_owned();

        let got = filter_table(records, "{text} contains (refund");

        assert_eq!(got.len(), 1);
        assert_eq!(got[0].text, "Deposit (refund");
    }

    #[test]
    fn contains_on_number_column_uses_text_form() {
        let got = filter_table(test_records(), "{account} contains 12");

        assert_eq!(generals(&got), vec![1, 2]);
    }

    #[test]
    fn datestartswith_matches_prefix() {
        assert_eq!(
            generals(&filter_table(test_records(), "{date} datestartswith 2017-09")),
            vec![3, 3]
        );
        assert_eq!(
            filter_table(test_records(), "{date} datestartswith 2017").len(),
            test_records().len()
        );
    }

    #[test]
    fn text_searches_keep_leading_and_trailing_zeros() {
        let mut records = test_records();
        records[0].relations = "ORDER-007".to_owned();
        records[1].relations = "0815-A".to_owned();
        records[3].text = "Invoice 2017.10".to_owned();

        let relations = |records: &[Record]| {
            records
                .iter()
                .map(|record| record.relations.clone())
                .collect::<Vec<_>>()
        };

        assert_eq!(
            relations(&filter_table(records.clone(), "{relations} contains 007")),
            vec!["ORDER-007"]
        );
        assert_eq!(
            relations(&filter_table(records.clone(), "{relations} datestartswith 0815")),
            vec!["0815-A"]
        );
        let got = filter_table(records, "{text} contains 2017.10");
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].text, "Invoice 2017.10");
    }

    #[test]
    fn expressions_are_combined_with_and() {
        let got = filter_table(
            test_records(),
            "{date} datestartswith 2017-08 && {amount} < 0 && {account} != 1200",
        );

        assert_eq!(amounts(&got), vec![-1000.0, -190.0]);
    }

    #[test]
    fn skips_unknown_columns_and_unparseable_expressions() {
        let got = filter_table(
            test_records(),
            "{generalID} eq 1 && nonsense && {amount} > 1000",
        );

        assert_eq!(amounts(&got), vec![1190.0]);
    }

    #[test]
    fn preserves_order() {
        let mut records = test_records();
        records.reverse();

        let got = filter_table(records, "{amount} > 0");

        assert_eq!(amounts(&got), vec![12.5, 1190.0, 850.0]);
    }
}
