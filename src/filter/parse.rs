//! Parser for the table filter language, e.g. `{amount} >= 100` or `{text} contains rent`.

use std::fmt::Display;

/// A comparison in a filter expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Greater than or equal, `ge` or `>=`.
    Ge,
    /// Less than or equal, `le` or `<=`.
    Le,
    /// Less than, `lt` or `<`.
    Lt,
    /// Greater than, `gt` or `>`.
    Gt,
    /// Not equal, `ne` or `!=`.
    Ne,
    /// Equal, `eq` or `=`.
    Eq,
    /// Case-insensitive pattern search, `contains`.
    Contains,
    /// Text prefix, `datestartswith`.
    DateStartsWith,
}

/// The spellings of each operator in the order they are searched for.
///
/// Symbolic spellings are searched after the word spelling of the same
/// operator, and `>=`/`<=` before `<`/`>`, so that the longest symbol wins.
const OPERATOR_SPELLINGS: [(Operator, &[&str]); 8] = [
    (Operator::Ge, &["ge ", ">="]),
    (Operator::Le, &["le ", "<="]),
    (Operator::Lt, &["lt ", "<"]),
    (Operator::Gt, &["gt ", ">"]),
    (Operator::Ne, &["ne ", "!="]),
    (Operator::Eq, &["eq ", "="]),
    (Operator::Contains, &["contains "]),
    (Operator::DateStartsWith, &["datestartswith "]),
];

impl Operator {
    /// The canonical word for the operator, e.g. "ge".
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Ge => "ge",
            Operator::Le => "le",
            Operator::Lt => "lt",
            Operator::Gt => "gt",
            Operator::Ne => "ne",
            Operator::Eq => "eq",
            Operator::Contains => "contains",
            Operator::DateStartsWith => "datestartswith",
        }
    }
}

/// The operand on the right-hand side of a filter expression.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    /// An unquoted value that parses as a number.
    Number(f64),
    /// Any other value, with surrounding quotes removed.
    Text(String),
}

impl Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterValue::Number(number) => write!(f, "{number}"),
            FilterValue::Text(text) => write!(f, "{text}"),
        }
    }
}

/// A single `{column} operator value` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPart {
    /// The column ID between the braces.
    pub column: String,
    /// The comparison between the column and the value.
    pub operator: Operator,
    /// The value, a number if it parses as one and is not quoted.
    pub value: FilterValue,
    /// The value as it was typed, without surrounding quotes.
    ///
    /// Text searches use this so that e.g. `007` is not read as `7`.
    pub raw_value: String,
}

/// Split a single filter expression into its column, operator and value.
///
/// Returns `None` if the expression contains no known operator or has no value.
pub fn split_filter_part(filter_part: &str) -> Option<FilterPart> {
    for (operator, spellings) in OPERATOR_SPELLINGS {
        for spelling in spellings {
            let Some((name_part, value_part)) = filter_part.split_once(spelling) else {
                continue;
            };

            let column = column_name(name_part);
            let value = parse_value(value_part.trim())?;
            let raw_value = match &value {
                FilterValue::Number(_) => value_part.trim().to_owned(),
                FilterValue::Text(text) => text.clone(),
            };

            return Some(FilterPart {
                column: column.to_owned(),
                operator,
                value,
                raw_value,
            });
        }
    }

    None
}

fn column_name(name_part: &str) -> &str {
    match (name_part.find('{'), name_part.rfind('}')) {
        (Some(start), Some(end)) => name_part.get(start + 1..end).unwrap_or(""),
        _ => name_part.trim(),
    }
}

fn parse_value(value_part: &str) -> Option<FilterValue> {
    let first = value_part.chars().next()?;
    let last = value_part.chars().last()?;

    if first == last && matches!(first, '\'' | '"' | '`') {
        // Quote characters are ASCII, so slicing off one byte at each end is safe.
        let inner = value_part.get(1..value_part.len() - 1).unwrap_or("");
        let unescaped = inner.replace(&format!("\\{first}"), &first.to_string());
        return Some(FilterValue::Text(unescaped));
    }

    match value_part.parse::<f64>() {
        Ok(number) => Some(FilterValue::Number(number)),
        Err(_) => Some(FilterValue::Text(value_part.to_owned())),
    }
}
