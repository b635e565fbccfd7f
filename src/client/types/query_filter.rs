//! Structured query filters (`QueryFilterJSON`) and their string form.
//!
//! The backend accepts filters as a string such as
//! `(tags.name IN ["a", "b"] AND rating > "3") OR lastMade IS NULL` and reports
//! them back in a structured form. [`QueryFilterJSON::to_filter_string`] renders
//! the structured form into the string the backend parses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogicalOperator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "AND",
            LogicalOperator::Or => "OR",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationalKeyword {
    #[serde(rename = "IS")]
    Is,
    #[serde(rename = "IS NOT")]
    IsNot,
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "NOT IN")]
    NotIn,
    #[serde(rename = "CONTAINS ALL")]
    ContainsAll,
    #[serde(rename = "LIKE")]
    Like,
    #[serde(rename = "NOT LIKE")]
    NotLike,
}

impl RelationalKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationalKeyword::Is => "IS",
            RelationalKeyword::IsNot => "IS NOT",
            RelationalKeyword::In => "IN",
            RelationalKeyword::NotIn => "NOT IN",
            RelationalKeyword::ContainsAll => "CONTAINS ALL",
            RelationalKeyword::Like => "LIKE",
            RelationalKeyword::NotLike => "NOT LIKE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationalOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "<>")]
    NotEq,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
}

impl RelationalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationalOperator::Eq => "=",
            RelationalOperator::NotEq => "<>",
            RelationalOperator::Gt => ">",
            RelationalOperator::Lt => "<",
            RelationalOperator::Gte => ">=",
            RelationalOperator::Lte => "<=",
        }
    }
}

/// Either kind of relation; serialized as its bare string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relationship {
    Keyword(RelationalKeyword),
    Operator(RelationalOperator),
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Keyword(kw) => kw.as_str(),
            Relationship::Operator(op) => op.as_str(),
        }
    }

    fn is_null_check(&self) -> bool {
        matches!(
            self,
            Relationship::Keyword(RelationalKeyword::Is) | Relationship::Keyword(RelationalKeyword::IsNot)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryFilterJSONPart {
    #[serde(default)]
    pub left_parenthesis: Option<String>,
    #[serde(default)]
    pub right_parenthesis: Option<String>,
    #[serde(default)]
    pub logical_operator: Option<LogicalOperator>,
    #[serde(default)]
    pub attribute_name: Option<String>,
    #[serde(default)]
    pub relational_operator: Option<Relationship>,
    #[serde(default)]
    pub value: Option<FilterValue>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilterJSON {
    #[serde(default)]
    pub parts: Vec<QueryFilterJSONPart>,
}

impl QueryFilterJSON {
    /// Renders the parts as a filter string.
    ///
    /// Parts without an attribute or relation are skipped. The logical operator
    /// of the first rendered part is dropped.
    pub fn to_filter_string(&self) -> String {
        let mut rendered: Vec<String> = Vec::new();

        for part in &self.parts {
            let (Some(attribute), Some(relation)) = (&part.attribute_name, &part.relational_operator) else {
                continue;
            };

            let mut tokens = Vec::new();
            if !rendered.is_empty() {
                if let Some(op) = part.logical_operator {
                    tokens.push(op.as_str().to_string());
                }
            }

            let value = if relation.is_null_check() {
                "NULL".to_string()
            } else {
                match &part.value {
                    Some(FilterValue::Single(v)) => quote(v),
                    Some(FilterValue::List(values)) => {
                        format!("[{}]", values.iter().map(|v| quote(v)).collect::<Vec<_>>().join(", "))
                    }
                    None => "NULL".to_string(),
                }
            };

            tokens.push(format!(
                "{}{} {} {}{}",
                part.left_parenthesis.as_deref().unwrap_or(""),
                attribute,
                relation.as_str(),
                value,
                part.right_parenthesis.as_deref().unwrap_or(""),
            ));
            rendered.push(tokens.join(" "));
        }

        rendered.join(" ")
    }
}

impl fmt::Display for QueryFilterJSON {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_filter_string())
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn part(attribute: &str, relation: Relationship, value: Option<FilterValue>) -> QueryFilterJSONPart {
        QueryFilterJSONPart {
            attribute_name: Some(attribute.to_string()),
            relational_operator: Some(relation),
            value,
            ..Default::default()
        }
    }

    #[test]
    fn renders_grouped_filter() {
        let mut first = part(
            "tags.name",
            Relationship::Keyword(RelationalKeyword::In),
            Some(FilterValue::List(vec!["a".into(), "b".into()])),
        );
        first.left_parenthesis = Some("(".into());

        let mut second = part(
            "rating",
            Relationship::Operator(RelationalOperator::Gt),
            Some(FilterValue::Single("3".into())),
        );
        second.logical_operator = Some(LogicalOperator::And);
        second.right_parenthesis = Some(")".into());

        let mut third = part("lastMade", Relationship::Keyword(RelationalKeyword::Is), None);
        third.logical_operator = Some(LogicalOperator::Or);

        let filter = QueryFilterJSON {
            parts: vec![first, second, third],
        };

        assert_eq!(
            filter.to_filter_string(),
            r#"(tags.name IN ["a", "b"] AND rating > "3") OR lastMade IS NULL"#
        );
    }

    #[test]
    fn leading_logical_operator_is_dropped() {
        let mut only = part(
            "name",
            Relationship::Keyword(RelationalKeyword::Like),
            Some(FilterValue::Single("soup".into())),
        );
        only.logical_operator = Some(LogicalOperator::And);

        let filter = QueryFilterJSON { parts: vec![only] };
        assert_eq!(filter.to_string(), r#"name LIKE "soup""#);
    }

    #[test]
    fn deserializes_backend_shape() {
        let filter: QueryFilterJSON = serde_json::from_value(json!({
            "parts": [{
                "leftParenthesis": null,
                "rightParenthesis": null,
                "logicalOperator": null,
                "attributeName": "recipe_category.id",
                "relationalOperator": "NOT IN",
                "value": ["1", "2"],
                "fieldLabel": "Categories"
            }]
        }))
        .unwrap();

        let part = &filter.parts[0];
        assert_eq!(
            part.relational_operator,
            Some(Relationship::Keyword(RelationalKeyword::NotIn))
        );
        assert_eq!(part.value, Some(FilterValue::List(vec!["1".into(), "2".into()])));
        assert_eq!(part.other.get("fieldLabel"), Some(&json!("Categories")));
        assert_eq!(filter.to_filter_string(), r#"recipe_category.id NOT IN ["1", "2"]"#);
    }

    #[test]
    fn empty_filter_renders_empty_string() {
        assert_eq!(QueryFilterJSON::default().to_filter_string(), "");
    }
}
