//! Typed filter expressions in the JSON dialect of the data API.
//!
//! A [`FilterExpr`] is always an `and` group of [`FieldPredicate`]s:
//!
//! ```json
//! {"op": "and", "content": [
//!     {"op": "in", "content": {"field": "cases.case_id", "value": ["c1"]}}
//! ]}
//! ```

use serde::{Deserialize, Serialize};

/// Backend-schema field identifiers that the portal knows how to filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterField {
    #[serde(rename = "cases.case_id")]
    CaseId,
    #[serde(rename = "cases.project.project_id")]
    ProjectId,
    #[serde(rename = "cases.primary_site")]
    PrimarySite,
    #[serde(rename = "cases.disease_type")]
    DiseaseType,
    #[serde(rename = "cases.demographic.gender")]
    Gender,
    #[serde(rename = "files.experimental_strategy")]
    ExperimentalStrategy,
    #[serde(rename = "files.data_category")]
    DataCategory,
    #[serde(rename = "annotations.annotation_id")]
    AnnotationId,
}

impl FilterField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseId => "cases.case_id",
            Self::ProjectId => "cases.project.project_id",
            Self::PrimarySite => "cases.primary_site",
            Self::DiseaseType => "cases.disease_type",
            Self::Gender => "cases.demographic.gender",
            Self::ExperimentalStrategy => "files.experimental_strategy",
            Self::DataCategory => "files.data_category",
            Self::AnnotationId => "annotations.annotation_id",
        }
    }
}

impl std::fmt::Display for FilterField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comparison kinds for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ValueOp {
    #[serde(rename = "in")]
    In,
    #[serde(rename = "exclude")]
    Exclude,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<=")]
    Lte,
}

impl ValueOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Exclude => "exclude",
            Self::Gte => ">=",
            Self::Lte => "<=",
        }
    }
}

/// Group combinator. The portal only ever builds conjunctions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GroupOp {
    #[default]
    #[serde(rename = "and")]
    And,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Str(String),
}

impl FilterValue {
    pub fn display(&self) -> String {
        match self {
            Self::Int(i) => i.to_string(),
            Self::Str(s) => s.clone(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateContent {
    pub field: FilterField,
    pub value: Vec<FilterValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldPredicate {
    pub op: ValueOp,
    pub content: PredicateContent,
}

impl FieldPredicate {
    pub fn field(&self) -> FilterField {
        self.content.field
    }

    pub fn values(&self) -> &[FilterValue] {
        &self.content.value
    }

    /// `"cases.primary_site in Lung, Kidney"`
    pub fn describe(&self) -> String {
        let values: Vec<String> = self.values().iter().map(FilterValue::display).collect();
        format!("{} {} {}", self.field(), self.op.as_str(), values.join(", "))
    }

    fn same_target(&self, other: &FieldPredicate) -> bool {
        self.op == other.op && self.content.field == other.content.field
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExpr {
    pub op: GroupOp,
    pub content: Vec<FieldPredicate>,
}

impl FilterExpr {
    /// Wraps predicates in an `and` group; no predicates means no filter.
    pub fn from_predicates(content: Vec<FieldPredicate>) -> Option<Self> {
        if content.is_empty() {
            return None;
        }
        Some(Self { op: GroupOp::And, content })
    }

    pub fn predicates(&self) -> &[FieldPredicate] {
        &self.content
    }

    /// Values of the first `in` predicate on `field`.
    pub fn values_for(&self, field: FilterField) -> Option<&[FilterValue]> {
        self.content
            .iter()
            .find(|p| p.op == ValueOp::In && p.content.field == field)
            .map(|p| p.values())
    }
}

/// Value of a predicate before normalization.
///
/// A single string may carry several values separated by `,`; a literal
/// comma inside a value is written as `||`.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    One(String),
    Many(Vec<FilterValue>),
}

impl PredicateValue {
    fn normalize(self) -> Vec<FilterValue> {
        match self {
            Self::One(raw) => raw
                .split(',')
                .map(|v| FilterValue::Str(v.replace("||", ",")))
                .collect(),
            Self::Many(values) => values,
        }
    }
}

impl From<&str> for PredicateValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for PredicateValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<&String> for PredicateValue {
    fn from(value: &String) -> Self {
        Self::One(value.clone())
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for PredicateValue {
    fn from(values: Vec<T>) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

/// A `{field, value}` pair as handed to [`make_filter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub field: FilterField,
    pub value: PredicateValue,
}

impl Predicate {
    pub fn new(field: FilterField, value: impl Into<PredicateValue>) -> Self {
        Self { field, value: value.into() }
    }
}

/// Builds an `and` of `in` predicates. Returns `None` for an empty input.
pub fn make_filter(predicates: impl IntoIterator<Item = Predicate>) -> Option<FilterExpr> {
    let content = predicates
        .into_iter()
        .map(|p| FieldPredicate {
            op: ValueOp::In,
            content: PredicateContent { field: p.field, value: p.value.normalize() },
        })
        .collect();
    FilterExpr::from_predicates(content)
}

/// How a new filter set combines with the one already on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMode {
    /// Predicates on a field present in the new filters drop the old ones.
    Replace,
    /// Values on the same field and op are unioned.
    Add,
    /// Values on the same field and op are flipped in or out.
    Toggle,
}

pub fn merge_filters(
    new: Option<&FilterExpr>,
    existing: Option<&FilterExpr>,
    mode: MergeMode,
) -> Option<FilterExpr> {
    let (new, existing) = match (new, existing) {
        (None, None) => return None,
        (Some(n), None) if mode != MergeMode::Toggle => return Some(n.clone()),
        (None, Some(e)) => return Some(e.clone()),
        (Some(n), e) => (n, e.map(|e| e.content.clone()).unwrap_or_default()),
    };

    let merged = match mode {
        MergeMode::Replace => {
            let mut kept: Vec<FieldPredicate> = existing
                .into_iter()
                .filter(|old| !new.content.iter().any(|p| p.content.field == old.content.field))
                .collect();
            kept.extend(new.content.iter().cloned());
            kept
        }
        MergeMode::Add => {
            let mut merged = existing;
            for predicate in &new.content {
                match merged.iter_mut().find(|old| old.same_target(predicate)) {
                    Some(old) => {
                        for value in predicate.values() {
                            if !old.content.value.contains(value) {
                                old.content.value.push(value.clone());
                            }
                        }
                    }
                    None => merged.push(predicate.clone()),
                }
            }
            merged
        }
        MergeMode::Toggle => {
            let mut merged = existing;
            for predicate in &new.content {
                match merged.iter_mut().find(|old| old.same_target(predicate)) {
                    Some(old) => {
                        for value in predicate.values() {
                            if let Some(pos) = old.content.value.iter().position(|v| v == value) {
                                old.content.value.remove(pos);
                            } else {
                                old.content.value.push(value.clone());
                            }
                        }
                    }
                    None => merged.push(predicate.clone()),
                }
            }
            merged.retain(|p| !p.content.value.is_empty());
            merged
        }
    };
    FilterExpr::from_predicates(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn in_pred(field: FilterField, values: &[&str]) -> FieldPredicate {
        FieldPredicate {
            op: ValueOp::In,
            content: PredicateContent {
                field,
                value: values.iter().map(|v| FilterValue::from(*v)).collect(),
            },
        }
    }

    #[test]
    fn predicates_describe_themselves() {
        let pred = in_pred(FilterField::PrimarySite, &["Lung", "Kidney"]);
        assert_eq!(pred.describe(), "cases.primary_site in Lung, Kidney");
    }

    #[test]
    fn make_filter_wraps_predicates_in_and() {
        let filter = make_filter([
            Predicate::new(FilterField::CaseId, "c1"),
            Predicate::new(FilterField::ExperimentalStrategy, vec!["WXS"]),
        ])
        .unwrap();
        assert_eq!(filter.op, GroupOp::And);
        assert_eq!(
            filter.content,
            vec![in_pred(FilterField::CaseId, &["c1"]), in_pred(FilterField::ExperimentalStrategy, &["WXS"])]
        );
    }

    #[test]
    fn make_filter_splits_comma_strings_and_unescapes() {
        let filter = make_filter([Predicate::new(FilterField::PrimarySite, "Lung,Head||Neck")]).unwrap();
        assert_eq!(filter.content, vec![in_pred(FilterField::PrimarySite, &["Lung", "Head,Neck"])]);
    }

    #[test]
    fn make_filter_of_nothing_is_none() {
        assert_eq!(make_filter(Vec::new()), None);
    }

    #[test]
    fn serializes_to_api_dialect() {
        let filter = make_filter([Predicate::new(FilterField::AnnotationId, vec!["a", "b"])]).unwrap();
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "op": "and",
                "content": [{"op": "in", "content": {"field": "annotations.annotation_id", "value": ["a", "b"]}}]
            })
        );
    }

    #[test]
    fn replace_drops_overlapping_fields_and_keeps_the_rest() {
        let existing = FilterExpr::from_predicates(vec![
            in_pred(FilterField::PrimarySite, &["Lung"]),
            in_pred(FilterField::CaseId, &["old"]),
        ]);
        let new = FilterExpr::from_predicates(vec![in_pred(FilterField::CaseId, &["new"])]);
        let merged = merge_filters(new.as_ref(), existing.as_ref(), MergeMode::Replace).unwrap();
        assert_eq!(
            merged.content,
            vec![in_pred(FilterField::PrimarySite, &["Lung"]), in_pred(FilterField::CaseId, &["new"])]
        );
    }

    #[test]
    fn add_unions_values() {
        let existing = FilterExpr::from_predicates(vec![in_pred(FilterField::PrimarySite, &["Lung"])]);
        let new = FilterExpr::from_predicates(vec![in_pred(FilterField::PrimarySite, &["Lung", "Brain"])]);
        let merged = merge_filters(new.as_ref(), existing.as_ref(), MergeMode::Add).unwrap();
        assert_eq!(merged.values_for(FilterField::PrimarySite).unwrap(), &[FilterValue::from("Lung"), FilterValue::from("Brain")]);
    }

    #[test]
    fn toggle_removes_present_values_and_drops_empty_predicates() {
        let existing = FilterExpr::from_predicates(vec![in_pred(FilterField::PrimarySite, &["Lung"])]);
        let new = FilterExpr::from_predicates(vec![in_pred(FilterField::PrimarySite, &["Lung"])]);
        assert_eq!(merge_filters(new.as_ref(), existing.as_ref(), MergeMode::Toggle), None);
    }

    #[test]
    fn missing_side_returns_the_other() {
        let only = FilterExpr::from_predicates(vec![in_pred(FilterField::CaseId, &["c"])]);
        assert_eq!(merge_filters(only.as_ref(), None, MergeMode::Replace), only);
        assert_eq!(merge_filters(None, only.as_ref(), MergeMode::Add), only);
    }
}
