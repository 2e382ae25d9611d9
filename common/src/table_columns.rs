//! User column arrangement for a table: which columns show, in what order.

use serde::{Deserialize, Serialize};

use crate::explore_table::{ColumnDef, ColumnKind, default_column_ids, group_sub_headings};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableColumnsState {
    pub ids: Vec<String>,
}

fn find<'a>(columns: &'a [ColumnDef], id: &str) -> Option<&'a ColumnDef> {
    columns.iter().find(|c| c.id == id)
}

impl TableColumnsState {
    pub fn defaults(columns: &[ColumnDef]) -> Self {
        Self { ids: default_column_ids(columns) }
    }

    /// Drops ids that no longer name a column and regroups sub-heading
    /// columns; an empty result falls back to defaults.
    pub fn sanitized(mut self, columns: &[ColumnDef]) -> Self {
        self.ids.retain(|id| columns.iter().any(|c| &c.id == id));
        let mut seen = std::collections::BTreeSet::new();
        self.ids.retain(|id| seen.insert(id.clone()));
        self.ids = group_sub_headings(columns, &self.ids);
        if self.ids.is_empty() {
            return Self::defaults(columns);
        }
        self
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    /// Shows a hidden column at its canonical position, or hides a shown one.
    /// The spanning column and its sub-heading columns show and hide together.
    pub fn toggle(&mut self, id: &str, columns: &[ColumnDef]) {
        let Some(column) = find(columns, id) else { return };
        let span = columns.iter().find(|c| c.kind == ColumnKind::DataCategories);

        if self.is_visible(id) {
            self.ids.retain(|i| i != id);
            if column.kind == ColumnKind::DataCategories {
                self.ids.retain(|i| find(columns, i).is_none_or(|c| !c.sub_heading));
            }
        } else {
            self.insert_canonical(id, columns);
            if column.kind == ColumnKind::DataCategories {
                for sub in columns.iter().filter(|c| c.sub_heading) {
                    self.insert_canonical(&sub.id, columns);
                }
            } else if let Some(span) = span.filter(|_| column.sub_heading) {
                self.insert_canonical(&span.id, columns);
            }
        }
        self.ids = group_sub_headings(columns, &self.ids);
    }

    // inserts before the first visible column that comes later canonically
    fn insert_canonical(&mut self, id: &str, columns: &[ColumnDef]) {
        if self.is_visible(id) {
            return;
        }
        let Some(canonical) = columns.iter().position(|c| c.id == id) else { return };
        let insert_at = self
            .ids
            .iter()
            .position(|visible| {
                columns
                    .iter()
                    .position(|c| &c.id == visible)
                    .map(|p| p > canonical)
                    .unwrap_or(false)
            })
            .unwrap_or(self.ids.len());
        self.ids.insert(insert_at, id.to_string());
    }

    /// Moves a visible column by `delta` places, stopping at either end.
    /// Sub-heading columns move only among themselves; the spanning column
    /// carries its sub-heading columns along.
    pub fn move_by(&mut self, id: &str, delta: isize, columns: &[ColumnDef]) {
        let ids = group_sub_headings(columns, &self.ids);
        let is_sub = |i: &String| find(columns, i).is_some_and(|c| c.sub_heading);

        if find(columns, id).is_some_and(|c| c.sub_heading) {
            let slots: Vec<usize> = ids.iter().enumerate().filter(|(_, i)| is_sub(i)).map(|(n, _)| n).collect();
            let mut group: Vec<String> = slots.iter().map(|n| ids[*n].clone()).collect();
            let Some(pos) = group.iter().position(|i| i == id) else { return };
            let target = (pos as isize + delta).clamp(0, group.len() as isize - 1) as usize;
            let item = group.remove(pos);
            group.insert(target, item);
            let mut ids = ids;
            for (slot, sub) in slots.into_iter().zip(group) {
                ids[slot] = sub;
            }
            self.ids = ids;
            return;
        }

        let mut units: Vec<Vec<String>> = Vec::new();
        for i in ids {
            match units.last_mut() {
                Some(unit) if is_sub(&i) => unit.push(i),
                _ => units.push(vec![i]),
            }
        }
        let Some(pos) = units.iter().position(|u| u[0] == id) else { return };
        let target = (pos as isize + delta).clamp(0, units.len() as isize - 1) as usize;
        let unit = units.remove(pos);
        units.insert(target, unit);
        self.ids = units.into_iter().flatten().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore_table::explore_case_columns;
    use pretty_assertions::assert_eq;

    fn state(ids: &[&str]) -> TableColumnsState {
        TableColumnsState { ids: ids.iter().map(|s| s.to_string()).collect() }
    }

    #[test]
    fn toggle_hides_and_restores_at_canonical_position() {
        let columns = explore_case_columns();
        let mut s = state(&["selected", "submitter_id", "primary_site"]);
        s.toggle("submitter_id", &columns);
        assert_eq!(s, state(&["selected", "primary_site"]));
        s.toggle("case_id", &columns);
        assert_eq!(s, state(&["selected", "case_id", "primary_site"]));
        s.toggle("not_a_column", &columns);
        assert_eq!(s.ids.len(), 3);
    }

    #[test]
    fn move_by_is_clamped() {
        let columns = explore_case_columns();
        let mut s = state(&["a", "b", "c"]);
        s.move_by("c", -1, &columns);
        assert_eq!(s, state(&["a", "c", "b"]));
        s.move_by("a", -5, &columns);
        assert_eq!(s, state(&["a", "c", "b"]));
        s.move_by("a", 10, &columns);
        assert_eq!(s, state(&["c", "b", "a"]));
    }

    #[test]
    fn subheadings_move_only_within_their_group() {
        let columns = explore_case_columns();
        let mut s = state(&["submitter_id", "data_categories", "data_category.seq", "data_category.clinical", "num_mutations"]);
        s.move_by("data_category.seq", -1, &columns);
        assert_eq!(s, state(&["submitter_id", "data_categories", "data_category.seq", "data_category.clinical", "num_mutations"]));
        s.move_by("data_category.seq", 5, &columns);
        assert_eq!(s, state(&["submitter_id", "data_categories", "data_category.clinical", "data_category.seq", "num_mutations"]));
    }

    #[test]
    fn spanning_column_carries_its_group() {
        let columns = explore_case_columns();
        let mut s = state(&["submitter_id", "data_categories", "data_category.seq", "num_mutations"]);
        s.move_by("data_categories", -1, &columns);
        assert_eq!(s, state(&["data_categories", "data_category.seq", "submitter_id", "num_mutations"]));
        s.move_by("num_mutations", -1, &columns);
        assert_eq!(s, state(&["data_categories", "data_category.seq", "num_mutations", "submitter_id"]));
    }

    #[test]
    fn group_shows_and_hides_together() {
        let columns = explore_case_columns();
        let defaults = TableColumnsState::defaults(&columns);
        let mut s = defaults.clone();
        s.toggle("data_categories", &columns);
        assert!(s.ids.iter().all(|id| !id.starts_with("data_categor")));
        s.toggle("data_categories", &columns);
        assert_eq!(s, defaults);

        let mut s = state(&["submitter_id", "data_categories", "data_category.seq"]);
        s.toggle("data_category.seq", &columns);
        assert_eq!(s, state(&["submitter_id"]));
        s.toggle("data_category.clinical", &columns);
        assert_eq!(s, state(&["submitter_id", "data_categories", "data_category.clinical"]));
    }

    #[test]
    fn sanitized_drops_stale_ids() {
        let columns = explore_case_columns();
        let s = state(&["gone", "primary_site", "primary_site"]).sanitized(&columns);
        assert_eq!(s, state(&["primary_site"]));
        assert_eq!(state(&["gone"]).sanitized(&columns), TableColumnsState::defaults(&columns));
    }
}
