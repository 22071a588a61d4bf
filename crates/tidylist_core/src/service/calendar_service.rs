//! Calendar filter view.
//!
//! # Responsibility
//! - Track the selected calendar day.
//! - Project the lists dated on that day as owned copies.
//!
//! # Invariants
//! - The projection is recomputed when the selection or the store version
//!   changes, and reused otherwise.
//! - While unselected the selection is `""`, which matches undated lists.

use crate::model::date::ListDate;
use crate::model::list::TaskList;
use crate::model::InputError;
use crate::store::task_store::TaskStore;
use chrono::NaiveDate;

/// Selected calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateSelection {
    #[default]
    Unselected,
    Selected(ListDate),
}

impl DateSelection {
    /// Selection as compared against list dates.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unselected => "",
            Self::Selected(date) => date.as_str(),
        }
    }
}

#[derive(Debug)]
struct Projection {
    selection: DateSelection,
    version: u64,
    lists: Vec<TaskList>,
}

/// Calendar screen state.
#[derive(Debug, Default)]
pub struct CalendarView {
    selection: DateSelection,
    projection: Option<Projection>,
    #[cfg(test)]
    evaluations: u64,
}

impl CalendarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    /// Replaces the selection with the pressed calendar cell.
    ///
    /// # Errors
    /// - `InputError::InvalidDate` when `iso_date` is not `YYYY-MM-DD`; the
    ///   previous selection is kept.
    pub fn select(&mut self, iso_date: &str) -> Result<(), InputError> {
        self.selection = DateSelection::Selected(ListDate::parse(iso_date)?);
        Ok(())
    }

    /// Replaces the selection with a calendar day.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.selection = DateSelection::Selected(ListDate::from_naive(day));
    }

    /// Lists whose date equals the selection, in store order.
    pub fn lists(&mut self, store: &TaskStore) -> &[TaskList] {
        let stale = match &self.projection {
            Some(projection) => {
                projection.selection != self.selection || projection.version != store.version()
            }
            None => true,
        };
        if stale {
            #[cfg(test)]
            {
                self.evaluations += 1;
            }
            self.projection = Some(Projection {
                selection: self.selection.clone(),
                version: store.version(),
                lists: store.lists_by_date(self.selection.as_str()),
            });
        }
        self.projection
            .as_ref()
            .map(|projection| projection.lists.as_slice())
            .unwrap_or(&[])
    }

    /// Number of times the projection has been recomputed.
    #[cfg(test)]
    fn evaluations(&self) -> u64 {
        self.evaluations
    }
}

#[cfg(test)]
mod tests {
    use super::{CalendarView, DateSelection};
    use crate::store::task_store::TaskStore;

    #[test]
    fn projection_is_reused_until_store_changes() {
        let mut store = TaskStore::new();
        let list = store.create_list("Trip").unwrap();
        store.set_list_date(list, "2024-06-10").unwrap();

        let mut view = CalendarView::new();
        view.select("2024-06-10").unwrap();
        assert_eq!(view.lists(&store).len(), 1);
        assert_eq!(view.lists(&store).len(), 1);
        assert_eq!(view.evaluations(), 1);

        store.delete_list(list);
        assert!(view.lists(&store).is_empty());
        assert_eq!(view.evaluations(), 2);
    }

    #[test]
    fn invalid_selection_keeps_previous_one() {
        let mut view = CalendarView::new();
        view.select("2024-06-10").unwrap();
        assert!(view.select("10/06/2024").is_err());
        assert_eq!(view.selection().as_str(), "2024-06-10");
    }

    #[test]
    fn starts_unselected() {
        let view = CalendarView::new();
        assert_eq!(view.selection(), &DateSelection::Unselected);
        assert_eq!(view.selection().as_str(), "");
    }
}
