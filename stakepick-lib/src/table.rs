//! Table engine state: sort, pagination and selection over a fixed record set.

use log::debug;

use crate::page::{filler_rows, page_count, paginate};
use crate::sort::{compare_directed, stable_sort, SortDirection, SortKey};
use crate::source::ValidatorSource;
use crate::validator::{Validator, ValidatorId};

/// A validator plus the id it was assigned at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatorRow {
    pub id: ValidatorId,
    pub validator: Validator,
}

/// Sort/pagination/selection state over an immutable record set.
///
/// The stored rows never move; the visible slice is recomputed from them on
/// every query, so ingestion order stays available as the stability tiebreak.
#[derive(Debug, Clone)]
pub struct TableState {
    rows: Vec<ValidatorRow>,
    sort_key: SortKey,
    direction: SortDirection,
    page_index: usize,
    page_size: usize,
    selected: Option<ValidatorId>,
}

impl TableState {
    pub const DEFAULT_PAGE_SIZE: usize = 5;

    /// Snapshot a source into a fresh table with default state.
    pub fn from_source(source: &dyn ValidatorSource) -> Self {
        Self::new(source.validators())
    }

    pub fn new(validators: Vec<Validator>) -> Self {
        let rows = validators
            .into_iter()
            .enumerate()
            .map(|(index, validator)| ValidatorRow {
                id: ValidatorId::new(index),
                validator,
            })
            .collect();
        Self {
            rows,
            sort_key: SortKey::default(),
            direction: SortDirection::default(),
            page_index: 0,
            page_size: Self::DEFAULT_PAGE_SIZE,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // -------------------------------------------------------------------------
    // Sort
    // -------------------------------------------------------------------------

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Request ordering by `key`.
    ///
    /// The same key toggles direction; a different key starts ascending.
    /// The page index goes back to 0 so the window stays meaningful under
    /// the new order.
    pub fn request_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.direction = self.direction.toggled();
        } else {
            self.sort_key = key;
            self.direction = SortDirection::Ascending;
        }
        self.page_index = 0;
        debug!(
            "sort requested: {:?} {:?}",
            self.sort_key, self.direction
        );
    }

    /// The full record sequence under the current ordering.
    pub fn ordered(&self) -> Vec<ValidatorRow> {
        let key = self.sort_key;
        let direction = self.direction;
        stable_sort(&self.rows, |a, b| {
            compare_directed(&a.validator, &b.validator, key, direction)
        })
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.rows.len(), self.page_size)
    }

    /// The currently visible window of the ordered sequence.
    pub fn visible_page(&self) -> Vec<ValidatorRow> {
        let ordered = self.ordered();
        paginate(&ordered, self.page_index, self.page_size).to_vec()
    }

    /// Padding rows under the visible window so the table height is constant.
    pub fn filler_rows(&self) -> usize {
        filler_rows(self.rows.len(), self.page_index, self.page_size)
    }

    /// Replace the page size. The page index always goes back to 0 so the
    /// window cannot point past the end.
    pub fn set_page_size(&mut self, page_size: usize) {
        debug_assert!(page_size > 0);
        self.page_size = page_size.max(1);
        self.page_index = 0;
        debug!("page size set to {}", self.page_size);
    }

    pub fn next_page(&mut self) {
        let last = self.page_count().saturating_sub(1);
        if self.page_index < last {
            self.page_index += 1;
            debug!("page -> {}", self.page_index);
        }
    }

    pub fn previous_page(&mut self) {
        if self.page_index > 0 {
            self.page_index -= 1;
            debug!("page -> {}", self.page_index);
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    pub fn selected(&self) -> Option<ValidatorId> {
        self.selected
    }

    pub fn selected_validator(&self) -> Option<&Validator> {
        let id = self.selected?;
        self.rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| &row.validator)
    }

    /// Record `id` as the current selection and emit the activated record.
    ///
    /// Returns `None` when the id does not belong to this table's record set.
    pub fn select_row(&mut self, id: ValidatorId) -> Option<&Validator> {
        let index = self.rows.iter().position(|row| row.id == id)?;
        self.selected = Some(id);
        let validator = &self.rows[index].validator;
        debug!("selected {} ({})", id, validator.name);
        Some(validator)
    }

    pub fn is_selected(&self, id: ValidatorId) -> bool {
        self.selected == Some(id)
    }
}
