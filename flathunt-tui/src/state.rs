//! Application state and view state definitions.

use crate::api_client::ApiClientError;
use crate::config::TuiConfig;
use crate::debounce::Debouncer;
use crate::nav::View;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::BlueprintTheme;
use crate::widgets::TextInputState;
use crossterm::event::{KeyCode, KeyEvent};
use flathunt_core::{
    Apartment, ApartmentDraft, ApartmentFilter, ApartmentId, ApartmentQuery,
    CreateApartmentRequest, DraftField,
};
use std::time::{Duration, Instant};
use tui_textarea::TextArea;

/// Quiet window after the last filter edit before a fetch is committed.
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(400);

pub struct App {
    pub config: TuiConfig,
    pub theme: BlueprintTheme,
    pub active_view: View,

    pub listings: ListingsViewState,
    pub create_form: CreateFormState,

    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        Self {
            config,
            theme: BlueprintTheme::blueprint(),
            active_view: View::Listings,
            listings: ListingsViewState::new(),
            create_form: CreateFormState::new(),
            notifications: Vec::new(),
            modal: None,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    /// Handle a create-submission completion.
    ///
    /// On success the form is reset, the active view switches to the
    /// listings, and the returned ticket asks the caller to refresh them.
    /// On failure a blocking alert opens and the draft stays intact.
    pub fn apply_create(
        &mut self,
        result: Result<Apartment, ApiClientError>,
    ) -> Option<FetchTicket> {
        match result {
            Ok(apartment) => {
                self.create_form = CreateFormState::new();
                self.active_view = View::Listings;
                self.notify(
                    NotificationLevel::Success,
                    format!("Apartment '{}' created", apartment.unit_name),
                );
                Some(self.listings.commit_now())
            }
            Err(err) => {
                self.create_form.submitting = false;
                self.modal = Some(Modal {
                    title: "Create failed".to_string(),
                    message: err.to_string(),
                });
                None
            }
        }
    }
}

/// A blocking alert. While present it swallows all input until dismissed.
#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

/// An issued list fetch: the sequence number tags the completion so a
/// stale response can be recognized and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ApartmentQuery,
}

// ============================================================================
// LISTINGS VIEW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    UnitName,
    UnitNumber,
    Project,
}

impl FilterField {
    pub fn index(&self) -> usize {
        match self {
            FilterField::UnitName => 0,
            FilterField::UnitNumber => 1,
            FilterField::Project => 2,
        }
    }

    pub fn next(&self) -> FilterField {
        match self {
            FilterField::UnitName => FilterField::UnitNumber,
            FilterField::UnitNumber => FilterField::Project,
            FilterField::Project => FilterField::UnitName,
        }
    }

    pub fn previous(&self) -> FilterField {
        match self {
            FilterField::UnitName => FilterField::Project,
            FilterField::UnitNumber => FilterField::UnitName,
            FilterField::Project => FilterField::UnitNumber,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingsFocus {
    List,
    Filter(FilterField),
}

/// One editable buffer per filterable field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterInputs {
    pub unit_name: TextInputState,
    pub unit_number: TextInputState,
    pub project: TextInputState,
}

impl FilterInputs {
    pub fn get(&self, field: FilterField) -> &TextInputState {
        match field {
            FilterField::UnitName => &self.unit_name,
            FilterField::UnitNumber => &self.unit_number,
            FilterField::Project => &self.project,
        }
    }

    pub fn get_mut(&mut self, field: FilterField) -> &mut TextInputState {
        match field {
            FilterField::UnitName => &mut self.unit_name,
            FilterField::UnitNumber => &mut self.unit_number,
            FilterField::Project => &mut self.project,
        }
    }

    pub fn to_filter(&self) -> ApartmentFilter {
        ApartmentFilter {
            unit_name: self.unit_name.value().to_string(),
            unit_number: self.unit_number.value().to_string(),
            project: self.project.value().to_string(),
        }
    }

    pub fn set_filter(&mut self, filter: &ApartmentFilter) {
        self.unit_name.set_value(filter.unit_name.clone());
        self.unit_number.set_value(filter.unit_number.clone());
        self.project.set_value(filter.project.clone());
    }

    pub fn clear(&mut self) {
        self.unit_name.clear();
        self.unit_number.clear();
        self.project.clear();
    }
}

/// State of the single fetch-by-id driven by the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    pub loading: bool,
    /// `None` after a completed fetch is the not-found sentinel.
    pub record: Option<Apartment>,
}

pub struct ListingsViewState {
    pub apartments: Vec<Apartment>,
    /// List cursor for keyboard navigation.
    pub highlighted: Option<ApartmentId>,
    /// Overlay selection; `Some` means the detail overlay is open.
    pub selected: Option<ApartmentId>,
    pub detail: DetailState,
    pub filter_inputs: FilterInputs,
    pub focus: ListingsFocus,
    pub debounce: Debouncer,
    pub fetch_seq: u64,
}

impl ListingsViewState {
    pub fn new() -> Self {
        Self {
            apartments: Vec::new(),
            highlighted: None,
            selected: None,
            detail: DetailState::default(),
            filter_inputs: FilterInputs::default(),
            focus: ListingsFocus::List,
            debounce: Debouncer::new(FILTER_DEBOUNCE),
            fetch_seq: 0,
        }
    }

    pub fn filter(&self) -> ApartmentFilter {
        self.filter_inputs.to_filter()
    }

    /// Route a key to the focused filter input; any change to the value
    /// re-arms the debouncer.
    pub fn handle_filter_key(&mut self, field: FilterField, key: KeyEvent, now: Instant) {
        if self.filter_inputs.get_mut(field).handle_key(key) {
            self.debounce.arm(now);
        }
    }

    /// Reset all three fields in one atomic update and restart the
    /// debounce cycle, so the clear commits through the same path.
    pub fn clear_filters(&mut self, now: Instant) {
        self.filter_inputs.clear();
        self.debounce.arm(now);
    }

    /// Poll the debouncer; on expiry commit the current filter state as
    /// effective and hand back the fetch ticket.
    pub fn poll_filter_commit(&mut self, now: Instant) -> Option<FetchTicket> {
        if self.debounce.fire_if_due(now) {
            Some(self.commit())
        } else {
            None
        }
    }

    /// Commit immediately, outside the debounce path (startup, manual
    /// refresh, post-create navigation). Cancels any pending debounce so
    /// the same filter state cannot commit twice.
    pub fn commit_now(&mut self) -> FetchTicket {
        self.debounce.cancel();
        self.commit()
    }

    fn commit(&mut self) -> FetchTicket {
        self.fetch_seq += 1;
        FetchTicket {
            seq: self.fetch_seq,
            query: self.filter().to_query(),
        }
    }

    /// Handle a list-fetch completion. Stale sequence numbers are dropped;
    /// a failure keeps the previously displayed list and is only logged.
    /// The overlay selection is never touched.
    pub fn apply_listings(
        &mut self,
        seq: u64,
        result: Result<Vec<Apartment>, ApiClientError>,
    ) {
        if seq != self.fetch_seq {
            tracing::debug!(seq, current = self.fetch_seq, "dropping stale list fetch");
            return;
        }
        match result {
            Ok(apartments) => {
                self.apartments = apartments;
                if let Some(id) = self.highlighted {
                    if !self.apartments.iter().any(|a| a.id == id) {
                        self.highlighted = None;
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "apartment list fetch failed; keeping previous list");
            }
        }
    }

    pub fn select_next(&mut self) {
        if self.apartments.is_empty() {
            self.highlighted = None;
            return;
        }
        let index = self
            .highlighted
            .and_then(|id| self.apartments.iter().position(|a| a.id == id));
        let next = match index {
            Some(index) => (index + 1) % self.apartments.len(),
            None => 0,
        };
        self.highlighted = Some(self.apartments[next].id);
    }

    pub fn select_previous(&mut self) {
        if self.apartments.is_empty() {
            self.highlighted = None;
            return;
        }
        let index = self
            .highlighted
            .and_then(|id| self.apartments.iter().position(|a| a.id == id))
            .unwrap_or(0);
        let prev = if index == 0 {
            self.apartments.len() - 1
        } else {
            index - 1
        };
        self.highlighted = Some(self.apartments[prev].id);
    }

    /// Open the detail overlay for the highlighted apartment. Always
    /// starts a fresh fetch, even when re-selecting the same identifier.
    pub fn open_detail(&mut self) -> Option<ApartmentId> {
        let id = self.highlighted?;
        self.select(id);
        Some(id)
    }

    pub fn select(&mut self, id: ApartmentId) {
        self.selected = Some(id);
        self.detail = DetailState {
            loading: true,
            record: None,
        };
    }

    /// Close the overlay; the held record is discarded immediately.
    pub fn close_detail(&mut self) {
        self.selected = None;
        self.detail = DetailState::default();
    }

    /// Handle a detail-fetch completion. The stored result is the one
    /// whose tag matches the current selection; anything else resolved
    /// too late and is dropped, so the latest selection always wins.
    pub fn apply_detail(&mut self, id: ApartmentId, result: Result<Apartment, ApiClientError>) {
        if self.selected != Some(id) {
            tracing::debug!(%id, "dropping detail fetch for a stale selection");
            return;
        }
        self.detail.loading = false;
        self.detail.record = match result {
            Ok(apartment) => Some(apartment),
            Err(err) => {
                tracing::warn!(%id, error = %err, "detail fetch failed");
                None
            }
        };
    }
}

impl Default for ListingsViewState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// CREATE FORM VIEW
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    UnitName,
    UnitNumber,
    Project,
    Description,
    Price,
}

impl FormField {
    pub fn title(&self) -> &'static str {
        match self {
            FormField::UnitName => "Unit Name",
            FormField::UnitNumber => "Unit Number",
            FormField::Project => "Project",
            FormField::Description => "Description",
            FormField::Price => "Price",
        }
    }

    pub fn next(&self) -> FormField {
        match self {
            FormField::UnitName => FormField::UnitNumber,
            FormField::UnitNumber => FormField::Project,
            FormField::Project => FormField::Description,
            FormField::Description => FormField::Price,
            FormField::Price => FormField::UnitName,
        }
    }

    pub fn previous(&self) -> FormField {
        match self {
            FormField::UnitName => FormField::Price,
            FormField::UnitNumber => FormField::UnitName,
            FormField::Project => FormField::UnitNumber,
            FormField::Description => FormField::Project,
            FormField::Price => FormField::Description,
        }
    }
}

pub struct CreateFormState {
    /// The draft mirrors every input buffer; it is what gets validated
    /// and submitted.
    pub draft: ApartmentDraft,
    pub unit_name: TextInputState,
    pub unit_number: TextInputState,
    pub project: TextInputState,
    pub price: TextInputState,
    /// Multi-line editor for the description, mirrored into the draft on
    /// every input event.
    pub description: TextArea<'static>,
    pub focus: FormField,
    pub error: Option<String>,
    pub submitting: bool,
}

impl CreateFormState {
    pub fn new() -> Self {
        let mut description = TextArea::default();
        description.set_placeholder_text("Enter description here...");
        Self {
            draft: ApartmentDraft::new(),
            unit_name: TextInputState::new(),
            unit_number: TextInputState::new(),
            project: TextInputState::new(),
            price: TextInputState::new(),
            description,
            focus: FormField::UnitName,
            error: None,
            submitting: false,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Route a key to the focused field and mirror the new text into the
    /// draft. The price input accepts digits only, matching the numeric
    /// widget of the original form.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.focus {
            FormField::UnitName => {
                if self.unit_name.handle_key(key) {
                    self.draft
                        .set(DraftField::UnitName, self.unit_name.value().to_string());
                }
            }
            FormField::UnitNumber => {
                if self.unit_number.handle_key(key) {
                    self.draft
                        .set(DraftField::UnitNumber, self.unit_number.value().to_string());
                }
            }
            FormField::Project => {
                if self.project.handle_key(key) {
                    self.draft
                        .set(DraftField::Project, self.project.value().to_string());
                }
            }
            FormField::Price => {
                if let KeyCode::Char(ch) = key.code {
                    if !ch.is_ascii_digit() {
                        return;
                    }
                }
                if self.price.handle_key(key) {
                    self.draft
                        .set(DraftField::Price, self.price.value().to_string());
                }
            }
            FormField::Description => {
                if self.description.input(key) {
                    self.draft
                        .set_description(self.description.lines().join("\n"));
                }
            }
        }
    }

    /// Validate the draft and mark the form as submitting. On validation
    /// failure the inline error is set and the collaborator is never
    /// invoked.
    pub fn submit(&mut self) -> Option<CreateApartmentRequest> {
        if self.submitting {
            return None;
        }
        match self.draft.validate() {
            Ok(request) => {
                self.error = None;
                self.submitting = true;
                Some(request)
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

impl Default for CreateFormState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_apartment() -> impl Strategy<Value = Apartment> {
        (1i64..1000, "[a-zA-Z0-9 ]{1,20}").prop_map(|(id, unit_name)| Apartment {
            id: ApartmentId::new(id),
            unit_name,
            unit_number: format!("U-{id}"),
            project: "Palm Hills".to_string(),
            description: None,
            price: id * 1000,
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Any burst of edits separated by gaps shorter than the debounce
        /// window commits exactly once, with the final filter values.
        #[test]
        fn prop_edit_burst_commits_exactly_once(
            gaps in prop::collection::vec(0u64..400, 1..20)
        ) {
            let mut listings = ListingsViewState::new();
            let start = Instant::now();
            let mut now = start;
            let mut commits = 0;

            for (index, gap) in gaps.iter().enumerate() {
                now += Duration::from_millis(*gap);
                let ch = char::from(b'a' + (index % 26) as u8);
                listings.handle_filter_key(
                    FilterField::UnitName,
                    crossterm::event::KeyEvent::new(
                        crossterm::event::KeyCode::Char(ch),
                        crossterm::event::KeyModifiers::NONE,
                    ),
                    now,
                );
                if listings.poll_filter_commit(now).is_some() {
                    commits += 1;
                }
            }

            // Quiet window after the last edit.
            for extra in [FILTER_DEBOUNCE, FILTER_DEBOUNCE * 2] {
                if let Some(ticket) = listings.poll_filter_commit(now + extra) {
                    commits += 1;
                    // The commit carries the full final value.
                    prop_assert_eq!(
                        ticket.query.unit_name.as_deref().map(str::len),
                        Some(gaps.len())
                    );
                }
            }

            prop_assert_eq!(commits, 1);
        }

        /// Selection navigation never panics and always lands on a listed
        /// apartment (or nothing when the list is empty).
        #[test]
        fn prop_selection_navigation_stays_valid(
            apartments in prop::collection::vec(arb_apartment(), 0..10),
            ops in prop::collection::vec(any::<bool>(), 0..20)
        ) {
            let mut listings = ListingsViewState::new();
            listings.apartments = apartments;

            for op in ops {
                if op {
                    listings.select_next();
                } else {
                    listings.select_previous();
                }
            }

            if listings.apartments.is_empty() {
                prop_assert!(listings.highlighted.is_none());
            } else if let Some(id) = listings.highlighted {
                prop_assert!(listings.apartments.iter().any(|a| a.id == id));
            }
        }

        /// Out-of-order detail completions never overwrite the current
        /// selection's slot: after any interleaving, the stored record
        /// can only belong to the most recent selection.
        #[test]
        fn prop_detail_record_matches_latest_selection(
            selections in prop::collection::vec(1i64..6, 1..6),
            resolve_order in prop::collection::vec(any::<prop::sample::Index>(), 0..6)
        ) {
            let mut listings = ListingsViewState::new();
            for id in &selections {
                listings.select(ApartmentId::new(*id));
            }
            let latest = *selections.last().unwrap();

            for index in resolve_order {
                let id = *index.get(&selections);
                listings.apply_detail(
                    ApartmentId::new(id),
                    Ok(Apartment {
                        id: ApartmentId::new(id),
                        unit_name: format!("unit-{id}"),
                        unit_number: "U".to_string(),
                        project: "P".to_string(),
                        description: None,
                        price: 1,
                    }),
                );
            }

            if let Some(record) = &listings.detail.record {
                prop_assert_eq!(record.id, ApartmentId::new(latest));
            }
        }
    }
}
