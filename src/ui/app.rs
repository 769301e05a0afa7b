use crate::filter::Listing;
use crate::model::{Hotel, Occupant, Parking, SlotPlace, Spot, StatusRef, TypeRef};
use crate::resolve::{index_by_id, parent_name};
use crate::slots::{find_guest, SlotView};
use crate::source::DataSource;
use crate::status::display_value;
use crate::store::{ReloadOutcome, Store};
use chrono::NaiveDate;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Overview,
    Hotels,
    Parkings,
    Spots,
    Statuses,
    Types,
    Board,
}

impl View {
    pub const TABS: [View; 6] = [
        View::Overview,
        View::Hotels,
        View::Parkings,
        View::Spots,
        View::Statuses,
        View::Types,
    ];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Hotels => "Hotels",
            View::Parkings => "Parkings",
            View::Spots => "Spots",
            View::Statuses => "Statuses",
            View::Types => "Types",
            View::Board => "Slot board",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,
    /// Typing the free-text search of the current view.
    Search,
    /// Typing a room number to assign the selected slot.
    RoomNumber,
}

pub struct App {
    pub store: Store,
    pub source: Option<Box<dyn DataSource>>,
    pub today: NaiveDate,
    pub view: View,
    pub input_mode: InputMode,
    pub input: String,
    pub selected_hotel: usize,
    pub selected_parking: usize,
    pub selected_spot: usize,
    pub selected_slot: usize,
    pub selected_status: usize,
    pub selected_type: usize,
    pub board_parking: Option<String>,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(store: Store, today: NaiveDate) -> Self {
        Self {
            store,
            source: None,
            today,
            view: View::Overview,
            input_mode: InputMode::Normal,
            input: String::new(),
            selected_hotel: 0,
            selected_parking: 0,
            selected_spot: 0,
            selected_slot: 0,
            selected_status: 0,
            selected_type: 0,
            board_parking: None,
            message: None,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn with_source(mut self, source: Box<dyn DataSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Overview => super::dashboard::draw_overview(frame, self),
            View::Hotels => super::dashboard::draw_hotels(frame, self),
            View::Parkings => super::dashboard::draw_parkings(frame, self),
            View::Spots => super::dashboard::draw_spots(frame, self),
            View::Statuses => super::dashboard::draw_statuses(frame, self),
            View::Types => super::dashboard::draw_types(frame, self),
            View::Board => super::dashboard::draw_board(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.input_mode {
            InputMode::Normal => self.handle_normal_keys(code),
            InputMode::Search | InputMode::RoomNumber => self.handle_input_keys(code),
        }
    }

    fn handle_normal_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => self.go_back(),
            KeyCode::Tab => self.next_tab(),
            KeyCode::BackTab => self.previous_tab(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(true),
            KeyCode::Enter => self.enter(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Char('/') => self.start_search(),
            KeyCode::Char('c') => self.clear_filters(),
            KeyCode::Char('p') if self.view == View::Spots => self.cycle_parking_filter(),
            KeyCode::Char('s') if self.view == View::Spots => self.cycle_status_filter(),
            KeyCode::Char('t') if self.view == View::Spots => self.cycle_type_filter(),
            KeyCode::Char('x') if self.view == View::Board => self.free_selected_slot(),
            _ => {}
        }
    }

    fn handle_input_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.sync_search();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.sync_search();
            }
            KeyCode::Enter => {
                if self.input_mode == InputMode::RoomNumber {
                    self.assign_from_room_number();
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Esc => {
                if self.input_mode == InputMode::Search {
                    self.input.clear();
                    self.sync_search();
                }
                self.input_mode = InputMode::Normal;
            }
            _ => {}
        }
    }

    fn next_tab(&mut self) {
        let index = View::TABS.iter().position(|v| *v == self.view).unwrap_or(0);
        self.view = View::TABS[(index + 1) % View::TABS.len()];
    }

    fn previous_tab(&mut self) {
        let index = View::TABS.iter().position(|v| *v == self.view).unwrap_or(0);
        self.view = View::TABS[(index + View::TABS.len() - 1) % View::TABS.len()];
    }

    fn go_back(&mut self) {
        match self.view {
            View::Overview | View::Hotels => self.should_quit = true,
            View::Parkings => self.view = View::Hotels,
            View::Spots => self.view = View::Parkings,
            View::Statuses | View::Types => self.view = View::Overview,
            View::Board => self.view = View::Spots,
        }
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.current_len();
        let selected = match self.view {
            View::Overview => return,
            View::Hotels => &mut self.selected_hotel,
            View::Parkings => &mut self.selected_parking,
            View::Spots => &mut self.selected_spot,
            View::Statuses => &mut self.selected_status,
            View::Types => &mut self.selected_type,
            View::Board => &mut self.selected_slot,
        };
        if down {
            if *selected < len.saturating_sub(1) {
                *selected += 1;
            }
        } else if *selected > 0 {
            *selected -= 1;
        }
    }

    fn current_len(&self) -> usize {
        match self.view {
            View::Overview => 0,
            View::Hotels => self.store.visible_hotels().len(),
            View::Parkings => self.store.visible_parkings().len(),
            View::Spots => self.store.visible_spots().len(),
            View::Statuses => self.store.visible_statuses().len(),
            View::Types => self.store.visible_types().len(),
            View::Board => self.board_places().len(),
        }
    }

    fn enter(&mut self) {
        match self.view {
            View::Overview => self.view = View::Hotels,
            View::Hotels => {
                if let Some(id) = self.selected_hotel().map(|h| h.id) {
                    self.store.show_parkings_of_hotel(id);
                    self.selected_parking = 0;
                    self.view = View::Parkings;
                }
            }
            View::Parkings => {
                if let Some(id) = self.selected_parking().map(|p| p.id) {
                    self.store.show_spots_of_parking(id);
                    self.selected_spot = 0;
                    self.view = View::Spots;
                }
            }
            View::Spots => {
                let parking = self.selected_spot().map(|spot| {
                    parent_name(spot.parking_id, &index_by_id(self.store.parkings()))
                });
                if let Some(name) = parking {
                    self.board_parking = Some(name);
                    self.selected_slot = 0;
                    self.view = View::Board;
                }
            }
            View::Statuses => {
                if let Some(id) = self.selected_status().map(|st| st.id) {
                    self.store.spot_filter.status_id = Some(id);
                    self.show_filtered_spots();
                }
            }
            View::Types => {
                if let Some(id) = self.selected_type().map(|t| t.id) {
                    self.store.spot_filter.type_id = Some(id);
                    self.show_filtered_spots();
                }
            }
            View::Board => {
                if self.selected_slot_view().is_some_and(|slot| slot.is_empty()) {
                    self.input.clear();
                    self.input_mode = InputMode::RoomNumber;
                }
            }
        }
    }

    fn show_filtered_spots(&mut self) {
        self.selected_spot = 0;
        self.view = View::Spots;
    }

    fn reload(&mut self) {
        let Some(source) = self.source.as_ref() else {
            return;
        };
        let generation = self.store.begin_reload();
        let result = source.snapshot();
        self.message = match self.store.apply_reload(generation, result) {
            ReloadOutcome::Applied => Some("Data reloaded".to_string()),
            ReloadOutcome::Stale => None,
            ReloadOutcome::Failed(err) => Some(format!("Reload failed: {err}")),
        };
        self.clamp_selection();
    }

    fn start_search(&mut self) {
        let current = match self.view {
            View::Hotels => self.store.hotel_search.clone(),
            View::Parkings => self.store.parking_filter.free_text.clone(),
            View::Spots => self.store.spot_filter.free_text.clone(),
            View::Overview | View::Statuses | View::Types | View::Board => return,
        };
        self.input = current.unwrap_or_default();
        self.input_mode = InputMode::Search;
    }

    /// Applies the input buffer to the search of the current view.
    fn sync_search(&mut self) {
        if self.input_mode != InputMode::Search {
            return;
        }
        let text = if self.input.is_empty() {
            None
        } else {
            Some(self.input.clone())
        };
        match self.view {
            View::Hotels => self.store.hotel_search = text,
            View::Parkings => self.store.parking_filter.free_text = text,
            View::Spots => self.store.spot_filter.free_text = text,
            View::Overview | View::Statuses | View::Types | View::Board => {}
        }
        self.clamp_selection();
    }

    fn clear_filters(&mut self) {
        match self.view {
            View::Hotels => self.store.hotel_search = None,
            View::Parkings => self.store.parking_filter = Default::default(),
            View::Spots => self.store.spot_filter = Default::default(),
            View::Overview | View::Statuses | View::Types | View::Board => return,
        }
        self.clamp_selection();
    }

    fn cycle_parking_filter(&mut self) {
        let ids: Vec<u64> = self.store.parkings().iter().map(|p| p.id).collect();
        self.store.spot_filter.parking_id = cycle(self.store.spot_filter.parking_id, &ids);
        self.clamp_selection();
    }

    fn cycle_status_filter(&mut self) {
        let ids: Vec<u64> = self
            .store
            .snapshot()
            .map(|s| s.statuses.iter().map(|st| st.id).collect())
            .unwrap_or_default();
        self.store.spot_filter.status_id = cycle(self.store.spot_filter.status_id, &ids);
        self.clamp_selection();
    }

    fn cycle_type_filter(&mut self) {
        let ids: Vec<u64> = self
            .store
            .snapshot()
            .map(|s| s.types.iter().map(|t| t.id).collect())
            .unwrap_or_default();
        self.store.spot_filter.type_id = cycle(self.store.spot_filter.type_id, &ids);
        self.clamp_selection();
    }

    fn free_selected_slot(&mut self) {
        let Some(parking) = self.board_parking.clone() else {
            return;
        };
        let key = match self.board_places().get(self.selected_slot) {
            Some(place) => place.key().to_string(),
            None => return,
        };
        if self.store.board_mut().free(&parking, &key) {
            self.message = Some(format!("Slot {key} freed"));
        }
    }

    fn assign_from_room_number(&mut self) {
        let Some(parking) = self.board_parking.clone() else {
            return;
        };
        let key = match self.board_places().get(self.selected_slot) {
            Some(place) => place.key().to_string(),
            None => return,
        };
        let occupant = self
            .store
            .snapshot()
            .and_then(|s| find_guest(&s.guests, &self.input))
            .map(|guest| Occupant::from_guest(guest, self.today));

        self.message = match occupant {
            Some(occupant) => {
                info!(parking = %parking, slot = %key, "assigning slot from room number");
                let name = occupant.name.clone();
                self.store.board_mut().assign(&parking, &key, occupant);
                Some(format!("Slot {key} assigned to {name}"))
            }
            None => Some(format!("No guest in room {}", self.input.trim())),
        };
        self.input.clear();
    }

    fn clamp_selection(&mut self) {
        let clamp = |selected: &mut usize, len: usize| {
            *selected = (*selected).min(len.saturating_sub(1));
        };
        clamp(&mut self.selected_hotel, self.store.visible_hotels().len());
        clamp(&mut self.selected_parking, self.store.visible_parkings().len());
        clamp(&mut self.selected_spot, self.store.visible_spots().len());
        clamp(&mut self.selected_status, self.store.visible_statuses().len());
        clamp(&mut self.selected_type, self.store.visible_types().len());
    }

    #[must_use]
    pub fn selected_hotel(&self) -> Option<&Hotel> {
        self.store.visible_hotels().items().get(self.selected_hotel).copied()
    }

    #[must_use]
    pub fn selected_parking(&self) -> Option<&Parking> {
        self.store
            .visible_parkings()
            .items()
            .get(self.selected_parking)
            .copied()
    }

    #[must_use]
    pub fn selected_spot(&self) -> Option<&Spot> {
        self.store.visible_spots().items().get(self.selected_spot).copied()
    }

    #[must_use]
    pub fn selected_status(&self) -> Option<&StatusRef> {
        self.store
            .visible_statuses()
            .items()
            .get(self.selected_status)
            .copied()
    }

    #[must_use]
    pub fn selected_type(&self) -> Option<&TypeRef> {
        self.store.visible_types().items().get(self.selected_type).copied()
    }

    /// Places of the parking shown on the slot board.
    #[must_use]
    pub fn board_places(&self) -> &[SlotPlace] {
        self.board_parking
            .as_ref()
            .and_then(|name| self.store.snapshot()?.places.get(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn board_slots(&self) -> Vec<SlotView<'_>> {
        match &self.board_parking {
            Some(name) => self.store.board().slots_for(name, self.board_places()),
            None => Vec::new(),
        }
    }

    fn selected_slot_view(&self) -> Option<SlotView<'_>> {
        self.board_slots().into_iter().nth(self.selected_slot)
    }

    /// Human readable summary of the active spot filters.
    #[must_use]
    pub fn spot_filter_summary(&self) -> String {
        let filter = &self.store.spot_filter;
        let mut parts = Vec::new();

        if let Some(id) = filter.parking_id {
            parts.push(format!(
                "Parking: {}",
                parent_name(id, &index_by_id(self.store.parkings()))
            ));
        }
        if let Some(id) = filter.status_id {
            let label = self
                .store
                .snapshot()
                .and_then(|s| s.statuses.iter().find(|st| st.id == id))
                .map_or_else(|| format!("#{id}"), |st| display_value(&st.value));
            parts.push(format!("Status: {label}"));
        }
        if let Some(id) = filter.type_id {
            let label = self
                .store
                .snapshot()
                .and_then(|s| s.types.iter().find(|t| t.id == id))
                .map_or_else(|| format!("#{id}"), |t| t.display_label().to_string());
            parts.push(format!("Type: {label}"));
        }
        if let Some(text) = filter.free_text.as_deref().filter(|t| !t.trim().is_empty()) {
            parts.push(format!("Search: \"{text}\""));
        }

        if parts.is_empty() {
            "All spots".to_string()
        } else {
            parts.join(" | ")
        }
    }

    /// Placeholder line for a list that has nothing to show.
    #[must_use]
    pub fn empty_message<T>(listing: &Listing<'_, T>, what: &str) -> Option<String> {
        match listing {
            Listing::Loading => Some("Loading...".to_string()),
            Listing::Empty => Some(format!("No {what} found")),
            Listing::Items(_) => None,
        }
    }
}

/// Next filter value: off, then each id in order, then off again.
fn cycle(current: Option<u64>, ids: &[u64]) -> Option<u64> {
    match current {
        None => ids.first().copied(),
        Some(id) => ids
            .iter()
            .position(|candidate| *candidate == id)
            .and_then(|i| ids.get(i + 1))
            .copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Guest, Snapshot, StatusRef, TypeRef};
    use crate::status::StatusCode;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 16).unwrap()
    }

    fn app() -> App {
        let mut places = BTreeMap::new();
        places.insert(
            "Cour".to_string(),
            vec![
                SlotPlace {
                    number: "1 PMR".into(),
                    kind: "PMR".into(),
                },
                SlotPlace {
                    number: "2".into(),
                    kind: "standard".into(),
                },
            ],
        );
        let snapshot = Snapshot {
            hotels: vec![Hotel::new(1, "Philibert"), Hotel::new(2, "Seytour")],
            parkings: vec![Parking::new(10, 1, "Cour"), Parking::new(20, 2, "Rue")],
            spots: vec![
                Spot::new(100, 10, 1).with_types(vec![TypeRef::new(1, "PMR")]),
                Spot::new(101, 10, 2).with_statuses(vec![StatusRef::new(5, "already_in")]),
                Spot::new(200, 20, 1),
            ],
            statuses: vec![StatusRef::new(5, "already_in"), StatusRef::new(6, "personnel")],
            types: vec![TypeRef::new(1, "PMR")],
            guests: vec![Guest {
                room_number: 315,
                name: "KOTHÂRI".into(),
                check_in_date: Some("2025-05-16".into()),
                check_out_date: Some("2025-05-19".into()),
            }],
            places,
            ..Snapshot::default()
        };
        App::new(Store::with_snapshot(snapshot), today())
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn cycle_walks_ids_then_turns_off() {
        let ids = [3, 5];
        assert_eq!(cycle(None, &ids), Some(3));
        assert_eq!(cycle(Some(3), &ids), Some(5));
        assert_eq!(cycle(Some(5), &ids), None);
        assert_eq!(cycle(Some(9), &ids), None);
        assert_eq!(cycle(None, &[]), None);
    }

    #[test]
    fn tabs_wrap_around() {
        let mut app = app();
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.view, View::Spots);
        press(&mut app, &[KeyCode::Tab, KeyCode::Tab]);
        assert_eq!(app.view, View::Types);
        press(&mut app, &[KeyCode::Tab]);
        assert_eq!(app.view, View::Overview);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.view, View::Types);
        press(&mut app, &[KeyCode::BackTab]);
        assert_eq!(app.view, View::Statuses);
    }

    #[test]
    fn status_catalog_selects_and_filters_spots() {
        let mut app = app();
        app.view = View::Statuses;
        assert_eq!(app.selected_status().map(|s| s.id), Some(5));

        press(&mut app, &[KeyCode::Down, KeyCode::Down]);
        assert_eq!(app.selected_status().map(|s| s.value.as_str()), Some("personnel"));

        press(&mut app, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.view, View::Spots);
        assert_eq!(app.store.spot_filter.status_id, Some(5));
        assert_eq!(app.selected_spot().map(|s| s.id), Some(101));
    }

    #[test]
    fn type_catalog_selects_and_filters_spots() {
        let mut app = app();
        app.view = View::Types;
        press(&mut app, &[KeyCode::Down]);
        assert_eq!(app.selected_type().map(|t| t.id), Some(1));

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.view, View::Spots);
        assert_eq!(app.spot_filter_summary(), "Type: PMR");
        assert_eq!(app.selected_spot().map(|s| s.id), Some(100));
    }

    #[test]
    fn catalog_views_ignore_search_and_go_back_to_overview() {
        let mut app = app();
        app.view = View::Types;
        press(&mut app, &[KeyCode::Char('/')]);
        assert_eq!(app.input_mode, InputMode::Normal);

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.view, View::Overview);
        assert!(!app.should_quit);

        app.view = View::Statuses;
        press(&mut app, &[KeyCode::Backspace]);
        assert_eq!(app.view, View::Overview);
    }

    #[test]
    fn catalog_views_report_loading_before_data() {
        let mut app = App::new(Store::new(), today());
        app.view = View::Statuses;
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.view, View::Statuses);
        assert_eq!(app.store.visible_statuses(), Listing::Loading);
        assert!(app.selected_status().is_none());
    }

    #[test]
    fn hotel_to_parkings_to_spots_navigation() {
        let mut app = app();
        app.view = View::Hotels;
        press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.view, View::Parkings);
        assert_eq!(app.store.parking_filter.hotel_id, Some(2));
        assert_eq!(app.selected_parking().map(|p| p.id), Some(20));

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.view, View::Spots);
        assert_eq!(app.store.spot_filter.parking_id, Some(20));
        assert_eq!(app.spot_filter_summary(), "Parking: Rue");

        press(&mut app, &[KeyCode::Esc, KeyCode::Esc]);
        assert_eq!(app.view, View::Hotels);
    }

    #[test]
    fn live_search_filters_and_escape_clears() {
        let mut app = app();
        app.view = View::Spots;
        press(&mut app, &[KeyCode::Char('/')]);
        assert_eq!(app.input_mode, InputMode::Search);
        type_text(&mut app, "pmr");
        assert_eq!(app.store.visible_spots().len(), 1);
        assert_eq!(app.spot_filter_summary(), "Search: \"pmr\"");

        press(&mut app, &[KeyCode::Esc]);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.store.spot_filter.free_text, None);
        assert_eq!(app.store.visible_spots().len(), 3);
    }

    #[test]
    fn status_and_type_filters_cycle() {
        let mut app = app();
        app.view = View::Spots;
        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.store.spot_filter.status_id, Some(5));
        assert_eq!(app.store.visible_spots().len(), 1);
        assert_eq!(app.spot_filter_summary(), "Status: already in");

        press(&mut app, &[KeyCode::Char('s')]);
        assert_eq!(app.store.visible_spots(), Listing::Empty);

        press(&mut app, &[KeyCode::Char('c'), KeyCode::Char('t')]);
        assert_eq!(app.store.spot_filter.status_id, None);
        assert_eq!(app.selected_spot().map(|s| s.id), Some(100));
    }

    #[test]
    fn board_assign_by_room_number_and_free() {
        let mut app = app();
        app.view = View::Spots;
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.view, View::Board);
        assert_eq!(app.board_parking.as_deref(), Some("Cour"));
        assert_eq!(app.board_slots().len(), 2);

        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.input_mode, InputMode::RoomNumber);
        type_text(&mut app, "315");
        press(&mut app, &[KeyCode::Enter]);

        let occupant = app.store.board().occupant("Cour", "1").cloned();
        assert_eq!(occupant.as_ref().map(|o| o.name.as_str()), Some("KOTHÂRI"));
        assert_eq!(occupant.and_then(|o| o.status), Some(StatusCode::ArrivalToday));

        press(&mut app, &[KeyCode::Char('x')]);
        assert!(app.store.board().occupant("Cour", "1").is_none());
        assert_eq!(app.message.as_deref(), Some("Slot 1 freed"));
    }

    #[test]
    fn unknown_room_number_is_reported() {
        let mut app = app();
        app.view = View::Spots;
        press(&mut app, &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter]);
        type_text(&mut app, "999");
        press(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.message.as_deref(), Some("No guest in room 999"));
        assert_eq!(app.store.board().occupied_count("Cour"), 0);
    }

    #[test]
    fn empty_messages_distinguish_loading() {
        let loading: Listing<'_, Spot> = Listing::Loading;
        assert_eq!(App::empty_message(&loading, "spots").as_deref(), Some("Loading..."));
        let empty: Listing<'_, Spot> = Listing::Empty;
        assert_eq!(
            App::empty_message(&empty, "spots").as_deref(),
            Some("No spots found")
        );
    }
}
