use crate::resolve::{enrich_hotel_stats, index_by_id, parent_name, spot_row};
use crate::stats::{status_distribution, DashboardStats};
use crate::status::{derive_occupant_status, display_value, format_short_date_str, StatusCode};
use crate::ui::app::{App, InputMode, View};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Tabs,
    },
    Frame,
};
use std::collections::HashMap;

const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x4C, 0xAF, 0x50); // free spots
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // focus
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65); // footer

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const COUNT_COLOR: Color = BRAND_GREEN;

/// Status colors come as `#RRGGBB`; anything else falls back to the default.
fn hex_color(value: &str) -> Color {
    value.parse().unwrap_or(Color::Reset)
}

fn main_layout(frame: &Frame) -> [Rect; 4] {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Tabs
        Constraint::Length(3), // Filters / info
        Constraint::Min(8),    // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn draw_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let selected = View::TABS.iter().position(|v| *v == app.view);
    let mut tabs = Tabs::new(View::TABS.iter().map(|v| v.title()))
        .style(HEADER_STYLE)
        .highlight_style(Style::default().fg(BRAND_ORANGE).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(format!(" Parking Dash | {} ", app.today.format("%Y-%m-%d")))
                .borders(Borders::ALL),
        );
    if let Some(index) = selected {
        tabs = tabs.select(index);
    }
    frame.render_widget(tabs, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App, text: String) {
    let line = match app.input_mode {
        InputMode::Search => Line::from(vec![
            Span::styled("Search: ", Style::default().fg(BRAND_ORANGE)),
            Span::raw(format!("{}_", app.input)),
        ]),
        InputMode::RoomNumber => Line::from(vec![
            Span::styled("Room number: ", Style::default().fg(BRAND_ORANGE)),
            Span::raw(format!("{}_", app.input)),
        ]),
        InputMode::Normal => match &app.message {
            Some(message) => Line::from(vec![
                Span::raw(text),
                Span::styled(format!("  | {message}"), Style::default().fg(BRAND_MUTED)),
            ]),
            None => Line::from(text),
        },
    };
    let info = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(info, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn row_style(is_selected: bool) -> Style {
    if is_selected {
        SELECTED_STYLE
    } else {
        Style::default()
    }
}

/// First row to render so that `selected` stays visible.
fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if selected >= visible_rows {
        selected - visible_rows + 1
    } else {
        0
    }
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, total: usize, position: usize) {
    let visible_rows = (area.height as usize).saturating_sub(3);
    if total <= visible_rows {
        return;
    }
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(total).position(position);

    frame.render_stateful_widget(scrollbar, scrollbar_area(area), &mut scrollbar_state);
}

/// Right border column of a table block, below its header row.
fn scrollbar_area(area: Rect) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(1),
        y: area.y + 2,
        width: 1,
        height: area.height.saturating_sub(3),
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let placeholder = Paragraph::new(message)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(placeholder, area);
}

pub fn draw_overview(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);

    if !app.store.is_loaded() {
        draw_info(frame, info, app, String::new());
        draw_placeholder(frame, main, " Overview ", "Loading...");
        draw_footer(frame, footer, " Tab Views | r Reload | q Quit ");
        return;
    }

    let stats = DashboardStats::compute(app.store.hotels(), app.store.parkings(), app.store.spots());
    let summary = format!(
        "{} hotels | {} parkings | {} spots | {} free | occupancy {}%",
        stats.hotel_count,
        stats.parking_count,
        stats.spot_count,
        stats.free_count,
        stats.occupancy_rate
    );
    draw_info(frame, info, app, summary);

    let chunks = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main);

    let statuses = app.store.snapshot().map(|s| s.statuses.as_slice()).unwrap_or_default();
    let shares = status_distribution(statuses, app.store.spots());
    let bars: Vec<Bar> = shares
        .iter()
        .map(|share| {
            Bar::default()
                .label(Line::from(share.label.clone()))
                .value(share.count as u64)
                .style(Style::default().fg(hex_color(&share.color)))
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::default().title(" Spots by status ").borders(Borders::ALL))
        .direction(ratatui::layout::Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, chunks[0]);

    let header = Row::new(vec!["Hotel", "Parkings", "Spots"]).style(HEADER_STYLE);
    let rows: Vec<Row> = enrich_hotel_stats(app.store.hotels(), app.store.parkings(), app.store.spots())
        .into_iter()
        .map(|h| {
            Row::new(vec![
                h.hotel.name,
                h.parking_count.to_string(),
                h.spot_count.to_string(),
            ])
        })
        .collect();
    let widths = [
        Constraint::Percentage(60),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" Hotels ").borders(Borders::ALL));
    frame.render_widget(table, chunks[1]);

    draw_footer(frame, footer, " Tab Views | Enter Hotels | r Reload | q Quit ");
}

pub fn draw_hotels(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);

    let listing = app.store.visible_hotels();
    let search = app
        .store
        .hotel_search
        .as_deref()
        .map_or_else(|| "All hotels".to_string(), |s| format!("Search: \"{s}\""));
    draw_info(frame, info, app, search);

    let title = format!(" Hotels ({}) ", listing.len());
    if let Some(message) = App::empty_message(&listing, "hotels") {
        draw_placeholder(frame, main, &title, &message);
    } else {
        let counts: HashMap<u64, (usize, usize)> =
            enrich_hotel_stats(app.store.hotels(), app.store.parkings(), app.store.spots())
                .into_iter()
                .map(|h| (h.hotel.id, (h.parking_count, h.spot_count)))
                .collect();

        let visible_rows = (main.height as usize).saturating_sub(3);
        let offset = scroll_offset(app.selected_hotel, visible_rows);

        let rows: Vec<Row> = listing
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, hotel)| {
                let (parkings, spots) = counts.get(&hotel.id).copied().unwrap_or_default();
                Row::new(vec![
                    hotel.name.clone(),
                    hotel.address.clone().unwrap_or_else(|| "-".to_string()),
                    parkings.to_string(),
                    spots.to_string(),
                ])
                .style(row_style(i == app.selected_hotel))
            })
            .collect();

        let header = Row::new(vec!["Name", "Address", "Parkings", "Spots"]).style(HEADER_STYLE);
        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(15),
            Constraint::Percentage(15),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, main);
        draw_scrollbar(frame, main, listing.len(), app.selected_hotel);
    }

    draw_footer(
        frame,
        footer,
        " ↑↓ Select | Enter Parkings | / Search | c Clear | Tab Views | q Quit ",
    );
}

pub fn draw_parkings(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);

    let hotels = index_by_id(app.store.hotels());
    let filter = &app.store.parking_filter;
    let mut parts = Vec::new();
    if let Some(id) = filter.hotel_id {
        parts.push(format!("Hotel: {}", parent_name(id, &hotels)));
    }
    if let Some(text) = filter.free_text.as_deref() {
        parts.push(format!("Search: \"{text}\""));
    }
    let summary = if parts.is_empty() {
        "All parkings".to_string()
    } else {
        parts.join(" | ")
    };
    draw_info(frame, info, app, summary);

    let listing = app.store.visible_parkings();
    let title = format!(" Parkings ({}) ", listing.len());
    if let Some(message) = App::empty_message(&listing, "parkings") {
        draw_placeholder(frame, main, &title, &message);
    } else {
        let mut spot_counts: HashMap<u64, usize> = HashMap::new();
        for spot in app.store.spots() {
            *spot_counts.entry(spot.parking_id).or_insert(0) += 1;
        }

        let visible_rows = (main.height as usize).saturating_sub(3);
        let offset = scroll_offset(app.selected_parking, visible_rows);

        let rows: Vec<Row> = listing
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, parking)| {
                let capacity = parking
                    .capacity
                    .map_or_else(|| "-".to_string(), |c| c.to_string());
                let spots = spot_counts.get(&parking.id).copied().unwrap_or(0);
                Row::new(vec![
                    parking.name.clone(),
                    parent_name(parking.hotel_id, &hotels),
                    parking.location.clone().unwrap_or_else(|| "-".to_string()),
                    format!("{spots}/{capacity}"),
                ])
                .style(row_style(i == app.selected_parking))
            })
            .collect();

        let header = Row::new(vec!["Name", "Hotel", "Location", "Spots"]).style(HEADER_STYLE);
        let widths = [
            Constraint::Percentage(30),
            Constraint::Percentage(25),
            Constraint::Percentage(30),
            Constraint::Percentage(15),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, main);
        draw_scrollbar(frame, main, listing.len(), app.selected_parking);
    }

    draw_footer(
        frame,
        footer,
        " ↑↓ Select | Enter Spots | / Search | c Clear | Esc Hotels | q Quit ",
    );
}

pub fn draw_spots(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);
    draw_info(frame, info, app, app.spot_filter_summary());

    let listing = app.store.visible_spots();
    let title = format!(" Spots ({}) ", listing.len());
    if let Some(message) = App::empty_message(&listing, "spots") {
        draw_placeholder(frame, main, &title, &message);
    } else {
        let parkings = index_by_id(app.store.parkings());
        let visible_rows = (main.height as usize).saturating_sub(3);
        let offset = scroll_offset(app.selected_spot, visible_rows);

        let rows: Vec<Row> = listing
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, spot)| {
                let row = spot_row(spot, &parkings);
                let status_color = spot
                    .statuses
                    .first()
                    .map_or(COUNT_COLOR, |s| hex_color(&s.color));
                Row::new(vec![
                    Line::from(row.number.to_string()),
                    Line::from(row.types),
                    Line::from(row.parking),
                    Line::from(row.floor),
                    Line::from(row.section),
                    Line::from(Span::styled(row.statuses, Style::default().fg(status_color))),
                ])
                .style(row_style(i == app.selected_spot))
            })
            .collect();

        let header = Row::new(vec!["No.", "Types", "Parking", "Floor", "Section", "Status"])
            .style(HEADER_STYLE);
        let widths = [
            Constraint::Length(5),
            Constraint::Percentage(18),
            Constraint::Percentage(22),
            Constraint::Length(6),
            Constraint::Percentage(12),
            Constraint::Percentage(35),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, main);
        draw_scrollbar(frame, main, listing.len(), app.selected_spot);
    }

    draw_footer(
        frame,
        footer,
        " ↑↓ Select | p Parking | s Status | t Type | / Search | c Clear | Enter Board | Esc Back ",
    );
}

pub fn draw_statuses(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);

    let listing = app.store.visible_statuses();
    draw_info(frame, info, app, format!("{} statuses in the catalog", listing.len()));

    let title = format!(" Statuses ({}) ", listing.len());
    if let Some(message) = App::empty_message(&listing, "statuses") {
        draw_placeholder(frame, main, &title, &message);
    } else {
        let visible_rows = (main.height as usize).saturating_sub(3);
        let offset = scroll_offset(app.selected_status, visible_rows);

        let rows: Vec<Row> = listing
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, status)| {
                let label = status
                    .label
                    .clone()
                    .or_else(|| status.code().map(|c| c.info().label.to_string()))
                    .unwrap_or_else(|| display_value(&status.value));
                let color = if status.color.is_empty() {
                    status.code().map_or("", |c| c.info().color)
                } else {
                    status.color.as_str()
                };
                Row::new(vec![
                    Line::from(status.id.to_string()),
                    Line::from(status.value.clone()),
                    Line::from(label),
                    Line::from(vec![
                        Span::styled("██ ", Style::default().fg(hex_color(color))),
                        Span::raw(color.to_string()),
                    ]),
                ])
                .style(row_style(i == app.selected_status))
            })
            .collect();

        let header = Row::new(vec!["Id", "Value", "Label", "Color"]).style(HEADER_STYLE);
        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, main);
        draw_scrollbar(frame, main, listing.len(), app.selected_status);
    }

    draw_footer(
        frame,
        footer,
        " ↑↓ Select | Enter Spots with status | Tab Views | Esc Overview | q Quit ",
    );
}

pub fn draw_types(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);

    let listing = app.store.visible_types();
    draw_info(frame, info, app, format!("{} spot types in the catalog", listing.len()));

    let title = format!(" Types ({}) ", listing.len());
    if let Some(message) = App::empty_message(&listing, "types") {
        draw_placeholder(frame, main, &title, &message);
    } else {
        let mut spot_counts: HashMap<u64, usize> = HashMap::new();
        for spot in app.store.spots() {
            for kind in &spot.types {
                *spot_counts.entry(kind.id).or_insert(0) += 1;
            }
        }

        let visible_rows = (main.height as usize).saturating_sub(3);
        let offset = scroll_offset(app.selected_type, visible_rows);

        let rows: Vec<Row> = listing
            .items()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, kind)| {
                Row::new(vec![
                    kind.id.to_string(),
                    kind.value.clone(),
                    kind.label.clone().unwrap_or_else(|| "-".to_string()),
                    spot_counts.get(&kind.id).copied().unwrap_or(0).to_string(),
                ])
                .style(row_style(i == app.selected_type))
            })
            .collect();

        let header = Row::new(vec!["Id", "Value", "Label", "Spots"]).style(HEADER_STYLE);
        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(30),
            Constraint::Percentage(45),
            Constraint::Percentage(15),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, main);
        draw_scrollbar(frame, main, listing.len(), app.selected_type);
    }

    draw_footer(
        frame,
        footer,
        " ↑↓ Select | Enter Spots of type | Tab Views | Esc Overview | q Quit ",
    );
}

pub fn draw_board(frame: &mut Frame, app: &App) {
    let [tabs, info, main, footer] = main_layout(frame);
    draw_tabs(frame, tabs, app);

    let parking = app.board_parking.clone().unwrap_or_default();
    let slots = app.board_slots();
    let occupied = slots.iter().filter(|s| !s.is_empty()).count();
    draw_info(
        frame,
        info,
        app,
        format!("{parking}: {occupied}/{} slots occupied", slots.len()),
    );

    let title = format!(" {} - {parking} ", View::Board.title());
    if slots.is_empty() {
        draw_placeholder(frame, main, &title, "No slots configured for this parking");
    } else {
        let visible_rows = (main.height as usize).saturating_sub(3);
        let offset = scroll_offset(app.selected_slot, visible_rows);

        let rows: Vec<Row> = slots
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible_rows)
            .map(|(i, slot)| {
                let mut cells = vec![
                    Line::from(slot.number.to_string()),
                    Line::from(slot.kind.to_string()),
                ];
                match (slot.occupant, slot.status) {
                    (Some(occupant), Some(status)) => {
                        let info = status.info();
                        let derived = derive_occupant_status(Some(occupant), app.today)
                            .map_or("-", StatusCode::code);
                        cells.push(Line::from(Span::styled(
                            format!("{}: {}", status.occupant_role(), info.label),
                            Style::default().fg(hex_color(info.color)),
                        )));
                        cells.push(Line::from(format!(
                            "{} ({})",
                            occupant.name, occupant.room_number
                        )));
                        cells.push(Line::from(format!(
                            "{} {} {}",
                            occupant.car_make, occupant.car_model, occupant.license_plate
                        )));
                        cells.push(Line::from(format!(
                            "{} → {}",
                            format_short_date_str(occupant.check_in_date.as_deref()),
                            format_short_date_str(occupant.check_out_date.as_deref())
                        )));
                        cells.push(Line::from(derived));
                    }
                    _ => {
                        cells.push(Line::from(Span::styled(
                            "Libre",
                            Style::default().fg(COUNT_COLOR),
                        )));
                    }
                }
                Row::new(cells).style(row_style(i == app.selected_slot))
            })
            .collect();

        let header = Row::new(vec!["Slot", "Type", "Status", "Guest", "Vehicle", "Stay", "Today"])
            .style(HEADER_STYLE);
        let widths = [
            Constraint::Length(8),
            Constraint::Length(9),
            Constraint::Percentage(25),
            Constraint::Percentage(18),
            Constraint::Percentage(22),
            Constraint::Length(14),
            Constraint::Length(14),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(table, main);
        draw_scrollbar(frame, main, slots.len(), app.selected_slot);
    }

    draw_footer(
        frame,
        footer,
        " ↑↓ Select | Enter Assign by room | x Free | Esc Spots | q Quit ",
    );
}
