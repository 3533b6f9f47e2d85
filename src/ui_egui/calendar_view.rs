//! Calendar picker widget.
//!
//! `CalendarView` owns the selection and the visible week or month. Everything
//! else (calendar system, fonts, colours, whether past dates are selectable) is
//! asked from the host's [`CalendarViewDelegate`] on every frame.

use std::hash::Hash;

use chrono::NaiveDate;
use egui::Id;

use super::delegate::CalendarViewDelegate;
use super::views::header::show_weekday_labels;
use super::views::WeekView;
use crate::error::{CalendarError, CalendarResult};
use crate::models::configuration::CalendarConfiguration;
use crate::models::display_mode::DisplayMode;
use crate::services::grid::{self, WeekRow};
use crate::utils::date::{first_of_month, shift_month, shift_week};

const CELL_SPACING: f32 = 2.0;
const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// What happened during one call to [`CalendarView::show`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarViewResponse {
    /// Date selected this frame, if any.
    pub selected: Option<NaiveDate>,
    pub display_mode_changed: bool,
    /// The visible week or month moved.
    pub navigated: bool,
}

#[derive(Debug, Clone)]
pub struct CalendarView {
    id: Id,
    display_mode: DisplayMode,
    selected_date: Option<NaiveDate>,
    /// Any date inside the visible week or month. `None` follows the selection.
    anchor: Option<NaiveDate>,
    row_height: f32,
    show_navigation: bool,
}

impl CalendarView {
    pub fn new(id_source: impl Hash) -> Self {
        Self {
            id: Id::new(id_source),
            display_mode: DisplayMode::default(),
            selected_date: None,
            anchor: None,
            row_height: DEFAULT_ROW_HEIGHT,
            show_navigation: true,
        }
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    pub fn with_row_height(mut self, row_height: f32) -> Self {
        self.row_height = row_height.max(1.0);
        self
    }

    /// Hide the built-in previous/next/today bar when the host drives navigation.
    pub fn with_navigation(mut self, show: bool) -> Self {
        self.show_navigation = show;
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Returns `true` if the mode changed.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> bool {
        if self.display_mode == mode {
            return false;
        }
        log::debug!("Calendar view {:?} switching to {} mode", self.id, mode);
        self.display_mode = mode;
        true
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    /// Select `date`, bring it into view and tell the delegate.
    pub fn select_date(
        &mut self,
        date: NaiveDate,
        delegate: &mut dyn CalendarViewDelegate,
    ) -> CalendarResult<()> {
        let config = CalendarConfiguration::from_delegate(&*delegate, self.id);
        self.commit_selection(date, &config, delegate)
    }

    pub fn select_today(&mut self, delegate: &mut dyn CalendarViewDelegate) -> CalendarResult<NaiveDate> {
        let config = CalendarConfiguration::from_delegate(&*delegate, self.id);
        let today = config.calendar.today();
        self.commit_selection(today, &config, delegate)?;
        Ok(today)
    }

    /// Move forward one week or month.
    pub fn show_next(&mut self, delegate: &dyn CalendarViewDelegate) -> bool {
        let config = CalendarConfiguration::from_delegate(delegate, self.id);
        self.step(1, &config)
    }

    /// Move back one week or month. Refused when past dates are disabled and
    /// the move would leave the current week or month.
    pub fn show_previous(&mut self, delegate: &dyn CalendarViewDelegate) -> bool {
        let config = CalendarConfiguration::from_delegate(delegate, self.id);
        self.step(-1, &config)
    }

    /// A date inside the visible week or month. With past dates disabled, a
    /// view left on an earlier week or month falls back to today.
    pub fn visible_anchor(&self, config: &CalendarConfiguration) -> NaiveDate {
        let today = config.calendar.today();
        let anchor = self
            .anchor
            .or(self.visible_selection(config))
            .unwrap_or(today);
        if !config.past_dates_enabled
            && grid::is_before_current_period(self.display_mode, anchor, today, &config.calendar)
        {
            return today;
        }
        anchor
    }

    /// Rows currently on screen with the selection applied.
    pub fn visible_rows(&self, config: &CalendarConfiguration) -> CalendarResult<Vec<WeekRow>> {
        let mut rows = grid::rows_for(
            self.display_mode,
            self.visible_anchor(config),
            &config.calendar,
            config.calendar.today(),
            config.past_dates_enabled,
        )?;
        if let Some(selected) = self.visible_selection(config) {
            for row in rows.iter_mut() {
                row.select_date(selected);
            }
        }
        Ok(rows)
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        delegate: &mut dyn CalendarViewDelegate,
    ) -> CalendarViewResponse {
        let config = CalendarConfiguration::from_delegate(&*delegate, self.id);
        let mut response = CalendarViewResponse::default();

        self.drop_stale_state(&config);
        if self.selected_date.is_none() && self.anchor.is_none() {
            let today = config.calendar.today();
            if self.commit_selection(today, &config, delegate).is_ok() {
                response.selected = Some(today);
            }
        }

        ui.push_id(self.id, |ui| {
            if self.show_navigation {
                if let Some(action) = self.show_navigation_bar(ui, &config) {
                    self.apply_nav_action(action, &config, delegate, &mut response);
                }
                ui.add_space(4.0);
            }

            show_weekday_labels(ui, &config, CELL_SPACING);
            ui.add_space(4.0);

            let rows = match self.visible_rows(&config) {
                Ok(rows) => rows,
                Err(err) => {
                    log::warn!("Calendar view {:?} cannot lay out rows: {}", self.id, err);
                    Vec::new()
                }
            };
            for (row_index, mut row) in rows.into_iter().enumerate() {
                if let Some(position) =
                    WeekView::show(ui, row_index, &row, &config, self.row_height, CELL_SPACING)
                {
                    self.handle_tap(&mut row, position, &config, delegate, &mut response);
                }
            }
        });

        response
    }

    fn show_navigation_bar(
        &self,
        ui: &mut egui::Ui,
        config: &CalendarConfiguration,
    ) -> Option<NavAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text("Previous").clicked() {
                action = Some(NavAction::Previous);
            }

            let anchor = self.visible_anchor(config);
            let title_date = grid::period_start(self.display_mode, anchor, &config.calendar)
                .unwrap_or(anchor);
            ui.label(egui::RichText::new(title_date.format("%B %Y").to_string()).strong());

            if ui.small_button("▶").on_hover_text("Next").clicked() {
                action = Some(NavAction::Next);
            }

            if ui.small_button("Today").clicked() {
                action = Some(NavAction::Today);
            }

            ui.separator();
            for mode in DisplayMode::all() {
                if ui
                    .selectable_label(self.display_mode == mode, mode.label())
                    .clicked()
                {
                    action = Some(NavAction::Mode(mode));
                }
            }
        });
        action
    }

    fn apply_nav_action(
        &mut self,
        action: NavAction,
        config: &CalendarConfiguration,
        delegate: &mut dyn CalendarViewDelegate,
        response: &mut CalendarViewResponse,
    ) {
        match action {
            NavAction::Previous => response.navigated |= self.step(-1, config),
            NavAction::Next => response.navigated |= self.step(1, config),
            NavAction::Today => {
                let today = config.calendar.today();
                if self.commit_selection(today, config, delegate).is_ok() {
                    response.selected = Some(today);
                }
            }
            NavAction::Mode(mode) => response.display_mode_changed |= self.set_display_mode(mode),
        }
    }

    /// Turn a tap on the 1-based `position` of `row` into a selection.
    fn handle_tap(
        &mut self,
        row: &mut WeekRow,
        position: usize,
        config: &CalendarConfiguration,
        delegate: &mut dyn CalendarViewDelegate,
        response: &mut CalendarViewResponse,
    ) {
        match row.set_selected_weekday(position) {
            Ok(Some(date)) => {
                if self.commit_selection(date, config, delegate).is_ok() {
                    response.selected = Some(date);
                }
            }
            Ok(None) => {}
            Err(err) => log::warn!("Ignoring tap: {}", err),
        }
    }

    /// Selected date, unless past dates are disabled and it now lies before today.
    fn visible_selection(&self, config: &CalendarConfiguration) -> Option<NaiveDate> {
        let today = config.calendar.today();
        self.selected_date
            .filter(|date| config.past_dates_enabled || *date >= today)
    }

    /// Forget a selection or anchor that became unreachable after the host
    /// disabled past dates.
    fn drop_stale_state(&mut self, config: &CalendarConfiguration) {
        if config.past_dates_enabled {
            return;
        }
        let today = config.calendar.today();
        if self.selected_date.is_some_and(|date| date < today) {
            log::debug!("Calendar view {:?} clearing past selection", self.id);
            self.selected_date = None;
        }
        if self.anchor.is_some_and(|anchor| {
            grid::is_before_current_period(self.display_mode, anchor, today, &config.calendar)
        }) {
            self.anchor = None;
        }
    }

    fn commit_selection(
        &mut self,
        date: NaiveDate,
        config: &CalendarConfiguration,
        delegate: &mut dyn CalendarViewDelegate,
    ) -> CalendarResult<()> {
        if !config.past_dates_enabled && date < config.calendar.today() {
            log::warn!("Refusing to select disabled past date {}", date);
            return Err(CalendarError::DateDisabled(date));
        }
        // Both display modes must be able to lay out the selection
        if config.calendar.week_dates(date).is_none() {
            log::warn!("Refusing to select {}: {}", date, CalendarError::DateOutOfRange);
            return Err(CalendarError::DateOutOfRange);
        }

        log::debug!("Calendar view {:?} selected {}", self.id, date);
        self.selected_date = Some(date);
        self.anchor = Some(date);
        delegate.did_select_date(self.id, date, &config.calendar);
        Ok(())
    }

    fn step(&mut self, delta: i32, config: &CalendarConfiguration) -> bool {
        let anchor = self.visible_anchor(config);
        let target = match self.display_mode {
            DisplayMode::Week => shift_week(anchor, delta as i64),
            DisplayMode::Month => shift_month(first_of_month(anchor), delta),
        };
        let Some(target) = target.filter(|date| config.calendar.week_dates(*date).is_some()) else {
            log::warn!("{}", CalendarError::DateOutOfRange);
            return false;
        };

        if delta < 0 && !config.past_dates_enabled {
            let today = config.calendar.today();
            if grid::is_before_current_period(self.display_mode, target, today, &config.calendar) {
                log::debug!("Past dates disabled; not moving before the current {}", self.display_mode);
                return false;
            }
        }

        self.anchor = Some(target);
        true
    }
}

/// Navigation bar button pressed during a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavAction {
    Previous,
    Next,
    Today,
    Mode(DisplayMode),
}
