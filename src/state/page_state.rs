use std::collections::VecDeque;
use std::time::Instant;

use log::{debug, info};

use crate::state::cell_store::{Cell, CellStore};
use crate::state::config::PageConfig;
use crate::state::geometry::{self, GridPoint, GridRect, PixelPoint};
use crate::state::input::{KeyCode, KeyInput, PointerButton, PointerInput};
use crate::state::selection::{Mode, Selection};
use crate::state::sizer;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    None,
    /// Selection end follows the pointer; start stays anchored.
    AreaSelect,
    /// Cell `id` follows the pointer, keeping `grab` (pointer minus cell origin) fixed.
    CellMove { id: String, grab: (i64, i64) },
}

impl DragState {
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Input held back until the pending text measurement arrives.
#[derive(Clone, Debug, PartialEq)]
enum DeferredInput {
    PointerDown(PointerInput),
    PointerMove(PixelPoint),
    PointerUp,
    PointerLeave,
    Key(KeyInput),
}

/// Interaction state for one page: the cells plus everything the user is
/// currently pointing at, selecting or typing.
///
/// All input goes through [`PageState::pointer_down`], [`PageState::pointer_move`],
/// [`PageState::pointer_up`], [`PageState::key_down`] and the insert text
/// setters. Renderers only read.
///
/// Text edits are measured asynchronously. While a measurement is
/// outstanding, pointer presses and keys are queued and replayed in order
/// once [`PageState::fit_insert_span`] reports the width, so every event
/// sees the span as it would after a synchronous measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    config: PageConfig,
    cells: CellStore,
    selection: Selection,
    cursor: GridPoint,
    mode: Mode,
    drag: DragState,
    insert_value: String,
    screen_offset: PixelPoint,
    pointer: Option<GridPoint>,
    last_pointer_down: Option<Instant>,
    /// Text whose width has been requested but not yet reported.
    measuring: Option<String>,
    deferred: VecDeque<DeferredInput>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PageConfig::default())
    }
}

impl PageState {
    pub fn new(config: PageConfig) -> Self {
        Self::with_cells(config, CellStore::new())
    }

    pub fn with_cells(config: PageConfig, cells: CellStore) -> Self {
        Self {
            config,
            cells,
            selection: Selection::default(),
            cursor: GridPoint::default(),
            mode: Mode::Select,
            drag: DragState::None,
            insert_value: String::new(),
            screen_offset: PixelPoint::default(),
            pointer: None,
            last_pointer_down: None,
            measuring: None,
            deferred: VecDeque::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn cells(&self) -> &CellStore {
        &self.cells
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn bounds(&self) -> GridRect {
        self.selection.bounds()
    }

    pub fn cursor(&self) -> GridPoint {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn insert_value(&self) -> &str {
        &self.insert_value
    }

    /// True while the width of the pending text is still being measured.
    pub fn is_measuring(&self) -> bool {
        self.measuring.is_some()
    }

    pub fn screen_offset(&self) -> PixelPoint {
        self.screen_offset
    }

    /// Grid point under the live pointer, if the pointer is over the page.
    pub fn pointer(&self) -> Option<GridPoint> {
        self.pointer
    }

    /// Largest cell under the live pointer.
    pub fn hovering_cell(&self) -> Option<&str> {
        self.pointer.and_then(|point| self.cells.largest_at(point))
    }

    /// Largest cell under the cursor.
    pub fn cursor_hovering_cell(&self) -> Option<&str> {
        self.cells.largest_at(self.cursor)
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.hovering_cell() == Some(id) || self.cursor_hovering_cell() == Some(id)
    }

    /// Stores the scroll offset, rounded to whole cells.
    pub fn set_scroll_offset(&mut self, raw: PixelPoint) {
        self.screen_offset = geometry::snap_offset(raw, self.config.grid_size);
    }

    pub fn grid_point_at(&self, pixel: PixelPoint) -> GridPoint {
        geometry::to_grid(pixel, self.screen_offset, self.config.grid_size)
    }

    pub fn pointer_down(&mut self, input: PointerInput) {
        if input.button != PointerButton::Primary {
            return;
        }
        if self.measuring.is_some() {
            self.deferred.push_back(DeferredInput::PointerDown(input));
            return;
        }

        let point = self.grid_point_at(input.position);
        self.pointer = Some(point);

        let window = self.config.double_click_window();
        let double_click = self
            .last_pointer_down
            .is_some_and(|last| input.at.saturating_duration_since(last) < window);

        if double_click && point == self.cursor && self.cells.smallest_at(point).is_none() {
            self.begin_insert_at(point);
        } else if self.mode == Mode::Insert && self.selection.bounds().contains_point(point) {
            // Clicking inside the span being typed keeps the pending text.
        } else if self.mode == Mode::Insert {
            self.commit_insert();
            self.cursor = point;
            self.selection.collapse_to(point);
            self.set_mode(Mode::Select);
        } else {
            self.begin_drag(point);
        }

        self.last_pointer_down = Some(input.at);
    }

    pub fn pointer_move(&mut self, position: PixelPoint) {
        if !self.deferred.is_empty() {
            self.deferred.push_back(DeferredInput::PointerMove(position));
            return;
        }
        let point = self.grid_point_at(position);
        self.pointer = Some(point);

        match &self.drag {
            DragState::None => {}
            DragState::AreaSelect => {
                self.cursor = point;
                self.selection.end = point;
            }
            DragState::CellMove { id, grab } => {
                let id = id.clone();
                let origin = point.offset(-grab.0, -grab.1);
                if !self.cells.move_to(&id, origin, true) {
                    self.drag = DragState::None;
                    return;
                }
                self.cursor = point;
                if let Some(cell) = self.cells.get(&id) {
                    self.selection.snap_to(cell.bounds());
                }
            }
        }
    }

    pub fn pointer_up(&mut self) {
        if !self.deferred.is_empty() {
            self.deferred.push_back(DeferredInput::PointerUp);
            return;
        }
        if let DragState::CellMove { id, .. } = &self.drag {
            debug!("finished moving cell '{id}'");
        }
        self.drag = DragState::None;
    }

    /// Pointer left the page: ends any drag and clears hover.
    pub fn pointer_leave(&mut self) {
        if !self.deferred.is_empty() {
            self.deferred.push_back(DeferredInput::PointerLeave);
            return;
        }
        self.pointer_up();
        self.pointer = None;
    }

    /// Routes a key press. Returns `true` when the key was consumed; a key
    /// queued behind a measurement counts as consumed.
    pub fn key_down(&mut self, input: &KeyInput) -> bool {
        if self.measuring.is_some() {
            self.deferred.push_back(DeferredInput::Key(input.clone()));
            return true;
        }
        match self.mode {
            Mode::Select => self.select_mode_key(input),
            Mode::Insert => self.insert_mode_key(input),
        }
    }

    /// Replaces the pending insert text and marks it as awaiting measurement.
    ///
    /// Returns `true` when the caller must measure `text` and report back
    /// through [`PageState::fit_insert_span`]. Edits are refused outside
    /// insert mode and once input is queued behind a measurement, since that
    /// input may already have committed or abandoned the text.
    pub fn set_insert_text(&mut self, text: impl Into<String>) -> bool {
        if self.mode != Mode::Insert || !self.deferred.is_empty() {
            return false;
        }
        let text = text.into();
        self.measuring = Some(text.clone());
        self.insert_value = text;
        true
    }

    /// Resizes the insert span for `text` measuring `width` pixels, then
    /// replays any input queued while the measurement was outstanding.
    ///
    /// Measurements for text that is no longer pending are dropped and
    /// `false` is returned. A missing width counts as zero.
    pub fn fit_insert_span(&mut self, text: &str, width: Option<f64>) -> bool {
        if self.mode != Mode::Insert || self.measuring.as_deref() != Some(text) {
            return false;
        }
        self.measuring = None;

        let width = sizer::sanitize_width(width);
        self.selection.end = sizer::span_end(
            self.selection.start,
            width,
            self.config.insert_padding,
            self.config.grid_size.width,
        );

        let queued = std::mem::take(&mut self.deferred);
        if !queued.is_empty() {
            debug!("replaying {} input(s) held during measurement", queued.len());
        }
        for input in queued {
            match input {
                DeferredInput::PointerDown(input) => self.pointer_down(input),
                DeferredInput::PointerMove(position) => self.pointer_move(position),
                DeferredInput::PointerUp => self.pointer_up(),
                DeferredInput::PointerLeave => self.pointer_leave(),
                DeferredInput::Key(input) => {
                    self.key_down(&input);
                }
            }
        }
        true
    }

    fn select_mode_key(&mut self, input: &KeyInput) -> bool {
        if input.key == KeyCode::Char('i') {
            self.insert_value.clear();
            self.drag = DragState::None;
            self.selection.end = self.selection.start;
            self.set_mode(Mode::Insert);
            return true;
        }

        if let Some((dx, dy)) = input.key.movement() {
            self.move_by(dx, dy, input);
            return true;
        }

        if matches!(input.key, KeyCode::Backspace | KeyCode::Delete) {
            let removed = self.cells.delete_contained(self.selection.bounds());
            if !removed.is_empty() {
                info!("deleted {} cell(s): {}", removed.len(), removed.join(", "));
            }
            return true;
        }

        false
    }

    fn insert_mode_key(&mut self, input: &KeyInput) -> bool {
        match input.key {
            KeyCode::Escape => {
                self.insert_value.clear();
                self.set_mode(Mode::Select);
                true
            }
            KeyCode::Enter => {
                let anchor = self.selection.start;
                self.commit_insert();
                self.cursor = anchor;
                self.selection.collapse_to(anchor);
                self.set_mode(Mode::Select);
                true
            }
            _ => false,
        }
    }

    /// Shift extends the selection, ctrl carries the cell under the cursor,
    /// otherwise the cursor steps and snaps into any cell it lands on.
    fn move_by(&mut self, dx: i64, dy: i64, input: &KeyInput) {
        if input.shift {
            self.cursor = self.cursor.offset(dx, dy);
            self.selection.end = self.selection.end.offset(dx, dy);
            return;
        }

        if input.ctrl {
            if let Some(id) = self.cells.largest_at(self.cursor).map(str::to_owned) {
                self.cells.translate(&id, dx, dy, true);
                self.cursor = self.cursor.offset(dx, dy);
                self.selection.shift(dx, dy);
                debug!("moved cell '{id}' by ({dx}, {dy})");
                return;
            }
        }

        let destination = self.cursor.offset(dx, dy);
        self.cursor = destination;
        match self.cell_bounds(self.cells.smallest_at(destination)) {
            Some(bounds) => self.selection.snap_to(bounds),
            None => self.selection.collapse_to(destination),
        }
    }

    fn begin_insert_at(&mut self, point: GridPoint) {
        self.drag = DragState::None;
        self.insert_value.clear();
        self.cursor = point;
        self.selection.collapse_to(point);
        self.set_mode(Mode::Insert);
    }

    fn begin_drag(&mut self, point: GridPoint) {
        self.cursor = point;

        let hit = self.cell_bounds(self.cells.smallest_at(point));
        let target = self
            .cells
            .largest_at(point)
            .and_then(|id| self.cells.get(id).map(|cell| (id.to_owned(), cell.pos)));

        match (hit, target) {
            (Some(hit), Some((id, origin))) => {
                self.selection.snap_to(hit);
                let grab = origin.delta_to(point);
                debug!("grabbed cell '{id}' at offset {grab:?}");
                self.drag = DragState::CellMove { id, grab };
            }
            _ => {
                self.selection.collapse_to(point);
                self.drag = DragState::AreaSelect;
            }
        }
    }

    /// Creates a cell from the pending text over the current selection.
    fn commit_insert(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.insert_value);
        if text.is_empty() {
            return None;
        }

        let bounds = self.selection.bounds();
        let id = self.cells.next_id();
        self.cells.insert(id.clone(), Cell::covering(bounds, text));
        info!(
            "created cell '{id}' at ({}, {}) spanning {}x{}",
            bounds.left,
            bounds.top,
            bounds.width(),
            bounds.height()
        );
        Some(id)
    }

    fn cell_bounds(&self, id: Option<&str>) -> Option<GridRect> {
        id.and_then(|id| self.cells.get(id)).map(Cell::bounds)
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            debug!("mode {} -> {}", self.mode.label(), mode.label());
        }
        self.mode = mode;
    }
}
