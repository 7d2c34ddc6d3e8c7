pub const GRID_ROWS: usize = 25;
pub const GRID_COLS: usize = 10;

/// A 1-based cell coordinate. `(1, 1)` is the top-left data cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn origin() -> Self {
        Self::new(1, 1)
    }

    /// Convert to Excel-style cell reference (A1, B5, etc.)
    pub fn to_reference(&self) -> String {
        format!("{}{}", Self::col_to_letter(self.col), self.row)
    }

    /// Column letters for a 1-based column (1 -> A, 27 -> AA).
    pub fn col_to_letter(col: usize) -> String {
        let mut result = String::new();
        let mut n = col.max(1) - 1;
        loop {
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            if n < 26 {
                break;
            }
            n = n / 26 - 1;
        }
        result
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Edit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavState {
    Idle(CellPosition),
    Editing(CellPosition),
}

impl NavState {
    pub fn selected(&self) -> CellPosition {
        match *self {
            NavState::Idle(pos) | NavState::Editing(pos) => pos,
        }
    }
}

/// Keys the navigation machine understands. Everything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Tab,
    Other,
}

impl NavKey {
    /// Accepts both keystroke names (`up`, `enter`) and DOM key names (`ArrowUp`, `Enter`).
    pub fn from_key(key: &str) -> Self {
        match key {
            "up" | "ArrowUp" => NavKey::ArrowUp,
            "down" | "ArrowDown" => NavKey::ArrowDown,
            "left" | "ArrowLeft" => NavKey::ArrowLeft,
            "right" | "ArrowRight" => NavKey::ArrowRight,
            "enter" | "Enter" => NavKey::Enter,
            "escape" | "Escape" => NavKey::Escape,
            "tab" | "Tab" => NavKey::Tab,
            _ => NavKey::Other,
        }
    }
}

/// Whether the host should suppress its own handling of the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

/// Single-selection cursor over a fixed `total_rows x total_cols` grid.
#[derive(Clone, Debug)]
pub struct Navigation {
    total_rows: usize,
    total_cols: usize,
    state: NavState,
}

impl Navigation {
    pub fn new(total_rows: usize, total_cols: usize) -> Self {
        Self {
            total_rows: total_rows.max(1),
            total_cols: total_cols.max(1),
            state: NavState::Idle(CellPosition::origin()),
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn selected(&self) -> CellPosition {
        self.state.selected()
    }

    pub fn mode(&self) -> Mode {
        match self.state {
            NavState::Idle(_) => Mode::Normal,
            NavState::Editing(_) => Mode::Edit,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, NavState::Editing(_))
    }

    pub fn is_editing_cell(&self, pos: CellPosition) -> bool {
        self.state == NavState::Editing(pos)
    }

    pub fn extent(&self) -> (usize, usize) {
        (self.total_rows, self.total_cols)
    }

    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        match self.state {
            NavState::Editing(selected) => match key {
                NavKey::Escape => {
                    self.state = NavState::Idle(selected);
                    log::debug!("left edit mode at {}", selected.to_reference());
                    KeyOutcome::Handled
                }
                // Commit on Enter belongs to whoever owns the editor.
                _ => KeyOutcome::Ignored,
            },
            NavState::Idle(selected) => match key {
                NavKey::ArrowUp => self.move_by(-1, 0),
                NavKey::ArrowDown => self.move_by(1, 0),
                NavKey::ArrowLeft => self.move_by(0, -1),
                NavKey::ArrowRight => self.move_by(0, 1),
                NavKey::Tab => self.tab(),
                NavKey::Enter => {
                    self.state = NavState::Editing(selected);
                    log::debug!("entered edit mode at {}", selected.to_reference());
                    KeyOutcome::Handled
                }
                NavKey::Escape => KeyOutcome::Handled,
                NavKey::Other => KeyOutcome::Ignored,
            },
        }
    }

    /// Select a cell (clamped to the grid). Selection changes always leave edit mode.
    pub fn select(&mut self, pos: CellPosition) {
        let pos = self.clamp(pos);
        self.state = NavState::Idle(pos);
        log::debug!("selected {}", pos.to_reference());
    }

    pub fn set_editing(&mut self, editing: bool) {
        let selected = self.selected();
        self.state = if editing {
            NavState::Editing(selected)
        } else {
            NavState::Idle(selected)
        };
    }

    fn move_by(&mut self, delta_row: isize, delta_col: isize) -> KeyOutcome {
        let current = self.selected();
        let row = (current.row as isize + delta_row).clamp(1, self.total_rows as isize) as usize;
        let col = (current.col as isize + delta_col).clamp(1, self.total_cols as isize) as usize;
        self.state = NavState::Idle(CellPosition::new(row, col));
        KeyOutcome::Handled
    }

    fn tab(&mut self) -> KeyOutcome {
        let current = self.selected();
        let next = if current.col < self.total_cols {
            CellPosition::new(current.row, current.col + 1)
        } else {
            // Wraps to column 1 but stops advancing at the last row.
            CellPosition::new((current.row + 1).min(self.total_rows), 1)
        };
        self.state = NavState::Idle(next);
        KeyOutcome::Handled
    }

    fn clamp(&self, pos: CellPosition) -> CellPosition {
        CellPosition::new(
            pos.row.clamp(1, self.total_rows),
            pos.col.clamp(1, self.total_cols),
        )
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: [NavKey; 8] = [
        NavKey::ArrowUp,
        NavKey::ArrowDown,
        NavKey::ArrowLeft,
        NavKey::ArrowRight,
        NavKey::Enter,
        NavKey::Escape,
        NavKey::Tab,
        NavKey::Other,
    ];

    fn in_bounds(nav: &Navigation) -> bool {
        let (rows, cols) = nav.extent();
        let pos = nav.selected();
        (1..=rows).contains(&pos.row) && (1..=cols).contains(&pos.col)
    }

    #[test]
    fn starts_idle_at_origin() {
        let nav = Navigation::new(25, 10);
        assert_eq!(nav.state(), NavState::Idle(CellPosition::new(1, 1)));
        assert_eq!(nav.mode(), Mode::Normal);
    }

    #[test]
    fn arrow_down_clamps_at_last_row() {
        let mut nav = Navigation::new(25, 10);
        for _ in 0..30 {
            assert_eq!(nav.handle_key(NavKey::ArrowDown), KeyOutcome::Handled);
        }
        assert_eq!(nav.selected(), CellPosition::new(25, 1));
    }

    #[test]
    fn arrows_clamp_at_origin() {
        let mut nav = Navigation::new(25, 10);
        assert_eq!(nav.handle_key(NavKey::ArrowUp), KeyOutcome::Handled);
        assert_eq!(nav.handle_key(NavKey::ArrowLeft), KeyOutcome::Handled);
        assert_eq!(nav.selected(), CellPosition::origin());
    }

    #[test]
    fn arrow_sequences_stay_in_bounds() {
        // Pseudo-random walk over the arrow keys, including long runs into each edge.
        let arrows = [NavKey::ArrowUp, NavKey::ArrowDown, NavKey::ArrowLeft, NavKey::ArrowRight];
        let mut nav = Navigation::new(4, 3);
        let mut seed: u32 = 0x2545_f491;
        for _ in 0..5_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let key = arrows[(seed % 4) as usize];
            let repeat = (seed >> 8) % 7;
            for _ in 0..repeat {
                nav.handle_key(key);
                assert!(in_bounds(&nav), "left the grid at {:?}", nav.selected());
            }
        }
    }

    #[test]
    fn every_two_key_sequence_stays_in_bounds() {
        for first in ALL_KEYS {
            for second in ALL_KEYS {
                let mut nav = Navigation::new(2, 2);
                nav.handle_key(first);
                nav.handle_key(second);
                assert!(in_bounds(&nav));
            }
        }
    }

    #[test]
    fn tab_moves_right_within_row() {
        let mut nav = Navigation::new(25, 10);
        nav.handle_key(NavKey::Tab);
        assert_eq!(nav.selected(), CellPosition::new(1, 2));
    }

    #[test]
    fn tab_wraps_only_at_last_column() {
        let mut nav = Navigation::new(25, 10);
        nav.select(CellPosition::new(3, 9));
        nav.handle_key(NavKey::Tab);
        assert_eq!(nav.selected(), CellPosition::new(3, 10));
        nav.handle_key(NavKey::Tab);
        assert_eq!(nav.selected(), CellPosition::new(4, 1));
    }

    #[test]
    fn tab_at_bottom_right_stays_on_last_row() {
        let mut nav = Navigation::new(25, 10);
        nav.select(CellPosition::new(25, 10));
        assert_eq!(nav.handle_key(NavKey::Tab), KeyOutcome::Handled);
        assert_eq!(nav.selected(), CellPosition::new(25, 1));
    }

    #[test]
    fn enter_then_escape_keeps_selection() {
        let mut nav = Navigation::new(25, 10);
        nav.select(CellPosition::new(4, 7));
        assert_eq!(nav.handle_key(NavKey::Enter), KeyOutcome::Handled);
        assert_eq!(nav.state(), NavState::Editing(CellPosition::new(4, 7)));
        assert!(nav.is_editing_cell(CellPosition::new(4, 7)));
        assert!(!nav.is_editing_cell(CellPosition::new(4, 6)));

        assert_eq!(nav.handle_key(NavKey::Escape), KeyOutcome::Handled);
        assert_eq!(nav.state(), NavState::Idle(CellPosition::new(4, 7)));
    }

    #[test]
    fn editing_ignores_movement_keys() {
        let mut nav = Navigation::new(25, 10);
        nav.handle_key(NavKey::Enter);
        for key in [
            NavKey::ArrowUp,
            NavKey::ArrowDown,
            NavKey::ArrowLeft,
            NavKey::ArrowRight,
            NavKey::Tab,
            NavKey::Enter,
            NavKey::Other,
        ] {
            assert_eq!(nav.handle_key(key), KeyOutcome::Ignored);
            assert_eq!(nav.state(), NavState::Editing(CellPosition::origin()));
        }
    }

    #[test]
    fn escape_while_idle_is_a_no_op() {
        let mut nav = Navigation::new(25, 10);
        nav.select(CellPosition::new(2, 2));
        nav.handle_key(NavKey::Escape);
        assert_eq!(nav.state(), NavState::Idle(CellPosition::new(2, 2)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut nav = Navigation::new(25, 10);
        assert_eq!(nav.handle_key(NavKey::from_key("a")), KeyOutcome::Ignored);
        assert_eq!(nav.handle_key(NavKey::from_key("pageup")), KeyOutcome::Ignored);
        assert_eq!(nav.state(), NavState::Idle(CellPosition::origin()));
    }

    #[test]
    fn select_clamps_and_leaves_edit_mode() {
        let mut nav = Navigation::new(25, 10);
        nav.set_editing(true);
        nav.select(CellPosition::new(99, 0));
        assert_eq!(nav.state(), NavState::Idle(CellPosition::new(25, 1)));
    }

    #[test]
    fn key_names_map_from_both_conventions() {
        assert_eq!(NavKey::from_key("up"), NavKey::ArrowUp);
        assert_eq!(NavKey::from_key("ArrowUp"), NavKey::ArrowUp);
        assert_eq!(NavKey::from_key("tab"), NavKey::Tab);
        assert_eq!(NavKey::from_key("Escape"), NavKey::Escape);
        assert_eq!(NavKey::from_key("space"), NavKey::Other);
    }

    #[test]
    fn zero_extent_is_raised_to_one() {
        let mut nav = Navigation::new(0, 0);
        assert_eq!(nav.extent(), (1, 1));
        nav.handle_key(NavKey::Tab);
        assert_eq!(nav.selected(), CellPosition::origin());
    }

    #[test]
    fn references_are_one_based() {
        assert_eq!(CellPosition::new(1, 1).to_reference(), "A1");
        assert_eq!(CellPosition::new(25, 10).to_reference(), "J25");
        assert_eq!(CellPosition::col_to_letter(27), "AA");
    }
}
