use std::collections::HashMap;
use std::ops::Range;

pub const MIN_COLUMN_WIDTH: f32 = 80.0;
pub const DEFAULT_COLUMN_WIDTH: f32 = 124.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResizeState {
    Idle,
    Resizing {
        column: usize,
        start_x: f32,
        start_width: f32,
    },
}

/// Per-column pixel widths plus the drag that may be adjusting one of them.
///
/// Columns are 0-based here. Widths are only written while a drag is active
/// and never drop below [`MIN_COLUMN_WIDTH`].
#[derive(Clone, Debug)]
pub struct ColumnResize {
    widths: HashMap<usize, f32>,
    default_width: f32,
    state: ResizeState,
}

impl ColumnResize {
    pub fn new(default_width: f32) -> Self {
        Self {
            widths: HashMap::new(),
            default_width: default_width.max(MIN_COLUMN_WIDTH),
            state: ResizeState::Idle,
        }
    }

    pub fn get_column_width(&self, column: usize) -> f32 {
        self.widths.get(&column).copied().unwrap_or(self.default_width)
    }

    /// Total width of a run of columns, used for headers spanning a group.
    pub fn span_width(&self, columns: Range<usize>) -> f32 {
        columns.map(|column| self.get_column_width(column)).sum()
    }

    pub fn resizing_column(&self) -> Option<usize> {
        match self.state {
            ResizeState::Resizing { column, .. } => Some(column),
            ResizeState::Idle => None,
        }
    }

    pub fn is_resizing(&self) -> bool {
        self.resizing_column().is_some()
    }

    /// Begin dragging `column` from pointer position `start_x`.
    /// A drag already in progress is abandoned.
    pub fn start_resize(&mut self, column: usize, start_x: f32) {
        if let Some(previous) = self.resizing_column() {
            log::debug!("abandoning resize of column {} for column {}", previous, column);
        }
        self.state = ResizeState::Resizing {
            column,
            start_x,
            start_width: self.get_column_width(column),
        };
    }

    /// Apply the pointer position of a drag. Returns the width written, if any.
    pub fn handle_resize(&mut self, current_x: f32) -> Option<f32> {
        let ResizeState::Resizing {
            column,
            start_x,
            start_width,
        } = self.state
        else {
            return None;
        };
        Some(self.set_column_width(column, start_width + (current_x - start_x)))
    }

    fn set_column_width(&mut self, column: usize, width: f32) -> f32 {
        let width = width.max(MIN_COLUMN_WIDTH);
        self.widths.insert(column, width);
        width
    }

    /// End the drag. Returns the column that was being resized.
    pub fn stop_resize(&mut self) -> Option<usize> {
        let column = self.resizing_column();
        self.state = ResizeState::Idle;
        column
    }
}

impl Default for ColumnResize {
    fn default() -> Self {
        Self::new(DEFAULT_COLUMN_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_columns_use_default() {
        let resize = ColumnResize::new(124.0);
        assert_eq!(resize.get_column_width(0), 124.0);
        assert_eq!(resize.get_column_width(42), 124.0);
        assert!(!resize.is_resizing());
    }

    #[test]
    fn shrinking_below_floor_clamps_to_80() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(3, 100.0);
        assert_eq!(resize.handle_resize(50.0), Some(80.0));
        resize.stop_resize();
        assert_eq!(resize.get_column_width(3), 80.0);
    }

    #[test]
    fn growing_has_no_upper_bound() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(0, 10.0);
        resize.handle_resize(5_010.0);
        assert_eq!(resize.get_column_width(0), 5_124.0);
    }

    #[test]
    fn only_net_delta_matters() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(2, 200.0);
        for x in [400.0, 20.0, -300.0, 260.0, 199.0, 236.0] {
            resize.handle_resize(x);
        }
        resize.stop_resize();
        assert_eq!(resize.get_column_width(2), 160.0);

        // Same net delta, ending below the floor.
        resize.start_resize(4, 200.0);
        for x in [900.0, 150.0] {
            resize.handle_resize(x);
        }
        resize.stop_resize();
        assert_eq!(resize.get_column_width(4), 80.0);
    }

    #[test]
    fn second_drag_starts_from_resized_width() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(1, 0.0);
        resize.handle_resize(26.0);
        resize.stop_resize();

        resize.start_resize(1, 500.0);
        assert_eq!(resize.resizing_column(), Some(1));
        assert_eq!(resize.handle_resize(450.0), Some(100.0));
        assert_eq!(resize.get_column_width(1), 100.0);
    }

    #[test]
    fn pointer_moves_while_idle_do_nothing() {
        let mut resize = ColumnResize::new(124.0);
        assert_eq!(resize.handle_resize(300.0), None);
        resize.start_resize(0, 0.0);
        assert_eq!(resize.stop_resize(), Some(0));
        assert_eq!(resize.handle_resize(300.0), None);
        assert_eq!(resize.get_column_width(0), 124.0);
    }

    #[test]
    fn only_targeted_column_changes() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(5, 0.0);
        resize.handle_resize(40.0);
        resize.stop_resize();
        for column in 0..10 {
            let expected = if column == 5 { 164.0 } else { 124.0 };
            assert_eq!(resize.get_column_width(column), expected);
        }
    }

    #[test]
    fn starting_a_new_drag_replaces_the_active_one() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(1, 0.0);
        resize.start_resize(2, 0.0);
        assert_eq!(resize.resizing_column(), Some(2));
        resize.handle_resize(10.0);
        assert_eq!(resize.get_column_width(1), 124.0);
        assert_eq!(resize.get_column_width(2), 134.0);
    }

    #[test]
    fn widths_are_written_only_during_a_drag() {
        let mut resize = ColumnResize::new(124.0);
        assert_eq!(resize.handle_resize(-500.0), None);
        resize.start_resize(0, 0.0);
        assert_eq!(resize.handle_resize(-500.0), Some(80.0));
        resize.stop_resize();
        assert_eq!(resize.handle_resize(900.0), None);
        assert_eq!(resize.get_column_width(0), 80.0);
    }

    #[test]
    fn default_below_floor_is_raised() {
        let resize = ColumnResize::new(10.0);
        assert_eq!(resize.get_column_width(0), MIN_COLUMN_WIDTH);
    }

    #[test]
    fn span_width_sums_columns() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(1, 0.0);
        resize.handle_resize(-24.0);
        resize.stop_resize();
        assert_eq!(resize.span_width(0..3), 348.0);
        assert_eq!(resize.span_width(3..3), 0.0);
    }

    #[test]
    fn press_and_release_without_moving_keeps_width() {
        let mut resize = ColumnResize::new(124.0);
        resize.start_resize(3, 410.0);
        assert_eq!(resize.stop_resize(), Some(3));
        assert!(!resize.is_resizing());
        assert_eq!(resize.handle_resize(10.0), None);
        assert_eq!(resize.get_column_width(3), 124.0);
        // A second release from the window listener is harmless.
        assert_eq!(resize.stop_resize(), None);
    }
}
