use lattice_core::coords::Vec2;

use crate::error::UiError;
use crate::node::{Node, NodeBase};
use crate::tree::{NodeId, RenderCtx};
use crate::widgets::boxes::{Boxes, Orientation};

/// Row-major two-dimensional container.
///
/// A grid owns its rows directly; each row is a horizontal [`Boxes`] whose
/// slot count is the grid's column count. Cells are addressed by
/// `(row, column)` through [`set_widget`](Self::set_widget). Both
/// dimensions only ever grow: [`set_rows`](Self::set_rows) and
/// [`set_columns`](Self::set_columns) below the current counts are logged
/// no-ops, and growth preserves existing occupants.
pub struct Grid {
    base: NodeBase,
    rows: Vec<Boxes>,
    columns: usize,
}

impl Grid {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NodeBase::new(name),
            rows: Vec::new(),
            columns: 0,
        }
    }

    /// Grow the row count to `rows`. Shrinking is unsupported and ignored.
    pub fn set_rows(&mut self, rows: usize) {
        if rows <= self.rows.len() {
            if rows < self.rows.len() {
                log::debug!(
                    "grid `{}`: ignoring set_rows({}) below current row count {}",
                    self.base.name(),
                    rows,
                    self.rows.len()
                );
            }
            return;
        }
        while self.rows.len() < rows {
            let mut row = Boxes::new(format!("row{}", self.rows.len()));
            row.set_orientation(Orientation::Horizontal);
            row.set_capacity(self.columns);
            self.rows.push(row);
        }
    }

    /// Grow the column count to `columns` across every row.
    pub fn set_columns(&mut self, columns: usize) {
        if columns <= self.columns {
            if columns < self.columns {
                log::debug!(
                    "grid `{}`: ignoring set_columns({}) below current column count {}",
                    self.base.name(),
                    columns,
                    self.columns
                );
            }
            return;
        }
        self.columns = columns;
        for row in &mut self.rows {
            row.set_capacity(columns);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Install a child into the cell at `(row, column)`, returning the
    /// displaced occupant if the cell was already populated.
    pub fn set_widget(
        &mut self,
        row: usize,
        column: usize,
        id: NodeId,
    ) -> Result<Option<NodeId>, UiError> {
        let rows = self.rows.len();
        let grid = self.base.name().to_string();
        match self.rows.get_mut(row) {
            Some(boxes) => boxes.set_widget(column, id),
            None => Err(UiError::RowOutOfRange { grid, row, rows }),
        }
    }

    pub fn widget_at(&self, row: usize, column: usize) -> Option<NodeId> {
        self.rows.get(row).and_then(|boxes| boxes.widget_at(column))
    }
}

impl Node for Grid {
    fn base(&self) -> &NodeBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut NodeBase {
        &mut self.base
    }

    fn render(
        &mut self,
        ctx: &mut RenderCtx<'_>,
        origin: Vec2,
        available: Vec2,
    ) -> Result<(), UiError> {
        let size = self.base.resolve(origin, available);

        ctx.backend.push_id(self.base.name());
        // Each row receives the full grid extent; the backend cursor is what
        // actually advances between rows.
        let mut walk = Ok(());
        for row in &mut self.rows {
            walk = row.render(ctx, origin, size);
            if walk.is_err() {
                break;
            }
        }
        // The grid's id scope must close even when a row walk fails.
        ctx.backend.pop_id();
        walk?;

        self.base.draw_border(ctx.backend);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeArena;
    use crate::widgets::Label;
    use lattice_core::backend::{Backend, DrawCmd, RecordingBackend, WindowFlags};

    fn render_grid(
        arena: &mut NodeArena,
        id: NodeId,
        available: Vec2,
    ) -> Result<RecordingBackend, UiError> {
        let mut backend = RecordingBackend::new(available);
        backend.new_frame();
        backend.begin_window("w", WindowFlags::default())?;
        let origin = backend.cursor_position();
        let result = arena.render(&mut backend, id, origin, available);
        backend.end_window();
        result.map(|()| backend)
    }

    #[test]
    fn dimensions_never_shrink() {
        let mut grid = Grid::new("g");
        grid.set_rows(3);
        grid.set_columns(2);
        grid.set_rows(1);
        grid.set_columns(1);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.columns(), 2);
    }

    #[test]
    fn growing_columns_preserves_occupants() {
        let mut arena = NodeArena::new();
        let child = arena.insert(Label::new("l"));
        let mut grid = Grid::new("g");
        grid.set_rows(1);
        grid.set_columns(1);
        grid.set_widget(0, 0, child).expect("in range");
        grid.set_columns(3);
        assert_eq!(grid.widget_at(0, 0), Some(child));
        assert_eq!(grid.widget_at(0, 2), None);
    }

    #[test]
    fn columns_set_before_rows_apply_to_new_rows() {
        let mut arena = NodeArena::new();
        let child = arena.insert(Label::new("l"));
        let mut grid = Grid::new("g");
        grid.set_columns(2);
        grid.set_rows(2);
        assert_eq!(grid.columns(), 2);
        grid.set_widget(1, 1, child).expect("in range");
        assert_eq!(grid.widget_at(1, 1), Some(child));
    }

    #[test]
    fn set_widget_rejects_out_of_range_rows() {
        let mut arena = NodeArena::new();
        let child = arena.insert(Label::new("l"));
        let mut grid = Grid::new("g");
        grid.set_rows(2);
        grid.set_columns(2);
        let err = grid.set_widget(2, 0, child).unwrap_err();
        assert!(matches!(err, UiError::RowOutOfRange { row: 2, rows: 2, .. }));
    }

    #[test]
    fn set_widget_rejects_out_of_range_columns() {
        let mut arena = NodeArena::new();
        let child = arena.insert(Label::new("l"));
        let mut grid = Grid::new("g");
        grid.set_rows(2);
        grid.set_columns(2);
        let err = grid.set_widget(0, 2, child).unwrap_err();
        assert!(matches!(
            err,
            UiError::SlotOutOfRange { slot: 2, capacity: 2, .. }
        ));
    }

    #[test]
    fn renders_only_populated_cells_when_fully_built() {
        // A 2x2 grid with one populated cell fails fast on the first hole,
        // so every cell is filled here and the single distinctive label is
        // checked for.
        let mut arena = NodeArena::new();
        let mut grid = Grid::new("g");
        grid.set_rows(2);
        grid.set_columns(2);
        for row in 0..2 {
            for col in 0..2 {
                let mut label = Label::new(format!("cell{row}{col}"));
                label.set_text(if (row, col) == (1, 1) { "target" } else { "." });
                let id = arena.insert(label);
                grid.set_widget(row, col, id).expect("in range");
            }
        }
        let id = arena.insert(grid);

        let backend =
            render_grid(&mut arena, id, Vec2::new(400.0, 300.0)).expect("render succeeds");
        let targets = backend
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { text, .. } if text == "target"))
            .count();
        assert_eq!(targets, 1);
    }

    #[test]
    fn an_unpopulated_cell_fails_the_frame() {
        let mut arena = NodeArena::new();
        let child = arena.insert(Label::new("l"));
        let mut grid = Grid::new("g");
        grid.set_rows(2);
        grid.set_columns(2);
        grid.set_widget(1, 1, child).expect("in range");
        let id = arena.insert(grid);

        let err = render_grid(&mut arena, id, Vec2::new(400.0, 300.0)).unwrap_err();
        assert!(matches!(err, UiError::EmptySlot { .. }));
    }

    #[test]
    fn a_failing_row_still_pops_the_grid_scope() {
        let mut arena = NodeArena::new();
        let mut grid = Grid::new("g");
        grid.set_rows(1);
        grid.set_columns(1);
        // Cell left empty, so the row walk fails.
        let id = arena.insert(grid);

        let mut backend = RecordingBackend::new(Vec2::new(400.0, 300.0));
        backend.new_frame();
        backend
            .begin_window("w", WindowFlags::default())
            .expect("window");
        let origin = backend.cursor_position();
        let avail = backend.available_content_size();
        assert!(arena.render(&mut backend, id, origin, avail).is_err());
        assert_eq!(backend.id_depth(), 0);
    }

    #[test]
    fn rows_stack_via_the_backend_cursor() {
        // Every row is handed the same rectangle; what separates rows on
        // screen is the backend cursor advancing past each closed region.
        let mut arena = NodeArena::new();
        let mut grid = Grid::new("g");
        grid.set_rows(2);
        grid.set_columns(1);
        for row in 0..2 {
            let mut label = Label::new(format!("cell{row}"));
            label.set_text("x");
            let id = arena.insert(label);
            grid.set_widget(row, 0, id).expect("in range");
        }
        let id = arena.insert(grid);

        let backend =
            render_grid(&mut arena, id, Vec2::new(400.0, 300.0)).expect("render succeeds");
        let origins: Vec<Vec2> = backend
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::BeginRegion { origin, .. } => Some(*origin),
                _ => None,
            })
            .collect();
        assert_eq!(origins.len(), 2);
        assert!(origins[1].y > origins[0].y);
    }
}
