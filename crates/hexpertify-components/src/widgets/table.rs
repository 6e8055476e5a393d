//! Table widget for displaying records against column descriptors.
//!
//! A [`DataTable`] never owns or mutates its data. Each column decides how
//! its cells are produced: through a projection function when one is set,
//! otherwise by reading `row[key]` and falling back to [`NOT_AVAILABLE`]
//! for empty values.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crossterm::event::{MouseEvent, MouseEventKind};
use hexpertify_core::RowRecord;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use tracing::warn;

use crate::theme::Theme;

/// Text shown when the table has nothing to display.
pub const NO_DATA: &str = "No data available";

/// Text shown for a cell whose value is empty.
pub const NOT_AVAILABLE: &str = "N/A";

/// Rows between the top of the table area and the first body row: the
/// border and the header.
const BODY_OFFSET: u16 = 2;

/// Custom cell projection: `(row, column, row_index) -> cell`.
pub type CellRenderFn<R> = Arc<dyn Fn(&R, &TableColumn<R>, usize) -> TableCell + Send + Sync>;

/// A column descriptor.
pub struct TableColumn<R> {
    /// Unique identifier within the column list.
    pub id: String,
    /// Header label.
    pub title: String,
    /// Field read from the row when there is no projection.
    pub key: String,
    /// Column width constraint.
    pub width: Constraint,
    cell_render: Option<CellRenderFn<R>>,
}

impl<R> TableColumn<R> {
    /// Create a column that reads `key` from each row.
    pub fn new(id: impl Into<String>, title: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            key: key.into(),
            width: Constraint::Fill(1),
            cell_render: None,
        }
    }

    /// Use a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Constraint::Length(width);
        self
    }

    /// Use a minimum width (flexible).
    pub fn flex(mut self, min_width: u16) -> Self {
        self.width = Constraint::Min(min_width);
        self
    }

    /// Render this column's cells with a custom projection.
    pub fn cell_render<F>(mut self, render: F) -> Self
    where
        F: Fn(&R, &TableColumn<R>, usize) -> TableCell + Send + Sync + 'static,
    {
        self.cell_render = Some(Arc::new(render));
        self
    }
}

impl<R: RowRecord> TableColumn<R> {
    /// Produce the cell for `row` at `index`.
    pub fn project(&self, row: &R, index: usize) -> TableCell {
        if let Some(render) = &self.cell_render {
            return render(row, self, index);
        }

        match row.field(&self.key) {
            Some(value) if value.is_truthy() => TableCell::new(value.to_string()),
            _ => TableCell::new(NOT_AVAILABLE),
        }
    }
}

impl<R> Clone for TableColumn<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            key: self.key.clone(),
            width: self.width,
            cell_render: self.cell_render.clone(),
        }
    }
}

impl<R> fmt::Debug for TableColumn<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableColumn")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("key", &self.key)
            .field("width", &self.width)
            .field("cell_render", &self.cell_render.is_some())
            .finish()
    }
}

/// A cell in a table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Cell content.
    pub content: String,
    /// Optional cell style.
    pub style: Option<Style>,
}

impl TableCell {
    /// Create a new cell with content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            style: None,
        }
    }

    /// Set the cell style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the cell color.
    pub fn color(mut self, color: Color) -> Self {
        self.style = Some(Style::default().fg(color));
        self
    }

    /// Create a success-styled cell.
    pub fn success(content: impl Into<String>) -> Self {
        Self::new(content).color(Color::Green)
    }

    /// Create a muted-styled cell.
    pub fn muted(content: impl Into<String>) -> Self {
        Self::new(content).color(Color::DarkGray)
    }
}

impl From<&str> for TableCell {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for TableCell {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

/// Body of a projected table.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// No rows: one placeholder spanning `span` columns.
    Placeholder { span: usize },
    /// One entry per row, one cell per column.
    Rows(Vec<Vec<TableCell>>),
}

/// What a [`DataTable`] will draw, independent of the terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum TableModel {
    /// Columns or rows were absent.
    NoData,
    /// Header labels followed by the body.
    Grid { header: Vec<String>, body: TableBody },
}

impl TableModel {
    /// Number of body rows drawn, counting the placeholder row.
    pub fn body_row_count(&self) -> usize {
        match self {
            TableModel::NoData => 0,
            TableModel::Grid {
                body: TableBody::Placeholder { .. },
                ..
            } => 1,
            TableModel::Grid {
                body: TableBody::Rows(rows),
                ..
            } => rows.len(),
        }
    }
}

/// Pointer hover over table rows.
///
/// Purely visual: it only changes which row is highlighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableHover {
    hovered: Option<usize>,
}

impl TableHover {
    /// Currently hovered row index.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer entered row `index`.
    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    /// Pointer left the rows.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// Track a mouse event over a table drawn in `area` with `row_count`
    /// body rows.
    ///
    /// Returns true if the hovered row changed.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect, row_count: usize) -> bool {
        if !matches!(event.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
            return false;
        }

        let before = self.hovered;
        match row_at(area, row_count, event.column, event.row) {
            Some(index) => self.enter(index),
            None => self.leave(),
        }
        before != self.hovered
    }
}

/// Body row under the terminal position (`column`, `row`), if any.
fn row_at(area: Rect, row_count: usize, column: u16, row: u16) -> Option<usize> {
    let inner_left = area.x.saturating_add(1);
    let inner_right = area.right().saturating_sub(1);
    let body_top = area.y.saturating_add(BODY_OFFSET);
    let body_bottom = area.bottom().saturating_sub(1);

    if column < inner_left || column >= inner_right || row < body_top || row >= body_bottom {
        return None;
    }

    let index = usize::from(row - body_top);
    (index < row_count).then_some(index)
}

/// Table widget for displaying structured data.
pub struct DataTable<'a, R> {
    /// Table title.
    title: Option<String>,
    /// Column descriptors.
    columns: Option<&'a [TableColumn<R>]>,
    /// Row records.
    rows: Option<&'a [R]>,
    /// Row under the pointer.
    hovered: Option<usize>,
    /// Theme for styling.
    theme: Theme,
}

impl<'a, R: RowRecord> DataTable<'a, R> {
    /// Create a table; `None` for either input renders the no-data message.
    pub fn new(columns: Option<&'a [TableColumn<R>]>, rows: Option<&'a [R]>) -> Self {
        Self {
            title: None,
            columns,
            rows,
            hovered: None,
            theme: Theme::default(),
        }
    }

    /// Set the table title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Highlight the row under the pointer.
    pub fn hover(mut self, hover: TableHover) -> Self {
        self.hovered = hover.hovered();
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Project the rows through the columns without drawing.
    pub fn project(&self) -> TableModel {
        let (Some(columns), Some(rows)) = (self.columns, self.rows) else {
            return TableModel::NoData;
        };

        if cfg!(debug_assertions) {
            let mut seen = HashSet::new();
            for column in columns {
                if !seen.insert(column.id.as_str()) {
                    warn!(id = %column.id, "Duplicate table column id");
                }
            }
        }

        let header = columns.iter().map(|c| c.title.clone()).collect();

        let body = if rows.is_empty() {
            TableBody::Placeholder {
                span: columns.len(),
            }
        } else {
            TableBody::Rows(
                rows.iter()
                    .enumerate()
                    .map(|(index, row)| columns.iter().map(|c| c.project(row, index)).collect())
                    .collect(),
            )
        };

        TableModel::Grid { header, body }
    }

    /// Render the table.
    pub fn render(self, frame: &mut Frame, area: Rect) {
        let model = self.project();

        let (header, body) = match model {
            TableModel::NoData => {
                let message = Paragraph::new(NO_DATA)
                    .style(self.theme.muted_style())
                    .alignment(Alignment::Center);
                frame.render_widget(message, area);
                return;
            }
            TableModel::Grid { header, body } => (header, body),
        };

        let widths: Vec<Constraint> = self
            .columns
            .unwrap_or_default()
            .iter()
            .map(|c| c.width)
            .collect();

        let header = Row::new(header.into_iter().map(Cell::from).collect::<Vec<_>>())
            .style(self.theme.header_style())
            .height(1);

        let title = self.title.unwrap_or_else(|| match &body {
            TableBody::Rows(rows) => format!(" {} items ", rows.len()),
            TableBody::Placeholder { .. } => " 0 items ".to_string(),
        });
        let block = Block::default().title(title).borders(Borders::ALL);

        match body {
            TableBody::Rows(rows) => {
                let rows: Vec<Row> = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, cells)| {
                        let cells: Vec<Cell> = cells
                            .into_iter()
                            .map(|cell| {
                                let c = Cell::from(cell.content);
                                if let Some(style) = cell.style {
                                    c.style(style)
                                } else {
                                    c
                                }
                            })
                            .collect();

                        let row_style = if self.hovered == Some(i) {
                            self.theme.hover_style()
                        } else {
                            Style::default()
                        };

                        Row::new(cells).style(row_style).height(1)
                    })
                    .collect();

                let table = Table::new(rows, widths).header(header).block(block);
                frame.render_widget(table, area);
            }
            TableBody::Placeholder { .. } => {
                // Cells cannot span columns, so the placeholder is drawn
                // across the full inner width below the header.
                let inner = block.inner(area);
                let table = Table::new(Vec::<Row>::new(), widths)
                    .header(header)
                    .block(block);
                frame.render_widget(table, area);

                if inner.height > 1 {
                    let placeholder_area = Rect::new(inner.x, inner.y + 1, inner.width, 1);
                    let placeholder = Paragraph::new(NO_DATA)
                        .style(self.theme.muted_style())
                        .alignment(Alignment::Center);
                    frame.render_widget(placeholder, placeholder_area);
                }
            }
        }
    }
}

impl<R> fmt::Debug for DataTable<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("title", &self.title)
            .field("columns", &self.columns)
            .field("rows", &self.rows.map(<[R]>::len))
            .field("hovered", &self.hovered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::testing::{contains, draw};
    use crossterm::event::{KeyModifiers, MouseButton};
    use serde_json::{json, Value};

    fn name_column() -> Vec<TableColumn<Value>> {
        vec![TableColumn::new("name", "Name", "name")]
    }

    fn cells(model: &TableModel) -> Vec<Vec<String>> {
        match model {
            TableModel::Grid {
                body: TableBody::Rows(rows),
                ..
            } => rows
                .iter()
                .map(|r| r.iter().map(|c| c.content.clone()).collect())
                .collect(),
            other => panic!("expected rows, got {:?}", other),
        }
    }

    fn moved(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_single_row_projection() {
        let columns = name_column();
        let rows = vec![json!({ "name": "Ada" })];
        let model = DataTable::new(Some(&columns), Some(&rows)).project();

        match &model {
            TableModel::Grid { header, .. } => assert_eq!(header, &vec!["Name".to_string()]),
            other => panic!("expected grid, got {:?}", other),
        }
        assert_eq!(cells(&model), vec![vec!["Ada".to_string()]]);
    }

    #[test]
    fn test_absent_inputs_render_no_data() {
        let columns = name_column();
        let rows = vec![json!({ "name": "Ada" })];

        assert_eq!(
            DataTable::<Value>::new(None, Some(&rows)).project(),
            TableModel::NoData
        );
        assert_eq!(
            DataTable::new(Some(&columns), None).project(),
            TableModel::NoData
        );
        assert_eq!(DataTable::<Value>::new(None, None).project(), TableModel::NoData);
    }

    #[test]
    fn test_empty_rows_give_one_placeholder_row() {
        let columns = vec![
            TableColumn::new("name", "Name", "name"),
            TableColumn::new("rate", "Rate", "rate"),
        ];
        let rows: Vec<Value> = Vec::new();
        let model = DataTable::new(Some(&columns), Some(&rows)).project();

        assert_eq!(model.body_row_count(), 1);
        assert!(matches!(
            model,
            TableModel::Grid {
                body: TableBody::Placeholder { span: 2 },
                ..
            }
        ));
    }

    #[test]
    fn test_body_row_count_matches_rows() {
        let columns = name_column();
        for n in 1..5 {
            let rows: Vec<Value> = (0..n).map(|i| json!({ "name": i.to_string() })).collect();
            let model = DataTable::new(Some(&columns), Some(&rows)).project();
            assert_eq!(model.body_row_count(), n);
        }
    }

    #[test]
    fn test_falsy_values_fall_back_to_na() {
        let columns = vec![TableColumn::new("v", "Value", "v")];
        let rows = vec![
            json!({ "v": "" }),
            json!({ "v": 0 }),
            json!({ "v": false }),
            json!({ "v": null }),
            json!({}),
            json!({ "v": 42 }),
            json!({ "v": true }),
        ];
        let model = DataTable::new(Some(&columns), Some(&rows)).project();
        let contents: Vec<String> = cells(&model).into_iter().flatten().collect();
        assert_eq!(
            contents,
            vec!["N/A", "N/A", "N/A", "N/A", "N/A", "42", "true"]
        );
    }

    #[test]
    fn test_cell_render_receives_row_column_and_index() {
        let columns = vec![
            TableColumn::new("idx", "#", "unused").cell_render(|row: &Value, column, index| {
                TableCell::new(format!("{}:{}:{}", column.id, index, row["name"]))
            }),
            // A projection wins even when it returns empty content.
            TableColumn::new("blank", "Blank", "name").cell_render(|_: &Value, _, _| TableCell::new("")),
        ];
        let rows = vec![json!({ "name": "a" }), json!({ "name": "b" })];
        let model = DataTable::new(Some(&columns), Some(&rows)).project();

        assert_eq!(
            cells(&model),
            vec![
                vec![r#"idx:0:"a""#.to_string(), String::new()],
                vec![r#"idx:1:"b""#.to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn test_render_header_and_cells() {
        let columns = name_column();
        let rows = vec![json!({ "name": "Ada" })];
        let lines = draw(20, 5, |frame| {
            let area = frame.area();
            DataTable::new(Some(&columns), Some(&rows)).render(frame, area)
        });

        assert!(lines[0].contains("1 items"));
        assert!(lines[1].contains("Name"));
        assert!(lines[2].contains("Ada"));
    }

    #[test]
    fn test_render_empty_rows_placeholder() {
        let columns = vec![
            TableColumn::new("name", "Name", "name"),
            TableColumn::new("rate", "Rate", "rate"),
        ];
        let rows: Vec<Value> = Vec::new();
        let lines = draw(30, 5, |frame| {
            let area = frame.area();
            DataTable::new(Some(&columns), Some(&rows)).render(frame, area)
        });

        assert!(lines[1].contains("Name") && lines[1].contains("Rate"));
        assert!(lines[2].contains(NO_DATA));
    }

    #[test]
    fn test_render_absent_only_shows_message() {
        let rows = vec![json!({ "name": "Ada" })];
        let lines = draw(30, 3, |frame| {
            let area = frame.area();
            DataTable::<Value>::new(None, Some(&rows)).render(frame, area)
        });

        assert!(contains(&lines, NO_DATA));
        assert!(!contains(&lines, "Ada"));
        assert!(!contains(&lines, "items"));
    }

    #[test]
    fn test_hover_tracks_mouse_over_rows() {
        let area = Rect::new(0, 0, 20, 6);
        let mut hover = TableHover::default();

        // Border and header rows are not body rows.
        assert!(!hover.handle_mouse(moved(5, 1), area, 3));
        assert_eq!(hover.hovered(), None);

        assert!(hover.handle_mouse(moved(5, 2), area, 3));
        assert_eq!(hover.hovered(), Some(0));

        assert!(hover.handle_mouse(moved(5, 4), area, 3));
        assert_eq!(hover.hovered(), Some(2));

        // Same row again is not a change.
        assert!(!hover.handle_mouse(moved(6, 4), area, 3));

        // Leaving through the side border clears it.
        assert!(hover.handle_mouse(moved(19, 4), area, 3));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_hover_ignores_rows_past_the_data() {
        let area = Rect::new(0, 0, 20, 10);
        let mut hover = TableHover::default();
        hover.handle_mouse(moved(3, 3), area, 1);
        assert_eq!(hover.hovered(), None);

        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..moved(3, 2)
        };
        assert!(!hover.handle_mouse(click, area, 1));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn test_hover_does_not_change_content() {
        let columns = name_column();
        let rows = vec![json!({ "name": "Ada" }), json!({ "name": "Grace" })];
        let mut hover = TableHover::default();
        let plain = DataTable::new(Some(&columns), Some(&rows)).project();
        hover.enter(1);
        let hovered = DataTable::new(Some(&columns), Some(&rows))
            .hover(hover)
            .project();
        assert_eq!(plain, hovered);
    }
}
