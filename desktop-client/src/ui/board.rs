use common::engine::{Cell, CellKind, Frame, Renderer};
use eframe::egui;

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 0, 0);
const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(93, 216, 228);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);
const HEAD_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 255, 120);
const OBSTACLE_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 120, 130);

fn kind_color(kind: CellKind) -> egui::Color32 {
    match kind {
        CellKind::Snake => SNAKE_COLOR,
        CellKind::Food => FOOD_COLOR,
        CellKind::Obstacle => OBSTACLE_COLOR,
    }
}

/// Owned copy of the last rendered frame, painted on every egui pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameSnapshot {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(Cell, CellKind)>,
    pub head: Option<Cell>,
    pub vacated: Option<Cell>,
    pub score: u32,
    pub best_score: u32,
    pub round: u32,
}

impl From<&Frame<'_>> for FrameSnapshot {
    fn from(frame: &Frame<'_>) -> Self {
        let cells = frame
            .drawables()
            .iter()
            .flat_map(|drawable| {
                let kind = drawable.kind();
                drawable.cells().into_iter().map(move |cell| (cell, kind))
            })
            .collect();

        Self {
            width: frame.grid.width(),
            height: frame.grid.height(),
            cells,
            head: Some(frame.snake.head()),
            vacated: frame.vacated,
            score: frame.score,
            best_score: frame.best_score,
            round: frame.round,
        }
    }
}

pub struct BoardView {
    cell_size: f32,
    snapshot: FrameSnapshot,
}

impl BoardView {
    pub fn new(cell_size_px: u32) -> Self {
        Self {
            cell_size: cell_size_px as f32,
            snapshot: FrameSnapshot::default(),
        }
    }

    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    pub fn board_size(&self) -> egui::Vec2 {
        egui::vec2(
            self.snapshot.width as f32 * self.cell_size,
            self.snapshot.height as f32 * self.cell_size,
        )
    }

    pub fn paint(&self, ui: &mut egui::Ui) {
        let (rect, _) = ui.allocate_exact_size(self.board_size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, BACKGROUND_COLOR);

        if let Some(vacated) = self.snapshot.vacated {
            painter.rect_filled(self.cell_rect(rect.min, vacated), 0.0, BACKGROUND_COLOR);
        }

        for &(cell, kind) in &self.snapshot.cells {
            let color = if kind == CellKind::Snake && Some(cell) == self.snapshot.head {
                HEAD_COLOR
            } else {
                kind_color(kind)
            };
            self.paint_cell(&painter, rect.min, cell, color);
        }
    }

    fn cell_rect(&self, origin: egui::Pos2, cell: Cell) -> egui::Rect {
        let min = origin + egui::vec2(cell.x as f32 * self.cell_size, cell.y as f32 * self.cell_size);
        egui::Rect::from_min_size(min, egui::vec2(self.cell_size, self.cell_size))
    }

    fn paint_cell(&self, painter: &egui::Painter, origin: egui::Pos2, cell: Cell, color: egui::Color32) {
        let rect = self.cell_rect(origin, cell);
        painter.rect_filled(rect, 0.0, BORDER_COLOR);
        painter.rect_filled(rect.shrink(1.0), 0.0, color);
    }
}

impl Renderer for BoardView {
    fn render(&mut self, frame: &Frame<'_>) {
        self.snapshot = FrameSnapshot::from(frame);
    }
}
