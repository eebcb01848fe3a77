use std::time::Instant;

use common::engine::{InputSource, Renderer, RoundController, TickOutcome};
use common::log;
use eframe::egui;

use crate::clock::FixedRateClock;
use crate::input::KeyboardInput;

use super::{BoardView, ScoreBoard};

const SIDE_PANEL_WIDTH: f32 = 180.0;

/// Glues the simulation to egui: the clock decides how many ticks run in a
/// frame, the keyboard feeds them, and the board and score board show the
/// result.
pub struct SnakeApp {
    controller: RoundController,
    clock: FixedRateClock,
    input: KeyboardInput,
    board: BoardView,
    score_board: ScoreBoard,
    closing: bool,
}

impl SnakeApp {
    pub fn new(
        controller: RoundController,
        clock: FixedRateClock,
        mut board: BoardView,
        score_board: ScoreBoard,
    ) -> Self {
        board.render(&controller.frame());
        Self {
            controller,
            clock,
            input: KeyboardInput::new(),
            board,
            score_board,
            closing: false,
        }
    }

    pub fn side_panel_width() -> f32 {
        SIDE_PANEL_WIDTH
    }

    fn advance(&mut self, ctx: &egui::Context) {
        self.input.collect(ctx);

        if self.input.take_pause_toggle() {
            self.clock.toggle_pause();
            log!(
                "Game {}",
                if self.clock.is_paused() { "paused" } else { "resumed" }
            );
        }
        if self.clock.is_paused() {
            self.input.discard_requests();
        }

        // A pending quit goes through one tick, which stops before moving.
        let ticks = if self.input.quit_requested() {
            1
        } else {
            self.clock.ticks_due(Instant::now())
        };
        for _ in 0..ticks {
            let outcome = self.controller.run_tick(
                &mut self.input,
                &mut self.board,
                &mut self.score_board,
            );
            if outcome == TickOutcome::Terminated {
                self.close(ctx);
                return;
            }
        }
    }

    fn close(&mut self, ctx: &egui::Context) {
        if self.closing {
            return;
        }
        self.closing = true;
        log!(
            "Exiting after round {} (best score {})",
            self.controller.round(),
            self.controller.best_score()
        );
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(ctx);
        if self.closing {
            return;
        }

        let snapshot = self.board.snapshot();
        let (score, best_score, round) = (snapshot.score, snapshot.best_score, snapshot.round);

        egui::SidePanel::right("score_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                self.score_board.show(ui, score, best_score, round);
                ui.add_space(20.0);
                if self.clock.is_paused() {
                    ui.label(egui::RichText::new("Paused").color(egui::Color32::YELLOW));
                }
                ui.label("Arrows / WASD: turn");
                ui.label("P / Space: pause");
                ui.label("Escape: quit");
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| self.board.paint(ui));
            });

        ctx.request_repaint_after(self.clock.until_next_tick());
    }
}
