use common::engine::{RoundSummary, ScoreDisplay};
use common::log_debug;
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

/// Keeps the results of the most recent rounds for the side panel.
pub struct ScoreBoard {
    history: AllocRingBuffer<RoundSummary>,
}

impl ScoreBoard {
    pub fn new(history_size: usize) -> Self {
        Self {
            history: AllocRingBuffer::new(history_size.max(1)),
        }
    }

    pub fn last_round(&self) -> Option<&RoundSummary> {
        self.history.back()
    }

    pub fn recent(&self) -> Vec<RoundSummary> {
        let mut recent: Vec<RoundSummary> = self.history.iter().copied().collect();
        recent.reverse();
        recent
    }

    pub fn show(&self, ui: &mut egui::Ui, score: u32, best_score: u32, round: u32) {
        ui.heading(format!("Score: {}", score));
        ui.label(format!("Best: {}", best_score));
        ui.label(format!("Round: {}", round));
        ui.add_space(10.0);

        if let Some(last) = self.last_round() {
            ui.label(
                egui::RichText::new(format!(
                    "Round {}: {} ({})",
                    last.round,
                    last.final_score,
                    last.reason.describe()
                ))
                .color(egui::Color32::RED),
            );
            ui.add_space(10.0);
        }

        ui.separator();
        ui.label("Recent rounds");
        if self.history.is_empty() {
            ui.label(
                egui::RichText::new("No rounds finished yet...")
                    .italics()
                    .color(egui::Color32::GRAY),
            );
        } else {
            for summary in self.recent() {
                ui.label(format!("#{}: {}", summary.round, summary.final_score));
            }
        }
    }
}

impl ScoreDisplay for ScoreBoard {
    fn round_ended(&mut self, summary: &RoundSummary) {
        log_debug!("Recording round {} score {}", summary.round, summary.final_score);
        self.history.enqueue(*summary);
    }
}
