//! Main application for the Gomoku GUI

use std::sync::Arc;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::session::{GameStatus, Swap2Choice};
use crate::{RuleSet, Stone};

use super::board_view::BoardView;
use super::game_state::{seat_name, GameState};
use super::theme::*;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    /// Ruleset loaded from the command line, offered next to the presets
    custom_rules: Option<Arc<RuleSet>>,
}

impl GomokuApp {
    /// Create the app playing under `rules`
    pub fn new(_cc: &eframe::CreationContext<'_>, rules: Arc<RuleSet>) -> Self {
        let custom_rules = RuleSet::preset(rules.name())
            .is_none()
            .then(|| Arc::clone(&rules));
        Self {
            state: GameState::new(rules),
            board_view: BoardView::default(),
            custom_rules,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                    if ui.button("Resign").clicked() {
                        self.state.resign();
                        ui.close_menu();
                    }
                });

                ui.menu_button("Variant", |ui| {
                    for preset in RuleSet::presets() {
                        if ui.button(preset.name()).clicked() {
                            self.state.switch_rules(Arc::new(preset));
                            ui.close_menu();
                        }
                    }
                    if let Some(custom) = &self.custom_rules {
                        ui.separator();
                        if ui.button(custom.name()).clicked() {
                            self.state.switch_rules(Arc::clone(custom));
                            ui.close_menu();
                        }
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let rules = self.state.session.rules();
                    let size = rules.board_size();
                    ui.label(format!("{} - {}x{} - Hotseat", rules.name(), size, size));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(egui::Color32::from_rgb(25, 27, 31)))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                if self.state.session.pending_decision().is_some() {
                    self.render_choice_card(ui);
                    ui.add_space(10.0);
                }

                self.render_rules_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.state.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(egui::Color32::from_rgb(35, 38, 43))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let stone = self.state.stone_to_play();
            let (stone_char, accent, glyph) = match stone {
                Stone::White => ("○", egui::Color32::from_rgb(220, 220, 225), egui::Color32::from_rgb(30, 30, 35)),
                _ => ("●", egui::Color32::from_rgb(70, 70, 75), TEXT_PRIMARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(stone.label().to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    let color = if self.state.is_over() { WIN_HIGHLIGHT } else { TIMER_NORMAL };
                    ui.label(RichText::new(self.state.status_text()).size(12.0).color(color));
                });
            });
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let secs = self.state.move_timer.elapsed().as_secs_f32();
            let color = if secs < 30.0 {
                TIMER_NORMAL
            } else if secs < 60.0 {
                TIMER_WARNING
            } else {
                TIMER_CRITICAL
            };
            ui.label(RichText::new(format!("{:.1}s", secs)).size(24.0).color(color));

            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last move: {:.1}s", last.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Swap2 color choice buttons
    fn render_choice_card(&mut self, ui: &mut egui::Ui) {
        let Some(pending) = self.state.session.pending_decision() else {
            return;
        };
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SWAP2").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{} chooses", seat_name(pending.player)))
                    .size(12.0)
                    .color(TEXT_PRIMARY),
            );
            ui.add_space(6.0);
            ui.horizontal_wrapped(|ui| {
                for &choice in pending.choices {
                    let text = match choice {
                        Swap2Choice::TakeWhite => "Take white",
                        Swap2Choice::TakeBlack => "Take black",
                        Swap2Choice::PlaceTwo => "Place two",
                    };
                    if ui.button(text).clicked() {
                        self.state.choose(choice);
                    }
                }
            });
        });
    }

    /// Summary of the active ruleset
    fn render_rules_card(&self, ui: &mut egui::Ui) {
        let rules = self.state.session.rules();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("RULES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let mut lines = vec![format!("{} in a row", rules.win_length())];
            lines.push(if rules.allow_overlines() {
                "Overlines win".to_string()
            } else {
                "Overlines do not win".to_string()
            });
            if let Some(stone) = rules.restricted_player() {
                let names: Vec<&str> = rules.forbidden().iter().map(|r| r.name()).collect();
                lines.push(format!("{} forbidden: {}", stone, names.join(", ")));
            }
            if rules.requires_unblocked_win() {
                lines.push("Blocked fives do not win".to_string());
            }

            for line in lines {
                ui.label(RichText::new(line).size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(egui::Color32::from_rgb(50, 53, 58))
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                let button = |ui: &mut egui::Ui, text: &str| {
                    btn_frame
                        .show(ui, |ui| {
                            ui.add(
                                egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                                    .sense(egui::Sense::click()),
                            )
                            .clicked()
                        })
                        .inner
                };

                if button(ui, "↩ Undo") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if !self.state.is_over() && button(ui, "Resign") {
                    self.state.resign();
                }
            });

            ui.add_space(8.0);
            let moves = self.state.session.history().len();
            ui.label(RichText::new(format!("Move #{}", moves)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let headline = match self.state.session.status() {
            GameStatus::Drawn => "DRAW".to_string(),
            status => status
                .winner()
                .map_or_else(String::new, |p| format!("{} WINS!", seat_name(p).to_uppercase())),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(4.0);
                    ui.label(RichText::new(self.state.status_text()).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            let new_game = egui::Label::new(
                                RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                            )
                            .sense(egui::Sense::click());
                            if ui.add(new_game).clicked() {
                                self.state.reset();
                            }
                        });
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0).color(TEXT_ERROR));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let snapshot = self.state.session.serialize_board();
            let placing = self.state.session.pending_decision().is_none() && !self.state.is_over();
            let preview = if placing { self.state.stone_to_play() } else { Stone::Empty };

            let state = &self.state;
            let clicked = self
                .board_view
                .show(ui, &snapshot, preview, |pos| state.can_play(pos));

            if let Some(pos) = clicked {
                self.state.try_place_stone(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.state.undo();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep the move timer ticking
        if !self.state.is_over() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
