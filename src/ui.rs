use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

use crate::notice::{Notice, NoticeKind};
use crate::screen::{QuoteScreen, ViewState};
use crate::worker::ScreenCommand;

const TOAST_SECONDS: f32 = 2.5;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);
const ACCENT: egui::Color32 = egui::Color32::from_rgb(79, 70, 229);
const ACCENT_LIGHT: egui::Color32 = egui::Color32::from_rgb(129, 140, 248);

#[derive(Resource)]
pub struct ScreenChannel {
    pub tx: UnboundedSender<ScreenCommand>,
    pub rx: Mutex<UnboundedReceiver<Notice>>,
    pub screen: Arc<QuoteScreen>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub text: String,
    pub remaining: f32,
}

/// Notices waiting to be drawn. Modals queue up, a new toast replaces the old one.
#[derive(Resource, Default, Debug)]
pub struct NoticeState {
    modals: VecDeque<Notice>,
    toast: Option<Toast>,
}

impl NoticeState {
    pub fn push(&mut self, notice: Notice) {
        match notice.kind {
            NoticeKind::Modal => self.modals.push_back(notice),
            NoticeKind::Toast => {
                self.toast = Some(Toast {
                    text: notice.body,
                    remaining: TOAST_SECONDS,
                })
            }
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if let Some(toast) = &mut self.toast {
            toast.remaining -= dt;
            if toast.remaining <= 0.0 {
                self.toast = None;
            }
        }
    }

    pub fn current_modal(&self) -> Option<&Notice> {
        self.modals.front()
    }

    pub fn dismiss(&mut self) {
        self.modals.pop_front();
    }

    pub fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<NoticeState>()
            .insert_resource(ClearColor(Color::rgb_u8(29, 78, 216)))
            .add_systems(Startup, (spawn_camera, configure_egui))
            .add_systems(Update, (receive_notices, quote_ui_system).chain());
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}

fn configure_egui(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.window_rounding = egui::Rounding::same(8.0);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}

fn receive_notices(
    time: Res<Time>,
    mut notices: ResMut<NoticeState>,
    channel: Option<Res<ScreenChannel>>,
) {
    if let Some(chan) = &channel {
        if let Ok(mut rx) = chan.rx.try_lock() {
            while let Ok(notice) = rx.try_recv() {
                notices.push(notice);
            }
        }
    }
    notices.tick(time.delta_seconds());
}

fn quote_ui_system(
    mut contexts: EguiContexts,
    mut notices: ResMut<NoticeState>,
    channel: Option<Res<ScreenChannel>>,
) {
    let Some(chan) = channel else {
        return;
    };
    let view = chan.screen.snapshot();
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(BACKGROUND))
        .show(ctx, |ui| {
            ui.add_space(ui.available_height() * 0.15);
            ui.vertical_centered(|ui| {
                let card_width = ui.available_width() * 0.9;
                egui::Frame::none()
                    .fill(egui::Color32::WHITE)
                    .rounding(egui::Rounding::same(12.0))
                    .inner_margin(egui::Margin::same(20.0))
                    .show(ui, |ui| {
                        ui.set_width(card_width - 40.0);
                        render_card(ui, &view, &chan.tx);
                    });
            });
        });

    // ===== Modal notices =====
    if let Some(notice) = notices.current_modal().cloned() {
        let mut dismissed = false;
        egui::Window::new(notice.title.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&notice.body);
                ui.add_space(6.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });
        if dismissed {
            notices.dismiss();
        }
    }

    // ===== Toast =====
    if let Some(toast) = notices.toast() {
        egui::Area::new(egui::Id::new("quote_toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(&toast.text);
                });
            });
    }
}

fn render_card(ui: &mut egui::Ui, view: &ViewState, tx: &UnboundedSender<ScreenCommand>) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Quote of the Day")
                .size(24.0)
                .strong()
                .color(egui::Color32::BLACK),
        );
    });
    ui.add_space(12.0);

    ui.label(egui::RichText::new("\u{201C}").size(28.0).color(egui::Color32::BLACK));
    ui.vertical_centered(|ui| {
        if view.is_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(egui::RichText::new("Loading ...").size(20.0));
            });
        } else {
            ui.label(
                egui::RichText::new(&view.quote)
                    .size(17.0)
                    .color(egui::Color32::BLACK),
            );
        }
    });
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        ui.label(egui::RichText::new("\u{201D}").size(28.0).color(egui::Color32::BLACK));
    });
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
        ui.label(
            egui::RichText::new(format!("--- {}", view.author))
                .italics()
                .size(16.0),
        );
    });

    ui.add_space(20.0);
    let new_quote = ui.add_sized(
        [ui.available_width(), 44.0],
        egui::Button::new(
            egui::RichText::new("New Quote")
                .size(16.0)
                .color(egui::Color32::WHITE),
        )
        .fill(ACCENT)
        .rounding(22.0),
    );
    if new_quote.clicked() {
        let _ = tx.send(ScreenCommand::NewQuote);
    }
    ui.add_space(20.0);

    // ===== Actions =====
    ui.columns(3, |columns| {
        let actions = [
            ("🔊", "Read aloud", ScreenCommand::Speak),
            ("📋", "Copy", ScreenCommand::Copy),
            ("🔗", "Share", ScreenCommand::Share),
        ];
        for (column, (icon, hint, command)) in columns.iter_mut().zip(actions) {
            column.vertical_centered(|ui| {
                let button = egui::Button::new(egui::RichText::new(icon).size(22.0).color(ACCENT))
                    .stroke(egui::Stroke::new(1.0, ACCENT_LIGHT))
                    .fill(egui::Color32::WHITE)
                    .rounding(24.0);
                if ui.add_sized([48.0, 48.0], button).on_hover_text(hint).clicked() {
                    let _ = tx.send(command);
                }
            });
        }
    });
}
