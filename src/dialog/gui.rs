//! Dialog window implemented with egui/eframe

use std::cell::RefCell;
use std::rc::Rc;

use eframe::NativeOptions;
use egui::{Color32, Key, RichText, ViewportBuilder, ViewportCommand};

use super::{ConfigDialog, DIALOG_TITLE, DialogError, DialogForm, DialogOutcome, Result};
use crate::types::Role;

const WINDOW_WIDTH: f32 = 360.0;
const WINDOW_HEIGHT: f32 = 200.0;
const COMBO_WIDTH: f32 = 180.0;
const ERROR_COLOR: Color32 = Color32::from_rgb(200, 0, 0);

/// Shows the role assignment form in a native window
#[derive(Debug, Default)]
pub struct EguiDialog;

impl EguiDialog {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    None,
    Confirm,
    Cancel,
}

/// Maps the Enter/Escape shortcuts to an action.
///
/// Keys pressed while a combo box popup is open belong to the popup.
fn shortcut_action(popup_open: bool, enter: bool, escape: bool) -> Action {
    if popup_open {
        Action::None
    } else if enter {
        Action::Confirm
    } else if escape {
        Action::Cancel
    } else {
        Action::None
    }
}

struct DialogApp {
    form: DialogForm,
    outcome: Rc<RefCell<Option<DialogOutcome>>>,
}

impl DialogApp {
    fn role_row(&mut self, ui: &mut egui::Ui, role: Role) {
        let color = if self.form.is_valid(role) {
            ui.visuals().text_color()
        } else {
            ERROR_COLOR
        };
        ui.colored_label(color, role.title());

        let mut selected = self.form.selection(role).to_owned();
        egui::ComboBox::from_id_salt(role.to_string())
            .width(COMBO_WIDTH)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for device in self.form.devices() {
                    ui.selectable_value(&mut selected, device.clone(), device.as_str());
                }
            });

        if selected != self.form.selection(role) {
            self.form.select(role, selected);
        }
    }

    fn confirm(&mut self, ctx: &egui::Context) {
        if let Ok(mapping) = self.form.commit() {
            log::info!("Screen assignment accepted: {}", mapping);
            *self.outcome.borrow_mut() = Some(DialogOutcome::Accepted(mapping));
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}

impl eframe::App for DialogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = Action::None;
        let popup_open = egui::Popup::is_any_open(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("role_grid")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    for role in Role::ASSIGNABLE {
                        self.role_row(ui, role);
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            if let Some(message) = self.form.error_message() {
                ui.colored_label(ERROR_COLOR, RichText::new(format!("Error: {message}")));
            } else {
                ui.label("");
            }

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    action = Action::Confirm;
                }
                if ui.button("Cancel").clicked() {
                    action = Action::Cancel;
                }
            });
        });

        let (enter, escape) =
            ctx.input(|i| (i.key_pressed(Key::Enter), i.key_pressed(Key::Escape)));
        let shortcut = shortcut_action(popup_open, enter, escape);
        if shortcut != Action::None {
            action = shortcut;
        }

        match action {
            Action::Confirm => self.confirm(ctx),
            Action::Cancel => {
                log::info!("Screen assignment cancelled");
                ctx.send_viewport_cmd(ViewportCommand::Close);
            }
            Action::None => {}
        }
    }
}

impl ConfigDialog for EguiDialog {
    fn show(&mut self, form: DialogForm) -> Result<DialogOutcome> {
        let outcome = Rc::new(RefCell::new(None));
        let app = DialogApp {
            form,
            outcome: Rc::clone(&outcome),
        };

        let options = NativeOptions {
            viewport: ViewportBuilder::default()
                .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
                .with_resizable(false)
                .with_title(DIALOG_TITLE),
            centered: true,
            ..Default::default()
        };

        eframe::run_native(DIALOG_TITLE, options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|err| DialogError::Gui(err.to_string()))?;

        // closing the window counts as cancel
        let outcome = outcome.borrow_mut().take();
        Ok(outcome.unwrap_or(DialogOutcome::Cancelled))
    }
}
