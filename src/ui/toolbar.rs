use crate::app::DashboardApp;
use egui::{menu, RichText, Ui};

/// Render the top menu bar.
pub fn show_toolbar(app: &mut DashboardApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  "), |ui| {
            if ui.button("  Open Task Tree...   Ctrl+O").clicked() {
                app.open_tree();
                ui.close_menu();
            }
            if ui.button("  Load Sample").clicked() {
                app.load_sample();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Save          Ctrl+S").clicked() {
                app.save_tree();
                ui.close_menu();
            }
            if ui.button("  Save As...").clicked() {
                app.save_tree_as();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  View  "), |ui| {
            let label = if app.gantt_open {
                "  Close Gantt Chart"
            } else {
                "  Gantt Chart      Ctrl+G"
            };
            if ui.button(label).clicked() {
                app.gantt_open = !app.gantt_open;
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  "), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned project name
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let source = if app.file_path.is_some() { "" } else { " (sample)" };
            ui.label(
                RichText::new(format!("{}{}", app.project.name, source))
                    .size(11.0)
                    .weak(),
            );
        });
    });
}
