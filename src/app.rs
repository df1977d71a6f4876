use std::path::PathBuf;

use chrono::Utc;

use crate::config::ChartConfig;
use crate::model::sample::sample_tree;
use crate::model::timestamp::format_instant;
use crate::model::{visible_rows, JobState, Project, TimeWindow};
use crate::ui;

/// Host application around the Gantt modal.
pub struct DashboardApp {
    pub project: Project,
    pub file_path: Option<PathBuf>,

    // Modal state
    pub gantt_open: bool,
    pub gantt: ui::GanttModal,

    // Dialog state
    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_config(ChartConfig::load_or_default())
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self {
            project: Project::new("Sample Run", sample_tree()),
            file_path: None,
            gantt_open: false,
            gantt: ui::GanttModal::new(config),
            show_about: false,
            status_message: "Ready".to_string(),
        }
    }

    // --- File operations ---

    pub fn load_sample(&mut self) {
        self.project = Project::new("Sample Run", sample_tree());
        self.file_path = None;
        self.status_message = "Sample loaded".to_string();
    }

    pub fn open_tree(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Task Tree", &["json"])
            .pick_file()
        {
            match crate::io::load_tree(&path) {
                Ok(root) => {
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("Untitled")
                        .to_string();
                    let count = root.count();
                    self.project = Project::new(name, root);
                    self.file_path = Some(path);
                    self.status_message = format!("Loaded {} tasks", count);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to open task tree");
                    self.status_message = format!("Error loading: {}", e);
                }
            }
        }
    }

    pub fn save_tree(&mut self) {
        if let Some(path) = self.file_path.clone() {
            self.write_tree(&path);
        } else {
            self.save_tree_as();
        }
    }

    pub fn save_tree_as(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Task Tree", &["json"])
            .set_file_name(format!("{}.json", self.project.name))
            .save_file()
        {
            if self.write_tree(&path) {
                self.file_path = Some(path);
            }
        }
    }

    fn write_tree(&mut self, path: &std::path::Path) -> bool {
        match crate::io::save_tree(&self.project.root, path) {
            Ok(()) => {
                self.status_message = "Task tree saved".to_string();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to save task tree");
                self.status_message = format!("Error saving: {}", e);
                false
            }
        }
    }

    pub fn export_csv(&mut self) {
        let default_name = format!("{}.csv", self.project.name);
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name(default_name)
            .save_file()
        {
            match crate::io::export_csv(&self.project.root, &path) {
                Ok(count) => {
                    self.status_message = format!("Exported {} tasks to CSV", count);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "CSV export failed");
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    fn show_summary(&mut self, ui: &mut egui::Ui) {
        let root = &self.project.root;
        let window = TimeWindow::from_tree(root, Utc::now());
        let mut counts = [0usize; 4];
        for task in root.iter() {
            let slot = match task.job_state() {
                JobState::NotStarted => 0,
                JobState::InProgress => 1,
                JobState::Success => 2,
                JobState::Failed => 3,
            };
            counts[slot] += 1;
        }

        ui.add_space(12.0);
        ui.heading(egui::RichText::new(&root.name).strong());
        ui.label(
            egui::RichText::new(format!(
                "{} → {}",
                format_instant(window.start),
                format_instant(window.end)
            ))
            .color(ui::theme::TEXT_SECONDARY),
        );
        ui.add_space(8.0);

        egui::Grid::new("summary_grid")
            .num_columns(2)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label("Tasks");
                ui.label(root.count().to_string());
                ui.end_row();
                ui.label("Visible rows");
                ui.label(visible_rows(root).len().to_string());
                ui.end_row();
                for (state, count) in [
                    JobState::NotStarted,
                    JobState::InProgress,
                    JobState::Success,
                    JobState::Failed,
                ]
                .into_iter()
                .zip(counts)
                {
                    ui.label(
                        egui::RichText::new(state.label()).color(ui::theme::state_color(state)),
                    );
                    ui.label(count.to_string());
                    ui.end_row();
                }
            });

        ui.add_space(12.0);
        let btn = egui::Button::new(
            egui::RichText::new("Open Gantt Chart").color(egui::Color32::WHITE),
        )
        .fill(ui::theme::ACCENT)
        .rounding(egui::Rounding::same(5.0));
        if ui.add_sized([180.0, 30.0], btn).clicked() {
            self.gantt_open = true;
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl DashboardApp {
    /// One frame of the whole app.
    pub fn show(&mut self, ctx: &egui::Context) {
        ui::theme::apply_theme(ctx);

        // Handle keyboard shortcuts outside closures to avoid borrow issues
        let should_open = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::O));
        let should_save = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::S));
        let toggle_gantt = ctx.input(|i| i.modifiers.command && i.key_pressed(egui::Key::G));
        if should_open {
            self.open_tree();
        }
        if should_save {
            self.save_tree();
        }
        if toggle_gantt {
            self.gantt_open = !self.gantt_open;
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&self.status_message)
                        .size(11.0)
                        .color(ui::theme::TEXT_SECONDARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(format!("Tasks: {}", self.project.root.count()))
                            .size(10.5)
                            .color(ui::theme::TEXT_DIM),
                    );
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_summary(ui);
        });

        // The About dialog sits on top, so it gets the first look at Escape.
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }

        let mut closed = false;
        self.gantt
            .show(ctx, &mut self.project, &mut self.gantt_open, || closed = true);
        if closed {
            self.status_message = "Gantt chart closed".to_string();
        }
    }
}
