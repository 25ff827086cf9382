#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use std::path::PathBuf;
use tracing::{error, info};
use voltage_drop_calculator::{
    cable::{InstallationType, Material},
    calculator::{CalculationResult, RawInput},
    config::{self, DEFAULT_CONFIG_PATH},
    logging,
    report::{self, Indicator, ResultRenderer},
    units::{AreaUnit, LengthUnit},
};

const COLOR_AFFIRMATIVE: egui::Color32 = egui::Color32::from_rgb(0, 140, 0);
const COLOR_ALERT: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);

/// 케이블 전압강하 계산기 (GUI)
#[derive(Parser, Debug)]
#[command(name = "voltage_drop_calculator", version)]
struct GuiArgs {
    /// 설정 파일 경로
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 수준
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    let app_cfg = match config::load_or_default_from(&args.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Config error: {e}");
            config::Config::default()
        }
    };
    logging::init(args.log_level.as_deref().unwrap_or(&app_cfg.log_level));
    info!(config = %app_cfg.path().display(), "starting GUI");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([380.0, 420.0])
        .with_resizable(false)
        .with_transparent(true);
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Calculadora de Queda de Tensão",
        options,
        Box::new(move |_cc| Box::new(GuiApp::new(app_cfg))),
    )
}

/// 결과 라벨과 오류 대화상자 상태. 계산 모듈은 이 구조체를 통해서만 화면을 갱신한다.
#[derive(Default)]
struct FormOutput {
    result_text: String,
    indicator: Option<Indicator>,
    error: Option<(String, String)>,
}

impl ResultRenderer for FormOutput {
    fn show_result(&mut self, text: &str, indicator: Indicator) {
        self.result_text = text.to_string();
        self.indicator = Some(indicator);
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.error = Some((title.to_string(), message.to_string()));
    }
}

struct GuiApp {
    config: config::Config,
    form: RawInput,
    output: FormOutput,
    last_result: Option<CalculationResult>,
    window_alpha: f32,
    show_settings_modal: bool,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let form = RawInput {
            material: config.default_material,
            installation: config.default_installation,
            length_unit: config.default_length_unit,
            section_unit: config.default_section_unit,
            ..Default::default()
        };
        Self {
            window_alpha: config.window_alpha.clamp(0.3, 1.0),
            config,
            form,
            output: FormOutput::default(),
            last_result: None,
            show_settings_modal: false,
            settings_status: None,
        }
    }

    fn calculate(&mut self) {
        if let Some(result) = report::present(&self.form, &mut self.output) {
            self.last_result = Some(result);
        }
    }

    fn ui_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Tensão Nominal (V):");
                ui.text_edit_singleline(&mut self.form.voltage);
                ui.end_row();

                ui.label("Corrente da Carga (A):");
                ui.text_edit_singleline(&mut self.form.current);
                ui.end_row();

                ui.label("Comprimento do Cabo:");
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(&mut self.form.length).desired_width(100.0));
                    unit_combo(
                        ui,
                        "length_unit",
                        &mut self.form.length_unit,
                        &LengthUnit::ALL,
                        LengthUnit::symbol,
                    );
                });
                ui.end_row();

                ui.label("Material do Cabo:");
                unit_combo(
                    ui,
                    "material",
                    &mut self.form.material,
                    &Material::ALL,
                    Material::label,
                );
                ui.end_row();

                ui.label("Seção do Cabo:");
                ui.horizontal(|ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.form.cross_section)
                            .desired_width(100.0),
                    );
                    unit_combo(
                        ui,
                        "section_unit",
                        &mut self.form.section_unit,
                        &AreaUnit::ALL,
                        AreaUnit::symbol,
                    );
                });
                ui.end_row();

                ui.label("Tipo de Instalação:");
                unit_combo(
                    ui,
                    "installation",
                    &mut self.form.installation,
                    &InstallationType::ALL,
                    InstallationType::label,
                );
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("Calcular").clicked() {
                self.calculate();
            }
        });
        ui.add_space(12.0);

        if let Some(indicator) = self.output.indicator {
            let color = match indicator {
                Indicator::Affirmative => COLOR_AFFIRMATIVE,
                Indicator::Alert => COLOR_ALERT,
            };
            ui.label(egui::RichText::new(&self.output.result_text).color(color));
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let mut open = self.show_settings_modal;
        egui::Window::new("Configurações")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Material padrão:");
                    unit_combo(
                        ui,
                        "cfg_material",
                        &mut self.config.default_material,
                        &Material::ALL,
                        Material::label,
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("Instalação padrão:");
                    unit_combo(
                        ui,
                        "cfg_installation",
                        &mut self.config.default_installation,
                        &InstallationType::ALL,
                        InstallationType::label,
                    );
                });
                ui.add(egui::Slider::new(&mut self.window_alpha, 0.3..=1.0).text("Opacidade"));
                if ui.button("Salvar").clicked() {
                    self.config.window_alpha = self.window_alpha;
                    self.settings_status = Some(match self.config.save() {
                        Ok(()) => "Configurações salvas.".to_string(),
                        Err(e) => {
                            error!(error = %e, "failed to save config");
                            format!("Falha ao salvar: {e}")
                        }
                    });
                }
                if let Some(status) = &self.settings_status {
                    ui.small(status.as_str());
                }
            });
        self.show_settings_modal = open;
    }

    /// 입력 오류 대화상자. 닫기 전까지 폼 입력을 막는다.
    fn ui_error_dialog(&mut self, ctx: &egui::Context) {
        let Some((title, message)) = self.output.error.clone() else {
            return;
        };
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(message).color(COLOR_ALERT));
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.output.error = None;
                    }
                });
            });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let mut style = (*ctx.style()).clone();
        style.visuals.window_fill = style.visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = style.visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Queda de Tensão");
                ui.separator();
                if ui.button("Configurações").clicked() {
                    self.show_settings_modal = true;
                }
            });
        });

        let blocked = self.output.error.is_some();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| self.ui_form(ui));
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }
        self.ui_error_dialog(ctx);
    }
}

fn unit_combo<T: Copy + PartialEq>(
    ui: &mut egui::Ui,
    id: &str,
    value: &mut T,
    options: &[T],
    label: fn(&T) -> &'static str,
) {
    egui::ComboBox::from_id_source(id)
        .selected_text(label(value))
        .show_ui(ui, |ui| {
            for opt in options {
                ui.selectable_value(value, *opt, label(opt));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use voltage_drop_calculator::calculator::Compliance;

    fn filled_app() -> GuiApp {
        let mut app = GuiApp::new(config::Config::default());
        app.form.voltage = "220".into();
        app.form.current = "10".into();
        app.form.length = "20".into();
        app.form.cross_section = "2,5".into();
        app
    }

    #[test]
    fn form_starts_from_config_defaults() {
        let mut cfg = config::Config::default();
        cfg.default_material = Material::Aluminum;
        cfg.default_installation = InstallationType::ThreePhase;
        let app = GuiApp::new(cfg);
        assert_eq!(app.form.material, Material::Aluminum);
        assert_eq!(app.form.installation, InstallationType::ThreePhase);
        assert!(app.form.voltage.is_empty());
    }

    #[test]
    fn calculate_sets_affirmative_result() {
        let mut app = filled_app();
        app.calculate();
        assert_eq!(app.output.indicator, Some(Indicator::Affirmative));
        assert!(app.output.result_text.starts_with("Queda de tensão: 2.75 V"));
        assert_eq!(app.last_result.map(|r| r.compliance), Some(Compliance::Compliant));
        assert!(app.output.error.is_none());
    }

    #[test]
    fn error_keeps_previous_result_and_opens_dialog() {
        let mut app = filled_app();
        app.calculate();
        let before = app.output.result_text.clone();
        app.form.current.clear();
        app.calculate();
        assert_eq!(app.output.result_text, before);
        let (title, message) = app.output.error.clone().unwrap();
        assert_eq!(title, "Erro de Entrada");
        assert_eq!(message, "O campo 'Corrente' não pode estar vazio.");
    }

    #[test]
    fn long_run_turns_indicator_to_alert() {
        let mut app = filled_app();
        app.form.length = "200".into();
        app.calculate();
        assert_eq!(app.output.indicator, Some(Indicator::Alert));
        assert!(app.output.result_text.ends_with("(> 4%)."));
    }
}
