// Copyright 2025 The Bitraam Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[macro_use]
extern crate rust_i18n;

use eframe::NativeOptions;
use egui::{Context, Stroke};

pub use settings::AppConfig;
pub use settings::{ConfigError, Settings};

use crate::gui::{App, Colors};
use crate::gui::views::View;

i18n!("locales");

mod settings;
pub mod units;
pub mod gui;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// [`App`] setup for [`eframe`].
pub fn app_creator(app: App) -> eframe::AppCreator<'static> {
    Box::new(|cc| {
        // Setup visuals.
        setup_visuals(&cc.egui_ctx);
        // Return app instance.
        Ok(Box::new(app))
    })
}

/// Entry point to start ui with [`eframe`].
pub fn start(options: NativeOptions, app_creator: eframe::AppCreator) -> eframe::Result<()> {
    // Setup translations.
    setup_i18n();
    log::info!("Starting Bitraam GUI v{}", VERSION);
    // Launch graphical interface.
    eframe::run_native("Bitraam", options, app_creator)
}

/// Setup application [`egui::Style`] and [`egui::Visuals`].
pub fn setup_visuals(ctx: &Context) {
    let use_dark = AppConfig::dark_theme().unwrap_or(false);
    ctx.set_theme(if use_dark { egui::Theme::Dark } else { egui::Theme::Light });

    let mut style = (*ctx.style()).clone();
    // Setup selection.
    style.interaction.selectable_labels = false;
    // Setup spacing for buttons.
    style.spacing.button_padding = egui::vec2(12.0, 8.0);
    // Setup text sizes.
    style.text_styles.insert(egui::TextStyle::Heading, egui::FontId::proportional(19.0));
    style.text_styles.insert(egui::TextStyle::Body, egui::FontId::proportional(16.0));
    style.text_styles.insert(egui::TextStyle::Button, egui::FontId::proportional(17.0));
    ctx.set_style(style);

    let mut visuals = if use_dark {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    // Setup selection color.
    visuals.selection.stroke = Stroke { width: 1.0, color: Colors::text(false) };
    visuals.selection.bg_fill = Colors::gold();
    // Disable stroke around panels by default.
    visuals.widgets.noninteractive.bg_stroke = Stroke::NONE;
    // Setup stroke around inactive widgets.
    visuals.widgets.inactive.bg_stroke = View::default_stroke();
    ctx.set_visuals(visuals);
}

/// Setup translations.
fn setup_i18n() {
    // Set saved locale or get from system.
    if let Some(lang) = AppConfig::locale() {
        if rust_i18n::available_locales!().contains(&lang.as_str()) {
            rust_i18n::set_locale(lang.as_str());
            return;
        }
    }
    let locale = sys_locale::get_locale().unwrap_or(String::from(AppConfig::DEFAULT_LOCALE));
    let locale_str = locale.split("-").next().unwrap_or(AppConfig::DEFAULT_LOCALE);

    // Set best possible locale.
    if rust_i18n::available_locales!().contains(&locale_str) {
        rust_i18n::set_locale(locale_str);
    } else {
        rust_i18n::set_locale(AppConfig::DEFAULT_LOCALE);
    }
}
