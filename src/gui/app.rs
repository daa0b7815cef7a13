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

use egui::{Context, RawInput};

use crate::AppConfig;
use crate::gui::views::amount::FieldStyle;
use crate::gui::views::SendContent;

/// Application content.
pub struct App {
    /// Form to send coins.
    send_content: SendContent,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            send_content: SendContent::new(AppConfig::display_unit(), FieldStyle::from_theme()),
        }
    }

    /// Draw application content.
    pub fn ui(&mut self, ctx: &Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame {
                inner_margin: egui::Margin::same(16),
                fill: ctx.style().visuals.panel_fill,
                ..Default::default()
            })
            .show(ctx, |ui| {
                self.send_content.ui(ui, |unit| {
                    AppConfig::set_display_unit(unit);
                });
            });

        // Save window size on close.
        let (close, rect) = ctx.input(|i| {
            (i.viewport().close_requested(), i.viewport().inner_rect)
        });
        if close {
            if let Some(r) = rect {
                AppConfig::save_window_size(r.width(), r.height());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _: &mut eframe::Frame) {
        self.ui(ctx);
    }

    fn raw_input_hook(&mut self, ctx: &Context, raw_input: &mut RawInput) {
        self.send_content.tab_chain().on_raw_input(ctx, raw_input);
    }
}
