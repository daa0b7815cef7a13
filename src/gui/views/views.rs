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

use egui::{Button, CursorIcon, RichText, Stroke, Widget};

use crate::gui::Colors;

/// Common drawing helpers.
pub struct View;

impl View {
    /// Stroke around inactive widgets.
    pub fn default_stroke() -> Stroke {
        Stroke { width: 1.0, color: Colors::stroke() }
    }

    /// Draw button with provided fill color, callback is called on click.
    pub fn button(ui: &mut egui::Ui, text: String, fill: egui::Color32, action: impl FnOnce()) {
        ui.vertical_centered_justified(|ui| {
            // Disable expansion on click/hover.
            ui.style_mut().visuals.widgets.hovered.expansion = 0.0;
            ui.style_mut().visuals.widgets.active.expansion = 0.0;
            // Setup stroke colors.
            ui.visuals_mut().widgets.inactive.bg_stroke = Self::default_stroke();
            ui.visuals_mut().widgets.active.bg_stroke = Stroke::NONE;

            let button = Button::new(RichText::new(text).size(17.0).color(Colors::text(false)))
                .fill(fill);
            let resp = button.ui(ui).on_hover_cursor(CursorIcon::PointingHand);
            if resp.clicked() {
                (action)();
            }
        });
    }

    /// Draw sub-title text.
    pub fn sub_title(ui: &mut egui::Ui, text: String) {
        ui.label(RichText::new(text).size(16.0).color(Colors::gray()));
    }
}
