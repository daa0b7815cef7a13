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

use egui::{Id, RichText, TextStyle, Widget};

use crate::gui::Colors;
use crate::gui::views::amount::{AmountField, FieldStyle};
use crate::gui::views::{TabChain, View};
use crate::units::{BitraamUnits, Unit};

/// Result of the last send attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SendStatus {
    /// Recipient address is empty.
    AddressEmpty,
    /// Entered amount is incorrect.
    AmountInvalid,
    /// Request is ready with amount in smallest units.
    Ready(i64),
}

/// Content to enter recipient and amount to send.
pub struct SendContent {
    /// Recipient address.
    address_edit: String,
    /// Recipient label.
    label_edit: String,
    /// Amount to send.
    amount: AmountField,
    /// Focus order of inputs.
    tab_chain: TabChain,
    /// Result of the last send attempt.
    status: Option<SendStatus>,
}

impl SendContent {
    /// Recipient address input identifier.
    const ADDRESS_ID: &'static str = "send_address";
    /// Recipient label input identifier.
    const LABEL_ID: &'static str = "send_label";

    /// Create new content showing amounts with provided unit.
    pub fn new(unit: Unit, style: FieldStyle) -> Self {
        let mut amount = AmountField::new(Id::new("send_amount"), BitraamUnits).with_style(style);
        amount.set_display_unit(unit);

        // Setup focus order: address, label, amount.
        let mut tab_chain = TabChain::default();
        let address_id = Id::new(Self::ADDRESS_ID);
        let label_id = Id::new(Self::LABEL_ID);
        tab_chain.set_tab_order(address_id, label_id);
        amount.setup_tab_chain(&mut tab_chain, Some(label_id));

        Self {
            address_edit: String::new(),
            label_edit: String::new(),
            amount,
            tab_chain,
            status: None,
        }
    }

    /// Get focus order of inputs.
    pub fn tab_chain(&self) -> &TabChain {
        &self.tab_chain
    }

    pub fn status(&self) -> Option<&SendStatus> {
        self.status.as_ref()
    }

    /// Draw content.
    pub fn ui(&mut self, ui: &mut egui::Ui, on_unit_change: impl FnOnce(Unit)) {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(t!("send.title")).size(19.0).color(Colors::text(false)));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(unit) = self.display_unit_ui(ui) {
                        self.amount.set_display_unit(unit);
                        on_unit_change(unit);
                    }
                    View::sub_title(ui, t!("send.display_unit"));
                });
            });
            ui.add_space(12.0);

            egui::Grid::new("send_grid")
                .num_columns(2)
                .spacing([12.0, 10.0])
                .show(ui, |ui| {
                    View::sub_title(ui, t!("send.pay_to"));
                    egui::TextEdit::singleline(&mut self.address_edit)
                        .id(Id::new(Self::ADDRESS_ID))
                        .hint_text(t!("send.pay_to_hint"))
                        .font(TextStyle::Body)
                        .desired_width(f32::INFINITY)
                        .ui(ui);
                    ui.end_row();

                    View::sub_title(ui, t!("send.label"));
                    egui::TextEdit::singleline(&mut self.label_edit)
                        .id(Id::new(Self::LABEL_ID))
                        .hint_text(t!("send.label_hint"))
                        .font(TextStyle::Body)
                        .desired_width(f32::INFINITY)
                        .ui(ui);
                    ui.end_row();

                    View::sub_title(ui, t!("send.amount"));
                    self.amount.ui(ui);
                    ui.end_row();
                });
            if self.amount.changed() {
                self.status = None;
            }
            ui.add_space(8.0);

            // Show result of the last send attempt.
            if let Some(status) = &self.status {
                let (text, color) = match status {
                    SendStatus::AddressEmpty => (t!("send.address_empty"), Colors::red()),
                    SendStatus::AmountInvalid => (t!("send.amount_invalid"), Colors::red()),
                    SendStatus::Ready(value) => {
                        let text = t!(
                            "send.ready",
                            "amount" => self.amount.text(),
                            "value" => value,
                            "address" => self.address_edit.trim()
                        );
                        (text, Colors::green())
                    }
                };
                ui.label(RichText::new(text).size(16.0).color(color));
                ui.add_space(8.0);
            }

            // Setup spacing between buttons.
            ui.spacing_mut().item_spacing = egui::Vec2::new(8.0, 0.0);
            ui.columns(2, |columns| {
                columns[0].vertical_centered_justified(|ui| {
                    View::button(ui, t!("send.clear"), Colors::white_or_black(false), || {
                        self.clear();
                    });
                });
                columns[1].vertical_centered_justified(|ui| {
                    View::button(ui, t!("send.send"), Colors::gold(), || {
                        self.on_send();
                    });
                });
            });
        });
    }

    /// Draw display unit selection, returns unit if it was changed.
    fn display_unit_ui(&self, ui: &mut egui::Ui) -> Option<Unit> {
        let current = self.amount.current_unit().unwrap_or_default();
        let mut selected = current;
        egui::ComboBox::from_id_salt("display_unit")
            .selected_text(BitraamUnits::name(current))
            .show_ui(ui, |ui| {
                for unit in Unit::VALUES {
                    ui.selectable_value(&mut selected, unit, BitraamUnits::name(unit))
                        .on_hover_text(BitraamUnits::description(unit));
                }
            });
        if selected != current {
            return Some(selected);
        }
        None
    }

    /// Check entered data and prepare request.
    pub fn on_send(&mut self) {
        let amount_valid = self.amount.validate();
        self.status = Some(if self.address_edit.trim().is_empty() {
            SendStatus::AddressEmpty
        } else if !amount_valid {
            SendStatus::AmountInvalid
        } else {
            match self.amount.value() {
                Some(value) => {
                    log::info!("send request prepared: {} to {}", value, self.address_edit.trim());
                    SendStatus::Ready(value)
                }
                None => SendStatus::AmountInvalid
            }
        });
    }

    /// Clear entered data.
    pub fn clear(&mut self) {
        self.address_edit.clear();
        self.label_edit.clear();
        self.amount.clear();
        self.status = None;
    }
}
