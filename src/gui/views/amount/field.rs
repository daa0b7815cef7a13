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

use rust_decimal::Decimal;

use crate::gui::views::amount::spin::parse_decimal;
use crate::gui::views::amount::{normalize_decimal_input, AmountSpinBox, FieldState, FieldStyle, UnitSelector};
use crate::gui::views::TabChain;
use crate::units::{Amount, BitraamUnits, UnitsProvider};

/// Amount input with unit selection.
///
/// Shown text is kept consistent with selected unit precision and bounds, value is available as
/// smallest unit amount.
pub struct AmountField<P: UnitsProvider = BitraamUnits> {
    /// Units conversion and bounds.
    units: P,
    /// Amount numeric input.
    amount: AmountSpinBox,
    /// Unit selection list.
    unit: UnitSelector<P::Unit>,
    /// Unit of the shown amount, not set until first unit change.
    current_unit: Option<P::Unit>,
    /// Visual state.
    state: FieldState,
    /// Look of the invalid input.
    style: FieldStyle,
    /// Flag to check if text was changed during last draw.
    changed: bool,
}

impl<P: UnitsProvider> AmountField<P> {
    /// Input step for most units.
    const DEFAULT_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 3);
    /// Input step for micro unit.
    const MICRO_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

    /// Create new amount input with the first unit selected.
    pub fn new(id: egui::Id, units: P) -> Self {
        let items = units.units();
        let mut field = Self {
            amount: AmountSpinBox::new(id.with("amount")),
            unit: UnitSelector::new(id.with("unit"), items),
            units,
            current_unit: None,
            state: FieldState::default(),
            style: FieldStyle::default(),
            changed: false,
        };
        let index = field.unit.current_index();
        field.unit_changed(index);
        field
    }

    /// Use provided look for the invalid input.
    pub fn with_style(mut self, style: FieldStyle) -> Self {
        self.style = style;
        self
    }

    /// Get entered text, empty when nothing was entered.
    pub fn text(&self) -> String {
        self.amount.text().to_string()
    }

    /// Show provided text, empty text clears the input.
    pub fn set_text(&mut self, text: &str) {
        if text.is_empty() {
            self.amount.clear();
        } else {
            self.amount.set_value(parse_decimal(text).unwrap_or(Decimal::ZERO));
        }
    }

    /// Clear the text and select the first unit.
    pub fn clear(&mut self) {
        self.amount.clear();
        if self.unit.set_current_index(0) {
            self.unit_changed(0);
        }
    }

    /// Check entered amount and mark the input as invalid on failure.
    pub fn validate(&mut self) -> bool {
        let valid = match self.current_unit {
            Some(unit) => {
                let value = self.amount.value();
                if value.is_zero() {
                    false
                } else if self.units.parse(unit, self.amount.text()).is_none() {
                    false
                } else {
                    value <= Decimal::from(self.units.max_amount(unit))
                }
            }
            None => false
        };
        log::debug!("amount {:?} validation: {}", self.amount.text(), valid);
        self.set_valid(valid);
        valid
    }

    /// Get entered amount in smallest units, `None` if text can not be parsed.
    pub fn value(&self) -> Option<Amount> {
        let unit = self.current_unit?;
        self.units.parse(unit, self.amount.text())
    }

    /// Show provided smallest units amount with current unit.
    pub fn set_value(&mut self, value: Amount) {
        if let Some(unit) = self.current_unit {
            let text = self.units.format(unit, value);
            self.set_text(text.as_str());
        }
    }

    /// Change unit to show amount with.
    pub fn set_display_unit(&mut self, unit: P::Unit) {
        if self.unit.set_value(unit) {
            let index = self.unit.current_index();
            self.unit_changed(index);
        }
    }

    /// Get unit of the shown amount.
    pub fn current_unit(&self) -> Option<P::Unit> {
        self.current_unit
    }

    /// Get description of selected unit.
    pub fn unit_tooltip(&self) -> &str {
        self.unit.tooltip()
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == FieldState::Valid
    }

    /// Check if text was changed during last draw.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Get identifier of the amount input.
    pub fn amount_id(&self) -> egui::Id {
        self.amount.id()
    }

    /// Put amount input after provided widget at focus order, returns amount input identifier.
    pub fn setup_tab_chain(&self, chain: &mut TabChain, prev: Option<egui::Id>) -> egui::Id {
        let id = self.amount.id();
        if let Some(prev) = prev {
            chain.set_tab_order(prev, id);
        }
        id
    }

    fn set_valid(&mut self, valid: bool) {
        self.state = if valid { FieldState::Valid } else { FieldState::Invalid };
    }

    /// Handle unit selection at provided index.
    fn unit_changed(&mut self, index: usize) {
        if let Some(tooltip) = self.unit.tooltip_at(index) {
            let tooltip = tooltip.to_string();
            self.unit.set_tooltip(tooltip);
        }
        let Some(new_unit) = self.unit.unit_at(index) else {
            return;
        };
        // Value is read before precision change to avoid truncation.
        let value = self.value();
        self.commit_unit(new_unit);
        match value {
            Some(v) => self.set_value(v),
            None => self.set_text(""),
        }
        self.set_valid(true);
        log::debug!("amount unit changed to {:?}, value: {:?}", new_unit, value);
    }

    /// Setup current unit with its precision, maximum and step.
    fn commit_unit(&mut self, unit: P::Unit) {
        self.current_unit = Some(unit);
        self.amount.set_decimals(self.units.decimals(unit));
        let maximum = max_shown_value(self.units.amount_digits(unit), self.amount.decimals());
        self.amount.set_maximum(maximum);
        let step = if unit == self.units.micro_unit() {
            Self::MICRO_STEP
        } else {
            Self::DEFAULT_STEP
        };
        self.amount.set_single_step(step);
    }

    /// Draw input content.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> egui::Response {
        let text_before = self.text();
        let resp = ui.horizontal(|ui| {
            // Replace decimal comma for focused input.
            let amount_id = self.amount.id();
            if ui.memory(|m| m.has_focus(amount_id)) {
                ui.input_mut(|i| normalize_decimal_input(&mut i.events));
            }
            let resp = self.amount.ui(ui, self.state, &self.style);
            if resp.gained_focus() {
                self.set_valid(true);
            }
            ui.add_space(8.0);
            if let Some(index) = self.unit.ui(ui) {
                self.unit_changed(index);
            }
            resp
        }).inner;
        self.changed = text_before != self.text();
        resp
    }
}

/// Largest value with provided number of integer digits and decimal places,
/// [`Decimal::MAX`] when it can not be represented.
fn max_shown_value(digits: u32, decimals: u32) -> Decimal {
    let mut max = Decimal::ONE;
    for _ in 0..digits {
        match max.checked_mul(Decimal::TEN) {
            Some(m) => max = m,
            None => return Decimal::MAX,
        }
    }
    // Decimal scale is limited by 28.
    let fraction = Decimal::new(1, decimals.min(28));
    max.checked_sub(fraction).unwrap_or(max)
}
