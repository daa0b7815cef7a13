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

use std::str::FromStr;

use egui::{Align, Key, Modifiers, TextStyle, Widget};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::gui::views::amount::{FieldState, FieldStyle};

/// Numeric amount input with period as decimal separator, limited precision and maximum.
pub struct AmountSpinBox {
    /// Input identifier.
    id: egui::Id,
    /// Current text, empty when cleared.
    text: String,
    /// Number of decimal places.
    decimals: u32,
    /// Maximum value.
    maximum: Decimal,
    /// Value change on step up or down.
    single_step: Decimal,
}

impl AmountSpinBox {
    /// Maximum input width.
    const MAX_WIDTH: f32 = 170.0;
    /// Biggest supported number of decimal places.
    const MAX_DECIMALS: u32 = 18;

    pub fn new(id: egui::Id) -> Self {
        Self {
            id,
            text: String::new(),
            decimals: 8,
            maximum: Decimal::new(9999, 2),
            single_step: Decimal::new(1, 3),
        }
    }

    /// Get input identifier.
    pub fn id(&self) -> egui::Id {
        self.id
    }

    /// Get current text.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    /// Get current numeric value, zero for empty text.
    pub fn value(&self) -> Decimal {
        parse_decimal(self.text.as_str()).unwrap_or(Decimal::ZERO)
    }

    /// Show provided value rounded to current precision and limited by bounds.
    pub fn set_value(&mut self, value: Decimal) {
        let mut bounded = self.bound(value);
        bounded.rescale(self.decimals);
        self.text = bounded.to_string();
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Change precision, shown value is rounded to new number of decimal places.
    pub fn set_decimals(&mut self, decimals: u32) {
        self.decimals = decimals.min(Self::MAX_DECIMALS);
        self.maximum = self.maximum.round_dp(self.decimals);
        if !self.text.is_empty() {
            self.set_value(self.value());
        }
    }

    pub fn maximum(&self) -> Decimal {
        self.maximum
    }

    /// Change maximum value, shown value is limited by new maximum.
    pub fn set_maximum(&mut self, maximum: Decimal) {
        self.maximum = maximum.round_dp(self.decimals).max(Decimal::ZERO);
        if !self.text.is_empty() && self.value() > self.maximum {
            self.set_value(self.maximum);
        }
    }

    pub fn single_step(&self) -> Decimal {
        self.single_step
    }

    pub fn set_single_step(&mut self, step: Decimal) {
        self.single_step = step;
    }

    /// Change value by provided number of steps.
    pub fn step_by(&mut self, steps: i32) {
        let value = self.value() + self.single_step * Decimal::from(steps);
        self.set_value(value);
    }

    /// Apply text entered by user, returns `false` if text was rejected.
    pub fn edit(&mut self, text: &str) -> bool {
        if text == self.text || !self.acceptable(text) {
            return false;
        }
        self.text = text.to_string();
        true
    }

    /// Check if text can be entered.
    fn acceptable(&self, text: &str) -> bool {
        if text.is_empty() {
            return true;
        }
        let mut parts = text.split(".");
        let whole = parts.next().unwrap_or("");
        let fraction = parts.next();
        if parts.next().is_some() {
            return false;
        }
        if let Some(f) = fraction {
            if self.decimals == 0 || f.len() > self.decimals as usize {
                return false;
            }
        }
        let digits_only = whole.chars()
            .chain(fraction.unwrap_or("").chars())
            .all(|c| c.is_ascii_digit());
        if !digits_only {
            return false;
        }
        match parse_decimal(text) {
            Some(value) => value <= self.maximum,
            None => false
        }
    }

    /// Round value to current precision and limit by bounds.
    fn bound(&self, value: Decimal) -> Decimal {
        let rounded = value.round_dp_with_strategy(
            self.decimals,
            RoundingStrategy::MidpointAwayFromZero
        );
        if rounded <= Decimal::ZERO {
            Decimal::ZERO
        } else if rounded > self.maximum {
            self.maximum
        } else {
            rounded
        }
    }

    /// Draw input content.
    pub fn ui(&mut self, ui: &mut egui::Ui, state: FieldState, style: &FieldStyle) -> egui::Response {
        let invalid = state == FieldState::Invalid;
        let mut text = self.text.clone();
        let resp = ui.scope(|ui| {
            if invalid {
                let widgets = &mut ui.visuals_mut().widgets;
                widgets.inactive.bg_stroke = style.invalid_stroke;
                widgets.hovered.bg_stroke = style.invalid_stroke;
            }
            let mut edit = egui::TextEdit::singleline(&mut text)
                .id(self.id)
                .font(TextStyle::Heading)
                .desired_width(Self::MAX_WIDTH)
                .vertical_align(Align::Center);
            if invalid {
                edit = edit
                    .background_color(style.invalid_fill)
                    .text_color(style.invalid_text);
            }
            edit.ui(ui)
        }).inner;
        if resp.changed() {
            self.edit(text.as_str());
        }

        // Step value with arrow keys.
        if resp.has_focus() {
            let (up, down) = ui.input_mut(|i| {
                (i.consume_key(Modifiers::NONE, Key::ArrowUp),
                 i.consume_key(Modifiers::NONE, Key::ArrowDown))
            });
            if up {
                self.step_by(1);
            } else if down {
                self.step_by(-1);
            }
        }
        resp
    }
}

/// Parse decimal number from text, `None` if text is not a number.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let mut value = text.trim().to_string();
    if value.is_empty() {
        return None;
    }
    if value.starts_with(".") {
        value.insert(0, '0');
    }
    if value.ends_with(".") {
        value.push('0');
    }
    Decimal::from_str(value.as_str())
        .or_else(|_| Decimal::from_scientific(value.as_str()))
        .ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn spin(decimals: u32, maximum: &str) -> AmountSpinBox {
        let mut spin = AmountSpinBox::new(egui::Id::new("spin"));
        spin.set_decimals(decimals);
        spin.set_maximum(Decimal::from_str(maximum).unwrap());
        spin
    }

    #[test]
    fn shows_value_with_fixed_precision() {
        let mut spin = spin(8, "99999999.99999999");
        spin.set_value(Decimal::new(15, 1));
        assert_eq!(spin.text(), "1.50000000");
        spin.set_value(Decimal::from_str("0.123456789").unwrap());
        assert_eq!(spin.text(), "0.12345679");
    }

    #[test]
    fn limits_value_by_bounds() {
        let mut spin = spin(2, "100");
        spin.set_value(Decimal::from(500));
        assert_eq!(spin.text(), "100.00");
        spin.set_value(Decimal::from(-3));
        assert_eq!(spin.text(), "0.00");
    }

    #[test]
    fn precision_change_rounds_shown_value() {
        let mut spin = spin(8, "99999999.99999999");
        assert!(spin.edit("1.23456789"));
        spin.set_decimals(2);
        assert_eq!(spin.text(), "1.23");
        spin.set_decimals(8);
        assert_eq!(spin.text(), "1.23000000");
    }

    #[test]
    fn precision_change_keeps_empty_text() {
        let mut spin = spin(8, "99999999.99999999");
        spin.set_decimals(2);
        assert_eq!(spin.text(), "");
        assert_eq!(spin.value(), Decimal::ZERO);
    }

    #[test]
    fn maximum_change_limits_shown_value() {
        let mut spin = spin(2, "99999999999999.99");
        assert!(spin.edit("5000"));
        spin.set_maximum(Decimal::from(1000));
        assert_eq!(spin.text(), "1000.00");
        spin.set_maximum(Decimal::from(2000));
        assert_eq!(spin.text(), "1000.00");
    }

    #[test]
    fn accepts_partial_numbers() {
        let mut spin = spin(8, "99999999.99999999");
        assert!(spin.edit("1"));
        assert!(spin.edit("1."));
        assert_eq!(spin.value(), Decimal::ONE);
        assert!(spin.edit("."));
        assert_eq!(spin.value(), Decimal::ZERO);
        assert!(spin.edit(""));
        assert_eq!(spin.text(), "");
    }

    #[test]
    fn rejects_incorrect_input() {
        let mut spin = spin(2, "100");
        assert!(spin.edit("12.5"));
        assert!(!spin.edit("12.5.1"));
        assert!(!spin.edit("12,5"));
        assert!(!spin.edit("12.555"));
        assert!(!spin.edit("-1"));
        assert!(!spin.edit("abc"));
        assert!(!spin.edit("100.01"));
        assert_eq!(spin.text(), "12.5");
    }

    #[test]
    fn steps_value() {
        let mut spin = spin(2, "100");
        spin.set_single_step(Decimal::new(1, 2));
        spin.step_by(3);
        assert_eq!(spin.text(), "0.03");
        spin.step_by(-5);
        assert_eq!(spin.text(), "0.00");
    }

    #[test]
    fn parses_decimal_text() {
        assert_eq!(parse_decimal(" 1.5 "), Some(Decimal::new(15, 1)));
        assert_eq!(parse_decimal(".5"), Some(Decimal::new(5, 1)));
        assert_eq!(parse_decimal("2."), Some(Decimal::from(2)));
        assert_eq!(parse_decimal("1e3"), Some(Decimal::from(1000)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("coins"), None);
    }
}
