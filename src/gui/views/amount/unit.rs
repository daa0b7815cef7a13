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

use crate::units::UnitItem;

/// Unit selection list.
pub struct UnitSelector<U> {
    /// Selector identifier.
    id: egui::Id,
    /// Available units.
    items: Vec<UnitItem<U>>,
    /// Selected item index.
    current: usize,
    /// Hint text shown on hover.
    tooltip: String,
}

impl<U: Copy + PartialEq> UnitSelector<U> {
    pub fn new(id: egui::Id, items: Vec<UnitItem<U>>) -> Self {
        Self { id, items, current: 0, tooltip: String::new() }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Select item at provided index, returns `true` if selection was changed.
    pub fn set_current_index(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.current {
            return false;
        }
        self.current = index;
        true
    }

    /// Select item with provided unit, returns `true` if selection was changed.
    pub fn set_value(&mut self, unit: U) -> bool {
        match self.items.iter().position(|i| i.unit == unit) {
            Some(index) => self.set_current_index(index),
            None => false
        }
    }

    /// Get unit at provided index.
    pub fn unit_at(&self, index: usize) -> Option<U> {
        self.items.get(index).map(|i| i.unit)
    }

    /// Get unit description at provided index.
    pub fn tooltip_at(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(|i| i.tooltip.as_str())
    }

    /// Get current hint text.
    pub fn tooltip(&self) -> &str {
        self.tooltip.as_str()
    }

    pub fn set_tooltip(&mut self, tooltip: String) {
        self.tooltip = tooltip;
    }

    /// Draw selector content, returns new index if selection was changed.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<usize> {
        let mut selected = self.current;
        let label = self.items
            .get(self.current)
            .map(|i| i.label.clone())
            .unwrap_or_default();
        let resp = egui::ComboBox::from_id_salt(self.id)
            .selected_text(label)
            .show_ui(ui, |ui| {
                for (index, item) in self.items.iter().enumerate() {
                    ui.selectable_value(&mut selected, index, item.label.as_str())
                        .on_hover_text(item.tooltip.as_str());
                }
            }).response;
        if !self.tooltip.is_empty() {
            resp.on_hover_text(self.tooltip.as_str());
        }
        if self.set_current_index(selected) {
            return Some(selected);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> UnitSelector<u8> {
        let items = (0..3).map(|i| UnitItem {
            label: format!("U{}", i),
            tooltip: format!("Unit {}", i),
            unit: i * 10,
        }).collect();
        UnitSelector::new(egui::Id::new("units"), items)
    }

    #[test]
    fn starts_at_first_item() {
        let selector = selector();
        assert_eq!(selector.current_index(), 0);
        assert_eq!(selector.unit_at(0), Some(0));
        assert_eq!(selector.tooltip_at(2), Some("Unit 2"));
        assert_eq!(selector.tooltip(), "");
    }

    #[test]
    fn selects_by_index() {
        let mut selector = selector();
        assert!(selector.set_current_index(2));
        assert!(!selector.set_current_index(2));
        assert!(!selector.set_current_index(3));
        assert_eq!(selector.current_index(), 2);
    }

    #[test]
    fn selects_by_unit() {
        let mut selector = selector();
        assert!(selector.set_value(10));
        assert_eq!(selector.current_index(), 1);
        assert!(!selector.set_value(15));
        assert_eq!(selector.current_index(), 1);
    }
}
