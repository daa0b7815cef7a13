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

use std::collections::HashMap;

use egui::{Event, Id, Key};

/// Explicit keyboard focus order between widgets.
#[derive(Default)]
pub struct TabChain {
    /// Next widget for each widget.
    next: HashMap<Id, Id>,
    /// Previous widget for each widget.
    prev: HashMap<Id, Id>,
}

impl TabChain {
    /// Move focus from the first widget to the second one on Tab press.
    pub fn set_tab_order(&mut self, first: Id, second: Id) {
        if let Some(old_next) = self.next.insert(first, second) {
            if old_next != second {
                self.prev.remove(&old_next);
            }
        }
        if let Some(old_prev) = self.prev.insert(second, first) {
            if old_prev != first {
                self.next.remove(&old_prev);
            }
        }
    }

    /// Get widget focused after provided one.
    pub fn next(&self, id: Id) -> Option<Id> {
        self.next.get(&id).copied()
    }

    /// Get widget focused before provided one.
    pub fn prev(&self, id: Id) -> Option<Id> {
        self.prev.get(&id).copied()
    }

    /// Remove Tab key events handled by the chain, returns widget to focus.
    pub fn take_tab(&self, focused: Option<Id>, events: &mut Vec<Event>) -> Option<Id> {
        let focused = focused?;
        let mut target = None;
        events.retain(|e| {
            match e {
                Event::Key { key: Key::Tab, pressed, modifiers, .. } => {
                    let linked = if modifiers.shift {
                        self.prev(focused)
                    } else {
                        self.next(focused)
                    };
                    match linked {
                        Some(id) => {
                            if *pressed && target.is_none() {
                                target = Some(id);
                            }
                            false
                        }
                        None => true
                    }
                }
                _ => true
            }
        });
        target
    }

    /// Handle Tab key input before it reaches widgets.
    pub fn on_raw_input(&self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        let focused = ctx.memory(|m| m.focused());
        if let Some(id) = self.take_tab(focused, &mut raw_input.events) {
            ctx.memory_mut(|m| m.request_focus(id));
        }
    }
}

#[cfg(test)]
mod tests {
    use egui::Modifiers;

    use super::*;

    fn tab(shift: bool, pressed: bool) -> Event {
        Event::Key {
            key: Key::Tab,
            physical_key: None,
            pressed,
            repeat: false,
            modifiers: if shift { Modifiers::SHIFT } else { Modifiers::NONE },
        }
    }

    fn chain() -> (TabChain, [Id; 3]) {
        let ids = [Id::new("address"), Id::new("label"), Id::new("amount")];
        let mut chain = TabChain::default();
        chain.set_tab_order(ids[0], ids[1]);
        chain.set_tab_order(ids[1], ids[2]);
        (chain, ids)
    }

    #[test]
    fn links_widgets_both_ways() {
        let (chain, ids) = chain();
        assert_eq!(chain.next(ids[0]), Some(ids[1]));
        assert_eq!(chain.next(ids[1]), Some(ids[2]));
        assert_eq!(chain.next(ids[2]), None);
        assert_eq!(chain.prev(ids[2]), Some(ids[1]));
        assert_eq!(chain.prev(ids[0]), None);
    }

    #[test]
    fn relinking_moves_widget() {
        let (mut chain, ids) = chain();
        chain.set_tab_order(ids[0], ids[2]);
        assert_eq!(chain.next(ids[0]), Some(ids[2]));
        assert_eq!(chain.prev(ids[2]), Some(ids[0]));
        assert_eq!(chain.next(ids[1]), None);
        assert_eq!(chain.prev(ids[1]), None);
    }

    #[test]
    fn tab_moves_forward_and_back() {
        let (chain, ids) = chain();
        let mut events = vec![tab(false, true), tab(false, false)];
        assert_eq!(chain.take_tab(Some(ids[1]), &mut events), Some(ids[2]));
        assert!(events.is_empty());

        let mut events = vec![tab(true, true)];
        assert_eq!(chain.take_tab(Some(ids[1]), &mut events), Some(ids[0]));
        assert!(events.is_empty());
    }

    #[test]
    fn unlinked_tab_is_kept() {
        let (chain, ids) = chain();
        let mut events = vec![tab(false, true), Event::Text("1".to_string())];
        assert_eq!(chain.take_tab(Some(ids[2]), &mut events), None);
        assert_eq!(events.len(), 2);
        assert_eq!(chain.take_tab(None, &mut events), None);
        assert_eq!(events.len(), 2);
    }
}
