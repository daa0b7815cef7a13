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

use egui::{Event, Key};

/// Translate decimal comma input into period, returns `true` if any event was changed.
///
/// Key press and release events of [`Key::Comma`] become [`Key::Period`] events with the same
/// modifiers and repeat flag, typed text gets `,` replaced by `.`.
pub fn normalize_decimal_input(events: &mut [Event]) -> bool {
    let mut changed = false;
    for event in events.iter_mut() {
        match event {
            Event::Key { key, .. } if *key == Key::Comma => {
                *key = Key::Period;
                changed = true;
            }
            Event::Text(text) if text.contains(',') => {
                *text = text.replace(",", ".");
                changed = true;
            }
            _ => {}
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use egui::Modifiers;

    use super::*;

    fn key_event(key: Key, pressed: bool, repeat: bool) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed,
            repeat,
            modifiers: Modifiers::SHIFT,
        }
    }

    #[test]
    fn comma_key_becomes_period() {
        let mut events = vec![key_event(Key::Comma, true, true), key_event(Key::Comma, false, false)];
        assert!(normalize_decimal_input(&mut events));
        assert_eq!(events, vec![key_event(Key::Period, true, true), key_event(Key::Period, false, false)]);
    }

    #[test]
    fn comma_text_becomes_period() {
        let mut events = vec![Event::Text(",".to_string()), Event::Text("1,5".to_string())];
        assert!(normalize_decimal_input(&mut events));
        assert_eq!(events, vec![Event::Text(".".to_string()), Event::Text("1.5".to_string())]);
    }

    #[test]
    fn other_input_is_kept() {
        let mut events = vec![
            Event::Text("7".to_string()),
            key_event(Key::Num7, true, false),
            key_event(Key::Period, true, false),
        ];
        let expected = events.clone();
        assert!(!normalize_decimal_input(&mut events));
        assert_eq!(events, expected);
    }
}
