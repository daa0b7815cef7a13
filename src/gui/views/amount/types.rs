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

use egui::{Color32, Stroke};

use crate::gui::Colors;

/// Visual state of the amount input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Valid,
    Invalid
}

/// Look of the amount input with incorrect value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    /// Input background.
    pub invalid_fill: Color32,
    /// Input text color.
    pub invalid_text: Color32,
    /// Stroke around input.
    pub invalid_stroke: Stroke,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            invalid_fill: Color32::from_rgb(255, 235, 235),
            invalid_text: Color32::from_rgb(0x8B, 0, 0),
            invalid_stroke: Stroke { width: 1.0, color: Color32::from_rgb(0x8B, 0, 0) },
        }
    }
}

impl FieldStyle {
    /// Create style from current theme colors.
    pub fn from_theme() -> Self {
        Self {
            invalid_fill: Colors::invalid_fill(),
            invalid_text: Colors::red(),
            invalid_stroke: Stroke { width: 1.0, color: Colors::red() },
        }
    }
}
