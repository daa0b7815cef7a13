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

use egui::Color32;

use crate::AppConfig;

const WHITE: Color32 = Color32::from_gray(253);
const BLACK: Color32 = Color32::from_gray(2);

const GOLD: Color32 = Color32::from_rgb(255, 215, 0);

const RED: Color32 = Color32::from_rgb(0x8B, 0, 0);
const RED_DARK: Color32 = Color32::from_rgb(255, 76, 76);

const INVALID_FILL: Color32 = Color32::from_rgb(255, 235, 235);
const INVALID_FILL_DARK: Color32 = Color32::from_rgb(70, 25, 25);

const GREEN: Color32 = Color32::from_rgb(0, 0x64, 0);
const GREEN_DARK: Color32 = Color32::from_rgb(0, 0xFF, 0);

const TEXT: Color32 = Color32::from_gray(80);
const TEXT_DARK: Color32 = Color32::from_gray(185);

const GRAY: Color32 = Color32::from_gray(120);
const GRAY_DARK: Color32 = Color32::from_gray(145);

const STROKE: Color32 = Color32::from_gray(200);
const STROKE_DARK: Color32 = Color32::from_gray(50);

/// Color palette depending on current theme.
pub struct Colors;

impl Colors {
    pub fn white_or_black(black_in_white: bool) -> Color32 {
        if use_dark() {
            if black_in_white { WHITE } else { BLACK }
        } else {
            if black_in_white { BLACK } else { WHITE }
        }
    }

    pub fn gold() -> Color32 {
        GOLD
    }

    pub fn red() -> Color32 {
        if use_dark() { RED_DARK } else { RED }
    }

    pub fn green() -> Color32 {
        if use_dark() { GREEN_DARK } else { GREEN }
    }

    /// Background of an input with incorrect value.
    pub fn invalid_fill() -> Color32 {
        if use_dark() { INVALID_FILL_DARK } else { INVALID_FILL }
    }

    pub fn text(always_light: bool) -> Color32 {
        if use_dark() && !always_light { TEXT_DARK } else { TEXT }
    }

    pub fn gray() -> Color32 {
        if use_dark() { GRAY_DARK } else { GRAY }
    }

    pub fn stroke() -> Color32 {
        if use_dark() { STROKE_DARK } else { STROKE }
    }
}

/// Check if dark theme should be used.
fn use_dark() -> bool {
    AppConfig::dark_theme().unwrap_or(false)
}
