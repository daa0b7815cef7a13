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

use serde_derive::{Deserialize, Serialize};

/// Amount in the smallest indivisible unit.
pub type Amount = i64;

/// Display denomination of an amount.
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    /// Whole coins.
    #[default]
    BTR,
    /// 1 / 1,000 of a coin.
    mBTR,
    /// 1 / 1,000,000 of a coin.
    uBTR,
}

impl Unit {
    pub const VALUES: [Unit; 3] = [Unit::BTR, Unit::mBTR, Unit::uBTR];
}

/// Selectable unit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitItem<U> {
    /// Short name shown at the selector.
    pub label: String,
    /// Unit description shown as tooltip.
    pub tooltip: String,
    /// Unit identifier.
    pub unit: U,
}

/// Provides unit list, conversion and bounds for amount input.
pub trait UnitsProvider {
    /// Unit identifier.
    type Unit: Copy + PartialEq + std::fmt::Debug;

    /// Get units available for selection in display order.
    fn units(&self) -> Vec<UnitItem<Self::Unit>>;

    /// Parse decimal text into smallest unit amount, `None` on malformed or too long text.
    fn parse(&self, unit: Self::Unit, text: &str) -> Option<Amount>;

    /// Format smallest unit amount as decimal text.
    fn format(&self, unit: Self::Unit, amount: Amount) -> String;

    /// Maximum amount expressed in provided unit.
    fn max_amount(&self, unit: Self::Unit) -> i64;

    /// Number of decimal places.
    fn decimals(&self, unit: Self::Unit) -> u32;

    /// Number of integer digits needed to show maximum amount.
    fn amount_digits(&self, unit: Self::Unit) -> u32;

    /// Unit which uses bigger input step.
    fn micro_unit(&self) -> Self::Unit;
}
