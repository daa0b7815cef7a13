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

use crate::units::{Amount, Unit, UnitItem, UnitsProvider};

/// Longest digits string which always fits into 63 bits.
const MAX_DIGITS: usize = 18;

/// Bitraam denominations with conversion between display text and smallest unit amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitraamUnits;

impl BitraamUnits {
    /// Amount of smallest units in one coin.
    pub const COIN: Amount = 100_000_000;

    /// Number of smallest units in one provided unit.
    pub fn factor(unit: Unit) -> Amount {
        match unit {
            Unit::BTR => Self::COIN,
            Unit::mBTR => 100_000,
            Unit::uBTR => 100,
        }
    }

    /// Short unit name.
    pub fn name(unit: Unit) -> String {
        match unit {
            Unit::BTR => "BTR",
            Unit::mBTR => "mBTR",
            Unit::uBTR => "μBTR",
        }.to_string()
    }

    /// Longer unit description.
    pub fn description(unit: Unit) -> String {
        match unit {
            Unit::BTR => t!("units.btr_desc"),
            Unit::mBTR => t!("units.mbtr_desc"),
            Unit::uBTR => t!("units.ubtr_desc"),
        }
    }
}

impl UnitsProvider for BitraamUnits {
    type Unit = Unit;

    fn units(&self) -> Vec<UnitItem<Unit>> {
        Unit::VALUES.iter().map(|u| {
            UnitItem {
                label: Self::name(*u),
                tooltip: Self::description(*u),
                unit: *u,
            }
        }).collect()
    }

    fn parse(&self, unit: Unit, text: &str) -> Option<Amount> {
        if text.is_empty() {
            return None;
        }
        let num_decimals = self.decimals(unit) as usize;
        let parts = text.split(".").collect::<Vec<&str>>();
        if parts.len() > 2 {
            return None;
        }
        let whole = parts[0];
        let fraction = parts.get(1).copied().unwrap_or("");
        if fraction.len() > num_decimals {
            return None;
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return None;
        }
        let digits = format!("{}{:0<width$}", whole, fraction, width = num_decimals);
        if digits.len() > MAX_DIGITS {
            return None;
        }
        digits.parse::<Amount>().ok()
    }

    fn format(&self, unit: Unit, amount: Amount) -> String {
        let factor = Self::factor(unit).unsigned_abs();
        let num_decimals = self.decimals(unit) as usize;
        let abs = amount.unsigned_abs();
        let quotient = abs / factor;
        let mut remainder = format!("{:0>width$}", abs % factor, width = num_decimals);
        // Trim trailing zeros but keep two digits after the point.
        while remainder.len() > 2 && remainder.ends_with('0') {
            remainder.pop();
        }
        let sign = if amount < 0 { "-" } else { "" };
        format!("{}{}.{}", sign, quotient, remainder)
    }

    fn max_amount(&self, unit: Unit) -> i64 {
        match unit {
            Unit::BTR => 21_000_000,
            Unit::mBTR => 21_000_000_000,
            Unit::uBTR => 21_000_000_000_000,
        }
    }

    fn decimals(&self, unit: Unit) -> u32 {
        match unit {
            Unit::BTR => 8,
            Unit::mBTR => 5,
            Unit::uBTR => 2,
        }
    }

    fn amount_digits(&self, unit: Unit) -> u32 {
        match unit {
            Unit::BTR => 8,
            Unit::mBTR => 11,
            Unit::uBTR => 14,
        }
    }

    fn micro_unit(&self) -> Unit {
        Unit::uBTR
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_amount_for_each_unit() {
        let units = BitraamUnits;
        assert_eq!(units.parse(Unit::BTR, "1.23456789"), Some(123_456_789));
        assert_eq!(units.parse(Unit::mBTR, "1234.56789"), Some(123_456_789));
        assert_eq!(units.parse(Unit::uBTR, "1234567.89"), Some(123_456_789));
        assert_eq!(units.parse(Unit::BTR, "21000000"), Some(21_000_000 * BitraamUnits::COIN));
        assert_eq!(units.parse(Unit::BTR, "0.5"), Some(50_000_000));
        assert_eq!(units.parse(Unit::BTR, ".5"), Some(50_000_000));
        assert_eq!(units.parse(Unit::BTR, "0"), Some(0));
    }

    #[test]
    fn rejects_malformed_text() {
        let units = BitraamUnits;
        assert_eq!(units.parse(Unit::BTR, ""), None);
        assert_eq!(units.parse(Unit::BTR, "1.2.3"), None);
        assert_eq!(units.parse(Unit::BTR, "1,5"), None);
        assert_eq!(units.parse(Unit::BTR, "-1"), None);
        assert_eq!(units.parse(Unit::BTR, "+1"), None);
        assert_eq!(units.parse(Unit::BTR, "1e5"), None);
        assert_eq!(units.parse(Unit::BTR, " 1"), None);
    }

    #[test]
    fn rejects_extra_decimals() {
        let units = BitraamUnits;
        assert_eq!(units.parse(Unit::BTR, "1.123456789"), None);
        assert_eq!(units.parse(Unit::uBTR, "1.234"), None);
        assert_eq!(units.parse(Unit::uBTR, "1.23"), Some(123));
    }

    #[test]
    fn rejects_text_above_63_bits() {
        let units = BitraamUnits;
        assert_eq!(units.parse(Unit::BTR, "1234567890.12345678"), Some(123_456_789_012_345_678));
        assert_eq!(units.parse(Unit::BTR, "12345678901"), None);
    }

    #[test]
    fn formats_with_trimmed_zeros() {
        let units = BitraamUnits;
        assert_eq!(units.format(Unit::BTR, 123_456_789), "1.23456789");
        assert_eq!(units.format(Unit::BTR, BitraamUnits::COIN), "1.00");
        assert_eq!(units.format(Unit::BTR, 150_000_000), "1.50");
        assert_eq!(units.format(Unit::BTR, 0), "0.00");
        assert_eq!(units.format(Unit::mBTR, 123_456_789), "1234.56789");
        assert_eq!(units.format(Unit::uBTR, 123_456_789), "1234567.89");
        assert_eq!(units.format(Unit::uBTR, 5), "0.05");
        assert_eq!(units.format(Unit::BTR, -150_000_000), "-1.50");
    }

    #[test]
    fn format_output_parses_back() {
        let units = BitraamUnits;
        for unit in Unit::VALUES {
            for amount in [1, 99, 100_000, 123_456_789, 2_100_000_000_000_000] {
                let text = units.format(unit, amount);
                assert_eq!(units.parse(unit, &text), Some(amount), "{:?} {}", unit, text);
            }
        }
    }

    #[test]
    fn unit_list_is_ordered() {
        let items = BitraamUnits.units();
        let ids = items.iter().map(|i| i.unit).collect::<Vec<Unit>>();
        assert_eq!(ids, Unit::VALUES.to_vec());
        assert_eq!(items[2].label, "μBTR");
        assert!(!items[0].tooltip.is_empty());
    }

    #[test]
    fn max_amount_fits_amount_digits() {
        let units = BitraamUnits;
        for unit in Unit::VALUES {
            let digits = units.max_amount(unit).to_string().len() as u32;
            assert_eq!(digits, units.amount_digits(unit));
        }
        assert_eq!(units.micro_unit(), Unit::uBTR);
    }
}
