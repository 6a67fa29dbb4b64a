//! Subscription Plans
//!
//! The three tiers shown on the pricing page. Prices are in BRL and use
//! `rust_decimal`; display strings are derived from them rather than typed
//! by hand.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::page::PageId;

/// Subscription plan tiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Monthly,
    Quarterly,
    Yearly,
}

/// Billing interval
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingInterval {
    Month,
    Year,
}

/// Pricing information
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPricing {
    /// Card title
    pub name: String,

    /// One-line pitch under the title
    pub tagline: String,

    /// Price charged per billing period
    pub price: Decimal,

    /// ISO currency code
    pub currency: String,

    pub interval: BillingInterval,

    /// Number of intervals per billing period
    pub interval_count: u32,

    /// Suffix shown after the price, e.g. "/mês"
    pub period_label: String,
}

impl PlanPricing {
    /// Months covered by one payment
    pub fn months(&self) -> u32 {
        match self.interval {
            BillingInterval::Month => self.interval_count,
            BillingInterval::Year => self.interval_count * 12,
        }
    }

    /// Price divided over the covered months
    pub fn monthly_equivalent(&self) -> Decimal {
        (self.price / Decimal::from(self.months())).round_dp(2)
    }

    /// Whole-percent discount against paying the monthly plan for the same months
    pub fn savings_percent(&self) -> Decimal {
        let base = Plan::Monthly.pricing().price * Decimal::from(self.months());
        if base <= Decimal::ZERO || self.price >= base {
            return Decimal::ZERO;
        }
        ((base - self.price) / base * dec!(100)).round_dp(0)
    }
}

impl Plan {
    /// Tiers in the order the pricing page shows them
    pub const ALL: [Self; 3] = [Self::Monthly, Self::Quarterly, Self::Yearly];

    /// Benefits listed on every tier
    pub const FEATURES: [&'static str; 4] = [
        "Coaching por voz em tempo real",
        "Análises detalhadas de partidas",
        "Suporte prioritário",
        "Atualizações automáticas",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Monthly => "monthly",
            Plan::Quarterly => "quarterly",
            Plan::Yearly => "yearly",
        }
    }

    /// Get pricing for this plan
    pub fn pricing(&self) -> PlanPricing {
        match self {
            Plan::Monthly => PlanPricing {
                name: "Mensal".into(),
                tagline: "Perfeito para experimentar".into(),
                price: dec!(29.90),
                currency: "BRL".into(),
                interval: BillingInterval::Month,
                interval_count: 1,
                period_label: "/mês".into(),
            },
            Plan::Quarterly => PlanPricing {
                name: "Trimestral".into(),
                tagline: "Economize 10%".into(),
                price: dec!(80.73),
                currency: "BRL".into(),
                interval: BillingInterval::Month,
                interval_count: 3,
                period_label: "/3 meses".into(),
            },
            Plan::Yearly => PlanPricing {
                name: "Anual".into(),
                tagline: "Melhor custo-benefício".into(),
                price: dec!(287.04),
                currency: "BRL".into(),
                interval: BillingInterval::Year,
                interval_count: 1,
                period_label: "/ano".into(),
            },
        }
    }

    /// Highlighted with the "Mais Popular" badge
    pub fn is_featured(&self) -> bool {
        matches!(self, Plan::Quarterly)
    }

    /// Where the subscribe button leads. There is no checkout view yet, so
    /// this renders home.
    pub fn checkout_target(&self) -> PageId {
        PageId::Checkout
    }

    /// Secondary line under the price, if any
    pub fn price_note(&self) -> Option<String> {
        let pricing = self.pricing();
        if pricing.months() <= 1 {
            return None;
        }

        let per_month = format!("{}/mês", format_brl(pricing.monthly_equivalent()));
        match self {
            Plan::Yearly => Some(format!(
                "{per_month} - Economize {}%",
                pricing.savings_percent()
            )),
            _ => Some(per_month),
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(Plan::Monthly),
            "quarterly" => Ok(Plan::Quarterly),
            "yearly" | "annual" => Ok(Plan::Yearly),
            _ => Err(CoreError::UnknownPlan(s.to_string())),
        }
    }
}

/// Format an amount as Brazilian reais, e.g. `R$ 1.287,04`
pub fn format_brl(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() { "-" } else { "" };
    format!("{sign}R$ {grouped},{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_pricing() {
        let pricing = Plan::Quarterly.pricing();
        assert_eq!(pricing.price, dec!(80.73));
        assert_eq!(pricing.currency, "BRL");
        assert_eq!(pricing.months(), 3);
    }

    #[test]
    fn test_monthly_equivalents() {
        assert_eq!(Plan::Monthly.pricing().monthly_equivalent(), dec!(29.90));
        assert_eq!(Plan::Quarterly.pricing().monthly_equivalent(), dec!(26.91));
        assert_eq!(Plan::Yearly.pricing().monthly_equivalent(), dec!(23.92));
    }

    #[test]
    fn test_savings_percent() {
        assert_eq!(Plan::Monthly.pricing().savings_percent(), Decimal::ZERO);
        assert_eq!(Plan::Quarterly.pricing().savings_percent(), dec!(10));
        assert_eq!(Plan::Yearly.pricing().savings_percent(), dec!(20));
    }

    #[test]
    fn test_price_notes() {
        assert_eq!(Plan::Monthly.price_note(), None);
        assert_eq!(Plan::Quarterly.price_note().as_deref(), Some("R$ 26,91/mês"));
        assert_eq!(
            Plan::Yearly.price_note().as_deref(),
            Some("R$ 23,92/mês - Economize 20%")
        );
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(dec!(29.90)), "R$ 29,90");
        assert_eq!(format_brl(dec!(287.04)), "R$ 287,04");
        assert_eq!(format_brl(dec!(1287.5)), "R$ 1.287,50");
        assert_eq!(format_brl(dec!(1234567)), "R$ 1.234.567,00");
        assert_eq!(format_brl(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_brl(dec!(-5)), "-R$ 5,00");
    }

    #[test]
    fn test_checkout_has_no_view() {
        for plan in Plan::ALL {
            assert_eq!(crate::select_view(plan.checkout_target()), crate::View::Home);
        }
    }

    #[test]
    fn test_only_quarterly_is_featured() {
        let featured: Vec<_> = Plan::ALL.into_iter().filter(Plan::is_featured).collect();
        assert_eq!(featured, vec![Plan::Quarterly]);
    }

    #[test]
    fn test_features_shared_by_all_tiers() {
        assert_eq!(Plan::FEATURES.len(), 4);
        assert_eq!(Plan::FEATURES[0], "Coaching por voz em tempo real");
    }

    #[test]
    fn test_parse_plan() {
        assert_eq!("Quarterly".parse::<Plan>(), Ok(Plan::Quarterly));
        assert_eq!("annual".parse::<Plan>(), Ok(Plan::Yearly));
        assert_eq!(
            "weekly".parse::<Plan>(),
            Err(CoreError::UnknownPlan("weekly".into()))
        );
    }

    #[test]
    fn test_pricing_serializes_price_as_string() {
        let json = serde_json::to_value(Plan::Monthly.pricing()).unwrap();
        assert_eq!(json["price"], "29.90");
        assert_eq!(json["interval"], "month");
    }
}
