use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlanId {
    Basic,
    Premium,
}

impl PlanId {
    /// Table order. Cards render in this order.
    pub const ALL: [PlanId; 2] = [PlanId::Basic, PlanId::Premium];

    pub fn key(self) -> &'static str {
        match self {
            PlanId::Basic => "basic",
            PlanId::Premium => "premium",
        }
    }

    pub fn plan(self) -> &'static Plan {
        match self {
            PlanId::Basic => &PLANS[0],
            PlanId::Premium => &PLANS[1],
        }
    }
}

impl Default for PlanId {
    fn default() -> Self {
        PlanId::Basic
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown plan `{0}`")]
pub struct UnknownPlan(pub String);

impl FromStr for PlanId {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanId::ALL
            .into_iter()
            .find(|id| id.key() == s)
            .ok_or_else(|| UnknownPlan(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillingInterval {
    Month,
    #[allow(dead_code)] // no yearly plan on sale yet
    Year,
}

impl BillingInterval {
    pub fn label(self) -> &'static str {
        match self {
            BillingInterval::Month => "month",
            BillingInterval::Year => "year",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub title: &'static str,
    pub price_cents: u32, // USD
    pub interval: BillingInterval,
    pub features: &'static [&'static str],
    pub checkout_url: &'static str,
}

impl Plan {
    /// "$50.00"
    pub fn formatted_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }

    /// "/month"
    pub fn period(&self) -> String {
        format!("/{}", self.interval.label())
    }
}

/// Every plan the page offers. Changing pricing means editing this table.
pub static PLANS: [Plan; 2] = [
    Plan {
        id: PlanId::Basic,
        title: "Basic Plan",
        price_cents: 5_000,
        interval: BillingInterval::Month,
        features: &[
            "Unlimited property listings",
            "Smart scheduling system",
            "Open house management",
            "Lead capture & scoring",
        ],
        checkout_url: "https://buy.stripe.com/3cs01E2wmdJca084gh",
    },
    Plan {
        id: PlanId::Premium,
        title: "Premium Plan",
        price_cents: 7_500,
        interval: BillingInterval::Month,
        features: &[
            "Everything in Basic",
            "Client management tools",
            "Priority support",
            "Custom branding",
        ],
        checkout_url: "https://buy.stripe.com/6oEg0C1sibB4c8g5km",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_match_their_ids() {
        for id in PlanId::ALL {
            assert_eq!(id.plan().id, id);
        }
        assert_eq!(PLANS.len(), PlanId::ALL.len());
    }

    #[test]
    fn keys_parse_back_to_ids() {
        assert_eq!("basic".parse::<PlanId>(), Ok(PlanId::Basic));
        assert_eq!("premium".parse::<PlanId>(), Ok(PlanId::Premium));
        assert_eq!(
            "enterprise".parse::<PlanId>(),
            Err(UnknownPlan("enterprise".to_string()))
        );
        assert_eq!("Basic".parse::<PlanId>().unwrap_err().to_string(), "unknown plan `Basic`");
    }

    #[test]
    fn default_plan_is_basic() {
        assert_eq!(PlanId::default(), PlanId::Basic);
    }

    #[test]
    fn prices_format_as_dollars_per_interval() {
        let basic = PlanId::Basic.plan();
        assert_eq!(basic.formatted_price(), "$50.00");
        assert_eq!(basic.period(), "/month");
        assert_eq!(PlanId::Premium.plan().formatted_price(), "$75.00");

        let odd = Plan {
            id: PlanId::Basic,
            title: "Yearly",
            price_cents: 75_005,
            interval: BillingInterval::Year,
            features: &[],
            checkout_url: "",
        };
        assert_eq!(odd.formatted_price(), "$750.05");
        assert_eq!(odd.period(), "/year");
    }

    #[test]
    fn checkout_urls_are_distinct() {
        assert_ne!(PlanId::Basic.plan().checkout_url, PlanId::Premium.plan().checkout_url);
    }
}
