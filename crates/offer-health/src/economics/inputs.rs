/// One snapshot of the business numbers a user is modelling.
///
/// Percent fields hold whole percents (`2.0` means 2%). Nothing here is range-checked: zero or
/// negative values flow straight through the calculator and may produce non-finite ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessInputs {
    pub ad_spend: f64,
    pub leads: f64,
    pub cost_per_lead: Option<f64>,
    pub current_cac: f64,
    pub cold_traffic_conversion: f64,
    pub core_offer_price: f64,
    pub core_offer_conversion: f64,
    pub day1_gross_profit_per_customer: f64,
    pub gross_margin_percent: f64,
    pub monthly_churn_percent: f64,
    pub refund_rate_percent: f64,
    /// Explicit lifetime in months. A zero (or NaN) override counts as unset, see
    /// [`BusinessInputs::lifetime_override`].
    pub average_lifetime_months: Option<f64>,
    pub levers: LeverSet,
}

impl BusinessInputs {
    /// Starting snapshot of the calculator before the user edits anything.
    pub fn baseline() -> Self {
        Self {
            ad_spend: 5000.0,
            leads: 500.0,
            cost_per_lead: None,
            current_cac: 200.0,
            cold_traffic_conversion: 2.0,
            core_offer_price: 97.0,
            core_offer_conversion: 20.0,
            day1_gross_profit_per_customer: 400.0,
            gross_margin_percent: 70.0,
            monthly_churn_percent: 8.0,
            refund_rate_percent: 5.0,
            average_lifetime_months: None,
            levers: LeverSet::default(),
        }
    }

    /// Lifetime override that the calculator honours.
    ///
    /// Zero and NaN are treated exactly like a missing value. Existing saved snapshots send `0`
    /// for "not filled in", so a literal zero-month lifetime cannot be expressed.
    pub fn lifetime_override(&self) -> Option<f64> {
        self.average_lifetime_months
            .filter(|months| *months != 0.0 && !months.is_nan())
    }

    pub fn has_slo(&self) -> bool {
        self.levers.slo.is_some()
    }

    pub fn has_upsells(&self) -> bool {
        self.levers.upsells.is_some()
    }

    pub fn has_annual_option(&self) -> bool {
        self.levers.annual.is_some()
    }

    pub fn has_downsell(&self) -> bool {
        self.levers.downsell.is_some()
    }
}

/// Optional offers layered on top of the core offer. `None` means the lever is switched off,
/// so a disabled lever can never carry leftover prices or rates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeverSet {
    pub slo: Option<SloOffer>,
    pub upsells: Option<UpsellLadder>,
    pub annual: Option<AnnualOption>,
    pub downsell: Option<DownsellOffer>,
}

impl LeverSet {
    /// Every lever switched on with no pricing detail.
    pub fn all_enabled() -> Self {
        Self {
            slo: Some(SloOffer::default()),
            upsells: Some(UpsellLadder::default()),
            annual: Some(AnnualOption::default()),
            downsell: Some(DownsellOffer::default()),
        }
    }
}

/// Self-liquidating front-end offer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SloOffer {
    pub price: Option<f64>,
    pub take_rate: Option<f64>,
}

/// Post-purchase upsells as index-aligned price and take-rate sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpsellLadder {
    pub prices: Option<Vec<f64>>,
    pub take_rates: Option<Vec<f64>>,
}

impl UpsellLadder {
    pub fn single(price: f64, take_rate: f64) -> Self {
        Self {
            prices: Some(vec![price]),
            take_rates: Some(vec![take_rate]),
        }
    }

    /// Expected upsell revenue per customer.
    ///
    /// Contributes nothing unless both sequences are present. Prices without a matching take
    /// rate (or with a zero/NaN rate) add 0; surplus take rates are ignored.
    pub fn expected_value(&self) -> f64 {
        let (Some(prices), Some(take_rates)) = (&self.prices, &self.take_rates) else {
            return 0.0;
        };

        prices
            .iter()
            .enumerate()
            .fold(0.0, |total, (index, price)| {
                let take_rate = take_rates
                    .get(index)
                    .copied()
                    .filter(|rate| !rate.is_nan())
                    .unwrap_or(0.0)
                    / 100.0;
                total + price * take_rate
            })
    }
}

/// Annual prepay alternative to the monthly core offer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnualOption {
    pub price: Option<f64>,
    pub attach_rate: Option<f64>,
}

/// Fallback offer shown to buyers who decline the core offer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DownsellOffer {
    pub price: Option<f64>,
    pub take_rate: Option<f64>,
}
