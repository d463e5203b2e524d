//! In-memory registry of named conventions.
//!
//! # Example
//!
//! ```rust
//! use ratescal_core::conventions::{ConventionRegistry, ConventionSource};
//!
//! let registry = ConventionRegistry::global();
//! let swap = registry.fixed_ibor_swap("USD-FIXED-6M-LIBOR-3M").unwrap();
//! assert_eq!(swap.index.to_string(), "USD-LIBOR-3M");
//! ```

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{
    ConventionSource, FixedIborSwapConvention, FixedOvernightSwapConvention, FraConvention,
    IborFixingDepositConvention, IborIborSwapConvention,
};
use crate::curve::NodeKind;
use crate::daycount::DayCount;
use crate::error::{CoreError, CoreResult};
use crate::types::{Currency, Period, RateIndex};

/// Registry of conventions keyed by kind and case-insensitive name.
#[derive(Debug, Clone, Default)]
pub struct ConventionRegistry {
    ibor_fixing_deposits: HashMap<String, IborFixingDepositConvention>,
    fras: HashMap<String, FraConvention>,
    fixed_overnight_swaps: HashMap<String, FixedOvernightSwapConvention>,
    fixed_ibor_swaps: HashMap<String, FixedIborSwapConvention>,
    ibor_ibor_swaps: HashMap<String, IborIborSwapConvention>,
}

/// Global singleton registry of standard conventions.
static GLOBAL_REGISTRY: OnceLock<ConventionRegistry> = OnceLock::new();

fn key(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}

impl ConventionRegistry {
    /// Returns the global registry of standard conventions.
    ///
    /// Lazily initialized on first access.
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL_REGISTRY.get_or_init(Self::standard)
    }

    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the standard market conventions for
    /// USD, EUR, GBP, JPY and CHF.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register_usd_conventions();
        registry.register_eur_conventions();
        registry.register_gbp_conventions();
        registry.register_jpy_conventions();
        registry.register_chf_conventions();
        registry
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers an IBOR fixing deposit convention, replacing any of the same name.
    pub fn register_ibor_fixing_deposit(&mut self, convention: IborFixingDepositConvention) {
        self.ibor_fixing_deposits
            .insert(key(&convention.name), convention);
    }

    /// Registers a FRA convention, replacing any of the same name.
    pub fn register_fra(&mut self, convention: FraConvention) {
        self.fras.insert(key(&convention.name), convention);
    }

    /// Registers an OIS convention, replacing any of the same name.
    pub fn register_fixed_overnight_swap(&mut self, convention: FixedOvernightSwapConvention) {
        self.fixed_overnight_swaps
            .insert(key(&convention.name), convention);
    }

    /// Registers a fixed vs IBOR swap convention, replacing any of the same name.
    pub fn register_fixed_ibor_swap(&mut self, convention: FixedIborSwapConvention) {
        self.fixed_ibor_swaps
            .insert(key(&convention.name), convention);
    }

    /// Registers a basis swap convention, replacing any of the same name.
    pub fn register_ibor_ibor_swap(&mut self, convention: IborIborSwapConvention) {
        self.ibor_ibor_swaps
            .insert(key(&convention.name), convention);
    }

    /// Builder method to add an IBOR fixing deposit convention.
    #[must_use]
    pub fn with_ibor_fixing_deposit(mut self, convention: IborFixingDepositConvention) -> Self {
        self.register_ibor_fixing_deposit(convention);
        self
    }

    /// Builder method to add a FRA convention.
    #[must_use]
    pub fn with_fra(mut self, convention: FraConvention) -> Self {
        self.register_fra(convention);
        self
    }

    /// Builder method to add an OIS convention.
    #[must_use]
    pub fn with_fixed_overnight_swap(mut self, convention: FixedOvernightSwapConvention) -> Self {
        self.register_fixed_overnight_swap(convention);
        self
    }

    /// Builder method to add a fixed vs IBOR swap convention.
    #[must_use]
    pub fn with_fixed_ibor_swap(mut self, convention: FixedIborSwapConvention) -> Self {
        self.register_fixed_ibor_swap(convention);
        self
    }

    /// Builder method to add a basis swap convention.
    #[must_use]
    pub fn with_ibor_ibor_swap(mut self, convention: IborIborSwapConvention) -> Self {
        self.register_ibor_ibor_swap(convention);
        self
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the registered names for an instrument kind, sorted.
    #[must_use]
    pub fn names(&self, kind: NodeKind) -> Vec<&str> {
        let mut names: Vec<&str> = match kind {
            NodeKind::IborFixingDeposit => self
                .ibor_fixing_deposits
                .values()
                .map(|c| c.name.as_str())
                .collect(),
            NodeKind::Fra => self.fras.values().map(|c| c.name.as_str()).collect(),
            NodeKind::FixedOvernightSwap => self
                .fixed_overnight_swaps
                .values()
                .map(|c| c.name.as_str())
                .collect(),
            NodeKind::FixedIborSwap => self
                .fixed_ibor_swaps
                .values()
                .map(|c| c.name.as_str())
                .collect(),
            NodeKind::IborIborSwap => self
                .ibor_ibor_swaps
                .values()
                .map(|c| c.name.as_str())
                .collect(),
        };
        names.sort_unstable();
        names
    }

    /// Returns the total number of registered conventions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ibor_fixing_deposits.len()
            + self.fras.len()
            + self.fixed_overnight_swaps.len()
            + self.fixed_ibor_swaps.len()
            + self.ibor_ibor_swaps.len()
    }

    /// Returns true if no conventions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Standard conventions
    // =========================================================================

    fn register_term_index(&mut self, currency: Currency, index: &RateIndex, day_count: DayCount) {
        let spot_days = if currency == Currency::GBP { 0 } else { 2 };
        self.register_ibor_fixing_deposit(IborFixingDepositConvention {
            name: index.name().to_string(),
            index: index.clone(),
            day_count,
            spot_days,
        });
        self.register_fra(FraConvention {
            name: index.name().to_string(),
            index: index.clone(),
            day_count,
            spot_days,
        });
    }

    fn register_fixed_ibor(
        &mut self,
        name: &str,
        index: &RateIndex,
        day_count: DayCount,
        freq: Period,
    ) {
        self.register_fixed_ibor_swap(FixedIborSwapConvention {
            name: name.to_string(),
            index: index.clone(),
            fixed_day_count: day_count,
            fixed_frequency: freq,
        });
    }

    fn register_ois(&mut self, name: &str, index: &RateIndex, day_count: DayCount) {
        self.register_fixed_overnight_swap(FixedOvernightSwapConvention {
            name: name.to_string(),
            index: index.clone(),
            fixed_day_count: day_count,
            payment_frequency: Period::of_years(1),
        });
    }

    fn register_basis(&mut self, name: &str, spread_index: &RateIndex, flat_index: &RateIndex) {
        self.register_ibor_ibor_swap(IborIborSwapConvention {
            name: name.to_string(),
            spread_index: spread_index.clone(),
            flat_index: flat_index.clone(),
        });
    }

    fn register_usd_conventions(&mut self) {
        let libor_3m = ibor(Currency::USD, "USD-LIBOR-3M", 3);
        let libor_6m = ibor(Currency::USD, "USD-LIBOR-6M", 6);
        let fed_fund = overnight(Currency::USD, "USD-FED-FUND");
        let sofr = overnight(Currency::USD, "USD-SOFR");

        self.register_term_index(Currency::USD, &libor_3m, DayCount::Act360);
        self.register_term_index(Currency::USD, &libor_6m, DayCount::Act360);
        self.register_ois("USD-FIXED-1Y-FED-FUND-OIS", &fed_fund, DayCount::Act360);
        self.register_ois("USD-FIXED-1Y-SOFR-OIS", &sofr, DayCount::Act360);
        self.register_fixed_ibor(
            "USD-FIXED-6M-LIBOR-3M",
            &libor_3m,
            DayCount::ThirtyU360,
            Period::of_months(6),
        );
        self.register_fixed_ibor(
            "USD-FIXED-1Y-LIBOR-3M",
            &libor_3m,
            DayCount::Act360,
            Period::of_years(1),
        );
        self.register_basis("USD-LIBOR-3M-LIBOR-6M", &libor_3m, &libor_6m);
    }

    fn register_eur_conventions(&mut self) {
        let euribor_3m = ibor(Currency::EUR, "EUR-EURIBOR-3M", 3);
        let euribor_6m = ibor(Currency::EUR, "EUR-EURIBOR-6M", 6);
        let eonia = overnight(Currency::EUR, "EUR-EONIA");
        let estr = overnight(Currency::EUR, "EUR-ESTR");

        self.register_term_index(Currency::EUR, &euribor_3m, DayCount::Act360);
        self.register_term_index(Currency::EUR, &euribor_6m, DayCount::Act360);
        self.register_ois("EUR-FIXED-1Y-EONIA-OIS", &eonia, DayCount::Act360);
        self.register_ois("EUR-FIXED-1Y-ESTR-OIS", &estr, DayCount::Act360);
        self.register_fixed_ibor(
            "EUR-FIXED-1Y-EURIBOR-3M",
            &euribor_3m,
            DayCount::ThirtyU360,
            Period::of_years(1),
        );
        self.register_fixed_ibor(
            "EUR-FIXED-1Y-EURIBOR-6M",
            &euribor_6m,
            DayCount::ThirtyU360,
            Period::of_years(1),
        );
        self.register_basis("EUR-EURIBOR-3M-EURIBOR-6M", &euribor_3m, &euribor_6m);
    }

    fn register_gbp_conventions(&mut self) {
        let libor_3m = ibor(Currency::GBP, "GBP-LIBOR-3M", 3);
        let libor_6m = ibor(Currency::GBP, "GBP-LIBOR-6M", 6);
        let sonia = overnight(Currency::GBP, "GBP-SONIA");

        self.register_term_index(Currency::GBP, &libor_3m, DayCount::Act365F);
        self.register_term_index(Currency::GBP, &libor_6m, DayCount::Act365F);
        self.register_ois("GBP-FIXED-1Y-SONIA-OIS", &sonia, DayCount::Act365F);
        self.register_fixed_ibor(
            "GBP-FIXED-1Y-LIBOR-3M",
            &libor_3m,
            DayCount::Act365F,
            Period::of_years(1),
        );
        self.register_fixed_ibor(
            "GBP-FIXED-6M-LIBOR-6M",
            &libor_6m,
            DayCount::Act365F,
            Period::of_months(6),
        );
        self.register_basis("GBP-LIBOR-3M-LIBOR-6M", &libor_3m, &libor_6m);
    }

    fn register_jpy_conventions(&mut self) {
        let libor_3m = ibor(Currency::JPY, "JPY-LIBOR-3M", 3);
        let libor_6m = ibor(Currency::JPY, "JPY-LIBOR-6M", 6);
        let tonar = overnight(Currency::JPY, "JPY-TONAR");

        self.register_term_index(Currency::JPY, &libor_3m, DayCount::Act360);
        self.register_term_index(Currency::JPY, &libor_6m, DayCount::Act360);
        self.register_ois("JPY-FIXED-1Y-TONAR-OIS", &tonar, DayCount::Act365F);
        self.register_fixed_ibor(
            "JPY-FIXED-6M-LIBOR-6M",
            &libor_6m,
            DayCount::Act365F,
            Period::of_months(6),
        );
        self.register_basis("JPY-LIBOR-3M-LIBOR-6M", &libor_3m, &libor_6m);
    }

    fn register_chf_conventions(&mut self) {
        let libor_3m = ibor(Currency::CHF, "CHF-LIBOR-3M", 3);
        let libor_6m = ibor(Currency::CHF, "CHF-LIBOR-6M", 6);
        let saron = overnight(Currency::CHF, "CHF-SARON");

        self.register_term_index(Currency::CHF, &libor_3m, DayCount::Act360);
        self.register_term_index(Currency::CHF, &libor_6m, DayCount::Act360);
        self.register_ois("CHF-FIXED-1Y-SARON-OIS", &saron, DayCount::Act360);
        self.register_fixed_ibor(
            "CHF-FIXED-1Y-LIBOR-3M",
            &libor_3m,
            DayCount::ThirtyU360,
            Period::of_years(1),
        );
        self.register_fixed_ibor(
            "CHF-FIXED-1Y-LIBOR-6M",
            &libor_6m,
            DayCount::ThirtyU360,
            Period::of_years(1),
        );
    }
}

fn ibor(currency: Currency, name: &str, months: u32) -> RateIndex {
    RateIndex::Ibor {
        currency,
        name: name.to_string(),
        tenor: Period::of_months(months),
    }
}

fn overnight(currency: Currency, name: &str) -> RateIndex {
    RateIndex::Overnight {
        currency,
        name: name.to_string(),
    }
}

fn lookup<T: Clone>(map: &HashMap<String, T>, kind: NodeKind, name: &str) -> CoreResult<T> {
    map.get(&key(name))
        .cloned()
        .ok_or_else(|| CoreError::unknown_convention(kind, name.trim()))
}

impl ConventionSource for ConventionRegistry {
    fn ibor_fixing_deposit(&self, name: &str) -> CoreResult<IborFixingDepositConvention> {
        lookup(&self.ibor_fixing_deposits, NodeKind::IborFixingDeposit, name)
    }

    fn fra(&self, name: &str) -> CoreResult<FraConvention> {
        lookup(&self.fras, NodeKind::Fra, name)
    }

    fn fixed_overnight_swap(&self, name: &str) -> CoreResult<FixedOvernightSwapConvention> {
        lookup(&self.fixed_overnight_swaps, NodeKind::FixedOvernightSwap, name)
    }

    fn fixed_ibor_swap(&self, name: &str) -> CoreResult<FixedIborSwapConvention> {
        lookup(&self.fixed_ibor_swaps, NodeKind::FixedIborSwap, name)
    }

    fn ibor_ibor_swap(&self, name: &str) -> CoreResult<IborIborSwapConvention> {
        lookup(&self.ibor_ibor_swaps, NodeKind::IborIborSwap, name)
    }
}

impl<T: ConventionSource + ?Sized> ConventionSource for &T {
    fn ibor_fixing_deposit(&self, name: &str) -> CoreResult<IborFixingDepositConvention> {
        (**self).ibor_fixing_deposit(name)
    }

    fn fra(&self, name: &str) -> CoreResult<FraConvention> {
        (**self).fra(name)
    }

    fn fixed_overnight_swap(&self, name: &str) -> CoreResult<FixedOvernightSwapConvention> {
        (**self).fixed_overnight_swap(name)
    }

    fn fixed_ibor_swap(&self, name: &str) -> CoreResult<FixedIborSwapConvention> {
        (**self).fixed_ibor_swap(name)
    }

    fn ibor_ibor_swap(&self, name: &str) -> CoreResult<IborIborSwapConvention> {
        (**self).ibor_ibor_swap(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lookup_is_case_insensitive() {
        let registry = ConventionRegistry::standard();
        let conv = registry.fra("usd-libor-3m").unwrap();
        assert_eq!(conv.name, "USD-LIBOR-3M");
        assert_eq!(conv.index.tenor(), Some(Period::of_months(3)));
    }

    #[test]
    fn test_unknown_name_reports_kind() {
        let registry = ConventionRegistry::standard();
        let err = registry.fixed_ibor_swap("USD-LIBOR-3M").unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownConvention {
                kind: NodeKind::FixedIborSwap,
                name: "USD-LIBOR-3M".to_string(),
            }
        );
    }

    #[test]
    fn test_standard_conventions_are_consistent() {
        let registry = ConventionRegistry::standard();
        for name in registry.names(NodeKind::IborFixingDeposit) {
            let conv = registry.ibor_fixing_deposit(name).unwrap();
            assert!(conv.deposit_period().is_ok());
        }
        for name in registry.names(NodeKind::FixedOvernightSwap) {
            assert!(registry.fixed_overnight_swap(name).unwrap().index.is_overnight());
        }
        for name in registry.names(NodeKind::IborIborSwap) {
            let conv = registry.ibor_ibor_swap(name).unwrap();
            assert_eq!(conv.spread_index.currency(), conv.flat_index.currency());
        }
    }

    #[test]
    fn test_custom_registration() {
        let index = RateIndex::parse("AUD-BBSW-3M").unwrap();
        let conv = FraConvention::new("AUD-BBSW-3M", index, DayCount::Act365F, 0).unwrap();
        let registry = ConventionRegistry::new().with_fra(conv.clone());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.fra("aud-bbsw-3m").unwrap(), conv);
        assert!(registry.ibor_fixing_deposit("AUD-BBSW-3M").is_err());
    }

    #[test]
    fn test_global_is_standard() {
        assert_eq!(
            ConventionRegistry::global().len(),
            ConventionRegistry::standard().len()
        );
        assert!(ConventionRegistry::new().is_empty());
    }
}
