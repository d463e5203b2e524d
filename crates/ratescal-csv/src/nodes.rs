//! Curve node files and the node factory.
//!
//! A node row names its curve, its market quote, an instrument type code, a
//! convention and a tenor. The type code picks one of five constructors; each
//! resolves its convention through a [`ConventionSource`] and reads the tenor
//! with the grammar of its instrument kind.

use ratescal_core::conventions::ConventionSource;
use ratescal_core::curve::{
    CurveNode, FixedIborSwapCurveNode, FixedOvernightSwapCurveNode, FraCurveNode,
    IborFixingDepositCurveNode, IborIborSwapCurveNode, NodeKind,
};
use ratescal_core::types::{FieldName, QuoteId, StandardId};
use ratescal_core::{CurveName, Period};

use crate::error::{LoadError, LoadResult};
use crate::table::CsvRow;
use crate::tenor::{parse_fra_tenor, parse_simple_tenor};

/// Column holding the curve name.
pub const CURVE_NAME: &str = "Curve Name";
/// Column holding the node label; may be blank.
pub const LABEL: &str = "Label";
/// Column holding the quote scheme.
pub const SYMBOLOGY: &str = "Symbology";
/// Column holding the quote identifier within the scheme.
pub const TICKER: &str = "Ticker";
/// Column holding the quote field; blank means `MarketValue`.
pub const FIELD_NAME: &str = "Field Name";
/// Column holding the instrument type code.
pub const TYPE: &str = "Type";
/// Column holding the convention name.
pub const CONVENTION: &str = "Convention";
/// Column holding the tenor text.
pub const TIME: &str = "Time";
/// Column holding the spread; blank means zero.
pub const SPREAD: &str = "Spread";

/// One node row with its quote reference and spread already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRow {
    /// Curve the node belongs to.
    pub curve: CurveName,
    /// Label as written, `None` when blank.
    pub label: Option<String>,
    /// Market quote the node is calibrated to.
    pub quote_id: QuoteId,
    /// Instrument type code as written.
    pub kind_code: String,
    /// Convention name as written.
    pub convention: String,
    /// Tenor text as written.
    pub time: String,
    /// Spread added to the quote.
    pub spread: f64,
}

impl NodeRow {
    /// Reads a node row from a table row.
    pub fn from_csv(row: &CsvRow<'_>) -> LoadResult<Self> {
        let curve = CurveName::new(row.required(CURVE_NAME)?);
        let standard_id = StandardId::new(row.required(SYMBOLOGY)?, row.required(TICKER)?);
        let field_name = row
            .optional(FIELD_NAME)?
            .map_or_else(FieldName::market_value, FieldName::new);
        let spread = match row.optional(SPREAD)? {
            None => 0.0,
            Some(text) => text.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                column: SPREAD.to_string(),
                value: text.to_string(),
            })?,
        };

        Ok(Self {
            curve,
            label: row.optional(LABEL)?.map(str::to_string),
            quote_id: QuoteId::new(standard_id, field_name),
            kind_code: row.required(TYPE)?.to_string(),
            convention: row.required(CONVENTION)?.to_string(),
            time: row.field(TIME)?.to_string(),
            spread,
        })
    }
}

/// Builds curve nodes from node rows.
#[derive(Debug, Clone)]
pub struct CurveNodeFactory<C> {
    conventions: C,
}

impl<C: ConventionSource> CurveNodeFactory<C> {
    /// Creates a factory resolving conventions from `conventions`.
    pub fn new(conventions: C) -> Self {
        Self { conventions }
    }

    /// Builds the node described by a row.
    pub fn create(&self, row: &NodeRow) -> LoadResult<CurveNode> {
        let kind = NodeKind::from_code(&row.kind_code).ok_or_else(|| LoadError::UnknownNodeType {
            code: row.kind_code.clone(),
        })?;
        match kind {
            NodeKind::IborFixingDeposit => self.ibor_fixing_deposit(row),
            NodeKind::Fra => self.fra(row),
            NodeKind::FixedOvernightSwap => self.fixed_overnight_swap(row),
            NodeKind::FixedIborSwap => self.fixed_ibor_swap(row),
            NodeKind::IborIborSwap => self.ibor_ibor_swap(row),
        }
    }

    // The time column is not read: the deposit term is the index tenor.
    fn ibor_fixing_deposit(&self, row: &NodeRow) -> LoadResult<CurveNode> {
        let convention = self.conventions.ibor_fixing_deposit(&row.convention)?;
        let deposit_period = convention.deposit_period()?;
        let label = label_or_default(row, NodeKind::IborFixingDeposit, || {
            deposit_period.to_tenor_string()
        });
        Ok(IborFixingDepositCurveNode {
            convention,
            deposit_period,
            quote_id: row.quote_id.clone(),
            spread: row.spread,
            label,
        }
        .into())
    }

    fn fra(&self, row: &NodeRow) -> LoadResult<CurveNode> {
        let (period_to_start, period_to_end) = parse_fra_tenor(&row.time)?;
        let convention = self.conventions.fra(&row.convention)?;
        let label = label_or_default(row, NodeKind::Fra, || {
            format!(
                "{}x{}",
                period_to_start.to_tenor_string(),
                period_to_end.to_tenor_string()
            )
        });
        Ok(FraCurveNode {
            convention,
            period_to_start,
            period_to_end,
            quote_id: row.quote_id.clone(),
            spread: row.spread,
            label,
        }
        .into())
    }

    fn fixed_overnight_swap(&self, row: &NodeRow) -> LoadResult<CurveNode> {
        let tenor = parse_simple_tenor(NodeKind::FixedOvernightSwap, &row.time)?;
        let convention = self.conventions.fixed_overnight_swap(&row.convention)?;
        Ok(FixedOvernightSwapCurveNode {
            convention,
            tenor,
            quote_id: row.quote_id.clone(),
            spread: row.spread,
            label: swap_label(row, NodeKind::FixedOvernightSwap, tenor),
        }
        .into())
    }

    fn fixed_ibor_swap(&self, row: &NodeRow) -> LoadResult<CurveNode> {
        let tenor = parse_simple_tenor(NodeKind::FixedIborSwap, &row.time)?;
        let convention = self.conventions.fixed_ibor_swap(&row.convention)?;
        Ok(FixedIborSwapCurveNode {
            convention,
            tenor,
            quote_id: row.quote_id.clone(),
            spread: row.spread,
            label: swap_label(row, NodeKind::FixedIborSwap, tenor),
        }
        .into())
    }

    fn ibor_ibor_swap(&self, row: &NodeRow) -> LoadResult<CurveNode> {
        let tenor = parse_simple_tenor(NodeKind::IborIborSwap, &row.time)?;
        let convention = self.conventions.ibor_ibor_swap(&row.convention)?;
        Ok(IborIborSwapCurveNode {
            convention,
            tenor,
            quote_id: row.quote_id.clone(),
            spread: row.spread,
            label: swap_label(row, NodeKind::IborIborSwap, tenor),
        }
        .into())
    }
}

fn label_or_default(row: &NodeRow, kind: NodeKind, time: impl FnOnce() -> String) -> String {
    row.label
        .clone()
        .unwrap_or_else(|| format!("{}-{}", kind, time()))
}

fn swap_label(row: &NodeRow, kind: NodeKind, tenor: Period) -> String {
    label_or_default(row, kind, || tenor.to_tenor_string())
}
