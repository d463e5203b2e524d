//! Curve nodes: the calibration instruments of a curve.
//!
//! Each node pairs an instrument shape (a convention plus the period or
//! periods that fix its dates) with the market quote it is calibrated to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::conventions::{
    FixedIborSwapConvention, FixedOvernightSwapConvention, FraConvention,
    IborFixingDepositConvention, IborIborSwapConvention,
};
use crate::types::{Period, QuoteId};

// =============================================================================
// NODE KIND
// =============================================================================

/// The five instrument kinds a curve node can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Deposit fixing against an IBOR index.
    IborFixingDeposit,
    /// Forward rate agreement.
    Fra,
    /// Fixed vs overnight swap (OIS).
    FixedOvernightSwap,
    /// Fixed vs IBOR swap.
    FixedIborSwap,
    /// IBOR vs IBOR basis swap.
    IborIborSwap,
}

impl NodeKind {
    /// Returns all node kinds.
    #[must_use]
    pub fn all() -> &'static [NodeKind] {
        &[
            NodeKind::IborFixingDeposit,
            NodeKind::Fra,
            NodeKind::FixedOvernightSwap,
            NodeKind::FixedIborSwap,
            NodeKind::IborIborSwap,
        ]
    }

    /// Short type code used in node files.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            NodeKind::IborFixingDeposit => "FIX",
            NodeKind::Fra => "FRA",
            NodeKind::FixedOvernightSwap => "OIS",
            NodeKind::FixedIborSwap => "IRS",
            NodeKind::IborIborSwap => "BAS",
        }
    }

    /// Long type name, also accepted in node files.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::IborFixingDeposit => "IborFixingDeposit",
            NodeKind::Fra => "Fra",
            NodeKind::FixedOvernightSwap => "FixedOvernightSwap",
            NodeKind::FixedIborSwap => "FixedIborSwap",
            NodeKind::IborIborSwap => "IborIborSwap",
        }
    }

    /// Looks up a kind by its short code or long name.
    ///
    /// Matching is exact: `FRA` and `Fra` are accepted, `fra` is not.
    pub fn from_code(code: &str) -> Option<Self> {
        NodeKind::all()
            .iter()
            .copied()
            .find(|kind| kind.code() == code || kind.name() == code)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// NODE SHAPES
// =============================================================================

/// A deposit node; its term is the tenor of the convention's index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IborFixingDepositCurveNode {
    /// Deposit convention.
    pub convention: IborFixingDepositConvention,
    /// Deposit term.
    pub deposit_period: Period,
    /// Market quote the node is calibrated to.
    pub quote_id: QuoteId,
    /// Spread added to the quote.
    pub spread: f64,
    /// Display label.
    pub label: String,
}

/// A FRA node, e.g. 3Mx6M.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraCurveNode {
    /// FRA convention.
    pub convention: FraConvention,
    /// Period from spot to the start of the FRA.
    pub period_to_start: Period,
    /// Period from spot to the end of the FRA.
    pub period_to_end: Period,
    /// Market quote the node is calibrated to.
    pub quote_id: QuoteId,
    /// Spread added to the quote.
    pub spread: f64,
    /// Display label.
    pub label: String,
}

/// A fixed vs overnight swap node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedOvernightSwapCurveNode {
    /// OIS convention.
    pub convention: FixedOvernightSwapConvention,
    /// Swap tenor.
    pub tenor: Period,
    /// Market quote the node is calibrated to.
    pub quote_id: QuoteId,
    /// Spread added to the quote.
    pub spread: f64,
    /// Display label.
    pub label: String,
}

/// A fixed vs IBOR swap node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedIborSwapCurveNode {
    /// Swap convention.
    pub convention: FixedIborSwapConvention,
    /// Swap tenor.
    pub tenor: Period,
    /// Market quote the node is calibrated to.
    pub quote_id: QuoteId,
    /// Spread added to the quote.
    pub spread: f64,
    /// Display label.
    pub label: String,
}

/// An IBOR vs IBOR basis swap node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IborIborSwapCurveNode {
    /// Basis swap convention.
    pub convention: IborIborSwapConvention,
    /// Swap tenor.
    pub tenor: Period,
    /// Market quote the node is calibrated to.
    pub quote_id: QuoteId,
    /// Spread added to the quote.
    pub spread: f64,
    /// Display label.
    pub label: String,
}

// =============================================================================
// CURVE NODE
// =============================================================================

/// One calibration instrument of a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CurveNode {
    /// IBOR fixing deposit.
    IborFixingDeposit(IborFixingDepositCurveNode),
    /// Forward rate agreement.
    Fra(FraCurveNode),
    /// Fixed vs overnight swap.
    FixedOvernightSwap(FixedOvernightSwapCurveNode),
    /// Fixed vs IBOR swap.
    FixedIborSwap(FixedIborSwapCurveNode),
    /// IBOR vs IBOR basis swap.
    IborIborSwap(IborIborSwapCurveNode),
}

impl CurveNode {
    /// Returns the instrument kind.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            CurveNode::IborFixingDeposit(_) => NodeKind::IborFixingDeposit,
            CurveNode::Fra(_) => NodeKind::Fra,
            CurveNode::FixedOvernightSwap(_) => NodeKind::FixedOvernightSwap,
            CurveNode::FixedIborSwap(_) => NodeKind::FixedIborSwap,
            CurveNode::IborIborSwap(_) => NodeKind::IborIborSwap,
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            CurveNode::IborFixingDeposit(n) => &n.label,
            CurveNode::Fra(n) => &n.label,
            CurveNode::FixedOvernightSwap(n) => &n.label,
            CurveNode::FixedIborSwap(n) => &n.label,
            CurveNode::IborIborSwap(n) => &n.label,
        }
    }

    /// Returns the market quote reference.
    #[must_use]
    pub fn quote_id(&self) -> &QuoteId {
        match self {
            CurveNode::IborFixingDeposit(n) => &n.quote_id,
            CurveNode::Fra(n) => &n.quote_id,
            CurveNode::FixedOvernightSwap(n) => &n.quote_id,
            CurveNode::FixedIborSwap(n) => &n.quote_id,
            CurveNode::IborIborSwap(n) => &n.quote_id,
        }
    }

    /// Returns the spread added to the quote.
    #[must_use]
    pub fn spread(&self) -> f64 {
        match self {
            CurveNode::IborFixingDeposit(n) => n.spread,
            CurveNode::Fra(n) => n.spread,
            CurveNode::FixedOvernightSwap(n) => n.spread,
            CurveNode::FixedIborSwap(n) => n.spread,
            CurveNode::IborIborSwap(n) => n.spread,
        }
    }

    /// Returns the name of the node's convention.
    #[must_use]
    pub fn convention_name(&self) -> &str {
        match self {
            CurveNode::IborFixingDeposit(n) => &n.convention.name,
            CurveNode::Fra(n) => &n.convention.name,
            CurveNode::FixedOvernightSwap(n) => &n.convention.name,
            CurveNode::FixedIborSwap(n) => &n.convention.name,
            CurveNode::IborIborSwap(n) => &n.convention.name,
        }
    }

    /// Period from spot to the end of the instrument.
    #[must_use]
    pub fn end_period(&self) -> Period {
        match self {
            CurveNode::IborFixingDeposit(n) => n.deposit_period,
            CurveNode::Fra(n) => n.period_to_end,
            CurveNode::FixedOvernightSwap(n) => n.tenor,
            CurveNode::FixedIborSwap(n) => n.tenor,
            CurveNode::IborIborSwap(n) => n.tenor,
        }
    }
}

impl From<IborFixingDepositCurveNode> for CurveNode {
    fn from(node: IborFixingDepositCurveNode) -> Self {
        CurveNode::IborFixingDeposit(node)
    }
}

impl From<FraCurveNode> for CurveNode {
    fn from(node: FraCurveNode) -> Self {
        CurveNode::Fra(node)
    }
}

impl From<FixedOvernightSwapCurveNode> for CurveNode {
    fn from(node: FixedOvernightSwapCurveNode) -> Self {
        CurveNode::FixedOvernightSwap(node)
    }
}

impl From<FixedIborSwapCurveNode> for CurveNode {
    fn from(node: FixedIborSwapCurveNode) -> Self {
        CurveNode::FixedIborSwap(node)
    }
}

impl From<IborIborSwapCurveNode> for CurveNode {
    fn from(node: IborIborSwapCurveNode) -> Self {
        CurveNode::IborIborSwap(node)
    }
}
