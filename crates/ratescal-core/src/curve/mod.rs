//! Curve definitions, nodes and group roles.

mod definition;
mod node;
mod role;

pub use definition::{
    CurveGroupDefinition, CurveGroupDefinitionBuilder, CurveSettings, NodalCurveDefinition,
};
pub use node::{
    CurveNode, FixedIborSwapCurveNode, FixedOvernightSwapCurveNode, FraCurveNode,
    IborFixingDepositCurveNode, IborIborSwapCurveNode, NodeKind,
};
pub use role::CurveRole;
