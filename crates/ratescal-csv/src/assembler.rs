//! Collects nodes per curve across node files and joins them with settings.

use std::collections::BTreeMap;

use ratescal_core::conventions::ConventionSource;
use ratescal_core::curve::{CurveNode, NodalCurveDefinition};
use ratescal_core::CurveName;
use tracing::debug;

use crate::error::{LoadError, LoadResult};
use crate::nodes::{CurveNodeFactory, NodeRow};
use crate::settings::SettingsMap;
use crate::table::CsvTable;

/// Built curve definitions by name.
pub type CurveDefinitions = BTreeMap<CurveName, NodalCurveDefinition>;

/// Accumulates curve nodes by curve name.
///
/// Nodes for one curve may come from several tables; they are appended in
/// table order, then row order.
#[derive(Debug, Clone, Default)]
pub struct CurveDefinitionAssembler {
    nodes: BTreeMap<CurveName, Vec<CurveNode>>,
}

impl CurveDefinitionAssembler {
    /// Creates an empty assembler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a node from every row of a node table.
    pub fn scan<C: ConventionSource>(
        &mut self,
        table: &CsvTable,
        factory: &CurveNodeFactory<C>,
    ) -> LoadResult<()> {
        for row in table.rows() {
            let node_row = NodeRow::from_csv(&row).map_err(|e| row.error(e))?;
            let node = factory.create(&node_row).map_err(|e| row.error(e))?;
            self.add_node(node_row.curve, node);
        }
        debug!(
            resource = table.resource(),
            rows = table.row_count(),
            "Scanned curve nodes"
        );
        Ok(())
    }

    /// Appends a node to a curve.
    pub fn add_node(&mut self, curve: CurveName, node: CurveNode) {
        self.nodes.entry(curve).or_default().push(node);
    }

    /// Joins every curve's nodes with its settings.
    ///
    /// Nodes are keyed by curve name, so each definition is built exactly
    /// once. Fails if a curve has no settings.
    pub fn build(self, settings: &SettingsMap) -> LoadResult<CurveDefinitions> {
        self.nodes
            .into_iter()
            .map(|(name, nodes)| -> LoadResult<(CurveName, NodalCurveDefinition)> {
                let curve_settings = settings
                    .get(&name)
                    .ok_or_else(|| LoadError::MissingSettings {
                        curve: name.clone(),
                    })?;
                let definition = curve_settings.create_definition(name.clone(), nodes);
                Ok((name, definition))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::load_curve_settings;
    use ratescal_core::conventions::ConventionRegistry;

    const NODE_HEADER: &str =
        "Curve Name,Label,Symbology,Ticker,Field Name,Type,Convention,Time,Spread\n";

    fn nodes(resource: &str, body: &str) -> CsvTable {
        CsvTable::parse(resource, &format!("{NODE_HEADER}{body}")).unwrap()
    }

    fn settings(curves: &[&str]) -> SettingsMap {
        let mut text =
            "Curve Name,Value Type,Day Count,Interpolator,Left Extrapolator,Right Extrapolator\n"
                .to_string();
        for curve in curves {
            text.push_str(&format!("{curve},zero,Act/365F,Linear,Flat,Flat\n"));
        }
        load_curve_settings(&CsvTable::parse("settings.csv", &text).unwrap()).unwrap()
    }

    #[test]
    fn test_nodes_accumulate_across_tables() {
        let factory = CurveNodeFactory::new(ConventionRegistry::standard());
        let mut assembler = CurveDefinitionAssembler::new();
        assembler
            .scan(
                &nodes("a.csv", "USD-3ML,,OG,T1,,FIX,USD-LIBOR-3M,,\n"),
                &factory,
            )
            .unwrap();
        assembler
            .scan(
                &nodes(
                    "b.csv",
                    "USD-3ML,,OG,T2,,FRA,USD-LIBOR-3M,3Mx6M,\n\
                     USD-3ML,,OG,T3,,IRS,USD-FIXED-6M-LIBOR-3M,2Y,\n",
                ),
                &factory,
            )
            .unwrap();

        let curves = assembler.build(&settings(&["USD-3ML"])).unwrap();
        let curve = &curves[&CurveName::new("USD-3ML")];
        let labels: Vec<_> = curve.nodes.iter().map(CurveNode::label).collect();
        assert_eq!(
            labels,
            ["IborFixingDeposit-3M", "Fra-3Mx6M", "FixedIborSwap-2Y"]
        );
    }

    #[test]
    fn test_missing_settings() {
        let factory = CurveNodeFactory::new(ConventionRegistry::standard());
        let mut assembler = CurveDefinitionAssembler::new();
        assembler
            .scan(&nodes("n.csv", "USD-3ML,,OG,T1,,FIX,USD-LIBOR-3M,,\n"), &factory)
            .unwrap();
        let err = assembler.build(&settings(&["USD-Disc"])).unwrap_err();
        assert_eq!(err.to_string(), "Missing settings for curve: USD-3ML");
    }

    #[test]
    fn test_unused_settings_are_ignored() {
        let assembler = CurveDefinitionAssembler::new();
        assert!(assembler.build(&settings(&["USD-Disc"])).unwrap().is_empty());
    }

    #[test]
    fn test_row_errors_carry_position() {
        let factory = CurveNodeFactory::new(ConventionRegistry::standard());
        let mut assembler = CurveDefinitionAssembler::new();
        let err = assembler
            .scan(
                &nodes("n.csv", "C,,OG,T1,,FIX,USD-LIBOR-3M,,\nC,,OG,T2,,XYZ,USD-LIBOR-3M,,\n"),
                &factory,
            )
            .unwrap_err();
        assert_eq!(err.to_string(), "n.csv, row 2: Invalid curve node type: 'XYZ'");
    }
}
