//! Top-level loader for a calibration set.

use std::path::Path;

use ratescal_core::conventions::{ConventionRegistry, ConventionSource};
use tracing::info;

use crate::assembler::CurveDefinitionAssembler;
use crate::error::{LoadError, LoadResult};
use crate::groups::load_curve_groups;
use crate::manifest::LoadManifest;
use crate::mapper::{map_groups, CurveGroupMap};
use crate::nodes::CurveNodeFactory;
use crate::settings::load_curve_settings;
use crate::table::CsvTable;

/// Loads curve group definitions from a groups file, a settings file and one
/// or more node files.
///
/// Every load reads its inputs afresh and either returns the complete set of
/// groups or fails; nothing is cached between loads.
///
/// # Example
///
/// ```rust,no_run
/// use ratescal_csv::RatesCalibrationCsvLoader;
///
/// let loader = RatesCalibrationCsvLoader::standard();
/// let groups = loader
///     .load("groups.csv", "settings.csv", ["usd-nodes.csv"])
///     .unwrap();
/// for (name, group) in &groups {
///     println!("{}: {} curves", name, group.curve_names().len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RatesCalibrationCsvLoader<C> {
    factory: CurveNodeFactory<C>,
}

impl RatesCalibrationCsvLoader<&'static ConventionRegistry> {
    /// Creates a loader using the standard market conventions.
    pub fn standard() -> Self {
        Self::new(ConventionRegistry::global())
    }
}

impl<C: ConventionSource> RatesCalibrationCsvLoader<C> {
    /// Creates a loader resolving convention names with `conventions`.
    pub fn new(conventions: C) -> Self {
        Self {
            factory: CurveNodeFactory::new(conventions),
        }
    }

    /// Loads from files on disk.
    pub fn load<P: AsRef<Path>>(
        &self,
        groups: impl AsRef<Path>,
        settings: impl AsRef<Path>,
        nodes: impl IntoIterator<Item = P>,
    ) -> LoadResult<CurveGroupMap> {
        let groups = CsvTable::from_path(groups)?;
        let settings = CsvTable::from_path(settings)?;
        let nodes = nodes
            .into_iter()
            .map(CsvTable::from_path)
            .collect::<LoadResult<Vec<_>>>()?;
        self.load_tables(&groups, &settings, &nodes)
    }

    /// Loads the files named by a manifest.
    pub fn load_manifest(&self, manifest: &LoadManifest) -> LoadResult<CurveGroupMap> {
        manifest.validate()?;
        self.load(
            manifest.groups_path(),
            manifest.settings_path(),
            manifest.node_paths(),
        )
    }

    /// Loads from tables already in memory.
    pub fn load_tables(
        &self,
        groups: &CsvTable,
        settings: &CsvTable,
        nodes: &[CsvTable],
    ) -> LoadResult<CurveGroupMap> {
        if nodes.is_empty() {
            return Err(LoadError::NoNodeResources);
        }
        info!(
            groups = groups.resource(),
            settings = settings.resource(),
            node_files = nodes.len(),
            "Loading curve groups"
        );

        let roles = load_curve_groups(groups)?;
        let settings = load_curve_settings(settings)?;

        let mut assembler = CurveDefinitionAssembler::new();
        for table in nodes {
            assembler.scan(table, &self.factory)?;
        }
        let curves = assembler.build(&settings)?;
        let curve_count = curves.len();

        let groups = map_groups(&roles, curves);
        info!(
            groups = groups.len(),
            curves = curve_count,
            settings = settings.len(),
            "Loaded curve groups"
        );
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratescal_core::Currency;

    fn table(resource: &str, text: &str) -> CsvTable {
        CsvTable::parse(resource, text).unwrap()
    }

    #[test]
    fn test_no_node_tables() {
        let loader = RatesCalibrationCsvLoader::standard();
        let groups = table("g", "Group Name,Curve Type,Reference,Curve Name\n");
        let settings = table("s", "Curve Name\n");
        let err = loader.load_tables(&groups, &settings, &[]).unwrap_err();
        assert!(matches!(err, LoadError::NoNodeResources));
    }

    #[test]
    fn test_custom_conventions() {
        let registry = ConventionRegistry::new();
        let loader = RatesCalibrationCsvLoader::new(&registry);
        let groups = table(
            "g",
            "Group Name,Curve Type,Reference,Curve Name\nG,discount,USD,A\n",
        );
        let settings = table(
            "s",
            "Curve Name,Value Type,Day Count,Interpolator,Left Extrapolator,Right Extrapolator\n\
             A,zero,Act/360,Linear,Flat,Flat\n",
        );
        let nodes = table(
            "n",
            "Curve Name,Label,Symbology,Ticker,Field Name,Type,Convention,Time,Spread\n\
             A,,OG,T,,FRA,USD-LIBOR-3M,3Mx6M,\n",
        );

        // The empty registry knows no conventions.
        let err = loader
            .load_tables(&groups, &settings, std::slice::from_ref(&nodes))
            .unwrap_err();
        assert!(matches!(err.root(), LoadError::Core(_)));

        let loaded = RatesCalibrationCsvLoader::standard()
            .load_tables(&groups, &settings, &[nodes])
            .unwrap();
        let group = loaded.values().next().unwrap();
        assert_eq!(group.discount_curve(Currency::USD).unwrap().node_count(), 1);
    }
}
