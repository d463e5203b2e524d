//! # Ratescal CSV
//!
//! Loads rates curve calibration sets from CSV files.
//!
//! A calibration set is three kinds of file, joined by curve name:
//!
//! - **groups**: `Group Name, Curve Type, Reference, Curve Name`, the role a
//!   curve plays in a group (discount curve for a currency, forward curve
//!   for an index)
//! - **settings**: `Curve Name, Value Type, Day Count, Interpolator,
//!   Left Extrapolator, Right Extrapolator`, one row per curve
//! - **nodes** (one or more files): `Curve Name, Label, Symbology, Ticker,
//!   Field Name, Type, Convention, Time, Spread`, one calibration instrument
//!   per row
//!
//! The result is a map from group name to [`CurveGroupDefinition`].
//!
//! ## Example
//!
//! ```rust
//! use ratescal_csv::{CsvTable, RatesCalibrationCsvLoader};
//! use ratescal_core::{Currency, CurveGroupName};
//!
//! let groups = CsvTable::parse(
//!     "groups.csv",
//!     "Group Name,Curve Type,Reference,Curve Name\n\
//!      Default,discount,USD,USD-Disc\n",
//! )?;
//! let settings = CsvTable::parse(
//!     "settings.csv",
//!     "Curve Name,Value Type,Day Count,Interpolator,Left Extrapolator,Right Extrapolator\n\
//!      USD-Disc,zero,Act/365F,Linear,Flat,Flat\n",
//! )?;
//! let nodes = CsvTable::parse(
//!     "nodes.csv",
//!     "Curve Name,Label,Symbology,Ticker,Field Name,Type,Convention,Time,Spread\n\
//!      USD-Disc,,OG-Ticker,USD-OIS-1Y,,OIS,USD-FIXED-1Y-FED-FUND-OIS,1Y,\n",
//! )?;
//!
//! let loaded = RatesCalibrationCsvLoader::standard().load_tables(&groups, &settings, &[nodes])?;
//! let group = &loaded[&CurveGroupName::new("Default")];
//! assert_eq!(group.discount_curve(Currency::USD).unwrap().node_count(), 1);
//! # Ok::<(), ratescal_csv::LoadError>(())
//! ```
//!
//! [`CurveGroupDefinition`]: ratescal_core::curve::CurveGroupDefinition

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod assembler;
pub mod error;
pub mod groups;
pub mod loader;
pub mod manifest;
pub mod mapper;
pub mod nodes;
pub mod settings;
pub mod table;
pub mod tenor;

pub use assembler::{CurveDefinitionAssembler, CurveDefinitions};
pub use error::{LoadError, LoadResult};
pub use groups::{load_curve_groups, CurveRoles};
pub use loader::RatesCalibrationCsvLoader;
pub use manifest::LoadManifest;
pub use mapper::{map_groups, CurveGroupMap};
pub use nodes::{CurveNodeFactory, NodeRow};
pub use settings::{load_curve_settings, SettingsMap};
pub use table::{CsvRow, CsvTable};
pub use tenor::{parse_fra_tenor, parse_simple_tenor};
