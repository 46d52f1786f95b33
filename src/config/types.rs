use serde::{Deserialize, Serialize};

use crate::session::RadiusPolicy;

/// Header names of the registry columns the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    #[serde(default = "default_taxon_column")]
    pub taxon: String,
    #[serde(default = "default_id_column")]
    pub id: String,
    #[serde(default = "default_name_column")]
    pub name: String,
    #[serde(default = "default_sex_column")]
    pub sex: String,
    #[serde(default = "default_sire_column")]
    pub sire: String,
    #[serde(default = "default_dam_column")]
    pub dam: String,
    #[serde(default = "default_dob_column")]
    pub dob: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            taxon: default_taxon_column(),
            id: default_id_column(),
            name: default_name_column(),
            sex: default_sex_column(),
            sire: default_sire_column(),
            dam: default_dam_column(),
            dob: default_dob_column(),
        }
    }
}

fn default_taxon_column() -> String { "Taxon".to_string() }
fn default_id_column() -> String { "DLC_ID".to_string() }
fn default_name_column() -> String { "Name".to_string() }
fn default_sex_column() -> String { "Sex".to_string() }
fn default_sire_column() -> String { "Sire_ID".to_string() }
fn default_dam_column() -> String { "Dam_ID".to_string() }
fn default_dob_column() -> String { "DOB".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_taxon")]
    pub taxon: String,
    #[serde(default)]
    pub columns: ColumnNames,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            taxon: default_taxon(),
            columns: ColumnNames::default(),
        }
    }
}

fn default_source() -> String { "DataRecord_2_DLC_Animal_List_05Feb2019.csv".to_string() }
fn default_taxon() -> String { "LCAT".to_string() }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "default_era")]
    pub default_era: (i32, i32),
    #[serde(default = "default_leaderboard_size")]
    pub leaderboard_size: usize,
    #[serde(default = "default_radius")]
    pub default_radius: u32,
    #[serde(default)]
    pub radius_policy: RadiusPolicy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_era: default_era(),
            leaderboard_size: default_leaderboard_size(),
            default_radius: default_radius(),
            radius_policy: RadiusPolicy::default(),
        }
    }
}

const fn default_era() -> (i32, i32) { (1980, 2010) }
const fn default_leaderboard_size() -> usize { 15 }
const fn default_radius() -> u32 { 3 }

/// Colors and sizing handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_female_color")]
    pub female_color: String,
    #[serde(default = "default_male_color")]
    pub male_color: String,
    #[serde(default = "default_male_color")]
    pub unknown_color: String,
    #[serde(default = "default_edge_color")]
    pub edge_color: String,
    #[serde(default = "default_base_size")]
    pub base_size: f64,
    #[serde(default = "default_size_scale")]
    pub size_scale: f64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            female_color: default_female_color(),
            male_color: default_male_color(),
            unknown_color: default_male_color(),
            edge_color: default_edge_color(),
            base_size: default_base_size(),
            size_scale: default_size_scale(),
        }
    }
}

fn default_female_color() -> String { "#D16488".to_string() }
fn default_male_color() -> String { "#5C88DA".to_string() }
fn default_edge_color() -> String { "#BDC3C7".to_string() }
const fn default_base_size() -> f64 { 15.0 }
const fn default_size_scale() -> f64 { 150.0 }

/// Contents of `pedigree.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub explorer: ExplorerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}
