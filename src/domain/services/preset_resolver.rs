//! Preset catalog and `extends` resolution
//!
//! A preset names a bundle of units. Presets can extend other presets; the
//! resolved set is the union of the whole `extends` tree. Cycles are errors.

use std::collections::{BTreeMap, BTreeSet};

use serde::Deserialize;

use crate::error::{FactoryError, FactoryResult};

/// Units selected by a preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillSelection {
    /// `skills: "*"`
    All,
    Named(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub description: String,
    pub extends: Vec<String>,
    pub skills: SkillSelection,
}

/// Name and description, as shown in a picker
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PresetSummary {
    pub name: String,
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(s) if s.is_empty() => Vec::new(),
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

#[derive(Deserialize)]
struct RawPreset {
    #[serde(default)]
    description: String,
    #[serde(default)]
    extends: Option<OneOrMany>,
    #[serde(default)]
    skills: Option<OneOrMany>,
}

impl From<RawPreset> for Preset {
    fn from(raw: RawPreset) -> Self {
        let skills = match raw.skills {
            Some(OneOrMany::One(s)) if s == "*" => SkillSelection::All,
            Some(other) => SkillSelection::Named(other.into_vec()),
            None => SkillSelection::Named(Vec::new()),
        };
        Preset {
            description: raw.description,
            extends: raw.extends.map(OneOrMany::into_vec).unwrap_or_default(),
            skills,
        }
    }
}

/// All presets defined by a factory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: BTreeMap<String, Preset>,
}

impl PresetCatalog {
    /// Parse `presets.yaml` content. An empty document is an empty catalog.
    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: Option<BTreeMap<String, RawPreset>> =
            serde_yaml_ng::from_str(content).map_err(|e| e.to_string())?;
        Ok(Self {
            presets: raw
                .unwrap_or_default()
                .into_iter()
                .map(|(name, raw)| (name, Preset::from(raw)))
                .collect(),
        })
    }

    pub fn insert(&mut self, name: impl Into<String>, preset: Preset) {
        self.presets.insert(name.into(), preset);
    }

    pub fn get(&self, name: &str) -> Option<&Preset> {
        self.presets.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Public presets sorted by name. Names starting with `_` are internal
    /// building blocks and stay hidden.
    pub fn list(&self) -> Vec<PresetSummary> {
        self.presets
            .iter()
            .filter(|(name, _)| !name.starts_with('_'))
            .map(|(name, preset)| PresetSummary {
                name: name.clone(),
                description: preset.description.clone(),
            })
            .collect()
    }

    /// Unit names selected by `name`, with `extends` expanded depth-first.
    /// `all_units` is what `skills: "*"` stands for.
    pub fn resolve(&self, name: &str, all_units: &[String]) -> FactoryResult<BTreeSet<String>> {
        let mut selected = BTreeSet::new();
        let mut chain = Vec::new();
        self.collect(name, all_units, &mut chain, &mut selected)?;
        Ok(selected)
    }

    fn collect<'a>(
        &'a self,
        name: &'a str,
        all_units: &[String],
        chain: &mut Vec<&'a str>,
        selected: &mut BTreeSet<String>,
    ) -> FactoryResult<()> {
        if chain.contains(&name) {
            let mut names: Vec<&str> = chain.clone();
            names.push(name);
            return Err(FactoryError::PresetCycle {
                chain: names.join(" -> "),
            });
        }

        let preset = self
            .presets
            .get(name)
            .ok_or_else(|| FactoryError::UnknownPreset {
                name: name.to_string(),
            })?;

        chain.push(name);
        for parent in &preset.extends {
            self.collect(parent, all_units, chain, selected)?;
        }
        chain.pop();

        match &preset.skills {
            SkillSelection::All => selected.extend(all_units.iter().cloned()),
            SkillSelection::Named(names) => selected.extend(names.iter().cloned()),
        }
        Ok(())
    }
}
