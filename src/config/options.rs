//! Tool option schema
//!
//! Synthesis and implementation options arrive as free-form YAML maps. They
//! are checked against the tables below when the project is loaded, so the
//! script generator only ever sees recognized, typed settings.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::OrderedMap;
use crate::error::{Result, XilError, config};

/// Scalar option value as written in the project document
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl OptionValue {
    /// Value as it is passed to a run-step argument property.
    ///
    /// Booleans map `true` to `"off"` and `false` to `"on"`. Existing
    /// project configurations depend on this mapping.
    pub fn to_step_arg(&self) -> String {
        match self {
            Self::Bool(true) => "off".to_string(),
            Self::Bool(false) => "on".to_string(),
            other => other.to_string(),
        }
    }

    /// Value as it appears in an HDL generic assignment
    pub fn to_generic(&self) -> String {
        match self {
            Self::Bool(true) => "1'b1".to_string(),
            Self::Bool(false) => "1'b0".to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// Key reserved under `syn_args`; accepted and ignored
pub const RESERVED_SYNTH_KEY: &str = "verbose";

/// Arguments of `synth_design` that may be set from `syn_args`
pub const SYNTH_OPTION_KEYS: &[&str] = &[
    "assert",
    "bufg",
    "cascade_dsp",
    "control_set_opt_threshold",
    "directive",
    "fanout_limit",
    "flatten_hierarchy",
    "fsm_extraction",
    "gated_clock_conversion",
    "global_retiming",
    "incremental_mode",
    "keep_equivalent_registers",
    "max_bram",
    "max_bram_cascade_height",
    "max_dsp",
    "max_uram",
    "max_uram_cascade_height",
    "more options",
    "no_lc",
    "no_srlextract",
    "resource_sharing",
    "retiming",
    "sfcu",
    "shreg_min_size",
];

/// Validated `synth_design` argument
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynthOption {
    /// Lower-cased argument name
    pub key: String,
    pub value: OptionValue,
}

/// Validate `project.syn_args`.
///
/// Unknown keys are rejected; the reserved `verbose` key is dropped.
pub fn parse_synth_options(raw: OrderedMap<OptionValue>) -> Result<Vec<SynthOption>> {
    if let Some(key) = raw.duplicate_key() {
        return Err(config::invalid(format!(
            "synthesis option '{key}' is set more than once"
        )));
    }

    let mut options = Vec::with_capacity(raw.len());
    for (key, value) in raw {
        let lowered = key.to_lowercase();
        if lowered == RESERVED_SYNTH_KEY {
            log::debug!("syn_args: '{key}' is reserved, skipping");
            continue;
        }
        if !SYNTH_OPTION_KEYS.contains(&lowered.as_str()) {
            return Err(XilError::UnknownSynthOption {
                key,
                supported: SYNTH_OPTION_KEYS.join(", "),
            });
        }
        options.push(SynthOption {
            key: lowered,
            value,
        });
    }
    Ok(options)
}

/// Implementation run steps that accept per-step options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplStep {
    OptDesign,
    PowerOptDesign,
    PlaceDesign,
    PostPlacePowerOptDesign,
    PhysOptDesign,
    RouteDesign,
    PostRoutePhysOptDesign,
}

impl ImplStep {
    pub const ALL: [ImplStep; 7] = [
        ImplStep::OptDesign,
        ImplStep::PowerOptDesign,
        ImplStep::PlaceDesign,
        ImplStep::PostPlacePowerOptDesign,
        ImplStep::PhysOptDesign,
        ImplStep::RouteDesign,
        ImplStep::PostRoutePhysOptDesign,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ImplStep::OptDesign => "opt_design",
            ImplStep::PowerOptDesign => "power_opt_design",
            ImplStep::PlaceDesign => "place_design",
            ImplStep::PostPlacePowerOptDesign => "post_place_power_opt_design",
            ImplStep::PhysOptDesign => "phys_opt_design",
            ImplStep::RouteDesign => "route_design",
            ImplStep::PostRoutePhysOptDesign => "post_route_phys_opt_design",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.as_str() == name)
    }
}

impl fmt::Display for ImplStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One property of an implementation step
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplSetting {
    /// `is_enabled`, emitted as 0/1
    Enabled(bool),
    /// Any other argument, name lower-cased
    Arg { name: String, value: OptionValue },
}

/// Validated options of one implementation step, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImplStepOptions {
    pub step: ImplStep,
    pub settings: Vec<ImplSetting>,
}

/// Validate `project.impl_args`.
///
/// Steps outside [`ImplStep::ALL`] are reported and skipped.
pub fn parse_impl_options(
    raw: OrderedMap<OrderedMap<OptionValue>>,
) -> Result<Vec<ImplStepOptions>> {
    if let Some(step) = raw.duplicate_key() {
        return Err(config::invalid(format!(
            "implementation step '{step}' is configured more than once"
        )));
    }

    let mut steps = Vec::with_capacity(raw.len());
    for (name, args) in raw {
        let Some(step) = ImplStep::from_name(&name) else {
            log::warn!("impl_args: unknown implementation step '{name}', skipping");
            continue;
        };
        if let Some(key) = args.duplicate_key() {
            return Err(config::invalid(format!(
                "implementation option '{step}.{key}' is set more than once"
            )));
        }

        let mut settings = Vec::with_capacity(args.len());
        for (key, value) in args {
            let lowered = key.to_lowercase();
            if lowered == "is_enabled" {
                settings.push(ImplSetting::Enabled(parse_enabled(step, &value)?));
            } else {
                settings.push(ImplSetting::Arg {
                    name: lowered,
                    value,
                });
            }
        }
        steps.push(ImplStepOptions { step, settings });
    }
    Ok(steps)
}

fn parse_enabled(step: ImplStep, value: &OptionValue) -> Result<bool> {
    match value {
        OptionValue::Bool(b) => Ok(*b),
        OptionValue::Int(0) => Ok(false),
        OptionValue::Int(1) => Ok(true),
        other => Err(config::invalid(format!(
            "'{step}.is_enabled' must be a boolean, got '{other}'"
        ))),
    }
}
