//! Render options and the default cascade.
//!
//! A terse `icon(..)` call carries an [`IconOptions`] override set with most
//! fields unset. [`resolve`] layers process-wide defaults, shared overrides
//! and per-glyph overrides, then expands the result into a fully populated
//! [`RenderSpec`] per stacked glyph: one glyph and one color for every
//! (state, mode) combination, with nothing left optional.

use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::animation::Animation;
use crate::canvas::Rgba;
use crate::error::{IconError, Result};
use crate::registry::FontRegistry;
use crate::{Mode, State};

/// Option keys accepted by [`set_global_defaults`]. `char` and `opacity`
/// are deliberately absent: the base glyph always comes from the icon name,
/// and opacity is a per-call property.
const VALID_OPTIONS: &[&str] = &[
    "active",
    "selected",
    "disabled",
    "on",
    "off",
    "on_active",
    "on_selected",
    "on_disabled",
    "off_active",
    "off_selected",
    "off_disabled",
    "color",
    "color_on",
    "color_off",
    "color_active",
    "color_selected",
    "color_disabled",
    "color_on_selected",
    "color_on_active",
    "color_on_disabled",
    "color_off_selected",
    "color_off_active",
    "color_off_disabled",
    "animation",
    "offset",
    "scale_factor",
];

/// Dynamically-typed option value, used at the [`set_global_defaults`]
/// boundary where options arrive as key/value pairs.
#[derive(Clone)]
pub enum OptionValue {
    /// A `"prefix.name"` glyph reference.
    Glyph(String),
    Color(Rgba),
    Number(f64),
    Offset(f64, f64),
    Animation(Arc<dyn Animation>),
}

/// Per-glyph override set. Unset fields fall back through the cascade.
///
/// Glyph-name fields hold `"prefix.name"` references into the registry;
/// `offset` is a fraction of the bounding box per axis.
#[derive(Clone, Default)]
pub struct IconOptions {
    pub char: Option<String>,
    pub on: Option<String>,
    pub off: Option<String>,
    pub active: Option<String>,
    pub selected: Option<String>,
    pub disabled: Option<String>,
    pub on_active: Option<String>,
    pub on_selected: Option<String>,
    pub on_disabled: Option<String>,
    pub off_active: Option<String>,
    pub off_selected: Option<String>,
    pub off_disabled: Option<String>,

    pub color: Option<Rgba>,
    pub color_on: Option<Rgba>,
    pub color_off: Option<Rgba>,
    pub color_active: Option<Rgba>,
    pub color_selected: Option<Rgba>,
    pub color_disabled: Option<Rgba>,
    pub color_on_active: Option<Rgba>,
    pub color_on_selected: Option<Rgba>,
    pub color_on_disabled: Option<Rgba>,
    pub color_off_active: Option<Rgba>,
    pub color_off_selected: Option<Rgba>,
    pub color_off_disabled: Option<Rgba>,

    pub opacity: Option<f64>,
    pub scale_factor: Option<f64>,
    pub offset: Option<(f64, f64)>,
    pub animation: Option<Arc<dyn Animation>>,
}

impl IconOptions {
    /// Process-wide base defaults before any [`set_global_defaults`] call.
    fn base_defaults() -> Self {
        Self {
            color: Some(Rgba::DEFAULT),
            color_disabled: Some(Rgba::DEFAULT_DISABLED),
            opacity: Some(1.0),
            scale_factor: Some(1.0),
            ..Self::default()
        }
    }

    /// Set one option by key, validating against the closed allow-list.
    pub fn set(&mut self, key: &str, value: OptionValue) -> Result<()> {
        if !VALID_OPTIONS.contains(&key) {
            return Err(IconError::InvalidOption(key.to_string()));
        }
        use OptionValue::*;
        match (key, value) {
            ("on", Glyph(s)) => self.on = Some(s),
            ("off", Glyph(s)) => self.off = Some(s),
            ("active", Glyph(s)) => self.active = Some(s),
            ("selected", Glyph(s)) => self.selected = Some(s),
            ("disabled", Glyph(s)) => self.disabled = Some(s),
            ("on_active", Glyph(s)) => self.on_active = Some(s),
            ("on_selected", Glyph(s)) => self.on_selected = Some(s),
            ("on_disabled", Glyph(s)) => self.on_disabled = Some(s),
            ("off_active", Glyph(s)) => self.off_active = Some(s),
            ("off_selected", Glyph(s)) => self.off_selected = Some(s),
            ("off_disabled", Glyph(s)) => self.off_disabled = Some(s),
            ("color", Color(c)) => self.color = Some(c),
            ("color_on", Color(c)) => self.color_on = Some(c),
            ("color_off", Color(c)) => self.color_off = Some(c),
            ("color_active", Color(c)) => self.color_active = Some(c),
            ("color_selected", Color(c)) => self.color_selected = Some(c),
            ("color_disabled", Color(c)) => self.color_disabled = Some(c),
            ("color_on_active", Color(c)) => self.color_on_active = Some(c),
            ("color_on_selected", Color(c)) => self.color_on_selected = Some(c),
            ("color_on_disabled", Color(c)) => self.color_on_disabled = Some(c),
            ("color_off_active", Color(c)) => self.color_off_active = Some(c),
            ("color_off_selected", Color(c)) => self.color_off_selected = Some(c),
            ("color_off_disabled", Color(c)) => self.color_off_disabled = Some(c),
            ("scale_factor", Number(n)) => self.scale_factor = Some(n),
            ("offset", Offset(dx, dy)) => self.offset = Some((dx, dy)),
            ("animation", Animation(a)) => self.animation = Some(a),
            (key, _) => return Err(IconError::InvalidOption(key.to_string())),
        }
        Ok(())
    }

    /// Overlay `self` on top of `base`: set fields win, unset fields fall
    /// back to `base`.
    pub fn merged_over(&self, base: &IconOptions) -> IconOptions {
        fn pick<T: Clone>(over: &Option<T>, base: &Option<T>) -> Option<T> {
            over.clone().or_else(|| base.clone())
        }
        IconOptions {
            char: pick(&self.char, &base.char),
            on: pick(&self.on, &base.on),
            off: pick(&self.off, &base.off),
            active: pick(&self.active, &base.active),
            selected: pick(&self.selected, &base.selected),
            disabled: pick(&self.disabled, &base.disabled),
            on_active: pick(&self.on_active, &base.on_active),
            on_selected: pick(&self.on_selected, &base.on_selected),
            on_disabled: pick(&self.on_disabled, &base.on_disabled),
            off_active: pick(&self.off_active, &base.off_active),
            off_selected: pick(&self.off_selected, &base.off_selected),
            off_disabled: pick(&self.off_disabled, &base.off_disabled),
            color: pick(&self.color, &base.color),
            color_on: pick(&self.color_on, &base.color_on),
            color_off: pick(&self.color_off, &base.color_off),
            color_active: pick(&self.color_active, &base.color_active),
            color_selected: pick(&self.color_selected, &base.color_selected),
            color_disabled: pick(&self.color_disabled, &base.color_disabled),
            color_on_active: pick(&self.color_on_active, &base.color_on_active),
            color_on_selected: pick(&self.color_on_selected, &base.color_on_selected),
            color_on_disabled: pick(&self.color_on_disabled, &base.color_on_disabled),
            color_off_active: pick(&self.color_off_active, &base.color_off_active),
            color_off_selected: pick(&self.color_off_selected, &base.color_off_selected),
            color_off_disabled: pick(&self.color_off_disabled, &base.color_off_disabled),
            opacity: pick(&self.opacity, &base.opacity),
            scale_factor: pick(&self.scale_factor, &base.scale_factor),
            offset: pick(&self.offset, &base.offset),
            animation: pick(&self.animation, &base.animation),
        }
    }
}

static GLOBAL_DEFAULTS: Lazy<Mutex<IconOptions>> =
    Lazy::new(|| Mutex::new(IconOptions::base_defaults()));

/// Set process-wide defaults for every later `icon(..)` call.
///
/// Every pair is validated before any is applied, so a rejected key leaves
/// the existing defaults untouched. Expected to be called during
/// application start-up, before icons are created.
pub fn set_global_defaults<'a, I>(options: I) -> Result<()>
where
    I: IntoIterator<Item = (&'a str, OptionValue)>,
{
    let mut guard = GLOBAL_DEFAULTS.lock().unwrap();
    let mut staged = guard.clone();
    for (key, value) in options {
        staged.set(key, value)?;
    }
    *guard = staged;
    Ok(())
}

/// Snapshot of the current process-wide defaults.
pub fn global_defaults() -> IconOptions {
    GLOBAL_DEFAULTS.lock().unwrap().clone()
}

/// Fully resolved paint instructions for one stacked glyph: a concrete
/// glyph and color for every (state, mode) slot.
#[derive(Clone)]
pub struct RenderSpec {
    /// Font collection supplying the face at paint time.
    pub prefix: String,

    pub char: char,
    pub on: char,
    pub off: char,
    pub active: char,
    pub selected: char,
    pub disabled: char,
    pub on_active: char,
    pub on_selected: char,
    pub on_disabled: char,
    pub off_active: char,
    pub off_selected: char,
    pub off_disabled: char,

    pub color: Rgba,
    pub color_disabled: Rgba,
    pub color_on: Rgba,
    pub color_off: Rgba,
    pub color_on_active: Rgba,
    pub color_on_selected: Rgba,
    pub color_on_disabled: Rgba,
    pub color_off_active: Rgba,
    pub color_off_selected: Rgba,
    pub color_off_disabled: Rgba,

    pub opacity: f64,
    pub scale_factor: f64,
    pub offset: Option<(f64, f64)>,
    pub animation: Option<Arc<dyn Animation>>,
}

impl RenderSpec {
    /// Glyph for a (mode, state) slot.
    pub fn glyph_for(&self, mode: Mode, state: State) -> char {
        match (state, mode) {
            (State::On, Mode::Normal) => self.on,
            (State::On, Mode::Disabled) => self.on_disabled,
            (State::On, Mode::Active) => self.on_active,
            (State::On, Mode::Selected) => self.on_selected,
            (State::Off, Mode::Normal) => self.off,
            (State::Off, Mode::Disabled) => self.off_disabled,
            (State::Off, Mode::Active) => self.off_active,
            (State::Off, Mode::Selected) => self.off_selected,
        }
    }

    /// Color for a (mode, state) slot.
    pub fn color_for(&self, mode: Mode, state: State) -> Rgba {
        match (state, mode) {
            (State::On, Mode::Normal) => self.color_on,
            (State::On, Mode::Disabled) => self.color_on_disabled,
            (State::On, Mode::Active) => self.color_on_active,
            (State::On, Mode::Selected) => self.color_on_selected,
            (State::Off, Mode::Normal) => self.color_off,
            (State::Off, Mode::Disabled) => self.color_off_disabled,
            (State::Off, Mode::Active) => self.color_off_active,
            (State::Off, Mode::Selected) => self.color_off_selected,
        }
    }
}

/// Split a `"prefix.name"` glyph reference.
fn split_name(raw: &str) -> Result<(&str, &str)> {
    raw.split_once('.')
        .filter(|(prefix, name)| !prefix.is_empty() && !name.is_empty())
        .ok_or_else(|| IconError::InvalidGlyphName(raw.to_string()))
}

/// Expand terse per-call options into one [`RenderSpec`] per stacked glyph.
///
/// Layering, lowest first: process-wide defaults, `shared` overrides,
/// `per_glyph[i]` overrides. `per_glyph`, when given, must match `names`
/// in length.
pub fn resolve(
    registry: &FontRegistry,
    names: &[&str],
    per_glyph: Option<&[IconOptions]>,
    shared: &IconOptions,
) -> Result<Vec<RenderSpec>> {
    if let Some(per_glyph) = per_glyph {
        if per_glyph.len() != names.len() {
            return Err(IconError::ArityMismatch {
                expected: names.len(),
                got: per_glyph.len(),
            });
        }
    }
    let shared = shared.merged_over(&global_defaults());
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let options = match per_glyph {
                Some(per_glyph) => per_glyph[i].merged_over(&shared),
                None => shared.clone(),
            };
            resolve_entry(registry, name, options)
        })
        .collect()
}

fn resolve_entry(registry: &FontRegistry, name: &str, options: IconOptions) -> Result<RenderSpec> {
    // Name cascade over "prefix.name" strings. Each slot falls back to a
    // more general one; `disabled` falls back to the base glyph, not to
    // `active`, and the per-state disabled slots inherit from `disabled`.
    let base = options.char.unwrap_or_else(|| name.to_string());
    let on = options.on.unwrap_or_else(|| base.clone());
    let off = options.off.unwrap_or_else(|| base.clone());
    let active = options.active.unwrap_or_else(|| on.clone());
    let selected = options.selected.unwrap_or_else(|| active.clone());
    let disabled = options.disabled.unwrap_or_else(|| base.clone());
    let on_active = options.on_active.unwrap_or_else(|| active.clone());
    let on_selected = options.on_selected.unwrap_or_else(|| selected.clone());
    let on_disabled = options.on_disabled.unwrap_or_else(|| disabled.clone());
    let off_active = options.off_active.unwrap_or_else(|| active.clone());
    let off_selected = options.off_selected.unwrap_or_else(|| selected.clone());
    let off_disabled = options.off_disabled.unwrap_or_else(|| disabled.clone());

    let (prefix, _) = split_name(&base)?;
    let lookup = |raw: &str| -> Result<char> {
        let (prefix, glyph) = split_name(raw)?;
        registry.lookup(prefix, glyph)
    };

    // Color cascade, independent of the name cascade. The disabled colors
    // inherit from `color_disabled`, never from `color`.
    let color = options.color.unwrap_or(Rgba::DEFAULT);
    let color_on = options.color_on.unwrap_or(color);
    let color_active = options.color_active.unwrap_or(color_on);
    let color_selected = options.color_selected.unwrap_or(color_active);
    let color_disabled = options.color_disabled.unwrap_or(Rgba::DEFAULT_DISABLED);
    let color_on_active = options.color_on_active.unwrap_or(color_active);
    let color_on_selected = options.color_on_selected.unwrap_or(color_selected);
    let color_on_disabled = options.color_on_disabled.unwrap_or(color_disabled);
    let color_off = options.color_off.unwrap_or(color);
    let color_off_active = options.color_off_active.unwrap_or(color_active);
    let color_off_selected = options.color_off_selected.unwrap_or(color_selected);
    let color_off_disabled = options.color_off_disabled.unwrap_or(color_disabled);

    Ok(RenderSpec {
        prefix: prefix.to_string(),
        char: lookup(&base)?,
        on: lookup(&on)?,
        off: lookup(&off)?,
        active: lookup(&active)?,
        selected: lookup(&selected)?,
        disabled: lookup(&disabled)?,
        on_active: lookup(&on_active)?,
        on_selected: lookup(&on_selected)?,
        on_disabled: lookup(&on_disabled)?,
        off_active: lookup(&off_active)?,
        off_selected: lookup(&off_selected)?,
        off_disabled: lookup(&off_disabled)?,
        color,
        color_disabled,
        color_on,
        color_off,
        color_on_active,
        color_on_selected,
        color_on_disabled,
        color_off_active,
        color_off_selected,
        color_off_disabled,
        opacity: options.opacity.unwrap_or(1.0),
        scale_factor: options.scale_factor.unwrap_or(1.0),
        offset: options.offset,
        animation: options.animation,
    })
}
