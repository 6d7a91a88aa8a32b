use leptos::logging::warn;

/// Raw value found under a `window.ENV` key.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum EnvValue {
    Number(f64),
    Text(String),
}

impl EnvValue {
    fn as_f64(&self) -> Option<f64> {
        match self {
            EnvValue::Number(n) => Some(*n),
            EnvValue::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Detection band for the table-of-contents observer.
///
/// Headings only count as visible between `top_offset_px` below the top of the
/// viewport and `bottom_exclusion_percent` above its bottom edge. Raising the
/// top offset keeps a section active longer after its heading scrolls under a
/// sticky header; raising the bottom exclusion delays activation of headings
/// entering from below.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ScrollSyncConfig {
    pub top_offset_px: f64,
    pub bottom_exclusion_percent: f64,
    /// Fraction of the heading that must be inside the band.
    pub threshold: f64,
}

impl Default for ScrollSyncConfig {
    fn default() -> Self {
        Self {
            top_offset_px: 100.0,
            bottom_exclusion_percent: 30.0,
            threshold: 0.0,
        }
    }
}

impl ScrollSyncConfig {
    /// `rootMargin` for the observer; negative margins shrink the viewport.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}px 0px -{}% 0px",
            self.top_offset_px, self.bottom_exclusion_percent
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct SiteConfig {
    pub scroll_sync: ScrollSyncConfig,
}

/// Look a key up in both README style (`TOC_THRESHOLD`) and snake case (`toc_threshold`).
///
/// Present but unusable values are reported and replaced by `default`.
fn setting(
    lookup: &impl Fn(&str) -> Option<EnvValue>,
    key: &str,
    valid: impl Fn(f64) -> bool,
    default: f64,
) -> f64 {
    let Some(raw) = lookup(key).or_else(|| lookup(&key.to_ascii_lowercase())) else {
        return default;
    };
    match raw.as_f64().filter(|n| n.is_finite() && valid(*n)) {
        Some(n) => n,
        None => {
            warn!("ignoring ENV.{key} = {raw:?}, using {default}");
            default
        }
    }
}

impl SiteConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<EnvValue>) -> Self {
        let defaults = ScrollSyncConfig::default();

        Self {
            scroll_sync: ScrollSyncConfig {
                top_offset_px: setting(
                    &lookup,
                    "TOC_TOP_OFFSET_PX",
                    |n| n >= 0.0,
                    defaults.top_offset_px,
                ),
                bottom_exclusion_percent: setting(
                    &lookup,
                    "TOC_BOTTOM_EXCLUSION_PERCENT",
                    |n| (0.0..=100.0).contains(&n),
                    defaults.bottom_exclusion_percent,
                ),
                threshold: setting(
                    &lookup,
                    "TOC_THRESHOLD",
                    |n| (0.0..=1.0).contains(&n),
                    defaults.threshold,
                ),
            },
        }
    }

    /// Read overrides from `window.ENV`, if the host page defines it.
    pub fn new() -> Self {
        let env = web_sys::window()
            .and_then(|w| w.get("ENV"))
            .filter(|env| !env.is_undefined() && env.is_object());

        let Some(env) = env else {
            return Self::default();
        };

        Self::from_lookup(|key| {
            let v = js_sys::Reflect::get(&env, &key.into()).ok()?;
            if let Some(n) = v.as_f64() {
                Some(EnvValue::Number(n))
            } else {
                v.as_string().map(EnvValue::Text)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, EnvValue)]) -> impl Fn(&str) -> Option<EnvValue> {
        let map: HashMap<String, EnvValue> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_exclude_top_100px_and_bottom_30_percent() {
        let cfg = SiteConfig::from_lookup(|_| None);
        assert_eq!(cfg.scroll_sync, ScrollSyncConfig::default());
        assert_eq!(cfg.scroll_sync.root_margin(), "-100px 0px -30% 0px");
    }

    #[test]
    fn test_upper_case_keys_win() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("TOC_TOP_OFFSET_PX", EnvValue::Number(64.0)),
            ("toc_top_offset_px", EnvValue::Number(10.0)),
        ]));
        assert_eq!(cfg.scroll_sync.top_offset_px, 64.0);
    }

    #[test]
    fn test_snake_case_fallback_and_numeric_strings() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("toc_bottom_exclusion_percent", EnvValue::Text(" 40 ".to_string())),
            ("toc_threshold", EnvValue::Text("0.5".to_string())),
        ]));
        assert_eq!(cfg.scroll_sync.bottom_exclusion_percent, 40.0);
        assert_eq!(cfg.scroll_sync.threshold, 0.5);
        assert_eq!(cfg.scroll_sync.root_margin(), "-100px 0px -40% 0px");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[
            ("TOC_TOP_OFFSET_PX", EnvValue::Number(-5.0)),
            ("TOC_BOTTOM_EXCLUSION_PERCENT", EnvValue::Number(150.0)),
            ("TOC_THRESHOLD", EnvValue::Text("lots".to_string())),
        ]));
        assert_eq!(cfg.scroll_sync, ScrollSyncConfig::default());
    }

    #[test]
    fn test_non_finite_numbers_fall_back() {
        let cfg = SiteConfig::from_lookup(lookup_from(&[(
            "TOC_TOP_OFFSET_PX",
            EnvValue::Number(f64::INFINITY),
        )]));
        assert_eq!(cfg.scroll_sync.top_offset_px, 100.0);
    }
}
