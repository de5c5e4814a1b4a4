use bevy::prelude::*;
use constants::animation::{HERO_FADE_END, HERO_FADE_START};

use crate::engine::animation::progress::ScrollProgress;
#[cfg(target_arch = "wasm32")]
use crate::engine::assets::viewer_config::ViewerConfig;

/// Opacity of the hero section: opaque until the fade starts, transparent after it ends.
pub fn hero_opacity(progress: f32) -> f32 {
    if progress < HERO_FADE_START {
        1.0
    } else if progress <= HERO_FADE_END {
        1.0 - (progress - HERO_FADE_START) / (HERO_FADE_END - HERO_FADE_START)
    } else {
        0.0
    }
}

/// Last opacity pushed to the page, so unchanged values are not rewritten.
/// Once the hero element is found missing the page is not queried again.
#[derive(Resource, Debug, Default)]
pub struct HeroFade {
    pub opacity: Option<f32>,
    hero_missing: bool,
}

impl HeroFade {
    fn needs_write(&self, opacity: f32) -> bool {
        !self.hero_missing && self.opacity != Some(opacity)
    }

    /// Record `opacity`; `false` when it matches what the page already has.
    fn update(&mut self, opacity: f32) -> bool {
        if self.opacity == Some(opacity) {
            return false;
        }
        self.opacity = Some(opacity);
        true
    }

    /// `true` only the first time, so the absence is reported once.
    #[cfg(any(test, target_arch = "wasm32"))]
    fn mark_missing(&mut self) -> bool {
        !std::mem::replace(&mut self.hero_missing, true)
    }
}

pub fn apply_hero_fade(
    progress: Res<ScrollProgress>,
    #[cfg(target_arch = "wasm32")] config: Option<Res<ViewerConfig>>,
    mut fade: ResMut<HeroFade>,
) {
    let opacity = hero_opacity(progress.value());
    if !fade.needs_write(opacity) {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        let selector = config.as_ref().map_or(
            constants::page::HERO_SELECTOR,
            |config| config.hero_selector.as_str(),
        );
        match set_element_opacity(selector, opacity) {
            Ok(()) => {}
            Err(HeroElementError::Missing) => {
                if fade.mark_missing() {
                    warn!("No element matches {selector}; hero fade disabled");
                }
                return;
            }
            Err(HeroElementError::Dom(reason)) => {
                warn!("Could not set hero opacity: {reason}");
                return;
            }
        }
    }

    fade.update(opacity);
}

#[cfg(target_arch = "wasm32")]
enum HeroElementError {
    Missing,
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
fn set_element_opacity(selector: &str, opacity: f32) -> Result<(), HeroElementError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(HeroElementError::Missing)?;
    let element = document
        .query_selector(selector)
        .map_err(|error| HeroElementError::Dom(format!("{error:?}")))?
        .ok_or(HeroElementError::Missing)?;
    let element = element
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| HeroElementError::Dom(format!("{selector} is not an HTML element")))?;

    element
        .style()
        .set_property("opacity", &opacity.to_string())
        .map_err(|error| HeroElementError::Dom(format!("{error:?}")))
}
