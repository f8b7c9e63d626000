//! Twinkling background lights.

use dioxus::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

pub const LIGHT_COUNT: usize = 30;
const COLORS: [&str; 5] = ["#ffd700", "#ffbf00", "#ffa500", "#ff8c00", "#fff8dc"];

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub size_px: f64,
    pub left_percent: f64,
    pub top_percent: f64,
    pub color: &'static str,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Light {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(2.0..8.0),
            left_percent: rng.gen_range(0.0..100.0),
            top_percent: rng.gen_range(0.0..100.0),
            color: COLORS.choose(rng).copied().unwrap_or(COLORS[0]),
            duration_s: rng.gen_range(2.0..5.0),
            delay_s: rng.gen_range(0.0..5.0),
        }
    }

    pub fn style(&self) -> String {
        let Self {
            size_px,
            left_percent,
            top_percent,
            color,
            duration_s,
            delay_s,
        } = self;
        let glow = size_px * 2.0;
        format!(
            "width: {size_px:.1}px; height: {size_px:.1}px; left: {left_percent:.1}%; top: {top_percent:.1}%; \
             background: {color}; box-shadow: 0 0 {glow:.1}px {color}; \
             --duration: {duration_s:.2}s; --delay: {delay_s:.2}s;"
        )
    }
}

pub fn scatter_lights<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Light> {
    (0..count).map(|_| Light::random(rng)).collect()
}

#[component]
pub fn Lights() -> Element {
    // Placed once per mount so re-renders don't reshuffle them.
    let lights = use_hook(|| scatter_lights(&mut rand::thread_rng(), LIGHT_COUNT));

    rsx! {
        div { id: "lights", class: "lights", aria_hidden: "true",
            for (index, light) in lights.iter().enumerate() {
                div { key: "{index}", class: "light", style: light.style() }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn lights_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let lights = scatter_lights(&mut rng, LIGHT_COUNT);
        assert_eq!(lights.len(), LIGHT_COUNT);
        for light in &lights {
            assert!((2.0..8.0).contains(&light.size_px));
            assert!((0.0..100.0).contains(&light.left_percent));
            assert!((0.0..100.0).contains(&light.top_percent));
            assert!((2.0..5.0).contains(&light.duration_s));
            assert!((0.0..5.0).contains(&light.delay_s));
            assert!(COLORS.contains(&light.color));
        }
    }

    #[test]
    fn style_carries_animation_variables() {
        let light = Light {
            size_px: 4.0,
            left_percent: 10.0,
            top_percent: 20.0,
            color: "#ffd700",
            duration_s: 3.0,
            delay_s: 1.5,
        };
        let style = light.style();
        assert!(style.contains("width: 4.0px"));
        assert!(style.contains("box-shadow: 0 0 8.0px #ffd700"));
        assert!(style.contains("--duration: 3.00s"));
        assert!(style.contains("--delay: 1.50s"));
    }
}
