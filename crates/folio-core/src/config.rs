//! Tunables for every effect on the page.
//!
//! All sections default to the values the site ships with, so an embedded
//! config only needs to name what it overrides.

use serde::{Deserialize, Serialize};

use crate::error::FxError;
use crate::particle::Rgb;

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub carousel: CarouselConfig,
    pub particles: ParticleConfig,
    pub elements: ElementsConfig,
    pub form: FormConfig,
    pub reveal: RevealConfig,
}

impl FxConfig {
    /// Parses a (possibly partial) JSON document and checks its values.
    pub fn from_json(json: &str) -> Result<Self, FxError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would break the effects' invariants.
    pub fn validate(&self) -> Result<(), FxError> {
        let speed = self.carousel.speed;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(FxError::InvalidSpeed(speed));
        }
        for group in &self.reveal.groups {
            if !(0.0..=1.0).contains(&group.threshold) {
                return Err(FxError::InvalidThreshold(group.threshold));
            }
        }
        Ok(())
    }

    /// Parses an optional embedded document, falling back to defaults.
    pub fn from_embedded(json: Option<&str>) -> Self {
        let Some(json) = json else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring embedded effects config");
                Self::default()
            }
        }
    }
}

/// Carousel scroll behaviour and the classes it toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Pixels moved per frame.
    pub speed: f64,
    pub card_class: String,
    pub clone_class: String,
    pub focused_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            speed: 0.7,
            card_class: "proj-card".to_string(),
            clone_class: "clone".to_string(),
            focused_class: "focused".to_string(),
        }
    }
}

/// How a group of particles is scattered when spawned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnProfile {
    /// Max positional offset from the spawn point, per axis.
    pub jitter: f64,
    /// Max initial speed per axis, `[x, y]`.
    pub velocity: [f64; 2],
    pub life: f64,
}

/// Particle physics and spawn constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub accent: Rgb,
    /// Added to `vy` every frame.
    pub gravity: f64,
    /// Multiplier applied to size every frame.
    pub shrink: f64,
    /// Subtracted from life every frame.
    pub decay: f64,
    /// Particles smaller than this are culled.
    pub min_size: f64,
    /// Spawned sizes fall in `[size_min, size_max)`.
    pub size_min: f64,
    pub size_max: f64,
    pub trail: SpawnProfile,
    pub burst: SpawnProfile,
    pub burst_count: usize,
    pub max_particles: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            accent: Rgb::new(0, 240, 212),
            gravity: 0.02,
            shrink: 0.992,
            decay: 0.02,
            min_size: 0.3,
            size_min: 1.0,
            size_max: 4.0,
            trail: SpawnProfile {
                jitter: 3.0,
                velocity: [0.35, 0.3],
                life: 1.0,
            },
            burst: SpawnProfile {
                jitter: 6.0,
                velocity: [0.7, 0.7],
                life: 0.9,
            },
            burst_count: 6,
            max_particles: 600,
        }
    }
}

/// DOM ids the browser host looks up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementsConfig {
    pub cursor: String,
    pub trail_canvas: String,
    pub projects_wrap: String,
    pub projects_track: String,
    pub contact_form: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub form_status: String,
    pub country_code: String,
    pub country_search: String,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        Self {
            cursor: "cursor".to_string(),
            trail_canvas: "trailCanvas".to_string(),
            projects_wrap: "projectsWrap".to_string(),
            projects_track: "projectsTrack".to_string(),
            contact_form: "contactForm".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            phone: "phone".to_string(),
            message: "message".to_string(),
            form_status: "formStatus".to_string(),
            country_code: "countryCode".to_string(),
            country_search: "countrySearch".to_string(),
        }
    }
}

/// Contact form copy and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub default_country_code: String,
    pub incomplete_message: String,
    pub incomplete_color: String,
    pub accepted_message: String,
    pub accepted_color: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            default_country_code: "+91".to_string(),
            incomplete_message: "Please fill all fields.".to_string(),
            incomplete_color: "salmon".to_string(),
            accepted_message: "Thanks — (demo) form not submitted to server.".to_string(),
            accepted_color: "lightgreen".to_string(),
        }
    }
}

/// Reveal-on-scroll observer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub visible_class: String,
    /// One observer per group.
    pub groups: Vec<RevealGroup>,
}

/// Elements sharing one intersection observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealGroup {
    pub selector: String,
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    /// Stop observing an element once it has been revealed.
    #[serde(default)]
    pub once: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            visible_class: "reveal-visible".to_string(),
            groups: vec![
                RevealGroup {
                    selector: ".reveal".to_string(),
                    threshold: 0.15,
                    once: false,
                },
                RevealGroup {
                    selector: ".reveal, .skill-card".to_string(),
                    threshold: 0.0,
                    once: true,
                },
            ],
        }
    }
}
