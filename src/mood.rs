//! Temperature, psychology, and mood heuristics
//!
//! Everything here scores a *selection* of colors, not a pixel buffer:
//! the caller decides which colors to analyze (extracted dominants,
//! pinned picks, a single sample) and passes them as an ordered slice.
//! The rule tables are data; classification only dispatches on band
//! boundaries.

use serde::{Deserialize, Serialize};

use crate::color::{ColorSample, Hsl, Rgb};
use crate::constants::temperature::{
    CHANNEL_SCALE, COOL_BELOW, POSITION_MAX, POSITION_MIN, VERY_COOL_BELOW, WARM_BELOW,
};

/// Warmth of a single color, roughly [-100, 100]; positive is warm.
///
/// `(r - b) / 2.55`: the red-blue channel gap scaled so a pure red
/// scores 100 and a pure blue -100.
pub fn color_temperature(rgb: Rgb) -> f64 {
    (rgb.r as f64 - rgb.b as f64) / CHANNEL_SCALE
}

/// Temperature category over an averaged selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureCategory {
    VeryCool,
    Cool,
    Warm,
    VeryWarm,
}

impl TemperatureCategory {
    /// Classify an average temperature
    pub fn classify(average: f64) -> Self {
        if average < VERY_COOL_BELOW {
            TemperatureCategory::VeryCool
        } else if average < COOL_BELOW {
            TemperatureCategory::Cool
        } else if average < WARM_BELOW {
            TemperatureCategory::Warm
        } else {
            TemperatureCategory::VeryWarm
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureCategory::VeryCool => "Very Cool",
            TemperatureCategory::Cool => "Cool",
            TemperatureCategory::Warm => "Warm",
            TemperatureCategory::VeryWarm => "Very Warm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TemperatureCategory::VeryCool => "Very cool palette - calming, professional, serene.",
            TemperatureCategory::Cool => "Cool tones - trust, stability, and tranquility.",
            TemperatureCategory::Warm => "Warm tones - energetic, friendly, and inviting.",
            TemperatureCategory::VeryWarm => {
                "Very warm - exciting, passionate, attention-grabbing."
            }
        }
    }
}

/// Aggregate temperature over a selection of colors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSummary {
    /// Mean per-color temperature, roughly [-100, 100]
    pub average: f64,
    /// Gauge position in [2, 98] for display
    pub position: f64,
    pub category: TemperatureCategory,
}

/// Average the temperature of a caller-chosen selection.
///
/// Returns `None` for an empty selection.
pub fn summarize_temperature(colors: &[ColorSample]) -> Option<TemperatureSummary> {
    if colors.is_empty() {
        return None;
    }

    let total: f64 = colors.iter().map(|c| color_temperature(c.rgb)).sum();
    let average = total / colors.len() as f64;
    let position = (((average + 100.0) / 200.0) * 100.0).clamp(POSITION_MIN, POSITION_MAX);

    Some(TemperatureSummary {
        average,
        position,
        category: TemperatureCategory::classify(average),
    })
}

/// Which psychology rule table to consult
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsychologyMode {
    /// UI/brand-oriented readings
    Design,
    /// Painting/illustration-oriented readings
    Artistic,
}

/// A psychology reading: short tag plus one-sentence description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Psychology {
    pub feeling: String,
    pub description: String,
}

impl Psychology {
    fn new(feeling: &str, description: &str) -> Self {
        Self {
            feeling: feeling.to_string(),
            description: description.to_string(),
        }
    }
}

/// Classify a color's psychological impact under the chosen mode.
///
/// Both tables check achromatic / extreme-lightness cases first, then
/// dispatch on half-open hue bands.
pub fn classify_psychology(hsl: Hsl, mode: PsychologyMode) -> Psychology {
    match mode {
        PsychologyMode::Design => design_psychology(hsl),
        PsychologyMode::Artistic => artistic_psychology(hsl),
    }
}

fn design_psychology(hsl: Hsl) -> Psychology {
    let Hsl { h, s, l } = hsl;

    if s < 15 || l > 90 || l < 10 {
        return if l > 90 {
            Psychology::new(
                "Pure & Clean",
                "Evokes simplicity, innocence, and clarity. Often used in minimal designs.",
            )
        } else if l < 10 {
            Psychology::new(
                "Powerful & Formal",
                "Creates sophistication, mystery, and authority. Strong emotional impact.",
            )
        } else {
            Psychology::new(
                "Neutral & Balanced",
                "Conveys stability, calm, and professionalism. Versatile for any context.",
            )
        };
    }

    match h {
        0..=14 | 345..=359 => Psychology::new(
            "Passionate & Energetic",
            "Red evokes strong emotions, urgency, and excitement. Grabs attention immediately.",
        ),
        15..=44 => Psychology::new(
            "Creative & Enthusiastic",
            "Orange represents energy, warmth, and friendliness. Encourages action and optimism.",
        ),
        45..=74 => Psychology::new(
            "Cheerful & Optimistic",
            "Yellow brings happiness, clarity, and sunshine. Stimulates mental activity.",
        ),
        75..=164 => Psychology::new(
            "Growth & Harmony",
            "Green symbolizes nature, balance, and renewal. Creates a sense of calm and safety.",
        ),
        165..=254 => Psychology::new(
            "Trust & Stability",
            "Blue conveys reliability, peace, and professionalism. Most universally preferred color.",
        ),
        255..=284 => Psychology::new(
            "Creative & Luxurious",
            "Purple represents creativity, royalty, and spirituality. Adds sophistication.",
        ),
        _ => Psychology::new(
            "Romantic & Compassionate",
            "Pink/Magenta evokes care, nurturing, and playfulness. Softens bold designs.",
        ),
    }
}

fn artistic_psychology(hsl: Hsl) -> Psychology {
    let Hsl { h, s, l } = hsl;

    if s < 15 {
        return if l > 85 {
            Psychology::new(
                "Soft Highlights",
                "Creates gentle illumination. Use for light sources, skin highlights, or ethereal effects.",
            )
        } else if l < 15 {
            Psychology::new(
                "Deep Shadows",
                "Adds dramatic depth. Essential for form definition and creating mystery.",
            )
        } else {
            Psychology::new(
                "Neutral Tones",
                "Perfect for underpainting and base layers. Provides structure without overwhelming.",
            )
        };
    }

    match h {
        0..=29 | 330..=359 => {
            if s > 60 {
                Psychology::new(
                    "Bold Reds",
                    "Commands attention. Use sparingly for focal points, passion, or danger.",
                )
            } else {
                Psychology::new(
                    "Warm Skin Tones",
                    "Essential for portrait work. Conveys life and warmth in figures.",
                )
            }
        }
        30..=59 => Psychology::new(
            "Warm Accents",
            "Orange tones add energy without overwhelming. Great for lighting and atmosphere.",
        ),
        60..=149 => {
            if l < 40 {
                Psychology::new(
                    "Natural Darks",
                    "Green-based shadows feel organic. Ideal for landscapes and natural subjects.",
                )
            } else {
                Psychology::new(
                    "Life & Growth",
                    "Brings vitality to nature scenes. Use for foliage, life, and renewal themes.",
                )
            }
        }
        150..=269 => {
            if s > 50 {
                Psychology::new(
                    "Cool Depths",
                    "Blue creates distance and calm. Perfect for backgrounds, sky, and water.",
                )
            } else {
                Psychology::new(
                    "Cool Shadows",
                    "Subtle blues in shadows add realism. Creates atmospheric perspective.",
                )
            }
        }
        _ => Psychology::new(
            "Mystical Purples",
            "Adds fantasy and drama. Excellent for magical themes and twilight scenes.",
        ),
    }
}

/// One band of the value distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ValueBand {
    pub count: usize,
    /// Share of the selection, rounded to the nearest whole percent
    pub percentage: f64,
}

/// Shadow/midtone/highlight split of a selection, by HSV value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ValueDistribution {
    /// Value 0-33
    pub shadows: ValueBand,
    /// Value 34-66
    pub midtones: ValueBand,
    /// Value 67-100
    pub highlights: ValueBand,
    pub total: usize,
}

/// Bucket a selection into shadows, midtones, and highlights
pub fn value_distribution(colors: &[ColorSample]) -> ValueDistribution {
    let mut dist = ValueDistribution {
        total: colors.len(),
        ..Default::default()
    };
    if colors.is_empty() {
        return dist;
    }

    for color in colors {
        let band = match color.hsv.v {
            0..=33 => &mut dist.shadows,
            34..=66 => &mut dist.midtones,
            _ => &mut dist.highlights,
        };
        band.count += 1;
    }

    let total = dist.total as f64;
    for band in [
        &mut dist.shadows,
        &mut dist.midtones,
        &mut dist.highlights,
    ] {
        band.percentage = (band.count as f64 / total * 100.0).round();
    }
    dist
}

/// Overall mood of a selection, by average saturation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaturationMood {
    /// Average saturation above 70
    Vibrant,
    /// Average saturation above 40
    Balanced,
    /// Everything else
    Muted,
}

impl SaturationMood {
    pub fn title(&self) -> &'static str {
        match self {
            SaturationMood::Vibrant => "Vibrant & Energetic",
            SaturationMood::Balanced => "Balanced & Natural",
            SaturationMood::Muted => "Muted & Atmospheric",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SaturationMood::Vibrant => {
                "High saturation creates dynamic, eye-catching artwork. Great for stylized or anime-style pieces."
            }
            SaturationMood::Balanced => {
                "Moderate saturation feels realistic and versatile. Perfect for portraits and natural scenes."
            }
            SaturationMood::Muted => {
                "Low saturation creates mood and atmosphere. Excellent for dramatic or vintage aesthetics."
            }
        }
    }
}

/// Saturation mood with its supporting average
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub average_saturation: f64,
    pub mood: SaturationMood,
}

/// Assess the saturation mood of a selection; `None` when empty
pub fn saturation_mood(colors: &[ColorSample]) -> Option<MoodSummary> {
    if colors.is_empty() {
        return None;
    }

    let total: f64 = colors.iter().map(|c| c.hsl.s as f64).sum();
    let average_saturation = total / colors.len() as f64;
    let mood = if average_saturation > 70.0 {
        SaturationMood::Vibrant
    } else if average_saturation > 40.0 {
        SaturationMood::Balanced
    } else {
        SaturationMood::Muted
    };

    Some(MoodSummary {
        average_saturation,
        mood,
    })
}

/// Interest score: saturation damped by distance from mid lightness.
///
/// `s * (1 - |l - 50| / 50)` penalizes near-black and near-white colors
/// so harmony bases are not dominated by dark fills.
pub fn interest_score(hsl: Hsl) -> f64 {
    hsl.s as f64 * (1.0 - (hsl.l as f64 - 50.0).abs() / 50.0)
}

/// The most visually interesting color of a selection.
///
/// Ties keep the earliest color, so the caller's ordering (usually by
/// frequency) breaks them.
pub fn most_interesting(colors: &[ColorSample]) -> Option<&ColorSample> {
    let mut best: Option<(&ColorSample, f64)> = None;
    for color in colors {
        let score = interest_score(color.hsl);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((color, score));
        }
    }
    best.map(|(color, _)| color)
}

/// Colors neither washed out nor crushed: lightness strictly inside
/// (8, 92) and saturation above 5
pub fn filter_interesting(colors: &[ColorSample]) -> Vec<&ColorSample> {
    colors
        .iter()
        .filter(|c| c.hsl.l > 8 && c.hsl.l < 92 && c.hsl.s > 5)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(r: u8, g: u8, b: u8) -> ColorSample {
        ColorSample::from_rgb(Rgb::new(r, g, b))
    }

    #[test]
    fn test_temperature_extremes() {
        assert_eq!(color_temperature(Rgb::new(255, 0, 0)), 100.0);
        assert_eq!(color_temperature(Rgb::new(0, 0, 255)), -100.0);
        assert_eq!(color_temperature(Rgb::new(128, 200, 128)), 0.0);
    }

    #[test]
    fn test_temperature_summary() {
        let summary = summarize_temperature(&[sample(255, 0, 0), sample(0, 0, 255)]).unwrap();
        assert_eq!(summary.average, 0.0);
        assert_eq!(summary.position, 50.0);
        assert_eq!(summary.category, TemperatureCategory::Warm);

        let hot = summarize_temperature(&[sample(255, 0, 0)]).unwrap();
        assert_eq!(hot.category, TemperatureCategory::VeryWarm);
        // Position clamps away from the gauge edge
        assert_eq!(hot.position, POSITION_MAX);

        let cold = summarize_temperature(&[sample(0, 0, 255)]).unwrap();
        assert_eq!(cold.category, TemperatureCategory::VeryCool);
        assert_eq!(cold.position, POSITION_MIN);

        assert!(summarize_temperature(&[]).is_none());
    }

    #[test]
    fn test_temperature_category_thresholds() {
        assert_eq!(TemperatureCategory::classify(-50.1), TemperatureCategory::VeryCool);
        assert_eq!(TemperatureCategory::classify(-50.0), TemperatureCategory::Cool);
        assert_eq!(TemperatureCategory::classify(-0.1), TemperatureCategory::Cool);
        assert_eq!(TemperatureCategory::classify(0.0), TemperatureCategory::Warm);
        assert_eq!(TemperatureCategory::classify(49.9), TemperatureCategory::Warm);
        assert_eq!(TemperatureCategory::classify(50.0), TemperatureCategory::VeryWarm);
    }

    #[test]
    fn test_design_psychology_achromatic_cases() {
        let white = classify_psychology(Hsl::new(0, 0, 95), PsychologyMode::Design);
        assert_eq!(white.feeling, "Pure & Clean");

        let black = classify_psychology(Hsl::new(0, 0, 5), PsychologyMode::Design);
        assert_eq!(black.feeling, "Powerful & Formal");

        let gray = classify_psychology(Hsl::new(200, 10, 50), PsychologyMode::Design);
        assert_eq!(gray.feeling, "Neutral & Balanced");

        // Saturated but extreme lightness still routes here
        let glare = classify_psychology(Hsl::new(120, 80, 95), PsychologyMode::Design);
        assert_eq!(glare.feeling, "Pure & Clean");
    }

    #[test]
    fn test_design_psychology_band_edges() {
        let mode = PsychologyMode::Design;
        assert_eq!(classify_psychology(Hsl::new(0, 80, 50), mode).feeling, "Passionate & Energetic");
        assert_eq!(classify_psychology(Hsl::new(14, 80, 50), mode).feeling, "Passionate & Energetic");
        assert_eq!(classify_psychology(Hsl::new(345, 80, 50), mode).feeling, "Passionate & Energetic");
        assert_eq!(classify_psychology(Hsl::new(344, 80, 50), mode).feeling, "Romantic & Compassionate");
        assert_eq!(classify_psychology(Hsl::new(15, 80, 50), mode).feeling, "Creative & Enthusiastic");
        assert_eq!(classify_psychology(Hsl::new(45, 80, 50), mode).feeling, "Cheerful & Optimistic");
        assert_eq!(classify_psychology(Hsl::new(75, 80, 50), mode).feeling, "Growth & Harmony");
        assert_eq!(classify_psychology(Hsl::new(164, 80, 50), mode).feeling, "Growth & Harmony");
        assert_eq!(classify_psychology(Hsl::new(165, 80, 50), mode).feeling, "Trust & Stability");
        assert_eq!(classify_psychology(Hsl::new(255, 80, 50), mode).feeling, "Creative & Luxurious");
        assert_eq!(classify_psychology(Hsl::new(285, 80, 50), mode).feeling, "Romantic & Compassionate");
    }

    #[test]
    fn test_artistic_psychology_sub_branches() {
        let mode = PsychologyMode::Artistic;
        assert_eq!(classify_psychology(Hsl::new(0, 0, 90), mode).feeling, "Soft Highlights");
        assert_eq!(classify_psychology(Hsl::new(0, 0, 10), mode).feeling, "Deep Shadows");
        assert_eq!(classify_psychology(Hsl::new(0, 10, 50), mode).feeling, "Neutral Tones");

        assert_eq!(classify_psychology(Hsl::new(10, 80, 50), mode).feeling, "Bold Reds");
        assert_eq!(classify_psychology(Hsl::new(10, 40, 50), mode).feeling, "Warm Skin Tones");
        assert_eq!(classify_psychology(Hsl::new(330, 90, 50), mode).feeling, "Bold Reds");
        assert_eq!(classify_psychology(Hsl::new(45, 80, 50), mode).feeling, "Warm Accents");
        assert_eq!(classify_psychology(Hsl::new(100, 60, 30), mode).feeling, "Natural Darks");
        assert_eq!(classify_psychology(Hsl::new(100, 60, 60), mode).feeling, "Life & Growth");
        assert_eq!(classify_psychology(Hsl::new(220, 80, 50), mode).feeling, "Cool Depths");
        assert_eq!(classify_psychology(Hsl::new(220, 30, 50), mode).feeling, "Cool Shadows");
        assert_eq!(classify_psychology(Hsl::new(300, 60, 50), mode).feeling, "Mystical Purples");
    }

    #[test]
    fn test_value_distribution() {
        let colors = [
            sample(10, 10, 10),    // value 4: shadow
            sample(120, 120, 120), // value 47: midtone
            sample(250, 250, 250), // value 98: highlight
            sample(255, 255, 255), // highlight
        ];
        let dist = value_distribution(&colors);
        assert_eq!(dist.shadows.count, 1);
        assert_eq!(dist.midtones.count, 1);
        assert_eq!(dist.highlights.count, 2);
        assert_eq!(dist.shadows.percentage, 25.0);
        assert_eq!(dist.highlights.percentage, 50.0);
        assert_eq!(dist.total, 4);

        let empty = value_distribution(&[]);
        assert_eq!(empty.total, 0);
        assert_eq!(empty.shadows.count, 0);
    }

    #[test]
    fn test_saturation_mood() {
        let vibrant = saturation_mood(&[sample(255, 0, 0), sample(0, 255, 0)]).unwrap();
        assert_eq!(vibrant.mood, SaturationMood::Vibrant);
        assert_eq!(vibrant.average_saturation, 100.0);

        let muted = saturation_mood(&[sample(100, 100, 100), sample(110, 100, 100)]).unwrap();
        assert_eq!(muted.mood, SaturationMood::Muted);

        assert!(saturation_mood(&[]).is_none());
        assert!(!vibrant.mood.title().is_empty());
        assert!(!muted.mood.description().is_empty());
    }

    #[test]
    fn test_most_interesting_prefers_saturated_midtones() {
        let dark_fill = sample(5, 5, 5);
        let vivid = sample(200, 40, 40);
        let washed = sample(250, 240, 240);
        let colors = [dark_fill.clone(), vivid.clone(), washed];

        assert_eq!(most_interesting(&colors).unwrap(), &vivid);
        assert!(most_interesting(&[]).is_none());

        // Ties keep the earliest entry
        let colors = [dark_fill.clone(), sample(0, 0, 0)];
        assert_eq!(most_interesting(&colors).unwrap(), &dark_fill);
    }

    #[test]
    fn test_filter_interesting() {
        let colors = [
            sample(5, 5, 5),       // too dark
            sample(250, 250, 250), // too light
            sample(128, 128, 128), // no saturation
            sample(200, 60, 60),   // keeper
        ];
        let kept = filter_interesting(&colors);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].rgb, Rgb::new(200, 60, 60));
    }
}
