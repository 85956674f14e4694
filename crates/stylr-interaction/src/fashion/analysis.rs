//! Mock personal style analysis for an uploaded photo, plus the reply to a
//! finished 3D fit analysis.
//!
//! No image is inspected: every component of the photo profile is drawn from
//! a fixed table through the injected random source.

use crate::random::{ChoiceSource, choose};
use stylr_core::catalog::CatalogItem;
use stylr_core::message::{
    AnalysisReport, Attachment, FashionAnalysis, Message, ModelAnalysis, Origin,
};

pub const UPLOAD_CAPTION: &str = "Here's my photo for styling advice!";

const ANALYSIS_TEXT: &str = "Perfect! 📸 I love your photo! Let me analyze your style and features...\n\n✨ **Style Analysis:**\n• I can see you have great fashion sense!\n• Your natural coloring would work beautifully with both warm and cool tones\n• Your body shape would look amazing in a variety of silhouettes\n• You have a lovely, confident style that we can definitely enhance\n\n👗 **Now, what would you like to wear?**\nTell me about the occasion or style you're looking for:\n• A casual everyday look?\n• Something elegant for a special event?\n• Professional attire for work?\n• A fun night out outfit?\n• Seasonal pieces for the current weather?\n\nI'll curate the perfect pieces just for you based on your photo and preferences! What sounds most appealing right now?";

struct BodyShape {
    name: &'static str,
    confidence: u8,
    silhouettes: &'static [&'static str],
    tips: &'static [&'static str],
}

struct SkinTone {
    name: &'static str,
    category: &'static str,
    wear: &'static [&'static str],
    avoid: &'static [&'static str],
}

struct EyeColor {
    name: &'static str,
    tips: &'static [&'static str],
}

const BODY_SHAPES: &[BodyShape] = &[
    BodyShape {
        name: "Pear",
        confidence: 85,
        silhouettes: &["A-line dresses", "Empire waistlines", "Wide-leg pants", "Boat neck tops", "Off-shoulder styles"],
        tips: &["Emphasize your upper body with bold patterns", "Choose tops with horizontal stripes", "Opt for statement jewelry and scarves", "Balance proportions with structured shoulders"],
    },
    BodyShape {
        name: "Apple",
        confidence: 80,
        silhouettes: &["V-neck tops", "Wrap dresses", "High-waisted bottoms", "Empire waistlines", "Flowy tunics"],
        tips: &["Draw attention to your legs", "Choose vertical lines and patterns", "Opt for longer tops over fitted bottoms", "Layer with open cardigans"],
    },
    BodyShape {
        name: "Hourglass",
        confidence: 90,
        silhouettes: &["Fitted dresses", "Wrap styles", "High-waisted pants", "Pencil skirts", "Tailored blazers"],
        tips: &["Emphasize your natural waistline", "Choose fitted silhouettes", "Avoid oversized clothing", "Belt dresses and tops at the waist"],
    },
    BodyShape {
        name: "Rectangle",
        confidence: 75,
        silhouettes: &["Peplum tops", "Layered outfits", "Ruffled details", "A-line skirts", "Cropped jackets"],
        tips: &["Create curves with layering", "Add volume to your silhouette", "Use belts to define your waist", "Choose textured fabrics"],
    },
    BodyShape {
        name: "Inverted Triangle",
        confidence: 82,
        silhouettes: &["A-line bottoms", "Wide-leg pants", "Flared skirts", "Scoop neck tops", "Soft draping"],
        tips: &["Balance broad shoulders with fuller bottoms", "Choose softer fabrics for tops", "Add volume to your lower half", "Avoid shoulder pads"],
    },
];

const SKIN_TONES: &[SkinTone] = &[
    SkinTone {
        name: "Fair with Cool Undertones",
        category: "cool",
        wear: &["Jewel tones", "Navy blue", "Emerald green", "True red", "Purple", "Pink", "Silver accessories"],
        avoid: &["Orange", "Yellow-based colors", "Warm browns", "Gold accessories", "Peach"],
    },
    SkinTone {
        name: "Fair with Warm Undertones",
        category: "warm",
        wear: &["Coral", "Peach", "Warm browns", "Cream", "Gold accessories", "Orange-red", "Camel"],
        avoid: &["Icy colors", "Bright white", "Cool blues", "Silver accessories", "Pure black"],
    },
    SkinTone {
        name: "Medium with Neutral Undertones",
        category: "neutral",
        wear: &["Most colors", "Both gold and silver", "Deep jewel tones", "Earth tones", "Classic colors"],
        avoid: &["Extremely bright neons", "Washed out pastels"],
    },
    SkinTone {
        name: "Medium with Warm Undertones",
        category: "warm",
        wear: &["Rich browns", "Warm greens", "Golden yellow", "Burnt orange", "Gold accessories", "Terracotta"],
        avoid: &["Cool grays", "Icy pastels", "Silver-based colors", "Cool purples"],
    },
    SkinTone {
        name: "Deep with Cool Undertones",
        category: "cool",
        wear: &["Bold jewel tones", "True red", "Royal blue", "Emerald", "Purple", "Pure white", "Silver"],
        avoid: &["Muddy colors", "Warm browns", "Orange", "Yellow-greens", "Gold accessories"],
    },
    SkinTone {
        name: "Deep with Warm Undertones",
        category: "warm",
        wear: &["Rich chocolate", "Burnt orange", "Deep reds", "Forest green", "Gold accessories", "Warm burgundy"],
        avoid: &["Cool pastels", "Icy colors", "Silver accessories", "Cool grays"],
    },
];

const EYE_COLORS: &[EyeColor] = &[
    EyeColor { name: "Brown", tips: &["Earth tones enhance your eyes", "Green and blue create beautiful contrast"] },
    EyeColor { name: "Blue", tips: &["Navy and denim complement naturally", "Warm oranges make blue eyes pop"] },
    EyeColor { name: "Green", tips: &["Purple and burgundy intensify green", "Pink and coral create lovely contrast"] },
    EyeColor { name: "Hazel", tips: &["Most versatile - you can wear nearly any color", "Gold accessories bring out amber flecks"] },
    EyeColor { name: "Gray", tips: &["All jewel tones look stunning", "Both silver and gold work beautifully"] },
];

const HAIR_COLORS: &[&str] = &["Blonde", "Brunette", "Auburn", "Black", "Red", "Light Brown", "Dark Brown"];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Draws a style profile; components are picked independently.
pub fn analyze_photo(rng: &mut dyn ChoiceSource) -> FashionAnalysis {
    let shape = choose(rng, BODY_SHAPES).unwrap_or(&BODY_SHAPES[0]);
    let tone = choose(rng, SKIN_TONES).unwrap_or(&SKIN_TONES[0]);
    let eyes = choose(rng, EYE_COLORS).unwrap_or(&EYE_COLORS[0]);
    let hair = choose(rng, HAIR_COLORS).copied().unwrap_or(HAIR_COLORS[0]);

    let mut styling_tips = owned(shape.tips);
    styling_tips.extend(owned(eyes.tips));

    FashionAnalysis {
        body_shape: shape.name.to_string(),
        body_shape_confidence: shape.confidence,
        skin_tone: tone.name.to_string(),
        skin_tone_category: tone.category.to_string(),
        eye_color: eyes.name.to_string(),
        hair_color: hair.to_string(),
        best_silhouettes: owned(shape.silhouettes),
        colors_to_wear: owned(tone.wear),
        colors_to_avoid: owned(tone.avoid),
        styling_tips,
    }
}

pub fn analysis_message(analysis: FashionAnalysis) -> Message {
    Message::with_attachment(
        Origin::Responder,
        ANALYSIS_TEXT,
        Attachment::AnalysisResult(AnalysisReport::Fashion(analysis)),
    )
}

/// Reply to a finished 3D fit analysis of `item`.
pub fn model_analysis_message(item: &CatalogItem, analysis: &ModelAnalysis) -> Message {
    let m = &analysis.measurements;
    let styles = analysis
        .recommended_styles
        .iter()
        .enumerate()
        .map(|(index, style)| format!("{}. {}", index + 1, style))
        .collect::<Vec<_>>()
        .join("\n");

    let text = format!(
        "Great! I've completed a comprehensive analysis of your 3D model. Here's what I found:\n\n**📏 Your Measurements:**\n• Height: {height}\n• Chest: {chest}\n• Waist: {waist}\n• Hips: {hips}\n• Shoulder Width: {shoulders}\n\n**👤 Body Analysis:**\n• Body Shape: {shape}\n• Skin Tone: {tone}\n• Eye Color: {eyes}\n\n**✨ Personalized Style Recommendations:**\n{styles}\n\n**🎯 For the {name}:**\nBased on your body analysis, I recommend size **{size}** for the best fit. The {shape_lower} body shape will look fantastic in this style!\n\n**💫 Complete the Look:**\nWould you like me to suggest shoes and accessories to create a complete, coordinated outfit? I can recommend pieces that perfectly complement your {name} and match your personal style!",
        height = m.height,
        chest = m.chest,
        waist = m.waist,
        hips = m.hips,
        shoulders = m.shoulder_width,
        shape = analysis.body_shape,
        tone = analysis.skin_tone,
        eyes = analysis.eye_color,
        styles = styles,
        name = item.name,
        size = item.variant_or_default(),
        shape_lower = analysis.body_shape.to_lowercase(),
    );
    Message::responder(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ScriptedChoice, SeededChoice};
    use stylr_core::catalog::fashion_catalog;
    use stylr_core::message::{BodyMeasurements, MessageKind};

    #[test]
    fn test_scripted_profile() {
        let mut rng = ScriptedChoice::new([2, 5, 3, 6]);
        let analysis = analyze_photo(&mut rng);

        assert_eq!(analysis.body_shape, "Hourglass");
        assert_eq!(analysis.body_shape_confidence, 90);
        assert_eq!(analysis.skin_tone, "Deep with Warm Undertones");
        assert_eq!(analysis.skin_tone_category, "warm");
        assert_eq!(analysis.eye_color, "Hazel");
        assert_eq!(analysis.hair_color, "Dark Brown");
        assert_eq!(analysis.styling_tips.len(), 6);
        assert_eq!(analysis.styling_tips[5], "Gold accessories bring out amber flecks");
    }

    #[test]
    fn test_same_seed_same_profile() {
        let first = analyze_photo(&mut SeededChoice::from_seed(7));
        let second = analyze_photo(&mut SeededChoice::from_seed(7));
        assert_eq!(first, second);
    }

    fn model_analysis() -> ModelAnalysis {
        ModelAnalysis {
            measurements: BodyMeasurements {
                height: "5'6\"".to_string(),
                chest: "34\"".to_string(),
                waist: "27\"".to_string(),
                hips: "37\"".to_string(),
                shoulder_width: "15\"".to_string(),
            },
            body_shape: "Hourglass".to_string(),
            skin_tone: "Medium with Neutral Undertones".to_string(),
            eye_color: "Brown".to_string(),
            recommended_styles: vec!["Wrap dresses".to_string(), "Tailored blazers".to_string()],
            fit_confidence: 0.9,
        }
    }

    #[test]
    fn test_model_analysis_message() {
        let item = fashion_catalog().get_by_id("7").unwrap();
        let message = model_analysis_message(&item, &model_analysis());

        assert_eq!(message.kind(), MessageKind::Text);
        let text = message.text_content();
        assert!(text.contains("• Shoulder Width: 15\""));
        assert!(text.contains("1. Wrap dresses\n2. Tailored blazers"));
        assert!(text.contains(&format!("**🎯 For the {}:**", item.name)));
        assert!(text.contains(&format!("size **{}**", item.variant_or_default())));
        assert!(text.contains("The hourglass body shape"));
        assert!(text.ends_with("match your personal style!"));
    }

    #[test]
    fn test_model_analysis_size_defaults_to_m() {
        let mut item = (*fashion_catalog().get_by_id("7").unwrap()).clone();
        item.recommended_variant = None;
        let message = model_analysis_message(&item, &model_analysis());
        assert!(message.text_content().contains("I recommend size **M**"));
    }

    #[test]
    fn test_analysis_message_kind() {
        let message = analysis_message(analyze_photo(&mut ScriptedChoice::default()));
        assert_eq!(message.kind(), MessageKind::AnalysisResult);
        assert!(message.text_content().starts_with("Perfect! 📸"));
        assert!(message.validate().is_ok());
    }
}
