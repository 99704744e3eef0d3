//! Fixed sample analysis for previewing output without network access.

use crate::product::ProductRecord;
use crate::suggestion::{AnalysisResult, OptimizationSuggestion, SuggestionBundle, SuggestionKind};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Returns a hardcoded analysis of an Echo Dot listing.
#[must_use]
pub fn sample_analysis() -> AnalysisResult {
    let product = ProductRecord {
        asin: "B08N5WRWNW".to_string(),
        title: "Echo Dot (4th Gen) | Smart speaker with Alexa | Charcoal".to_string(),
        brand: "Amazon".to_string(),
        price: Some("$49.99".to_string()),
        description: "Meet the Echo Dot - Our most popular smart speaker with Alexa. The sleek, \
                      compact design delivers crisp vocals and balanced bass for full sound."
            .to_string(),
        bullets: strings(&[
            "Meet the Echo Dot - Our most popular smart speaker with Alexa",
            "Voice control your music - Stream songs from Amazon Music, Apple Music, Spotify, Sirius XM, and others",
            "Ready to help - Ask Alexa to play music, answer questions, read the news, check the weather, set alarms, control compatible smart home devices, and more",
            "Voice control your smart home - Turn on lights, adjust thermostats, lock doors, and more with compatible connected devices",
            "Start Routines with your voice - Try saying \"Alexa, good morning\" to turn on the coffee maker and read the news",
        ]),
        images: Vec::new(),
        rating: Some(4.7),
        review_count: Some(125_000),
        category: Some("Electronics".to_string()),
        bsr: Some(15),
    };

    let suggestions = vec![
        OptimizationSuggestion {
            kind: SuggestionKind::BrandVoice,
            current: "Meet the Echo Dot - Our most popular smart speaker with Alexa.".to_string(),
            suggested: "Experience the Echo Dot - Amazon's #1 smart speaker featuring advanced \
                        Alexa voice technology."
                .to_string(),
            reasoning: "A more premium, authoritative voice that leads with market leadership \
                        and technology."
                .to_string(),
            improvements: strings(&[
                "Emphasizes market leadership",
                "Uses more sophisticated language",
                "Highlights technological features",
            ]),
        },
        OptimizationSuggestion {
            kind: SuggestionKind::Bullets,
            current: "Voice control your music - Stream songs from Amazon Music, Apple Music, \
                      Spotify, Sirius XM, and others"
                .to_string(),
            suggested: "Unlimited Music Control - Stream from Amazon Music, Apple Music, Spotify, \
                        Sirius XM, and more with simple voice commands"
                .to_string(),
            reasoning: "Stronger action words and a clearer benefit statement.".to_string(),
            improvements: strings(&[
                "Stronger action words",
                "Clearer benefit statement",
                "Front-loads the primary keyword",
            ]),
        },
        OptimizationSuggestion {
            kind: SuggestionKind::Description,
            current: "Meet the Echo Dot - Our most popular smart speaker with Alexa. The sleek, \
                      compact design delivers crisp vocals and balanced bass for full sound."
                .to_string(),
            suggested: "Transform your home with the Echo Dot - Amazon's best-selling smart \
                        speaker featuring the Alexa voice assistant. Crystal-clear audio in a \
                        sleek, space-saving design that fits anywhere."
                .to_string(),
            reasoning: "Adds emotional triggers, stronger value propositions, and more \
                        descriptive language."
                .to_string(),
            improvements: strings(&[
                "Added emotional triggers",
                "Stronger value propositions",
                "More descriptive language",
            ]),
        },
    ];

    AnalysisResult::new(
        product,
        SuggestionBundle {
            suggestions,
            seo_score: 78,
            bsr_potential: 25,
            keyword_opportunities: strings(&[
                "smart speaker",
                "voice assistant",
                "home automation",
                "alexa speaker",
                "bluetooth speaker",
            ]),
        },
    )
}
