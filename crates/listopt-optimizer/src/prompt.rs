//! Prompt text sent to the chat-completions service.

use std::fmt::Write as _;

use listopt_core::ProductRecord;

/// System message establishing the assistant's role for every request.
pub const SYSTEM_PROMPT: &str = "You are an expert Amazon SEO consultant and copywriter. \
You optimize Amazon product listings for better search rankings, conversion rates, and BSR \
(Best Sellers Rank). Give specific, actionable suggestions that follow Amazon's best practices.";

const OPTIMIZATION_FORMAT: &str = "\
Please provide optimization suggestions in the following format, separating each section \
with a line containing only ---

TYPE: brand-voice
CURRENT: [current brand voice description]
SUGGESTED: [optimized brand voice]
REASONING: [why this change will help]
---
TYPE: bullets
CURRENT: [current bullet points]
SUGGESTED: [optimized bullet points]
REASONING: [why these changes will help]
---
TYPE: description
CURRENT: [current description]
SUGGESTED: [optimized description]
REASONING: [why this change will help]
---

Keep every CURRENT, SUGGESTED and REASONING value on a single line.

Also provide:
- SEO Score (1-100): [score]
- BSR Potential Improvement: [percentage]%
- Top Keyword Opportunities: [comma-separated list of keywords]
";

/// Builds the full-listing optimization prompt for `product`.
#[must_use]
pub fn build_optimization_prompt(product: &ProductRecord) -> String {
    format!(
        "Analyze this Amazon product listing and provide optimization suggestions for better \
SEO, BSR ranking, and conversion rates.

PRODUCT INFORMATION:
Title: {title}
Brand: {brand}
Description: {description}
Bullet Points: {bullets}

{OPTIMIZATION_FORMAT}",
        title = product.title,
        brand = product.brand,
        description = product.description,
        bullets = product.bullets.join("\n"),
    )
}

/// Prompt asking for an optimized brand voice.
#[must_use]
pub fn build_brand_voice_prompt(current: &str, context: &str) -> String {
    format!(
        "Optimize this brand voice for better Amazon product performance:

Current Brand Voice: {current}
Product Context: {context}

Provide an optimized brand voice that:
1. Builds trust and credibility
2. Appeals to the target audience
3. Differentiates from competitors
4. Aligns with Amazon's best practices

Optimized Brand Voice:"
    )
}

/// Prompt asking for optimized bullet points, one per line.
#[must_use]
pub fn build_bullets_prompt(bullets: &[String], context: &str) -> String {
    let mut numbered = String::new();
    for (index, bullet) in bullets.iter().enumerate() {
        let _ = writeln!(numbered, "{}. {bullet}", index + 1);
    }

    format!(
        "Optimize these Amazon bullet points for better conversion and SEO:

Current Bullets:
{numbered}
Product Context: {context}

Provide optimized bullet points that:
1. Lead with benefits, not features
2. Include relevant keywords naturally
3. Address customer pain points
4. Use power words and emotional triggers
5. Follow Amazon's character limits

Optimized Bullets:"
    )
}

/// Prompt asking for an optimized product description.
#[must_use]
pub fn build_description_prompt(current: &str, context: &str) -> String {
    format!(
        "Optimize this Amazon product description for better SEO and conversion:

Current Description: {current}
Product Context: {context}

Provide an optimized description that:
1. Includes relevant keywords naturally
2. Tells a compelling story
3. Addresses customer concerns
4. Uses persuasive copywriting techniques
5. Follows Amazon's guidelines

Optimized Description:"
    )
}
