//! Plain-text rendering of an analysis for terminal output.

use std::fmt;

use listopt_core::AnalysisResult;

/// Human-readable report of one analysis, rendered through `Display`.
pub(crate) struct Report<'a>(pub &'a AnalysisResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = &self.0.product;
        let optimization = &self.0.optimization;

        let title = if product.title.is_empty() {
            "(untitled listing)"
        } else {
            product.title.as_str()
        };
        if product.asin.is_empty() {
            writeln!(f, "{title}")?;
        } else {
            writeln!(f, "{title} [{}]", product.asin)?;
        }
        if !product.brand.is_empty() {
            writeln!(f, "Brand: {}", product.brand)?;
        }
        if let Some(price) = &product.price {
            writeln!(f, "Price: {price}")?;
        }
        match (product.rating, product.review_count) {
            (Some(rating), Some(count)) => writeln!(f, "Rating: {rating:.1} ({count} reviews)")?,
            (Some(rating), None) => writeln!(f, "Rating: {rating:.1}")?,
            _ => {}
        }
        if let Some(bsr) = product.bsr {
            writeln!(f, "Best Sellers Rank: #{bsr}")?;
        }

        writeln!(f)?;
        writeln!(f, "SEO score: {}/100", optimization.seo_score)?;
        writeln!(f, "BSR potential: {:+}%", optimization.bsr_potential)?;
        if !optimization.keyword_opportunities.is_empty() {
            writeln!(
                f,
                "Keyword opportunities: {}",
                optimization.keyword_opportunities.join(", ")
            )?;
        }

        writeln!(f)?;
        if optimization.suggestions.is_empty() {
            return writeln!(f, "No suggestions returned.");
        }

        writeln!(f, "Suggestions ({}):", optimization.suggestions.len())?;
        for (index, suggestion) in optimization.suggestions.iter().enumerate() {
            writeln!(f, "{:>3}. {}", index + 1, suggestion.kind)?;
            writeln!(f, "     Current:   {}", suggestion.current)?;
            writeln!(f, "     Suggested: {}", suggestion.suggested)?;
            writeln!(f, "     Reasoning: {}", suggestion.reasoning)?;
            for improvement in &suggestion.improvements {
                writeln!(f, "       - {improvement}")?;
            }
        }
        Ok(())
    }
}
