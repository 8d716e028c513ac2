//! AI persona synthesis — prompt an external model over the evidence digest.
//!
//! Any generation failure (transport, API error, empty response) degrades to
//! the heuristic synthesizer. This path never surfaces an error.

use crate::digest::build_digest;
use crate::generation::TextGenerator;
use crate::model::UserDataset;

use super::heuristic::synthesize_heuristic;
use super::PersonaSynthesizer;

const SYSTEM_INSTRUCTIONS: &str = "You are an expert in digital psychology and \
social media analysis. Provide thoughtful, evidence-based personality insights \
while being respectful and ethical.";

pub struct AiSynthesizer {
    generator: Box<dyn TextGenerator>,
}

impl AiSynthesizer {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }
}

impl PersonaSynthesizer for AiSynthesizer {
    fn synthesize(&self, dataset: &UserDataset) -> String {
        let prompt = build_prompt(dataset);
        match self.generator.generate(&prompt, SYSTEM_INSTRUCTIONS) {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => {
                tracing::warn!("Generator returned empty persona, falling back to heuristic");
                synthesize_heuristic(dataset)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persona generation failed, falling back to heuristic");
                synthesize_heuristic(dataset)
            }
        }
    }
}

/// Analysis prompt: evidence digest plus the seven required persona sections
/// and the citation format.
fn build_prompt(dataset: &UserDataset) -> String {
    let digest = build_digest(dataset);
    format!(
        "Analyze the following Reddit user data and create a comprehensive persona profile:\n\
         \n\
         {digest}\n\
         Please generate a detailed persona that includes:\n\
         \n\
         1. **Name/Handle**: {username}\n\
         2. **Demographics**: Inferred age range, gender (if determinable), location hints\n\
         3. **Interests**: Primary topics and hobbies based on subreddit activity\n\
         4. **Communication Style**: Tone, formality, humor, etc.\n\
         5. **Top Subreddits**: Most active communities\n\
         6. **Posting Behavior**: Frequency, engagement patterns, preferred content types\n\
         7. **Standout Traits**: Unique characteristics or notable patterns\n\
         \n\
         For each trait or characteristic, cite specific posts or comments that support your inference.\n\
         Use the format: [Evidence: Post/Comment ID - \"excerpt\"]\n\
         \n\
         Make the analysis insightful but respectful, focusing on public behavior patterns.\n",
        username = dataset.username,
    )
}
