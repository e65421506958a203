use crate::classifier::{self, Classification};
use crate::error::Result;
use crate::rules::RuleSet;

/// Implemented by any persisted entity whose text should be scored before it
/// becomes durable. The entity names its target text and accepts the
/// resulting score/flag into its own fields; nothing else is touched.
pub trait Classifiable {
    fn target_text(&self) -> &str;

    fn apply_classification(&mut self, classification: &Classification);
}

/// Pre-persistence hook: classify the entity's target text and write the
/// outcome back. Owns no scoring logic. A later edit of the text requires
/// calling this again; nothing is recomputed automatically.
pub fn apply<T: Classifiable + ?Sized>(entity: &mut T, rules: &RuleSet) -> Result<Classification> {
    let classification = classifier::classify(entity.target_text(), rules)?;
    entity.apply_classification(&classification);
    Ok(classification)
}
