//! Template Selector - owns the greeting templates and picks one at random.

use tracing::trace;

use crate::{
    application::ports::RandomSource,
    domain::{DomainError, DomainValidator as validator, Template},
};

/// Templates every default selector starts with, with the byte offset of
/// their `%s`.
const BUILTIN_TEMPLATES: [(&str, usize); 3] = [
    ("Hi, %s. Welcome!", 4),
    ("Great to see you, %s!", 18),
    ("Hail, %s! Well met!", 6),
];

/// Immutable, ordered set of greeting templates.
///
/// Invariant: holds at least one template. The list is fixed at
/// construction and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSelector {
    templates: Box<[Template]>,
}

impl TemplateSelector {
    /// Create a selector with the built-in templates.
    pub fn new() -> Self {
        Self {
            templates: BUILTIN_TEMPLATES
                .iter()
                .map(|&(text, slot)| Template::preset(text, slot))
                .collect(),
        }
    }

    /// Create a selector from caller-provided template strings.
    ///
    /// Every entry must contain exactly one `%s`; order is preserved.
    pub fn from_templates<I, S>(templates: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let templates = templates
            .into_iter()
            .map(|t| validator::validate_template(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if templates.is_empty() {
            return Err(DomainError::NoTemplates);
        }

        Ok(Self {
            templates: templates.into_boxed_slice(),
        })
    }

    /// Pick a template using one draw from `rng`.
    ///
    /// A draw outside `0..len` is reduced modulo `len`.
    pub fn pick<R>(&self, rng: &mut R) -> &Template
    where
        R: RandomSource + ?Sized,
    {
        let len = self.templates.len();
        let index = rng.next_index(len) % len;
        trace!(index, len, "Template drawn");
        &self.templates[index]
    }

    /// All templates, in selection order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always `false` for a constructed selector.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateSelector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockRandomSource;

    /// Replays a fixed list of draws.
    struct Sequence(std::vec::IntoIter<usize>);

    impl RandomSource for Sequence {
        fn next_index(&mut self, _bound: usize) -> usize {
            self.0.next().unwrap_or(0)
        }
    }

    #[test]
    fn builtin_templates_are_loaded() {
        let selector = TemplateSelector::new();
        assert_eq!(selector.len(), BUILTIN_TEMPLATES.len());
        assert!(!selector.is_empty());
        assert_eq!(selector.templates()[0].as_str(), "Hi, %s. Welcome!");
    }

    #[test]
    fn builtin_offsets_match_validation() {
        for (text, slot) in BUILTIN_TEMPLATES {
            assert_eq!(Template::preset(text, slot), Template::new(text).unwrap());
        }
    }

    #[test]
    fn pick_passes_template_count_as_bound() {
        let selector = TemplateSelector::from_templates(["Hi %s!", "Hello %s."]).unwrap();

        let mut rng = MockRandomSource::new();
        rng.expect_next_index()
            .withf(|bound| *bound == 2)
            .times(1)
            .return_const(1usize);

        assert_eq!(selector.pick(&mut rng).as_str(), "Hello %s.");
    }

    #[test]
    fn single_template_still_draws_once() {
        let selector = TemplateSelector::from_templates(["Hi %s!"]).unwrap();

        let mut rng = MockRandomSource::new();
        rng.expect_next_index().times(1).return_const(0usize);

        assert_eq!(selector.pick(&mut rng).as_str(), "Hi %s!");
    }

    #[test]
    fn out_of_range_draw_wraps() {
        let selector = TemplateSelector::from_templates(["A %s", "B %s", "C %s"]).unwrap();
        let mut rng = Sequence(vec![4].into_iter());
        assert_eq!(selector.pick(&mut rng).as_str(), "B %s");
    }

    #[test]
    fn identical_sequences_pick_identically() {
        let a = TemplateSelector::new();
        let b = TemplateSelector::new();
        let draws = vec![2, 0, 1, 1, 0, 2];

        let mut rng_a = Sequence(draws.clone().into_iter());
        let mut rng_b = Sequence(draws.into_iter());

        for _ in 0..6 {
            assert_eq!(a.pick(&mut rng_a), b.pick(&mut rng_b));
        }
    }

    #[test]
    fn rejects_empty_list() {
        let none: [&str; 0] = [];
        assert_eq!(
            TemplateSelector::from_templates(none),
            Err(DomainError::NoTemplates)
        );
    }

    #[test]
    fn rejects_template_without_placeholder() {
        let result = TemplateSelector::from_templates(["Hi %s!", "Hello."]);
        assert!(matches!(
            result,
            Err(DomainError::InvalidTemplate { ref template, .. }) if template == "Hello."
        ));
    }
}
