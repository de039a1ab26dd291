use crate::application::ports::util::SlugGenerator;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

/// Map a title to a URL-safe identifier: lowercase, strip characters that
/// are not alphanumeric, underscore, whitespace, or hyphen, then collapse
/// every separator run into a single hyphen. Total over all inputs; an
/// all-punctuation title yields the empty string.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let cleaned: String = lowered
        .trim()
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == '_' || *ch == '-' || ch.is_whitespace())
        .collect();

    let mut slug = String::with_capacity(cleaned.len());
    let mut pending_separator = false;
    for ch in cleaned.chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = !slug.is_empty();
        } else {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(ch);
        }
    }
    slug
}
