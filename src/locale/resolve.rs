use crate::types::Locale;

/// Resolve the locale to render.
///
/// # Resolution order
/// 1. `cookie` - when it names a supported locale
/// 2. `accept_language` - primary subtag of the first offered language
/// 3. `default`
///
/// Quality weights and later languages in the header are not considered.
#[must_use]
pub fn resolve_locale(
    cookie: Option<&str>,
    accept_language: Option<&str>,
    supported: &[Locale],
    default: Locale,
) -> Locale {
    if let Some(locale) = cookie.and_then(|value| supported_locale(value, supported)) {
        tracing::debug!(%locale, "Locale resolved from cookie");
        return locale;
    }

    if let Some(locale) = accept_language
        .and_then(primary_language_subtag)
        .and_then(|tag| supported_locale(tag, supported))
    {
        tracing::debug!(%locale, "Locale resolved from Accept-Language");
        return locale;
    }

    tracing::debug!(locale = %default, "Locale resolved to default");
    default
}

/// Primary language subtag of the first language in an `Accept-Language` value.
///
/// `"es-AR,en;q=0.8"` -> `Some("es")`. Returns `None` for an empty or blank header.
#[must_use]
pub fn primary_language_subtag(header: &str) -> Option<&str> {
    let first = header.split(',').next().unwrap_or_default();
    let primary = first.split('-').next().unwrap_or_default().trim();
    (!primary.is_empty()).then_some(primary)
}

fn supported_locale(code: &str, supported: &[Locale]) -> Option<Locale> {
    Locale::from_code(code).filter(|locale| supported.contains(locale))
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;

    const SUPPORTED: &[Locale] = &[Locale::En, Locale::Es];

    #[rstest]
    fn cookie_wins_for_every_supported_locale(
        #[values(Locale::En, Locale::Es)] locale: Locale,
        #[values(None, Some("es-AR,en;q=0.8"), Some("fr-FR"))] header: Option<&str>,
        #[values(Locale::En, Locale::Es)] default: Locale,
    ) {
        assert_that!(resolve_locale(Some(locale.as_str()), header, SUPPORTED, default), eq(locale));
    }

    #[rstest]
    #[case::region_and_weights(Some("es-AR,en;q=0.8"), Locale::Es)]
    #[case::plain(Some("es"), Locale::Es)]
    #[case::english_region(Some("en-GB,es;q=0.5"), Locale::En)]
    #[case::unsupported_language(Some("fr-FR"), Locale::En)]
    #[case::only_first_language_counts(Some("fr-FR,es;q=0.9"), Locale::En)]
    #[case::no_header(None, Locale::En)]
    #[case::empty_header(Some(""), Locale::En)]
    #[case::blank_header(Some("   "), Locale::En)]
    #[case::no_dash(Some("es;q=0.9"), Locale::En)]
    #[case::underscore_region(Some("es_AR"), Locale::En)]
    #[case::leading_comma(Some(",es"), Locale::En)]
    #[case::wildcard(Some("*"), Locale::En)]
    fn header_resolution(#[case] header: Option<&str>, #[case] expected: Locale) {
        assert_that!(resolve_locale(None, header, SUPPORTED, Locale::En), eq(expected));
    }

    #[rstest]
    #[case::unknown_cookie(Some("fr"))]
    #[case::empty_cookie(Some(""))]
    #[case::case_mismatch(Some("ES"))]
    fn invalid_cookie_falls_through_to_header(#[case] cookie: Option<&str>) {
        assert_that!(resolve_locale(cookie, Some("es-MX"), SUPPORTED, Locale::En), eq(Locale::Es));
    }

    #[rstest]
    fn cookie_outside_supported_set_is_ignored() {
        let supported = [Locale::En];

        assert_that!(resolve_locale(Some("es"), Some("es-ES"), &supported, Locale::En), eq(Locale::En));
    }

    #[rstest]
    fn default_is_returned_when_nothing_matches() {
        assert_that!(resolve_locale(None, None, SUPPORTED, Locale::Es), eq(Locale::Es));
    }

    #[rstest]
    #[case("es-AR,en;q=0.8", Some("es"))]
    #[case("en", Some("en"))]
    #[case(" en-US", Some("en"))]
    #[case("", None)]
    #[case("  ", None)]
    #[case("-AR", None)]
    fn test_primary_language_subtag(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_that!(primary_language_subtag(header), eq(expected));
    }
}
