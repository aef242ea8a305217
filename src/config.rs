//! Tab set configuration.
//!
//! A [`TabSet`] is the page-load-time configuration of one group of
//! language tabs: the ordered list of language identifiers plus the CSS
//! class conventions that tie selectors and panes to them. The markup
//! itself is static page content; this crate only attaches behavior to
//! whatever set is present in the document.

/// One group of language-documentation tabs.
///
/// Selectors are expected to carry `{selector_class} {selector_class}-{lang}`
/// and panes `{pane_class} {pane_class}-{lang}`; the currently visible
/// pair carries `{active_class}` in addition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    languages: Vec<String>,
    selector_class: String,
    pane_class: String,
    active_class: String,
}

impl TabSet {
    /// Builds a tab set for the given ordered language identifiers with
    /// the site's default class conventions (`lang-tab` / `tab-pane` /
    /// `active`).
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
            selector_class: "lang-tab".to_string(),
            pane_class: "tab-pane".to_string(),
            active_class: "active".to_string(),
        }
    }

    /// Overrides the class conventions, for markup that does not follow
    /// the site defaults.
    pub fn with_classes(mut self, selector: &str, pane: &str, active: &str) -> Self {
        self.selector_class = selector.to_string();
        self.pane_class = pane.to_string();
        self.active_class = active.to_string();
        self
    }

    /// The tab sets present on the deployed site: the numerical example
    /// pages compare Macaulay2, MATLAB and Julia; the API pages compare
    /// Scala, Java and Python. Each page carries at most one of them.
    pub fn deployed() -> Vec<TabSet> {
        vec![
            TabSet::new(["macaulay2", "matlab", "julia"]),
            TabSet::new(["scala", "java", "python"]),
        ]
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn selector_class(&self) -> &str {
        &self.selector_class
    }

    pub fn pane_class(&self) -> &str {
        &self.pane_class
    }

    pub fn active_class(&self) -> &str {
        &self.active_class
    }

    /// Class naming a single language's selector, e.g. `lang-tab-scala`.
    pub fn selector_class_for(&self, lang: &str) -> String {
        format!("{}-{}", self.selector_class, lang)
    }

    /// Class naming a single language's pane, e.g. `tab-pane-scala`.
    pub fn pane_class_for(&self, lang: &str) -> String {
        format!("{}-{}", self.pane_class, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_conventions() {
        let set = TabSet::new(["scala", "java", "python"]);
        assert_eq!(set.selector_class(), "lang-tab");
        assert_eq!(set.pane_class(), "tab-pane");
        assert_eq!(set.active_class(), "active");
        assert_eq!(set.selector_class_for("scala"), "lang-tab-scala");
        assert_eq!(set.pane_class_for("python"), "tab-pane-python");
    }

    #[test]
    fn test_language_order_preserved() {
        let set = TabSet::new(["macaulay2", "matlab", "julia"]);
        assert_eq!(set.languages(), ["macaulay2", "matlab", "julia"]);
    }

    #[test]
    fn test_deployed_sets_are_disjoint() {
        let sets = TabSet::deployed();
        assert_eq!(sets.len(), 2);
        for lang in sets[0].languages() {
            assert!(!sets[1].languages().contains(lang));
        }
    }

    #[test]
    fn test_custom_class_conventions() {
        let set = TabSet::new(["rust"]).with_classes("code-tab", "code-pane", "shown");
        assert_eq!(set.selector_class_for("rust"), "code-tab-rust");
        assert_eq!(set.pane_class_for("rust"), "code-pane-rust");
        assert_eq!(set.active_class(), "shown");
    }
}
