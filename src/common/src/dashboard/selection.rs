use serde::Serialize;

/// Name of the metric currently drilled into, if any.
///
/// Holds a name rather than a [`Metric`](crate::Metric) and is never checked
/// against the fetched list, so it survives a re-fetch that drops the metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection(Option<String>);

impl Selection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn of(name: impl Into<String>) -> Self {
        Self(Some(name.into()))
    }

    pub fn select(&mut self, name: impl Into<String>) {
        self.0 = Some(name.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Option<String>> for Selection {
    fn from(name: Option<String>) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let selection = Selection::default();
        assert!(selection.is_none());
        assert_eq!(selection.name(), None);
    }

    #[test]
    fn select_replaces_previous_name() {
        let mut selection = Selection::of("Visits");
        selection.select("BP Checks");
        assert_eq!(selection.name(), Some("BP Checks"));
    }

    #[test]
    fn serializes_as_plain_name_or_null() {
        assert_eq!(serde_json::to_string(&Selection::none()).unwrap(), "null");
        assert_eq!(
            serde_json::to_string(&Selection::of("Visits")).unwrap(),
            "\"Visits\""
        );
    }
}
