use serde::{Deserialize, Serialize};

/// Chart-ready series as two parallel vectors of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: u64) {
        self.labels.push(label.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl<L: Into<String>> FromIterator<(L, u64)> for Series {
    fn from_iter<I: IntoIterator<Item = (L, u64)>>(iter: I) -> Self {
        let mut series = Series::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_keeps_order() {
        let series: Series = vec![("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(series.labels, vec!["b", "a"]);
        assert_eq!(series.values, vec![2, 1]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.total(), 3);
        assert_eq!(series.iter().next(), Some(("b", 2)));
    }

    #[test]
    fn test_serializes_as_labels_and_values() {
        let mut series = Series::new();
        series.push("Jan 2024", 4);
        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(json, serde_json::json!({"labels": ["Jan 2024"], "values": [4]}));
    }
}
