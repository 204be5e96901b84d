//! Sorting instrument lists for display.

use std::cmp::Ordering;

use crate::instrument::Instrument;

/// Orders instruments by name, placing missing entries first.
///
/// Total and symmetric: `None == None`, `None < Some(_)` and
/// `Some(_) > None`, so it is safe to pass to `sort_by`.
pub fn by_name(a: Option<&Instrument>, b: Option<&Instrument>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.cmp_by_name(b),
    }
}

impl Instrument {
    pub fn cmp_by_name(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nulls_sort_first() {
        let a = Instrument::new("Allianz");
        assert_eq!(by_name(None, Some(&a)), Ordering::Less);
        assert_eq!(by_name(Some(&a), None), Ordering::Greater);
        assert_eq!(by_name(None, None), Ordering::Equal);
    }

    #[test]
    fn test_compares_names() {
        let a = Instrument::new("Allianz");
        let b = Instrument::new("BASF");
        assert_eq!(by_name(Some(&a), Some(&b)), Ordering::Less);
        assert_eq!(by_name(Some(&b), Some(&a)), Ordering::Greater);
        assert_eq!(by_name(Some(&a), Some(&a.deep_copy())), Ordering::Equal);
    }

    #[test]
    fn test_name_comparison_is_case_sensitive() {
        let upper = Instrument::new("Zalando");
        let lower = Instrument::new("adidas");
        assert_eq!(upper.cmp_by_name(&lower), Ordering::Less);
    }

    #[test]
    fn test_sorts_mixed_list() {
        let sap = Instrument::new("SAP");
        let bmw = Instrument::new("BMW");
        let mut list = vec![Some(&sap), None, Some(&bmw), None];

        list.sort_by(|a, b| by_name(*a, *b));

        let names: Vec<Option<&str>> = list.iter().map(|i| i.map(|i| i.name.as_str())).collect();
        assert_eq!(names, vec![None, None, Some("BMW"), Some("SAP")]);
    }
}
