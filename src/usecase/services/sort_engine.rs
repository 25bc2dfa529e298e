use std::cmp::Ordering;

use crate::domain::entities::row::{FieldValue, RowRecord};
use crate::domain::entities::table::{SortDirection, SortKey};

/// Total order over optional field values.
///
/// Missing values compare equal to each other and below anything present.
/// Numbers sort before text; NaN sorts after every other number.
pub fn compare_values(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => a
            .partial_cmp(b)
            .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan())),
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => a.cmp(b),
        (Some(FieldValue::Number(_)), Some(FieldValue::Text(_))) => Ordering::Less,
        (Some(FieldValue::Text(_)), Some(FieldValue::Number(_))) => Ordering::Greater,
    }
}

/// Descending flips the sign of the comparison rather than the output, so
/// ties keep their input order in both directions.
pub fn compare_rows(
    a: &RowRecord,
    b: &RowRecord,
    key: &SortKey,
    direction: SortDirection,
) -> Ordering {
    let ordering = compare_values(a.get(key.as_str()), b.get(key.as_str()));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Stable permutation of `rows` indices under `key`/`direction`.
pub fn sort_order(rows: &[RowRecord], key: &SortKey, direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    // `sort_by` is stable
    order.sort_by(|&a, &b| compare_rows(&rows[a], &rows[b], key, direction));
    order
}

pub fn sort(rows: &[RowRecord], key: &SortKey, direction: SortDirection) -> Vec<RowRecord> {
    sort_order(rows, key, direction)
        .into_iter()
        .map(|idx| rows[idx].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coin(rank: i64, name: &str, change: f64) -> RowRecord {
        RowRecord::new()
            .with("rank", rank)
            .with("name", name)
            .with("change", change)
    }

    fn names(rows: &[RowRecord]) -> Vec<&str> {
        rows.iter()
            .map(|row| row.text("name").unwrap_or_default())
            .collect()
    }

    #[test]
    fn sort_orders_numbers_numerically() {
        let rows = vec![coin(10, "J", 0.0), coin(9, "I", 0.0), coin(100, "Z", 0.0)];

        let sorted = sort(&rows, &SortKey::from("rank"), SortDirection::Asc);

        assert_eq!(names(&sorted), vec!["I", "J", "Z"]);
    }

    #[test]
    fn sort_orders_text_lexicographically() {
        let rows = vec![coin(1, "Tether", 0.0), coin(2, "Bitcoin", 0.0), coin(3, "Ethereum", 0.0)];

        let sorted = sort(&rows, &SortKey::from("name"), SortDirection::Asc);

        assert_eq!(names(&sorted), vec!["Bitcoin", "Ethereum", "Tether"]);
    }

    #[test]
    fn sort_keeps_tied_rows_in_input_order_both_directions() {
        let rows = vec![
            coin(1, "A", 1.5),
            coin(2, "B", -0.2),
            coin(3, "C", 1.5),
            coin(4, "D", 1.5),
            coin(5, "E", -0.2),
        ];
        let key = SortKey::from("change");

        let asc = sort(&rows, &key, SortDirection::Asc);
        let desc = sort(&rows, &key, SortDirection::Desc);

        assert_eq!(names(&asc), vec!["B", "E", "A", "C", "D"]);
        assert_eq!(names(&desc), vec!["A", "C", "D", "B", "E"]);
    }

    #[test]
    fn descending_reverses_distinct_values() {
        let rows = vec![coin(1, "A", 3.0), coin(2, "B", -1.0), coin(3, "C", 7.25), coin(4, "D", 0.0)];
        let key = SortKey::from("change");

        let mut asc = names(&sort(&rows, &key, SortDirection::Asc))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        let desc = names(&sort(&rows, &key, SortDirection::Desc))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>();
        asc.reverse();

        assert_eq!(asc, desc);
    }

    #[test]
    fn missing_values_sort_first_and_tie_with_each_other() {
        let rows = vec![
            coin(1, "A", 2.0),
            RowRecord::new().with("name", "NoChange1"),
            coin(2, "B", -5.0),
            RowRecord::new().with("name", "NoChange2"),
        ];
        let key = SortKey::from("change");

        let asc = sort(&rows, &key, SortDirection::Asc);
        let desc = sort(&rows, &key, SortDirection::Desc);

        assert_eq!(names(&asc), vec!["NoChange1", "NoChange2", "B", "A"]);
        assert_eq!(names(&desc), vec!["A", "B", "NoChange1", "NoChange2"]);
    }

    #[test]
    fn unknown_key_keeps_input_order() {
        let rows = vec![coin(3, "C", 0.0), coin(1, "A", 0.0), coin(2, "B", 0.0)];

        let asc = sort(&rows, &SortKey::from("does_not_exist"), SortDirection::Asc);
        let desc = sort(&rows, &SortKey::from("does_not_exist"), SortDirection::Desc);

        assert_eq!(names(&asc), vec!["C", "A", "B"]);
        assert_eq!(names(&desc), vec!["C", "A", "B"]);
    }

    #[test]
    fn numbers_sort_before_text_and_nan_after_numbers() {
        assert_eq!(
            compare_values(Some(&FieldValue::Number(1e12)), Some(&FieldValue::from("1"))),
            Ordering::Less
        );
        assert_eq!(
            compare_values(Some(&FieldValue::Number(f64::NAN)), Some(&FieldValue::Number(1.0))),
            Ordering::Greater
        );
        assert_eq!(
            compare_values(
                Some(&FieldValue::Number(f64::NAN)),
                Some(&FieldValue::Number(f64::NAN))
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn sort_leaves_input_untouched() {
        let rows = vec![coin(2, "B", 0.0), coin(1, "A", 0.0)];
        let before = rows.clone();

        let _sorted = sort(&rows, &SortKey::from("rank"), SortDirection::Asc);

        assert_eq!(rows, before);
    }
}
