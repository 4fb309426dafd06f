use crate::basis::GeneratorTable;
use crate::value::ExactValue;

use super::{Scale, ScaleErr};

/// Build a scale by accumulating labeled steps.
///
/// Starting from the unison, each label in `steps` is looked up in the
/// generator table and multiplied onto the running degree. An absent
/// label fails with [ScaleErr::UnknownGenerator].
pub fn create_diatonic_scale<S: AsRef<str>>(
    table: &GeneratorTable,
    steps: &[S],
) -> Result<Scale, ScaleErr> {
    let mut scale = vec![ExactValue::one()];
    for step in steps {
        let label = step.as_ref();
        let generator = table
            .get(label)
            .ok_or_else(|| ScaleErr::UnknownGenerator(label.to_owned()))?;
        let next = &scale[scale.len() - 1] * generator;
        scale.push(next);
    }
    Ok(scale)
}

/// Convenience for tables whose labels are all single characters: each
/// character of `steps` is one step label.
pub fn create_diatonic_scale_from_string(
    table: &GeneratorTable,
    steps: &str,
) -> Result<Scale, ScaleErr> {
    let labels: Vec<String> = steps.chars().map(String::from).collect();
    create_diatonic_scale(table, &labels)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{edo12_table, five_limit_table};
    use crate::value::{exponent::Exponent, Rational};
    use pretty_assertions::assert_eq;

    fn ptolemy() -> Scale {
        vec![
            ExactValue::one(),
            ExactValue::rational(9, 8),
            ExactValue::rational(5, 4),
            ExactValue::rational(4, 3),
            ExactValue::rational(3, 2),
            ExactValue::rational(5, 3),
            ExactValue::rational(15, 8),
            ExactValue::integer(2),
        ]
    }

    #[test]
    fn test_ptolemaic_major() {
        let scale =
            create_diatonic_scale(&five_limit_table(), &["T", "t", "s", "T", "t", "T", "s"])
                .unwrap();
        assert_eq!(scale, ptolemy());
    }

    #[test]
    fn test_string_spec_matches_list_spec() {
        let table = five_limit_table();
        let from_list =
            create_diatonic_scale(&table, &["T", "t", "s", "T", "t", "T", "s"]).unwrap();
        let from_string = create_diatonic_scale_from_string(&table, "TtsTtTs").unwrap();
        assert_eq!(from_list, from_string);
    }

    #[test]
    fn test_edo12_major_mode() {
        let scale = create_diatonic_scale_from_string(&edo12_table(), "TTsTTTs").unwrap();
        assert_eq!(scale.len(), 8);
        assert_eq!(
            scale[1],
            ExactValue::power(2, Exponent::rational(Rational::new(1, 6)))
        );
        assert_eq!(scale[7], ExactValue::integer(2));
    }

    #[test]
    fn test_unknown_label() {
        let result = create_diatonic_scale(&five_limit_table(), &["T", "x"]);
        assert_eq!(result, Err(ScaleErr::UnknownGenerator("x".into())));
    }
}
