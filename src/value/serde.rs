//! Serde support for [ExactValue] via its canonical text form, so that
//! YAML configuration can say `"3/2"` or `"2^(7/12)"` and get the exact
//! value back.

use std::fmt;

use serde::{de::Visitor, Serializer};

use crate::value::ExactValue;

impl serde::Serialize for ExactValue {
    fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
        ser.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ExactValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ExactValueVisitor;

        impl<'de> Visitor<'de> for ExactValueVisitor {
            type Value = ExactValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "an exact value like '3/2', '2^(7/12)' or '2^(1/(2*pi))'"
                )
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                s.parse().map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_str(ExactValueVisitor)
    }
}

#[cfg(test)]
mod test {
    use crate::value::{exponent::Exponent, ExactValue, Rational};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_yaml_round_trip() {
        let values = vec![
            ExactValue::rational(3, 2),
            ExactValue::power(2, Exponent::rational(Rational::new(7, 12))),
            ExactValue::power(2, Exponent::over_pi(Rational::new(1, 2))),
        ];
        for value in values {
            let yaml = serde_yml::to_string(&value).unwrap();
            let back: ExactValue = serde_yml::from_str(&yaml).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(serde_yml::from_str::<ExactValue>("'not a value'").is_err());
    }
}
