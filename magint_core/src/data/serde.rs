use alloc::string::String;
use core::fmt;

use magint_internals::hex_string_capacity;
use serde::{
    de,
    de::{MapAccess, SeqAccess, Visitor},
    ser::{SerializeStruct, SerializeTuple},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::Bigint;

fn magnitude_hex(x: &Bigint) -> String {
    let mut s = String::with_capacity(hex_string_capacity(
        x.len(),
        x.digits().last().copied().unwrap_or(0),
        false,
    ));
    x.write_magnitude_hex(&mut s);
    s
}

/// A `serde_support` impl
impl Serialize for Bigint {
    /// Serializes `self` in a platform independent way. In human readable form,
    /// it serializes into a struct named "Bigint" with two fields "neg" and
    /// "mag". "neg" is the sign and "mag" is the magnitude as an unprefixed
    /// lowercase hexadecimal string, which is "0" for zero. Otherwise it
    /// serializes into a tuple of the same two elements.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mag = magnitude_hex(self);
        if serializer.is_human_readable() {
            let mut s = serializer.serialize_struct("Bigint", 2)?;
            s.serialize_field("neg", &self.is_negative())?;
            s.serialize_field("mag", mag.as_str())?;
            s.end()
        } else {
            let mut s = serializer.serialize_tuple(2)?;
            s.serialize_element(&self.is_negative())?;
            s.serialize_element(mag.as_str())?;
            s.end()
        }
    }
}

const FIELDS: &[&str] = &["neg", "mag"];

enum Field {
    Neg,
    Mag,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> Result<Field, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("`neg` or `mag`")
            }

            fn visit_str<E>(self, value: &str) -> Result<Field, E>
            where
                E: de::Error,
            {
                match value {
                    "neg" => Ok(Field::Neg),
                    "mag" => Ok(Field::Mag),
                    _ => Err(de::Error::unknown_field(value, FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

fn from_parts<E: de::Error>(neg: bool, mag: &str) -> Result<Bigint, E> {
    if mag.starts_with('-') {
        return Err(de::Error::custom("`mag` should be unsigned"))
    }
    match Bigint::from_hex_str(mag) {
        Ok(x) => Ok(if neg { x.negate() } else { x }),
        Err(e) => Err(de::Error::custom(e)),
    }
}

struct BigintVisitor;

impl<'de> Visitor<'de> for BigintVisitor {
    type Value = Bigint;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "struct Bigint consisting of a sign \"neg\" and a hexadecimal magnitude \"mag\"",
        )
    }

    fn visit_map<V>(self, mut map: V) -> Result<Bigint, V::Error>
    where
        V: MapAccess<'de>,
    {
        let mut neg: Option<bool> = None;
        let mut mag: Option<&str> = None;
        while let Some(key) = map.next_key()? {
            match key {
                Field::Neg => {
                    if neg.is_some() {
                        return Err(de::Error::duplicate_field("neg"))
                    }
                    neg = Some(map.next_value()?);
                }
                Field::Mag => {
                    if mag.is_some() {
                        return Err(de::Error::duplicate_field("mag"))
                    }
                    mag = Some(map.next_value()?);
                }
            }
        }
        let neg = neg.ok_or_else(|| de::Error::missing_field("neg"))?;
        let mag = mag.ok_or_else(|| de::Error::missing_field("mag"))?;
        from_parts(neg, mag)
    }

    fn visit_seq<V>(self, mut seq: V) -> Result<Bigint, V::Error>
    where
        V: SeqAccess<'de>,
    {
        let neg: bool = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let mag: &str = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        from_parts(neg, mag)
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Bigint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_struct("Bigint", FIELDS, BigintVisitor)
        } else {
            deserializer.deserialize_tuple(2, BigintVisitor)
        }
    }
}
