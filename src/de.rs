//! serde Deserializer for the packed fixed-width layout.
//!
//! Reads serde-derived types that have no [`Rule`](crate::Rule) using the same
//! wire layout the rules describe:
//!
//! | serde type | Encoding |
//! |------------|----------|
//! | `i8`, `u8` | 1 byte |
//! | `i16`..`u64`, `f32`, `f64` | natural width, configured byte order |
//! | `[u8; N]`, tuples, tuple structs | elements back to back, no count prefix |
//! | structs | fields back to back, in declaration order |
//! | newtype structs | the inner value |
//! | `()`, unit structs | 0 bytes |
//!
//! Everything self-describing or variable-length (bool, char, strings, byte
//! buffers, options, sequences, maps, enums) is rejected with
//! [`Error::Unsupported`].

use crate::decode::Decode;
use crate::decoder::Decoder;
use crate::endian::Endian;
use crate::error::{Error, Result};
use serde::de::{self, Deserialize, DeserializeOwned, SeqAccess, Visitor};

/// Deserialize a value from packed bytes, ignoring any trailing bytes.
pub fn from_bytes<T: DeserializeOwned>(input: &[u8], endian: Endian) -> Result<T> {
    let mut de = Deserializer::new(input, endian);
    let value = T::deserialize(&mut de)?;
    Ok(value)
}

/// Deserialize a value from packed bytes, also returning the unconsumed bytes.
pub fn from_bytes_partial<'de, T: Deserialize<'de>>(
    input: &'de [u8],
    endian: Endian,
) -> Result<(T, &'de [u8])> {
    let mut de = Deserializer::new(input, endian);
    let value = T::deserialize(&mut de)?;
    Ok((value, de.remaining()))
}

/// The packed deserializer. Reads from a byte slice through a [`Decoder`].
pub struct Deserializer<'de> {
    input: &'de [u8],
    decoder: Decoder<&'de [u8]>,
}

impl<'de> Deserializer<'de> {
    pub fn new(input: &'de [u8], endian: Endian) -> Self {
        Deserializer {
            input,
            decoder: Decoder::new(input, endian),
        }
    }

    /// Returns the unconsumed portion of the input buffer.
    pub fn remaining(&self) -> &'de [u8] {
        &self.input[self.decoder.position()..]
    }

    fn read<T: Decode<&'de [u8]>>(&mut self) -> Result<T> {
        self.decoder.decode()
    }
}

// ── Main Deserializer impl ─────────────────────────────────────────────────

impl<'de> de::Deserializer<'de> for &mut Deserializer<'de> {
    type Error = Error;

    fn deserialize_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported(
            "deserialize_any (packed layout is not self-describing)",
        ))
    }

    fn deserialize_bool<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("bool"))
    }

    fn deserialize_i8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i8(self.read()?)
    }

    fn deserialize_i16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i16(self.read()?)
    }

    fn deserialize_i32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i32(self.read()?)
    }

    fn deserialize_i64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_i64(self.read()?)
    }

    fn deserialize_u8<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u8(self.read()?)
    }

    fn deserialize_u16<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u16(self.read()?)
    }

    fn deserialize_u32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u32(self.read()?)
    }

    fn deserialize_u64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_u64(self.read()?)
    }

    fn deserialize_f32<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_f32(self.read()?)
    }

    fn deserialize_f64<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_f64(self.read()?)
    }

    fn deserialize_char<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("char"))
    }

    fn deserialize_str<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("str"))
    }

    fn deserialize_string<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("string"))
    }

    fn deserialize_bytes<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("bytes (use [u8; N])"))
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("byte_buf (use [u8; N])"))
    }

    fn deserialize_option<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("option"))
    }

    fn deserialize_unit<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_unit_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_unit()
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_seq<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("variable-length sequence"))
    }

    fn deserialize_tuple<V: Visitor<'de>>(self, len: usize, visitor: V) -> Result<V::Value> {
        // Fixed-length: no count prefix
        visitor.visit_seq(SeqDeserializer::new(self, len))
    }

    fn deserialize_tuple_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        len: usize,
        visitor: V,
    ) -> Result<V::Value> {
        visitor.visit_seq(SeqDeserializer::new(self, len))
    }

    fn deserialize_map<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("map"))
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value> {
        // Fields in declaration order, no names on the wire
        visitor.visit_seq(SeqDeserializer::new(self, fields.len()))
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        _visitor: V,
    ) -> Result<V::Value> {
        Err(Error::Unsupported("enum"))
    }

    fn deserialize_identifier<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported("identifier"))
    }

    fn deserialize_ignored_any<V: Visitor<'de>>(self, _visitor: V) -> Result<V::Value> {
        Err(Error::Unsupported(
            "deserialize_ignored_any (packed layout is not self-describing)",
        ))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

// ── SeqDeserializer: fixed count ───────────────────────────────────────────

struct SeqDeserializer<'a, 'de: 'a> {
    de: &'a mut Deserializer<'de>,
    remaining: usize,
}

impl<'a, 'de> SeqDeserializer<'a, 'de> {
    fn new(de: &'a mut Deserializer<'de>, count: usize) -> Self {
        SeqDeserializer {
            de,
            remaining: count,
        }
    }
}

impl<'de> SeqAccess<'de> for SeqDeserializer<'_, 'de> {
    type Error = Error;

    fn next_element_seed<T: de::DeserializeSeed<'de>>(
        &mut self,
        seed: T,
    ) -> Result<Option<T::Value>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        seed.deserialize(&mut *self.de).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.remaining)
    }
}
