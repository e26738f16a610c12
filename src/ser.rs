//! serde Serializer for the packed fixed-width layout.
//!
//! The [`Serializer`] is generic over any `W: std::io::Write`, enabling both
//! in-memory serialization (`to_bytes`) and streaming serialization (`to_writer`).
//!
//! ## Wire format summary
//! - 1-byte integers are written as is
//! - 2, 4 and 8 byte integers and floats in the configured byte order
//! - `[u8; N]`, tuples and structs: elements back to back, no prefix, no padding
//! - newtype structs: the inner value; unit types: nothing
//!
//! This is the inverse of [`crate::de`] and of rule-based decoding: the
//! field values of a decoded header serialize back to the original bytes.

use crate::endian::Endian;
use crate::error::{Error, Result};
use crate::swap::Swap;
use serde::ser::{self, Impossible, Serialize};
use std::io::Write;

// ── Public entry points ────────────────────────────────────────────────────

/// Serialize `value` into a freshly allocated `Vec<u8>`.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T, endian: Endian) -> Result<Vec<u8>> {
    let mut ser = Serializer::new(Vec::new(), endian);
    value.serialize(&mut ser)?;
    Ok(ser.into_writer())
}

/// Serialize `value`, writing directly into `writer`.
///
/// Unlike [`to_bytes`], this never allocates an intermediate buffer.
pub fn to_writer<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    endian: Endian,
) -> Result<()> {
    let mut ser = Serializer::new(&mut writer, endian);
    value.serialize(&mut ser)
}

// ── Serializer ─────────────────────────────────────────────────────────────

/// The packed serializer. Generic over any `W: Write`.
///
/// ```rust
/// use fixed_layout::{ser::Serializer, Endian};
/// use serde::Serialize;
///
/// let mut buf = Vec::new();
/// let mut ser = Serializer::new(&mut buf, Endian::Big);
/// (0x0800u16, 7u8).serialize(&mut ser).unwrap();
/// assert_eq!(buf, [0x08, 0x00, 7]);
/// ```
pub struct Serializer<W: Write> {
    writer: W,
    endian: Endian,
}

impl<W: Write> Serializer<W> {
    /// Create a new serializer that writes into `writer`.
    pub fn new(writer: W, endian: Endian) -> Self {
        Serializer { writer, endian }
    }

    /// Consume the serializer and return the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .map_err(|e| Error::Io(e.to_string()))
    }

    /// Convert to the configured byte order, then write the native bytes.
    fn write_ordered<T: Swap, const N: usize>(
        &mut self,
        value: T,
        to_ne_bytes: fn(T) -> [u8; N],
    ) -> Result<()> {
        let bytes = to_ne_bytes(self.endian.apply(value));
        self.write_all(&bytes)
    }
}

// ── serde::Serializer impl ─────────────────────────────────────────────────

impl<'a, W: Write> ser::Serializer for &'a mut Serializer<W> {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Impossible<(), Error>;
    type SerializeTuple = Self;
    type SerializeTupleStruct = Self;
    type SerializeTupleVariant = Impossible<(), Error>;
    type SerializeMap = Impossible<(), Error>;
    type SerializeStruct = Self;
    type SerializeStructVariant = Impossible<(), Error>;

    // ── Primitives ─────────────────────────────────────────────────────────

    fn serialize_bool(self, _v: bool) -> Result<()> {
        Err(Error::Unsupported("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.write_all(&v.to_ne_bytes())
    }
    fn serialize_i16(self, v: i16) -> Result<()> {
        self.write_ordered(v, i16::to_ne_bytes)
    }
    fn serialize_i32(self, v: i32) -> Result<()> {
        self.write_ordered(v, i32::to_ne_bytes)
    }
    fn serialize_i64(self, v: i64) -> Result<()> {
        self.write_ordered(v, i64::to_ne_bytes)
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.write_all(&[v])
    }
    fn serialize_u16(self, v: u16) -> Result<()> {
        self.write_ordered(v, u16::to_ne_bytes)
    }
    fn serialize_u32(self, v: u32) -> Result<()> {
        self.write_ordered(v, u32::to_ne_bytes)
    }
    fn serialize_u64(self, v: u64) -> Result<()> {
        self.write_ordered(v, u64::to_ne_bytes)
    }

    /// IEEE 754 single precision, swapped bit for bit
    fn serialize_f32(self, v: f32) -> Result<()> {
        self.write_ordered(v, f32::to_ne_bytes)
    }
    /// IEEE 754 double precision, swapped bit for bit
    fn serialize_f64(self, v: f64) -> Result<()> {
        self.write_ordered(v, f64::to_ne_bytes)
    }

    fn serialize_char(self, _v: char) -> Result<()> {
        Err(Error::Unsupported("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<()> {
        Err(Error::Unsupported("str"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<()> {
        Err(Error::Unsupported("bytes (use [u8; N])"))
    }

    fn serialize_none(self) -> Result<()> {
        Err(Error::Unsupported("option"))
    }

    fn serialize_some<T: Serialize + ?Sized>(self, _value: &T) -> Result<()> {
        Err(Error::Unsupported("option"))
    }

    fn serialize_unit(self) -> Result<()> {
        Ok(())
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<()> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<()> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Error::Unsupported("variable-length sequence"))
    }

    /// Fixed-length array / tuple: elements without a length prefix
    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Ok(self)
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(self)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::Unsupported("enum"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Error::Unsupported("map"))
    }

    /// Structure: fields back to back, no names, no count prefix
    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(self)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::Unsupported("enum"))
    }

    fn is_human_readable(&self) -> bool {
        false
    }
}

// ── Compound serializer impls ──────────────────────────────────────────────

impl<W: Write> ser::SerializeTuple for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<W: Write> ser::SerializeTupleStruct for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}

impl<W: Write> ser::SerializeStruct for &mut Serializer<W> {
    type Ok = ();
    type Error = Error;
    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        _key: &'static str,
        value: &T,
    ) -> Result<()> {
        value.serialize(&mut **self)
    }
    fn end(self) -> Result<()> {
        Ok(())
    }
}
