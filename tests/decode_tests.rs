use fixed_layout::{
    Component, Decoder, Endian, Error, Layout, Pad, Rule, Shape, decode, decode_partial,
    length_of, rule,
};

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

rule! { Point { x: i32, y: i32 } }

#[derive(Debug, PartialEq)]
struct Segment {
    kind: u8,
    from: Point,
    to: Point,
    weight: f64,
}

rule! {
    Segment {
        kind: u8,
        from: Point,
        to: Point,
        weight: f64,
    }
}

#[derive(Debug, PartialEq)]
struct Versioned {
    version: u16,
    flags: u8,
}

impl Versioned {
    fn new(version: u16, _reserved: Pad<1>, flags: u8) -> Self {
        Versioned { version, flags }
    }
}

rule! { Versioned = (u16, Pad<1>, u8) => Versioned::new }

struct Record<'a> {
    tag: u16,
    body: &'a [u8; 4],
}

rule! { impl<'a> Record<'a> { tag: u16, body: &'a [u8; 4] } }

struct Patch<'a> {
    tag: u16,
    body: &'a mut [u8; 4],
}

rule! { impl<'a> Patch<'a> { tag: u16, body: &'a mut [u8; 4] } }

// ── Length calculator ─────────────────────────────────────────────────────

#[test]
fn test_primitive_lengths() {
    assert_eq!(length_of::<u8>(), 1);
    assert_eq!(length_of::<i8>(), 1);
    assert_eq!(length_of::<u16>(), 2);
    assert_eq!(length_of::<i32>(), 4);
    assert_eq!(length_of::<f32>(), 4);
    assert_eq!(length_of::<u64>(), 8);
    assert_eq!(length_of::<f64>(), 8);
}

#[test]
fn test_array_lengths() {
    assert_eq!(length_of::<[u8; 6]>(), 6);
    assert_eq!(length_of::<&[u8; 12]>(), 12);
    assert_eq!(length_of::<&mut [u8; 3]>(), 3);
    assert_eq!(length_of::<Pad<5>>(), 5);
    assert_eq!(length_of::<[u8; 0]>(), 0);
}

#[test]
fn test_composite_length_is_sum_of_components() {
    assert_eq!(length_of::<Point>(), 8);
    assert_eq!(length_of::<Segment>(), 1 + 8 + 8 + 8);
    assert_eq!(length_of::<Versioned>(), 4);
    assert_eq!(length_of::<Record<'_>>(), 6);

    let sum: usize = Segment::COMPONENTS.iter().map(|c| c.len).sum();
    assert_eq!(sum, Segment::LEN);
}

#[test]
fn test_length_usable_in_const_context() {
    const BUF: usize = length_of::<Segment>();
    let stack = [0u8; BUF];
    let segment: Segment = decode(&stack, Endian::Big).unwrap();
    assert_eq!(segment.from, Point { x: 0, y: 0 });
}

// ── Type classifier / rule registry ───────────────────────────────────────

#[test]
fn test_shapes() {
    assert_eq!(<u8 as Layout>::SHAPE, Shape::Byte);
    assert_eq!(<i8 as Layout>::SHAPE, Shape::Byte);
    assert_eq!(<u16 as Layout>::SHAPE, Shape::Swappable);
    assert_eq!(<f64 as Layout>::SHAPE, Shape::Swappable);
    assert_eq!(<[u8; 4] as Layout>::SHAPE, Shape::Array);
    assert_eq!(<&[u8; 4] as Layout>::SHAPE, Shape::Array);
    assert_eq!(<Pad<2> as Layout>::SHAPE, Shape::Array);
    assert_eq!(<Point as Layout>::SHAPE, Shape::Composite);
    assert_eq!(<(u8, u16) as Layout>::SHAPE, Shape::Composite);
}

#[test]
fn test_component_descriptors_follow_declaration_order() {
    let names: Vec<_> = Segment::COMPONENTS.iter().map(|c| c.name).collect();
    assert_eq!(names, ["kind", "from", "to", "weight"]);
    assert_eq!(
        Segment::COMPONENTS[1],
        Component {
            name: "from",
            ty: "Point",
            shape: Shape::Composite,
            len: 8,
        }
    );

    // constructor rules carry no field names
    assert!(Versioned::COMPONENTS.iter().all(|c| c.name.is_empty()));
    assert_eq!(Versioned::COMPONENTS[1].shape, Shape::Array);
}

// ── Cursor decoder ────────────────────────────────────────────────────────

#[test]
fn test_big_and_little_are_byte_reversed() {
    let bytes = [0x1A, 0x2B, 0x01, 0x02, 0x03, 0x04];
    let (be16, rest): (u16, _) = decode_partial(&bytes, Endian::Big).unwrap();
    let be32: u32 = decode(rest, Endian::Big).unwrap();
    let (le16, rest): (u16, _) = decode_partial(&bytes, Endian::Little).unwrap();
    let le32: u32 = decode(rest, Endian::Little).unwrap();

    assert_eq!(be16, 0x1A2B);
    assert_eq!(le16, 0x2B1A);
    assert_eq!(le16, be16.swap_bytes());
    assert_eq!(be32, 0x0102_0304);
    assert_eq!(le32, be32.swap_bytes());
}

#[test]
fn test_native_order_keeps_in_memory_representation() {
    let value = 0x0102_0304_0506_0708u64;
    let bytes = value.to_ne_bytes();
    let mut decoder = Decoder::native(&bytes[..]);
    assert_eq!(decoder.decode::<u64>().unwrap(), value);
}

#[test]
fn test_signed_and_float_decoding() {
    let mut bytes = Vec::new();
    bytes.extend((-2i16).to_be_bytes());
    bytes.extend((-123_456i32).to_le_bytes());
    bytes.extend(std::f32::consts::PI.to_be_bytes());
    bytes.extend(std::f64::consts::E.to_le_bytes());
    bytes.push(0xFF);

    let mut be = Decoder::new(&bytes[..], Endian::Big);
    assert_eq!(be.decode::<i16>().unwrap(), -2);
    let mut le = Decoder::new(&bytes[2..], Endian::Little);
    assert_eq!(le.decode::<i32>().unwrap(), -123_456);

    let mut be = Decoder::new(&bytes[6..], Endian::Big);
    assert_eq!(be.decode::<f32>().unwrap().to_bits(), std::f32::consts::PI.to_bits());
    let mut le = Decoder::new(&bytes[10..], Endian::Little);
    assert_eq!(le.decode::<f64>().unwrap().to_bits(), std::f64::consts::E.to_bits());
    assert_eq!(le.decode::<i8>().unwrap(), -1);
    assert!(le.is_exhausted());
}

#[test]
fn test_nested_composite_consumes_buffer_exactly() {
    let mut bytes = vec![7u8];
    for v in [1i32, -2, 3, -4] {
        bytes.extend(v.to_be_bytes());
    }
    bytes.extend(1.5f64.to_be_bytes());
    assert_eq!(bytes.len(), length_of::<Segment>());

    let mut decoder = Decoder::network(&bytes[..]);
    let segment: Segment = decoder.decode().unwrap();
    assert_eq!(
        segment,
        Segment {
            kind: 7,
            from: Point { x: 1, y: -2 },
            to: Point { x: 3, y: -4 },
            weight: 1.5,
        }
    );
    assert!(decoder.is_exhausted());
    assert_eq!(decoder.position(), bytes.len());
}

#[test]
fn test_tuple_decodes_in_order() {
    let bytes = [0x01, 0x00, 0x02, 0xAA, 0xBB];
    let parsed: (u8, u16, [u8; 2]) = decode(&bytes, Endian::Big).unwrap();
    assert_eq!(parsed, (1, 2, [0xAA, 0xBB]));
}

#[test]
fn test_padding_is_skipped() {
    let bytes = [0x00, 0x02, 0xEE, 0x80];
    let v: Versioned = decode(&bytes, Endian::Big).unwrap();
    assert_eq!(v, Versioned { version: 2, flags: 0x80 });
}

#[test]
fn test_owned_array_is_a_copy() {
    let mut bytes = [1u8, 2, 3];
    let copy: [u8; 3] = decode(&bytes, Endian::Big).unwrap();
    bytes[0] = 9;
    assert_eq!(copy, [1, 2, 3]);
    assert_eq!(bytes[0], 9);
}

#[test]
fn test_view_borrows_buffer_and_outlives_decoder() {
    let bytes = [0x00, 0x05, b'd', b'a', b't', b'a', 0xFF];
    let record = {
        let mut decoder = Decoder::network(&bytes[..]);
        decoder.decode::<Record<'_>>().unwrap()
    };
    assert_eq!(record.tag, 5);
    assert_eq!(record.body, b"data");
    assert_eq!(record.body.as_ptr(), bytes[2..].as_ptr());
}

#[test]
fn test_read_only_view_from_mutable_buffer() {
    let mut bytes = [0x00, 0x01, 1, 2, 3, 4];
    let mut decoder = Decoder::network(&mut bytes[..]);
    let record: Record<'_> = decoder.decode().unwrap();
    assert_eq!(record.body, &[1, 2, 3, 4]);
}

#[test]
fn test_mutable_view_writes_into_buffer() {
    let mut bytes = [0x00, 0x01, 0, 0, 0, 0, 0xAB];
    {
        let mut decoder = Decoder::network(&mut bytes[..]);
        let patch: Patch<'_> = decoder.decode().unwrap();
        assert_eq!(patch.tag, 1);
        patch.body.copy_from_slice(b"abcd");
        decoder.unread_mut()[0] = 0xCD;
    }
    assert_eq!(bytes, [0x00, 0x01, b'a', b'b', b'c', b'd', 0xCD]);
}

// ── Facade ────────────────────────────────────────────────────────────────

#[test]
fn test_checked_decode_fails_without_advancing() {
    let bytes = [0u8; 10];
    let mut decoder = Decoder::network(&bytes[..]);
    decoder.skip(3).unwrap();

    let result = decoder.decode::<Segment>();
    assert_eq!(
        result.unwrap_err(),
        Error::InsufficientData {
            required: 25,
            available: 7,
        }
    );
    assert_eq!(decoder.position(), 3);
    assert_eq!(decoder.remaining_len(), 7);
}

#[test]
fn test_unchecked_matches_checked_with_enough_data() {
    let bytes: Vec<u8> = (0u8..25).collect();
    let mut checked = Decoder::network(&bytes[..]);
    let mut unchecked = Decoder::network(&bytes[..]);
    assert_eq!(
        checked.decode::<Segment>().unwrap(),
        unchecked.decode_unchecked::<Segment>()
    );
    assert_eq!(checked.position(), unchecked.position());
}

#[test]
#[should_panic(expected = "read past end of buffer")]
fn test_unchecked_over_read_panics() {
    let bytes = [0u8; 3];
    let mut decoder = Decoder::network(&bytes[..]);
    decoder.decode_unchecked::<u32>();
}

#[test]
fn test_skip_then_decode_equals_decode_after_offset() {
    let bytes: Vec<u8> = (0u8..16).collect();
    for n in 0..=8 {
        let mut skipping = Decoder::network(&bytes[..]);
        skipping.skip(n).unwrap();
        let mut offset = Decoder::network(&bytes[n..]);
        assert_eq!(skipping.decode::<Point>().unwrap(), offset.decode::<Point>().unwrap());
        assert_eq!(skipping.unread(), offset.unread());
    }
}

#[test]
fn test_skip_for_uses_static_length() {
    let bytes: Vec<u8> = (0u8..10).collect();
    let mut decoder = Decoder::network(&bytes[..]);
    decoder.skip_for::<Point>().unwrap();
    assert_eq!(decoder.unread(), [8, 9]);
    assert_eq!(
        decoder.skip_for::<Point>(),
        Err(Error::InsufficientData {
            required: 8,
            available: 2,
        })
    );
    assert_eq!(decoder.remaining_len(), 2);
}

#[test]
fn test_skip_too_far_fails() {
    let bytes = [0u8; 4];
    let mut decoder = Decoder::network(&bytes[..]);
    assert_eq!(
        decoder.skip(5),
        Err(Error::InsufficientData {
            required: 5,
            available: 4,
        })
    );
    assert_eq!(decoder.position(), 0);
}

#[test]
fn test_exhaustion_is_not_an_error() {
    let bytes = [1u8, 2];
    let mut decoder = Decoder::network(&bytes[..]);
    assert_eq!(decoder.decode::<u16>().unwrap(), 0x0102);
    assert!(decoder.is_exhausted());
    assert!(decoder.unread().is_empty());
    decoder.skip(0).unwrap();
    assert_eq!(decoder.decode::<[u8; 0]>().unwrap(), []);
    assert!(decoder.decode::<u8>().is_err());
}

#[test]
fn test_unread_up_to_does_not_advance() {
    let bytes = [1u8, 2, 3, 4, 5];
    let mut decoder = Decoder::network(&bytes[..]);
    decoder.skip(1).unwrap();
    assert_eq!(decoder.unread_up_to(2), [2, 3]);
    assert_eq!(decoder.unread_up_to(100), [2, 3, 4, 5]);
    assert_eq!(decoder.unread_up_to(0), []);
    assert_eq!(decoder.remaining_len(), 4);
    assert_eq!(decoder.into_unread(), [2, 3, 4, 5]);
}

#[test]
fn test_decoder_length_of_matches_free_function() {
    let bytes = [0u8; 1];
    let decoder = Decoder::network(&bytes[..]);
    assert_eq!(decoder.length_of::<Segment>(), length_of::<Segment>());
    assert_eq!(decoder.endian(), Endian::Big);
}

#[test]
fn test_error_display() {
    let err = Error::InsufficientData {
        required: 20,
        available: 10,
    };
    assert_eq!(
        err.to_string(),
        "insufficient data: required bytes: 20, available bytes: 10"
    );
}

#[test]
fn test_signed_byte_arrays() {
    assert_eq!(length_of::<[i8; 3]>(), 3);
    assert_eq!(<&[i8; 3] as Layout>::SHAPE, Shape::Array);

    let bytes = [0x01, 0xFF, 0x80, 0x7F];
    let (owned, rest): ([i8; 2], _) = decode_partial(&bytes, Endian::Little).unwrap();
    assert_eq!(owned, [1, -1]);

    let view: &[i8; 2] = decode(rest, Endian::Big).unwrap();
    assert_eq!(view, &[i8::MIN, i8::MAX]);
    assert_eq!(view.as_ptr().cast::<u8>(), bytes[2..].as_ptr());
}

#[test]
fn test_signed_mutable_view_writes_into_buffer() {
    let mut bytes = [0u8; 3];
    {
        let mut decoder = Decoder::network(&mut bytes[..]);
        decoder.skip(1).unwrap();
        let levels: &mut [i8; 2] = decoder.decode().unwrap();
        *levels = [-2, 3];
    }
    assert_eq!(bytes, [0x00, 0xFE, 0x03]);
}
