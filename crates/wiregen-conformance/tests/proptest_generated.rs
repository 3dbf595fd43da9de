//! Property-based tests for generated codecs
//!
//! Every generated record must decode back to the value it was encoded from,
//! and decoding arbitrary bytes must fail cleanly instead of panicking.

use proptest::collection::{hash_map, vec};
use proptest::option;
use proptest::prelude::*;
use wiregen_conformance::showcase::{Color, Containers, Node, Point, Scalars, Shape, Tree};
use wiregen_conformance::{Date, Guid, Record, profile_v1, profile_v2};

fn point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point { x, y })
}

fn color() -> impl Strategy<Value = Color> {
    prop_oneof![
        Just(Color::RED),
        Just(Color::GREEN),
        Just(Color::NAVY),
        any::<u32>().prop_map(Color),
    ]
}

fn scalars() -> impl Strategy<Value = Scalars> {
    (
        (any::<bool>(), any::<u8>(), any::<u16>(), any::<i16>()),
        (any::<u32>(), any::<i32>(), any::<u64>(), any::<i64>()),
        (-1e30f32..1e30f32, -1e300f64..1e300f64, ".{0,32}"),
        (any::<u128>(), any::<u64>()),
    )
        .prop_map(
            |(
                (flag, small, u16_value, i16_value),
                (u32_value, i32_value, u64_value, i64_value),
                (f32_value, f64_value, text),
                (id, when),
            )| Scalars {
                flag,
                small,
                u16_value,
                i16_value,
                u32_value,
                i32_value,
                u64_value,
                i64_value,
                f32_value,
                f64_value,
                text,
                id: Guid::from_u128(id),
                when: Date::from_wire(when),
            },
        )
}

fn containers() -> impl Strategy<Value = Containers> {
    (
        vec(any::<u8>(), 0..64),
        vec(-1e6f32..1e6f32, 0..16),
        vec(-1e6f64..1e6f64, 0..16),
        vec(vec(any::<i32>(), 0..4), 0..4),
        vec("[a-z]{0,8}", 0..8),
        vec(color(), 0..8),
        hash_map("[a-z]{1,8}", any::<i32>(), 0..8),
        hash_map(color(), vec(point(), 0..4), 0..4),
    )
        .prop_map(
            |(bytes, floats, doubles, grid, names, colors, lookup, by_color)| Containers {
                bytes,
                floats,
                doubles,
                grid,
                names,
                colors,
                lookup,
                by_color,
            },
        )
}

fn shape() -> impl Strategy<Value = Shape> {
    (
        option::of(point()),
        option::of(color()),
        option::of(".{0,16}"),
        option::of(vec(point(), 0..8)),
        option::of(hash_map("[a-z]{1,4}", "[a-z]{0,4}", 0..4)),
    )
        .prop_map(|(origin, color, label, points, attributes)| Shape {
            origin,
            color,
            label,
            points,
            legacy_area: None,
            attributes,
        })
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = option::of("[a-z]{0,8}").prop_map(|label| Node {
        label,
        children: None,
    });
    leaf.prop_recursive(3, 16, 4, |inner| {
        (option::of("[a-z]{0,8}"), option::of(vec(inner, 0..4)))
            .prop_map(|(label, children)| Node { label, children })
    })
}

fn tree() -> impl Strategy<Value = Tree> {
    let leaf = option::of("[a-z]{0,8}").prop_map(|label| Tree {
        label,
        ..Tree::default()
    });
    leaf.prop_recursive(4, 32, 2, |inner| {
        (
            option::of("[a-z]{0,8}"),
            option::of(inner.clone().prop_map(Box::new)),
            option::of(inner.prop_map(Box::new)),
        )
            .prop_map(|(label, left, right)| Tree { label, left, right })
    })
}

proptest! {
    /// Property: struct fields survive a round trip bit for bit
    #[test]
    fn proptest_scalars_roundtrip(value in scalars()) {
        let bytes = value.encode();

        prop_assert_eq!(Scalars::decode(&bytes).unwrap(), value);
    }

    /// Property: nested arrays and maps survive a round trip
    #[test]
    fn proptest_containers_roundtrip(value in containers()) {
        prop_assert_eq!(Containers::decode(value.encode()).unwrap(), value);
    }

    /// Property: message length prefix always matches the body that follows it
    #[test]
    fn proptest_shape_length_prefix(value in shape()) {
        let bytes = value.encode();

        let length = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        prop_assert_eq!(length, bytes.len() - 4);
        prop_assert_eq!(bytes.last().copied(), Some(0));
        prop_assert_eq!(Shape::decode(&bytes).unwrap(), value);
    }

    /// Property: recursive messages round trip at any depth
    #[test]
    fn proptest_node_roundtrip(value in node()) {
        prop_assert_eq!(Node::decode(value.encode()).unwrap(), value);
    }

    /// Property: boxed self-referencing fields round trip at any depth
    #[test]
    fn proptest_tree_roundtrip(value in tree()) {
        prop_assert_eq!(Tree::decode(value.encode()).unwrap(), value);
    }

    /// Property: an older reader keeps every field that precedes the first unknown tag
    #[test]
    fn proptest_profile_forward_compatible(
        id in option::of(any::<u32>()),
        name in option::of("[a-z]{0,12}"),
        avatar in option::of(vec(any::<u8>(), 0..32)),
        email in option::of("[a-z@.]{0,12}"),
    ) {
        let newer = profile_v2::Profile { id, name: name.clone(), avatar: avatar.clone(), email: email.clone() };

        let older = profile_v1::Profile::decode(newer.encode()).unwrap();

        prop_assert_eq!(older.id, id);
        prop_assert_eq!(older.name, name);
        let expected_email = if avatar.is_some() { None } else { email };
        prop_assert_eq!(older.email, expected_email);
    }

    /// Property: decoding arbitrary bytes never panics
    #[test]
    fn proptest_decode_arbitrary_bytes(bytes in vec(any::<u8>(), 0..128)) {
        let _ = Shape::decode(&bytes);
        let _ = Containers::decode(&bytes);
        let _ = Node::decode(&bytes);
        let _ = Tree::decode(&bytes);
        let _ = profile_v1::Envelope::decode(&bytes);
    }
}
