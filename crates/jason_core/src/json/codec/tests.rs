use serde_json::{Value, json};

use crate::json::{JsonAccess, JsonError, decode, decode_object, decode_object_array, encode, encode_pretty};

#[test]
fn decodes_any_document() {
	assert_eq!(decode(b"[1, \"home\"]").expect("array decodes"), json!([1, "home"]));
	assert_eq!(decode(b"null").expect("null decodes"), Value::Null);
}

#[test]
fn malformed_input_is_a_parse_error() {
	let err = decode(b"{\"a\": ").expect_err("truncated input fails");
	assert!(matches!(err, JsonError::Parse(_)));

	let err = decode(&[0xff, 0xfe, b'{', b'}']).expect_err("bad utf8 fails");
	assert!(matches!(err, JsonError::Parse(_)));
}

#[test]
fn decode_object_requires_object_root() {
	let object = decode_object(br#"{"n": 1}"#).expect("object decodes");
	assert_eq!(object.value_for::<i64>("n").expect("n resolves"), 1);

	let err = decode_object(b"[1]").expect_err("array root rejected");
	assert!(matches!(err, JsonError::TypeMismatch { ref expected, ref found, .. } if expected == "object" && found == "array"));
}

#[test]
fn decode_object_array_checks_every_element() {
	let items = decode_object_array(br#"[{"n": 1}, {"n": 2}]"#).expect("objects decode");
	assert_eq!(items.len(), 2);

	let err = decode_object_array(br#"[{"n": 1}, 2]"#).expect_err("number element rejected");
	assert!(matches!(err, JsonError::TypeMismatch { index: Some(1), .. }));

	let err = decode_object_array(br#"{"n": 1}"#).expect_err("object root rejected");
	assert!(err.is_type_mismatch());
}

#[test]
fn encode_then_decode_preserves_structure() {
	let tree = decode(br#"{"list": [{"str": "hello", "n": 1}, {"str": "world", "n": 2.5}], "flag": false, "none": null}"#).expect("tree decodes");
	let bytes = encode(&tree).expect("tree encodes");
	assert_eq!(decode(&bytes).expect("bytes decode"), tree);

	let pretty = encode_pretty(&tree).expect("tree encodes pretty");
	assert!(pretty.contains(&b'\n'));
	assert_eq!(decode(&pretty).expect("pretty bytes decode"), tree);
}

#[test]
fn encodes_object_slices() {
	let items = decode_object_array(br#"[{"str": "hello"}, {"str": "world"}]"#).expect("objects decode");
	let bytes = encode(items.as_slice()).expect("slice encodes");
	let again = decode_object_array(&bytes).expect("slice decodes");
	assert_eq!(again[1].value_for::<String>("str").expect("str resolves"), "world");
}
