//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod send_text;

pub use send_text::{SendTextOutcome, decode_send_text_json_response, encode_send_text_form};
