use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::common::{Cmd, Payload, Request};
use crate::Result;

/// Builds a serialized `create` request.
///
/// The value is base64-encoded (standard alphabet, padded) before being
/// embedded in the payload.
pub fn build_create(request_id: u64, db_uuid: &str, key: &str, value: &str) -> Result<String> {
    let payload = Payload::with_value(key, STANDARD.encode(value.as_bytes()));
    serialize(Request::new(request_id, db_uuid, Cmd::Create, payload))
}

/// Builds a serialized `read` request. The payload carries only the key.
pub fn build_read(request_id: u64, db_uuid: &str, key: &str) -> Result<String> {
    serialize(Request::new(
        request_id,
        db_uuid,
        Cmd::Read,
        Payload::key_only(key),
    ))
}

/// Builds a serialized `update` request.
///
/// Structurally identical to [`build_create`] apart from the command kind.
pub fn build_update(request_id: u64, db_uuid: &str, key: &str, value: &str) -> Result<String> {
    let payload = Payload::with_value(key, STANDARD.encode(value.as_bytes()));
    serialize(Request::new(request_id, db_uuid, Cmd::Update, payload))
}

/// Builds a serialized `delete` request. The payload carries only the key.
pub fn build_delete(request_id: u64, db_uuid: &str, key: &str) -> Result<String> {
    serialize(Request::new(
        request_id,
        db_uuid,
        Cmd::Delete,
        Payload::key_only(key),
    ))
}

fn serialize(request: Request) -> Result<String> {
    Ok(serde_json::to_string(&request)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_matches_known_wire_text() {
        let json = build_create(0, "me", "key", "value").unwrap();
        assert_eq!(
            json,
            r#"{"bzn-api":"crud","db_uuid":"me","cmd":"create","request-id":0,"data":{"key":"key","value":"dmFsdWU="}}"#
        );
    }

    #[test]
    fn read_matches_known_wire_text() {
        let json = build_read(1, "me", "key").unwrap();
        assert_eq!(
            json,
            r#"{"bzn-api":"crud","db_uuid":"me","cmd":"read","request-id":1,"data":{"key":"key"}}"#
        );
    }

    #[test]
    fn create_value_round_trips_through_base64() {
        let json = build_create(42, "uuid", "some-key", "héllo wörld").unwrap();
        let req: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(req.cmd, Cmd::Create);
        assert_eq!(req.data.key, "some-key");
        let decoded = STANDARD.decode(req.data.value.as_deref().unwrap()).unwrap();
        assert_eq!(decoded, "héllo wörld".as_bytes());
    }

    #[test]
    fn update_returns_serialized_text_like_the_others() {
        let json = build_update(2, "me", "key", "value0").unwrap();
        let req: Request = serde_json::from_str(&json).unwrap();
        assert_eq!(req.cmd, Cmd::Update);
        assert_eq!(req.request_id, 2);
        assert_eq!(req.data.value.as_deref(), Some("dmFsdWUw"));
    }

    #[test]
    fn read_and_delete_omit_value_field() {
        for json in [
            build_read(1, "me", "key").unwrap(),
            build_delete(3, "me", "key").unwrap(),
        ] {
            assert!(!json.contains("\"value\""));
            let req: Request = serde_json::from_str(&json).unwrap();
            assert_eq!(req.data.value, None);
        }
    }

    #[test]
    fn builders_are_deterministic() {
        assert_eq!(
            build_create(5, "db", "k", "v").unwrap(),
            build_create(5, "db", "k", "v").unwrap()
        );
        assert_eq!(
            build_delete(5, "db", "k").unwrap(),
            build_delete(5, "db", "k").unwrap()
        );
    }

    #[test]
    fn reserialization_is_a_fixed_point() {
        let originals = [
            build_create(0, "me", "key", "value").unwrap(),
            build_read(1, "me", "key").unwrap(),
            build_update(2, "me", "key", "value0").unwrap(),
            build_delete(3, "me", "key").unwrap(),
        ];
        for json in originals {
            let req: Request = serde_json::from_str(&json).unwrap();
            assert_eq!(serde_json::to_string(&req).unwrap(), json);
        }
    }
}
