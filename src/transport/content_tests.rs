//! Tests for response body decoding.

use serde_json::json;

use super::ResponseContent;

const OK: http::StatusCode = http::StatusCode::OK;

mod json_bodies {
    use super::*;

    #[test]
    fn object_body_decodes_to_json() {
        let body = br#"{"group": {"id": "G1"}}"#;
        let content = ResponseContent::decode(body, OK);

        assert_eq!(content, ResponseContent::Json(json!({"group": {"id": "G1"}})));
    }

    #[test]
    fn array_body_decodes_to_json() {
        let content = ResponseContent::decode(br#"[{"name": "a"}]"#, OK);

        assert_eq!(content.as_json(), Some(&json!([{"name": "a"}])));
    }

    #[test]
    fn json_keeps_key_order() {
        let content = ResponseContent::decode(br#"{"z": 1, "a": 2}"#, OK);

        assert_eq!(content.to_string(), r#"{"z":1,"a":2}"#);
    }
}

mod html_bodies {
    use super::*;

    #[test]
    fn extracts_body_and_strips_noise() {
        let page = b"<html><head><title>x</title></head>\n<body>\n<h1>401 Unauthorized</h1>\nThis server could not verify.<br />\n</body></html>";
        let content = ResponseContent::decode(page, http::StatusCode::UNAUTHORIZED);

        assert_eq!(
            content,
            ResponseContent::Degraded(
                "401 Unauthorized<br />This server could not verify.".to_string()
            )
        );
    }

    #[test]
    fn body_spanning_lines_is_found() {
        let page = b"<body>first\r\nsecond</body>";
        let content = ResponseContent::decode(page, http::StatusCode::BAD_GATEWAY);

        assert_eq!(content, ResponseContent::Degraded("firstsecond".to_string()));
    }

    #[test]
    fn whitespace_runs_are_removed_in_pairs() {
        let content = ResponseContent::decode(b"<body>a  b   c</body>", OK);

        assert_eq!(content, ResponseContent::Degraded("ab c".to_string()));
    }

    #[test]
    fn only_first_body_is_used() {
        let content = ResponseContent::decode(b"<body>one</body><body>two</body>", OK);

        assert_eq!(content, ResponseContent::Degraded("one".to_string()));
    }

    #[test]
    fn degraded_content_has_no_json() {
        let content = ResponseContent::decode(b"<body>x</body>", OK);

        assert!(content.as_json().is_none());
        assert_eq!(content.to_string(), "x");
    }
}

mod empty_bodies {
    use super::*;

    #[test]
    fn empty_body_reports_status() {
        let content = ResponseContent::decode(b"", http::StatusCode::SERVICE_UNAVAILABLE);

        assert_eq!(
            content,
            ResponseContent::Degraded("No content received. Status Code: 503".to_string())
        );
    }

    #[test]
    fn plain_text_without_body_tag_reports_status() {
        let content = ResponseContent::decode(b"upstream timed out", http::StatusCode::GATEWAY_TIMEOUT);

        assert_eq!(
            content.to_string(),
            "No content received. Status Code: 504"
        );
    }

    #[test]
    fn empty_body_element_reports_status() {
        let content = ResponseContent::decode(b"<body></body>", http::StatusCode::NOT_FOUND);

        assert_eq!(
            content.to_string(),
            "No content received. Status Code: 404"
        );
    }
}
