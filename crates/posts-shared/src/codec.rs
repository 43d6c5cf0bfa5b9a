//! JSON codec for post payloads.

use std::io::{Read, Write};

use thiserror::Error;

use crate::dto::{PostRequest, PostResponse};

/// Codec failures.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Unable to decode post: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Unable to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Write a list of posts as a JSON array.
pub fn encode_posts<W: Write>(posts: &[PostResponse], writer: W) -> Result<(), CodecError> {
    serde_json::to_writer(writer, posts).map_err(CodecError::Encode)
}

/// Write a single post as a JSON object.
pub fn encode_post<W: Write>(post: &PostResponse, writer: W) -> Result<(), CodecError> {
    serde_json::to_writer(writer, post).map_err(CodecError::Encode)
}

/// Read one post request from a JSON document. Trailing data is rejected.
pub fn decode_post<R: Read>(reader: R) -> Result<PostRequest, CodecError> {
    serde_json::from_reader(reader).map_err(CodecError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reads_full_post() {
        let body = br#"{"title":"A","body":"b","author":{"fullName":"F","userName":"u","email":"e@x.io"}}"#;
        let req = decode_post(&body[..]).unwrap();

        assert_eq!(req.title, "A");
        assert_eq!(req.body, "b");
        assert_eq!(req.author.email, "e@x.io");
    }

    #[test]
    fn decode_rejects_malformed_json() {
        let err = decode_post(&b"{\"title\":"[..]).unwrap_err();
        assert!(matches!(err, CodecError::Decode(_)));
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(decode_post(&b"[1,2,3]"[..]).is_err());
        assert!(decode_post(&br#"{"title":42}"#[..]).is_err());
    }

    #[test]
    fn encode_empty_list_is_empty_array() {
        let mut out = Vec::new();
        encode_posts(&[], &mut out).unwrap();
        assert_eq!(out, b"[]");
    }
}
