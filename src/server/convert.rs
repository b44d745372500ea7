//! Conversions between wordvec native types and protobuf types.
//!
//! Status mapping runs in both directions: the service adapter turns
//! [`WordVecError`] into [`tonic::Status`], the client turns it back.

use crate::error::WordVecError;
use crate::{VectorQuery, VectorResult};

use super::proto;

// =============================================================================
// Messages
// =============================================================================

impl From<&VectorQuery> for proto::GetVectorRequest {
    fn from(query: &VectorQuery) -> Self {
        proto::GetVectorRequest {
            word: query.word().to_string(),
        }
    }
}

impl TryFrom<proto::GetVectorRequest> for VectorQuery {
    type Error = WordVecError;

    fn try_from(p: proto::GetVectorRequest) -> Result<Self, Self::Error> {
        VectorQuery::new(p.word)
    }
}

impl From<VectorResult> for proto::GetVectorReply {
    fn from(result: VectorResult) -> Self {
        proto::GetVectorReply {
            word: result.word,
            index: result.index,
            features: result.features,
        }
    }
}

impl From<proto::GetVectorReply> for VectorResult {
    fn from(p: proto::GetVectorReply) -> Self {
        VectorResult {
            word: p.word,
            index: p.index,
            features: p.features,
        }
    }
}

// =============================================================================
// Status
// =============================================================================

impl From<tonic::Status> for WordVecError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::DeadlineExceeded => WordVecError::Timeout,
            tonic::Code::InvalidArgument => WordVecError::InvalidInput(status.message().to_string()),
            tonic::Code::Unavailable => WordVecError::Unavailable(status.message().to_string()),
            code => WordVecError::Rpc {
                code: format!("{code:?}"),
                message: status.message().to_string(),
            },
        }
    }
}

impl From<WordVecError> for tonic::Status {
    fn from(err: WordVecError) -> Self {
        let message = err.to_string();
        match err {
            WordVecError::MissingArgument(_) | WordVecError::InvalidInput(_) => {
                tonic::Status::invalid_argument(message)
            }
            WordVecError::Timeout => tonic::Status::deadline_exceeded(message),
            WordVecError::Unavailable(_) | WordVecError::Transport(_) => {
                tonic::Status::unavailable(message)
            }
            _ => tonic::Status::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_maps_field_for_field() {
        let reply = proto::GetVectorReply {
            word: "cat".into(),
            index: 42,
            features: vec![0.1, 0.2],
        };
        let result = VectorResult::from(reply);
        assert_eq!(result, VectorResult::new("cat", 42, vec![0.1, 0.2]));
    }

    #[test]
    fn empty_request_word_is_rejected() {
        let err = VectorQuery::try_from(proto::GetVectorRequest::default()).unwrap_err();
        assert!(matches!(err, WordVecError::MissingArgument(_)));
    }

    #[test]
    fn deadline_exceeded_becomes_timeout() {
        let err = WordVecError::from(tonic::Status::deadline_exceeded("slow"));
        assert!(matches!(err, WordVecError::Timeout));
        assert!(err.is_transport_failure());
    }

    #[test]
    fn unknown_code_keeps_message() {
        let err = WordVecError::from(tonic::Status::internal("boom"));
        match err {
            WordVecError::Rpc { code, message } => {
                assert_eq!(code, "Internal");
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_argument_is_invalid_argument_status() {
        let status = tonic::Status::from(WordVecError::MissingArgument(
            crate::error::Argument::Word,
        ));
        assert_eq!(status.code(), tonic::Code::InvalidArgument);
        assert_eq!(status.message(), "missing word to query");
    }
}
