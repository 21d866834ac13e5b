use crate::converter::SpanConverter;
use crate::error::SerializationError;
use bytes::Bytes;

/// Converts a batch with `converter` and encodes the result as compact JSON.
pub(crate) fn serialize_trace<C, I>(converter: &C, spans: I) -> Result<Bytes, SerializationError>
where
    C: SpanConverter,
    I: IntoIterator<Item = C::Span>,
{
    let converted = converter.convert(spans)?;
    let encoded = serde_json::to_vec(&converted)?;
    Ok(Bytes::from(encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    #[derive(Debug)]
    struct JsonConverter;

    impl SpanConverter for JsonConverter {
        type Span = (&'static str, u64);
        type Output = Vec<Value>;

        fn convert<I>(&self, spans: I) -> Result<Self::Output, SerializationError>
        where
            I: IntoIterator<Item = Self::Span>,
        {
            Ok(spans
                .into_iter()
                .map(|(name, duration)| json!({ "n": name, "d": duration }))
                .collect())
        }
    }

    #[derive(Debug)]
    struct RejectingConverter;

    impl SpanConverter for RejectingConverter {
        type Span = u64;
        type Output = Vec<u64>;

        fn convert<I>(&self, _spans: I) -> Result<Self::Output, SerializationError>
        where
            I: IntoIterator<Item = Self::Span>,
        {
            Err(SerializationError::conversion("invalid value"))
        }
    }

    // Maps keyed by byte vectors have no JSON representation.
    #[derive(Debug)]
    struct BinaryKeyConverter;

    impl SpanConverter for BinaryKeyConverter {
        type Span = u64;
        type Output = BTreeMap<Vec<u8>, u64>;

        fn convert<I>(&self, spans: I) -> Result<Self::Output, SerializationError>
        where
            I: IntoIterator<Item = Self::Span>,
        {
            Ok(spans
                .into_iter()
                .map(|id| (id.to_be_bytes().to_vec(), id))
                .collect())
        }
    }

    #[test]
    fn encodes_converted_batch_as_compact_json() {
        let payload = serialize_trace(&JsonConverter, vec![("a", 1), ("b", 2)]).unwrap();
        assert_eq!(&payload[..], br#"[{"d":1,"n":"a"},{"d":2,"n":"b"}]"#);
    }

    #[test]
    fn preserves_batch_order() {
        let spans = (0..16).map(|i| ("span", i));
        let payload = serialize_trace(&JsonConverter, spans).unwrap();
        let decoded: Vec<Value> = serde_json::from_slice(&payload).unwrap();
        let durations: Vec<u64> = decoded
            .iter()
            .map(|v| v["d"].as_u64().unwrap())
            .collect();
        assert_eq!(durations, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn empty_batch_is_still_a_payload() {
        let payload = serialize_trace(&JsonConverter, Vec::new()).unwrap();
        assert_eq!(&payload[..], b"[]");
    }

    #[test]
    fn conversion_error_is_returned_unchanged() {
        let err = serialize_trace(&RejectingConverter, vec![1]).unwrap_err();
        assert!(matches!(err, SerializationError::Conversion(ref msg) if msg == "invalid value"));
    }

    #[test]
    fn unencodable_output_is_an_encode_error() {
        let err = serialize_trace(&BinaryKeyConverter, vec![7]).unwrap_err();
        assert!(matches!(err, SerializationError::Encode(_)));
    }
}
